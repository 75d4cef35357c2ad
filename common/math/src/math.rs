#![no_std]

use common_constants::{HALF_WAD, UINT256_BYTES, WAD};
use common_structs::{CappedPrice, MathError};

multiversx_sc::imports!();

/// Checked Exp arithmetic over the 256-bit mantissa range.
///
/// `BigUint` never overflows on its own, so every operation that can leave the
/// range is checked explicitly against `max_uint`. Callers get a `MathError`
/// instead of a revert and decide how to report it.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn max_uint(&self) -> BigUint {
        BigUint::from_bytes_be(&[0xffu8; UINT256_BYTES])
    }

    fn exp_scale(&self) -> BigUint {
        BigUint::from(WAD)
    }

    fn require_in_range(&self, value: BigUint) -> Result<BigUint, MathError> {
        if value > self.max_uint() {
            return Err(MathError::IntegerOverflow);
        }

        Ok(value)
    }

    fn checked_add(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, MathError> {
        self.require_in_range(a + b)
    }

    fn checked_sub(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, MathError> {
        if b > a {
            return Err(MathError::IntegerUnderflow);
        }

        Ok(a - b)
    }

    fn checked_mul(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, MathError> {
        self.require_in_range(a * b)
    }

    /// Multiplies two Exp values, rounding half up at the 18th decimal.
    fn mul_exp(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, MathError> {
        let double_scaled_product = self.checked_mul(a, b)?;
        let with_half_scale =
            self.checked_add(&double_scaled_product, &BigUint::from(HALF_WAD))?;

        Ok(with_half_scale / self.exp_scale())
    }

    /// Divides two Exp values, truncating.
    fn div_exp(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, MathError> {
        if *b == 0u64 {
            return Err(MathError::DivisionByZero);
        }

        let scaled_numerator = self.checked_mul(a, &self.exp_scale())?;

        Ok(scaled_numerator / b)
    }

    /// Relative distance of `price` from `anchor`: `|price - anchor| / anchor`, as an Exp ratio.
    fn calculate_swing(&self, anchor: &BigUint, price: &BigUint) -> Result<BigUint, MathError> {
        let anchor = self.require_in_range(anchor.clone())?;
        let price = self.require_in_range(price.clone())?;

        let numerator = if price > anchor {
            self.checked_sub(&price, &anchor)?
        } else {
            self.checked_sub(&anchor, &price)?
        };

        self.div_exp(&numerator, &anchor)
    }

    /// Clamps `price` into `[anchor * (1 - max_swing), anchor * (1 + max_swing)]`.
    /// A price sitting exactly on a bound is returned as is.
    fn cap_to_max(
        &self,
        anchor: &BigUint,
        price: &BigUint,
        max_swing: &BigUint,
    ) -> Result<CappedPrice<Self::Api>, MathError> {
        let one = self.exp_scale();

        let one_plus_max_swing = self.checked_add(&one, max_swing)?;
        let upper_bound = self.mul_exp(anchor, &one_plus_max_swing)?;

        let one_minus_max_swing = self.checked_sub(&one, max_swing)?;
        let lower_bound = self.mul_exp(anchor, &one_minus_max_swing)?;

        if price < &lower_bound {
            Ok(CappedPrice {
                was_capped: true,
                price: lower_bound,
            })
        } else if price > &upper_bound {
            Ok(CappedPrice {
                was_capped: true,
                price: upper_bound,
            })
        } else {
            Ok(CappedPrice {
                was_capped: false,
                price: price.clone(),
            })
        }
    }
}
