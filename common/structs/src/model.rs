#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Failure of the checked Exp arithmetic.
/// Carried as the `detail` of an `oracle_failure` event when a swing or cap computation fails.
#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum MathError {
    NoError,
    IntegerOverflow,
    IntegerUnderflow,
    DivisionByZero,
}

impl MathError {
    pub fn code(self) -> u64 {
        self as u64
    }
}

/// Outcome code returned by every pricing and admin endpoint.
#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum OracleError {
    NoError,
    Unauthorized,
    FailedToSetPrice,
}

/// Identifies the exact gate or stage that produced a non-`NoError` outcome.
#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum OracleFailureInfo {
    AcceptAnchorAdminPendingAnchorAdminCheck,
    SetPausedOwnerCheck,
    SetPendingAnchorAdminOwnerCheck,
    SetPendingAnchorPermissionCheck,
    SetPriceCalculateSwing,
    SetPriceCapToMax,
    SetPriceMaxSwingCheck,
    SetPriceNoAnchorPriceOrInitialPriceZero,
    SetPricePermissionCheck,
    SetPriceIsReaderAsset,
    SetPricesParamValidation,
}

/// Last accepted reference price of an asset. Zero until the first accepted price.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct Anchor<M: ManagedTypeApi> {
    pub price_mantissa: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for Anchor<M> {
    fn default() -> Self {
        Anchor {
            price_mantissa: BigUint::zero(),
        }
    }
}

impl<M: ManagedTypeApi> Anchor<M> {
    pub fn new(price_mantissa: BigUint<M>) -> Self {
        Anchor { price_mantissa }
    }

    pub fn is_set(&self) -> bool {
        self.price_mantissa > 0u64
    }
}

/// Result of clamping a requested price into the allowed swing band.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CappedPrice<M: ManagedTypeApi> {
    pub was_capped: bool,
    pub price: BigUint<M>,
}

/// Payload of the `price_posted` event.
#[type_abi]
#[derive(TopEncode)]
pub struct PricePostedEvent<M: ManagedTypeApi> {
    pub previous_price_mantissa: BigUint<M>,
    pub requested_price_mantissa: BigUint<M>,
    pub new_price_mantissa: BigUint<M>,
}

/// Payload of the `capped_price_posted` event.
#[type_abi]
#[derive(TopEncode)]
pub struct CappedPricePostedEvent<M: ManagedTypeApi> {
    pub requested_price_mantissa: BigUint<M>,
    pub anchor_price_mantissa: BigUint<M>,
    pub capped_price_mantissa: BigUint<M>,
}
