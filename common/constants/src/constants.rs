#![no_std]

/// Exp scale: every price mantissa and ratio is a value scaled by 10^18.
pub const WAD: u128 = 1_000_000_000_000_000_000; // Represents 1.0
pub const HALF_WAD: u128 = WAD / 2;

/// Default maximum relative swing of an accepted price from its reference (10%).
pub const DEFAULT_MAX_SWING: u128 = 100_000_000_000_000_000;

/// Numerator used to invert a reader quote into an Exp price (10^36).
pub const DOUBLE_WAD: u128 = WAD * WAD;

/// Width of the integer word every mantissa must fit in.
pub const UINT256_BYTES: usize = 32;

/// Number of (asset, reader) bindings accepted at construction.
pub const MAX_READERS: usize = 2;
