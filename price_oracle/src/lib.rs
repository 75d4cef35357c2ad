#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod reporter;
pub mod setter;
pub mod storage;
pub mod views;

use common_errors::{ERROR_INVALID_POSTER, ERROR_READER_PAIR_MISMATCH};
use common_structs::{OracleError, OracleFailureInfo};

/// Anchored price oracle.
///
/// A single poster submits prices per asset. Each accepted price becomes the anchor
/// the next submission is bounded against, so a price can move at most `max_swing`
/// per posting. An anchor admin can stage a one-shot anchor override, hand over its
/// role in two steps and pause price reads. Up to two assets are priced by external
/// readers instead of postings.
///
/// Pricing and admin endpoints never revert on a rejected input: they log an
/// `oracle_failure` event and return the `OracleError` code.
#[multiversx_sc::contract]
pub trait PriceOracle:
    storage::StorageModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + reporter::ReporterModule
    + setter::PriceSetterModule
    + admin::AnchorAdminModule
    + views::ViewsModule
{
    /// The deployer becomes the anchor admin.
    /// Each reader pair is either fully set or fully zero.
    #[init]
    fn init(
        &self,
        poster: ManagedAddress,
        max_swing: BigUint,
        reader_asset_1: ManagedAddress,
        reader_1: ManagedAddress,
        reader_asset_2: ManagedAddress,
        reader_2: ManagedAddress,
        price_consumer: OptionalValue<ManagedAddress>,
    ) {
        require!(!poster.is_zero(), ERROR_INVALID_POSTER);

        self.poster().set(&poster);
        self.anchor_admin().set(self.blockchain().get_caller());
        self.pending_anchor_admin().set(ManagedAddress::zero());
        self.max_swing().set(&max_swing);

        let readers = [(reader_asset_1, reader_1), (reader_asset_2, reader_2)];
        for (slot, (reader_asset, reader)) in readers.into_iter().enumerate() {
            self.bind_reader(slot, reader_asset, reader);
        }

        let price_consumer = price_consumer.into_option().unwrap_or_else(ManagedAddress::zero);
        self.price_consumer().set(&price_consumer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Submits a price for one asset. Poster only.
    #[endpoint(setPrice)]
    fn set_price(&self, asset: ManagedAddress, requested_price: BigUint) -> OracleError {
        if !self.is_poster() {
            return self.fail_oracle(
                &asset,
                OracleError::Unauthorized,
                OracleFailureInfo::SetPricePermissionCheck,
            );
        }

        self.set_price_internal(&asset, &requested_price)
    }

    /// Submits prices for several assets at once. Poster only.
    ///
    /// Returns one code per asset, in order. A rejected entry does not undo the others.
    /// A permission or shape failure returns a single code and touches nothing.
    #[endpoint(setPrices)]
    fn set_prices(
        &self,
        assets: MultiValueManagedVecCounted<ManagedAddress>,
        requested_prices: MultiValueManagedVecCounted<BigUint>,
    ) -> MultiValueEncoded<OracleError> {
        let mut results = MultiValueEncoded::new();

        if !self.is_poster() {
            results.push(self.fail_oracle(
                &ManagedAddress::zero(),
                OracleError::Unauthorized,
                OracleFailureInfo::SetPricePermissionCheck,
            ));
            return results;
        }

        let assets = assets.into_vec();
        let requested_prices = requested_prices.into_vec();
        if assets.is_empty() || assets.len() != requested_prices.len() {
            results.push(self.fail_oracle(
                &ManagedAddress::zero(),
                OracleError::FailedToSetPrice,
                OracleFailureInfo::SetPricesParamValidation,
            ));
            return results;
        }

        for (asset, requested_price) in assets.iter().zip(requested_prices.iter()) {
            results.push(self.set_price_internal(&asset, &requested_price));
        }

        results
    }

    fn is_poster(&self) -> bool {
        self.blockchain().get_caller() == self.poster().get()
    }

    fn bind_reader(&self, slot: usize, reader_asset: ManagedAddress, reader: ManagedAddress) {
        require!(
            reader_asset.is_zero() == reader.is_zero(),
            ERROR_READER_PAIR_MISMATCH
        );

        self.reader_assets(slot).set(&reader_asset);
        if !reader_asset.is_zero() {
            self.readers(&reader_asset).set(&reader);
        }
    }
}
