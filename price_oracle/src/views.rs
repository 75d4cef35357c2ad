multiversx_sc::imports!();

use common_constants::{DOUBLE_WAD, MAX_READERS};
use common_errors::ERROR_INVALID_READER_SLOT;
use common_proxies::proxy_price_reader;
use common_structs::Anchor;

use crate::storage;

#[multiversx_sc::module]
pub trait ViewsModule: storage::StorageModule + common_math::SharedMathModule {
    /// Returns the price of `asset` as an Exp mantissa, or zero when none is known.
    /// Zero is also returned for every asset while the oracle is paused.
    /// Assets bound to a reader are priced as the inverse of the reader value.
    ///
    /// The reader is read with a synchronous call, which can not be caught:
    /// a reader that reverts on `peek` reverts this view as well.
    #[view(getPrice)]
    fn get_price(&self, asset: ManagedAddress) -> BigUint {
        if self.paused().get() {
            return BigUint::zero();
        }

        let reader = self.readers(&asset);
        if !reader.is_empty() {
            return self.read_inverted_price(&reader.get());
        }

        self.asset_prices(&asset).get()
    }

    /// Inverts the reader value into the asset price: `1e36 / value`.
    /// An unset, zero or out of range reader value yields zero.
    fn read_inverted_price(&self, reader: &ManagedAddress) -> BigUint {
        let (value, has_value) = self
            .tx()
            .to(reader)
            .typed(proxy_price_reader::PriceReaderProxy)
            .peek()
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple();

        if !has_value || value == 0u64 || self.require_in_range(value.clone()).is_err() {
            return BigUint::zero();
        }

        BigUint::from(DOUBLE_WAD) / value
    }

    #[view(getAnchor)]
    fn anchor(&self, asset: ManagedAddress) -> Anchor<Self::Api> {
        self.get_anchor(&asset)
    }

    /// Reader bound to `asset`, the zero address when the asset is priced by posting.
    #[view(getReader)]
    fn reader(&self, asset: ManagedAddress) -> ManagedAddress {
        let reader = self.readers(&asset);
        if reader.is_empty() {
            return ManagedAddress::zero();
        }

        reader.get()
    }

    #[view(getReaderAsset)]
    fn reader_asset(&self, slot: usize) -> ManagedAddress {
        require!(slot < MAX_READERS, ERROR_INVALID_READER_SLOT);

        self.reader_assets(slot).get()
    }
}
