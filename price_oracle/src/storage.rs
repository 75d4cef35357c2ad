multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::Anchor;

#[multiversx_sc::module]
pub trait StorageModule {
    /// Principal allowed to submit prices. Fixed at deploy.
    #[view(getPoster)]
    #[storage_mapper("poster")]
    fn poster(&self) -> SingleValueMapper<ManagedAddress>;

    /// Principal allowed to override anchors and toggle the pause flag.
    #[view(getAnchorAdmin)]
    #[storage_mapper("anchor_admin")]
    fn anchor_admin(&self) -> SingleValueMapper<ManagedAddress>;

    /// Staged successor of the anchor admin, the zero address when none.
    #[view(getPendingAnchorAdmin)]
    #[storage_mapper("pending_anchor_admin")]
    fn pending_anchor_admin(&self) -> SingleValueMapper<ManagedAddress>;

    /// Maximum relative swing of an accepted price from its reference, as an Exp ratio.
    #[view(getMaxSwing)]
    #[storage_mapper("max_swing")]
    fn max_swing(&self) -> SingleValueMapper<BigUint>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    /// Downstream consumer notified of every accepted price, the zero address when none.
    #[view(getPriceConsumer)]
    #[storage_mapper("price_consumer")]
    fn price_consumer(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("anchors")]
    fn anchors(&self, asset: &ManagedAddress) -> SingleValueMapper<Anchor<Self::Api>>;

    /// One-shot override of the anchor for the next accepted price, zero when none.
    #[view(getPendingAnchor)]
    #[storage_mapper("pending_anchors")]
    fn pending_anchors(&self, asset: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Last accepted price, served by `getPrice` for assets without a reader.
    #[view(getStoredPrice)]
    #[storage_mapper("asset_prices")]
    fn asset_prices(&self, asset: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("readers")]
    fn readers(&self, asset: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("reader_assets")]
    fn reader_assets(&self, slot: usize) -> SingleValueMapper<ManagedAddress>;

    fn get_anchor(&self, asset: &ManagedAddress) -> Anchor<Self::Api> {
        let mapper = self.anchors(asset);
        if mapper.is_empty() {
            return Anchor::default();
        }

        mapper.get()
    }

    fn is_reader_asset(&self, asset: &ManagedAddress) -> bool {
        !self.readers(asset).is_empty()
    }
}
