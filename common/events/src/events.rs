#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    fn emit_price_posted_event(
        &self,
        asset: &ManagedAddress,
        previous_price: &BigUint,
        requested_price: &BigUint,
        new_price: &BigUint,
    ) {
        self.price_posted_event(
            asset,
            &PricePostedEvent {
                previous_price_mantissa: previous_price.clone(),
                requested_price_mantissa: requested_price.clone(),
                new_price_mantissa: new_price.clone(),
            },
        )
    }

    #[event("price_posted")]
    fn price_posted_event(
        &self,
        #[indexed] asset: &ManagedAddress,
        price_posted_event: &PricePostedEvent<Self::Api>,
    );

    fn emit_capped_price_posted_event(
        &self,
        asset: &ManagedAddress,
        requested_price: &BigUint,
        anchor_price: &BigUint,
        capped_price: &BigUint,
    ) {
        self.capped_price_posted_event(
            asset,
            &CappedPricePostedEvent {
                requested_price_mantissa: requested_price.clone(),
                anchor_price_mantissa: anchor_price.clone(),
                capped_price_mantissa: capped_price.clone(),
            },
        )
    }

    #[event("capped_price_posted")]
    fn capped_price_posted_event(
        &self,
        #[indexed] asset: &ManagedAddress,
        capped_price_posted_event: &CappedPricePostedEvent<Self::Api>,
    );

    // Emitted for every non-fatal failure. The asset is the zero address for admin operations,
    // the detail is zero unless the failing stage reports a number (swing ratio or math error code).
    #[event("oracle_failure")]
    fn oracle_failure_event(
        &self,
        #[indexed] msg_sender: &ManagedAddress,
        #[indexed] asset: &ManagedAddress,
        #[indexed] error: OracleError,
        #[indexed] info: OracleFailureInfo,
        #[indexed] detail: &BigUint,
    );

    #[event("new_pending_anchor")]
    fn new_pending_anchor_event(
        &self,
        #[indexed] anchor_admin: &ManagedAddress,
        #[indexed] asset: &ManagedAddress,
        #[indexed] old_scaled_price: &BigUint,
        #[indexed] new_scaled_price: &BigUint,
    );

    #[event("new_pending_anchor_admin")]
    fn new_pending_anchor_admin_event(
        &self,
        #[indexed] old_pending_anchor_admin: &ManagedAddress,
        #[indexed] new_pending_anchor_admin: &ManagedAddress,
    );

    #[event("new_anchor_admin")]
    fn new_anchor_admin_event(
        &self,
        #[indexed] old_anchor_admin: &ManagedAddress,
        #[indexed] new_anchor_admin: &ManagedAddress,
    );

    #[event("set_paused")]
    fn set_paused_event(&self, #[indexed] new_state: bool);
}
