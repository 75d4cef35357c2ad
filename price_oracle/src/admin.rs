use common_structs::{OracleError, OracleFailureInfo};

use crate::{reporter, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AnchorAdminModule:
    storage::StorageModule + reporter::ReporterModule + common_events::EventsModule
{
    /// Stages a one-shot anchor override for `asset`.
    /// The next price accepted for the asset is gated against it instead of the regular anchor.
    /// Zero cancels a staged override.
    #[endpoint(setPendingAnchor)]
    fn set_pending_anchor(&self, asset: ManagedAddress, new_scaled_price: BigUint) -> OracleError {
        let caller = self.blockchain().get_caller();
        if !self.is_anchor_admin(&caller) {
            return self.fail_oracle(
                &asset,
                OracleError::Unauthorized,
                OracleFailureInfo::SetPendingAnchorPermissionCheck,
            );
        }

        let old_scaled_price = self.pending_anchors(&asset).get();
        self.pending_anchors(&asset).set(&new_scaled_price);

        self.new_pending_anchor_event(&caller, &asset, &old_scaled_price, &new_scaled_price);

        OracleError::NoError
    }

    /// First step of the admin handover. The zero address withdraws an earlier nomination.
    #[endpoint(setPendingAnchorAdmin)]
    fn set_pending_anchor_admin(&self, new_pending_anchor_admin: ManagedAddress) -> OracleError {
        let caller = self.blockchain().get_caller();
        if !self.is_anchor_admin(&caller) {
            return self.fail_oracle(
                &ManagedAddress::zero(),
                OracleError::Unauthorized,
                OracleFailureInfo::SetPendingAnchorAdminOwnerCheck,
            );
        }

        let old_pending_anchor_admin = self.pending_anchor_admin().get();
        self.pending_anchor_admin().set(&new_pending_anchor_admin);

        self.new_pending_anchor_admin_event(&old_pending_anchor_admin, &new_pending_anchor_admin);

        OracleError::NoError
    }

    /// Second step of the admin handover, callable only by the nominee.
    #[endpoint(acceptAnchorAdmin)]
    fn accept_anchor_admin(&self) -> OracleError {
        let caller = self.blockchain().get_caller();
        let pending_anchor_admin = self.pending_anchor_admin().get();
        if pending_anchor_admin.is_zero() || caller != pending_anchor_admin {
            return self.fail_oracle(
                &ManagedAddress::zero(),
                OracleError::Unauthorized,
                OracleFailureInfo::AcceptAnchorAdminPendingAnchorAdminCheck,
            );
        }

        let old_anchor_admin = self.anchor_admin().get();
        self.anchor_admin().set(&caller);
        self.pending_anchor_admin().set(ManagedAddress::zero());

        self.new_anchor_admin_event(&old_anchor_admin, &caller);

        OracleError::NoError
    }

    /// While paused `getPrice` answers zero for every asset. Posting is not affected.
    #[endpoint(setPaused)]
    fn set_paused(&self, requested_state: bool) -> OracleError {
        let caller = self.blockchain().get_caller();
        if !self.is_anchor_admin(&caller) {
            return self.fail_oracle(
                &ManagedAddress::zero(),
                OracleError::Unauthorized,
                OracleFailureInfo::SetPausedOwnerCheck,
            );
        }

        self.paused().set(requested_state);
        self.set_paused_event(requested_state);

        OracleError::NoError
    }

    fn is_anchor_admin(&self, address: &ManagedAddress) -> bool {
        *address == self.anchor_admin().get()
    }
}
