use common_structs::{OracleError, OracleFailureInfo};

multiversx_sc::imports!();

/// Fail-soft signaling: a failure is logged and returned as a code, the transaction goes on.
#[multiversx_sc::module]
pub trait ReporterModule: common_events::EventsModule {
    fn fail_oracle(
        &self,
        asset: &ManagedAddress,
        error: OracleError,
        info: OracleFailureInfo,
    ) -> OracleError {
        self.fail_oracle_with_details(asset, error, info, &BigUint::zero())
    }

    fn fail_oracle_with_details(
        &self,
        asset: &ManagedAddress,
        error: OracleError,
        info: OracleFailureInfo,
        detail: &BigUint,
    ) -> OracleError {
        let caller = self.blockchain().get_caller();
        self.oracle_failure_event(&caller, asset, error, info, detail);

        error
    }
}
