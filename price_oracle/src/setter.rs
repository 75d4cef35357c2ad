use common_proxies::proxy_price_consumer;
use common_structs::{Anchor, CappedPrice, OracleError, OracleFailureInfo};

use crate::{reporter, storage};

multiversx_sc::imports!();

/// Stage that rejected a requested price, with the number it reports.
pub struct RejectedPrice<M: ManagedTypeApi> {
    pub info: OracleFailureInfo,
    pub detail: BigUint<M>,
}

#[multiversx_sc::module]
pub trait PriceSetterModule:
    storage::StorageModule
    + reporter::ReporterModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Runs the full acceptance pipeline for one asset. The caller has already been authorized.
    ///
    /// A pending anchor takes over as the reference and only gates the swing, it never clamps.
    /// Otherwise a known anchor clamps the request into the swing band, and an asset with
    /// neither takes the request as its first price once it fits the 256-bit range.
    fn set_price_internal(&self, asset: &ManagedAddress, requested_price: &BigUint) -> OracleError {
        if self.is_reader_asset(asset) {
            return self.fail_oracle(
                asset,
                OracleError::FailedToSetPrice,
                OracleFailureInfo::SetPriceIsReaderAsset,
            );
        }

        let anchor_price = self.get_anchor(asset).price_mantissa;
        let pending_anchor_price = self.pending_anchors(asset).get();

        let resolved = if pending_anchor_price > 0u64 {
            self.check_pending_anchor_swing(&pending_anchor_price, requested_price)
                .map(|_| CappedPrice {
                    was_capped: false,
                    price: requested_price.clone(),
                })
        } else if anchor_price > 0u64 {
            self.cap_to_max(&anchor_price, requested_price, &self.max_swing().get())
                .map_err(|err| RejectedPrice {
                    info: OracleFailureInfo::SetPriceCapToMax,
                    detail: BigUint::from(err.code()),
                })
        } else {
            self.require_in_range(requested_price.clone())
                .map(|price| CappedPrice {
                    was_capped: false,
                    price,
                })
                .map_err(|err| RejectedPrice {
                    info: OracleFailureInfo::SetPriceCalculateSwing,
                    detail: BigUint::from(err.code()),
                })
        };

        let accepted = match resolved {
            Ok(accepted) => accepted,
            Err(rejected) => {
                return self.fail_oracle_with_details(
                    asset,
                    OracleError::FailedToSetPrice,
                    rejected.info,
                    &rejected.detail,
                )
            },
        };

        if accepted.price == 0u64 {
            return self.fail_oracle(
                asset,
                OracleError::FailedToSetPrice,
                OracleFailureInfo::SetPriceNoAnchorPriceOrInitialPriceZero,
            );
        }

        let reference_price = if pending_anchor_price > 0u64 {
            pending_anchor_price
        } else {
            anchor_price
        };

        self.accept_price(asset, requested_price, &reference_price, &accepted);

        OracleError::NoError
    }

    fn check_pending_anchor_swing(
        &self,
        pending_anchor_price: &BigUint,
        requested_price: &BigUint,
    ) -> Result<(), RejectedPrice<Self::Api>> {
        let swing = self
            .calculate_swing(pending_anchor_price, requested_price)
            .map_err(|err| RejectedPrice {
                info: OracleFailureInfo::SetPriceCalculateSwing,
                detail: BigUint::from(err.code()),
            })?;

        if swing > self.max_swing().get() {
            return Err(RejectedPrice {
                info: OracleFailureInfo::SetPriceMaxSwingCheck,
                detail: swing,
            });
        }

        Ok(())
    }

    /// Commits an accepted price: consumes the pending anchor, moves the anchor,
    /// stores the price, then notifies the consumer and logs the posting.
    fn accept_price(
        &self,
        asset: &ManagedAddress,
        requested_price: &BigUint,
        reference_price: &BigUint,
        accepted: &CappedPrice<Self::Api>,
    ) {
        let previous_price = self.asset_prices(asset).get();

        self.pending_anchors(asset).clear();
        self.anchors(asset).set(Anchor::new(accepted.price.clone()));
        self.asset_prices(asset).set(&accepted.price);

        self.notify_price_consumer(asset, &accepted.price);

        self.emit_price_posted_event(asset, &previous_price, requested_price, &accepted.price);
        if accepted.was_capped {
            self.emit_capped_price_posted_event(
                asset,
                requested_price,
                reference_price,
                &accepted.price,
            );
        }
    }

    fn notify_price_consumer(&self, asset: &ManagedAddress, price: &BigUint) {
        let consumer = self.price_consumer().get();
        if consumer.is_zero() {
            return;
        }

        self.tx()
            .to(&consumer)
            .typed(proxy_price_consumer::PriceConsumerProxy)
            .notify_price(asset, price)
            .sync_call();
    }
}
