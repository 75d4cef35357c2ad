#![no_std]

multiversx_sc::imports!();

/// Records the price notifications pushed by the oracle.
#[multiversx_sc::contract]
pub trait ConsumerMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(notifyPrice)]
    fn notify_price(&self, asset: ManagedAddress, price: BigUint) {
        self.notify_count(&asset).update(|count| *count += 1);
        self.last_price(&asset).set(&price);
    }

    #[view(getNotifyCount)]
    #[storage_mapper("notify_count")]
    fn notify_count(&self, asset: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(getLastPrice)]
    #[storage_mapper("last_price")]
    fn last_price(&self, asset: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
