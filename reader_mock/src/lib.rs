#![no_std]

multiversx_sc::imports!();

/// Stand-in for an external value feed read by the oracle.
#[multiversx_sc::contract]
pub trait ReaderMock {
    /// A zero initial value leaves the reader unset.
    #[init]
    fn init(&self, initial_value: BigUint) {
        if initial_value > 0u64 {
            self.set(initial_value);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint]
    fn set(&self, value: BigUint) {
        self.value().set(&value);
        self.has_value().set(true);
    }

    #[endpoint]
    fn unset(&self) {
        self.value().clear();
        self.has_value().set(false);
    }

    /// Current value and whether one is set. Never fails.
    #[view]
    fn peek(&self) -> MultiValue2<BigUint, bool> {
        (self.value().get(), self.has_value().get()).into()
    }

    #[view]
    fn read(&self) -> BigUint {
        require!(self.has_value().get(), "Value not set");

        self.value().get()
    }

    #[storage_mapper("value")]
    fn value(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("has_value")]
    fn has_value(&self) -> SingleValueMapper<bool>;
}
