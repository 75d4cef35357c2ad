use crate::constants::*;

use common_constants::{DEFAULT_MAX_SWING, WAD};
use common_proxies::{proxy_price_consumer, proxy_price_oracle, proxy_price_reader};
use common_structs::{Anchor, OracleError, OracleFailureInfo};

use multiversx_sc::{
    codec::{top_encode_to_vec_u8_or_panic, TopEncode},
    imports::OptionalValue,
    types::{
        BigUint, ManagedAddress, ManagedVec, MultiValueManagedVecCounted,
        ReturnsNewManagedAddress, ReturnsResult,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ReturnsLogs, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(PRICE_ORACLE_PATH, price_oracle::ContractBuilder);
    blockchain.register_contract(READER_MOCK_PATH, reader_mock::ContractBuilder);
    blockchain.register_contract(CONSUMER_MOCK_PATH, consumer_mock::ContractBuilder);

    blockchain
}

/// Exp mantissa of `units` whole units.
pub fn wad(units: u64) -> BigUint<StaticApi> {
    BigUint::from(units) * BigUint::from(WAD)
}

/// Exp mantissa of `numerator / denominator` units, truncated.
pub fn wad_ratio(numerator: u64, denominator: u64) -> BigUint<StaticApi> {
    wad(numerator) / BigUint::from(denominator)
}

pub fn managed(address: TestAddress) -> ManagedAddress<StaticApi> {
    address.to_managed_address()
}

/// Contract event as seen in the transaction logs. The first topic is the event identifier.
pub struct EventLog {
    pub topics: Vec<Vec<u8>>,
    pub data: Vec<Vec<u8>>,
}

impl EventLog {
    pub fn is(&self, identifier: &str) -> bool {
        self.topics
            .first()
            .is_some_and(|topic| topic.as_slice() == identifier.as_bytes())
    }
}

pub fn events_named<'a>(logs: &'a [EventLog], identifier: &str) -> Vec<&'a EventLog> {
    logs.iter().filter(|log| log.is(identifier)).collect()
}

pub fn encoded<T: TopEncode>(value: &T) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(value)
}

/// Topics of the `oracle_failure` event for the given failure.
pub fn failure_topics(
    caller: TestAddress,
    asset: ManagedAddress<StaticApi>,
    error: OracleError,
    info: OracleFailureInfo,
    detail: BigUint<StaticApi>,
) -> Vec<Vec<u8>> {
    vec![
        b"oracle_failure".to_vec(),
        encoded(&managed(caller)),
        encoded(&asset),
        encoded(&error),
        encoded(&info),
        encoded(&detail),
    ]
}

/// Asserts that `logs` hold exactly one `oracle_failure` event, with the given topics.
pub fn assert_single_failure(logs: &[EventLog], expected_topics: Vec<Vec<u8>>) {
    let failures = events_named(logs, "oracle_failure");
    assert_eq!(failures.len(), 1, "expected exactly one oracle_failure event");
    assert_eq!(failures[0].topics, expected_topics);
}

pub fn max_uint() -> BigUint<StaticApi> {
    BigUint::from_bytes_be(&[0xffu8; 32])
}

pub struct PriceOracleTestState {
    pub world: ScenarioWorld,
    pub oracle_sc: ManagedAddress<StaticApi>,
    pub usd_reader: ManagedAddress<StaticApi>,
    pub dai_reader: ManagedAddress<StaticApi>,
    pub consumer: ManagedAddress<StaticApi>,
}

impl PriceOracleTestState {
    /// Oracle with a 10% max swing, two reader-bound assets and a price consumer.
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);

        let usd_reader = setup_reader(&mut world, BigUint::from(USD_READER_VALUE));
        let dai_reader = setup_reader(&mut world, BigUint::from(DAI_READER_VALUE));
        let consumer = setup_consumer(&mut world);

        let oracle_sc = world
            .tx()
            .from(ANCHOR_ADMIN_ADDRESS)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .init(
                managed(POSTER_ADDRESS),
                BigUint::from(DEFAULT_MAX_SWING),
                managed(USD_ASSET),
                usd_reader.clone(),
                managed(DAI_ASSET),
                dai_reader.clone(),
                OptionalValue::Some(consumer.clone()),
            )
            .code(PRICE_ORACLE_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self {
            world,
            oracle_sc,
            usd_reader,
            dai_reader,
            consumer,
        }
    }

    pub fn set_price(
        &mut self,
        from: TestAddress,
        asset: TestAddress,
        requested_price: BigUint<StaticApi>,
    ) -> OracleError {
        self.set_price_logged(from, asset, requested_price).0
    }

    pub fn set_price_logged(
        &mut self,
        from: TestAddress,
        asset: TestAddress,
        requested_price: BigUint<StaticApi>,
    ) -> (OracleError, Vec<EventLog>) {
        let (result, logs) = self
            .world
            .tx()
            .from(from)
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_price(managed(asset), requested_price)
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run();

        let logs = logs
            .into_iter()
            .map(|log| EventLog {
                topics: log.topics,
                data: log.data,
            })
            .collect();

        (result, logs)
    }

    pub fn post_price(&mut self, asset: TestAddress, requested_price: BigUint<StaticApi>) -> OracleError {
        self.set_price(POSTER_ADDRESS, asset, requested_price)
    }

    pub fn set_prices(
        &mut self,
        from: TestAddress,
        assets: &[TestAddress],
        requested_prices: &[BigUint<StaticApi>],
    ) -> Vec<OracleError> {
        self.set_prices_logged(from, assets, requested_prices).0
    }

    pub fn set_prices_logged(
        &mut self,
        from: TestAddress,
        assets: &[TestAddress],
        requested_prices: &[BigUint<StaticApi>],
    ) -> (Vec<OracleError>, Vec<EventLog>) {
        let mut asset_list = ManagedVec::<StaticApi, ManagedAddress<StaticApi>>::new();
        for asset in assets {
            asset_list.push(asset.to_managed_address());
        }

        let mut price_list = ManagedVec::<StaticApi, BigUint<StaticApi>>::new();
        for price in requested_prices {
            price_list.push(price.clone());
        }

        let (results, logs) = self
            .world
            .tx()
            .from(from)
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_prices(
                MultiValueManagedVecCounted::from(asset_list),
                MultiValueManagedVecCounted::from(price_list),
            )
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run();

        let logs = logs
            .into_iter()
            .map(|log| EventLog {
                topics: log.topics,
                data: log.data,
            })
            .collect();

        (results.into_iter().collect(), logs)
    }

    pub fn set_pending_anchor(
        &mut self,
        from: TestAddress,
        asset: TestAddress,
        new_scaled_price: BigUint<StaticApi>,
    ) -> OracleError {
        self.set_pending_anchor_logged(from, asset, new_scaled_price).0
    }

    pub fn set_pending_anchor_logged(
        &mut self,
        from: TestAddress,
        asset: TestAddress,
        new_scaled_price: BigUint<StaticApi>,
    ) -> (OracleError, Vec<EventLog>) {
        let (result, logs) = self
            .world
            .tx()
            .from(from)
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_pending_anchor(managed(asset), new_scaled_price)
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run();

        let logs = logs
            .into_iter()
            .map(|log| EventLog {
                topics: log.topics,
                data: log.data,
            })
            .collect();

        (result, logs)
    }

    pub fn set_pending_anchor_admin(
        &mut self,
        from: TestAddress,
        new_pending_anchor_admin: ManagedAddress<StaticApi>,
    ) -> OracleError {
        self.set_pending_anchor_admin_logged(from, new_pending_anchor_admin).0
    }

    pub fn set_pending_anchor_admin_logged(
        &mut self,
        from: TestAddress,
        new_pending_anchor_admin: ManagedAddress<StaticApi>,
    ) -> (OracleError, Vec<EventLog>) {
        let (result, logs) = self
            .world
            .tx()
            .from(from)
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_pending_anchor_admin(new_pending_anchor_admin)
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run();

        let logs = logs
            .into_iter()
            .map(|log| EventLog {
                topics: log.topics,
                data: log.data,
            })
            .collect();

        (result, logs)
    }

    pub fn accept_anchor_admin(&mut self, from: TestAddress) -> OracleError {
        self.accept_anchor_admin_logged(from).0
    }

    pub fn accept_anchor_admin_logged(&mut self, from: TestAddress) -> (OracleError, Vec<EventLog>) {
        let (result, logs) = self
            .world
            .tx()
            .from(from)
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .accept_anchor_admin()
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run();

        let logs = logs
            .into_iter()
            .map(|log| EventLog {
                topics: log.topics,
                data: log.data,
            })
            .collect();

        (result, logs)
    }

    pub fn set_paused(&mut self, from: TestAddress, requested_state: bool) -> OracleError {
        self.set_paused_logged(from, requested_state).0
    }

    pub fn set_paused_logged(
        &mut self,
        from: TestAddress,
        requested_state: bool,
    ) -> (OracleError, Vec<EventLog>) {
        let (result, logs) = self
            .world
            .tx()
            .from(from)
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_paused(requested_state)
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run();

        let logs = logs
            .into_iter()
            .map(|log| EventLog {
                topics: log.topics,
                data: log.data,
            })
            .collect();

        (result, logs)
    }

    /// Reads `getPrice` in a transaction, so the logs of the read are observable.
    pub fn get_price_logged(&mut self, asset: TestAddress) -> (BigUint<StaticApi>, Vec<EventLog>) {
        let (price, logs) = self
            .world
            .tx()
            .from(STRANGER_ADDRESS)
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .get_price(managed(asset))
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run();

        let logs = logs
            .into_iter()
            .map(|log| EventLog {
                topics: log.topics,
                data: log.data,
            })
            .collect();

        (price, logs)
    }

    pub fn set_reader_value(&mut self, reader: ManagedAddress<StaticApi>, value: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(ANCHOR_ADMIN_ADDRESS)
            .to(reader)
            .typed(proxy_price_reader::PriceReaderProxy)
            .set(value)
            .run();
    }

    pub fn unset_reader_value(&mut self, reader: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(ANCHOR_ADMIN_ADDRESS)
            .to(reader)
            .typed(proxy_price_reader::PriceReaderProxy)
            .unset()
            .run();
    }

    pub fn get_price(&mut self, asset: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .get_price(managed(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_anchor(&mut self, asset: TestAddress) -> Anchor<StaticApi> {
        self.world
            .query()
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .get_anchor(managed(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_pending_anchor(&mut self, asset: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .pending_anchors(managed(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_stored_price(&mut self, asset: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .asset_prices(managed(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_anchor_admin(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .anchor_admin()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_pending_anchor_admin(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .pending_anchor_admin()
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_paused(&mut self) -> bool {
        self.world
            .query()
            .to(self.oracle_sc.clone())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .paused()
            .returns(ReturnsResult)
            .run()
    }

    pub fn notify_count(&mut self, asset: TestAddress) -> u64 {
        self.world
            .query()
            .to(self.consumer.clone())
            .typed(proxy_price_consumer::PriceConsumerProxy)
            .notify_count(managed(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_notified_price(&mut self, asset: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.consumer.clone())
            .typed(proxy_price_consumer::PriceConsumerProxy)
            .last_price(managed(asset))
            .returns(ReturnsResult)
            .run()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(ANCHOR_ADMIN_ADDRESS)
        .nonce(1)
        .balance(ACCOUNT_EGLD_BALANCE);
    world.account(POSTER_ADDRESS).nonce(1).balance(ACCOUNT_EGLD_BALANCE);
    world.account(NEW_ADMIN_ADDRESS).nonce(1);
    world.account(STRANGER_ADDRESS).nonce(1);
}

pub fn setup_reader(world: &mut ScenarioWorld, initial_value: BigUint<StaticApi>) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(ANCHOR_ADMIN_ADDRESS)
        .typed(proxy_price_reader::PriceReaderProxy)
        .init(initial_value)
        .code(READER_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_consumer(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(ANCHOR_ADMIN_ADDRESS)
        .typed(proxy_price_consumer::PriceConsumerProxy)
        .init()
        .code(CONSUMER_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}
