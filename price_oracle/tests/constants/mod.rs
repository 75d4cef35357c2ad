use multiversx_sc_scenario::imports::{MxscPath, TestAddress};

pub const PRICE_ORACLE_PATH: MxscPath = MxscPath::new("output/price_oracle.mxsc.json");
pub const READER_MOCK_PATH: MxscPath = MxscPath::new("../reader_mock/output/reader_mock.mxsc.json");
pub const CONSUMER_MOCK_PATH: MxscPath =
    MxscPath::new("../consumer_mock/output/consumer_mock.mxsc.json");

pub const ANCHOR_ADMIN_ADDRESS: TestAddress = TestAddress::new("anchor-admin");
pub const POSTER_ADDRESS: TestAddress = TestAddress::new("poster");
pub const NEW_ADMIN_ADDRESS: TestAddress = TestAddress::new("new-admin");
pub const STRANGER_ADDRESS: TestAddress = TestAddress::new("stranger");

pub const ETH_ASSET: TestAddress = TestAddress::new("eth-asset");
pub const BTC_ASSET: TestAddress = TestAddress::new("btc-asset");
pub const OMG_ASSET: TestAddress = TestAddress::new("omg-asset");
pub const USD_ASSET: TestAddress = TestAddress::new("usd-asset");
pub const DAI_ASSET: TestAddress = TestAddress::new("dai-asset");

// Reader values quote the reference unit per asset, in Exp.
pub const USD_READER_VALUE: u128 = 2_000_000_000_000_000_000;
pub const DAI_READER_VALUE: u128 = 4_000_000_000_000_000_000;

pub const ACCOUNT_EGLD_BALANCE: u64 = 1_000_000;
