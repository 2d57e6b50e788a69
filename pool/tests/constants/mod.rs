use multiversx_sc::types::{TestAddress, TestSCAddress};
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_YEAR: u64 = 31_536_000;
pub const START_TIMESTAMP: u64 = 1_000;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const TREASURY_ADDRESS: TestAddress = TestAddress::new("treasury");
pub const BRIDGE_ADDRESS: TestAddress = TestAddress::new("bridge");
pub const SUPPLIER_ADDRESS: TestAddress = TestAddress::new("supplier");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const RECEIVER_ADDRESS: TestAddress = TestAddress::new("receiver");

pub const POOL_ADDRESS: TestSCAddress = TestSCAddress::new("maria-pool");
pub const POOL_PATH: MxscPath = MxscPath::new("output/maria-pool.mxsc.json");
pub const ORACLE_ADDRESS: TestSCAddress = TestSCAddress::new("price-oracle");
pub const ORACLE_PATH: MxscPath =
    MxscPath::new("../price_oracle_mock/output/price-oracle-mock.mxsc.json");

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const USDC_DECIMALS: usize = 6;
pub const USDC_PRICE_IN_DOLLARS: u64 = 1;

pub const EGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const EGLD_DECIMALS: usize = 18;
pub const EGLD_PRICE_IN_DOLLARS: u64 = 40;

pub const ISOLATED_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("ISO-abcdef");
pub const ISOLATED_DECIMALS: usize = 8;
pub const ISOLATED_PRICE_IN_DOLLARS: u64 = 10;
// 1_000.00 dollars
pub const ISOLATED_DEBT_CEILING: u64 = 100_000;

// Held by every user, listed only by the tests that need it.
pub const NEW_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("NEW-abcdef");
pub const NEW_DECIMALS: usize = 6;

pub const USDC_ID: u32 = 0;
pub const EGLD_ID: u32 = 1;
pub const ISOLATED_ID: u32 = 2;

// Basis points
pub const USDC_LTV: u64 = 8_000;
pub const USDC_LIQ_THRESHOLD: u64 = 8_500;
pub const EGLD_LTV: u64 = 7_500;
pub const EGLD_LIQ_THRESHOLD: u64 = 8_000;
pub const ISOLATED_LTV: u64 = 5_000;
pub const ISOLATED_LIQ_THRESHOLD: u64 = 6_000;
pub const LIQ_BONUS: u64 = 10_500;
pub const RESERVE_FACTOR: u64 = 1_000;
pub const MAX_STABLE_BORROW_SIZE: u64 = 2_500;

// Basis points, turned into rays by the setup
pub const OPTIMAL_USAGE_RATIO: u64 = 8_000;
pub const BASE_VARIABLE_BORROW_RATE: u64 = 0;
pub const VARIABLE_RATE_SLOPE1: u64 = 400;
pub const VARIABLE_RATE_SLOPE2: u64 = 7_500;
pub const STABLE_RATE_SLOPE1: u64 = 200;
pub const STABLE_RATE_SLOPE2: u64 = 7_500;
pub const BASE_STABLE_RATE_OFFSET: u64 = 200;
pub const STABLE_RATE_EXCESS_OFFSET: u64 = 800;
pub const OPTIMAL_STABLE_TO_TOTAL_DEBT_RATIO: u64 = 2_000;
