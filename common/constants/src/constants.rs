#![no_std]

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const HALF_RAY: u128 = 500_000_000_000_000_000_000_000_000;

/// 1 unit of the base currency the oracle quotes in (1 USD).
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const HALF_WAD: u128 = 500_000_000_000_000_000;

pub const WAD_RAY_RATIO: u64 = 1_000_000_000;
pub const HALF_WAD_RAY_RATIO: u64 = 500_000_000;

pub const PERCENTAGE_FACTOR: u64 = 10_000; // 100%
pub const HALF_PERCENTAGE_FACTOR: u64 = 5_000;

/// Rates are quoted per annum, a year being 365 days.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Results of the fixed point helpers must fit in an unsigned 256 bit word.
pub const UINT256_BYTES: usize = 32;

/// The user configuration keeps two bits per reserve inside one 256 bit word.
pub const MAX_RESERVES_COUNT: u32 = 128;

/// Debt ceilings and isolated debt are tracked with 2 decimals (cents of the base currency).
pub const DEBT_CEILING_DECIMALS: usize = 2;

pub const HEALTH_FACTOR_LIQUIDATION_THRESHOLD: u128 = WAD;

pub const MAX_VALID_DECIMALS: usize = 18;
pub const MAX_VALID_BORROW_CAP: u64 = 68_719_476_735;
pub const MAX_VALID_SUPPLY_CAP: u64 = 68_719_476_735;
pub const MAX_VALID_UNBACKED_MINT_CAP: u64 = 68_719_476_735;
pub const MAX_VALID_DEBT_CEILING: u64 = 1_099_511_627_775;
