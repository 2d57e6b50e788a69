#![no_std]

// Fixed point math
pub static ERROR_ARITHMETIC_OVERFLOW: &[u8] = b"Arithmetic overflow.";

pub static ERROR_DIVISION_BY_ZERO: &[u8] = b"Division by zero.";

// Configuration
pub static ERROR_INVALID_OPTIMAL_USAGE_RATIO: &[u8] =
    b"Invalid configuration: optimal usage ratio must be above zero and at most one ray.";

pub static ERROR_INVALID_OPTIMAL_STABLE_TO_TOTAL_DEBT_RATIO: &[u8] =
    b"Invalid configuration: optimal stable to total debt ratio above one ray.";

pub static ERROR_INVALID_RESERVE_PARAMS: &[u8] =
    b"Invalid configuration: LTV, liquidation threshold or bonus out of range.";

pub static ERROR_INVALID_RESERVE_FACTOR: &[u8] = b"Invalid configuration: reserve factor above 100%.";

pub static ERROR_INVALID_DECIMALS: &[u8] = b"Invalid configuration: too many decimals.";

pub static ERROR_INVALID_SUPPLY_CAP: &[u8] = b"Invalid configuration: supply cap too large.";

pub static ERROR_INVALID_BORROW_CAP: &[u8] = b"Invalid configuration: borrow cap too large.";

pub static ERROR_INVALID_UNBACKED_MINT_CAP: &[u8] =
    b"Invalid configuration: unbacked mint cap too large.";

pub static ERROR_INVALID_DEBT_CEILING: &[u8] = b"Invalid configuration: debt ceiling too large.";

pub static ERROR_RESERVE_LIQUIDITY_NOT_ZERO: &[u8] =
    b"Reserve liquidity is not zero.";

pub static ERROR_INVALID_MAX_STABLE_BORROW_SIZE: &[u8] =
    b"Invalid configuration: max stable borrow size above 100%.";

pub static ERROR_INVALID_BRIDGE_PROTOCOL_FEE: &[u8] =
    b"Invalid configuration: bridge protocol fee above 100%.";

// Registry
pub static ERROR_ASSET_NOT_LISTED: &[u8] = b"Asset not listed.";

pub static ERROR_RESERVE_ALREADY_INITIALIZED: &[u8] = b"Reserve already initialized.";

pub static ERROR_NO_MORE_RESERVES_ALLOWED: &[u8] = b"No more reserves allowed.";

pub static ERROR_SUPPLY_NOT_ZERO: &[u8] = b"Reserve still has suppliers.";

pub static ERROR_VARIABLE_DEBT_NOT_ZERO: &[u8] = b"Reserve still has variable debt.";

pub static ERROR_STABLE_DEBT_NOT_ZERO: &[u8] = b"Reserve still has stable debt.";

pub static ERROR_UNDERLYING_CLAIMABLE_RIGHTS_NOT_ZERO: &[u8] =
    b"Reserve still has treasury accruals or unbacked supply.";

// Scaled balances
pub static ERROR_INVALID_MINT_AMOUNT: &[u8] = b"Invalid mint amount.";

pub static ERROR_INVALID_BURN_AMOUNT: &[u8] = b"Invalid burn amount.";

// Caps
pub static ERROR_SUPPLY_CAP_EXCEEDED: &[u8] = b"Supply cap exceeded.";

pub static ERROR_BORROW_CAP_EXCEEDED: &[u8] = b"Borrow cap exceeded.";

pub static ERROR_UNBACKED_MINT_CAP_EXCEEDED: &[u8] = b"Unbacked mint cap exceeded.";

pub static ERROR_DEBT_CEILING_EXCEEDED: &[u8] = b"Debt ceiling exceeded for isolated collateral.";

// Validation
pub static ERROR_INVALID_AMOUNT: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_RESERVE_INACTIVE: &[u8] = b"Reserve is not active.";

pub static ERROR_RESERVE_PAUSED: &[u8] = b"Reserve is paused.";

pub static ERROR_RESERVE_FROZEN: &[u8] = b"Reserve is frozen.";

pub static ERROR_BORROWING_NOT_ENABLED: &[u8] = b"Borrowing is not enabled.";

pub static ERROR_STABLE_BORROWING_NOT_ENABLED: &[u8] = b"Stable borrowing is not enabled.";

pub static ERROR_INVALID_INTEREST_RATE_MODE: &[u8] = b"Invalid interest rate mode selected.";

pub static ERROR_NOT_ENOUGH_AVAILABLE_USER_BALANCE: &[u8] =
    b"User cannot withdraw more than the available balance.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

pub static ERROR_COLLATERAL_BALANCE_IS_ZERO: &[u8] = b"Collateral balance is zero.";

pub static ERROR_LTV_VALIDATION_FAILED: &[u8] = b"LTV validation failed.";

pub static ERROR_HEALTH_FACTOR_LOWER_THAN_LIQUIDATION_THRESHOLD: &[u8] =
    b"Health factor is lower than the liquidation threshold.";

pub static ERROR_COLLATERAL_CANNOT_COVER_NEW_BORROW: &[u8] =
    b"There is not enough collateral to cover a new borrow.";

pub static ERROR_COLLATERAL_SAME_AS_BORROWING_CURRENCY: &[u8] =
    b"Collateral is (mostly) the same currency that is being borrowed.";

pub static ERROR_AMOUNT_BIGGER_THAN_MAX_LOAN_SIZE_STABLE: &[u8] =
    b"Amount bigger than the maximum stable loan size.";

pub static ERROR_NO_DEBT_OF_SELECTED_TYPE: &[u8] = b"No debt of the selected type.";

pub static ERROR_NO_OUTSTANDING_STABLE_DEBT: &[u8] = b"No outstanding stable debt.";

pub static ERROR_NO_OUTSTANDING_VARIABLE_DEBT: &[u8] = b"No outstanding variable debt.";

pub static ERROR_SAME_BLOCK_BORROW_REPAY: &[u8] =
    b"Stable debt cannot be repaid in the same block it was borrowed.";

pub static ERROR_UNDERLYING_BALANCE_ZERO: &[u8] = b"Underlying balance is zero.";

pub static ERROR_INTEREST_RATE_REBALANCE_CONDITIONS_NOT_MET: &[u8] =
    b"Interest rate rebalance conditions were not met.";

pub static ERROR_ASSET_NOT_BORROWABLE_IN_ISOLATION: &[u8] = b"Asset not borrowable in isolation.";

pub static ERROR_USER_IN_ISOLATION_MODE_OR_LTV_ZERO: &[u8] =
    b"User is in isolation mode or LTV is zero.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Oracle returned an invalid price.";

pub static ERROR_PRICE_ORACLE_NOT_SET: &[u8] = b"Price oracle not set.";

pub static ERROR_TREASURY_NOT_SET: &[u8] = b"Treasury not set.";

pub static ERROR_CALLER_NOT_BRIDGE: &[u8] = b"Caller is not a bridge.";

pub static ERROR_INVALID_FEE: &[u8] = b"Fee exceeds the paid amount.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";
