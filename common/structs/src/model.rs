#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

mod user_configuration;
pub use user_configuration::*;

/// Debt position kinds a borrower can hold.
///
/// Discriminants follow the ABI numbering `0 = None`, `1 = Stable`, `2 = Variable`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum InterestRateMode {
    None,
    Stable,
    Variable,
}

/// The two ledgers whose balances are stored scaled by a reserve wide index.
///
/// Supply balances grow with the liquidity index, variable debt with the variable borrow index.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScaledTokenKind {
    Supply,
    VariableDebt,
}

/// Accounting record of one listed reserve.
///
/// Indices and rates are rays, rates are per annum. `accrued_to_treasury` is a scaled supply
/// amount not minted yet. `isolation_mode_total_debt` uses `DEBT_CEILING_DECIMALS`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ReserveData<M: ManagedTypeApi> {
    pub id: u32,
    pub liquidity_index: BigUint<M>,
    pub current_liquidity_rate: BigUint<M>,
    pub variable_borrow_index: BigUint<M>,
    pub current_variable_borrow_rate: BigUint<M>,
    pub current_stable_borrow_rate: BigUint<M>,
    pub last_update_timestamp: u64,
    pub accrued_to_treasury: BigUint<M>,
    pub unbacked: BigUint<M>,
    pub isolation_mode_total_debt: BigUint<M>,
    /// Underlying held on behalf of the reserve, fed to the rate model as available liquidity.
    pub virtual_underlying_balance: BigUint<M>,
}

impl<M: ManagedTypeApi> ReserveData<M> {
    pub fn new(id: u32, ray: BigUint<M>, timestamp: u64) -> Self {
        ReserveData {
            id,
            liquidity_index: ray.clone(),
            current_liquidity_rate: BigUint::zero(),
            variable_borrow_index: ray,
            current_variable_borrow_rate: BigUint::zero(),
            current_stable_borrow_rate: BigUint::zero(),
            last_update_timestamp: timestamp,
            accrued_to_treasury: BigUint::zero(),
            unbacked: BigUint::zero(),
            isolation_mode_total_debt: BigUint::zero(),
            virtual_underlying_balance: BigUint::zero(),
        }
    }
}

/// Risk and lifecycle parameters of a reserve.
///
/// Percentages are basis points (`10_000 = 100%`). Caps are whole tokens, zero meaning
/// uncapped. `debt_ceiling` has 2 decimals; a non zero value marks an isolated collateral.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ReserveConfiguration {
    pub ltv: u64,
    pub liquidation_threshold: u64,
    pub liquidation_bonus: u64,
    pub decimals: usize,
    pub is_active: bool,
    pub is_frozen: bool,
    pub is_paused: bool,
    pub borrowing_enabled: bool,
    pub stable_borrowing_enabled: bool,
    pub borrowable_in_isolation: bool,
    pub reserve_factor: u64,
    pub borrow_cap: u64,
    pub supply_cap: u64,
    pub unbacked_mint_cap: u64,
    pub debt_ceiling: u64,
    pub max_stable_rate_borrow_size_percent: u64,
}

impl ReserveConfiguration {
    /// One whole token expressed in the asset's smallest unit.
    pub fn asset_unit<M: ManagedTypeApi>(&self) -> BigUint<M> {
        BigUint::from(10u64).pow(self.decimals as u32)
    }

    /// A cap of `whole_tokens`, expressed in the asset's smallest unit.
    pub fn cap_in_units<M: ManagedTypeApi>(&self, whole_tokens: u64) -> BigUint<M> {
        self.asset_unit::<M>() * whole_tokens
    }

    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.debt_ceiling != 0
    }
}

/// Parameters of the two slope interest rate curve of one reserve. All values are rays.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct InterestRateStrategy<M: ManagedTypeApi> {
    pub optimal_usage_ratio: BigUint<M>,
    pub base_variable_borrow_rate: BigUint<M>,
    pub variable_rate_slope1: BigUint<M>,
    pub variable_rate_slope2: BigUint<M>,
    pub stable_rate_slope1: BigUint<M>,
    pub stable_rate_slope2: BigUint<M>,
    pub base_stable_rate_offset: BigUint<M>,
    pub stable_rate_excess_offset: BigUint<M>,
    pub optimal_stable_to_total_debt_ratio: BigUint<M>,
}

/// Reserve totals the interest rate model consumes.
pub struct InterestRateInputs<M: ManagedTypeApi> {
    pub unbacked: BigUint<M>,
    pub liquidity_added: BigUint<M>,
    pub liquidity_taken: BigUint<M>,
    pub total_stable_debt: BigUint<M>,
    pub total_variable_debt: BigUint<M>,
    pub average_stable_borrow_rate: BigUint<M>,
    pub reserve_factor: u64,
    pub virtual_underlying_balance: BigUint<M>,
}

/// A balance stored divided by the index in force when it was last touched.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ScaledBalance<M: ManagedTypeApi> {
    pub scaled_amount: BigUint<M>,
    pub last_index: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for ScaledBalance<M> {
    fn default() -> Self {
        ScaledBalance {
            scaled_amount: BigUint::zero(),
            last_index: BigUint::zero(),
        }
    }
}

/// Stable debt of one borrower: principal as of `last_update_timestamp`, compounding at `stable_rate`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct StableDebtPosition<M: ManagedTypeApi> {
    pub principal: BigUint<M>,
    pub stable_rate: BigUint<M>,
    pub last_update_timestamp: u64,
}

impl<M: ManagedTypeApi> Default for StableDebtPosition<M> {
    fn default() -> Self {
        StableDebtPosition {
            principal: BigUint::zero(),
            stable_rate: BigUint::zero(),
            last_update_timestamp: 0,
        }
    }
}

/// Aggregate stable debt of a reserve, compounding at the debt weighted `average_rate`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct StableDebtTotals<M: ManagedTypeApi> {
    pub principal: BigUint<M>,
    pub average_rate: BigUint<M>,
    pub last_update_timestamp: u64,
}

impl<M: ManagedTypeApi> Default for StableDebtTotals<M> {
    fn default() -> Self {
        StableDebtTotals {
            principal: BigUint::zero(),
            average_rate: BigUint::zero(),
            last_update_timestamp: 0,
        }
    }
}

/// Isolation mode of a borrower: the single isolated collateral and its debt ceiling.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct IsolationModeState<M: ManagedTypeApi> {
    pub is_active: bool,
    pub collateral_asset: Option<EgldOrEsdtTokenIdentifier<M>>,
    pub debt_ceiling: u64,
}

impl<M: ManagedTypeApi> IsolationModeState<M> {
    pub fn inactive() -> Self {
        IsolationModeState {
            is_active: false,
            collateral_asset: None,
            debt_ceiling: 0,
        }
    }
}

/// Position of a user across every reserve, valued in the oracle base currency (wad).
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct UserAccountData<M: ManagedTypeApi> {
    pub total_collateral_base: BigUint<M>,
    pub total_debt_base: BigUint<M>,
    pub available_borrows_base: BigUint<M>,
    pub current_liquidation_threshold: u64,
    pub ltv: u64,
    pub health_factor: BigUint<M>,
    pub has_zero_ltv_collateral: bool,
}

/// Full snapshot of a reserve returned by `getReserveData`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ReserveSnapshot<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub data: ReserveData<M>,
    pub configuration: ReserveConfiguration,
    pub strategy: InterestRateStrategy<M>,
    pub scaled_total_supply: BigUint<M>,
    pub scaled_total_variable_debt: BigUint<M>,
    pub stable_debt: StableDebtTotals<M>,
}
