use common_errors::ERROR_ASSET_NOT_LISTED;
use common_structs::{
    InterestRateStrategy, ReserveConfiguration, ReserveData, ScaledTokenKind,
};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of one reserve, cached from on-chain storage for the duration of an action.
///
/// **Scope**: Holds the reserve record plus the debt totals the index update and the rate model
/// consume, in both their pre-action (`curr_*`) and post-action (`next_*`) form.
///
/// **Goal**: Run the whole cache, update state, validate, mutate, update rates sequence against one
/// in-memory view of the reserve, then persist it in a single place.
///
/// **Fields**:
/// - Indices and rates are rays; debts are in the asset's smallest unit.
/// - `reserve` is the working copy of the stored record and is written back on drop.
/// - The `curr_*` values are never touched after construction; the `next_*` values track the
///   ledgers while the action mutates them.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    /// The underlying asset of the reserve.
    pub asset: EgldOrEsdtTokenIdentifier<C::Api>,
    /// Working copy of the stored reserve record.
    pub reserve: ReserveData<C::Api>,
    pub configuration: ReserveConfiguration,
    pub strategy: InterestRateStrategy<C::Api>,
    /// The timestamp of the current block (seconds since Unix epoch).
    pub timestamp: u64,
    /// `last_update_timestamp` of the record as it was loaded.
    pub reserve_last_update_timestamp: u64,

    pub curr_liquidity_index: BigUint<C::Api>,
    pub next_liquidity_index: BigUint<C::Api>,
    pub curr_variable_borrow_index: BigUint<C::Api>,
    pub next_variable_borrow_index: BigUint<C::Api>,
    pub curr_liquidity_rate: BigUint<C::Api>,
    pub curr_variable_borrow_rate: BigUint<C::Api>,

    pub curr_scaled_variable_debt: BigUint<C::Api>,
    pub next_scaled_variable_debt: BigUint<C::Api>,

    /// Stored stable principal, not compounded.
    pub curr_principal_stable_debt: BigUint<C::Api>,
    pub curr_avg_stable_borrow_rate: BigUint<C::Api>,
    /// Stable principal compounded up to now at the average rate.
    pub curr_total_stable_debt: BigUint<C::Api>,
    pub next_total_stable_debt: BigUint<C::Api>,
    pub next_avg_stable_borrow_rate: BigUint<C::Api>,
    pub stable_debt_last_update_timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Constructs a new Cache by reading the reserve and its debt totals from storage.
    ///
    /// # Arguments
    /// - `sc_ref`: Reference to the contract implementing `Storage` and `SharedMathModule`.
    /// - `asset`: The underlying asset of the reserve. Must be listed.
    ///
    /// # Returns
    /// - `Cache<Self>`: A new instance where every `next_*` value equals its `curr_*` value.
    pub fn new(sc_ref: &'a C, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> Self {
        let reserve_mapper = sc_ref.reserve_data(asset);
        if reserve_mapper.is_empty() {
            multiversx_sc::contract_base::ErrorHelper::<C::Api>::signal_error_with_message(
                ERROR_ASSET_NOT_LISTED,
            );
        }

        let reserve = reserve_mapper.get();
        let timestamp = sc_ref.blockchain().get_block_timestamp();

        let scaled_variable_debt = sc_ref
            .scaled_total_supply(ScaledTokenKind::VariableDebt, asset)
            .get();

        let stable_totals_mapper = sc_ref.stable_debt_totals(asset);
        let (principal_stable_debt, avg_stable_borrow_rate, stable_timestamp) =
            if stable_totals_mapper.is_empty() {
                (BigUint::zero(), BigUint::zero(), 0u64)
            } else {
                let totals = stable_totals_mapper.get();
                (totals.principal, totals.average_rate, totals.last_update_timestamp)
            };
        let total_stable_debt = if principal_stable_debt == BigUint::zero() {
            BigUint::zero()
        } else {
            let cumulated = sc_ref.calculate_compounded_interest(
                &avg_stable_borrow_rate,
                stable_timestamp,
                timestamp,
            );
            sc_ref.ray_mul(&principal_stable_debt, &cumulated)
        };

        Cache {
            asset: asset.clone(),
            configuration: sc_ref.reserve_configuration(asset).get(),
            strategy: sc_ref.interest_rate_strategy(asset).get(),
            timestamp,
            reserve_last_update_timestamp: reserve.last_update_timestamp,
            curr_liquidity_index: reserve.liquidity_index.clone(),
            next_liquidity_index: reserve.liquidity_index.clone(),
            curr_variable_borrow_index: reserve.variable_borrow_index.clone(),
            next_variable_borrow_index: reserve.variable_borrow_index.clone(),
            curr_liquidity_rate: reserve.current_liquidity_rate.clone(),
            curr_variable_borrow_rate: reserve.current_variable_borrow_rate.clone(),
            curr_scaled_variable_debt: scaled_variable_debt.clone(),
            next_scaled_variable_debt: scaled_variable_debt,
            curr_principal_stable_debt: principal_stable_debt,
            curr_avg_stable_borrow_rate: avg_stable_borrow_rate.clone(),
            curr_total_stable_debt: total_stable_debt.clone(),
            next_total_stable_debt: total_stable_debt,
            next_avg_stable_borrow_rate: avg_stable_borrow_rate,
            stable_debt_last_update_timestamp: stable_timestamp,
            reserve,
            sc_ref,
        }
    }

    /// Variable debt of the whole reserve after the action, at the updated index.
    pub fn next_total_variable_debt(&self) -> BigUint<C::Api> {
        self.sc_ref
            .ray_mul(&self.next_scaled_variable_debt, &self.next_variable_borrow_index)
    }

    /// One whole token of the reserve asset, in its smallest unit.
    pub fn asset_unit(&self) -> BigUint<C::Api> {
        self.configuration.asset_unit()
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    /// Commits the working copy of the reserve record back to storage.
    ///
    /// Token ledgers write their own storage as they mutate; only the record lives here.
    fn drop(&mut self) {
        self.sc_ref.reserve_data(&self.asset).set(&self.reserve);
    }
}
