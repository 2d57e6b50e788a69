multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::ERROR_INSUFFICIENT_LIQUIDITY;
use common_structs::{InterestRateInputs, ReserveData};

use crate::{cache::Cache, storage};

/// The ReserveLogicModule drives the per reserve state machine: it advances the indices, accrues the
/// treasury share of the interest and recomputes the rates after every action.
///
/// **Scope**: Operates on a `Cache` built by the calling action. Every mutating action runs
/// `update_state` before it validates anything and `update_interest_rates` after it mutated the
/// token ledgers.
///
/// **Goal**: Keep the liquidity and variable borrow indices monotonic, advance them at most once per
/// timestamp and make sure the rates in force always reflect the totals left by the last action.
#[multiversx_sc::module]
pub trait ReserveLogicModule:
    storage::Storage
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Brings the reserve up to the current block.
    ///
    /// **Process**:
    /// 1. Returns immediately when the reserve was already updated at this timestamp.
    /// 2. Advances the liquidity index linearly and the variable borrow index compounded, using the
    ///    rates in force since the last update.
    /// 3. Accrues the reserve factor share of the new debt interest to the treasury.
    /// 4. Stamps the record with the current timestamp.
    ///
    /// # Arguments
    /// - `cache`: The reserve being acted on.
    fn update_state(&self, cache: &mut Cache<Self>) {
        if cache.reserve.last_update_timestamp == cache.timestamp {
            return;
        }

        self.update_indexes(cache);
        self.accrue_to_treasury(cache);

        cache.reserve.last_update_timestamp = cache.timestamp;
    }

    /// Advances both indices over the elapsed interval.
    ///
    /// The liquidity index only moves while the liquidity rate is non zero, the variable borrow
    /// index only while there is variable debt.
    fn update_indexes(&self, cache: &mut Cache<Self>) {
        if cache.curr_liquidity_rate != BigUint::zero() {
            let cumulated_liquidity_interest = self.calculate_linear_interest(
                &cache.curr_liquidity_rate,
                cache.reserve_last_update_timestamp,
                cache.timestamp,
            );
            cache.next_liquidity_index =
                self.ray_mul(&cumulated_liquidity_interest, &cache.curr_liquidity_index);
            cache.reserve.liquidity_index = cache.next_liquidity_index.clone();
        }

        if cache.curr_scaled_variable_debt != BigUint::zero() {
            let cumulated_variable_borrow_interest = self.calculate_compounded_interest(
                &cache.curr_variable_borrow_rate,
                cache.reserve_last_update_timestamp,
                cache.timestamp,
            );
            cache.next_variable_borrow_index = self.ray_mul(
                &cumulated_variable_borrow_interest,
                &cache.curr_variable_borrow_index,
            );
            cache.reserve.variable_borrow_index = cache.next_variable_borrow_index.clone();
        }
    }

    /// Credits the treasury with the reserve factor share of the debt interest accrued since the
    /// last update.
    ///
    /// **Formula**:
    /// - `accrued = (variable_debt_now + stable_debt_now) - (variable_debt_before + stable_debt_before)`
    /// - `accrued_to_treasury += accrued.percentMul(reserve_factor).rayDiv(next_liquidity_index)`
    ///
    /// The amount is stored scaled and only minted by `mintToTreasury`.
    fn accrue_to_treasury(&self, cache: &mut Cache<Self>) {
        let reserve_factor = cache.configuration.reserve_factor;
        if reserve_factor == 0 {
            return;
        }

        let prev_total_variable_debt = self.ray_mul(
            &cache.curr_scaled_variable_debt,
            &cache.curr_variable_borrow_index,
        );
        let curr_total_variable_debt = self.ray_mul(
            &cache.curr_scaled_variable_debt,
            &cache.next_variable_borrow_index,
        );

        let cumulated_stable_interest = self.calculate_compounded_interest(
            &cache.curr_avg_stable_borrow_rate,
            cache.stable_debt_last_update_timestamp,
            cache.reserve_last_update_timestamp,
        );
        let prev_total_stable_debt =
            self.ray_mul(&cache.curr_principal_stable_debt, &cumulated_stable_interest);

        let debt_now = curr_total_variable_debt + &cache.curr_total_stable_debt;
        let debt_before = prev_total_variable_debt + prev_total_stable_debt;
        if debt_now <= debt_before {
            return;
        }

        let amount_to_mint = self.percent_mul(&(debt_now - debt_before), reserve_factor);
        if amount_to_mint != BigUint::zero() {
            cache.reserve.accrued_to_treasury +=
                self.ray_div(&amount_to_mint, &cache.next_liquidity_index);
        }
    }

    /// Recomputes the rates from the totals the action left behind and moves the virtual balance.
    ///
    /// **Scope**: Called once per action, after the token ledgers were mutated and the `next_*`
    /// values of the cache updated.
    ///
    /// **Process**:
    /// 1. Feeds the rate model with the post-action debts, unbacked supply and the liquidity moved.
    /// 2. Stores the three new rates on the record.
    /// 3. Adds `liquidity_added` and removes `liquidity_taken` from the virtual underlying balance.
    /// 4. Emits `reserve_data_updated`.
    ///
    /// # Arguments
    /// - `cache`: The reserve being acted on.
    /// - `liquidity_added`: Underlying entering the reserve with this action.
    /// - `liquidity_taken`: Underlying leaving the reserve with this action.
    fn update_interest_rates(
        &self,
        cache: &mut Cache<Self>,
        liquidity_added: &BigUint,
        liquidity_taken: &BigUint,
    ) {
        let available_before_taken = &cache.reserve.virtual_underlying_balance + liquidity_added;
        require!(
            &available_before_taken >= liquidity_taken,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        let inputs = InterestRateInputs {
            unbacked: cache.reserve.unbacked.clone(),
            liquidity_added: liquidity_added.clone(),
            liquidity_taken: liquidity_taken.clone(),
            total_stable_debt: cache.next_total_stable_debt.clone(),
            total_variable_debt: cache.next_total_variable_debt(),
            average_stable_borrow_rate: cache.next_avg_stable_borrow_rate.clone(),
            reserve_factor: cache.configuration.reserve_factor,
            virtual_underlying_balance: cache.reserve.virtual_underlying_balance.clone(),
        };

        let (liquidity_rate, stable_borrow_rate, variable_borrow_rate) =
            self.calculate_interest_rates(&cache.strategy, &inputs);

        cache.reserve.current_liquidity_rate = liquidity_rate;
        cache.reserve.current_stable_borrow_rate = stable_borrow_rate;
        cache.reserve.current_variable_borrow_rate = variable_borrow_rate;
        cache.reserve.virtual_underlying_balance = available_before_taken - liquidity_taken;

        self.reserve_data_updated_event(
            &cache.asset,
            &cache.reserve.current_liquidity_rate,
            &cache.reserve.current_stable_borrow_rate,
            &cache.reserve.current_variable_borrow_rate,
            &cache.next_liquidity_index,
            &cache.next_variable_borrow_index,
        );
    }

    /// Distributes `amount` to every supplier at once by bumping the liquidity index.
    ///
    /// Outside of `update_state` this is the only way the index moves: `backUnbacked` calls it with
    /// the suppliers' share of the bridge fee, independently of elapsed time. The index never
    /// decreases here.
    ///
    /// **Formula**: `index = (amount / total_liquidity + 1) * index`, with both amounts lifted to ray.
    ///
    /// # Arguments
    /// - `cache`: The reserve being acted on.
    /// - `total_liquidity`: Total supply the amount is spread over.
    /// - `amount`: The amount to distribute.
    ///
    /// # Returns
    /// - `BigUint`: The new liquidity index.
    fn cumulate_to_liquidity_index(
        &self,
        cache: &mut Cache<Self>,
        total_liquidity: &BigUint,
        amount: &BigUint,
    ) -> BigUint {
        let amount_to_liquidity_ratio =
            self.ray_div(&self.wad_to_ray(amount), &self.wad_to_ray(total_liquidity));
        let cumulated_liquidity = amount_to_liquidity_ratio + self.ray();

        let result = self.ray_mul(&cumulated_liquidity, &cache.next_liquidity_index);
        cache.next_liquidity_index = result.clone();
        cache.reserve.liquidity_index = result.clone();

        result
    }

    /// Liquidity index as of the current block, without writing anything.
    ///
    /// # Arguments
    /// - `reserve`: The stored record.
    ///
    /// # Returns
    /// - `BigUint`: The normalized income, in ray.
    fn get_normalized_income(&self, reserve: &ReserveData<Self::Api>) -> BigUint {
        let timestamp = self.blockchain().get_block_timestamp();
        if reserve.last_update_timestamp == timestamp {
            return reserve.liquidity_index.clone();
        }

        let cumulated = self.calculate_linear_interest(
            &reserve.current_liquidity_rate,
            reserve.last_update_timestamp,
            timestamp,
        );
        self.ray_mul(&cumulated, &reserve.liquidity_index)
    }

    /// Variable borrow index as of the current block, without writing anything.
    fn get_normalized_debt(&self, reserve: &ReserveData<Self::Api>) -> BigUint {
        let timestamp = self.blockchain().get_block_timestamp();
        if reserve.last_update_timestamp == timestamp {
            return reserve.variable_borrow_index.clone();
        }

        let cumulated = self.calculate_compounded_interest(
            &reserve.current_variable_borrow_rate,
            reserve.last_update_timestamp,
            timestamp,
        );
        self.ray_mul(&cumulated, &reserve.variable_borrow_index)
    }
}
