#![no_std]
use common_errors::{
    ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_OPTIMAL_STABLE_TO_TOTAL_DEBT_RATIO,
    ERROR_INVALID_OPTIMAL_USAGE_RATIO,
};
use common_structs::{InterestRateInputs, InterestRateStrategy};

multiversx_sc::imports!();

/// The InterestRates module maps the usage of a reserve to its liquidity, stable and variable
/// borrow rates.
///
/// **Scope**: Evaluates the two slope curve configured per reserve. Pure functions, no storage.
///
/// **Goal**: Keep borrowing cheap below the optimal usage ratio and make it steeply more expensive
/// above it, while paying suppliers the borrow interest net of the reserve factor.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Rejects curves whose optimal ratios exceed one ray. The first slope divides by the optimal
    /// usage ratio, so it must also be non zero.
    fn validate_interest_rate_strategy(&self, strategy: &InterestRateStrategy<Self::Api>) {
        let ray = self.ray();
        require!(
            strategy.optimal_usage_ratio > BigUint::zero() && strategy.optimal_usage_ratio <= ray,
            ERROR_INVALID_OPTIMAL_USAGE_RATIO
        );
        require!(
            strategy.optimal_stable_to_total_debt_ratio <= ray,
            ERROR_INVALID_OPTIMAL_STABLE_TO_TOTAL_DEBT_RATIO
        );
    }

    /// Stable rate charged at zero usage: `variable_rate_slope1 + base_stable_rate_offset`.
    fn get_base_stable_borrow_rate(&self, strategy: &InterestRateStrategy<Self::Api>) -> BigUint {
        &strategy.variable_rate_slope1 + &strategy.base_stable_rate_offset
    }

    /// Variable rate reached at full usage.
    fn get_max_variable_borrow_rate(
        &self,
        strategy: &InterestRateStrategy<Self::Api>,
    ) -> BigUint {
        &strategy.base_variable_borrow_rate
            + &strategy.variable_rate_slope1
            + &strategy.variable_rate_slope2
    }

    /// Calculates the rates of a reserve after an action adds or takes liquidity.
    ///
    /// **Scope**: Called by the reserve ledger on every state changing action, after the ledgers
    /// were mutated, with the new totals.
    ///
    /// **Goal**: Provide the rates that will be in force until the next action on the reserve.
    ///
    /// **Formula**:
    /// - `available = virtual_underlying_balance + liquidity_added - liquidity_taken`
    /// - `borrow_usage = total_debt / (available + total_debt)`
    /// - `supply_usage = total_debt / (available + total_debt + unbacked)`
    /// - Below optimal: `rate = base + slope1 * borrow_usage / optimal`.
    /// - Above optimal: `rate = base + slope1 + slope2 * (borrow_usage - optimal) / (1 - optimal)`.
    /// - The stable rate starts at `variable_rate_slope1 + base_stable_rate_offset`, follows the
    ///   same shape with its own slopes and gets `stable_rate_excess_offset` scaled by the excess
    ///   of `stable_debt / total_debt` over its optimal ratio.
    /// - `liquidity_rate = overall_borrow_rate * supply_usage * (1 - reserve_factor)`.
    ///
    /// With no debt every rate collapses to its base and the liquidity rate is zero.
    ///
    /// # Arguments
    /// - `strategy`: The reserve's curve.
    /// - `inputs`: Reserve totals after the action, plus the liquidity it moves.
    ///
    /// # Returns
    /// - `(BigUint, BigUint, BigUint)`: `(liquidity_rate, stable_borrow_rate, variable_borrow_rate)`, rays per annum.
    fn calculate_interest_rates(
        &self,
        strategy: &InterestRateStrategy<Self::Api>,
        inputs: &InterestRateInputs<Self::Api>,
    ) -> (BigUint, BigUint, BigUint) {
        let ray = self.ray();
        let total_debt = &inputs.total_stable_debt + &inputs.total_variable_debt;

        let mut variable_borrow_rate = strategy.base_variable_borrow_rate.clone();
        let mut stable_borrow_rate = self.get_base_stable_borrow_rate(strategy);

        let mut stable_to_total_debt_ratio = BigUint::zero();
        let mut borrow_usage_ratio = BigUint::zero();
        let mut supply_usage_ratio = BigUint::zero();

        if total_debt != BigUint::zero() {
            stable_to_total_debt_ratio = self.ray_div(&inputs.total_stable_debt, &total_debt);

            let available_before_taken =
                &inputs.virtual_underlying_balance + &inputs.liquidity_added;
            require!(
                available_before_taken >= inputs.liquidity_taken,
                ERROR_INSUFFICIENT_LIQUIDITY
            );
            let available_liquidity = available_before_taken - &inputs.liquidity_taken;
            let available_liquidity_plus_debt = available_liquidity + &total_debt;

            borrow_usage_ratio = self.ray_div(&total_debt, &available_liquidity_plus_debt);
            supply_usage_ratio = self.ray_div(
                &total_debt,
                &(available_liquidity_plus_debt + &inputs.unbacked),
            );
        }

        if borrow_usage_ratio > strategy.optimal_usage_ratio {
            let max_excess_usage_ratio = &ray - &strategy.optimal_usage_ratio;
            let excess_borrow_usage_ratio = self.ray_div(
                &(&borrow_usage_ratio - &strategy.optimal_usage_ratio),
                &max_excess_usage_ratio,
            );

            stable_borrow_rate += &strategy.stable_rate_slope1
                + &self.ray_mul(&strategy.stable_rate_slope2, &excess_borrow_usage_ratio);
            variable_borrow_rate += &strategy.variable_rate_slope1
                + &self.ray_mul(&strategy.variable_rate_slope2, &excess_borrow_usage_ratio);
        } else {
            stable_borrow_rate += self.ray_div(
                &self.ray_mul(&strategy.stable_rate_slope1, &borrow_usage_ratio),
                &strategy.optimal_usage_ratio,
            );
            variable_borrow_rate += self.ray_div(
                &self.ray_mul(&strategy.variable_rate_slope1, &borrow_usage_ratio),
                &strategy.optimal_usage_ratio,
            );
        }

        if stable_to_total_debt_ratio > strategy.optimal_stable_to_total_debt_ratio {
            let max_excess_stable_ratio = &ray - &strategy.optimal_stable_to_total_debt_ratio;
            let excess_stable_debt_ratio = self.ray_div(
                &(&stable_to_total_debt_ratio - &strategy.optimal_stable_to_total_debt_ratio),
                &max_excess_stable_ratio,
            );
            stable_borrow_rate +=
                self.ray_mul(&strategy.stable_rate_excess_offset, &excess_stable_debt_ratio);
        }

        let overall_borrow_rate = self.calculate_overall_borrow_rate(
            &inputs.total_stable_debt,
            &inputs.total_variable_debt,
            &variable_borrow_rate,
            &inputs.average_stable_borrow_rate,
        );
        let liquidity_rate = self.percent_mul(
            &self.ray_mul(&overall_borrow_rate, &supply_usage_ratio),
            common_constants::PERCENTAGE_FACTOR - inputs.reserve_factor,
        );

        (liquidity_rate, stable_borrow_rate, variable_borrow_rate)
    }

    /// Debt weighted average of the variable rate and the average stable rate.
    ///
    /// **Formula**: `(variable_debt * variable_rate + stable_debt * average_stable_rate) / total_debt`,
    /// with debts lifted to ray first. Zero when there is no debt.
    fn calculate_overall_borrow_rate(
        &self,
        total_stable_debt: &BigUint,
        total_variable_debt: &BigUint,
        current_variable_borrow_rate: &BigUint,
        current_average_stable_borrow_rate: &BigUint,
    ) -> BigUint {
        let total_debt = total_stable_debt + total_variable_debt;
        if total_debt == BigUint::zero() {
            return BigUint::zero();
        }

        let weighted_variable_rate = self.ray_mul(
            &self.wad_to_ray(total_variable_debt),
            current_variable_borrow_rate,
        );
        let weighted_stable_rate = self.ray_mul(
            &self.wad_to_ray(total_stable_debt),
            current_average_stable_borrow_rate,
        );

        self.ray_div(
            &(weighted_variable_rate + weighted_stable_rate),
            &self.wad_to_ray(&total_debt),
        )
    }
}
