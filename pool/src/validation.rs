multiversx_sc::imports!();

use common_constants::{DEBT_CEILING_DECIMALS, HEALTH_FACTOR_LIQUIDATION_THRESHOLD};
use common_errors::*;
use common_structs::{
    InterestRateMode, IsolationModeState, ScaledTokenKind, UserConfiguration,
};

use crate::{account, cache::Cache, oracle, reserve, storage, tokens, user_config};

/// The ValidationModule holds the preconditions of every pool action.
///
/// **Scope**: Checks run against the reserve cache after `update_state` and before any ledger is
/// touched, except the health factor checks of withdraw, transfer and collateral disabling, which
/// need the post-action balances.
///
/// **Goal**: Reject every invalid action with a specific reason before it can change state.
#[multiversx_sc::module]
pub trait ValidationModule:
    storage::Storage
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
    + reserve::ReserveLogicModule
    + tokens::scaled::ScaledTokenModule
    + tokens::stable::StableDebtModule
    + oracle::OracleModule
    + user_config::UserConfigModule
    + account::AccountDataModule
{
    fn require_active_not_paused(&self, cache: &Cache<Self>) {
        require!(cache.configuration.is_active, ERROR_RESERVE_INACTIVE);
        require!(!cache.configuration.is_paused, ERROR_RESERVE_PAUSED);
    }

    fn require_active_not_paused_not_frozen(&self, cache: &Cache<Self>) {
        self.require_active_not_paused(cache);
        require!(!cache.configuration.is_frozen, ERROR_RESERVE_FROZEN);
    }

    /// Supply: non zero amount, usable reserve, and the supply cap.
    ///
    /// **Formula**: `(scaled_total_supply + accrued_to_treasury).rayMul(liquidity_index) + amount <= supply_cap * 10^decimals`
    fn validate_supply(&self, cache: &Cache<Self>, amount: &BigUint) {
        require!(amount > &BigUint::zero(), ERROR_INVALID_AMOUNT);
        self.require_active_not_paused_not_frozen(cache);

        let supply_cap = cache.configuration.supply_cap;
        if supply_cap != 0 {
            let scaled_supply = self
                .scaled_total_supply(ScaledTokenKind::Supply, &cache.asset)
                .get()
                + &cache.reserve.accrued_to_treasury;
            let total_supply = self.ray_mul(&scaled_supply, &cache.next_liquidity_index) + amount;
            require!(
                total_supply <= cache.configuration.cap_in_units::<Self::Api>(supply_cap),
                ERROR_SUPPLY_CAP_EXCEEDED
            );
        }
    }

    fn validate_withdraw(&self, cache: &Cache<Self>, amount: &BigUint, user_balance: &BigUint) {
        require!(amount > &BigUint::zero(), ERROR_INVALID_AMOUNT);
        require!(
            amount <= user_balance,
            ERROR_NOT_ENOUGH_AVAILABLE_USER_BALANCE
        );
        self.require_active_not_paused(cache);
    }

    /// Borrow preconditions.
    ///
    /// **Process**:
    /// 1. Amount, reserve flags, borrowing enabled, valid rate mode.
    /// 2. Borrow cap over stable plus variable debt plus `amount`.
    /// 3. Isolation mode: the asset must be borrowable in isolation and the collateral's isolated
    ///    debt must stay under its ceiling.
    /// 4. Account: some collateral, non zero LTV, healthy position, and the collateral at average
    ///    LTV must cover existing debt plus the new borrow.
    /// 5. Stable mode: stable borrowing enabled, the borrowed asset is not the user's own LTV
    ///    bearing collateral unless the borrow exceeds it, and the amount is under the maximum
    ///    stable loan size.
    ///
    /// # Arguments
    /// - `cache`: The borrowed reserve, after `update_state`.
    /// - `user`: The debtor.
    /// - `configuration`: The debtor's bitmap.
    /// - `isolation`: The debtor's isolation mode.
    /// - `amount`: The amount borrowed.
    /// - `mode`: Stable or variable.
    fn validate_borrow(
        &self,
        cache: &Cache<Self>,
        user: &ManagedAddress,
        configuration: &UserConfiguration<Self::Api>,
        isolation: &IsolationModeState<Self::Api>,
        amount: &BigUint,
        mode: InterestRateMode,
    ) {
        require!(amount > &BigUint::zero(), ERROR_INVALID_AMOUNT);
        self.require_active_not_paused_not_frozen(cache);
        require!(
            cache.configuration.borrowing_enabled,
            ERROR_BORROWING_NOT_ENABLED
        );
        require!(
            mode == InterestRateMode::Variable || mode == InterestRateMode::Stable,
            ERROR_INVALID_INTEREST_RATE_MODE
        );

        let borrow_cap = cache.configuration.borrow_cap;
        if borrow_cap != 0 {
            let total_variable_debt = self.ray_mul(
                &cache.curr_scaled_variable_debt,
                &cache.next_variable_borrow_index,
            );
            let total_debt = &cache.curr_total_stable_debt + &total_variable_debt + amount;
            require!(
                total_debt <= cache.configuration.cap_in_units::<Self::Api>(borrow_cap),
                ERROR_BORROW_CAP_EXCEEDED
            );
        }

        if isolation.is_active {
            require!(
                cache.configuration.borrowable_in_isolation,
                ERROR_ASSET_NOT_BORROWABLE_IN_ISOLATION
            );
            if let Some(collateral_asset) = &isolation.collateral_asset {
                let isolated_debt = self.current_isolation_mode_total_debt(cache, collateral_asset);
                let added = self.to_isolated_debt_units(amount, cache.configuration.decimals);
                require!(
                    isolated_debt + added <= BigUint::from(isolation.debt_ceiling),
                    ERROR_DEBT_CEILING_EXCEEDED
                );
            }
        }

        let account = self.calculate_user_account_data(user, configuration);
        require!(
            account.total_collateral_base > BigUint::zero(),
            ERROR_COLLATERAL_BALANCE_IS_ZERO
        );
        require!(account.ltv != 0, ERROR_LTV_VALIDATION_FAILED);
        require!(
            account.health_factor > BigUint::from(HEALTH_FACTOR_LIQUIDATION_THRESHOLD),
            ERROR_HEALTH_FACTOR_LOWER_THAN_LIQUIDATION_THRESHOLD
        );

        let amount_in_base = amount * &self.get_asset_price(&cache.asset) / &cache.asset_unit();
        let collateral_needed =
            self.percent_div(&(&account.total_debt_base + &amount_in_base), account.ltv);
        require!(
            collateral_needed <= account.total_collateral_base,
            ERROR_COLLATERAL_CANNOT_COVER_NEW_BORROW
        );

        if mode == InterestRateMode::Stable {
            require!(
                cache.configuration.stable_borrowing_enabled,
                ERROR_STABLE_BORROWING_NOT_ENABLED
            );
            require!(
                !configuration.is_using_as_collateral(cache.reserve.id)
                    || cache.configuration.ltv == 0
                    || amount > &self.balance_of_at(
                        ScaledTokenKind::Supply,
                        &cache.asset,
                        user,
                        &cache.next_liquidity_index,
                    ),
                ERROR_COLLATERAL_SAME_AS_BORROWING_CURRENCY
            );

            let max_loan_size_stable = self.percent_mul(
                &cache.reserve.virtual_underlying_balance,
                cache.configuration.max_stable_rate_borrow_size_percent,
            );
            require!(
                amount <= &max_loan_size_stable,
                ERROR_AMOUNT_BIGGER_THAN_MAX_LOAN_SIZE_STABLE
            );
        }
    }

    /// Repay preconditions: non zero amount, usable reserve, debt of the selected kind, and no
    /// stable repayment in the block of the stable borrow.
    fn validate_repay(
        &self,
        cache: &Cache<Self>,
        amount: &BigUint,
        mode: InterestRateMode,
        on_behalf_of: &ManagedAddress,
        stable_debt: &BigUint,
        variable_debt: &BigUint,
    ) {
        require!(amount > &BigUint::zero(), ERROR_INVALID_AMOUNT);
        self.require_active_not_paused(cache);

        let stable_last_update = self
            .get_stable_position(&cache.asset, on_behalf_of)
            .last_update_timestamp;
        require!(
            stable_last_update < cache.timestamp || mode == InterestRateMode::Variable,
            ERROR_SAME_BLOCK_BORROW_REPAY
        );

        require!(
            (mode == InterestRateMode::Stable && stable_debt > &BigUint::zero())
                || (mode == InterestRateMode::Variable && variable_debt > &BigUint::zero()),
            ERROR_NO_DEBT_OF_SELECTED_TYPE
        );
    }

    fn validate_swap_rate_mode(
        &self,
        cache: &Cache<Self>,
        user: &ManagedAddress,
        configuration: &UserConfiguration<Self::Api>,
        stable_debt: &BigUint,
        variable_debt: &BigUint,
        current_mode: InterestRateMode,
    ) {
        self.require_active_not_paused_not_frozen(cache);

        match current_mode {
            InterestRateMode::Stable => {
                require!(
                    stable_debt > &BigUint::zero(),
                    ERROR_NO_OUTSTANDING_STABLE_DEBT
                );
            },
            InterestRateMode::Variable => {
                require!(
                    variable_debt > &BigUint::zero(),
                    ERROR_NO_OUTSTANDING_VARIABLE_DEBT
                );
                require!(
                    cache.configuration.stable_borrowing_enabled,
                    ERROR_STABLE_BORROWING_NOT_ENABLED
                );
                require!(
                    !configuration.is_using_as_collateral(cache.reserve.id)
                        || cache.configuration.ltv == 0
                        || stable_debt + variable_debt
                            > self.balance_of_at(
                                ScaledTokenKind::Supply,
                                &cache.asset,
                                user,
                                &cache.next_liquidity_index,
                            ),
                    ERROR_COLLATERAL_SAME_AS_BORROWING_CURRENCY
                );
            },
            InterestRateMode::None => sc_panic!(ERROR_INVALID_INTEREST_RATE_MODE),
        }
    }

    /// Rebalancing is allowed only while suppliers earn no more than they would if every loan
    /// paid the variable rate.
    fn validate_rebalance_stable_borrow_rate(&self, cache: &Cache<Self>) {
        self.require_active_not_paused(cache);

        let total_debt = &cache.curr_total_stable_debt + &cache.next_total_variable_debt();
        let (liquidity_rate_variable_debt_only, _, _) = self.calculate_interest_rates(
            &cache.strategy,
            &common_structs::InterestRateInputs {
                unbacked: cache.reserve.unbacked.clone(),
                liquidity_added: BigUint::zero(),
                liquidity_taken: BigUint::zero(),
                total_stable_debt: BigUint::zero(),
                total_variable_debt: total_debt,
                average_stable_borrow_rate: BigUint::zero(),
                reserve_factor: cache.configuration.reserve_factor,
                virtual_underlying_balance: cache.reserve.virtual_underlying_balance.clone(),
            },
        );

        require!(
            cache.curr_liquidity_rate <= liquidity_rate_variable_debt_only,
            ERROR_INTEREST_RATE_REBALANCE_CONDITIONS_NOT_MET
        );
    }

    fn validate_set_use_reserve_as_collateral(&self, cache: &Cache<Self>, user_balance: &BigUint) {
        require!(
            user_balance > &BigUint::zero(),
            ERROR_UNDERLYING_BALANCE_ZERO
        );
        self.require_active_not_paused(cache);
    }

    /// The position must stay out of liquidation after the action.
    ///
    /// # Returns
    /// - `bool`: Whether the user still holds some zero LTV collateral.
    fn validate_health_factor(
        &self,
        user: &ManagedAddress,
        configuration: &UserConfiguration<Self::Api>,
    ) -> bool {
        let account = self.calculate_user_account_data(user, configuration);
        require!(
            self.is_healthy(&account.health_factor),
            ERROR_HEALTH_FACTOR_LOWER_THAN_LIQUIDATION_THRESHOLD
        );

        account.has_zero_ltv_collateral
    }

    /// Health factor check plus the zero LTV rule: while a user holds zero LTV collateral, only
    /// that collateral may be withdrawn or disabled.
    fn validate_hf_and_ltv(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        configuration: &UserConfiguration<Self::Api>,
    ) {
        let has_zero_ltv_collateral = self.validate_health_factor(user, configuration);
        require!(
            !has_zero_ltv_collateral || self.reserve_configuration(asset).get().ltv == 0,
            ERROR_LTV_VALIDATION_FAILED
        );
    }

    /// Isolated debt of `collateral_asset`, read from the cache when it is the reserve being acted on.
    fn current_isolation_mode_total_debt(
        &self,
        cache: &Cache<Self>,
        collateral_asset: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        if collateral_asset == &cache.asset {
            return cache.reserve.isolation_mode_total_debt.clone();
        }

        self.reserve_data(collateral_asset).get().isolation_mode_total_debt
    }

    /// Converts an amount of the borrowed asset to the 2 decimal unit debt ceilings use. Truncates.
    fn to_isolated_debt_units(&self, amount: &BigUint, decimals: usize) -> BigUint {
        if decimals >= DEBT_CEILING_DECIMALS {
            let divisor = BigUint::from(10u64).pow((decimals - DEBT_CEILING_DECIMALS) as u32);
            amount / &divisor
        } else {
            let multiplier = BigUint::from(10u64).pow((DEBT_CEILING_DECIMALS - decimals) as u32);
            amount * &multiplier
        }
    }
}
