multiversx_sc::imports!();

use common_errors::{ERROR_ASSET_NOT_LISTED, ERROR_NO_OUTSTANDING_STABLE_DEBT};
use common_structs::{InterestRateMode, ScaledTokenKind};

use crate::{
    account, cache::Cache, oracle, reserve, storage, tokens, user_config, utils, validation,
};

/// The BorrowModule opens, repays and re-prices debt positions.
///
/// **Scope**: Variable debt lives in the scaled ledger and follows the variable borrow index; stable
/// debt lives in the stable ledger at the rate in force when it was taken. Every action here follows
/// the cache, update state, validate, mutate, update rates sequence of the reserve ledger.
#[multiversx_sc::module]
pub trait BorrowModule:
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
    + validation::ValidationModule
    + utils::UtilsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Borrows `amount` of `asset` against the caller's collateral.
    ///
    /// **Process**:
    /// 1. Caches the reserve, brings it up to date and resolves the caller's isolation mode.
    /// 2. Validates the borrow (caps, isolation, health factor, collateral coverage, stable rules).
    /// 3. Mints stable debt at the current stable rate, or variable debt at the updated index.
    /// 4. Flags the reserve as borrowed and grows the isolated debt if the caller is isolated.
    /// 5. Recomputes the rates with the amount as taken liquidity, commits the reserve.
    /// 6. Transfers the underlying and emits `borrow`.
    ///
    /// # Arguments
    /// - `asset`: The reserve to borrow from.
    /// - `amount`: The amount to borrow.
    /// - `interest_rate_mode`: `Stable` or `Variable`.
    #[endpoint(borrow)]
    fn borrow(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        interest_rate_mode: InterestRateMode,
    ) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new(self, &asset);
        self.update_state(&mut cache);

        let mut configuration = self.get_user_configuration(&caller);
        let isolation = self.get_isolation_mode_state(&configuration);

        self.validate_borrow(
            &cache,
            &caller,
            &configuration,
            &isolation,
            &amount,
            interest_rate_mode,
        );

        let current_stable_rate = cache.reserve.current_stable_borrow_rate.clone();
        let is_first_borrowing = if interest_rate_mode == InterestRateMode::Stable {
            let (is_first, next_total, next_avg_rate) =
                self.mint_stable(&asset, &caller, &caller, &amount, &current_stable_rate);
            cache.next_total_stable_debt = next_total;
            cache.next_avg_stable_borrow_rate = next_avg_rate;
            is_first
        } else {
            let (is_first, _) = self.mint_scaled(
                ScaledTokenKind::VariableDebt,
                &asset,
                &caller,
                &caller,
                &amount,
                &cache.next_variable_borrow_index,
            );
            self.refresh_scaled_variable_debt(&mut cache);
            is_first
        };

        if is_first_borrowing {
            configuration.set_borrowing(cache.reserve.id, true);
        }

        self.increase_isolated_debt(&mut cache, &isolation, &amount);

        self.update_interest_rates(&mut cache, &BigUint::zero(), &amount);
        let borrow_rate = if interest_rate_mode == InterestRateMode::Stable {
            current_stable_rate
        } else {
            cache.reserve.current_variable_borrow_rate.clone()
        };

        drop(cache);
        self.store_user_configuration(&caller, configuration);

        self.send_asset(&asset, &amount, &caller);
        self.borrow_event(
            &asset,
            &caller,
            &caller,
            &amount,
            interest_rate_mode,
            &borrow_rate,
        );
    }

    /// Repays debt of `on_behalf_of` (the caller by default) with the attached payment.
    ///
    /// At most the outstanding debt of the selected kind is repaid; any excess payment is sent back
    /// to the caller.
    ///
    /// # Arguments
    /// - `interest_rate_mode`: The kind of debt to repay.
    /// - `on_behalf_of`: Optional debtor.
    ///
    /// # Returns
    /// - `BigUint`: The amount actually repaid.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(
        &self,
        interest_rate_mode: InterestRateMode,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) -> BigUint {
        self.require_not_paused();
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let caller = self.blockchain().get_caller();
        let on_behalf_of = on_behalf_of.into_option().unwrap_or_else(|| caller.clone());

        let payback_amount =
            self.execute_repay(&asset, &amount, interest_rate_mode, &caller, &on_behalf_of, false);

        if amount > payback_amount {
            self.send_asset(&asset, &(&amount - &payback_amount), &caller);
        }

        payback_amount
    }

    /// Repays the caller's own debt by burning their supply balance of the same asset.
    ///
    /// No underlying moves; the reserve's available liquidity is unchanged.
    ///
    /// # Arguments
    /// - `asset`: The reserve.
    /// - `amount`: Optional amount; absent uses the whole supply balance.
    /// - `interest_rate_mode`: The kind of debt to repay.
    ///
    /// # Returns
    /// - `BigUint`: The amount actually repaid.
    #[endpoint(repayWithSupplyTokens)]
    fn repay_with_supply_tokens(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        interest_rate_mode: InterestRateMode,
        amount: OptionalValue<BigUint>,
    ) -> BigUint {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let amount = match amount.into_option() {
            Some(amount) => amount,
            None => {
                let reserve_mapper = self.reserve_data(&asset);
                require!(!reserve_mapper.is_empty(), ERROR_ASSET_NOT_LISTED);
                let index = self.get_normalized_income(&reserve_mapper.get());
                self.balance_of_at(ScaledTokenKind::Supply, &asset, &caller, &index)
            },
        };

        self.execute_repay(&asset, &amount, interest_rate_mode, &caller, &caller, true)
    }

    fn execute_repay(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        interest_rate_mode: InterestRateMode,
        caller: &ManagedAddress,
        on_behalf_of: &ManagedAddress,
        use_supply_tokens: bool,
    ) -> BigUint {
        let mut cache = Cache::new(self, asset);
        self.update_state(&mut cache);

        let (stable_debt, variable_debt) = self.get_user_current_debt(&cache, on_behalf_of);
        self.validate_repay(
            &cache,
            amount,
            interest_rate_mode,
            on_behalf_of,
            &stable_debt,
            &variable_debt,
        );

        let outstanding = if interest_rate_mode == InterestRateMode::Stable {
            stable_debt.clone()
        } else {
            variable_debt.clone()
        };
        let payback_amount = self.get_min(amount.clone(), outstanding);

        if interest_rate_mode == InterestRateMode::Stable {
            let (next_total, next_avg_rate) = self.burn_stable(asset, on_behalf_of, &payback_amount);
            cache.next_total_stable_debt = next_total;
            cache.next_avg_stable_borrow_rate = next_avg_rate;
        } else {
            self.burn_scaled(
                ScaledTokenKind::VariableDebt,
                asset,
                on_behalf_of,
                on_behalf_of,
                &payback_amount,
                &cache.next_variable_borrow_index,
            );
            self.refresh_scaled_variable_debt(&mut cache);
        }

        let liquidity_added = if use_supply_tokens {
            BigUint::zero()
        } else {
            payback_amount.clone()
        };
        self.update_interest_rates(&mut cache, &liquidity_added, &BigUint::zero());

        let mut configuration = self.get_user_configuration(on_behalf_of);
        let isolation = self.get_isolation_mode_state(&configuration);
        if stable_debt + variable_debt == payback_amount {
            configuration.set_borrowing(cache.reserve.id, false);
        }
        self.decrease_isolated_debt(&mut cache, &isolation, &payback_amount);

        if use_supply_tokens {
            let own_address = self.blockchain().get_sc_address();
            self.burn_scaled(
                ScaledTokenKind::Supply,
                asset,
                caller,
                &own_address,
                &payback_amount,
                &cache.next_liquidity_index,
            );
            let reserve_id = cache.reserve.id;
            if configuration.is_using_as_collateral(reserve_id)
                && self.scaled_balance_of(ScaledTokenKind::Supply, asset, caller) == BigUint::zero()
            {
                self.disable_collateral(&mut configuration, reserve_id, asset, caller);
            }
        }

        drop(cache);
        self.store_user_configuration(on_behalf_of, configuration);

        self.repay_event(asset, on_behalf_of, caller, &payback_amount, use_supply_tokens);

        payback_amount
    }

    /// Moves the caller's whole debt of `asset` from `interest_rate_mode` to the other mode.
    ///
    /// Stable to variable burns the compounded stable debt and mints the same amount of variable
    /// debt; variable to stable does the reverse at the reserve's current stable rate.
    ///
    /// # Arguments
    /// - `asset`: The reserve.
    /// - `interest_rate_mode`: The mode the debt is currently in.
    #[endpoint(swapBorrowRateMode)]
    fn swap_borrow_rate_mode(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        interest_rate_mode: InterestRateMode,
    ) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new(self, &asset);
        self.update_state(&mut cache);

        let configuration = self.get_user_configuration(&caller);
        let (stable_debt, variable_debt) = self.get_user_current_debt(&cache, &caller);
        self.validate_swap_rate_mode(
            &cache,
            &caller,
            &configuration,
            &stable_debt,
            &variable_debt,
            interest_rate_mode,
        );

        if interest_rate_mode == InterestRateMode::Stable {
            let (next_total, next_avg_rate) = self.burn_stable(&asset, &caller, &stable_debt);
            cache.next_total_stable_debt = next_total;
            cache.next_avg_stable_borrow_rate = next_avg_rate;

            self.mint_scaled(
                ScaledTokenKind::VariableDebt,
                &asset,
                &caller,
                &caller,
                &stable_debt,
                &cache.next_variable_borrow_index,
            );
            self.refresh_scaled_variable_debt(&mut cache);
        } else {
            self.burn_scaled(
                ScaledTokenKind::VariableDebt,
                &asset,
                &caller,
                &caller,
                &variable_debt,
                &cache.next_variable_borrow_index,
            );
            self.refresh_scaled_variable_debt(&mut cache);

            let current_stable_rate = cache.reserve.current_stable_borrow_rate.clone();
            let (_, next_total, next_avg_rate) =
                self.mint_stable(&asset, &caller, &caller, &variable_debt, &current_stable_rate);
            cache.next_total_stable_debt = next_total;
            cache.next_avg_stable_borrow_rate = next_avg_rate;
        }

        self.update_interest_rates(&mut cache, &BigUint::zero(), &BigUint::zero());
        drop(cache);

        self.swap_borrow_rate_mode_event(&asset, &caller, interest_rate_mode);
    }

    /// Re-prices the stable debt of `user` at the reserve's current stable rate.
    ///
    /// Permissionless, and only possible while suppliers earn no more than they would if all debt
    /// were variable.
    ///
    /// # Arguments
    /// - `asset`: The reserve.
    /// - `user`: The stable borrower to rebalance.
    #[endpoint(rebalanceStableBorrowRate)]
    fn rebalance_stable_borrow_rate(&self, asset: EgldOrEsdtTokenIdentifier, user: ManagedAddress) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new(self, &asset);
        self.update_state(&mut cache);
        self.validate_rebalance_stable_borrow_rate(&cache);

        let stable_debt = self.stable_balance_of(&asset, &user);
        require!(
            stable_debt > BigUint::zero(),
            ERROR_NO_OUTSTANDING_STABLE_DEBT
        );

        self.burn_stable(&asset, &user, &stable_debt);
        let current_stable_rate = cache.reserve.current_stable_borrow_rate.clone();
        let (_, next_total, next_avg_rate) =
            self.mint_stable(&asset, &caller, &user, &stable_debt, &current_stable_rate);
        cache.next_total_stable_debt = next_total;
        cache.next_avg_stable_borrow_rate = next_avg_rate;

        self.update_interest_rates(&mut cache, &BigUint::zero(), &BigUint::zero());
        drop(cache);

        self.rebalance_stable_borrow_rate_event(&asset, &user);
    }

    /// Returns `(stable_debt, variable_debt)` of `user` on the cached reserve.
    fn get_user_current_debt(
        &self,
        cache: &Cache<Self>,
        user: &ManagedAddress,
    ) -> (BigUint, BigUint) {
        let stable_debt = self.stable_balance_of(&cache.asset, user);
        let variable_debt = self.balance_of_at(
            ScaledTokenKind::VariableDebt,
            &cache.asset,
            user,
            &cache.next_variable_borrow_index,
        );

        (stable_debt, variable_debt)
    }

    fn refresh_scaled_variable_debt(&self, cache: &mut Cache<Self>) {
        cache.next_scaled_variable_debt = self
            .scaled_total_supply(ScaledTokenKind::VariableDebt, &cache.asset)
            .get();
    }
}
