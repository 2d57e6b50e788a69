multiversx_sc::imports!();

use common_structs::ScaledTokenKind;

use crate::{
    account, cache::Cache, oracle, reserve, storage, tokens, user_config, utils, validation,
};

/// The SupplyModule lets users deposit underlying for interest bearing supply balances and take it
/// back.
#[multiversx_sc::module]
pub trait SupplyModule:
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
    /// Supplies the attached payment to its reserve.
    ///
    /// **Purpose**: Credits `on_behalf_of` (the caller by default) with supply balance that grows
    /// with the liquidity index.
    ///
    /// **Process**:
    /// 1. Caches the reserve and brings it up to date.
    /// 2. Validates amount, reserve flags and supply cap.
    /// 3. Mints supply balance at the updated liquidity index.
    /// 4. Recomputes the rates with the payment as added liquidity.
    /// 5. On the first supply of this asset, enables it as collateral when the user's isolation
    ///    state allows it.
    /// 6. Emits `supply`.
    ///
    /// # Arguments
    /// - `on_behalf_of`: Optional beneficiary of the supply.
    #[payable("*")]
    #[endpoint(supply)]
    fn supply(&self, on_behalf_of: OptionalValue<ManagedAddress>) {
        self.require_not_paused();
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let caller = self.blockchain().get_caller();
        let on_behalf_of = on_behalf_of.into_option().unwrap_or_else(|| caller.clone());

        let mut cache = Cache::new(self, &asset);
        self.update_state(&mut cache);
        self.validate_supply(&cache, &amount);

        let (is_first_supply, _) = self.mint_scaled(
            ScaledTokenKind::Supply,
            &asset,
            &caller,
            &on_behalf_of,
            &amount,
            &cache.next_liquidity_index,
        );
        self.update_interest_rates(&mut cache, &amount, &BigUint::zero());

        if is_first_supply {
            let mut configuration = self.get_user_configuration(&on_behalf_of);
            if self.validate_use_as_collateral(&configuration, &cache.configuration) {
                self.enable_collateral(&mut configuration, cache.reserve.id, &asset, &on_behalf_of);
                self.store_user_configuration(&on_behalf_of, configuration);
            }
        }

        self.supply_event(&asset, &caller, &on_behalf_of, &amount);
    }

    /// Withdraws supplied underlying.
    ///
    /// **Purpose**: Burns supply balance of the caller and sends the underlying to `to` (the caller
    /// by default).
    ///
    /// **Process**:
    /// 1. Caches the reserve and brings it up to date.
    /// 2. Resolves the amount, the whole balance when absent, and validates it.
    /// 3. Burns supply balance, recomputes the rates with the amount as taken liquidity.
    /// 4. Withdrawing the whole balance of a collateral disables it.
    /// 5. Commits the reserve; if the asset backed debt, the position must stay healthy.
    /// 6. Transfers the underlying and emits `withdraw`.
    ///
    /// # Arguments
    /// - `asset`: The reserve to withdraw from.
    /// - `amount`: Optional amount; absent withdraws everything.
    /// - `to`: Optional receiver of the underlying.
    ///
    /// # Returns
    /// - `BigUint`: The amount withdrawn.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: OptionalValue<BigUint>,
        to: OptionalValue<ManagedAddress>,
    ) -> BigUint {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        let to = to.into_option().unwrap_or_else(|| caller.clone());

        let mut cache = Cache::new(self, &asset);
        self.update_state(&mut cache);

        let user_balance = self.balance_of_at(
            ScaledTokenKind::Supply,
            &asset,
            &caller,
            &cache.next_liquidity_index,
        );
        let amount_to_withdraw = amount.into_option().unwrap_or_else(|| user_balance.clone());
        self.validate_withdraw(&cache, &amount_to_withdraw, &user_balance);

        self.burn_scaled(
            ScaledTokenKind::Supply,
            &asset,
            &caller,
            &to,
            &amount_to_withdraw,
            &cache.next_liquidity_index,
        );
        self.update_interest_rates(&mut cache, &BigUint::zero(), &amount_to_withdraw);

        let reserve_id = cache.reserve.id;
        let mut configuration = self.get_user_configuration(&caller);
        let is_collateral = configuration.is_using_as_collateral(reserve_id);
        if is_collateral && amount_to_withdraw == user_balance {
            self.disable_collateral(&mut configuration, reserve_id, &asset, &caller);
        }

        drop(cache);

        if is_collateral && configuration.is_borrowing_any() {
            self.validate_hf_and_ltv(&asset, &caller, &configuration);
        }
        self.store_user_configuration(&caller, configuration);

        self.send_asset(&asset, &amount_to_withdraw, &to);
        self.withdraw_event(&asset, &caller, &to, &amount_to_withdraw);

        amount_to_withdraw
    }
}
