multiversx_sc::imports!();

use common_errors::{
    ERROR_ASSET_NOT_LISTED, ERROR_INVALID_AMOUNT, ERROR_RESERVE_PAUSED,
    ERROR_USER_IN_ISOLATION_MODE_OR_LTV_ZERO,
};
use common_structs::ScaledTokenKind;

use crate::{
    account, cache::Cache, oracle, reserve, storage, tokens, user_config, utils, validation,
};

/// The CollateralModule decides which supply balances back a user's debt, and lets supply balances
/// change hands.
#[multiversx_sc::module]
pub trait CollateralModule:
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
    /// Enables or disables the caller's supply of `asset` as collateral.
    ///
    /// Enabling is subject to the isolation rules; disabling must leave the position healthy and
    /// respect the zero LTV rule. Setting the flag to its current value does nothing.
    ///
    /// # Arguments
    /// - `asset`: The reserve.
    /// - `use_as_collateral`: The desired flag.
    #[endpoint(setUserUseReserveAsCollateral)]
    fn set_user_use_reserve_as_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        use_as_collateral: bool,
    ) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let cache = Cache::new(self, &asset);
        let index = self.get_normalized_income(&cache.reserve);
        let user_balance = self.balance_of_at(ScaledTokenKind::Supply, &asset, &caller, &index);
        self.validate_set_use_reserve_as_collateral(&cache, &user_balance);

        let reserve_id = cache.reserve.id;
        let reserve_configuration = cache.configuration.clone();
        drop(cache);

        let mut configuration = self.get_user_configuration(&caller);
        if use_as_collateral == configuration.is_using_as_collateral(reserve_id) {
            return;
        }

        if use_as_collateral {
            require!(
                self.validate_use_as_collateral(&configuration, &reserve_configuration),
                ERROR_USER_IN_ISOLATION_MODE_OR_LTV_ZERO
            );
            self.enable_collateral(&mut configuration, reserve_id, &asset, &caller);
        } else {
            self.disable_collateral(&mut configuration, reserve_id, &asset, &caller);
            self.validate_hf_and_ltv(&asset, &caller, &configuration);
        }

        self.store_user_configuration(&caller, configuration);
    }

    /// Transfers `amount` of the caller's supply balance of `asset` to `to`.
    ///
    /// **Process**:
    /// 1. Both balances are valued at the normalized income; the reserve itself is not updated.
    /// 2. The scaled ledger realises both sides' interest and moves the balance.
    /// 3. The reserve must not be paused. If the balance was the sender's collateral and they borrow,
    ///    the sender must stay healthy; moving all of it disables it.
    /// 4. A receiver with no prior balance gets it as collateral when the isolation rules allow.
    ///
    /// # Arguments
    /// - `asset`: The reserve.
    /// - `to`: The receiver.
    /// - `amount`: Real amount to move.
    #[endpoint(transferSupply)]
    fn transfer_supply(&self, asset: EgldOrEsdtTokenIdentifier, to: ManagedAddress, amount: BigUint) {
        self.require_not_paused();
        let from = self.blockchain().get_caller();
        require!(amount > BigUint::zero(), ERROR_INVALID_AMOUNT);

        let reserve_mapper = self.reserve_data(&asset);
        require!(!reserve_mapper.is_empty(), ERROR_ASSET_NOT_LISTED);
        let reserve = reserve_mapper.get();
        let reserve_configuration = self.reserve_configuration(&asset).get();

        let index = self.get_normalized_income(&reserve);
        let from_balance_before =
            self.balance_of_at(ScaledTokenKind::Supply, &asset, &from, &index);
        let to_balance_before = self.balance_of_at(ScaledTokenKind::Supply, &asset, &to, &index);

        self.transfer_scaled(&asset, &from, &to, &amount, &index);

        require!(!reserve_configuration.is_paused, ERROR_RESERVE_PAUSED);
        if from == to {
            return;
        }

        let mut from_configuration = self.get_user_configuration(&from);
        if from_configuration.is_using_as_collateral(reserve.id) {
            if from_configuration.is_borrowing_any() {
                self.validate_hf_and_ltv(&asset, &from, &from_configuration);
            }
            if from_balance_before == amount {
                self.disable_collateral(&mut from_configuration, reserve.id, &asset, &from);
                self.store_user_configuration(&from, from_configuration);
            }
        }

        if to_balance_before == BigUint::zero() {
            let mut to_configuration = self.get_user_configuration(&to);
            if self.validate_use_as_collateral(&to_configuration, &reserve_configuration) {
                self.enable_collateral(&mut to_configuration, reserve.id, &asset, &to);
                self.store_user_configuration(&to, to_configuration);
            }
        }
    }
}
