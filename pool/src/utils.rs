multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::IsolationModeState;

use crate::{cache::Cache, storage, validation};

/// The `UtilsModule` trait provides helpers shared by the pool actions.
///
/// **Scope**: Payouts and the isolated debt bookkeeping that borrow and repay
/// share.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + crate::reserve::ReserveLogicModule
    + crate::tokens::scaled::ScaledTokenModule
    + crate::tokens::stable::StableDebtModule
    + crate::oracle::OracleModule
    + crate::user_config::UserConfigModule
    + crate::account::AccountDataModule
    + validation::ValidationModule
{
    /// Transfers `amount` of `asset` to `to`.
    ///
    /// Callers drop their reserve cache first, so a re-entering call sees committed state.
    fn send_asset(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(asset.clone(), 0, amount.clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Adds a borrow to the isolated debt of the user's isolated collateral.
    fn increase_isolated_debt(
        &self,
        cache: &mut Cache<Self>,
        isolation: &IsolationModeState<Self::Api>,
        amount: &BigUint,
    ) {
        if !isolation.is_active {
            return;
        }
        let Some(collateral_asset) = &isolation.collateral_asset else {
            return;
        };

        let added = self.to_isolated_debt_units(amount, cache.configuration.decimals);
        let total_debt = self.current_isolation_mode_total_debt(cache, collateral_asset) + added;
        self.store_isolation_mode_total_debt(cache, collateral_asset, &total_debt);
    }

    /// Removes a repayment from the isolated debt of the user's isolated collateral, flooring at
    /// zero.
    fn decrease_isolated_debt(
        &self,
        cache: &mut Cache<Self>,
        isolation: &IsolationModeState<Self::Api>,
        amount: &BigUint,
    ) {
        if !isolation.is_active {
            return;
        }
        let Some(collateral_asset) = &isolation.collateral_asset else {
            return;
        };

        let repaid = self.to_isolated_debt_units(amount, cache.configuration.decimals);
        let current = self.current_isolation_mode_total_debt(cache, collateral_asset);
        let total_debt = if current <= repaid {
            BigUint::zero()
        } else {
            current - repaid
        };
        self.store_isolation_mode_total_debt(cache, collateral_asset, &total_debt);
    }

    // The acted on reserve is committed by its cache; writing its storage here would be overwritten.
    fn store_isolation_mode_total_debt(
        &self,
        cache: &mut Cache<Self>,
        collateral_asset: &EgldOrEsdtTokenIdentifier,
        total_debt: &BigUint,
    ) {
        if collateral_asset == &cache.asset {
            cache.reserve.isolation_mode_total_debt = total_debt.clone();
        } else {
            self.reserve_data(collateral_asset)
                .update(|reserve| reserve.isolation_mode_total_debt = total_debt.clone());
        }

        self.isolation_mode_total_debt_updated_event(collateral_asset, total_debt);
    }
}
