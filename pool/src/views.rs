multiversx_sc::imports!();

use common_errors::ERROR_ASSET_NOT_LISTED;
use common_structs::{
    IsolationModeState, ReserveData, ReserveSnapshot, ScaledTokenKind, StableDebtPosition,
    UserAccountData,
};

use crate::{account, oracle, reserve, storage, tokens, user_config};

/// The ViewsModule exposes the read side of the reserves and the balance ledgers.
///
/// Balances are normalized to the current block without writing anything.
#[multiversx_sc::module]
pub trait ViewsModule:
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
    /// Liquidity index as of the current block.
    ///
    /// # Returns
    /// - `BigUint`: Ray scaled factor turning scaled supply into underlying.
    #[view(getReserveNormalizedIncome)]
    fn get_reserve_normalized_income(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        let reserve = self.get_listed_reserve(&asset);
        self.get_normalized_income(&reserve)
    }

    /// Variable borrow index as of the current block.
    #[view(getReserveNormalizedVariableDebt)]
    fn get_reserve_normalized_variable_debt(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        let reserve = self.get_listed_reserve(&asset);
        self.get_normalized_debt(&reserve)
    }

    /// Stored state of a reserve along with its configuration, rate curve and debt totals.
    #[view(getReserveData)]
    fn get_reserve_data(&self, asset: EgldOrEsdtTokenIdentifier) -> ReserveSnapshot<Self::Api> {
        let data = self.get_listed_reserve(&asset);

        ReserveSnapshot {
            configuration: self.reserve_configuration(&asset).get(),
            strategy: self.interest_rate_strategy(&asset).get(),
            scaled_total_supply: self.scaled_total_supply(ScaledTokenKind::Supply, &asset).get(),
            scaled_total_variable_debt: self
                .scaled_total_supply(ScaledTokenKind::VariableDebt, &asset)
                .get(),
            stable_debt: self.get_stable_totals(&asset),
            data,
            asset,
        }
    }

    #[view(getUserConfiguration)]
    fn get_user_configuration_data(&self, user: ManagedAddress) -> BigUint {
        self.user_configuration(&user).get()
    }

    /// Listed assets ordered by reserve id. Ids freed by a drop are skipped.
    #[view(getReservesList)]
    fn get_reserves_list(&self) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut reserves = MultiValueEncoded::new();
        for reserve_id in 0..self.reserves_count().get() {
            let slot = self.reserves_list(reserve_id);
            if !slot.is_empty() {
                reserves.push(slot.get());
            }
        }

        reserves
    }

    #[view(getReserveAddressById)]
    fn get_reserve_address_by_id(
        &self,
        reserve_id: u32,
    ) -> OptionalValue<EgldOrEsdtTokenIdentifier> {
        let slot = self.reserves_list(reserve_id);
        if slot.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(slot.get())
        }
    }

    #[view(scaledBalanceOf)]
    fn get_scaled_balance_of(
        &self,
        kind: ScaledTokenKind,
        asset: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> BigUint {
        self.scaled_balance_of(kind, &asset, &user)
    }

    /// Scaled balance of `user` and the scaled total of the ledger, in one read.
    #[view(getScaledUserBalanceAndSupply)]
    fn get_scaled_user_balance_and_supply(
        &self,
        kind: ScaledTokenKind,
        asset: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> MultiValue2<BigUint, BigUint> {
        let scaled_balance = self.scaled_balance_of(kind, &asset, &user);
        let scaled_total = self.scaled_total_supply(kind, &asset).get();

        (scaled_balance, scaled_total).into()
    }

    #[view(scaledTotalSupply)]
    fn get_scaled_total_supply(
        &self,
        kind: ScaledTokenKind,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        self.scaled_total_supply(kind, &asset).get()
    }

    /// Index at which the balance of `user` last changed; zero for users who never held one.
    #[view(getPreviousIndex)]
    fn get_previous_index(
        &self,
        kind: ScaledTokenKind,
        asset: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> BigUint {
        self.get_scaled_balance(kind, &asset, &user).last_index
    }

    /// Real supply balance or variable debt of `user`, accrued to the current block.
    #[view(balanceOf)]
    fn get_balance_of(
        &self,
        kind: ScaledTokenKind,
        asset: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> BigUint {
        let index = self.current_index(kind, &asset);
        self.balance_of_at(kind, &asset, &user, &index)
    }

    #[view(totalSupply)]
    fn get_total_supply(&self, kind: ScaledTokenKind, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        let index = self.current_index(kind, &asset);
        let scaled_total = self.scaled_total_supply(kind, &asset).get();
        if scaled_total == BigUint::zero() {
            return scaled_total;
        }

        self.ray_mul(&scaled_total, &index)
    }

    #[view(getStableDebtPosition)]
    fn get_stable_debt_position(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> StableDebtPosition<Self::Api> {
        self.get_stable_position(&asset, &user)
    }

    #[view(stableBalanceOf)]
    fn get_stable_balance_of(&self, asset: EgldOrEsdtTokenIdentifier, user: ManagedAddress) -> BigUint {
        self.stable_balance_of(&asset, &user)
    }

    #[view(stableTotalSupply)]
    fn get_stable_total_supply(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.stable_total_supply(&asset)
    }

    #[view(getAverageStableRate)]
    fn get_average_stable_rate(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.get_stable_totals(&asset).average_rate
    }

    /// Stable debt totals of a reserve.
    ///
    /// # Returns
    /// - `principal`: Principal at the last update.
    /// - `total`: Principal compounded at the average rate up to now.
    /// - `average_rate`: Weighted average stable rate.
    /// - `last_update_timestamp`: Time of the last mint or burn.
    #[view(getStableSupplyData)]
    fn get_stable_supply_data(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> MultiValue4<BigUint, BigUint, BigUint, u64> {
        let totals = self.get_stable_totals(&asset);
        let total = self.stable_total_supply_of(&totals);

        (
            totals.principal,
            total,
            totals.average_rate,
            totals.last_update_timestamp,
        )
            .into()
    }

    #[view(getUserAccountData)]
    fn get_user_account_data(&self, user: ManagedAddress) -> UserAccountData<Self::Api> {
        let configuration = self.get_user_configuration(&user);
        self.calculate_user_account_data(&user, &configuration)
    }

    #[view(getIsolationModeState)]
    fn get_user_isolation_mode_state(
        &self,
        user: ManagedAddress,
    ) -> IsolationModeState<Self::Api> {
        let configuration = self.get_user_configuration(&user);
        self.get_isolation_mode_state(&configuration)
    }

    fn get_listed_reserve(&self, asset: &EgldOrEsdtTokenIdentifier) -> ReserveData<Self::Api> {
        let mapper = self.reserve_data(asset);
        require!(!mapper.is_empty(), ERROR_ASSET_NOT_LISTED);
        mapper.get()
    }

    fn current_index(&self, kind: ScaledTokenKind, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let reserve = self.get_listed_reserve(asset);
        match kind {
            ScaledTokenKind::Supply => self.get_normalized_income(&reserve),
            ScaledTokenKind::VariableDebt => self.get_normalized_debt(&reserve),
        }
    }
}
