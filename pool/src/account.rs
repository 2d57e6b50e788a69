multiversx_sc::imports!();

use common_constants::{HEALTH_FACTOR_LIQUIDATION_THRESHOLD, UINT256_BYTES};
use common_structs::{ScaledTokenKind, UserAccountData, UserConfiguration};

use crate::{oracle, reserve, storage, tokens, user_config};

/// The AccountDataModule values a user's position across every reserve.
///
/// **Scope**: Walks the reserves flagged in the user's bitmap, prices each through the oracle and
/// aggregates collateral, debt, LTV and liquidation threshold. Reads only; indices are normalized
/// to the current block on the fly.
///
/// **Goal**: Provide the health factor and borrowing power every borrow, withdraw, transfer and
/// collateral toggle is validated against.
#[multiversx_sc::module]
pub trait AccountDataModule:
    storage::Storage
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
    + reserve::ReserveLogicModule
    + tokens::scaled::ScaledTokenModule
    + tokens::stable::StableDebtModule
    + oracle::OracleModule
    + user_config::UserConfigModule
{
    /// Aggregates the position of `user`.
    ///
    /// **Process**:
    /// 1. An empty bitmap yields zeros and the maximum health factor.
    /// 2. For every reserve id with a flag set, fetches the asset price.
    /// 3. Collateral (flag set and non zero liquidation threshold): the supply balance in base
    ///    currency is added to the total and weights the LTV and the threshold. A zero LTV
    ///    collateral marks `has_zero_ltv_collateral`.
    /// 4. Debt (borrow flag set): variable plus stable debt in base currency.
    /// 5. Averages LTV and threshold by collateral value.
    ///
    /// **Formula**:
    /// - `value = balance * price / 10^decimals`
    /// - `health_factor = total_collateral.percentMul(avg_threshold).wadDiv(total_debt)`, maximum
    ///   when there is no debt.
    /// - `available_borrows = max(total_collateral.percentMul(avg_ltv) - total_debt, 0)`
    ///
    /// # Arguments
    /// - `user`: The account to value.
    /// - `configuration`: Its bitmap.
    ///
    /// # Returns
    /// - `UserAccountData`: Totals in base currency (wad), averages in basis points, health factor in wad.
    fn calculate_user_account_data(
        &self,
        user: &ManagedAddress,
        configuration: &UserConfiguration<Self::Api>,
    ) -> UserAccountData<Self::Api> {
        if configuration.is_empty() {
            return UserAccountData {
                total_collateral_base: BigUint::zero(),
                total_debt_base: BigUint::zero(),
                available_borrows_base: BigUint::zero(),
                current_liquidation_threshold: 0,
                ltv: 0,
                health_factor: self.max_health_factor(),
                has_zero_ltv_collateral: false,
            };
        }

        let mut total_collateral = BigUint::zero();
        let mut total_debt = BigUint::zero();
        let mut weighted_ltv = BigUint::zero();
        let mut weighted_threshold = BigUint::zero();
        let mut has_zero_ltv_collateral = false;

        let reserves_count = self.reserves_count().get();
        let mut reserve_id = 0u32;
        while reserve_id < reserves_count && configuration.has_flags_from(reserve_id) {
            if !configuration.is_using_as_collateral_or_borrowing(reserve_id) {
                reserve_id += 1;
                continue;
            }

            let asset_mapper = self.reserves_list(reserve_id);
            if asset_mapper.is_empty() {
                reserve_id += 1;
                continue;
            }

            let asset = asset_mapper.get();
            let reserve = self.reserve_data(&asset).get();
            let reserve_configuration = self.reserve_configuration(&asset).get();
            let asset_unit = reserve_configuration.asset_unit::<Self::Api>();
            let price = self.get_asset_price(&asset);

            if reserve_configuration.liquidation_threshold != 0
                && configuration.is_using_as_collateral(reserve_id)
            {
                let index = self.get_normalized_income(&reserve);
                let balance = self.balance_of_at(ScaledTokenKind::Supply, &asset, user, &index);
                let value = balance * &price / &asset_unit;

                if reserve_configuration.ltv != 0 {
                    weighted_ltv += &value * reserve_configuration.ltv;
                } else {
                    has_zero_ltv_collateral = true;
                }
                weighted_threshold += &value * reserve_configuration.liquidation_threshold;
                total_collateral += value;
            }

            if configuration.is_borrowing(reserve_id) {
                let index = self.get_normalized_debt(&reserve);
                let variable_debt =
                    self.balance_of_at(ScaledTokenKind::VariableDebt, &asset, user, &index);
                let debt = variable_debt + self.stable_balance_of(&asset, user);
                total_debt += debt * &price / &asset_unit;
            }

            reserve_id += 1;
        }

        let (ltv, liquidation_threshold) = if total_collateral == BigUint::zero() {
            (0u64, 0u64)
        } else {
            (
                self.to_basis_points(&(weighted_ltv / &total_collateral)),
                self.to_basis_points(&(weighted_threshold / &total_collateral)),
            )
        };

        let health_factor = if total_debt == BigUint::zero() {
            self.max_health_factor()
        } else {
            self.wad_div(
                &self.percent_mul(&total_collateral, liquidation_threshold),
                &total_debt,
            )
        };

        let available_borrows_base =
            self.calculate_available_borrows(&total_collateral, &total_debt, ltv);

        UserAccountData {
            total_collateral_base: total_collateral,
            total_debt_base: total_debt,
            available_borrows_base,
            current_liquidation_threshold: liquidation_threshold,
            ltv,
            health_factor,
            has_zero_ltv_collateral,
        }
    }

    /// Borrowing power left: `total_collateral.percentMul(ltv) - total_debt`, floored at zero.
    fn calculate_available_borrows(
        &self,
        total_collateral: &BigUint,
        total_debt: &BigUint,
        ltv: u64,
    ) -> BigUint {
        let available = self.percent_mul(total_collateral, ltv);
        if &available < total_debt {
            return BigUint::zero();
        }

        available - total_debt
    }

    /// Whether a health factor keeps the position out of liquidation.
    fn is_healthy(&self, health_factor: &BigUint) -> bool {
        health_factor >= &BigUint::from(HEALTH_FACTOR_LIQUIDATION_THRESHOLD)
    }

    fn max_health_factor(&self) -> BigUint {
        BigUint::from_bytes_be(&[0xffu8; UINT256_BYTES])
    }

    // Weighted averages of basis point values never exceed the largest input.
    fn to_basis_points(&self, value: &BigUint) -> u64 {
        value.to_u64().unwrap_or_default()
    }
}
