multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{StableDebtPosition, StableDebtTotals};

use crate::storage;

/// The StableDebtModule is the ledger of fixed rate debt.
///
/// **Scope**: Every borrower keeps a principal that compounds at its own stable rate from its own
/// timestamp. The reserve keeps the sum of principals compounding at their debt weighted average
/// rate. Nothing is scaled by a reserve index; the per account "index" is
/// `compoundedInterest(stable_rate, last_update_timestamp, now)`.
///
/// **Goal**: Let the average rate and the total follow every mint and burn so the rate model always
/// sees the stable debt the reserve would owe if every borrower repaid now.
#[multiversx_sc::module]
pub trait StableDebtModule:
    storage::Storage + common_math::SharedMathModule + common_events::EventsModule
{
    /// Adds `amount` of stable debt at `rate` to `on_behalf_of`.
    ///
    /// **Process**:
    /// 1. Compounds the account up to now and the reserve total up to now.
    /// 2. `user_rate = (user_rate * balance + rate * amount) / (balance + amount)`.
    /// 3. `average_rate = (average_rate * total + rate * amount) / (total + amount)`.
    /// 4. Principal becomes `balance + amount`, both timestamps move to now.
    /// 5. Emits `stable_mint`.
    ///
    /// # Arguments
    /// - `asset`: The reserve.
    /// - `user`: The address that triggered the borrow.
    /// - `on_behalf_of`: The debtor.
    /// - `amount`: Debt added.
    /// - `rate`: Stable rate granted to this borrow, in ray.
    ///
    /// # Returns
    /// - `(bool, BigUint, BigUint)`: Whether the debtor held no stable debt before, the new total
    ///   stable debt and the new average rate.
    fn mint_stable(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        on_behalf_of: &ManagedAddress,
        amount: &BigUint,
        rate: &BigUint,
    ) -> (bool, BigUint, BigUint) {
        let timestamp = self.blockchain().get_block_timestamp();
        let mut position = self.get_stable_position(asset, on_behalf_of);
        let (current_balance, balance_increase) = self.stable_balance_increase(&position);

        let mut totals = self.get_stable_totals(asset);
        let previous_supply = self.stable_total_supply_of(&totals);
        let next_supply = &previous_supply + amount;

        let amount_in_ray = self.wad_to_ray(amount);
        let next_stable_rate = self.ray_div(
            &(self.ray_mul(&position.stable_rate, &self.wad_to_ray(&current_balance))
                + self.ray_mul(&amount_in_ray, rate)),
            &self.wad_to_ray(&(&current_balance + amount)),
        );
        let next_avg_stable_rate = self.ray_div(
            &(self.ray_mul(&totals.average_rate, &self.wad_to_ray(&previous_supply))
                + self.ray_mul(rate, &amount_in_ray)),
            &self.wad_to_ray(&next_supply),
        );

        position.principal += amount + &balance_increase;
        position.stable_rate = next_stable_rate;
        position.last_update_timestamp = timestamp;
        self.stable_debt_position(asset, on_behalf_of).set(&position);

        totals.principal = next_supply.clone();
        totals.average_rate = next_avg_stable_rate.clone();
        totals.last_update_timestamp = timestamp;
        self.stable_debt_totals(asset).set(&totals);

        let amount_to_mint = amount + &balance_increase;
        self.stable_mint_event(
            asset,
            user,
            on_behalf_of,
            &amount_to_mint,
            &current_balance,
            &balance_increase,
            &position.stable_rate,
            &next_avg_stable_rate,
            &next_supply,
        );

        (
            current_balance == BigUint::zero(),
            next_supply,
            next_avg_stable_rate,
        )
    }

    /// Removes `amount` of stable debt from `from`.
    ///
    /// **Process**:
    /// 1. Compounds the account and the reserve total up to now.
    /// 2. When `amount` covers the whole total, total and average rate drop to zero. Otherwise the
    ///    average rate loses the burnt share: `(average * total - user_rate * amount) / (total - amount)`,
    ///    which also resets to zero if the subtracted term is not smaller.
    /// 3. A full repayment clears the account rate and timestamp.
    /// 4. Emits `stable_mint` when the realised interest exceeds `amount`, `stable_burn` otherwise.
    ///
    /// # Returns
    /// - `(BigUint, BigUint)`: The new total stable debt and the new average rate.
    fn burn_stable(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        from: &ManagedAddress,
        amount: &BigUint,
    ) -> (BigUint, BigUint) {
        let timestamp = self.blockchain().get_block_timestamp();
        let mut position = self.get_stable_position(asset, from);
        let (current_balance, balance_increase) = self.stable_balance_increase(&position);

        let mut totals = self.get_stable_totals(asset);
        let previous_supply = self.stable_total_supply_of(&totals);
        let user_stable_rate = position.stable_rate.clone();

        let mut next_supply = BigUint::zero();
        let mut next_avg_stable_rate = BigUint::zero();
        if &previous_supply > amount {
            next_supply = &previous_supply - amount;
            let first_term =
                self.ray_mul(&totals.average_rate, &self.wad_to_ray(&previous_supply));
            let second_term = self.ray_mul(&user_stable_rate, &self.wad_to_ray(amount));
            if second_term >= first_term {
                next_supply = BigUint::zero();
            } else {
                next_avg_stable_rate =
                    self.ray_div(&(first_term - second_term), &self.wad_to_ray(&next_supply));
            }
        }

        totals.principal = next_supply.clone();
        totals.average_rate = next_avg_stable_rate.clone();
        totals.last_update_timestamp = timestamp;
        self.stable_debt_totals(asset).set(&totals);

        if amount == &current_balance {
            position.stable_rate = BigUint::zero();
            position.last_update_timestamp = 0;
        } else {
            position.last_update_timestamp = timestamp;
        }

        if &balance_increase > amount {
            let amount_to_mint = &balance_increase - amount;
            position.principal += &amount_to_mint;
            self.stable_debt_position(asset, from).set(&position);

            self.stable_mint_event(
                asset,
                from,
                from,
                &amount_to_mint,
                &current_balance,
                &balance_increase,
                &user_stable_rate,
                &next_avg_stable_rate,
                &next_supply,
            );
        } else {
            let amount_to_burn = amount - &balance_increase;
            position.principal -= &amount_to_burn;
            self.stable_debt_position(asset, from).set(&position);

            self.stable_burn_event(
                asset,
                from,
                &amount_to_burn,
                &current_balance,
                &balance_increase,
                &next_avg_stable_rate,
                &next_supply,
            );
        }

        (next_supply, next_avg_stable_rate)
    }

    /// Compounded stable debt of `user` as of now.
    fn stable_balance_of(&self, asset: &EgldOrEsdtTokenIdentifier, user: &ManagedAddress) -> BigUint {
        let position = self.get_stable_position(asset, user);
        self.compounded_stable_balance(&position)
    }

    /// Compounded total stable debt of the reserve as of now.
    fn stable_total_supply(&self, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let totals = self.get_stable_totals(asset);
        self.stable_total_supply_of(&totals)
    }

    fn stable_total_supply_of(&self, totals: &StableDebtTotals<Self::Api>) -> BigUint {
        if totals.principal == BigUint::zero() {
            return BigUint::zero();
        }

        let cumulated = self.calculate_compounded_interest(
            &totals.average_rate,
            totals.last_update_timestamp,
            self.blockchain().get_block_timestamp(),
        );
        self.ray_mul(&totals.principal, &cumulated)
    }

    fn compounded_stable_balance(&self, position: &StableDebtPosition<Self::Api>) -> BigUint {
        if position.principal == BigUint::zero() {
            return BigUint::zero();
        }

        let cumulated = self.calculate_compounded_interest(
            &position.stable_rate,
            position.last_update_timestamp,
            self.blockchain().get_block_timestamp(),
        );
        self.ray_mul(&position.principal, &cumulated)
    }

    /// Returns `(current_balance, balance_increase)` of a position compounded up to now.
    fn stable_balance_increase(
        &self,
        position: &StableDebtPosition<Self::Api>,
    ) -> (BigUint, BigUint) {
        if position.principal == BigUint::zero() {
            return (BigUint::zero(), BigUint::zero());
        }

        let current_balance = self.compounded_stable_balance(position);
        let balance_increase = &current_balance - &position.principal;

        (current_balance, balance_increase)
    }

    fn get_stable_position(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> StableDebtPosition<Self::Api> {
        let mapper = self.stable_debt_position(asset, user);
        if mapper.is_empty() {
            StableDebtPosition::default()
        } else {
            mapper.get()
        }
    }

    fn get_stable_totals(&self, asset: &EgldOrEsdtTokenIdentifier) -> StableDebtTotals<Self::Api> {
        let mapper = self.stable_debt_totals(asset);
        if mapper.is_empty() {
            StableDebtTotals::default()
        } else {
            mapper.get()
        }
    }
}
