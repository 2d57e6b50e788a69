multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_INVALID_BURN_AMOUNT, ERROR_INVALID_MINT_AMOUNT, ERROR_NOT_ENOUGH_AVAILABLE_USER_BALANCE,
};
use common_structs::{ScaledBalance, ScaledTokenKind};

use crate::storage;

/// The ScaledTokenModule is the ledger behind the supply token and the variable debt token.
///
/// **Scope**: Balances are stored divided by the reserve index in force when they were last touched.
/// A real balance is `scaled_amount.rayMul(index)` for whatever index the caller passes, so reading it
/// never writes. The stored `last_index` lets every mutation report the interest realised since the
/// account's previous interaction.
///
/// **Goal**: One implementation shared by both kinds; the kind only selects the storage keys and tags
/// the events.
#[multiversx_sc::module]
pub trait ScaledTokenModule:
    storage::Storage + common_math::SharedMathModule + common_events::EventsModule
{
    /// Adds `amount` to the balance of `on_behalf_of`.
    ///
    /// **Process**:
    /// 1. Scales `amount` down by `index`; a zero scaled amount is rejected.
    /// 2. Measures the interest the account realised since its last recorded index.
    /// 3. Adds the scaled amount to the account and to the total, records `index`.
    /// 4. Emits `mint` with `amount + balance_increase`.
    ///
    /// # Arguments
    /// - `kind`: Supply or variable debt ledger.
    /// - `asset`: The reserve.
    /// - `caller`: The address that triggered the mint.
    /// - `on_behalf_of`: The account credited.
    /// - `amount`: Real amount to add.
    /// - `index`: The reserve's current index for this kind.
    ///
    /// # Returns
    /// - `(bool, BigUint)`: Whether the account held nothing before, and the interest realised.
    fn mint_scaled(
        &self,
        kind: ScaledTokenKind,
        asset: &EgldOrEsdtTokenIdentifier,
        caller: &ManagedAddress,
        on_behalf_of: &ManagedAddress,
        amount: &BigUint,
        index: &BigUint,
    ) -> (bool, BigUint) {
        let amount_scaled = self.ray_div(amount, index);
        require!(amount_scaled != BigUint::zero(), ERROR_INVALID_MINT_AMOUNT);

        let mut balance = self.get_scaled_balance(kind, asset, on_behalf_of);
        let balance_increase = self.balance_increase(&balance, index);
        let is_first_mint = balance.scaled_amount == BigUint::zero();

        balance.scaled_amount += &amount_scaled;
        balance.last_index = index.clone();
        self.scaled_balance(kind, asset, on_behalf_of).set(&balance);
        self.scaled_total_supply(kind, asset)
            .update(|total| *total += &amount_scaled);

        let amount_to_mint = amount + &balance_increase;
        self.mint_event(
            kind,
            asset,
            caller,
            on_behalf_of,
            &amount_to_mint,
            &balance_increase,
            index,
        );

        (is_first_mint, balance_increase)
    }

    /// Removes `amount` from the balance of `from`.
    ///
    /// The event follows the net movement: when the realised interest exceeds `amount` the account
    /// grew, so `mint` is emitted with `balance_increase - amount`; otherwise `burn` with
    /// `amount - balance_increase`.
    ///
    /// # Arguments
    /// - `kind`: Supply or variable debt ledger.
    /// - `asset`: The reserve.
    /// - `from`: The account debited.
    /// - `target`: Receiver of the underlying, reported in the `burn` event.
    /// - `amount`: Real amount to remove.
    /// - `index`: The reserve's current index for this kind.
    ///
    /// # Returns
    /// - `BigUint`: The interest realised by `from`.
    fn burn_scaled(
        &self,
        kind: ScaledTokenKind,
        asset: &EgldOrEsdtTokenIdentifier,
        from: &ManagedAddress,
        target: &ManagedAddress,
        amount: &BigUint,
        index: &BigUint,
    ) -> BigUint {
        let amount_scaled = self.ray_div(amount, index);
        require!(amount_scaled != BigUint::zero(), ERROR_INVALID_BURN_AMOUNT);

        let mut balance = self.get_scaled_balance(kind, asset, from);
        require!(
            balance.scaled_amount >= amount_scaled,
            ERROR_NOT_ENOUGH_AVAILABLE_USER_BALANCE
        );
        let balance_increase = self.balance_increase(&balance, index);

        balance.scaled_amount -= &amount_scaled;
        balance.last_index = index.clone();
        self.scaled_balance(kind, asset, from).set(&balance);
        self.scaled_total_supply(kind, asset)
            .update(|total| *total -= &amount_scaled);

        let (is_net_mint, net_amount) = self.net_burn_movement(amount, &balance_increase);
        if is_net_mint {
            self.mint_event(
                kind,
                asset,
                from,
                from,
                &net_amount,
                &balance_increase,
                index,
            );
        } else {
            self.burn_event(
                kind,
                asset,
                from,
                target,
                &net_amount,
                &balance_increase,
                index,
            );
        }

        balance_increase
    }

    /// Moves `amount` of supply from `from` to `to`.
    ///
    /// Both sides realise their accrued interest first (one `mint` event each when non zero), then
    /// `amount.rayDiv(index)` scaled units change hands and `balance_transfer` is emitted.
    ///
    /// # Arguments
    /// - `asset`: The reserve.
    /// - `from`: Sender.
    /// - `to`: Receiver, may equal `from`.
    /// - `amount`: Real amount moved.
    /// - `index`: The reserve's current liquidity index.
    fn transfer_scaled(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        from: &ManagedAddress,
        to: &ManagedAddress,
        amount: &BigUint,
        index: &BigUint,
    ) {
        let kind = ScaledTokenKind::Supply;
        let amount_scaled = self.ray_div(amount, index);

        let mut sender = self.get_scaled_balance(kind, asset, from);
        require!(
            sender.scaled_amount >= amount_scaled,
            ERROR_NOT_ENOUGH_AVAILABLE_USER_BALANCE
        );
        let sender_increase = self.balance_increase(&sender, index);

        if from == to {
            sender.last_index = index.clone();
            self.scaled_balance(kind, asset, from).set(&sender);
            self.emit_realised_interest(asset, from, &sender_increase, index);
        } else {
            let mut recipient = self.get_scaled_balance(kind, asset, to);
            let recipient_increase = self.balance_increase(&recipient, index);

            sender.scaled_amount -= &amount_scaled;
            sender.last_index = index.clone();
            recipient.scaled_amount += &amount_scaled;
            recipient.last_index = index.clone();

            self.scaled_balance(kind, asset, from).set(&sender);
            self.scaled_balance(kind, asset, to).set(&recipient);

            self.emit_realised_interest(asset, from, &sender_increase, index);
            self.emit_realised_interest(asset, to, &recipient_increase, index);
        }

        self.balance_transfer_event(asset, from, to, &amount_scaled, index);
    }

    fn emit_realised_interest(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        balance_increase: &BigUint,
        index: &BigUint,
    ) {
        if balance_increase == &BigUint::zero() {
            return;
        }

        self.mint_event(
            ScaledTokenKind::Supply,
            asset,
            user,
            user,
            balance_increase,
            balance_increase,
            index,
        );
    }

    /// Net movement of a burn once the realised interest is netted out.
    ///
    /// # Returns
    /// - `(bool, BigUint)`: `true` with `balance_increase - amount` when interest outpaced the burn,
    ///   `false` with `amount - balance_increase` otherwise.
    fn net_burn_movement(&self, amount: &BigUint, balance_increase: &BigUint) -> (bool, BigUint) {
        if balance_increase > amount {
            (true, balance_increase - amount)
        } else {
            (false, amount - balance_increase)
        }
    }

    /// Interest realised between the account's last recorded index and `index`.
    fn balance_increase(&self, balance: &ScaledBalance<Self::Api>, index: &BigUint) -> BigUint {
        if balance.scaled_amount == BigUint::zero() {
            return BigUint::zero();
        }

        let now = self.ray_mul(&balance.scaled_amount, index);
        let before = self.ray_mul(&balance.scaled_amount, &balance.last_index);
        if now > before {
            now - before
        } else {
            BigUint::zero()
        }
    }

    fn get_scaled_balance(
        &self,
        kind: ScaledTokenKind,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> ScaledBalance<Self::Api> {
        let mapper = self.scaled_balance(kind, asset, user);
        if mapper.is_empty() {
            ScaledBalance::default()
        } else {
            mapper.get()
        }
    }

    /// Stored scaled balance of `user`.
    fn scaled_balance_of(
        &self,
        kind: ScaledTokenKind,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> BigUint {
        self.get_scaled_balance(kind, asset, user).scaled_amount
    }

    /// Real balance of `user` at `index`.
    fn balance_of_at(
        &self,
        kind: ScaledTokenKind,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        index: &BigUint,
    ) -> BigUint {
        let scaled = self.scaled_balance_of(kind, asset, user);
        if scaled == BigUint::zero() {
            return scaled;
        }

        self.ray_mul(&scaled, index)
    }
}
