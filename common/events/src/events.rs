#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("supply")]
    fn supply_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] interest_rate_mode: InterestRateMode,
        #[indexed] borrow_rate: &BigUint,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] repayer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] use_supply_tokens: bool,
    );

    #[event("swap_borrow_rate_mode")]
    fn swap_borrow_rate_mode_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] interest_rate_mode: InterestRateMode,
    );

    #[event("rebalance_stable_borrow_rate")]
    fn rebalance_stable_borrow_rate_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
    );

    #[event("reserve_used_as_collateral_enabled")]
    fn reserve_used_as_collateral_enabled_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
    );

    #[event("reserve_used_as_collateral_disabled")]
    fn reserve_used_as_collateral_disabled_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
    );

    // Emitted after every rate recomputation, with the state the next interval accrues from
    #[event("reserve_data_updated")]
    fn reserve_data_updated_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] liquidity_rate: &BigUint,
        #[indexed] stable_borrow_rate: &BigUint,
        #[indexed] variable_borrow_rate: &BigUint,
        #[indexed] liquidity_index: &BigUint,
        #[indexed] variable_borrow_index: &BigUint,
    );

    #[event("minted_to_treasury")]
    fn minted_to_treasury_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount_minted: &BigUint,
    );

    #[event("isolation_mode_total_debt_updated")]
    fn isolation_mode_total_debt_updated_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] total_debt: &BigUint,
    );

    #[event("mint_unbacked")]
    fn mint_unbacked_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("back_unbacked")]
    fn back_unbacked_event(
        &self,
        #[indexed] reserve: &EgldOrEsdtTokenIdentifier,
        #[indexed] backer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] fee: &BigUint,
    );

    // Token ledger events. `value` is the net amount: principal plus or minus the interest the
    // account realised since its previous interaction.
    #[event("mint")]
    fn mint_event(
        &self,
        #[indexed] kind: ScaledTokenKind,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] value: &BigUint,
        #[indexed] balance_increase: &BigUint,
        #[indexed] index: &BigUint,
    );

    #[event("burn")]
    fn burn_event(
        &self,
        #[indexed] kind: ScaledTokenKind,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] from: &ManagedAddress,
        #[indexed] target: &ManagedAddress,
        #[indexed] value: &BigUint,
        #[indexed] balance_increase: &BigUint,
        #[indexed] index: &BigUint,
    );

    #[event("balance_transfer")]
    fn balance_transfer_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] scaled_amount: &BigUint,
        #[indexed] index: &BigUint,
    );

    #[event("stable_mint")]
    fn stable_mint_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] current_balance: &BigUint,
        #[indexed] balance_increase: &BigUint,
        #[indexed] new_rate: &BigUint,
        #[indexed] average_stable_rate: &BigUint,
        #[indexed] new_total_supply: &BigUint,
    );

    #[event("stable_burn")]
    fn stable_burn_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] from: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] current_balance: &BigUint,
        #[indexed] balance_increase: &BigUint,
        #[indexed] average_stable_rate: &BigUint,
        #[indexed] new_total_supply: &BigUint,
    );

    #[event("reserve_initialized")]
    fn reserve_initialized_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] reserve_id: u32,
        #[indexed] configuration: &ReserveConfiguration,
        #[indexed] strategy: &InterestRateStrategy<Self::Api>,
    );

    #[event("reserve_dropped")]
    fn reserve_dropped_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] reserve_id: u32,
    );

    #[event("reserve_configuration_updated")]
    fn reserve_configuration_updated_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] configuration: &ReserveConfiguration,
    );

    #[event("reserve_interest_rate_strategy_updated")]
    fn reserve_interest_rate_strategy_updated_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] strategy: &InterestRateStrategy<Self::Api>,
    );
}
