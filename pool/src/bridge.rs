multiversx_sc::imports!();

use common_errors::{
    ERROR_CALLER_NOT_BRIDGE, ERROR_INVALID_FEE, ERROR_UNBACKED_MINT_CAP_EXCEEDED,
};
use common_structs::ScaledTokenKind;

use crate::{
    account, cache::Cache, oracle, reserve, storage, tokens, user_config, utils, validation,
};

/// The BridgeModule lets whitelisted bridges mint supply ahead of the underlying arriving, and back
/// it later.
///
/// **Scope**: Unbacked supply earns like any other supply and counts in the supply usage ratio,
/// diluting the liquidity rate until it is backed.
#[multiversx_sc::module]
pub trait BridgeModule:
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
    /// Mints `amount` of unbacked supply of `asset` to `on_behalf_of`.
    ///
    /// **Process**:
    /// 1. Caches the reserve, brings it up to date and runs the supply validation.
    /// 2. Grows `unbacked`, which must stay within `unbacked_mint_cap` whole tokens.
    /// 3. Recomputes the rates; no underlying moved.
    /// 4. Mints supply balance; a first supply becomes collateral when allowed.
    ///
    /// # Arguments
    /// - `asset`: The reserve.
    /// - `amount`: Amount of supply minted.
    /// - `on_behalf_of`: Receiver of the supply.
    #[endpoint(mintUnbacked)]
    fn mint_unbacked(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        on_behalf_of: ManagedAddress,
    ) {
        self.require_not_paused();
        let caller = self.require_caller_bridge();

        let mut cache = Cache::new(self, &asset);
        self.update_state(&mut cache);
        self.validate_supply(&cache, &amount);

        cache.reserve.unbacked += &amount;
        let unbacked_mint_cap = cache
            .configuration
            .cap_in_units::<Self::Api>(cache.configuration.unbacked_mint_cap);
        require!(
            cache.reserve.unbacked <= unbacked_mint_cap,
            ERROR_UNBACKED_MINT_CAP_EXCEEDED
        );

        self.update_interest_rates(&mut cache, &BigUint::zero(), &BigUint::zero());

        let (is_first_supply, _) = self.mint_scaled(
            ScaledTokenKind::Supply,
            &asset,
            &caller,
            &on_behalf_of,
            &amount,
            &cache.next_liquidity_index,
        );

        if is_first_supply {
            let mut configuration = self.get_user_configuration(&on_behalf_of);
            if self.validate_use_as_collateral(&configuration, &cache.configuration) {
                self.enable_collateral(&mut configuration, cache.reserve.id, &asset, &on_behalf_of);
                self.store_user_configuration(&on_behalf_of, configuration);
            }
        }

        drop(cache);
        self.mint_unbacked_event(&asset, &caller, &on_behalf_of, &amount);
    }

    /// Backs unbacked supply of the paid asset with the attached payment.
    ///
    /// The payment is `amount + fee`. At most the outstanding `unbacked` is backed; the fee is split
    /// between suppliers, through the liquidity index, and the treasury, by `bridge_protocol_fee`.
    /// Whatever is paid beyond `backing + fee` is refunded.
    ///
    /// **Formula**:
    /// - `backing = min(paid - fee, unbacked)`
    /// - `fee_to_protocol = fee.percentMul(bridge_protocol_fee)`, `fee_to_lp = fee - fee_to_protocol`
    /// - `liquidity_index *= 1 + fee_to_lp / (total_supply + accrued_to_treasury)`
    ///
    /// # Arguments
    /// - `fee`: The fee part of the payment.
    ///
    /// # Returns
    /// - `BigUint`: The amount of unbacked supply backed.
    #[payable("*")]
    #[endpoint(backUnbacked)]
    fn back_unbacked(&self, fee: BigUint) -> BigUint {
        self.require_not_paused();
        let caller = self.require_caller_bridge();
        let (asset, paid) = self.call_value().egld_or_single_fungible_esdt();
        require!(paid >= fee, ERROR_INVALID_FEE);

        let mut cache = Cache::new(self, &asset);
        self.update_state(&mut cache);

        let amount = &paid - &fee;
        let backing_amount = self.get_min(amount, cache.reserve.unbacked.clone());

        let fee_to_protocol = self.percent_mul(&fee, self.bridge_protocol_fee().get());
        let fee_to_lp = &fee - &fee_to_protocol;
        let added = &backing_amount + &fee;

        if fee_to_lp > BigUint::zero() {
            let scaled_supply = self
                .scaled_total_supply(ScaledTokenKind::Supply, &asset)
                .get()
                + &cache.reserve.accrued_to_treasury;
            let total_liquidity = self.ray_mul(&scaled_supply, &cache.next_liquidity_index);
            self.cumulate_to_liquidity_index(&mut cache, &total_liquidity, &fee_to_lp);
        }

        if fee_to_protocol > BigUint::zero() {
            cache.reserve.accrued_to_treasury +=
                self.ray_div(&fee_to_protocol, &cache.next_liquidity_index);
        }
        cache.reserve.unbacked -= &backing_amount;

        self.update_interest_rates(&mut cache, &added, &BigUint::zero());
        drop(cache);

        if paid > added {
            self.send_asset(&asset, &(&paid - &added), &caller);
        }
        self.back_unbacked_event(&asset, &caller, &backing_amount, &fee);

        backing_amount
    }

    fn require_caller_bridge(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.bridges().contains(&caller), ERROR_CALLER_NOT_BRIDGE);

        caller
    }
}
