multiversx_sc::imports!();

use common_errors::ERROR_TREASURY_NOT_SET;
use common_structs::ScaledTokenKind;

use crate::{reserve, storage, tokens};

/// The TreasuryModule turns the protocol's accrued share of interest into supply balance.
#[multiversx_sc::module]
pub trait TreasuryModule:
    storage::Storage
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
    + reserve::ReserveLogicModule
    + tokens::scaled::ScaledTokenModule
{
    /// Mints the accrued treasury share of every listed, active reserve in `assets` to the treasury.
    ///
    /// **Process**:
    /// 1. Skips unlisted and inactive reserves, and reserves with nothing accrued.
    /// 2. Resets `accrued_to_treasury` and mints `accrued.rayMul(normalized_income)` of supply
    ///    balance to the treasury address.
    /// 3. Emits `minted_to_treasury` per reserve.
    ///
    /// The reserve itself is not updated, so the accrual since its last update stays pending.
    ///
    /// # Arguments
    /// - `assets`: The reserves to sweep.
    #[endpoint(mintToTreasury)]
    fn mint_to_treasury(&self, assets: MultiValueEncoded<EgldOrEsdtTokenIdentifier>) {
        let treasury_mapper = self.treasury();
        require!(!treasury_mapper.is_empty(), ERROR_TREASURY_NOT_SET);
        let treasury = treasury_mapper.get();
        let own_address = self.blockchain().get_sc_address();

        for asset in assets {
            let reserve_mapper = self.reserve_data(&asset);
            if reserve_mapper.is_empty() || !self.reserve_configuration(&asset).get().is_active {
                continue;
            }

            let mut reserve = reserve_mapper.get();
            let accrued_to_treasury = reserve.accrued_to_treasury.clone();
            if accrued_to_treasury == BigUint::zero() {
                continue;
            }

            reserve.accrued_to_treasury = BigUint::zero();
            reserve_mapper.set(&reserve);

            let normalized_income = self.get_normalized_income(&reserve);
            let amount_to_mint = self.ray_mul(&accrued_to_treasury, &normalized_income);
            self.mint_scaled(
                ScaledTokenKind::Supply,
                &asset,
                &own_address,
                &treasury,
                &amount_to_mint,
                &normalized_income,
            );

            self.minted_to_treasury_event(&asset, &amount_to_mint);
        }
    }
}
