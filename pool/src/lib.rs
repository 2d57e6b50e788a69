#![no_std]

multiversx_sc::imports!();

pub mod account;
pub mod bridge;
pub mod cache;
pub mod config;
pub mod oracle;
pub mod positions;
pub mod reserve;
pub mod storage;
pub mod tokens;
pub mod treasury;
pub mod user_config;
pub mod utils;
pub mod validation;
pub mod views;

pub use common_events::*;
use common_errors::ERROR_ADDRESS_IS_ZERO;

#[multiversx_sc::contract]
pub trait MariaPool:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + reserve::ReserveLogicModule
    + tokens::scaled::ScaledTokenModule
    + tokens::stable::StableDebtModule
    + oracle::OracleModule
    + user_config::UserConfigModule
    + account::AccountDataModule
    + validation::ValidationModule
    + utils::UtilsModule
    + positions::supply::SupplyModule
    + positions::borrow::BorrowModule
    + positions::collateral::CollateralModule
    + treasury::TreasuryModule
    + bridge::BridgeModule
    + config::ConfigModule
    + views::ViewsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the pool with no reserves listed.
    ///
    /// **Purpose**: Wires the price feed every valuation reads and the treasury that receives the
    /// protocol's share of interest. Reserves are listed afterwards through `initReserve`.
    ///
    /// # Arguments
    /// - `price_oracle`: Address of the price feed.
    /// - `treasury`: Receiver of the minted treasury share.
    #[init]
    fn init(&self, price_oracle: ManagedAddress, treasury: ManagedAddress) {
        require!(
            !price_oracle.is_zero() && !treasury.is_zero(),
            ERROR_ADDRESS_IS_ZERO
        );

        self.price_oracle().set(&price_oracle);
        self.treasury().set(&treasury);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
