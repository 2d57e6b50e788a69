multiversx_sc::imports!();

use common_constants::{
    MAX_RESERVES_COUNT, MAX_VALID_BORROW_CAP, MAX_VALID_DEBT_CEILING, MAX_VALID_DECIMALS,
    MAX_VALID_SUPPLY_CAP, MAX_VALID_UNBACKED_MINT_CAP, PERCENTAGE_FACTOR,
};
use common_errors::*;
use common_structs::{InterestRateStrategy, ReserveConfiguration, ReserveData, ScaledTokenKind};

use crate::{cache::Cache, reserve, storage, tokens};

/// The ConfigModule lists reserves and tunes their parameters.
///
/// **Scope**: Owner gated. Listing assigns the reserve id that indexes every user bitmap; dropping
/// frees it for the next listing. Parameters that feed the accrual (reserve factor, rate curve)
/// settle the reserve at the old values before switching.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
    + reserve::ReserveLogicModule
    + tokens::scaled::ScaledTokenModule
    + tokens::stable::StableDebtModule
{
    /// Lists `asset` as a new reserve.
    ///
    /// **Process**:
    /// 1. Validates the configuration and the rate curve.
    /// 2. Assigns the lowest free id below `reserves_count`, or appends a new one while fewer than
    ///    `MAX_RESERVES_COUNT` ids exist.
    /// 3. Starts both indices at one ray and stamps the record with the current block.
    ///
    /// # Arguments
    /// - `asset`: The underlying asset.
    /// - `configuration`: Risk and lifecycle parameters.
    /// - `strategy`: The interest rate curve.
    ///
    /// # Returns
    /// - `u32`: The reserve id.
    #[only_owner]
    #[endpoint(initReserve)]
    fn init_reserve(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        configuration: ReserveConfiguration,
        strategy: InterestRateStrategy<Self::Api>,
    ) -> u32 {
        require!(asset.is_valid(), ERROR_INVALID_ASSET);
        require!(
            self.reserve_data(&asset).is_empty(),
            ERROR_RESERVE_ALREADY_INITIALIZED
        );
        self.validate_reserve_configuration(&configuration);
        self.validate_interest_rate_strategy(&strategy);

        let reserve_id = self.assign_reserve_id(&asset);
        let timestamp = self.blockchain().get_block_timestamp();

        self.reserve_data(&asset)
            .set(ReserveData::new(reserve_id, self.ray(), timestamp));
        self.reserve_configuration(&asset).set(&configuration);
        self.interest_rate_strategy(&asset).set(&strategy);

        self.reserve_initialized_event(&asset, reserve_id, &configuration, &strategy);

        reserve_id
    }

    /// Removes a reserve with nothing left in it and frees its id.
    ///
    /// Requires zero supply, variable debt, stable debt, accrued treasury share and unbacked supply.
    #[only_owner]
    #[endpoint(dropReserve)]
    fn drop_reserve(&self, asset: EgldOrEsdtTokenIdentifier) {
        let reserve_mapper = self.reserve_data(&asset);
        require!(!reserve_mapper.is_empty(), ERROR_ASSET_NOT_LISTED);
        let reserve = reserve_mapper.get();

        require!(
            self.scaled_total_supply(ScaledTokenKind::Supply, &asset).get() == BigUint::zero(),
            ERROR_SUPPLY_NOT_ZERO
        );
        require!(
            self.scaled_total_supply(ScaledTokenKind::VariableDebt, &asset)
                .get()
                == BigUint::zero(),
            ERROR_VARIABLE_DEBT_NOT_ZERO
        );
        require!(
            self.stable_total_supply(&asset) == BigUint::zero(),
            ERROR_STABLE_DEBT_NOT_ZERO
        );
        require!(
            reserve.accrued_to_treasury == BigUint::zero() && reserve.unbacked == BigUint::zero(),
            ERROR_UNDERLYING_CLAIMABLE_RIGHTS_NOT_ZERO
        );

        self.reserves_list(reserve.id).clear();
        reserve_mapper.clear();
        self.reserve_configuration(&asset).clear();
        self.interest_rate_strategy(&asset).clear();
        self.scaled_total_supply(ScaledTokenKind::Supply, &asset).clear();
        self.scaled_total_supply(ScaledTokenKind::VariableDebt, &asset)
            .clear();
        self.stable_debt_totals(&asset).clear();

        self.reserve_dropped_event(&asset, reserve.id);
    }

    /// Replaces the rate curve. The reserve accrues at the old rates up to now, then re-prices.
    #[only_owner]
    #[endpoint(setReserveInterestRateStrategy)]
    fn set_reserve_interest_rate_strategy(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        strategy: InterestRateStrategy<Self::Api>,
    ) {
        self.validate_interest_rate_strategy(&strategy);

        let mut cache = Cache::new(self, &asset);
        self.update_state(&mut cache);

        self.interest_rate_strategy(&asset).set(&strategy);
        cache.strategy = strategy;
        self.update_interest_rates(&mut cache, &BigUint::zero(), &BigUint::zero());

        self.reserve_interest_rate_strategy_updated_event(&asset, &cache.strategy);
    }

    /// Sets LTV, liquidation threshold and liquidation bonus, in basis points.
    ///
    /// A zero threshold removes the asset from collateral use and requires a zero bonus and no
    /// suppliers.
    #[only_owner]
    #[endpoint(configureReserveAsCollateral)]
    fn configure_reserve_as_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        ltv: u64,
        liquidation_threshold: u64,
        liquidation_bonus: u64,
    ) {
        let mut configuration = self.get_listed_configuration(&asset);
        configuration.ltv = ltv;
        configuration.liquidation_threshold = liquidation_threshold;
        configuration.liquidation_bonus = liquidation_bonus;
        self.validate_collateral_parameters(&configuration);

        if liquidation_threshold == 0 {
            self.require_no_suppliers(&asset);
        }

        self.store_configuration(&asset, &configuration);
    }

    /// Deactivating requires no suppliers.
    #[only_owner]
    #[endpoint(setReserveActive)]
    fn set_reserve_active(&self, asset: EgldOrEsdtTokenIdentifier, active: bool) {
        if !active {
            self.require_no_suppliers(&asset);
        }

        let mut configuration = self.get_listed_configuration(&asset);
        configuration.is_active = active;
        self.store_configuration(&asset, &configuration);
    }

    #[only_owner]
    #[endpoint(setReserveFreeze)]
    fn set_reserve_freeze(&self, asset: EgldOrEsdtTokenIdentifier, freeze: bool) {
        let mut configuration = self.get_listed_configuration(&asset);
        configuration.is_frozen = freeze;
        self.store_configuration(&asset, &configuration);
    }

    #[only_owner]
    #[endpoint(setReservePause)]
    fn set_reserve_pause(&self, asset: EgldOrEsdtTokenIdentifier, paused: bool) {
        let mut configuration = self.get_listed_configuration(&asset);
        configuration.is_paused = paused;
        self.store_configuration(&asset, &configuration);
    }

    #[only_owner]
    #[endpoint(setReserveBorrowing)]
    fn set_reserve_borrowing(&self, asset: EgldOrEsdtTokenIdentifier, enabled: bool) {
        let mut configuration = self.get_listed_configuration(&asset);
        configuration.borrowing_enabled = enabled;
        self.store_configuration(&asset, &configuration);
    }

    #[only_owner]
    #[endpoint(setReserveStableRateBorrowing)]
    fn set_reserve_stable_rate_borrowing(&self, asset: EgldOrEsdtTokenIdentifier, enabled: bool) {
        let mut configuration = self.get_listed_configuration(&asset);
        configuration.stable_borrowing_enabled = enabled;
        self.store_configuration(&asset, &configuration);
    }

    #[only_owner]
    #[endpoint(setBorrowableInIsolation)]
    fn set_borrowable_in_isolation(&self, asset: EgldOrEsdtTokenIdentifier, borrowable: bool) {
        let mut configuration = self.get_listed_configuration(&asset);
        configuration.borrowable_in_isolation = borrowable;
        self.store_configuration(&asset, &configuration);
    }

    /// Changes the share of borrow interest kept by the protocol. Accrual up to now uses the old
    /// factor; the rates are recomputed with the new one.
    #[only_owner]
    #[endpoint(setReserveFactor)]
    fn set_reserve_factor(&self, asset: EgldOrEsdtTokenIdentifier, reserve_factor: u64) {
        require!(
            reserve_factor <= PERCENTAGE_FACTOR,
            ERROR_INVALID_RESERVE_FACTOR
        );

        let mut cache = Cache::new(self, &asset);
        self.update_state(&mut cache);

        cache.configuration.reserve_factor = reserve_factor;
        self.store_configuration(&asset, &cache.configuration);
        self.update_interest_rates(&mut cache, &BigUint::zero(), &BigUint::zero());
    }

    #[only_owner]
    #[endpoint(setSupplyCap)]
    fn set_supply_cap(&self, asset: EgldOrEsdtTokenIdentifier, supply_cap: u64) {
        require!(supply_cap <= MAX_VALID_SUPPLY_CAP, ERROR_INVALID_SUPPLY_CAP);

        let mut configuration = self.get_listed_configuration(&asset);
        configuration.supply_cap = supply_cap;
        self.store_configuration(&asset, &configuration);
    }

    #[only_owner]
    #[endpoint(setBorrowCap)]
    fn set_borrow_cap(&self, asset: EgldOrEsdtTokenIdentifier, borrow_cap: u64) {
        require!(borrow_cap <= MAX_VALID_BORROW_CAP, ERROR_INVALID_BORROW_CAP);

        let mut configuration = self.get_listed_configuration(&asset);
        configuration.borrow_cap = borrow_cap;
        self.store_configuration(&asset, &configuration);
    }

    #[only_owner]
    #[endpoint(setUnbackedMintCap)]
    fn set_unbacked_mint_cap(&self, asset: EgldOrEsdtTokenIdentifier, unbacked_mint_cap: u64) {
        require!(
            unbacked_mint_cap <= MAX_VALID_UNBACKED_MINT_CAP,
            ERROR_INVALID_UNBACKED_MINT_CAP
        );

        let mut configuration = self.get_listed_configuration(&asset);
        configuration.unbacked_mint_cap = unbacked_mint_cap;
        self.store_configuration(&asset, &configuration);
    }

    /// Sets the debt ceiling, 2 decimals. Turning an asset into an isolated collateral requires no
    /// suppliers; clearing the ceiling resets the isolated debt.
    #[only_owner]
    #[endpoint(setDebtCeiling)]
    fn set_debt_ceiling(&self, asset: EgldOrEsdtTokenIdentifier, debt_ceiling: u64) {
        require!(
            debt_ceiling <= MAX_VALID_DEBT_CEILING,
            ERROR_INVALID_DEBT_CEILING
        );

        let mut configuration = self.get_listed_configuration(&asset);
        if configuration.debt_ceiling == 0 {
            self.require_no_suppliers(&asset);
        }
        configuration.debt_ceiling = debt_ceiling;
        self.store_configuration(&asset, &configuration);

        if debt_ceiling == 0 {
            self.reserve_data(&asset)
                .update(|reserve| reserve.isolation_mode_total_debt = BigUint::zero());
            self.isolation_mode_total_debt_updated_event(&asset, &BigUint::zero());
        }
    }

    #[only_owner]
    #[endpoint(setMaxStableRateBorrowSizePercent)]
    fn set_max_stable_rate_borrow_size_percent(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        max_stable_rate_borrow_size_percent: u64,
    ) {
        require!(
            max_stable_rate_borrow_size_percent <= PERCENTAGE_FACTOR,
            ERROR_INVALID_MAX_STABLE_BORROW_SIZE
        );

        let mut configuration = self.get_listed_configuration(&asset);
        configuration.max_stable_rate_borrow_size_percent = max_stable_rate_borrow_size_percent;
        self.store_configuration(&asset, &configuration);
    }

    #[only_owner]
    #[endpoint(setPriceOracle)]
    fn set_price_oracle(&self, price_oracle: ManagedAddress) {
        require!(!price_oracle.is_zero(), ERROR_ADDRESS_IS_ZERO);
        self.price_oracle().set(&price_oracle);
    }

    #[only_owner]
    #[endpoint(setTreasury)]
    fn set_treasury(&self, treasury: ManagedAddress) {
        require!(!treasury.is_zero(), ERROR_ADDRESS_IS_ZERO);
        self.treasury().set(&treasury);
    }

    #[only_owner]
    #[endpoint(setBridgeProtocolFee)]
    fn set_bridge_protocol_fee(&self, bridge_protocol_fee: u64) {
        require!(
            bridge_protocol_fee <= PERCENTAGE_FACTOR,
            ERROR_INVALID_BRIDGE_PROTOCOL_FEE
        );
        self.bridge_protocol_fee().set(bridge_protocol_fee);
    }

    #[only_owner]
    #[endpoint(addBridge)]
    fn add_bridge(&self, bridge: ManagedAddress) {
        require!(!bridge.is_zero(), ERROR_ADDRESS_IS_ZERO);
        self.bridges().insert(bridge);
    }

    #[only_owner]
    #[endpoint(removeBridge)]
    fn remove_bridge(&self, bridge: ManagedAddress) {
        self.bridges().swap_remove(&bridge);
    }

    /// Static checks of a full configuration.
    fn validate_reserve_configuration(&self, configuration: &ReserveConfiguration) {
        require!(
            configuration.decimals <= MAX_VALID_DECIMALS,
            ERROR_INVALID_DECIMALS
        );
        self.validate_collateral_parameters(configuration);
        require!(
            configuration.reserve_factor <= PERCENTAGE_FACTOR,
            ERROR_INVALID_RESERVE_FACTOR
        );
        require!(
            configuration.supply_cap <= MAX_VALID_SUPPLY_CAP,
            ERROR_INVALID_SUPPLY_CAP
        );
        require!(
            configuration.borrow_cap <= MAX_VALID_BORROW_CAP,
            ERROR_INVALID_BORROW_CAP
        );
        require!(
            configuration.unbacked_mint_cap <= MAX_VALID_UNBACKED_MINT_CAP,
            ERROR_INVALID_UNBACKED_MINT_CAP
        );
        require!(
            configuration.debt_ceiling <= MAX_VALID_DEBT_CEILING,
            ERROR_INVALID_DEBT_CEILING
        );
        require!(
            configuration.max_stable_rate_borrow_size_percent <= PERCENTAGE_FACTOR,
            ERROR_INVALID_MAX_STABLE_BORROW_SIZE
        );
    }

    /// `ltv <= threshold`; a non zero threshold needs a bonus above 100% with
    /// `threshold * bonus <= 100%`, a zero threshold a zero bonus.
    fn validate_collateral_parameters(&self, configuration: &ReserveConfiguration) {
        require!(
            configuration.ltv <= configuration.liquidation_threshold,
            ERROR_INVALID_RESERVE_PARAMS
        );

        if configuration.liquidation_threshold != 0 {
            require!(
                configuration.liquidation_bonus > PERCENTAGE_FACTOR,
                ERROR_INVALID_RESERVE_PARAMS
            );
            let threshold_with_bonus = self.percent_mul(
                &BigUint::from(configuration.liquidation_threshold),
                configuration.liquidation_bonus,
            );
            require!(
                threshold_with_bonus <= BigUint::from(PERCENTAGE_FACTOR),
                ERROR_INVALID_RESERVE_PARAMS
            );
        } else {
            require!(
                configuration.liquidation_bonus == 0,
                ERROR_INVALID_RESERVE_PARAMS
            );
        }
    }

    fn assign_reserve_id(&self, asset: &EgldOrEsdtTokenIdentifier) -> u32 {
        let reserves_count = self.reserves_count().get();
        for reserve_id in 0..reserves_count {
            let slot = self.reserves_list(reserve_id);
            if slot.is_empty() {
                slot.set(asset);
                return reserve_id;
            }
        }

        require!(
            reserves_count < MAX_RESERVES_COUNT,
            ERROR_NO_MORE_RESERVES_ALLOWED
        );
        self.reserves_list(reserves_count).set(asset);
        self.reserves_count().set(reserves_count + 1);

        reserves_count
    }

    fn require_no_suppliers(&self, asset: &EgldOrEsdtTokenIdentifier) {
        let reserve_mapper = self.reserve_data(asset);
        require!(!reserve_mapper.is_empty(), ERROR_ASSET_NOT_LISTED);

        require!(
            self.scaled_total_supply(ScaledTokenKind::Supply, asset).get() == BigUint::zero()
                && reserve_mapper.get().accrued_to_treasury == BigUint::zero(),
            ERROR_RESERVE_LIQUIDITY_NOT_ZERO
        );
    }

    fn get_listed_configuration(&self, asset: &EgldOrEsdtTokenIdentifier) -> ReserveConfiguration {
        require!(!self.reserve_data(asset).is_empty(), ERROR_ASSET_NOT_LISTED);
        self.reserve_configuration(asset).get()
    }

    fn store_configuration(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        configuration: &ReserveConfiguration,
    ) {
        self.reserve_configuration(asset).set(configuration);
        self.reserve_configuration_updated_event(asset, configuration);
    }
}
