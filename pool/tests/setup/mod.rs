#![allow(dead_code)]

use crate::constants::*;
use common_constants::{PERCENTAGE_FACTOR, RAY, WAD};
use common_proxies::{pool_proxy::MariaPoolProxy, price_oracle_proxy::PriceOracleProxy};
use common_structs::{
    InterestRateMode, InterestRateStrategy, IsolationModeState, ReserveConfiguration,
    ReserveSnapshot, ScaledTokenKind, StableDebtPosition, UserAccountData,
};
use multiversx_sc::codec::multi_types::OptionalValue;
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EsdtTokenPayment, ManagedAddress, MultiValueEncoded,
    ReturnsResult, TestAddress, TestTokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi, imports::ExpectMessage, DebugApi, ScenarioTxRun, ScenarioWorld,
    WhiteboxContract,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POOL_PATH, maria_pool::ContractBuilder);
    blockchain.register_contract(ORACLE_PATH, price_oracle_mock::ContractBuilder);

    blockchain
}

/// `amount` whole tokens in the smallest unit of a `decimals` token.
pub fn units(amount: u64, decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals as u32)
}

/// Basis points expressed in ray.
pub fn ray_bps(bps: u64) -> BigUint<StaticApi> {
    BigUint::from(RAY) * bps / PERCENTAGE_FACTOR
}

pub fn ray() -> BigUint<StaticApi> {
    BigUint::from(RAY)
}

pub fn wad() -> BigUint<StaticApi> {
    BigUint::from(WAD)
}

pub fn asset(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

pub fn error_text(error: &[u8]) -> &str {
    core::str::from_utf8(error).unwrap()
}

pub fn default_strategy() -> InterestRateStrategy<StaticApi> {
    InterestRateStrategy {
        optimal_usage_ratio: ray_bps(OPTIMAL_USAGE_RATIO),
        base_variable_borrow_rate: ray_bps(BASE_VARIABLE_BORROW_RATE),
        variable_rate_slope1: ray_bps(VARIABLE_RATE_SLOPE1),
        variable_rate_slope2: ray_bps(VARIABLE_RATE_SLOPE2),
        stable_rate_slope1: ray_bps(STABLE_RATE_SLOPE1),
        stable_rate_slope2: ray_bps(STABLE_RATE_SLOPE2),
        base_stable_rate_offset: ray_bps(BASE_STABLE_RATE_OFFSET),
        stable_rate_excess_offset: ray_bps(STABLE_RATE_EXCESS_OFFSET),
        optimal_stable_to_total_debt_ratio: ray_bps(OPTIMAL_STABLE_TO_TOTAL_DEBT_RATIO),
    }
}

pub fn reserve_config(decimals: usize, ltv: u64, liquidation_threshold: u64) -> ReserveConfiguration {
    ReserveConfiguration {
        ltv,
        liquidation_threshold,
        liquidation_bonus: LIQ_BONUS,
        decimals,
        is_active: true,
        is_frozen: false,
        is_paused: false,
        borrowing_enabled: true,
        stable_borrowing_enabled: true,
        borrowable_in_isolation: false,
        reserve_factor: RESERVE_FACTOR,
        borrow_cap: 0,
        supply_cap: 0,
        unbacked_mint_cap: 0,
        debt_ceiling: 0,
        max_stable_rate_borrow_size_percent: MAX_STABLE_BORROW_SIZE,
    }
}

pub fn usdc_config() -> ReserveConfiguration {
    let mut config = reserve_config(USDC_DECIMALS, USDC_LTV, USDC_LIQ_THRESHOLD);
    config.borrowable_in_isolation = true;
    config
}

pub fn egld_config() -> ReserveConfiguration {
    reserve_config(EGLD_DECIMALS, EGLD_LTV, EGLD_LIQ_THRESHOLD)
}

pub fn isolated_config() -> ReserveConfiguration {
    let mut config = reserve_config(ISOLATED_DECIMALS, ISOLATED_LTV, ISOLATED_LIQ_THRESHOLD);
    config.borrowing_enabled = false;
    config.stable_borrowing_enabled = false;
    config.debt_ceiling = ISOLATED_DEBT_CEILING;
    config
}

pub struct PoolTestState {
    pub world: ScenarioWorld,
    pub pool_whitebox: WhiteboxContract<maria_pool::ContractObj<DebugApi>>,
}

impl PoolTestState {
    /// Deploys the oracle and the pool, funds the test accounts and lists USDC, EGLD and the
    /// isolated token as reserves 0, 1 and 2.
    pub fn new() -> Self {
        let mut state = Self::deploy();

        state.init_reserve(USDC_TOKEN, usdc_config(), default_strategy());
        state.init_reserve(EGLD_TOKEN, egld_config(), default_strategy());
        state.init_reserve(ISOLATED_TOKEN, isolated_config(), default_strategy());

        state
    }

    /// Deploys the oracle and the pool without listing any reserve.
    pub fn deploy() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(START_TIMESTAMP);

        world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(PriceOracleProxy)
            .init()
            .code(ORACLE_PATH)
            .new_address(ORACLE_ADDRESS)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(MariaPoolProxy)
            .init(
                ORACLE_ADDRESS.to_managed_address(),
                TREASURY_ADDRESS.to_managed_address(),
            )
            .code(POOL_PATH)
            .new_address(POOL_ADDRESS)
            .run();

        let pool_whitebox = WhiteboxContract::new(POOL_ADDRESS, maria_pool::contract_obj);

        let mut state = Self {
            world,
            pool_whitebox,
        };
        state.set_price(USDC_TOKEN, USDC_PRICE_IN_DOLLARS);
        state.set_price(EGLD_TOKEN, EGLD_PRICE_IN_DOLLARS);
        state.set_price(ISOLATED_TOKEN, ISOLATED_PRICE_IN_DOLLARS);

        state
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn set_price(&mut self, token: TestTokenIdentifier, price_in_dollars: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_ADDRESS)
            .typed(PriceOracleProxy)
            .set_asset_price(asset(token), wad() * price_in_dollars)
            .run();
    }

    // Configuration

    pub fn init_reserve(
        &mut self,
        token: TestTokenIdentifier,
        configuration: ReserveConfiguration,
        strategy: InterestRateStrategy<StaticApi>,
    ) -> u32 {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .init_reserve(asset(token), configuration, strategy)
            .returns(ReturnsResult)
            .run()
    }

    pub fn init_reserve_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        configuration: ReserveConfiguration,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .init_reserve(asset(token), configuration, default_strategy())
            .returns(ExpectMessage(error_text(error)))
            .run();
    }

    pub fn add_bridge(&mut self, bridge: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .add_bridge(bridge.to_managed_address())
            .run();
    }

    // Actions

    pub fn supply(&mut self, from: TestAddress, token: TestTokenIdentifier, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .supply(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .payment(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn supply_on_behalf(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        on_behalf_of: TestAddress,
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .supply(OptionalValue::Some(on_behalf_of.to_managed_address()))
            .payment(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn supply_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .supply(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .payment(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .returns(ExpectMessage(error_text(error)))
            .run();
    }

    pub fn withdraw(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: OptionalValue<BigUint<StaticApi>>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .withdraw(
                asset(token),
                amount,
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .withdraw(
                asset(token),
                OptionalValue::Some(amount),
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .returns(ExpectMessage(error_text(error)))
            .run();
    }

    pub fn borrow(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        mode: InterestRateMode,
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .borrow(asset(token), amount, mode)
            .run();
    }

    pub fn borrow_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        mode: InterestRateMode,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .borrow(asset(token), amount, mode)
            .returns(ExpectMessage(error_text(error)))
            .run();
    }

    pub fn repay(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        mode: InterestRateMode,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .repay(mode, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .payment(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn repay_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        mode: InterestRateMode,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .repay(mode, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .payment(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount))
            .returns(ExpectMessage(error_text(error)))
            .run();
    }

    pub fn repay_with_supply_tokens(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        mode: InterestRateMode,
        amount: OptionalValue<BigUint<StaticApi>>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .repay_with_supply_tokens(asset(token), mode, amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn swap_borrow_rate_mode(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        mode: InterestRateMode,
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .swap_borrow_rate_mode(asset(token), mode)
            .run();
    }

    pub fn swap_borrow_rate_mode_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        mode: InterestRateMode,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .swap_borrow_rate_mode(asset(token), mode)
            .returns(ExpectMessage(error_text(error)))
            .run();
    }

    pub fn rebalance_stable_borrow_rate_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        user: TestAddress,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .rebalance_stable_borrow_rate(asset(token), user.to_managed_address())
            .returns(ExpectMessage(error_text(error)))
            .run();
    }

    pub fn set_use_as_collateral(&mut self, from: TestAddress, token: TestTokenIdentifier, enabled: bool) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .set_user_use_reserve_as_collateral(asset(token), enabled)
            .run();
    }

    pub fn set_use_as_collateral_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        enabled: bool,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .set_user_use_reserve_as_collateral(asset(token), enabled)
            .returns(ExpectMessage(error_text(error)))
            .run();
    }

    pub fn transfer_supply(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        to: TestAddress,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .transfer_supply(asset(token), to.to_managed_address(), amount)
            .run();
    }

    pub fn transfer_supply_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        to: TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .transfer_supply(asset(token), to.to_managed_address(), amount)
            .returns(ExpectMessage(error_text(error)))
            .run();
    }

    pub fn mint_to_treasury(&mut self, tokens: &[TestTokenIdentifier]) {
        let mut assets = MultiValueEncoded::new();
        for token in tokens {
            assets.push(asset(*token));
        }

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .mint_to_treasury(assets)
            .run();
    }

    // Views

    pub fn balance_of(
        &mut self,
        kind: ScaledTokenKind,
        token: TestTokenIdentifier,
        user: TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_balance_of(kind, asset(token), user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn supply_balance(&mut self, token: TestTokenIdentifier, user: TestAddress) -> BigUint<StaticApi> {
        self.balance_of(ScaledTokenKind::Supply, token, user)
    }

    pub fn variable_debt(&mut self, token: TestTokenIdentifier, user: TestAddress) -> BigUint<StaticApi> {
        self.balance_of(ScaledTokenKind::VariableDebt, token, user)
    }

    pub fn scaled_balance_of(
        &mut self,
        kind: ScaledTokenKind,
        token: TestTokenIdentifier,
        user: TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_scaled_balance_of(kind, asset(token), user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_supply(&mut self, kind: ScaledTokenKind, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_total_supply(kind, asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn stable_debt(&mut self, token: TestTokenIdentifier, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_stable_balance_of(asset(token), user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn stable_position(
        &mut self,
        token: TestTokenIdentifier,
        user: TestAddress,
    ) -> StableDebtPosition<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_stable_debt_position(asset(token), user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn stable_total_supply(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_stable_total_supply(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn reserve_data(&mut self, token: TestTokenIdentifier) -> ReserveSnapshot<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_reserve_data(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn normalized_income(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_reserve_normalized_income(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn normalized_debt(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_reserve_normalized_variable_debt(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_configuration(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_user_configuration_data(user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_account_data(&mut self, user: TestAddress) -> UserAccountData<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_user_account_data(user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn isolation_mode_state(&mut self, user: TestAddress) -> IsolationModeState<StaticApi> {
        self.world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_user_isolation_mode_state(user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn reserves_list(&mut self) -> Vec<EgldOrEsdtTokenIdentifier<StaticApi>> {
        let reserves: MultiValueEncoded<StaticApi, EgldOrEsdtTokenIdentifier<StaticApi>> = self
            .world
            .query()
            .to(POOL_ADDRESS)
            .typed(MariaPoolProxy)
            .get_reserves_list()
            .returns(ReturnsResult)
            .run();

        reserves.into_iter().collect()
    }
}

/// Bit of the borrowing flag of `reserve_id` in a user bitmap.
pub fn borrowing_bit(reserve_id: u32) -> BigUint<StaticApi> {
    BigUint::from(1u64) << (2 * reserve_id as usize)
}

/// Bit of the collateral flag of `reserve_id` in a user bitmap.
pub fn collateral_bit(reserve_id: u32) -> BigUint<StaticApi> {
    BigUint::from(1u64) << (2 * reserve_id as usize + 1)
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.account(TREASURY_ADDRESS).nonce(1);

    for user in [
        SUPPLIER_ADDRESS,
        BORROWER_ADDRESS,
        RECEIVER_ADDRESS,
        BRIDGE_ADDRESS,
    ] {
        world
            .account(user)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, units(1_000_000, USDC_DECIMALS))
            .esdt_balance(EGLD_TOKEN, units(100_000, EGLD_DECIMALS))
            .esdt_balance(ISOLATED_TOKEN, units(100_000, ISOLATED_DECIMALS))
            .esdt_balance(NEW_TOKEN, units(100_000, NEW_DECIMALS));
    }
}

/// Asserts `actual` is within `tolerance` units of `expected`.
pub fn assert_approx_eq(actual: &BigUint<StaticApi>, expected: &BigUint<StaticApi>, tolerance: u64) {
    let difference = if actual > expected {
        actual - expected
    } else {
        expected - actual
    };
    assert!(
        difference <= BigUint::from(tolerance),
        "expected {:?} within {} of {:?}",
        actual,
        tolerance,
        expected
    );
}
