pub mod constants;
pub mod setup;

use common_errors::*;
use common_proxies::pool_proxy::MariaPoolProxy;
use common_structs::{InterestRateMode, ScaledTokenKind};
use constants::*;
use multiversx_sc::types::{BigUint, EsdtTokenPayment, ReturnsResult};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun};
use setup::*;

/// 10k USDC supplied, 4k borrowed at a variable rate against 1000 EGLD: 40% usage.
fn setup_forty_percent_usage(state: &mut PoolTestState) {
    state.supply(SUPPLIER_ADDRESS, USDC_TOKEN, units(10_000, USDC_DECIMALS));
    state.supply(BORROWER_ADDRESS, EGLD_TOKEN, units(1_000, EGLD_DECIMALS));
    state.borrow(
        BORROWER_ADDRESS,
        USDC_TOKEN,
        units(4_000, USDC_DECIMALS),
        InterestRateMode::Variable,
    );
}

fn mint_unbacked(
    state: &mut PoolTestState,
    from: multiversx_sc::types::TestAddress,
    amount: BigUint<StaticApi>,
) {
    state
        .world
        .tx()
        .from(from)
        .to(POOL_ADDRESS)
        .typed(MariaPoolProxy)
        .mint_unbacked(
            asset(USDC_TOKEN),
            amount,
            RECEIVER_ADDRESS.to_managed_address(),
        )
        .run();
}

fn mint_unbacked_error(
    state: &mut PoolTestState,
    from: multiversx_sc::types::TestAddress,
    amount: BigUint<StaticApi>,
    error: &[u8],
) {
    state
        .world
        .tx()
        .from(from)
        .to(POOL_ADDRESS)
        .typed(MariaPoolProxy)
        .mint_unbacked(
            asset(USDC_TOKEN),
            amount,
            RECEIVER_ADDRESS.to_managed_address(),
        )
        .returns(ExpectMessage(error_text(error)))
        .run();
}

fn back_unbacked(
    state: &mut PoolTestState,
    paid: BigUint<StaticApi>,
    fee: BigUint<StaticApi>,
) -> BigUint<StaticApi> {
    state
        .world
        .tx()
        .from(BRIDGE_ADDRESS)
        .to(POOL_ADDRESS)
        .typed(MariaPoolProxy)
        .back_unbacked(fee)
        .payment(EsdtTokenPayment::new(USDC_TOKEN.to_token_identifier(), 0, paid))
        .returns(ReturnsResult)
        .run()
}

fn set_unbacked_mint_cap(state: &mut PoolTestState, cap: u64) {
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .typed(MariaPoolProxy)
        .set_unbacked_mint_cap(asset(USDC_TOKEN), cap)
        .run();
}

#[test]
fn fresh_reserve_starts_at_unit_indexes() {
    let mut state = PoolTestState::new();

    let reserve = state.reserve_data(USDC_TOKEN);
    assert_eq!(reserve.data.id, USDC_ID);
    assert_eq!(reserve.data.liquidity_index, ray());
    assert_eq!(reserve.data.variable_borrow_index, ray());
    assert_eq!(reserve.data.last_update_timestamp, START_TIMESTAMP);
    assert_eq!(reserve.data.current_liquidity_rate, BigUint::zero());
    assert_eq!(reserve.data.accrued_to_treasury, BigUint::zero());
    assert_eq!(reserve.scaled_total_supply, BigUint::zero());
}

#[test]
fn indexes_stay_flat_without_borrowers() {
    let mut state = PoolTestState::new();
    state.supply(SUPPLIER_ADDRESS, USDC_TOKEN, units(10_000, USDC_DECIMALS));

    let reserve = state.reserve_data(USDC_TOKEN);
    assert_eq!(reserve.data.current_liquidity_rate, BigUint::zero());
    assert_eq!(reserve.data.current_variable_borrow_rate, BigUint::zero());
    // No debt: the stable rate sits at slope1 plus the base offset.
    assert_eq!(reserve.data.current_stable_borrow_rate, ray_bps(600));

    state.set_timestamp(START_TIMESTAMP + SECONDS_PER_YEAR);
    assert_eq!(state.normalized_income(USDC_TOKEN), ray());
    assert_eq!(state.normalized_debt(USDC_TOKEN), ray());
    assert_eq!(
        state.supply_balance(USDC_TOKEN, SUPPLIER_ADDRESS),
        units(10_000, USDC_DECIMALS)
    );
}

#[test]
fn rates_follow_the_usage_curve() {
    let mut state = PoolTestState::new();
    setup_forty_percent_usage(&mut state);

    let reserve = state.reserve_data(USDC_TOKEN);
    // 4% * 0.4 / 0.8
    assert_eq!(reserve.data.current_variable_borrow_rate, ray_bps(200));
    // 6% + 2% * 0.4 / 0.8
    assert_eq!(reserve.data.current_stable_borrow_rate, ray_bps(700));
    // 2% * 0.4 * 90%
    assert_eq!(reserve.data.current_liquidity_rate, ray_bps(72));
    assert_eq!(
        reserve.data.virtual_underlying_balance,
        units(6_000, USDC_DECIMALS)
    );
}

#[test]
fn rates_jump_past_optimal_usage() {
    let mut state = PoolTestState::new();
    state.supply(SUPPLIER_ADDRESS, USDC_TOKEN, units(10_000, USDC_DECIMALS));
    state.supply(BORROWER_ADDRESS, EGLD_TOKEN, units(1_000, EGLD_DECIMALS));
    state.borrow(
        BORROWER_ADDRESS,
        USDC_TOKEN,
        units(9_000, USDC_DECIMALS),
        InterestRateMode::Variable,
    );

    // 90% usage: 4% + 75% * (0.9 - 0.8) / 0.2
    let reserve = state.reserve_data(USDC_TOKEN);
    assert_eq!(reserve.data.current_variable_borrow_rate, ray_bps(4_150));
}

#[test]
fn one_year_of_accrual() {
    let mut state = PoolTestState::new();
    setup_forty_percent_usage(&mut state);

    state.set_timestamp(START_TIMESTAMP + SECONDS_PER_YEAR);

    // Linear supply interest at 0.72%.
    assert_eq!(state.normalized_income(USDC_TOKEN), ray_bps(10_072));
    assert_eq!(
        state.supply_balance(USDC_TOKEN, SUPPLIER_ADDRESS),
        units(10_072, USDC_DECIMALS)
    );

    // Compounded debt interest at 2%, a little above the linear 2%.
    let debt_index = state.normalized_debt(USDC_TOKEN);
    assert!(debt_index > ray_bps(10_201));
    assert!(debt_index < ray_bps(10_203));
    let debt = state.variable_debt(USDC_TOKEN, BORROWER_ADDRESS);
    assert!(debt > units(4_080, USDC_DECIMALS));
    assert!(debt < units(4_081, USDC_DECIMALS));

    // Views do not write: the stored state still reads the borrow block.
    let reserve = state.reserve_data(USDC_TOKEN);
    assert_eq!(reserve.data.last_update_timestamp, START_TIMESTAMP);
    assert_eq!(reserve.data.liquidity_index, ray());
}

#[test]
fn treasury_share_accrues_and_mints() {
    let mut state = PoolTestState::new();
    setup_forty_percent_usage(&mut state);

    let now = START_TIMESTAMP + SECONDS_PER_YEAR;
    state.set_timestamp(now);
    state.supply(SUPPLIER_ADDRESS, USDC_TOKEN, units(1, USDC_DECIMALS));

    let reserve = state.reserve_data(USDC_TOKEN);
    assert_eq!(reserve.data.last_update_timestamp, now);
    assert_eq!(reserve.data.liquidity_index, ray_bps(10_072));
    // 10% of roughly 80.8 USDC of interest, scaled down by the liquidity index.
    let accrued = reserve.data.accrued_to_treasury.clone();
    assert!(accrued > units(79, USDC_DECIMALS) / 10u64);
    assert!(accrued < units(82, USDC_DECIMALS) / 10u64);

    state.mint_to_treasury(&[USDC_TOKEN, EGLD_TOKEN]);

    let reserve = state.reserve_data(USDC_TOKEN);
    assert_eq!(reserve.data.accrued_to_treasury, BigUint::zero());
    assert_eq!(
        state.scaled_balance_of(ScaledTokenKind::Supply, USDC_TOKEN, TREASURY_ADDRESS),
        accrued
    );
    let treasury_balance = state.supply_balance(USDC_TOKEN, TREASURY_ADDRESS);
    assert!(treasury_balance > units(80, USDC_DECIMALS) / 10u64);
    assert!(treasury_balance < units(82, USDC_DECIMALS) / 10u64);

    // Nothing left to mint.
    state.mint_to_treasury(&[USDC_TOKEN]);
    assert_eq!(
        state.scaled_balance_of(ScaledTokenKind::Supply, USDC_TOKEN, TREASURY_ADDRESS),
        accrued
    );
}

#[test]
fn repeated_updates_in_one_block_are_idempotent() {
    let mut state = PoolTestState::new();
    setup_forty_percent_usage(&mut state);

    let now = START_TIMESTAMP + 90 * SECONDS_PER_DAY;
    state.set_timestamp(now);
    state.supply(SUPPLIER_ADDRESS, USDC_TOKEN, units(1, USDC_DECIMALS));
    let first = state.reserve_data(USDC_TOKEN);

    state.supply(RECEIVER_ADDRESS, USDC_TOKEN, units(1, USDC_DECIMALS));
    let second = state.reserve_data(USDC_TOKEN);

    assert_eq!(first.data.liquidity_index, second.data.liquidity_index);
    assert_eq!(
        first.data.variable_borrow_index,
        second.data.variable_borrow_index
    );
    assert_eq!(
        first.data.accrued_to_treasury,
        second.data.accrued_to_treasury
    );
    assert_eq!(second.data.last_update_timestamp, now);
}

#[test]
fn reserve_factor_change_settles_accrued_interest_first() {
    let mut state = PoolTestState::new();
    setup_forty_percent_usage(&mut state);

    let now = START_TIMESTAMP + SECONDS_PER_YEAR;
    state.set_timestamp(now);
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .typed(MariaPoolProxy)
        .set_reserve_factor(asset(USDC_TOKEN), 5_000u64)
        .run();

    let reserve = state.reserve_data(USDC_TOKEN);
    assert_eq!(reserve.data.last_update_timestamp, now);
    assert_eq!(reserve.configuration.reserve_factor, 5_000);
    // Accrued at the old 10% factor.
    assert!(reserve.data.accrued_to_treasury < units(82, USDC_DECIMALS) / 10u64);
    assert!(reserve.data.accrued_to_treasury > units(79, USDC_DECIMALS) / 10u64);
    // Suppliers now keep half of the borrow interest.
    assert!(reserve.data.current_liquidity_rate < ray_bps(72));
}

#[test]
fn strategy_change_recomputes_rates() {
    let mut state = PoolTestState::new();
    setup_forty_percent_usage(&mut state);

    let mut strategy = default_strategy();
    strategy.variable_rate_slope1 = ray_bps(800);
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .typed(MariaPoolProxy)
        .set_reserve_interest_rate_strategy(asset(USDC_TOKEN), strategy)
        .run();

    let reserve = state.reserve_data(USDC_TOKEN);
    assert_eq!(reserve.strategy.variable_rate_slope1, ray_bps(800));
    assert_eq!(reserve.data.current_variable_borrow_rate, ray_bps(400));
}

#[test]
fn bridge_mint_requires_registered_bridge_and_cap() {
    let mut state = PoolTestState::new();
    state.supply(SUPPLIER_ADDRESS, USDC_TOKEN, units(10_000, USDC_DECIMALS));

    mint_unbacked_error(
        &mut state,
        BRIDGE_ADDRESS,
        units(500, USDC_DECIMALS),
        ERROR_CALLER_NOT_BRIDGE,
    );

    state.add_bridge(BRIDGE_ADDRESS);
    // A zero cap disables unbacked minting.
    mint_unbacked_error(
        &mut state,
        BRIDGE_ADDRESS,
        units(500, USDC_DECIMALS),
        ERROR_UNBACKED_MINT_CAP_EXCEEDED,
    );

    set_unbacked_mint_cap(&mut state, 1_000);
    mint_unbacked(&mut state, BRIDGE_ADDRESS, units(500, USDC_DECIMALS));
    mint_unbacked_error(
        &mut state,
        BRIDGE_ADDRESS,
        units(501, USDC_DECIMALS),
        ERROR_UNBACKED_MINT_CAP_EXCEEDED,
    );

    assert_eq!(
        state.supply_balance(USDC_TOKEN, RECEIVER_ADDRESS),
        units(500, USDC_DECIMALS)
    );
    assert_eq!(
        state.user_configuration(RECEIVER_ADDRESS),
        collateral_bit(USDC_ID)
    );
    let reserve = state.reserve_data(USDC_TOKEN);
    assert_eq!(reserve.data.unbacked, units(500, USDC_DECIMALS));
    assert_eq!(
        reserve.data.virtual_underlying_balance,
        units(10_000, USDC_DECIMALS)
    );

    mint_unbacked_error(
        &mut state,
        SUPPLIER_ADDRESS,
        units(1, USDC_DECIMALS),
        ERROR_CALLER_NOT_BRIDGE,
    );
}

#[test]
fn backing_pays_fee_to_suppliers_and_refunds_excess() {
    let mut state = PoolTestState::new();
    state.supply(SUPPLIER_ADDRESS, USDC_TOKEN, units(10_000, USDC_DECIMALS));
    state.add_bridge(BRIDGE_ADDRESS);
    set_unbacked_mint_cap(&mut state, 1_000);
    mint_unbacked(&mut state, BRIDGE_ADDRESS, units(500, USDC_DECIMALS));

    let backed = back_unbacked(
        &mut state,
        units(600, USDC_DECIMALS),
        units(10, USDC_DECIMALS),
    );

    assert_eq!(backed, units(500, USDC_DECIMALS));
    let reserve = state.reserve_data(USDC_TOKEN);
    assert_eq!(reserve.data.unbacked, BigUint::zero());
    // No time passed, so the whole index move is the fee: 1 + 10 / 10_500.
    assert_eq!(
        reserve.data.liquidity_index,
        BigUint::from(1_000_952_380_952_380_952_380_952_381u128)
    );
    assert_eq!(state.normalized_income(USDC_TOKEN), reserve.data.liquidity_index);
    assert_eq!(reserve.data.accrued_to_treasury, BigUint::zero());
    assert_eq!(
        reserve.data.virtual_underlying_balance,
        units(10_510, USDC_DECIMALS)
    );
    assert_eq!(
        state.supply_balance(USDC_TOKEN, SUPPLIER_ADDRESS),
        BigUint::from(10_009_523_810u64)
    );

    // 600 paid, 510 kept.
    state.world.check_account(BRIDGE_ADDRESS).esdt_balance(
        USDC_TOKEN,
        &(units(1_000_000, USDC_DECIMALS) - units(510, USDC_DECIMALS)),
    );
}

#[test]
fn bridge_protocol_fee_goes_to_treasury() {
    let mut state = PoolTestState::new();
    state.supply(SUPPLIER_ADDRESS, USDC_TOKEN, units(10_000, USDC_DECIMALS));
    state.add_bridge(BRIDGE_ADDRESS);
    set_unbacked_mint_cap(&mut state, 1_000);
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .typed(MariaPoolProxy)
        .set_bridge_protocol_fee(5_000u64)
        .run();
    mint_unbacked(&mut state, BRIDGE_ADDRESS, units(100, USDC_DECIMALS));

    back_unbacked(
        &mut state,
        units(110, USDC_DECIMALS),
        units(10, USDC_DECIMALS),
    );

    let reserve = state.reserve_data(USDC_TOKEN);
    assert!(reserve.data.accrued_to_treasury > BigUint::zero());
    assert!(reserve.data.accrued_to_treasury <= units(5, USDC_DECIMALS));
}

#[test]
fn backing_more_than_unbacked_keeps_the_fee() {
    let mut state = PoolTestState::new();
    state.supply(SUPPLIER_ADDRESS, USDC_TOKEN, units(1_000, USDC_DECIMALS));
    state.add_bridge(BRIDGE_ADDRESS);

    let backed = back_unbacked(
        &mut state,
        units(20, USDC_DECIMALS),
        units(20, USDC_DECIMALS),
    );

    assert_eq!(backed, BigUint::zero());
    assert!(state.supply_balance(USDC_TOKEN, SUPPLIER_ADDRESS) > units(1_019, USDC_DECIMALS));
}

#[test]
fn fee_above_payment_is_rejected() {
    let mut state = PoolTestState::new();
    state.add_bridge(BRIDGE_ADDRESS);

    state
        .world
        .tx()
        .from(BRIDGE_ADDRESS)
        .to(POOL_ADDRESS)
        .typed(MariaPoolProxy)
        .back_unbacked(units(20, USDC_DECIMALS))
        .payment(EsdtTokenPayment::new(
            USDC_TOKEN.to_token_identifier(),
            0,
            units(10, USDC_DECIMALS),
        ))
        .returns(ExpectMessage(error_text(ERROR_INVALID_FEE)))
        .run();
}
