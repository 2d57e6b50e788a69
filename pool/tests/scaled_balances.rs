pub mod constants;
pub mod setup;

use common_constants::RAY;
use common_structs::ScaledTokenKind;
use constants::*;
use maria_pool::{
    storage::Storage, tokens::scaled::ScaledTokenModule, tokens::stable::StableDebtModule,
};
use multiversx_sc::types::{BigUint, EgldOrEsdtTokenIdentifier};
use multiversx_sc_scenario::{
    imports::{ReturnsLogs, RustBigUint},
    scenario_model::Log,
    ScenarioTxWhitebox,
};
use setup::*;

// Topic positions in `mint` and `burn` logs, the identifier being topic 0.
const TARGET_TOPIC: usize = 4;
const VALUE_TOPIC: usize = 5;
const BALANCE_INCREASE_TOPIC: usize = 6;
const INDEX_TOPIC: usize = 7;

fn events<'a>(logs: &'a [Log], identifier: &str) -> Vec<&'a Log> {
    logs.iter()
        .filter(|log| log.topics[0] == identifier.as_bytes())
        .collect()
}

fn topic_amount(log: &Log, position: usize) -> RustBigUint {
    RustBigUint::from_bytes_be(&log.topics[position])
}

#[test]
fn balance_grows_with_the_index() {
    let mut state = PoolTestState::new();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .whitebox(maria_pool::contract_obj, |sc| {
            let asset = EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier());
            let user = SUPPLIER_ADDRESS.to_managed_address();
            let index = BigUint::from(RAY);

            let (is_first, increase) = sc.mint_scaled(
                ScaledTokenKind::Supply,
                &asset,
                &user,
                &user,
                &BigUint::from(1_000u64),
                &index,
            );
            assert!(is_first);
            assert_eq!(increase, BigUint::zero());

            let later_index = BigUint::from(RAY) * 105u64 / 100u64;
            assert_eq!(
                sc.balance_of_at(ScaledTokenKind::Supply, &asset, &user, &later_index),
                BigUint::from(1_050u64)
            );
            assert_eq!(
                sc.scaled_total_supply(ScaledTokenKind::Supply, &asset).get(),
                BigUint::from(1_000u64)
            );

            // A second mint reports the interest earned since the first.
            let (is_first, increase) = sc.mint_scaled(
                ScaledTokenKind::Supply,
                &asset,
                &user,
                &user,
                &BigUint::from(105u64),
                &later_index,
            );
            assert!(!is_first);
            assert_eq!(increase, BigUint::from(50u64));
            assert_eq!(
                sc.get_scaled_balance(ScaledTokenKind::Supply, &asset, &user)
                    .scaled_amount,
                BigUint::from(1_100u64)
            );
        });
}

#[test]
fn burn_above_interest_is_reported_as_a_burn() {
    let mut state = PoolTestState::new();

    let logs = state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .returns(ReturnsLogs)
        .whitebox(maria_pool::contract_obj, |sc| {
            let asset = EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier());
            let user = SUPPLIER_ADDRESS.to_managed_address();

            sc.mint_scaled(
                ScaledTokenKind::Supply,
                &asset,
                &user,
                &user,
                &BigUint::from(1_000u64),
                &BigUint::from(RAY),
            );

            let index = BigUint::from(RAY) * 106u64 / 100u64;
            let increase = sc.burn_scaled(
                ScaledTokenKind::Supply,
                &asset,
                &user,
                &user,
                &BigUint::from(100u64),
                &index,
            );

            assert_eq!(increase, BigUint::from(60u64));
            assert_eq!(
                sc.net_burn_movement(&BigUint::from(100u64), &increase),
                (false, BigUint::from(40u64))
            );
            // 1000 - round(100 / 1.06)
            let balance = sc.get_scaled_balance(ScaledTokenKind::Supply, &asset, &user);
            assert_eq!(balance.scaled_amount, BigUint::from(906u64));
            assert_eq!(balance.last_index, index);
            assert_eq!(
                sc.balance_of_at(ScaledTokenKind::Supply, &asset, &user, &index),
                BigUint::from(960u64)
            );
        });

    let mints = events(&logs, "mint");
    assert_eq!(mints.len(), 1);
    assert_eq!(topic_amount(mints[0], VALUE_TOPIC), RustBigUint::from(1_000u64));
    assert_eq!(topic_amount(mints[0], BALANCE_INCREASE_TOPIC), RustBigUint::from(0u64));

    let burns = events(&logs, "burn");
    assert_eq!(burns.len(), 1);
    assert_eq!(
        burns[0].topics[TARGET_TOPIC],
        SUPPLIER_ADDRESS.to_address().as_bytes()
    );
    assert_eq!(topic_amount(burns[0], VALUE_TOPIC), RustBigUint::from(40u64));
    assert_eq!(topic_amount(burns[0], BALANCE_INCREASE_TOPIC), RustBigUint::from(60u64));
    assert_eq!(
        topic_amount(burns[0], INDEX_TOPIC),
        RustBigUint::from(RAY) * 106u64 / 100u64
    );
}

#[test]
fn burn_below_interest_is_reported_as_a_mint() {
    let mut state = PoolTestState::new();

    let logs = state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .returns(ReturnsLogs)
        .whitebox(maria_pool::contract_obj, |sc| {
            let asset = EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier());
            let user = SUPPLIER_ADDRESS.to_managed_address();

            sc.mint_scaled(
                ScaledTokenKind::Supply,
                &asset,
                &user,
                &user,
                &BigUint::from(1_000u64),
                &BigUint::from(RAY),
            );

            let index = BigUint::from(RAY) * 106u64 / 100u64;
            let increase = sc.burn_scaled(
                ScaledTokenKind::Supply,
                &asset,
                &user,
                &user,
                &BigUint::from(30u64),
                &index,
            );

            assert_eq!(
                sc.net_burn_movement(&BigUint::from(30u64), &increase),
                (true, BigUint::from(30u64))
            );
            assert_eq!(
                sc.balance_of_at(ScaledTokenKind::Supply, &asset, &user, &index),
                BigUint::from(1_030u64)
            );
        });

    assert!(events(&logs, "burn").is_empty());

    // The deposit, then the net growth of the partial withdrawal.
    let mints = events(&logs, "mint");
    assert_eq!(mints.len(), 2);
    assert_eq!(topic_amount(mints[1], VALUE_TOPIC), RustBigUint::from(30u64));
    assert_eq!(topic_amount(mints[1], BALANCE_INCREASE_TOPIC), RustBigUint::from(60u64));
    assert_eq!(
        mints[1].topics[TARGET_TOPIC],
        SUPPLIER_ADDRESS.to_address().as_bytes()
    );
}

#[test]
fn debt_and_supply_ledgers_are_separate() {
    let mut state = PoolTestState::new();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .whitebox(maria_pool::contract_obj, |sc| {
            let asset = EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier());
            let user = BORROWER_ADDRESS.to_managed_address();
            let index = BigUint::from(RAY);

            sc.mint_scaled(
                ScaledTokenKind::VariableDebt,
                &asset,
                &user,
                &user,
                &BigUint::from(500u64),
                &index,
            );

            assert_eq!(
                sc.scaled_balance_of(ScaledTokenKind::VariableDebt, &asset, &user),
                BigUint::from(500u64)
            );
            assert_eq!(
                sc.scaled_balance_of(ScaledTokenKind::Supply, &asset, &user),
                BigUint::zero()
            );
            assert_eq!(
                sc.scaled_total_supply(ScaledTokenKind::Supply, &asset).get(),
                BigUint::zero()
            );
        });
}

#[test]
fn transfer_realises_interest_on_both_sides() {
    let mut state = PoolTestState::new();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .whitebox(maria_pool::contract_obj, |sc| {
            let asset = EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier());
            let sender = SUPPLIER_ADDRESS.to_managed_address();
            let recipient = RECEIVER_ADDRESS.to_managed_address();
            let ray = BigUint::from(RAY);

            sc.mint_scaled(
                ScaledTokenKind::Supply,
                &asset,
                &sender,
                &sender,
                &BigUint::from(1_000u64),
                &ray,
            );
            sc.mint_scaled(
                ScaledTokenKind::Supply,
                &asset,
                &recipient,
                &recipient,
                &BigUint::from(500u64),
                &ray,
            );

            let index = BigUint::from(RAY) * 110u64 / 100u64;
            sc.transfer_scaled(&asset, &sender, &recipient, &BigUint::from(200u64), &index);

            // round(200 / 1.1) = 182 scaled units move.
            let sender_balance = sc.get_scaled_balance(ScaledTokenKind::Supply, &asset, &sender);
            let recipient_balance =
                sc.get_scaled_balance(ScaledTokenKind::Supply, &asset, &recipient);
            assert_eq!(sender_balance.scaled_amount, BigUint::from(818u64));
            assert_eq!(recipient_balance.scaled_amount, BigUint::from(682u64));
            assert_eq!(sender_balance.last_index, index);
            assert_eq!(recipient_balance.last_index, index);
            assert_eq!(
                sc.scaled_total_supply(ScaledTokenKind::Supply, &asset).get(),
                BigUint::from(1_500u64)
            );
        });
}

#[test]
fn transfer_to_self_only_moves_the_index() {
    let mut state = PoolTestState::new();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .whitebox(maria_pool::contract_obj, |sc| {
            let asset = EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier());
            let user = SUPPLIER_ADDRESS.to_managed_address();

            sc.mint_scaled(
                ScaledTokenKind::Supply,
                &asset,
                &user,
                &user,
                &BigUint::from(1_000u64),
                &BigUint::from(RAY),
            );

            let index = BigUint::from(RAY) * 2u64;
            sc.transfer_scaled(&asset, &user, &user, &BigUint::from(400u64), &index);

            let balance = sc.get_scaled_balance(ScaledTokenKind::Supply, &asset, &user);
            assert_eq!(balance.scaled_amount, BigUint::from(1_000u64));
            assert_eq!(balance.last_index, index);
        });
}

#[test]
fn stable_mints_average_the_rate() {
    let mut state = PoolTestState::new();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .whitebox(maria_pool::contract_obj, |sc| {
            let asset = EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier());
            let user = BORROWER_ADDRESS.to_managed_address();
            let amount = BigUint::from(1_000_000_000u64);
            let ten_percent = BigUint::from(RAY) / 10u64;
            let twenty_percent = BigUint::from(RAY) / 5u64;

            let (is_first, total, average_rate) =
                sc.mint_stable(&asset, &user, &user, &amount, &ten_percent);
            assert!(is_first);
            assert_eq!(total, amount);
            assert_eq!(average_rate, ten_percent);

            let (is_first, total, average_rate) =
                sc.mint_stable(&asset, &user, &user, &amount, &twenty_percent);
            assert!(!is_first);
            assert_eq!(total, BigUint::from(2_000_000_000u64));
            let fifteen_percent = BigUint::from(RAY) * 15u64 / 100u64;
            assert_eq!(average_rate, fifteen_percent);

            let position = sc.get_stable_position(&asset, &user);
            assert_eq!(position.principal, BigUint::from(2_000_000_000u64));
            assert_eq!(position.stable_rate, fifteen_percent);
            assert_eq!(position.last_update_timestamp, START_TIMESTAMP);
        });
}

#[test]
fn stable_debt_compounds_and_burns_to_zero() {
    let mut state = PoolTestState::new();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .whitebox(maria_pool::contract_obj, |sc| {
            let asset = EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier());
            let user = BORROWER_ADDRESS.to_managed_address();
            let fifteen_percent = BigUint::from(RAY) * 15u64 / 100u64;

            sc.mint_stable(
                &asset,
                &user,
                &user,
                &BigUint::from(2_000_000_000u64),
                &fifteen_percent,
            );
        });

    state.set_timestamp(START_TIMESTAMP + SECONDS_PER_YEAR);

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(POOL_ADDRESS)
        .whitebox(maria_pool::contract_obj, |sc| {
            let asset = EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier());
            let user = BORROWER_ADDRESS.to_managed_address();

            // Three term expansion of e^0.15 on 2000.
            let balance = sc.stable_balance_of(&asset, &user);
            assert!(balance > BigUint::from(2_323_000_000u64));
            assert!(balance < BigUint::from(2_324_000_000u64));
            assert_eq!(sc.stable_total_supply(&asset), balance);

            let (total, average_rate) = sc.burn_stable(&asset, &user, &balance);
            assert_eq!(total, BigUint::zero());
            assert_eq!(average_rate, BigUint::zero());

            let position = sc.get_stable_position(&asset, &user);
            assert_eq!(position.principal, BigUint::zero());
            assert_eq!(position.stable_rate, BigUint::zero());
            assert_eq!(position.last_update_timestamp, 0);
            assert_eq!(sc.stable_balance_of(&asset, &user), BigUint::zero());
        });
}
