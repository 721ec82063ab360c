use dlgte::{
    ERROR_EXCEEDED_POLICY_ACCOUNT_BALANCE, ERROR_EXCEEDED_UNDELEGATED_BALANCE,
    ERROR_INVALID_ADDRESS, ERROR_POLICY_NOT_PERMITTED,
};
use multiversx_sc::types::ManagedAddress;

pub mod setup;
use constants::*;
use setup::*;

#[test]
fn deposit_credits_policy_ledger_and_account_total() {
    let mut state = DlgteTestState::new();

    state.deposit(POLICY_ADDRESS, ALICE_ADDRESS, tokens(100));

    assert_eq!(
        state.policy_account_balance(POLICY_ADDRESS, ALICE_ADDRESS),
        tokens(100)
    );
    let summary = state.summary(ALICE_ADDRESS);
    assert_eq!(summary.total_collateral, tokens(100));
    assert_eq!(summary.delegated_collateral, tokens(0));
    assert_eq!(summary.num_delegate_addresses, 0);
    assert_eq!(summary.max_delegate_addresses, 10);

    state
        .world
        .check_account(&state.dlgte_sc)
        .esdt_balance(GOHM_TOKEN, tokens(100));
}

#[test]
fn deposit_from_unknown_policy_fails() {
    let mut state = DlgteTestState::new();

    state.deposit_error(
        STRANGER_ADDRESS,
        &ALICE_ADDRESS.to_managed_address(),
        tokens(1),
        ERROR_POLICY_NOT_PERMITTED,
    );
}

#[test]
fn deposit_for_zero_address_fails() {
    let mut state = DlgteTestState::new();

    state.deposit_error(
        POLICY_ADDRESS,
        &ManagedAddress::zero(),
        tokens(1),
        ERROR_INVALID_ADDRESS,
    );
}

#[test]
fn withdraw_returns_collateral_to_the_policy() {
    let mut state = DlgteTestState::new();

    state.deposit(POLICY_ADDRESS, ALICE_ADDRESS, tokens(100));
    state.withdraw(POLICY_ADDRESS, ALICE_ADDRESS, tokens(40), false);

    assert_eq!(
        state.policy_account_balance(POLICY_ADDRESS, ALICE_ADDRESS),
        tokens(60)
    );
    assert_eq!(state.summary(ALICE_ADDRESS).total_collateral, tokens(60));
    state
        .world
        .check_account(POLICY_ADDRESS)
        .esdt_balance(GOHM_TOKEN, tokens(INITIAL_BALANCE - 60));
}

#[test]
fn policy_cannot_withdraw_collateral_another_policy_deposited() {
    let mut state = DlgteTestState::new();

    state.deposit(POLICY_ADDRESS, ALICE_ADDRESS, tokens(10));
    state.deposit(SECOND_POLICY_ADDRESS, ALICE_ADDRESS, tokens(5));

    state.withdraw_error(
        SECOND_POLICY_ADDRESS,
        ALICE_ADDRESS,
        tokens(6),
        false,
        ERROR_EXCEEDED_POLICY_ACCOUNT_BALANCE,
    );

    state.withdraw(SECOND_POLICY_ADDRESS, ALICE_ADDRESS, tokens(5), false);
    assert_eq!(
        state.policy_account_balance(SECOND_POLICY_ADDRESS, ALICE_ADDRESS),
        tokens(0)
    );
    assert_eq!(state.summary(ALICE_ADDRESS).total_collateral, tokens(10));
}

#[test]
fn withdraw_of_delegated_collateral_needs_auto_rescind() {
    let mut state = DlgteTestState::new();

    state.deposit(POLICY_ADDRESS, ALICE_ADDRESS, tokens(100));
    state.apply_delegations(
        POLICY_ADDRESS,
        ALICE_ADDRESS,
        requests(vec![
            delegate_request(DELEGATE_1, tokens(50)),
            delegate_request(DELEGATE_2, tokens(30)),
        ]),
    );

    state.withdraw_error(
        POLICY_ADDRESS,
        ALICE_ADDRESS,
        tokens(40),
        false,
        ERROR_EXCEEDED_UNDELEGATED_BALANCE,
    );

    // 20 undelegated, 20 more recalled from the first delegate
    state.withdraw(POLICY_ADDRESS, ALICE_ADDRESS, tokens(40), true);

    let summary = state.summary(ALICE_ADDRESS);
    assert_eq!(summary.total_collateral, tokens(60));
    assert_eq!(summary.delegated_collateral, tokens(60));
    assert_eq!(state.total_delegated_to(DELEGATE_1), tokens(30));
    assert_eq!(state.total_delegated_to(DELEGATE_2), tokens(30));
}

#[test]
fn withdraw_everything_rescinds_all_delegates_in_order() {
    let mut state = DlgteTestState::new();

    state.deposit(POLICY_ADDRESS, ALICE_ADDRESS, tokens(100));
    state.apply_delegations(
        POLICY_ADDRESS,
        ALICE_ADDRESS,
        requests(vec![
            delegate_request(DELEGATE_1, tokens(60)),
            delegate_request(DELEGATE_2, tokens(40)),
        ]),
    );

    state.withdraw(POLICY_ADDRESS, ALICE_ADDRESS, tokens(100), true);

    let summary = state.summary(ALICE_ADDRESS);
    assert_eq!(summary.total_collateral, tokens(0));
    assert_eq!(summary.delegated_collateral, tokens(0));
    assert_eq!(summary.num_delegate_addresses, 0);
    assert!(state.delegations_list(ALICE_ADDRESS, 0, 10).is_empty());
}
