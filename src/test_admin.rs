#![cfg(test)]
use soroban_sdk::{
    symbol_short, testutils::Address as _, vec, xdr::FromXdr, Address, Bytes, Env, IntoVal,
    String,
};

use crate::test::{
    balance, create_token, last_event, mint, setup, COOLDOWN, PAYOUT, TEST_CHAIN_ID,
};
use crate::test_cross_contract::MockVesting;
use crate::{FaucetError, CONTRACT_VERSION, DENIED_CHAIN_IDS, MAX_CLAIM_THRESHOLD};

// ── payout amount ─────────────────────────────────────────────

#[test]
fn update_payout_amount_emits_old_and_new() {
    let s = setup();
    s.client.update_payout_amount(&s.owner, &500);

    assert_eq!(s.client.get_payout_amount(), 500);
    assert_eq!(
        last_event(&s.env),
        vec![
            &s.env,
            (
                s.contract_id.clone(),
                vec![&s.env, symbol_short!("pay_upd").into_val(&s.env)],
                (PAYOUT, 500i128).into_val(&s.env)
            )
        ]
    );
}

#[test]
fn update_payout_amount_accepts_max_threshold() {
    let s = setup();
    s.client.update_payout_amount(&s.owner, &MAX_CLAIM_THRESHOLD);
    assert_eq!(s.client.get_payout_amount(), MAX_CLAIM_THRESHOLD);
}

#[test]
fn update_payout_amount_rejects_above_max_threshold() {
    let s = setup();
    assert_eq!(
        s.client
            .try_update_payout_amount(&s.owner, &(MAX_CLAIM_THRESHOLD + 1)),
        Err(Ok(FaucetError::OutOfCapacity))
    );
    assert_eq!(s.client.get_payout_amount(), PAYOUT);
}

#[test]
fn update_payout_amount_rejects_zero_and_negative() {
    let s = setup();
    assert_eq!(
        s.client.try_update_payout_amount(&s.owner, &0),
        Err(Ok(FaucetError::ZeroAmount))
    );
    assert_eq!(
        s.client.try_update_payout_amount(&s.owner, &-1),
        Err(Ok(FaucetError::ZeroAmount))
    );
}

#[test]
fn update_payout_amount_unchanged_fails() {
    let s = setup();
    assert_eq!(
        s.client.try_update_payout_amount(&s.owner, &PAYOUT),
        Err(Ok(FaucetError::PayoutAmountUnchanged))
    );
}

// ── cooldown period ───────────────────────────────────────────

#[test]
fn update_cooldown_period_boundary() {
    let s = setup();
    assert_eq!(
        s.client.try_update_cooldown_period(&s.owner, &59),
        Err(Ok(FaucetError::InvalidCooldown))
    );
    s.client.update_cooldown_period(&s.owner, &60);

    assert_eq!(s.client.get_cooldown_period(), 60);
    assert_eq!(
        last_event(&s.env),
        vec![
            &s.env,
            (
                s.contract_id.clone(),
                vec![&s.env, symbol_short!("cd_upd").into_val(&s.env)],
                (COOLDOWN, 60u64).into_val(&s.env)
            )
        ]
    );
}

#[test]
fn update_cooldown_period_unchanged_fails() {
    let s = setup();
    assert_eq!(
        s.client.try_update_cooldown_period(&s.owner, &COOLDOWN),
        Err(Ok(FaucetError::CooldownPeriodUnchanged))
    );
}

// ── chain id ──────────────────────────────────────────────────

#[test]
fn update_chain_id_rejects_ethereum_mainnet() {
    let s = setup();
    assert_eq!(
        s.client.try_update_chain_id(&s.owner, &1),
        Err(Ok(FaucetError::MainnetIdDenied))
    );
    assert_eq!(s.client.get_allowed_chain_id(), 0);
}

#[test]
fn update_chain_id_rejects_every_denied_id() {
    let s = setup();
    for chain_id in DENIED_CHAIN_IDS {
        assert_eq!(
            s.client.try_update_chain_id(&s.owner, &chain_id),
            Err(Ok(FaucetError::MainnetIdDenied))
        );
    }
}

#[test]
fn update_chain_id_accepts_test_network() {
    let s = setup();
    s.client.update_chain_id(&s.owner, &TEST_CHAIN_ID);

    assert_eq!(s.client.get_allowed_chain_id(), TEST_CHAIN_ID);
    assert_eq!(
        last_event(&s.env),
        vec![
            &s.env,
            (
                s.contract_id.clone(),
                vec![&s.env, symbol_short!("chain_upd").into_val(&s.env)],
                (0u64, TEST_CHAIN_ID).into_val(&s.env)
            )
        ]
    );
}

#[test]
fn update_chain_id_unchanged_and_zero_fail() {
    let s = setup();
    s.client.update_chain_id(&s.owner, &TEST_CHAIN_ID);
    assert_eq!(
        s.client.try_update_chain_id(&s.owner, &TEST_CHAIN_ID),
        Err(Ok(FaucetError::ChainIdUnchanged))
    );
    assert_eq!(
        s.client.try_update_chain_id(&s.owner, &0),
        Err(Ok(FaucetError::MainnetIdDenied))
    );
    assert_eq!(s.client.get_allowed_chain_id(), TEST_CHAIN_ID);
}

// ── vesting contract ──────────────────────────────────────────

#[test]
fn update_vesting_claim_contract_sets_and_emits() {
    let s = setup();
    let vesting = s.env.register_contract(None, MockVesting);
    s.client.update_vesting_claim_contract(&s.owner, &vesting);

    assert_eq!(s.client.get_vesting_contract(), Some(vesting.clone()));
    assert_eq!(
        last_event(&s.env),
        vec![
            &s.env,
            (
                s.contract_id.clone(),
                vec![&s.env, symbol_short!("vest_upd").into_val(&s.env)],
                (None::<Address>, vesting).into_val(&s.env)
            )
        ]
    );
}

#[test]
fn update_vesting_claim_contract_rejects_self() {
    let s = setup();
    assert_eq!(
        s.client
            .try_update_vesting_claim_contract(&s.owner, &s.contract_id),
        Err(Ok(FaucetError::InvalidContractInteraction))
    );
    assert_eq!(s.client.get_vesting_contract(), None);
}

/// `ScVal::Address(ScAddress::Account(ed25519 key))` in XDR form.
fn account_address(env: &Env, key_byte: u8) -> Address {
    let mut xdr = [0u8; 44];
    xdr[3] = 18; // ScValType::Address
    // ScAddressType::Account and PublicKeyType::Ed25519 are both 0.
    xdr[12..].fill(key_byte);
    Address::from_xdr(env, &Bytes::from_array(env, &xdr)).unwrap()
}

#[test]
fn update_vesting_claim_contract_rejects_account_address() {
    let s = setup();
    let account = account_address(&s.env, 7);

    assert_eq!(
        s.client.try_update_vesting_claim_contract(&s.owner, &account),
        Err(Ok(FaucetError::InvalidContractInteraction))
    );
    assert_eq!(s.client.get_vesting_contract(), None);
}

#[test]
fn undeployed_vesting_contract_is_accepted_but_cannot_release() {
    let s = setup();
    mint(&s.env, &s.base_asset, &s.contract_id, 1_000);
    // Contract-kind id with no instance on the ledger.
    let undeployed = Address::generate(&s.env);

    s.client.update_vesting_claim_contract(&s.owner, &undeployed);
    assert_eq!(s.client.get_vesting_contract(), Some(undeployed));

    assert!(s
        .client
        .try_claim_vested_tokens(&s.owner, &String::from_str(&s.env, "team"))
        .is_err());
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), 1_000);
}

#[test]
fn update_vesting_claim_contract_unchanged_fails() {
    let s = setup();
    let vesting = s.env.register_contract(None, MockVesting);
    s.client.update_vesting_claim_contract(&s.owner, &vesting);
    assert_eq!(
        s.client.try_update_vesting_claim_contract(&s.owner, &vesting),
        Err(Ok(FaucetError::VestingContractUnchanged))
    );
}

#[test]
fn update_vesting_claim_contract_disabled_while_paused() {
    let s = setup();
    let vesting = s.env.register_contract(None, MockVesting);
    s.client.pause(&s.owner);
    assert_eq!(
        s.client.try_update_vesting_claim_contract(&s.owner, &vesting),
        Err(Ok(FaucetError::SystemPaused))
    );
}

// ── shared setter rules ───────────────────────────────────────

#[test]
fn setters_with_current_values_leave_state_untouched() {
    let s = setup();
    let vesting = s.env.register_contract(None, MockVesting);
    s.client.update_chain_id(&s.owner, &TEST_CHAIN_ID);
    s.client.update_vesting_claim_contract(&s.owner, &vesting);
    let before = s.client.get_config();

    assert!(s.client.try_update_payout_amount(&s.owner, &PAYOUT).is_err());
    assert!(s
        .client
        .try_update_cooldown_period(&s.owner, &COOLDOWN)
        .is_err());
    assert!(s.client.try_update_chain_id(&s.owner, &TEST_CHAIN_ID).is_err());
    assert!(s
        .client
        .try_update_vesting_claim_contract(&s.owner, &vesting)
        .is_err());

    assert_eq!(s.client.get_config(), before);
}

#[test]
fn parameter_setters_work_while_paused() {
    let s = setup();
    s.client.pause(&s.owner);

    s.client.update_payout_amount(&s.owner, &300);
    s.client.update_cooldown_period(&s.owner, &120);
    s.client.update_chain_id(&s.owner, &TEST_CHAIN_ID);

    let config = s.client.get_config();
    assert_eq!(config.payout_amount, 300);
    assert_eq!(config.cooldown_period, 120);
    assert_eq!(config.allowed_chain_id, TEST_CHAIN_ID);
    assert!(config.paused);
}

#[test]
fn setters_reject_non_owner() {
    let s = setup();
    let attacker = Address::generate(&s.env);
    let vesting = s.env.register_contract(None, MockVesting);

    assert_eq!(
        s.client.try_update_payout_amount(&attacker, &500),
        Err(Ok(FaucetError::NotOwner))
    );
    assert_eq!(
        s.client.try_update_cooldown_period(&attacker, &120),
        Err(Ok(FaucetError::NotOwner))
    );
    assert_eq!(
        s.client.try_update_chain_id(&attacker, &TEST_CHAIN_ID),
        Err(Ok(FaucetError::NotOwner))
    );
    assert_eq!(
        s.client.try_update_vesting_claim_contract(&attacker, &vesting),
        Err(Ok(FaucetError::NotOwner))
    );
    assert_eq!(s.client.get_payout_amount(), PAYOUT);
}

#[test]
#[should_panic]
fn update_payout_amount_requires_owner_signature() {
    let s = setup();
    s.env.set_auths(&[]);
    s.client.update_payout_amount(&s.owner, &500);
}

// ── pause ─────────────────────────────────────────────────────

#[test]
fn pause_and_unpause_toggle() {
    let s = setup();
    s.client.pause(&s.owner);
    assert!(s.client.is_paused());
    assert_eq!(s.client.try_pause(&s.owner), Err(Ok(FaucetError::AlreadyPaused)));

    s.client.unpause(&s.owner);
    assert!(!s.client.is_paused());
    assert_eq!(s.client.try_unpause(&s.owner), Err(Ok(FaucetError::NotPaused)));
}

#[test]
fn pause_unauthorized() {
    let s = setup();
    let attacker = Address::generate(&s.env);
    assert_eq!(s.client.try_pause(&attacker), Err(Ok(FaucetError::NotOwner)));
    assert!(!s.client.is_paused());

    s.client.pause(&s.owner);
    assert_eq!(s.client.try_unpause(&attacker), Err(Ok(FaucetError::NotOwner)));
    assert!(s.client.is_paused());
}

// ── rescue / withdraw ─────────────────────────────────────────

#[test]
fn rescue_tokens_moves_base_asset_out() {
    let s = setup();
    let treasury = Address::generate(&s.env);
    mint(&s.env, &s.base_asset, &s.contract_id, 1_000);

    s.client
        .rescue_tokens(&s.owner, &s.base_asset, &treasury, &400);

    assert_eq!(balance(&s.env, &s.base_asset, &treasury), 400);
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), 600);
}

#[test]
fn rescue_tokens_moves_foreign_token_out() {
    let s = setup();
    let stray = create_token(&s.env);
    let treasury = Address::generate(&s.env);
    mint(&s.env, &stray, &s.contract_id, 50);

    s.client.rescue_tokens(&s.owner, &stray, &treasury, &50);

    assert_eq!(balance(&s.env, &stray, &treasury), 50);
    assert_eq!(
        last_event(&s.env),
        vec![
            &s.env,
            (
                s.contract_id.clone(),
                (symbol_short!("rescued"), stray.clone()).into_val(&s.env),
                (treasury, 50i128).into_val(&s.env)
            )
        ]
    );
}

#[test]
fn rescue_tokens_validates_inputs() {
    let s = setup();
    let treasury = Address::generate(&s.env);
    let attacker = Address::generate(&s.env);
    mint(&s.env, &s.base_asset, &s.contract_id, 1_000);

    assert_eq!(
        s.client
            .try_rescue_tokens(&s.owner, &s.base_asset, &treasury, &0),
        Err(Ok(FaucetError::ZeroAmount))
    );
    assert_eq!(
        s.client
            .try_rescue_tokens(&s.owner, &s.base_asset, &s.contract_id, &10),
        Err(Ok(FaucetError::InvalidAddress))
    );
    assert_eq!(
        s.client
            .try_rescue_tokens(&attacker, &s.base_asset, &attacker, &10),
        Err(Ok(FaucetError::NotOwner))
    );
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), 1_000);
}

#[test]
fn withdraw_sends_native_balance() {
    let s = setup();
    let destination = Address::generate(&s.env);
    mint(&s.env, &s.native_asset, &s.contract_id, 7_500);

    s.client.withdraw(&s.owner, &destination);

    assert_eq!(balance(&s.env, &s.native_asset, &destination), 7_500);
    assert_eq!(balance(&s.env, &s.native_asset, &s.contract_id), 0);
    assert_eq!(
        last_event(&s.env),
        vec![
            &s.env,
            (
                s.contract_id.clone(),
                (symbol_short!("withdraw"), s.owner.clone()).into_val(&s.env),
                (destination, 7_500i128).into_val(&s.env)
            )
        ]
    );
}

#[test]
fn withdraw_with_empty_balance_fails() {
    let s = setup();
    let destination = Address::generate(&s.env);
    assert_eq!(
        s.client.try_withdraw(&s.owner, &destination),
        Err(Ok(FaucetError::ZeroAmount))
    );
}

// ── ownership ─────────────────────────────────────────────────

#[test]
fn transfer_ownership_moves_capability() {
    let s = setup();
    let new_owner = Address::generate(&s.env);
    s.client.transfer_ownership(&s.owner, &new_owner);

    assert_eq!(s.client.get_owner(), Some(new_owner.clone()));
    assert_eq!(
        s.client.try_update_payout_amount(&s.owner, &500),
        Err(Ok(FaucetError::NotOwner))
    );
    s.client.update_payout_amount(&new_owner, &500);
    assert_eq!(s.client.get_payout_amount(), 500);
}

#[test]
fn transfer_ownership_rejects_self_targets() {
    let s = setup();
    assert_eq!(
        s.client.try_transfer_ownership(&s.owner, &s.owner),
        Err(Ok(FaucetError::InvalidAddress))
    );
    assert_eq!(
        s.client.try_transfer_ownership(&s.owner, &s.contract_id),
        Err(Ok(FaucetError::InvalidAddress))
    );
}

#[test]
fn version_is_reported() {
    let s = setup();
    assert_eq!(s.client.get_version(), CONTRACT_VERSION);
}
