#![cfg(test)]
//! Faucet interaction with external contracts: the vesting delegate and a
//! hostile base-asset token that re-enters the faucet mid-transfer.
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, testutils::Address as _, vec, Address,
    Env, IntoVal, String,
};

use crate::test::{
    balance, create_token, last_event, mint, ready, set_chain_id, set_time, setup, COOLDOWN,
    PAYOUT, START_TIME, TEST_CHAIN_ID, Setup,
};
use crate::{FaucetError, TokenFaucet, TokenFaucetClient};

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Asset,
    Release,
    LastTemplate,
    Faucet,
    Requester,
    ReentryBlocked,
    Transfers,
}

// ── mock vesting delegate ─────────────────────────────────────

/// Releases a fixed amount of `Asset` from its own balance to the beneficiary.
/// Optionally tries to claim from the faucet while doing so.
#[contract]
pub struct MockVesting;

#[contractimpl]
impl MockVesting {
    pub fn set_release(env: Env, asset: Address, release: i128) {
        env.storage().instance().set(&MockKey::Asset, &asset);
        env.storage().instance().set(&MockKey::Release, &release);
    }

    pub fn set_reentry(env: Env, faucet: Address, requester: Address) {
        env.storage().instance().set(&MockKey::Faucet, &faucet);
        env.storage().instance().set(&MockKey::Requester, &requester);
    }

    pub fn claim_tokens_for_beneficiary(env: Env, template_name: String, beneficiary: Address) {
        env.storage()
            .instance()
            .set(&MockKey::LastTemplate, &template_name);

        if let Some(faucet) = env.storage().instance().get::<_, Address>(&MockKey::Faucet) {
            let requester: Address = env.storage().instance().get(&MockKey::Requester).unwrap();
            let reentry = TokenFaucetClient::new(&env, &faucet).try_claim(&requester);
            env.storage()
                .instance()
                .set(&MockKey::ReentryBlocked, &reentry.is_err());
        }

        let release: i128 = env
            .storage()
            .instance()
            .get(&MockKey::Release)
            .unwrap_or(0);
        if release > 0 {
            let asset: Address = env.storage().instance().get(&MockKey::Asset).unwrap();
            soroban_sdk::token::Client::new(&env, &asset).transfer(
                &env.current_contract_address(),
                &beneficiary,
                &release,
            );
        }
    }

    pub fn last_template(env: Env) -> Option<String> {
        env.storage().instance().get(&MockKey::LastTemplate)
    }

    pub fn vesting_reentry_blocked(env: Env) -> Option<bool> {
        env.storage().instance().get(&MockKey::ReentryBlocked)
    }
}

// ── hostile token ─────────────────────────────────────────────

/// Token-shaped contract that calls back into the faucet's `claim` from
/// inside `transfer`.
#[contract]
pub struct ReentrantToken;

#[contractimpl]
impl ReentrantToken {
    pub fn set_target(env: Env, faucet: Address) {
        env.storage().instance().set(&MockKey::Faucet, &faucet);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        let _ = (env, id);
        1_000_000
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        let _ = (from, amount);
        let faucet: Address = env.storage().instance().get(&MockKey::Faucet).unwrap();
        let reentry = TokenFaucetClient::new(&env, &faucet).try_claim(&to);
        env.storage()
            .instance()
            .set(&MockKey::ReentryBlocked, &reentry.is_err());

        let transfers: u32 = env
            .storage()
            .instance()
            .get(&MockKey::Transfers)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&MockKey::Transfers, &(transfers + 1));
    }

    pub fn reentry_blocked(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&MockKey::ReentryBlocked)
            .unwrap_or(false)
    }

    pub fn transfers(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&MockKey::Transfers)
            .unwrap_or(0)
    }
}

/// Vesting mock holding `funded` base asset and releasing `release` per call.
fn vesting_for(
    s: &Setup,
    funded: i128,
    release: i128,
) -> (Address, MockVestingClient<'static>) {
    let vesting_id = s.env.register_contract(None, MockVesting);
    let vesting = MockVestingClient::new(&s.env, &vesting_id);
    vesting.set_release(&s.base_asset, &release);
    if funded > 0 {
        mint(&s.env, &s.base_asset, &vesting_id, funded);
    }
    s.client.update_vesting_claim_contract(&s.owner, &vesting_id);
    (vesting_id, vesting)
}

// ── reentrancy ────────────────────────────────────────────────

/// The nested `claim` is refused by the host's contract re-entry guard before
/// the faucet's `Locked` flag is read; `claim_while_locked_fails` covers the
/// flag itself.
#[test]
fn host_rejects_token_reentering_claim() {
    let env = Env::default();
    env.mock_all_auths();
    set_chain_id(&env, TEST_CHAIN_ID);
    set_time(&env, START_TIME);

    let faucet_id = env.register_contract(None, TokenFaucet);
    let faucet = TokenFaucetClient::new(&env, &faucet_id);
    let token_id = env.register_contract(None, ReentrantToken);
    let hostile = ReentrantTokenClient::new(&env, &token_id);
    hostile.set_target(&faucet_id);

    let owner = Address::generate(&env);
    let native = create_token(&env);
    faucet.initialize(&owner, &token_id, &native, &PAYOUT, &COOLDOWN);
    faucet.update_chain_id(&owner, &TEST_CHAIN_ID);
    let vesting = env.register_contract(None, MockVesting);
    faucet.update_vesting_claim_contract(&owner, &vesting);

    let user = Address::generate(&env);
    faucet.claim(&user);

    assert!(hostile.reentry_blocked());
    assert_eq!(hostile.transfers(), 1);
    assert_eq!(faucet.get_total_distributed(), PAYOUT);
    assert_eq!(faucet.get_last_claim_time(&user), START_TIME);

    // The committed claim still gates the next attempt.
    assert_eq!(
        faucet.try_claim(&user),
        Err(Ok(FaucetError::CooldownNotElapsed))
    );
}

/// Same host-level re-entry refusal, from inside the vesting delegate call.
#[test]
fn host_rejects_vesting_delegate_reentering_claim() {
    let s = ready(1_000);
    let (_, vesting) = vesting_for(&s, 500, 100);
    let user = Address::generate(&s.env);
    vesting.set_reentry(&s.contract_id, &user);

    s.client
        .claim_vested_tokens(&s.owner, &String::from_str(&s.env, "team"));

    assert_eq!(vesting.vesting_reentry_blocked(), Some(true));
    assert_eq!(s.client.get_last_claim_time(&user), 0);
    assert_eq!(s.client.get_total_distributed(), 0);
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), 1_100);
}

// ── vesting bridge ────────────────────────────────────────────

#[test]
fn claim_vested_tokens_pulls_balance_in() {
    let s = setup();
    let (vesting_id, vesting) = vesting_for(&s, 1_000, 300);

    s.client
        .claim_vested_tokens(&s.owner, &String::from_str(&s.env, "advisors"));

    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), 300);
    assert_eq!(balance(&s.env, &s.base_asset, &vesting_id), 700);
    assert_eq!(
        vesting.last_template(),
        Some(String::from_str(&s.env, "advisors"))
    );
    assert_eq!(
        last_event(&s.env),
        vec![
            &s.env,
            (
                s.contract_id.clone(),
                vec![&s.env, symbol_short!("vest_clm").into_val(&s.env)],
                (0i128, 300i128).into_val(&s.env)
            )
        ]
    );
}

#[test]
fn vested_tokens_fund_subsequent_claims() {
    let s = setup();
    s.client.update_chain_id(&s.owner, &TEST_CHAIN_ID);
    vesting_for(&s, 1_000, 400);
    let user = Address::generate(&s.env);

    assert_eq!(
        s.client.try_claim(&user),
        Err(Ok(FaucetError::InsufficientCapacity))
    );
    s.client
        .claim_vested_tokens(&s.owner, &String::from_str(&s.env, "faucet"));
    s.client.claim(&user);

    assert_eq!(balance(&s.env, &s.base_asset, &user), PAYOUT);
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), 400 - PAYOUT);
}

#[test]
fn claim_vested_tokens_without_increase_fails() {
    let s = setup();
    let (_, vesting) = vesting_for(&s, 1_000, 0);

    assert_eq!(
        s.client
            .try_claim_vested_tokens(&s.owner, &String::from_str(&s.env, "team")),
        Err(Ok(FaucetError::NoVestingTokensClaimed))
    );
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), 0);
    // Rolled back along with the failed invocation.
    assert_eq!(vesting.last_template(), None);
}

#[test]
fn claim_vested_tokens_requires_vesting_contract() {
    let s = setup();
    assert_eq!(
        s.client
            .try_claim_vested_tokens(&s.owner, &String::from_str(&s.env, "team")),
        Err(Ok(FaucetError::VestingContractUnset))
    );
}

#[test]
fn claim_vested_tokens_is_owner_only() {
    let s = setup();
    vesting_for(&s, 1_000, 300);
    let attacker = Address::generate(&s.env);

    assert_eq!(
        s.client
            .try_claim_vested_tokens(&attacker, &String::from_str(&s.env, "team")),
        Err(Ok(FaucetError::NotOwner))
    );
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), 0);
}

#[test]
fn claim_vested_tokens_disabled_while_paused() {
    let s = setup();
    vesting_for(&s, 1_000, 300);
    s.client.pause(&s.owner);

    assert_eq!(
        s.client
            .try_claim_vested_tokens(&s.owner, &String::from_str(&s.env, "team")),
        Err(Ok(FaucetError::SystemPaused))
    );
}
