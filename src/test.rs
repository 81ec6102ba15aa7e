#![cfg(test)]
use arbitrary::Unstructured;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events as _, Ledger as _},
    token, vec, Address, Env, IntoVal, Val, Vec,
};

use crate::test_cross_contract::MockVesting;
use crate::{
    cooldown_elapsed, validate_chain_id, validate_cooldown_period, validate_payout_amount,
    DataKey, FaucetError, TokenFaucet, TokenFaucetClient, MAX_CLAIM_THRESHOLD,
    MIN_COOLDOWN_THRESHOLD,
};

// ── helpers ───────────────────────────────────────────────────

pub(crate) const TEST_CHAIN_ID: u64 = 99_999;
pub(crate) const PAYOUT: i128 = 200;
pub(crate) const COOLDOWN: u64 = 3_600;
pub(crate) const START_TIME: u64 = 1_700_000_000;

/// Network id whose leading eight bytes encode `chain_id`.
pub(crate) fn set_chain_id(env: &Env, chain_id: u64) {
    let mut network_id = [0u8; 32];
    network_id[..8].copy_from_slice(&chain_id.to_be_bytes());
    env.ledger().with_mut(|li| li.network_id = network_id);
}

pub(crate) fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

/// Create a Stellar Asset Contract for testing token transfers.
pub(crate) fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract(admin)
}

pub(crate) fn mint(env: &Env, asset: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, asset).mint(to, &amount);
}

pub(crate) fn balance(env: &Env, asset: &Address, who: &Address) -> i128 {
    token::Client::new(env, asset).balance(who)
}

pub(crate) fn last_event(env: &Env) -> Vec<(Address, Vec<Val>, Val)> {
    let events = env.events().all();
    events.slice(events.len() - 1..)
}

pub(crate) struct Setup {
    pub env: Env,
    pub client: TokenFaucetClient<'static>,
    pub contract_id: Address,
    pub owner: Address,
    pub base_asset: Address,
    pub native_asset: Address,
}

/// Freshly initialized faucet: payout 200, cooldown 1h, no chain id, no vesting contract.
pub(crate) fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    set_chain_id(&env, TEST_CHAIN_ID);
    set_time(&env, START_TIME);

    let contract_id = env.register_contract(None, TokenFaucet);
    let client = TokenFaucetClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let base_asset = create_token(&env);
    let native_asset = create_token(&env);
    client.initialize(&owner, &base_asset, &native_asset, &PAYOUT, &COOLDOWN);

    Setup {
        env,
        client,
        contract_id,
        owner,
        base_asset,
        native_asset,
    }
}

/// `setup()` plus allowed chain id, a vesting contract and `funding` base asset.
pub(crate) fn ready(funding: i128) -> Setup {
    let s = setup();
    let vesting = s.env.register_contract(None, MockVesting);
    s.client.update_chain_id(&s.owner, &TEST_CHAIN_ID);
    s.client.update_vesting_claim_contract(&s.owner, &vesting);
    if funding > 0 {
        mint(&s.env, &s.base_asset, &s.contract_id, funding);
    }
    s
}

// ── initialization ────────────────────────────────────────────

#[test]
fn initialize_seeds_defaults() {
    let s = setup();
    let config = s.client.get_config();

    assert_eq!(config.owner, s.owner);
    assert_eq!(config.base_asset, s.base_asset);
    assert_eq!(config.native_asset, s.native_asset);
    assert_eq!(s.client.get_vesting_contract(), None);
    assert_eq!(config.payout_amount, PAYOUT);
    assert_eq!(config.cooldown_period, COOLDOWN);
    assert_eq!(config.allowed_chain_id, 0);
    assert_eq!(config.total_distributed, 0);
    assert!(!config.paused);
}

#[test]
fn initialize_twice_fails() {
    let s = setup();
    let result = s.client.try_initialize(
        &s.owner,
        &s.base_asset,
        &s.native_asset,
        &PAYOUT,
        &COOLDOWN,
    );
    assert_eq!(result, Err(Ok(FaucetError::AlreadyInitialized)));
}

#[test]
fn initialize_rejects_out_of_bounds_parameters() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, TokenFaucet);
    let client = TokenFaucetClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let asset = create_token(&env);

    assert_eq!(
        client.try_initialize(&owner, &asset, &asset, &(MAX_CLAIM_THRESHOLD + 1), &COOLDOWN),
        Err(Ok(FaucetError::OutOfCapacity))
    );
    assert_eq!(
        client.try_initialize(&owner, &asset, &asset, &0, &COOLDOWN),
        Err(Ok(FaucetError::ZeroAmount))
    );
    assert_eq!(
        client.try_initialize(&owner, &asset, &asset, &PAYOUT, &59),
        Err(Ok(FaucetError::InvalidCooldown))
    );
    assert_eq!(client.get_owner(), None);
}

#[test]
fn entrypoints_fail_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, TokenFaucet);
    let client = TokenFaucetClient::new(&env, &contract_id);
    let caller = Address::generate(&env);

    assert_eq!(
        client.try_claim(&caller),
        Err(Ok(FaucetError::NotInitialized))
    );
    assert_eq!(
        client.try_update_payout_amount(&caller, &PAYOUT),
        Err(Ok(FaucetError::NotInitialized))
    );
    assert_eq!(client.try_get_config(), Err(Ok(FaucetError::NotInitialized)));
    assert!(!client.can_claim(&caller));
}

// ── claim eligibility ─────────────────────────────────────────

#[test]
fn first_claim_succeeds_and_pays_out() {
    let s = ready(1_000);
    let user = Address::generate(&s.env);

    assert_eq!(s.client.get_last_claim_time(&user), 0);
    assert!(s.client.can_claim(&user));
    s.client.claim(&user);

    assert_eq!(balance(&s.env, &s.base_asset, &user), PAYOUT);
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), 1_000 - PAYOUT);
    assert_eq!(s.client.get_last_claim_time(&user), START_TIME);
    assert_eq!(s.client.get_total_distributed(), PAYOUT);
}

#[test]
fn claim_emits_tokens_claimed() {
    let s = ready(1_000);
    let user = Address::generate(&s.env);

    s.client.claim(&user);

    assert_eq!(
        last_event(&s.env),
        vec![
            &s.env,
            (
                s.contract_id.clone(),
                (symbol_short!("claimed"), user.clone()).into_val(&s.env),
                PAYOUT.into_val(&s.env)
            )
        ]
    );
}

#[test]
fn total_distributed_grows_by_exactly_one_payout_per_claim() {
    let s = ready(10_000);
    let mut expected = 0;
    for _ in 0..5 {
        let user = Address::generate(&s.env);
        let before = s.client.get_total_distributed();
        s.client.claim(&user);
        expected += PAYOUT;
        assert_eq!(s.client.get_total_distributed(), before + PAYOUT);
    }
    assert_eq!(s.client.get_total_distributed(), expected);
}

#[test]
fn claim_within_cooldown_fails() {
    let s = ready(1_000);
    let user = Address::generate(&s.env);
    s.client.claim(&user);

    set_time(&s.env, START_TIME + COOLDOWN - 1);
    assert_eq!(
        s.client.try_claim(&user),
        Err(Ok(FaucetError::CooldownNotElapsed))
    );
    assert!(!s.client.can_claim(&user));
    assert_eq!(s.client.get_total_distributed(), PAYOUT);
    assert_eq!(s.client.get_last_claim_time(&user), START_TIME);
}

#[test]
fn claim_after_cooldown_succeeds() {
    let s = ready(1_000);
    let user = Address::generate(&s.env);
    s.client.claim(&user);
    assert_eq!(s.client.next_claim_time(&user), START_TIME + COOLDOWN);

    set_time(&s.env, START_TIME + COOLDOWN);
    s.client.claim(&user);

    assert_eq!(balance(&s.env, &s.base_asset, &user), 2 * PAYOUT);
    assert_eq!(s.client.get_last_claim_time(&user), START_TIME + COOLDOWN);
}

#[test]
fn cooldown_is_tracked_per_address() {
    let s = ready(1_000);
    let alice = Address::generate(&s.env);
    let bob = Address::generate(&s.env);

    s.client.claim(&alice);
    s.client.claim(&bob);

    assert!(s.client.try_claim(&alice).is_err());
    assert_eq!(s.client.get_total_distributed(), 2 * PAYOUT);
}

#[test]
fn first_claim_before_cooldown_since_epoch_fails() {
    let s = ready(1_000);
    set_time(&s.env, COOLDOWN - 1);
    let user = Address::generate(&s.env);

    assert_eq!(
        s.client.try_claim(&user),
        Err(Ok(FaucetError::CooldownNotElapsed))
    );
}

#[test]
fn claim_with_insufficient_balance_fails() {
    let s = ready(PAYOUT - 1);
    let user = Address::generate(&s.env);

    assert_eq!(
        s.client.try_claim(&user),
        Err(Ok(FaucetError::InsufficientCapacity))
    );
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), PAYOUT - 1);
    assert_eq!(s.client.get_last_claim_time(&user), 0);
}

#[test]
fn claim_drains_to_exactly_zero() {
    let s = ready(PAYOUT);
    let user = Address::generate(&s.env);
    s.client.claim(&user);
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), 0);

    let other = Address::generate(&s.env);
    assert_eq!(
        s.client.try_claim(&other),
        Err(Ok(FaucetError::InsufficientCapacity))
    );
}

#[test]
fn claim_without_chain_id_fails() {
    let s = setup();
    let vesting = s.env.register_contract(None, MockVesting);
    s.client.update_vesting_claim_contract(&s.owner, &vesting);
    mint(&s.env, &s.base_asset, &s.contract_id, 1_000);
    let user = Address::generate(&s.env);

    assert_eq!(
        s.client.try_claim(&user),
        Err(Ok(FaucetError::ChainNotAllowed))
    );
}

#[test]
fn claim_on_other_network_fails() {
    let s = ready(1_000);
    set_chain_id(&s.env, TEST_CHAIN_ID + 1);
    let user = Address::generate(&s.env);

    assert_eq!(s.client.current_chain_id(), TEST_CHAIN_ID + 1);
    assert_eq!(
        s.client.try_claim(&user),
        Err(Ok(FaucetError::ChainNotAllowed))
    );
    assert!(!s.client.can_claim(&user));
}

#[test]
fn claim_without_vesting_contract_fails() {
    let s = setup();
    s.client.update_chain_id(&s.owner, &TEST_CHAIN_ID);
    mint(&s.env, &s.base_asset, &s.contract_id, 1_000);
    let user = Address::generate(&s.env);

    assert_eq!(
        s.client.try_claim(&user),
        Err(Ok(FaucetError::VestingContractUnset))
    );
}

#[test]
fn claim_while_paused_fails() {
    let s = ready(1_000);
    s.client.pause(&s.owner);
    let user = Address::generate(&s.env);

    assert_eq!(s.client.try_claim(&user), Err(Ok(FaucetError::SystemPaused)));
    assert!(!s.client.can_claim(&user));

    s.client.unpause(&s.owner);
    s.client.claim(&user);
    assert_eq!(s.client.get_total_distributed(), PAYOUT);
}

#[test]
fn claim_while_locked_fails() {
    let s = ready(1_000);
    s.env.as_contract(&s.contract_id, || {
        s.env.storage().instance().set(&DataKey::Locked, &true);
    });
    let user = Address::generate(&s.env);

    assert_eq!(s.client.try_claim(&user), Err(Ok(FaucetError::ReentrantCall)));
    assert_eq!(
        s.client.try_update_payout_amount(&s.owner, &(PAYOUT + 1)),
        Err(Ok(FaucetError::ReentrantCall))
    );
}

#[test]
#[should_panic]
fn claim_requires_auth() {
    let env = Env::default(); // no mock_all_auths
    let contract_id = env.register_contract(None, TokenFaucet);
    let client = TokenFaucetClient::new(&env, &contract_id);

    client.claim(&Address::generate(&env));
}

#[test]
fn lowered_payout_applies_to_next_claim() {
    let s = ready(1_000);
    s.client.update_payout_amount(&s.owner, &50);
    let user = Address::generate(&s.env);
    s.client.claim(&user);

    assert_eq!(balance(&s.env, &s.base_asset, &user), 50);
    assert_eq!(s.client.get_total_distributed(), 50);
}

// ── end-to-end ────────────────────────────────────────────────

#[test]
fn deploy_configure_fund_claim_cooldown() {
    let s = setup();
    let user = Address::generate(&s.env);

    let unconfigured = s.client.try_claim(&user);
    assert!(
        unconfigured == Err(Ok(FaucetError::ChainNotAllowed))
            || unconfigured == Err(Ok(FaucetError::VestingContractUnset))
    );

    let vesting = s.env.register_contract(None, MockVesting);
    s.client.update_chain_id(&s.owner, &TEST_CHAIN_ID);
    s.client.update_vesting_claim_contract(&s.owner, &vesting);
    mint(&s.env, &s.base_asset, &s.contract_id, 500);

    let before = balance(&s.env, &s.base_asset, &s.contract_id);
    s.client.claim(&user);
    assert_eq!(balance(&s.env, &s.base_asset, &s.contract_id), before - 200);
    assert_eq!(s.client.get_total_distributed(), 200);

    set_time(&s.env, START_TIME + 1_800);
    assert_eq!(
        s.client.try_claim(&user),
        Err(Ok(FaucetError::CooldownNotElapsed))
    );
    assert_eq!(s.client.get_total_distributed(), 200);
}

// ── pure validation over arbitrary inputs ─────────────────────

fn seeded_bytes() -> [u8; 2048] {
    core::array::from_fn(|i| (i as u8).wrapping_mul(151).wrapping_add((i >> 8) as u8))
}

#[test]
fn payout_validation_matches_bounds() {
    let data = seeded_bytes();
    let mut u = Unstructured::new(&data);
    for _ in 0..64 {
        let amount: i128 = u.arbitrary().unwrap();
        let expected = if amount <= 0 {
            Err(FaucetError::ZeroAmount)
        } else if amount > MAX_CLAIM_THRESHOLD {
            Err(FaucetError::OutOfCapacity)
        } else {
            Ok(())
        };
        assert_eq!(validate_payout_amount(amount), expected);
    }
    assert_eq!(validate_payout_amount(MAX_CLAIM_THRESHOLD), Ok(()));
    assert_eq!(
        validate_payout_amount(MAX_CLAIM_THRESHOLD + 1),
        Err(FaucetError::OutOfCapacity)
    );
}

#[test]
fn cooldown_validation_matches_bounds() {
    let data = seeded_bytes();
    let mut u = Unstructured::new(&data);
    for _ in 0..64 {
        let seconds: u64 = u.int_in_range(0..=2 * MIN_COOLDOWN_THRESHOLD).unwrap();
        assert_eq!(
            validate_cooldown_period(seconds).is_ok(),
            seconds >= MIN_COOLDOWN_THRESHOLD
        );
    }
}

#[test]
fn chain_id_validation_rejects_zero_and_mainnets() {
    for denied in [0u64, 1, 10, 25, 56, 128, 137, 250, 1284, 8217, 42161, 42220, 43114, 1666600000] {
        assert_eq!(validate_chain_id(denied), Err(FaucetError::MainnetIdDenied));
    }
    let data = seeded_bytes();
    let mut u = Unstructured::new(&data);
    for _ in 0..64 {
        let id: u64 = u.int_in_range(50_000..=u64::MAX).unwrap();
        if id != 1666600000 {
            assert_eq!(validate_chain_id(id), Ok(()));
        }
    }
}

#[test]
fn cooldown_elapsed_matches_subtraction() {
    let data = seeded_bytes();
    let mut u = Unstructured::new(&data);
    for _ in 0..64 {
        let last: u64 = u.int_in_range(0..=1_000_000).unwrap();
        let delta: u64 = u.int_in_range(0..=10_000).unwrap();
        let cooldown: u64 = u.int_in_range(MIN_COOLDOWN_THRESHOLD..=10_000).unwrap();
        assert_eq!(cooldown_elapsed(last + delta, last, cooldown), delta >= cooldown);
    }
    // Clock behind the recorded claim never counts as elapsed.
    assert!(!cooldown_elapsed(10, 100, MIN_COOLDOWN_THRESHOLD));
}
