#![no_std]
#![deny(unsafe_code)]
#![deny(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, token, vec,
    xdr::ToXdr, Address, Env, IntoVal, String, Symbol,
};

/// Centralized contract error codes. Missing `require_auth` signatures are
/// signaled by host panic; everything else surfaces as one of these.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum FaucetError {
    /// Contract is not initialized (owner not set).
    NotInitialized = 1,
    /// `initialize` was already called.
    AlreadyInitialized = 2,
    /// Caller does not hold the owner capability.
    NotOwner = 3,
    /// Contract is paused; claims and vesting operations are disabled.
    SystemPaused = 4,
    /// A guarded operation is already in flight.
    ReentrantCall = 5,
    /// Requester claimed less than `cooldown_period` seconds ago.
    CooldownNotElapsed = 6,
    /// Faucet holds less than one payout of the base asset.
    InsufficientCapacity = 7,
    /// Allowed chain id is unset or differs from the current network.
    ChainNotAllowed = 8,
    /// No vesting claim contract configured.
    VestingContractUnset = 9,
    /// Payout amount above `MAX_CLAIM_THRESHOLD`.
    OutOfCapacity = 10,
    /// Cooldown below `MIN_COOLDOWN_THRESHOLD`.
    InvalidCooldown = 11,
    /// Chain id is zero or a well-known mainnet id.
    MainnetIdDenied = 12,
    /// New payout amount equals the current one.
    PayoutAmountUnchanged = 13,
    /// New cooldown period equals the current one.
    CooldownPeriodUnchanged = 14,
    /// New allowed chain id equals the current one.
    ChainIdUnchanged = 15,
    /// New vesting contract equals the configured one.
    VestingContractUnchanged = 16,
    /// Address is not a contract address, or is this contract.
    InvalidContractInteraction = 17,
    /// Amount must be strictly positive.
    ZeroAmount = 18,
    /// Destination may not be this contract.
    InvalidAddress = 19,
    /// The vesting delegate call did not increase the faucet balance.
    NoVestingTokensClaimed = 20,
    /// Reserved: the host never pushes native currency into a contract.
    NativeCurrencyNotAccepted = 21,
    /// Reserved: the host rejects unknown entrypoints before dispatch.
    OperationNotPermitted = 22,
    /// `pause` called while already paused.
    AlreadyPaused = 23,
    /// `unpause` called while not paused.
    NotPaused = 24,
    /// `total_distributed` would overflow.
    ArithmeticOverflow = 25,
}

// ── Event symbols ────────────────────────────────────────────
const EVENT_INIT: Symbol = symbol_short!("init");
const EVENT_TOKENS_CLAIMED: Symbol = symbol_short!("claimed");
const EVENT_COOLDOWN_UPDATED: Symbol = symbol_short!("cd_upd");
const EVENT_PAYOUT_UPDATED: Symbol = symbol_short!("pay_upd");
const EVENT_VESTING_CLAIMED: Symbol = symbol_short!("vest_clm");
const EVENT_VESTING_CONTRACT_UPDATED: Symbol = symbol_short!("vest_upd");
const EVENT_CHAIN_ID_UPDATED: Symbol = symbol_short!("chain_upd");
const EVENT_WITHDRAWAL: Symbol = symbol_short!("withdraw");
const EVENT_PAUSED: Symbol = symbol_short!("paused");
const EVENT_UNPAUSED: Symbol = symbol_short!("unpaused");
const EVENT_RESCUED: Symbol = symbol_short!("rescued");
const EVENT_OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("own_xfer");

// ── Limits ───────────────────────────────────────────────────
/// Contract version identifier. Bumped when storage or semantics change.
pub const CONTRACT_VERSION: u32 = 1;

/// Upper bound for `payout_amount`: 10 000 tokens at 18 decimals.
pub const MAX_CLAIM_THRESHOLD: i128 = 10_000_000_000_000_000_000_000;

/// Lower bound for `cooldown_period`, in seconds.
pub const MIN_COOLDOWN_THRESHOLD: u64 = 60;

/// Well-known mainnet chain ids that may never be configured as the allowed chain.
pub const DENIED_CHAIN_IDS: [u64; 13] = [
    1,          // Ethereum
    10,         // Optimism
    25,         // Cronos
    56,         // BSC
    128,        // Heco
    137,        // Polygon
    250,        // Fantom
    1284,       // Moonbeam
    8217,       // Klaytn
    42161,      // Arbitrum
    42220,      // Celo
    43114,      // Avalanche
    1666600000, // Harmony
];

const VESTING_CLAIM_FN: &str = "claim_tokens_for_beneficiary";

// ── Data structures ──────────────────────────────────────────

/// Read-only snapshot of the faucet configuration. The optional vesting
/// contract is served separately by `get_vesting_contract`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FaucetConfig {
    pub owner: Address,
    pub base_asset: Address,
    pub native_asset: Address,
    pub payout_amount: i128,
    pub cooldown_period: u64,
    pub allowed_chain_id: u64,
    pub total_distributed: i128,
    pub paused: bool,
}

/// Storage keys. Everything except `LastClaim` lives in instance storage.
#[contracttype]
pub enum DataKey {
    Owner,
    /// Token distributed by `claim`. Fixed at initialization.
    BaseAsset,
    /// Native-currency token contract drained by `withdraw`.
    NativeAsset,
    VestingContract,
    PayoutAmount,
    CooldownPeriod,
    /// 0 = not configured; claims are rejected.
    AllowedChainId,
    TotalDistributed,
    Paused,
    /// Reentrancy lock; only true while `claim` or `claim_vested_tokens` runs.
    Locked,
    /// Persistent: ledger timestamp of the address's last successful claim.
    LastClaim(Address),
}

// ── Validation ───────────────────────────────────────────────

/// Bounds check shared by `initialize` and `update_payout_amount`.
pub fn validate_payout_amount(amount: i128) -> Result<(), FaucetError> {
    if amount <= 0 {
        return Err(FaucetError::ZeroAmount);
    }
    if amount > MAX_CLAIM_THRESHOLD {
        return Err(FaucetError::OutOfCapacity);
    }
    Ok(())
}

/// Bounds check shared by `initialize` and `update_cooldown_period`.
pub fn validate_cooldown_period(seconds: u64) -> Result<(), FaucetError> {
    if seconds < MIN_COOLDOWN_THRESHOLD {
        return Err(FaucetError::InvalidCooldown);
    }
    Ok(())
}

/// Rejects 0 (the "unset" sentinel) and every id in `DENIED_CHAIN_IDS`.
pub fn validate_chain_id(chain_id: u64) -> Result<(), FaucetError> {
    if chain_id == 0 || DENIED_CHAIN_IDS.contains(&chain_id) {
        return Err(FaucetError::MainnetIdDenied);
    }
    Ok(())
}

/// True once at least `cooldown` seconds have passed since `last_claim`.
/// A clock reading before `last_claim` counts as zero elapsed time.
pub fn cooldown_elapsed(now: u64, last_claim: u64, cooldown: u64) -> bool {
    now.saturating_sub(last_claim) >= cooldown
}

// ── Contract ─────────────────────────────────────────────────
#[contract]
pub struct TokenFaucet;

#[contractimpl]
impl TokenFaucet {
    fn owner(env: &Env) -> Result<Address, FaucetError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(FaucetError::NotInitialized)
    }

    fn base_asset(env: &Env) -> Result<Address, FaucetError> {
        env.storage()
            .instance()
            .get(&DataKey::BaseAsset)
            .ok_or(FaucetError::NotInitialized)
    }

    fn payout_amount(env: &Env) -> Result<i128, FaucetError> {
        env.storage()
            .instance()
            .get(&DataKey::PayoutAmount)
            .ok_or(FaucetError::NotInitialized)
    }

    fn cooldown_period(env: &Env) -> Result<u64, FaucetError> {
        env.storage()
            .instance()
            .get(&DataKey::CooldownPeriod)
            .ok_or(FaucetError::NotInitialized)
    }

    fn vesting_contract(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::VestingContract)
    }

    fn allowed_chain_id(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::AllowedChainId)
            .unwrap_or(0)
    }

    fn total_distributed(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalDistributed)
            .unwrap_or(0)
    }

    /// First eight bytes (big-endian) of the ledger network id.
    fn chain_id(env: &Env) -> u64 {
        let network_id = env.ledger().network_id().to_array();
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&network_id[..8]);
        u64::from_be_bytes(prefix)
    }

    /// XDR of an address value is the 4-byte `ScVal::Address` tag followed by
    /// the 4-byte `ScAddress` arm, where 1 is a contract.
    ///
    /// Only the address kind is checked. A contract id with no instance on
    /// the ledger passes; it is caught when `claim_vested_tokens` invokes it.
    fn is_contract_address(env: &Env, address: &Address) -> bool {
        address.clone().to_xdr(env).get(7) == Some(1)
    }

    /// Auth + owner check. Call at the start of every owner-only entrypoint.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), FaucetError> {
        let owner = Self::owner(env)?;
        caller.require_auth();
        if *caller != owner {
            return Err(FaucetError::NotOwner);
        }
        Ok(())
    }

    fn require_not_paused(env: &Env) -> Result<(), FaucetError> {
        if Self::is_paused(env.clone()) {
            return Err(FaucetError::SystemPaused);
        }
        Ok(())
    }

    /// Returns error while `claim` or `claim_vested_tokens` is mid-flight.
    fn require_unlocked(env: &Env) -> Result<(), FaucetError> {
        if env
            .storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Locked)
            .unwrap_or(false)
        {
            return Err(FaucetError::ReentrantCall);
        }
        Ok(())
    }

    fn set_locked(env: &Env, locked: bool) {
        env.storage().instance().set(&DataKey::Locked, &locked);
    }

    fn require_allowed_chain(env: &Env) -> Result<(), FaucetError> {
        let allowed = Self::allowed_chain_id(env);
        if allowed == 0 || allowed != Self::chain_id(env) {
            return Err(FaucetError::ChainNotAllowed);
        }
        Ok(())
    }

    /// Initialize the faucet. Can only be called once.
    ///
    /// `payout_amount` and `cooldown_period` go through the same bounds checks
    /// as their setters. The allowed chain id starts unset and no vesting
    /// contract is configured, so claims are rejected until the owner sets both.
    pub fn initialize(
        env: Env,
        owner: Address,
        base_asset: Address,
        native_asset: Address,
        payout_amount: i128,
        cooldown_period: u64,
    ) -> Result<(), FaucetError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(FaucetError::AlreadyInitialized);
        }
        owner.require_auth();
        validate_payout_amount(payout_amount)?;
        validate_cooldown_period(cooldown_period)?;

        let storage = env.storage().instance();
        storage.set(&DataKey::Owner, &owner);
        storage.set(&DataKey::BaseAsset, &base_asset);
        storage.set(&DataKey::NativeAsset, &native_asset);
        storage.set(&DataKey::PayoutAmount, &payout_amount);
        storage.set(&DataKey::CooldownPeriod, &cooldown_period);
        storage.set(&DataKey::AllowedChainId, &0u64);
        storage.set(&DataKey::TotalDistributed, &0i128);
        storage.set(&DataKey::Paused, &false);
        storage.set(&DataKey::Locked, &false);

        env.events().publish(
            (EVENT_INIT, owner),
            (base_asset, payout_amount, cooldown_period),
        );
        Ok(())
    }

    // ── Claiming ──────────────────────────────────────────────

    /// Claim one payout of the base asset.
    ///
    /// Requires an allowed chain id matching the current network, a configured
    /// vesting contract, an elapsed cooldown for `requester` and a faucet
    /// balance of at least one payout. The transfer runs under the reentrancy
    /// lock; the claim timestamp and distributed total are written only after
    /// it returns.
    pub fn claim(env: Env, requester: Address) -> Result<(), FaucetError> {
        requester.require_auth();
        Self::require_unlocked(&env)?;
        Self::require_not_paused(&env)?;
        let payout_amount = Self::payout_amount(&env)?;

        Self::require_allowed_chain(&env)?;
        if Self::vesting_contract(&env).is_none() {
            return Err(FaucetError::VestingContractUnset);
        }

        let now = env.ledger().timestamp();
        let last_claim = Self::get_last_claim_time(env.clone(), requester.clone());
        if !cooldown_elapsed(now, last_claim, Self::cooldown_period(&env)?) {
            return Err(FaucetError::CooldownNotElapsed);
        }

        let contract_addr = env.current_contract_address();
        let asset = token::Client::new(&env, &Self::base_asset(&env)?);
        if asset.balance(&contract_addr) < payout_amount {
            return Err(FaucetError::InsufficientCapacity);
        }

        let total = Self::total_distributed(&env)
            .checked_add(payout_amount)
            .ok_or(FaucetError::ArithmeticOverflow)?;

        Self::set_locked(&env, true);
        asset.transfer(&contract_addr, &requester, &payout_amount);
        // The transfer may have run arbitrary token code.
        Self::require_allowed_chain(&env)?;

        env.storage()
            .persistent()
            .set(&DataKey::LastClaim(requester.clone()), &now);
        env.storage()
            .instance()
            .set(&DataKey::TotalDistributed, &total);
        Self::set_locked(&env, false);

        env.events()
            .publish((EVENT_TOKENS_CLAIMED, requester), payout_amount);
        Ok(())
    }

    /// Read-only: would `claim` succeed for `requester` right now?
    pub fn can_claim(env: Env, requester: Address) -> bool {
        let (Ok(payout_amount), Ok(cooldown), Ok(base_asset)) = (
            Self::payout_amount(&env),
            Self::cooldown_period(&env),
            Self::base_asset(&env),
        ) else {
            return false;
        };
        if Self::is_paused(env.clone())
            || Self::require_allowed_chain(&env).is_err()
            || Self::vesting_contract(&env).is_none()
        {
            return false;
        }
        let last_claim = Self::get_last_claim_time(env.clone(), requester);
        if !cooldown_elapsed(env.ledger().timestamp(), last_claim, cooldown) {
            return false;
        }
        token::Client::new(&env, &base_asset).balance(&env.current_contract_address())
            >= payout_amount
    }

    /// Timestamp of the last successful claim by `requester` (0 if never).
    pub fn get_last_claim_time(env: Env, requester: Address) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::LastClaim(requester))
            .unwrap_or(0)
    }

    /// Earliest ledger timestamp at which `requester` passes the cooldown check.
    pub fn next_claim_time(env: Env, requester: Address) -> Result<u64, FaucetError> {
        let cooldown = Self::cooldown_period(&env)?;
        Ok(Self::get_last_claim_time(env, requester).saturating_add(cooldown))
    }

    // ── Vesting bridge ────────────────────────────────────────

    /// Ask the vesting contract to release `template_name` tokens to this
    /// contract. Owner only.
    ///
    /// The delegate is opaque; success is judged purely by the base-asset
    /// balance of this contract increasing across the call.
    pub fn claim_vested_tokens(
        env: Env,
        caller: Address,
        template_name: String,
    ) -> Result<(), FaucetError> {
        Self::require_owner(&env, &caller)?;
        Self::require_unlocked(&env)?;
        Self::require_not_paused(&env)?;
        let vesting = Self::vesting_contract(&env).ok_or(FaucetError::VestingContractUnset)?;

        let contract_addr = env.current_contract_address();
        let asset = token::Client::new(&env, &Self::base_asset(&env)?);
        let old_balance = asset.balance(&contract_addr);

        Self::set_locked(&env, true);
        let args = vec![
            &env,
            template_name.into_val(&env),
            contract_addr.into_val(&env),
        ];
        env.invoke_contract::<()>(&vesting, &Symbol::new(&env, VESTING_CLAIM_FN), args);
        let new_balance = asset.balance(&contract_addr);
        Self::set_locked(&env, false);

        if new_balance <= old_balance {
            return Err(FaucetError::NoVestingTokensClaimed);
        }

        env.events()
            .publish((EVENT_VESTING_CLAIMED,), (old_balance, new_balance));
        Ok(())
    }

    // ── Owner configuration ───────────────────────────────────

    /// Set the amount paid per claim. Allowed while paused.
    pub fn update_payout_amount(
        env: Env,
        caller: Address,
        new_amount: i128,
    ) -> Result<(), FaucetError> {
        Self::require_owner(&env, &caller)?;
        Self::require_unlocked(&env)?;
        let old_amount = Self::payout_amount(&env)?;
        if new_amount == old_amount {
            return Err(FaucetError::PayoutAmountUnchanged);
        }
        validate_payout_amount(new_amount)?;

        env.storage()
            .instance()
            .set(&DataKey::PayoutAmount, &new_amount);
        env.events()
            .publish((EVENT_PAYOUT_UPDATED,), (old_amount, new_amount));
        Ok(())
    }

    /// Set the per-address cooldown in seconds. Allowed while paused.
    pub fn update_cooldown_period(
        env: Env,
        caller: Address,
        new_period: u64,
    ) -> Result<(), FaucetError> {
        Self::require_owner(&env, &caller)?;
        Self::require_unlocked(&env)?;
        let old_period = Self::cooldown_period(&env)?;
        if new_period == old_period {
            return Err(FaucetError::CooldownPeriodUnchanged);
        }
        validate_cooldown_period(new_period)?;

        env.storage()
            .instance()
            .set(&DataKey::CooldownPeriod, &new_period);
        env.events()
            .publish((EVENT_COOLDOWN_UPDATED,), (old_period, new_period));
        Ok(())
    }

    /// Set the chain id on which claims are accepted. Allowed while paused.
    pub fn update_chain_id(env: Env, caller: Address, new_chain_id: u64) -> Result<(), FaucetError> {
        Self::require_owner(&env, &caller)?;
        Self::require_unlocked(&env)?;
        let old_chain_id = Self::allowed_chain_id(&env);
        if new_chain_id == old_chain_id {
            return Err(FaucetError::ChainIdUnchanged);
        }
        validate_chain_id(new_chain_id)?;

        env.storage()
            .instance()
            .set(&DataKey::AllowedChainId, &new_chain_id);
        env.events()
            .publish((EVENT_CHAIN_ID_UPDATED,), (old_chain_id, new_chain_id));
        Ok(())
    }

    /// Point the faucet at a vesting claim contract. Disabled while paused.
    pub fn update_vesting_claim_contract(
        env: Env,
        caller: Address,
        new_contract: Address,
    ) -> Result<(), FaucetError> {
        Self::require_owner(&env, &caller)?;
        Self::require_unlocked(&env)?;
        Self::require_not_paused(&env)?;
        if new_contract == env.current_contract_address()
            || !Self::is_contract_address(&env, &new_contract)
        {
            return Err(FaucetError::InvalidContractInteraction);
        }
        let old_contract = Self::vesting_contract(&env);
        if old_contract.as_ref() == Some(&new_contract) {
            return Err(FaucetError::VestingContractUnchanged);
        }

        env.storage()
            .instance()
            .set(&DataKey::VestingContract, &new_contract);
        env.events().publish(
            (EVENT_VESTING_CONTRACT_UPDATED,),
            (old_contract, new_contract),
        );
        Ok(())
    }

    /// Hand the owner capability to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), FaucetError> {
        Self::require_owner(&env, &caller)?;
        Self::require_unlocked(&env)?;
        if new_owner == caller || new_owner == env.current_contract_address() {
            return Err(FaucetError::InvalidAddress);
        }
        env.storage().instance().set(&DataKey::Owner, &new_owner);
        env.events()
            .publish((EVENT_OWNERSHIP_TRANSFERRED,), (caller, new_owner));
        Ok(())
    }

    // ── Pause ─────────────────────────────────────────────────

    /// Pause claims and vesting operations (owner only).
    pub fn pause(env: Env, caller: Address) -> Result<(), FaucetError> {
        Self::require_owner(&env, &caller)?;
        Self::require_unlocked(&env)?;
        if Self::is_paused(env.clone()) {
            return Err(FaucetError::AlreadyPaused);
        }
        env.storage().instance().set(&DataKey::Paused, &true);
        env.events().publish((EVENT_PAUSED, caller), ());
        Ok(())
    }

    /// Unpause the contract (owner only).
    pub fn unpause(env: Env, caller: Address) -> Result<(), FaucetError> {
        Self::require_owner(&env, &caller)?;
        Self::require_unlocked(&env)?;
        if !Self::is_paused(env.clone()) {
            return Err(FaucetError::NotPaused);
        }
        env.storage().instance().set(&DataKey::Paused, &false);
        env.events().publish((EVENT_UNPAUSED, caller), ());
        Ok(())
    }

    /// Query the paused state of the contract.
    pub fn is_paused(env: Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Paused)
            .unwrap_or(false)
    }

    // ── Fund recovery ─────────────────────────────────────────

    /// Move `amount` of any token, the base asset included, out of the faucet.
    pub fn rescue_tokens(
        env: Env,
        caller: Address,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), FaucetError> {
        Self::require_owner(&env, &caller)?;
        Self::require_unlocked(&env)?;
        if amount <= 0 {
            return Err(FaucetError::ZeroAmount);
        }
        let contract_addr = env.current_contract_address();
        if to == contract_addr {
            return Err(FaucetError::InvalidAddress);
        }

        token::Client::new(&env, &token).transfer(&contract_addr, &to, &amount);
        env.events().publish((EVENT_RESCUED, token), (to, amount));
        Ok(())
    }

    /// Send the faucet's whole native-currency balance to `destination`.
    pub fn withdraw(env: Env, caller: Address, destination: Address) -> Result<(), FaucetError> {
        Self::require_owner(&env, &caller)?;
        Self::require_unlocked(&env)?;
        let contract_addr = env.current_contract_address();
        if destination == contract_addr {
            return Err(FaucetError::InvalidAddress);
        }
        let native_asset: Address = env
            .storage()
            .instance()
            .get(&DataKey::NativeAsset)
            .ok_or(FaucetError::NotInitialized)?;
        let native = token::Client::new(&env, &native_asset);
        let amount = native.balance(&contract_addr);
        if amount <= 0 {
            return Err(FaucetError::ZeroAmount);
        }

        native.transfer(&contract_addr, &destination, &amount);
        env.events()
            .publish((EVENT_WITHDRAWAL, caller), (destination, amount));
        Ok(())
    }

    // ── Views ─────────────────────────────────────────────────

    pub fn get_owner(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Owner)
    }

    pub fn get_base_asset(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::BaseAsset)
    }

    pub fn get_vesting_contract(env: Env) -> Option<Address> {
        Self::vesting_contract(&env)
    }

    pub fn get_payout_amount(env: Env) -> i128 {
        Self::payout_amount(&env).unwrap_or(0)
    }

    pub fn get_cooldown_period(env: Env) -> u64 {
        Self::cooldown_period(&env).unwrap_or(0)
    }

    pub fn get_allowed_chain_id(env: Env) -> u64 {
        Self::allowed_chain_id(&env)
    }

    /// Sum of every successful claim's payout.
    pub fn get_total_distributed(env: Env) -> i128 {
        Self::total_distributed(&env)
    }

    /// Chain id of the network this contract is executing on.
    pub fn current_chain_id(env: Env) -> u64 {
        Self::chain_id(&env)
    }

    /// Full configuration snapshot.
    pub fn get_config(env: Env) -> Result<FaucetConfig, FaucetError> {
        let native_asset: Address = env
            .storage()
            .instance()
            .get(&DataKey::NativeAsset)
            .ok_or(FaucetError::NotInitialized)?;
        Ok(FaucetConfig {
            owner: Self::owner(&env)?,
            base_asset: Self::base_asset(&env)?,
            native_asset,
            payout_amount: Self::payout_amount(&env)?,
            cooldown_period: Self::cooldown_period(&env)?,
            allowed_chain_id: Self::allowed_chain_id(&env),
            total_distributed: Self::total_distributed(&env),
            paused: Self::is_paused(env.clone()),
        })
    }

    /// Return the current contract version.
    pub fn get_version(env: Env) -> u32 {
        let _ = env;
        CONTRACT_VERSION
    }
}

mod test;
mod test_admin;
mod test_cross_contract;
