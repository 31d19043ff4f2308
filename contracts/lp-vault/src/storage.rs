use soroban_sdk::{contracttype, Address, Env};
use vault_types::{FeeConfig, VaultConfig, VaultError};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// Instance:   Config, Fees, PositionId, TotalSupply, Locked
// Persistent: Balance(holder)
//
// The vault holds one position, so everything except share balances is a
// fixed-size instance entry. Idle token balances are not stored: they are
// read from the token contracts on demand.
// ============================================================================

/// Storage keys for the vault contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Vault configuration (Instance storage)
    Config,
    /// Fee parameters (Instance storage)
    Fees,
    /// Position manager id of the vault position, absent until the first deposit
    PositionId,
    /// Total share supply (Instance storage)
    TotalSupply,
    /// Share balance per holder (Persistent storage)
    Balance(Address),
    /// Reentrancy lock (Instance storage)
    Locked,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<VaultConfig, VaultError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Fees ===

pub fn get_fees(env: &Env) -> FeeConfig {
    env.storage()
        .instance()
        .get(&DataKey::Fees)
        .unwrap_or_default()
}

pub fn set_fees(env: &Env, fees: &FeeConfig) {
    env.storage().instance().set(&DataKey::Fees, fees);
    extend_instance_ttl(env);
}

// === Position ===

pub fn get_position_id(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::PositionId)
}

pub fn set_position_id(env: &Env, position_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::PositionId, &position_id);
}

// === Shares ===

pub fn get_total_supply(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, total_supply: u128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &total_supply);
}

pub fn get_balance(env: &Env, holder: &Address) -> u128 {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, holder: &Address, balance: u128) {
    let key = DataKey::Balance(holder.clone());
    if balance == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

// === Lock ===

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}
