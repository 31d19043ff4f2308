use crate::manager;
use crate::storage::{get_position_id, set_position_id};
use soroban_sdk::Env;
use vault_types::{VaultConfig, VaultError};

/// Identifier of the vault position, `None` until the first deposit
pub fn position_id(env: &Env) -> Option<u32> {
    get_position_id(env)
}

pub fn has_position(env: &Env) -> bool {
    get_position_id(env).is_some()
}

/// Record the identifier returned by the position manager on the first open.
///
/// The identifier is written once and never cleared, even when the
/// position is later drained to zero liquidity.
pub fn record_opened(env: &Env, position_id: u32) -> Result<(), VaultError> {
    if position_id == 0 {
        return Err(VaultError::ExternalCallFailed);
    }
    if get_position_id(env).is_some() {
        return Err(VaultError::AlreadyInitialized);
    }
    set_position_id(env, position_id);
    Ok(())
}

/// Liquidity currently held by the vault position, read from the position manager
pub fn current_liquidity(env: &Env, config: &VaultConfig) -> Result<u128, VaultError> {
    match get_position_id(env) {
        None => Ok(0),
        Some(id) => manager::position_liquidity(env, config, id),
    }
}
