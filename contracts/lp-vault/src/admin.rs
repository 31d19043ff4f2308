use crate::storage::{self, get_config};
use crate::{events, manager, position};
use soroban_sdk::{log, Env};
use vault_math::to_token_amount;
use vault_types::{FeeConfig, VaultConfig, VaultError, MAX_FEE_BPS};

fn require_owner(env: &Env) -> Result<VaultConfig, VaultError> {
    let config = get_config(env)?;
    config.owner.require_auth();
    Ok(config)
}

/// Update management and performance fees, in basis points
pub fn set_fees(env: &Env, management_fee: u32, performance_fee: u32) -> Result<(), VaultError> {
    require_owner(env)?;
    if management_fee > MAX_FEE_BPS || performance_fee > MAX_FEE_BPS {
        return Err(VaultError::InvalidInput);
    }
    storage::set_fees(
        env,
        &FeeConfig {
            management_fee,
            performance_fee,
        },
    );
    events::fees_updated(env, management_fee, performance_fee);
    Ok(())
}

/// Collect everything owed on the position into the idle balances
pub fn collect_fees(env: &Env) -> Result<(u128, u128), VaultError> {
    let config = require_owner(env)?;
    let Some(position_id) = position::position_id(env) else {
        return Ok((0, 0));
    };
    let (amount0, amount1) = manager::collect(env, &config, position_id, u128::MAX, u128::MAX)?;
    events::fees_collected(env, amount0, amount1);
    log!(env, "fees collected", amount0, amount1);
    Ok((amount0, amount1))
}

/// Send every idle token to the owner. Position liquidity is left untouched.
pub fn emergency_withdraw(env: &Env) -> Result<(i128, i128), VaultError> {
    let config = require_owner(env)?;
    let vault = env.current_contract_address();

    let amount0 = to_token_amount(manager::idle_balance(env, &config.token0)?)?;
    let amount1 = to_token_amount(manager::idle_balance(env, &config.token1)?)?;

    manager::transfer_token(env, &config.token0, &vault, &config.owner, amount0)?;
    manager::transfer_token(env, &config.token1, &vault, &config.owner, amount1)?;

    events::emergency_withdraw(env, &config.owner, amount0, amount1);
    log!(env, "emergency withdraw", amount0, amount1);
    Ok((amount0, amount1))
}
