//! Read-only valuation of the vault. Every figure is recomputed from the
//! live position liquidity, the live pool price and the live token balances.
//! Previews reuse the exact formulas of `deposit` and `withdraw`.

use crate::storage::get_config;
use crate::{manager, position, shares};
use soroban_sdk::Env;
use vault_math::{
    from_token_amount, get_amounts_for_liquidity, get_liquidity_for_amounts,
    get_sqrt_ratio_at_tick, plan_withdrawal, shares_for_deposit,
};
use vault_types::{VaultConfig, VaultError};

/// Token amounts `liquidity` of the vault range is worth at the current price
fn amounts_for_liquidity(
    env: &Env,
    config: &VaultConfig,
    liquidity: u128,
) -> Result<(u128, u128), VaultError> {
    if liquidity == 0 {
        return Ok((0, 0));
    }
    let sqrt_price_x96 = manager::current_sqrt_price(env, config)?;
    let sqrt_ratio_lower = get_sqrt_ratio_at_tick(config.tick_lower)?;
    let sqrt_ratio_upper = get_sqrt_ratio_at_tick(config.tick_upper)?;
    get_amounts_for_liquidity(sqrt_price_x96, sqrt_ratio_lower, sqrt_ratio_upper, liquidity)
}

fn idle_balances(env: &Env, config: &VaultConfig) -> Result<(u128, u128), VaultError> {
    Ok((
        manager::idle_balance(env, &config.token0)?,
        manager::idle_balance(env, &config.token1)?,
    ))
}

/// Position amounts plus idle balances, per asset
pub fn total_amounts(env: &Env) -> Result<(u128, u128), VaultError> {
    let config = get_config(env)?;
    let liquidity = position::current_liquidity(env, &config)?;
    let (position0, position1) = amounts_for_liquidity(env, &config, liquidity)?;
    let (idle0, idle1) = idle_balances(env, &config)?;
    Ok((
        position0.checked_add(idle0).ok_or(VaultError::MathOverflow)?,
        position1.checked_add(idle1).ok_or(VaultError::MathOverflow)?,
    ))
}

pub fn total_value(env: &Env) -> Result<u128, VaultError> {
    let (amount0, amount1) = total_amounts(env)?;
    vault_math::total_value(amount0, amount1)
}

pub fn share_price(env: &Env) -> Result<u128, VaultError> {
    let total_supply = shares::total_supply(env);
    if total_supply == 0 {
        return vault_math::share_price(0, 0);
    }
    vault_math::share_price(total_value(env)?, total_supply)
}

/// Shares a deposit of the given amounts would mint at the current price
pub fn preview_deposit(env: &Env, amount0: i128, amount1: i128) -> Result<u128, VaultError> {
    if amount0 < 0 || amount1 < 0 || (amount0 == 0 && amount1 == 0) {
        return Err(VaultError::InvalidInput);
    }
    let config = get_config(env)?;
    let sqrt_price_x96 = manager::current_sqrt_price(env, &config)?;
    let sqrt_ratio_lower = get_sqrt_ratio_at_tick(config.tick_lower)?;
    let sqrt_ratio_upper = get_sqrt_ratio_at_tick(config.tick_upper)?;
    let liquidity_added = get_liquidity_for_amounts(
        sqrt_price_x96,
        sqrt_ratio_lower,
        sqrt_ratio_upper,
        from_token_amount(amount0)?,
        from_token_amount(amount1)?,
    )?;
    let liquidity_before = position::current_liquidity(env, &config)?;
    shares_for_deposit(shares::total_supply(env), liquidity_before, liquidity_added)
}

/// Amounts a redemption of `shares` would pay out right now
pub fn preview_withdraw(env: &Env, shares_to_burn: u128) -> Result<(u128, u128), VaultError> {
    let total_supply = shares::total_supply(env);
    if total_supply == 0 || shares_to_burn == 0 {
        return Ok((0, 0));
    }
    let config = get_config(env)?;
    let liquidity = position::current_liquidity(env, &config)?;
    let (idle0, idle1) = idle_balances(env, &config)?;
    let plan = plan_withdrawal(shares_to_burn, total_supply, liquidity, idle0, idle1)?;
    let (position0, position1) = amounts_for_liquidity(env, &config, plan.liquidity_to_remove)?;
    Ok((
        plan.idle0
            .checked_add(position0)
            .ok_or(VaultError::MathOverflow)?,
        plan.idle1
            .checked_add(position1)
            .ok_or(VaultError::MathOverflow)?,
    ))
}
