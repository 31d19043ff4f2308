use crate::storage::get_config;
use crate::{events, manager, position, shares};
use soroban_sdk::{log, Address, Env};
use vault_math::invariants::{mint_within_contribution, payout_within_claim};
use vault_math::{plan_withdrawal, shares_for_deposit, to_token_amount};
use vault_types::{DepositRecord, VaultError, WithdrawRecord};

/// Add liquidity on behalf of `depositor` and mint the matching shares.
///
/// The desired amounts are pulled into the vault, offered to the position
/// manager as upper bounds, and whatever the manager did not consume is
/// returned to the depositor before the call ends.
/// Returns (shares_minted, amount0_used, amount1_used)
pub fn deposit(
    env: &Env,
    depositor: &Address,
    amount0_desired: i128,
    amount1_desired: i128,
    amount0_min: i128,
    amount1_min: i128,
) -> Result<(u128, i128, i128), VaultError> {
    depositor.require_auth();

    if amount0_desired < 0 || amount1_desired < 0 || amount0_min < 0 || amount1_min < 0 {
        return Err(VaultError::InvalidInput);
    }
    if amount0_desired == 0 && amount1_desired == 0 {
        return Err(VaultError::InvalidInput);
    }

    let config = get_config(env)?;
    let vault = env.current_contract_address();

    let total_supply_before = shares::total_supply(env);
    let liquidity_before = position::current_liquidity(env, &config)?;

    manager::transfer_token(env, &config.token0, depositor, &vault, amount0_desired)?;
    manager::transfer_token(env, &config.token1, depositor, &vault, amount1_desired)?;

    manager::approve_manager(env, &config, &config.token0, amount0_desired)?;
    manager::approve_manager(env, &config, &config.token1, amount1_desired)?;

    let (liquidity_added, amount0, amount1) = match position::position_id(env) {
        None => {
            let (position_id, liquidity, amount0, amount1) = manager::open_position(
                env,
                &config,
                amount0_desired,
                amount1_desired,
                amount0_min,
                amount1_min,
            )?;
            position::record_opened(env, position_id)?;
            log!(env, "position opened", position_id);
            (liquidity, amount0, amount1)
        }
        Some(position_id) => manager::increase_liquidity(
            env,
            &config,
            position_id,
            amount0_desired,
            amount1_desired,
            amount0_min,
            amount1_min,
        )?,
    };

    manager::approve_manager(env, &config, &config.token0, 0)?;
    manager::approve_manager(env, &config, &config.token1, 0)?;

    // The manager may consume less than offered, never more
    if amount0 < 0 || amount1 < 0 || amount0 > amount0_desired || amount1 > amount1_desired {
        return Err(VaultError::ExternalCallFailed);
    }
    if amount0 < amount0_min || amount1 < amount1_min {
        return Err(VaultError::SlippageExceeded);
    }

    let minted = shares_for_deposit(total_supply_before, liquidity_before, liquidity_added)?;
    debug_assert!(mint_within_contribution(
        minted,
        liquidity_added,
        total_supply_before,
        liquidity_before
    ));
    shares::mint(env, depositor, minted)?;

    // Refund what the manager left behind
    manager::transfer_token(env, &config.token0, &vault, depositor, amount0_desired - amount0)?;
    manager::transfer_token(env, &config.token1, &vault, depositor, amount1_desired - amount1)?;

    events::deposit(
        env,
        &DepositRecord {
            depositor: depositor.clone(),
            amount0,
            amount1,
            shares_minted: minted,
        },
    );
    log!(env, "deposit", liquidity_added, minted);

    Ok((minted, amount0, amount1))
}

/// Redeem `shares` for a pro-rata part of the position and of the idle balances.
/// Returns (amount0, amount1) paid to the redeemer
pub fn withdraw(
    env: &Env,
    redeemer: &Address,
    shares_to_burn: u128,
    amount0_min: i128,
    amount1_min: i128,
) -> Result<(i128, i128), VaultError> {
    redeemer.require_auth();

    if shares_to_burn == 0 || amount0_min < 0 || amount1_min < 0 {
        return Err(VaultError::InvalidInput);
    }
    if shares_to_burn > shares::balance_of(env, redeemer) {
        return Err(VaultError::InsufficientBalance);
    }

    let config = get_config(env)?;
    let vault = env.current_contract_address();

    // Snapshot before anything is collected into the idle balances
    let total_supply = shares::total_supply(env);
    let liquidity = position::current_liquidity(env, &config)?;
    let idle0 = manager::idle_balance(env, &config.token0)?;
    let idle1 = manager::idle_balance(env, &config.token1)?;

    let plan = plan_withdrawal(shares_to_burn, total_supply, liquidity, idle0, idle1)?;
    debug_assert!(payout_within_claim(plan.idle0, idle0, shares_to_burn, total_supply));
    debug_assert!(payout_within_claim(plan.idle1, idle1, shares_to_burn, total_supply));
    debug_assert!(payout_within_claim(
        plan.liquidity_to_remove,
        liquidity,
        shares_to_burn,
        total_supply
    ));

    let mut payout0 = plan.idle0;
    let mut payout1 = plan.idle1;

    if plan.liquidity_to_remove > 0 {
        let position_id = position::position_id(env).ok_or(VaultError::NotInitialized)?;
        let (owed0, owed1) =
            manager::decrease_liquidity(env, &config, position_id, plan.liquidity_to_remove)?;
        // Only the principal just released; accrued fees stay for collect_fees
        let (collected0, collected1) = manager::collect(env, &config, position_id, owed0, owed1)?;
        payout0 = payout0
            .checked_add(collected0)
            .ok_or(VaultError::MathOverflow)?;
        payout1 = payout1
            .checked_add(collected1)
            .ok_or(VaultError::MathOverflow)?;
    }

    // Burn before any asset leaves the vault
    shares::burn(env, redeemer, shares_to_burn)?;

    let amount0 = to_token_amount(payout0)?;
    let amount1 = to_token_amount(payout1)?;
    if amount0 < amount0_min || amount1 < amount1_min {
        return Err(VaultError::SlippageExceeded);
    }

    manager::transfer_token(env, &config.token0, &vault, redeemer, amount0)?;
    manager::transfer_token(env, &config.token1, &vault, redeemer, amount1)?;

    events::withdraw(
        env,
        &WithdrawRecord {
            redeemer: redeemer.clone(),
            shares_burned: shares_to_burn,
            amount0,
            amount1,
        },
    );
    log!(env, "withdraw", plan.liquidity_to_remove, shares_to_burn);

    Ok((amount0, amount1))
}
