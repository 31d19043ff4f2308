#![no_std]

mod accounting;
mod admin;
mod events;
mod guard;
mod manager;
mod position;
mod shares;
mod storage;
mod valuation;


pub use manager::{PositionManagerClient, PriceSourceClient};

use guard::non_reentrant;
use soroban_sdk::{contract, contractimpl, log, Address, Env, U256};
use vault_math::invariants::range_is_valid;
use vault_types::{FeeConfig, VaultConfig, VaultError, MAX_TICK, MIN_TICK};

#[contract]
pub struct LiquidityVault;

#[contractimpl]
impl LiquidityVault {
    /// Initialize the vault for one token pair and one tick range
    ///
    /// # Arguments
    /// * `owner` - Admin allowed to change fees, collect fees and drain idle balances
    /// * `position_manager` - Contract that owns the AMM position on the vault's behalf
    /// * `pool` - Pool reporting the current sqrt price
    /// * `tick_lower` / `tick_upper` - Fixed range of the vault position
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        owner: Address,
        position_manager: Address,
        pool: Address,
        token0: Address,
        token1: Address,
        fee: u32,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<(), VaultError> {
        if storage::has_config(&env) {
            return Err(VaultError::AlreadyInitialized);
        }
        owner.require_auth();

        if token0 == token1 {
            return Err(VaultError::InvalidInput);
        }
        if !(MIN_TICK..=MAX_TICK).contains(&tick_lower)
            || !(MIN_TICK..=MAX_TICK).contains(&tick_upper)
        {
            return Err(VaultError::OutOfRange);
        }
        if !range_is_valid(tick_lower, tick_upper) {
            return Err(VaultError::InvalidInput);
        }

        storage::set_config(
            &env,
            &VaultConfig {
                owner,
                position_manager,
                pool,
                token0,
                token1,
                fee,
                tick_lower,
                tick_upper,
            },
        );
        storage::set_fees(&env, &FeeConfig::default());
        log!(&env, "vault initialized", tick_lower, tick_upper);
        Ok(())
    }

    // === Share accounting ===

    /// Deposit up to the desired amounts into the vault position
    ///
    /// # Returns
    /// (shares_minted, amount0_used, amount1_used)
    pub fn deposit(
        env: Env,
        depositor: Address,
        amount0_desired: i128,
        amount1_desired: i128,
        amount0_min: i128,
        amount1_min: i128,
    ) -> Result<(u128, i128, i128), VaultError> {
        non_reentrant(&env, || {
            accounting::deposit(
                &env,
                &depositor,
                amount0_desired,
                amount1_desired,
                amount0_min,
                amount1_min,
            )
        })
    }

    /// Burn `shares` and pay out the redeemer's part of the vault
    ///
    /// # Returns
    /// (amount0, amount1) transferred to the redeemer
    pub fn withdraw(
        env: Env,
        redeemer: Address,
        shares: u128,
        amount0_min: i128,
        amount1_min: i128,
    ) -> Result<(i128, i128), VaultError> {
        non_reentrant(&env, || {
            accounting::withdraw(&env, &redeemer, shares, amount0_min, amount1_min)
        })
    }

    // === Admin ===

    pub fn set_fees(
        env: Env,
        management_fee: u32,
        performance_fee: u32,
    ) -> Result<(), VaultError> {
        admin::set_fees(&env, management_fee, performance_fee)
    }

    pub fn collect_fees(env: Env) -> Result<(u128, u128), VaultError> {
        non_reentrant(&env, || admin::collect_fees(&env))
    }

    pub fn emergency_withdraw(env: Env) -> Result<(i128, i128), VaultError> {
        non_reentrant(&env, || admin::emergency_withdraw(&env))
    }

    // === Shares ===

    pub fn transfer(env: Env, from: Address, to: Address, amount: u128) -> Result<(), VaultError> {
        from.require_auth();
        shares::transfer(&env, &from, &to, amount)
    }

    pub fn balance_of(env: Env, holder: Address) -> u128 {
        shares::balance_of(&env, &holder)
    }

    pub fn total_supply(env: Env) -> u128 {
        shares::total_supply(&env)
    }

    // === Views ===

    pub fn get_config(env: Env) -> Result<VaultConfig, VaultError> {
        storage::get_config(&env)
    }

    pub fn get_fees(env: Env) -> FeeConfig {
        storage::get_fees(&env)
    }

    /// Position identifier, 0 while no position has been opened
    pub fn position_id(env: Env) -> u32 {
        position::position_id(&env).unwrap_or(0)
    }

    pub fn has_position(env: Env) -> bool {
        position::has_position(&env)
    }

    pub fn position_liquidity(env: Env) -> Result<u128, VaultError> {
        let config = storage::get_config(&env)?;
        position::current_liquidity(&env, &config)
    }

    /// Token amounts in the position at the current price plus idle balances
    pub fn get_total_amounts(env: Env) -> Result<(u128, u128), VaultError> {
        valuation::total_amounts(&env)
    }

    pub fn get_total_value(env: Env) -> Result<u128, VaultError> {
        valuation::total_value(&env)
    }

    /// Total value per share, scaled by 1e18
    pub fn share_price(env: Env) -> Result<u128, VaultError> {
        valuation::share_price(&env)
    }

    pub fn preview_deposit(env: Env, amount0: i128, amount1: i128) -> Result<u128, VaultError> {
        valuation::preview_deposit(&env, amount0, amount1)
    }

    pub fn preview_withdraw(env: Env, shares: u128) -> Result<(u128, u128), VaultError> {
        valuation::preview_withdraw(&env, shares)
    }

    /// Q64.96 sqrt price of `tick`
    pub fn sqrt_price_at_tick(env: Env, tick: i32) -> Result<U256, VaultError> {
        let sqrt_price_x96 = vault_math::get_sqrt_ratio_at_tick(tick)?;
        Ok(manager::sqrt_price_to_host(&env, sqrt_price_x96))
    }
}
