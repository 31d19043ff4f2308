//! Clients for the contracts the vault depends on: the position manager
//! that owns the AMM position, the pool that reports the current price and
//! the two SEP-41 tokens. Every call goes through the generated `try_*`
//! method and any failure surfaces as `ExternalCallFailed`.

use primitive_types::U256;
use soroban_sdk::{contractclient, log, symbol_short, token, Address, Env, Symbol};
use vault_math::from_token_amount;
use vault_math::invariants::sqrt_ratio_in_bounds;
use vault_types::{
    CollectParams, DecreaseLiquidityParams, IncreaseLiquidityParams, MintParams, PositionData,
    VaultConfig, VaultError,
};

#[contractclient(name = "PositionManagerClient")]
pub trait PositionManagerInterface {
    /// Returns (position_id, liquidity, amount0, amount1)
    fn mint(env: Env, params: MintParams) -> (u32, u128, i128, i128);
    /// Returns (liquidity, amount0, amount1)
    fn increase_liquidity(env: Env, params: IncreaseLiquidityParams) -> (u128, i128, i128);
    /// Returns (amount0, amount1) now owed to the position
    fn decrease_liquidity(env: Env, params: DecreaseLiquidityParams) -> (i128, i128);
    /// Returns (amount0, amount1) transferred to the recipient
    fn collect(env: Env, params: CollectParams) -> (u128, u128);
    fn get_position(env: Env, position_id: u32) -> PositionData;
}

#[contractclient(name = "PriceSourceClient")]
pub trait PriceSourceInterface {
    /// Returns (sqrt_price_x96, tick)
    fn current_price(env: Env) -> (soroban_sdk::U256, i32);
}

fn failed(env: &Env, call: Symbol) -> VaultError {
    log!(env, "external call failed", call);
    VaultError::ExternalCallFailed
}

fn deadline(env: &Env) -> u64 {
    env.ledger().timestamp()
}

// === Position manager ===

pub fn open_position(
    env: &Env,
    config: &VaultConfig,
    amount0_desired: i128,
    amount1_desired: i128,
    amount0_min: i128,
    amount1_min: i128,
) -> Result<(u32, u128, i128, i128), VaultError> {
    let client = PositionManagerClient::new(env, &config.position_manager);
    let params = MintParams {
        token0: config.token0.clone(),
        token1: config.token1.clone(),
        fee: config.fee,
        tick_lower: config.tick_lower,
        tick_upper: config.tick_upper,
        amount0_desired,
        amount1_desired,
        amount0_min,
        amount1_min,
        recipient: env.current_contract_address(),
        deadline: deadline(env),
    };
    match client.try_mint(&params) {
        Ok(Ok(result)) => Ok(result),
        _ => Err(failed(env, symbol_short!("mint"))),
    }
}

pub fn increase_liquidity(
    env: &Env,
    config: &VaultConfig,
    position_id: u32,
    amount0_desired: i128,
    amount1_desired: i128,
    amount0_min: i128,
    amount1_min: i128,
) -> Result<(u128, i128, i128), VaultError> {
    let client = PositionManagerClient::new(env, &config.position_manager);
    let params = IncreaseLiquidityParams {
        position_id,
        amount0_desired,
        amount1_desired,
        amount0_min,
        amount1_min,
        deadline: deadline(env),
    };
    match client.try_increase_liquidity(&params) {
        Ok(Ok(result)) => Ok(result),
        _ => Err(failed(env, symbol_short!("increase"))),
    }
}

pub fn decrease_liquidity(
    env: &Env,
    config: &VaultConfig,
    position_id: u32,
    liquidity: u128,
) -> Result<(u128, u128), VaultError> {
    let client = PositionManagerClient::new(env, &config.position_manager);
    let params = DecreaseLiquidityParams {
        position_id,
        liquidity,
        amount0_min: 0,
        amount1_min: 0,
        deadline: deadline(env),
    };
    // Amounts owed are never negative
    match client.try_decrease_liquidity(&params) {
        Ok(Ok((amount0, amount1))) => match (from_token_amount(amount0), from_token_amount(amount1)) {
            (Ok(amount0), Ok(amount1)) => Ok((amount0, amount1)),
            _ => Err(failed(env, symbol_short!("decrease"))),
        },
        _ => Err(failed(env, symbol_short!("decrease"))),
    }
}

/// Collect up to the given amounts from the position into the vault
pub fn collect(
    env: &Env,
    config: &VaultConfig,
    position_id: u32,
    amount0_max: u128,
    amount1_max: u128,
) -> Result<(u128, u128), VaultError> {
    let client = PositionManagerClient::new(env, &config.position_manager);
    let params = CollectParams {
        position_id,
        recipient: env.current_contract_address(),
        amount0_max,
        amount1_max,
    };
    match client.try_collect(&params) {
        Ok(Ok(result)) => Ok(result),
        _ => Err(failed(env, symbol_short!("collect"))),
    }
}

pub fn position_liquidity(
    env: &Env,
    config: &VaultConfig,
    position_id: u32,
) -> Result<u128, VaultError> {
    let client = PositionManagerClient::new(env, &config.position_manager);
    match client.try_get_position(&position_id) {
        Ok(Ok(position)) => Ok(position.liquidity),
        _ => Err(failed(env, symbol_short!("position"))),
    }
}

// === Price source ===

/// Current pool sqrt price, rejected if it is outside the representable range
pub fn current_sqrt_price(env: &Env, config: &VaultConfig) -> Result<U256, VaultError> {
    let client = PriceSourceClient::new(env, &config.pool);
    let sqrt_price_x96 = match client.try_current_price() {
        Ok(Ok((sqrt_price_x96, _tick))) => sqrt_price_from_host(&sqrt_price_x96),
        _ => return Err(failed(env, symbol_short!("price"))),
    };
    if !sqrt_ratio_in_bounds(sqrt_price_x96) {
        return Err(failed(env, symbol_short!("price")));
    }
    Ok(sqrt_price_x96)
}

pub fn sqrt_price_from_host(value: &soroban_sdk::U256) -> U256 {
    let mut buf = [0u8; 32];
    value.to_be_bytes().copy_into_slice(&mut buf);
    U256::from_big_endian(&buf)
}

pub fn sqrt_price_to_host(env: &Env, value: U256) -> soroban_sdk::U256 {
    let U256(limbs) = value;
    soroban_sdk::U256::from_parts(env, limbs[3], limbs[2], limbs[1], limbs[0])
}

// === Tokens ===

/// Vault-held balance of `token`, failing if the token reports a negative balance
pub fn idle_balance(env: &Env, token: &Address) -> Result<u128, VaultError> {
    match token::Client::new(env, token).try_balance(&env.current_contract_address()) {
        Ok(Ok(balance)) => {
            from_token_amount(balance).map_err(|_| failed(env, symbol_short!("balance")))
        }
        _ => Err(failed(env, symbol_short!("balance"))),
    }
}

pub fn transfer_token(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), VaultError> {
    if amount == 0 {
        return Ok(());
    }
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(failed(env, symbol_short!("transfer"))),
    }
}

/// Allow the position manager to pull exactly `amount` of `token` from the vault
pub fn approve_manager(
    env: &Env,
    config: &VaultConfig,
    token: &Address,
    amount: i128,
) -> Result<(), VaultError> {
    let expiration_ledger = env.ledger().sequence();
    match token::Client::new(env, token).try_approve(
        &env.current_contract_address(),
        &config.position_manager,
        &amount,
        &expiration_ledger,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => Err(failed(env, symbol_short!("approve"))),
    }
}
