use soroban_sdk::{contracttype, Address};

/// Position data reported by the position manager
#[contracttype]
#[derive(Clone, Debug)]
pub struct PositionData {
    /// Pool contract address
    pub pool: Address,
    /// Lower tick boundary
    pub tick_lower: i32,
    /// Upper tick boundary
    pub tick_upper: i32,
    /// Liquidity amount
    pub liquidity: u128,
    /// Fee growth inside at last action (token0)
    pub fee_growth_inside_0_last_x128: u128,
    /// Fee growth inside at last action (token1)
    pub fee_growth_inside_1_last_x128: u128,
    /// Tokens owed (token0)
    pub tokens_owed_0: u128,
    /// Tokens owed (token1)
    pub tokens_owed_1: u128,
}

/// Open a new position
#[contracttype]
#[derive(Clone)]
pub struct MintParams {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub recipient: Address,
    pub deadline: u64,
}

/// Add liquidity to an existing position
#[contracttype]
#[derive(Clone)]
pub struct IncreaseLiquidityParams {
    pub position_id: u32,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub deadline: u64,
}

/// Remove liquidity from a position; proceeds become owed tokens until collected
#[contracttype]
#[derive(Clone)]
pub struct DecreaseLiquidityParams {
    pub position_id: u32,
    pub liquidity: u128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub deadline: u64,
}

/// Pull owed tokens out of a position
#[contracttype]
#[derive(Clone)]
pub struct CollectParams {
    pub position_id: u32,
    pub recipient: Address,
    pub amount0_max: u128,
    pub amount1_max: u128,
}
