use soroban_sdk::{contracttype, Address};

/// Vault configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// Owner allowed to change fees, collect fees and trigger emergency withdrawal
    pub owner: Address,
    /// Position manager contract that holds the vault's single position
    pub position_manager: Address,
    /// Pool backing the position, queried for the current sqrt price
    pub pool: Address,
    /// Token0 address
    pub token0: Address,
    /// Token1 address
    pub token1: Address,
    /// Pool fee tier in hundredths of bps
    pub fee: u32,
    /// Lower tick boundary of the vault range
    pub tick_lower: i32,
    /// Upper tick boundary of the vault range
    pub tick_upper: i32,
}

/// Fee parameters in basis points
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeeConfig {
    pub management_fee: u32,
    pub performance_fee: u32,
}
