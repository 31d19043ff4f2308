use soroban_sdk::{contracttype, Address};

/// Published on every successful deposit. Amounts are what the
/// position manager consumed, not what the depositor offered.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRecord {
    pub depositor: Address,
    pub amount0: i128,
    pub amount1: i128,
    pub shares_minted: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawRecord {
    pub redeemer: Address,
    pub shares_burned: u128,
    pub amount0: i128,
    pub amount1: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeUpdateRecord {
    pub management_fee: u32,
    pub performance_fee: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesCollectedRecord {
    pub amount0: u128,
    pub amount1: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawRecord {
    pub recipient: Address,
    pub amount0: i128,
    pub amount1: i128,
}
