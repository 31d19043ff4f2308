use soroban_sdk::{Address, Env, Symbol};
use vault_types::{
    DepositRecord, EmergencyWithdrawRecord, FeeUpdateRecord, FeesCollectedRecord, WithdrawRecord,
};

pub fn deposit(env: &Env, record: &DepositRecord) {
    env.events().publish(
        (Symbol::new(env, "deposit"), record.depositor.clone()),
        record.clone(),
    );
}

pub fn withdraw(env: &Env, record: &WithdrawRecord) {
    env.events().publish(
        (Symbol::new(env, "withdraw"), record.redeemer.clone()),
        record.clone(),
    );
}

pub fn fees_updated(env: &Env, management_fee: u32, performance_fee: u32) {
    env.events().publish(
        (Symbol::new(env, "fees_updated"),),
        FeeUpdateRecord {
            management_fee,
            performance_fee,
        },
    );
}

pub fn fees_collected(env: &Env, amount0: u128, amount1: u128) {
    env.events().publish(
        (Symbol::new(env, "fees_collected"),),
        FeesCollectedRecord { amount0, amount1 },
    );
}

pub fn emergency_withdraw(env: &Env, recipient: &Address, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "emergency_withdraw"), recipient.clone()),
        EmergencyWithdrawRecord {
            recipient: recipient.clone(),
            amount0,
            amount1,
        },
    );
}
