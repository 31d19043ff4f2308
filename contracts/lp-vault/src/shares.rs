use crate::storage::{get_balance, get_total_supply, set_balance, set_total_supply};
use soroban_sdk::{Address, Env};
use vault_types::VaultError;

pub fn balance_of(env: &Env, holder: &Address) -> u128 {
    get_balance(env, holder)
}

pub fn total_supply(env: &Env) -> u128 {
    get_total_supply(env)
}

pub fn mint(env: &Env, to: &Address, amount: u128) -> Result<(), VaultError> {
    let balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;
    set_balance(env, to, balance);
    set_total_supply(env, supply);
    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: u128) -> Result<(), VaultError> {
    let balance = get_balance(env, from);
    if amount > balance {
        return Err(VaultError::InsufficientBalance);
    }
    set_balance(env, from, balance - amount);
    set_total_supply(env, get_total_supply(env) - amount);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), VaultError> {
    if amount == 0 {
        return Err(VaultError::InvalidInput);
    }
    let from_balance = get_balance(env, from);
    if amount > from_balance {
        return Err(VaultError::InsufficientBalance);
    }
    if from == to {
        return Ok(());
    }
    set_balance(env, from, from_balance - amount);
    set_balance(env, to, get_balance(env, to) + amount);
    Ok(())
}
