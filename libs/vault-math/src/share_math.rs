//! Share issuance and redemption arithmetic.
//!
//! Shares are denominated in liquidity units: the first deposit into an
//! empty vault mints exactly the liquidity it added, later deposits mint
//! pro rata to the liquidity already in the position. Every division
//! rounds down, so rounding dust stays with the vault.

use crate::full_math::mul_div_u128;
use vault_types::{VaultError, PRICE_PRECISION};

/// Shares to mint for `liquidity_added`, given the state observed before the deposit
pub fn shares_for_deposit(
    total_supply_before: u128,
    liquidity_before: u128,
    liquidity_added: u128,
) -> Result<u128, VaultError> {
    let shares = if total_supply_before == 0 || liquidity_before == 0 {
        liquidity_added
    } else {
        mul_div_u128(liquidity_added, total_supply_before, liquidity_before)?
    };

    if shares == 0 {
        return Err(VaultError::ZeroShares);
    }
    Ok(shares)
}

/// floor(amount * shares / total_supply); zero when nothing has been issued
pub fn pro_rata(amount: u128, shares: u128, total_supply: u128) -> Result<u128, VaultError> {
    if total_supply == 0 {
        return Ok(0);
    }
    if shares > total_supply {
        return Err(VaultError::InsufficientBalance);
    }
    if amount == 0 || shares == 0 {
        return Ok(0);
    }
    mul_div_u128(amount, shares, total_supply)
}

/// What a redemption of `shares` takes out of the vault
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WithdrawalPlan {
    /// Liquidity to decrease on the position
    pub liquidity_to_remove: u128,
    /// Pro-rata part of the idle token0 balance
    pub idle0: u128,
    /// Pro-rata part of the idle token1 balance
    pub idle1: u128,
}

/// Split a redemption into liquidity to remove and idle balance to release
///
/// Used by both `withdraw` and `preview_withdraw` so the two agree to the unit.
pub fn plan_withdrawal(
    shares: u128,
    total_supply: u128,
    liquidity: u128,
    idle0: u128,
    idle1: u128,
) -> Result<WithdrawalPlan, VaultError> {
    Ok(WithdrawalPlan {
        liquidity_to_remove: pro_rata(liquidity, shares, total_supply)?,
        idle0: pro_rata(idle0, shares, total_supply)?,
        idle1: pro_rata(idle1, shares, total_supply)?,
    })
}

/// Raw sum of both assets, no cross-asset price normalization
pub fn total_value(amount0: u128, amount1: u128) -> Result<u128, VaultError> {
    amount0.checked_add(amount1).ok_or(VaultError::MathOverflow)
}

/// Value per share scaled by 1e18; 1e18 while no shares exist
pub fn share_price(total_value: u128, total_supply: u128) -> Result<u128, VaultError> {
    if total_supply == 0 {
        return Ok(PRICE_PRECISION);
    }
    mul_div_u128(total_value, PRICE_PRECISION, total_supply)
}

#[cfg(test)]
mod tests {
    use super::*;

    // === deposits ===

    #[test]
    fn test_bootstrap_mints_liquidity_one_to_one() {
        assert_eq!(shares_for_deposit(0, 0, 300), Ok(300));
    }

    #[test]
    fn test_second_deposit_is_proportional() {
        assert_eq!(shares_for_deposit(300, 300, 150), Ok(150));
        // position grew through fees: same liquidity buys fewer shares
        assert_eq!(shares_for_deposit(300, 400, 150), Ok(112));
    }

    #[test]
    fn test_empty_position_with_outstanding_shares_rebootstraps() {
        assert_eq!(shares_for_deposit(500, 0, 42), Ok(42));
    }

    #[test]
    fn test_zero_share_deposit_fails() {
        assert_eq!(shares_for_deposit(0, 0, 0), Err(VaultError::ZeroShares));
        // 1 * 10 / 1000 rounds to zero
        assert_eq!(shares_for_deposit(10, 1000, 1), Err(VaultError::ZeroShares));
    }

    #[test]
    fn test_deposit_shares_handle_large_values() {
        let big = u128::MAX / 2;
        assert_eq!(shares_for_deposit(big, big, big), Ok(big));
    }

    // === withdrawals ===

    #[test]
    fn test_full_redemption_takes_everything() {
        let plan = plan_withdrawal(300, 300, 12_345, 77, 99).unwrap();
        assert_eq!(
            plan,
            WithdrawalPlan {
                liquidity_to_remove: 12_345,
                idle0: 77,
                idle1: 99,
            }
        );
    }

    #[test]
    fn test_partial_redemption_rounds_down() {
        let plan = plan_withdrawal(1, 3, 10, 10, 2).unwrap();
        assert_eq!(plan.liquidity_to_remove, 3);
        assert_eq!(plan.idle0, 3);
        assert_eq!(plan.idle1, 0);
    }

    #[test]
    fn test_withdrawal_proportionality() {
        let supply = 1_000_003u128;
        let liquidity = 987_654_321u128;
        let one = plan_withdrawal(1_000, supply, liquidity, 5_555, 0).unwrap();
        let three = plan_withdrawal(3_000, supply, liquidity, 5_555, 0).unwrap();

        // linear up to one unit of rounding per source
        assert!(three.liquidity_to_remove >= 3 * one.liquidity_to_remove);
        assert!(three.liquidity_to_remove <= 3 * one.liquidity_to_remove + 2);
        assert!(three.idle0 >= 3 * one.idle0);
        assert!(three.idle0 <= 3 * one.idle0 + 2);
    }

    #[test]
    fn test_redemption_never_exceeds_claim() {
        let supply = 997u128;
        for shares in 1..=supply {
            let plan = plan_withdrawal(shares, supply, 1_000_003, 10_007, 13).unwrap();
            assert!(plan.liquidity_to_remove * supply <= 1_000_003 * shares);
            assert!(plan.idle0 * supply <= 10_007 * shares);
            assert!(plan.idle1 * supply <= 13 * shares);
        }
    }

    #[test]
    fn test_empty_vault_plan_is_zero() {
        assert_eq!(plan_withdrawal(10, 0, 0, 0, 0), Ok(WithdrawalPlan::default()));
    }

    #[test]
    fn test_redeeming_more_than_supply_fails() {
        assert_eq!(
            plan_withdrawal(11, 10, 100, 0, 0),
            Err(VaultError::InsufficientBalance)
        );
        // an empty position and no idle balance do not hide the overdraw
        assert_eq!(
            plan_withdrawal(11, 10, 0, 0, 0),
            Err(VaultError::InsufficientBalance)
        );
        assert_eq!(pro_rata(0, 11, 10), Err(VaultError::InsufficientBalance));
    }

    // === valuation ===

    #[test]
    fn test_share_price_defaults_before_first_deposit() {
        assert_eq!(share_price(0, 0), Ok(PRICE_PRECISION));
        assert_eq!(share_price(12_345, 0), Ok(PRICE_PRECISION));
    }

    #[test]
    fn test_share_price_scaled() {
        assert_eq!(share_price(200, 100), Ok(2 * PRICE_PRECISION));
        assert_eq!(share_price(1, 3), Ok(333_333_333_333_333_333));
    }

    #[test]
    fn test_total_value_sums_assets() {
        assert_eq!(total_value(100, 200), Ok(300));
        assert_eq!(total_value(u128::MAX, 1), Err(VaultError::MathOverflow));
    }
}
