// ============================================================================
// INVARIANTS - properties the vault must preserve across every operation
// ============================================================================
//
// 1. PRICE:        sqrt prices stay inside [MIN_SQRT_RATIO, MAX_SQRT_RATIO]
// 2. RANGE:        tick_lower < tick_upper, both inside [MIN_TICK, MAX_TICK]
// 3. REDEMPTION:   payout <= shares / total_supply of what the vault holds
// 4. ISSUANCE:     minted / supply_before <= liquidity_added / liquidity_before
//
// Checked with debug_assert! in the contract and exercised directly in tests.
// ============================================================================

use primitive_types::U256;
use vault_types::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};

/// Property: MIN_SQRT_RATIO <= sqrt_price_x96 <= MAX_SQRT_RATIO
pub fn sqrt_ratio_in_bounds(sqrt_price_x96: U256) -> bool {
    sqrt_price_x96 >= MIN_SQRT_RATIO && sqrt_price_x96 <= MAX_SQRT_RATIO
}

/// Property: MIN_TICK <= tick_lower < tick_upper <= MAX_TICK
pub fn range_is_valid(tick_lower: i32, tick_upper: i32) -> bool {
    tick_lower >= MIN_TICK && tick_upper <= MAX_TICK && tick_lower < tick_upper
}

/// Property: payout * total_supply <= holdings * shares
///
/// The redeemer never receives more than its exact proportional claim.
pub fn payout_within_claim(payout: u128, holdings: u128, shares: u128, total_supply: u128) -> bool {
    if total_supply == 0 {
        return payout == 0;
    }
    U256::from(payout) * U256::from(total_supply) <= U256::from(holdings) * U256::from(shares)
}

/// Property: minted * liquidity_before <= liquidity_added * supply_before
///
/// A depositor never receives a larger fraction of the supply than the
/// fraction of liquidity it contributed. Bootstrap deposits are exempt.
pub fn mint_within_contribution(
    minted: u128,
    liquidity_added: u128,
    supply_before: u128,
    liquidity_before: u128,
) -> bool {
    if supply_before == 0 || liquidity_before == 0 {
        return minted == liquidity_added;
    }
    U256::from(minted) * U256::from(liquidity_before)
        <= U256::from(liquidity_added) * U256::from(supply_before)
}
