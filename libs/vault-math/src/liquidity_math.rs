use crate::full_math::{mul_div, to_u128};
use primitive_types::U256;
use vault_types::{VaultError, Q96_U256};

fn ordered(sqrt_ratio_a_x96: U256, sqrt_ratio_b_x96: U256) -> (U256, U256) {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    }
}

/// Get amounts from liquidity for a price range
///
/// Both amounts are rounded down: the result never exceeds what the
/// position can actually deliver.
pub fn get_amounts_for_liquidity(
    sqrt_ratio_x96: U256,
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<(u128, u128), VaultError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_x96 <= sqrt_ratio_lower {
        // Below range - all token0
        let amount0 = get_amount0_for_liquidity(sqrt_ratio_lower, sqrt_ratio_upper, liquidity)?;
        Ok((amount0, 0))
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        // In range - both tokens
        let amount0 = get_amount0_for_liquidity(sqrt_ratio_x96, sqrt_ratio_upper, liquidity)?;
        let amount1 = get_amount1_for_liquidity(sqrt_ratio_lower, sqrt_ratio_x96, liquidity)?;
        Ok((amount0, amount1))
    } else {
        // Above range - all token1
        let amount1 = get_amount1_for_liquidity(sqrt_ratio_lower, sqrt_ratio_upper, liquidity)?;
        Ok((0, amount1))
    }
}

/// Calculate amount0 from liquidity
/// amount0 = L * 2^96 * (sqrt_pb - sqrt_pa) / sqrt_pb / sqrt_pa
pub fn get_amount0_for_liquidity(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<u128, VaultError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_lower.is_zero() {
        return Err(VaultError::InvalidInput);
    }

    let numerator = U256::from(liquidity) << 96u32;
    let amount0 = mul_div(
        numerator,
        sqrt_ratio_upper - sqrt_ratio_lower,
        sqrt_ratio_upper,
    )? / sqrt_ratio_lower;

    to_u128(amount0)
}

/// Calculate amount1 from liquidity
/// amount1 = L * (sqrt_pb - sqrt_pa) / 2^96
pub fn get_amount1_for_liquidity(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<u128, VaultError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let amount1 = mul_div(
        U256::from(liquidity),
        sqrt_ratio_upper - sqrt_ratio_lower,
        Q96_U256,
    )?;

    to_u128(amount1)
}

/// Calculate the largest liquidity that the given amounts can fund at the current price
pub fn get_liquidity_for_amounts(
    sqrt_ratio_x96: U256,
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: u128,
    amount1: u128,
) -> Result<u128, VaultError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_x96 <= sqrt_ratio_lower {
        get_liquidity_for_amount0(sqrt_ratio_lower, sqrt_ratio_upper, amount0)
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        let liquidity0 = get_liquidity_for_amount0(sqrt_ratio_x96, sqrt_ratio_upper, amount0)?;
        let liquidity1 = get_liquidity_for_amount1(sqrt_ratio_lower, sqrt_ratio_x96, amount1)?;
        Ok(liquidity0.min(liquidity1))
    } else {
        get_liquidity_for_amount1(sqrt_ratio_lower, sqrt_ratio_upper, amount1)
    }
}

/// Calculate liquidity from amount0
/// L = amount0 * (sqrt_pa * sqrt_pb / 2^96) / (sqrt_pb - sqrt_pa)
pub fn get_liquidity_for_amount0(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: u128,
) -> Result<u128, VaultError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let intermediate = mul_div(sqrt_ratio_lower, sqrt_ratio_upper, Q96_U256)?;
    let liquidity = mul_div(
        U256::from(amount0),
        intermediate,
        sqrt_ratio_upper - sqrt_ratio_lower,
    )?;

    to_u128(liquidity)
}

/// Calculate liquidity from amount1
/// L = amount1 * 2^96 / (sqrt_pb - sqrt_pa)
pub fn get_liquidity_for_amount1(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount1: u128,
) -> Result<u128, VaultError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let liquidity = mul_div(
        U256::from(amount1),
        Q96_U256,
        sqrt_ratio_upper - sqrt_ratio_lower,
    )?;

    to_u128(liquidity)
}
