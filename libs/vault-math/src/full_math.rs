use primitive_types::{U256, U512};
use vault_types::VaultError;

/// Multiply and divide with 512-bit intermediate precision (rounds down)
/// Returns floor((a * b) / denominator)
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, VaultError> {
    if denominator.is_zero() {
        return Err(VaultError::DivisionByZero);
    }

    let product = a.full_mul(b);
    let result = product / U512::from(denominator);

    U256::try_from(result).map_err(|_| VaultError::MathOverflow)
}

/// `mul_div` over u128 operands, failing if the quotient does not fit
pub fn mul_div_u128(a: u128, b: u128, denominator: u128) -> Result<u128, VaultError> {
    let result = mul_div(U256::from(a), U256::from(b), U256::from(denominator))?;
    to_u128(result)
}

/// Narrow U256 to u128
pub fn to_u128(value: U256) -> Result<u128, VaultError> {
    if value > U256::from(u128::MAX) {
        return Err(VaultError::MathOverflow);
    }
    Ok(value.low_u128())
}

/// Narrow an unsigned amount to a token amount (SEP-41 tokens use i128)
pub fn to_token_amount(value: u128) -> Result<i128, VaultError> {
    i128::try_from(value).map_err(|_| VaultError::MathOverflow)
}

/// Widen a token amount, rejecting negative values
pub fn from_token_amount(value: i128) -> Result<u128, VaultError> {
    u128::try_from(value).map_err(|_| VaultError::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u128) -> U256 {
        U256::from(v)
    }

    #[test]
    fn test_mul_div_basic() {
        assert_eq!(mul_div(u(10), u(20), u(5)), Ok(u(40)));
    }

    #[test]
    fn test_mul_div_rounds_down() {
        assert_eq!(mul_div(u(1), u(1), u(2)), Ok(u(0)));
        assert_eq!(mul_div(u(3), u(1), u(2)), Ok(u(1)));
        assert_eq!(mul_div(u(7), u(11), u(13)), Ok(u(5)));
    }

    #[test]
    fn test_mul_div_phantom_overflow() {
        // a * b overflows 256 bits but the quotient fits
        let a = U256::MAX;
        let b = u(1) << 100u32;
        assert_eq!(mul_div(a, b, b), Ok(U256::MAX));

        let half = U256::MAX / u(2);
        assert_eq!(mul_div(half, u(4), u(4)), Ok(half));
    }

    #[test]
    fn test_mul_div_overflowing_result() {
        assert_eq!(
            mul_div(U256::MAX, u(2), u(1)),
            Err(VaultError::MathOverflow)
        );
    }

    #[test]
    fn test_mul_div_zero_denominator() {
        assert_eq!(mul_div(u(10), u(20), u(0)), Err(VaultError::DivisionByZero));
        assert_eq!(mul_div_u128(10, 20, 0), Err(VaultError::DivisionByZero));
    }

    #[test]
    fn test_mul_div_u128_max_values() {
        let max = u128::MAX;
        assert_eq!(mul_div_u128(max, max, max), Ok(max));
        assert_eq!(mul_div_u128(max, 2, 1), Err(VaultError::MathOverflow));
    }

    #[test]
    fn test_mul_div_q96_operations() {
        let q96 = 1u128 << 96;
        assert_eq!(mul_div_u128(1, q96, q96), Ok(1));
        assert_eq!(mul_div_u128(q96, q96, q96), Ok(q96));
    }

    #[test]
    fn test_to_u128_bounds() {
        assert_eq!(to_u128(u(u128::MAX)), Ok(u128::MAX));
        assert_eq!(
            to_u128(u(u128::MAX) + u(1)),
            Err(VaultError::MathOverflow)
        );
    }

    #[test]
    fn test_token_amount_conversions() {
        assert_eq!(to_token_amount(5), Ok(5));
        assert_eq!(to_token_amount(i128::MAX as u128), Ok(i128::MAX));
        assert_eq!(
            to_token_amount(i128::MAX as u128 + 1),
            Err(VaultError::MathOverflow)
        );
        assert_eq!(from_token_amount(7), Ok(7));
        assert_eq!(from_token_amount(-1), Err(VaultError::InvalidInput));
    }
}
