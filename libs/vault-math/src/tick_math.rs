use primitive_types::U256;
use vault_types::{VaultError, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q128_U256};

/// sqrt(1.0001^-1) in Q128, the starting ratio for odd ticks
const SQRT_1_0001_NEG_1: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// sqrt(1.0001^-(2^i)) in Q128 for bits 1..=19 of the absolute tick
const TICK_BIT_FACTORS: [(u32, u128); 19] = [
    (0x2, 0xfff97272373d413259a46990580e213a),
    (0x4, 0xfff2e50f5f656932ef12357cf3c7fdcc),
    (0x8, 0xffe5caca7e10e4e61c3624eaa0941cd0),
    (0x10, 0xffcb9843d60f6159c9db58835c926644),
    (0x20, 0xff973b41fa98c081472e6896dfb254c0),
    (0x40, 0xff2ea16466c96a3843ec78b326b52861),
    (0x80, 0xfe5dee046a99a2a811c461f1969c3053),
    (0x100, 0xfcbe86c7900a88aedcffc83b479aa3a4),
    (0x200, 0xf987a7253ac413176f2b074cf7815e54),
    (0x400, 0xf3392b0822b70005940c7a398e4b70f3),
    (0x800, 0xe7159475a2c29b7443b29c7fa6e889d9),
    (0x1000, 0xd097f3bdfd2022b8845ad8f792aa5825),
    (0x2000, 0xa9f746462d870fdf8a65dc1f90e061e5),
    (0x4000, 0x70d869a156d2a1b890bb3df62baf32f7),
    (0x8000, 0x31be135f97d08fd981231505542fcfa6),
    (0x10000, 0x9aa508b5b7a84e1c677de54f3e99bc9),
    (0x20000, 0x5d6af8dedb81196699c329225ee604),
    (0x40000, 0x2216e584f5fa1ea926041bedfe98),
    (0x80000, 0x48a170391f7dc42444e8fa2),
];

/// Calculate sqrt(1.0001^tick) * 2^96
///
/// Bit-exact with the AMM's own Q64.96 representation: the ratio for
/// -|tick| is built in Q128 from the precomputed factors, inverted for
/// positive ticks and rounded up when converting to Q96.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256, VaultError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(VaultError::OutOfRange);
    }

    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(SQRT_1_0001_NEG_1)
    } else {
        Q128_U256
    };

    // ratio <= 2^128 and every factor < 2^128, so the product fits in 256 bits
    for (mask, factor) in TICK_BIT_FACTORS {
        if abs_tick & mask != 0 {
            ratio = (ratio * U256::from(factor)) >> 128u32;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128 -> Q96, rounding up so the price never undershoots the tick
    let mut sqrt_price_x96 = ratio >> 32u32;
    if ratio.low_u32() != 0 {
        sqrt_price_x96 = sqrt_price_x96 + U256::one();
    }

    Ok(sqrt_price_x96.max(MIN_SQRT_RATIO).min(MAX_SQRT_RATIO))
}
