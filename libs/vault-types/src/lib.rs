#![no_std]

mod config;
mod error;
mod events;
mod position;

pub use config::*;
pub use error::*;
pub use events::*;
pub use position::*;

use primitive_types::U256;

/// Q96 constant (2^96) for fixed-point math
pub const Q96: u128 = 1 << 96;

/// 2^96 as a 256-bit value
pub const Q96_U256: U256 = U256([0, 1 << 32, 0, 0]);

/// 2^128 as a 256-bit value
pub const Q128_U256: U256 = U256([0, 0, 1, 0]);

/// Minimum tick index, sqrt(1.0001^-887272) is the smallest representable Q64.96 price
pub const MIN_TICK: i32 = -887272;

/// Maximum tick index
pub const MAX_TICK: i32 = 887272;

/// Sqrt price at MIN_TICK: 4295128739
pub const MIN_SQRT_RATIO: U256 = U256([4295128739, 0, 0, 0]);

/// Sqrt price at MAX_TICK: 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_RATIO: U256 = U256([
    0x5d951d5263988d26,
    0xefd1fc6a50648849,
    0xfffd8963,
    0,
]);

/// Upper bound for management and performance fees (20%)
pub const MAX_FEE_BPS: u32 = 2000;

/// Fixed-point scale of `share_price`, also the price reported before any deposit
pub const PRICE_PRECISION: u128 = 1_000_000_000_000_000_000;
