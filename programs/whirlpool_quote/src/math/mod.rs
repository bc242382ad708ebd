pub mod core_arithmetic;
pub mod fixed_point;
pub mod liquidity_math;
pub mod percentage;
pub mod price_math;
pub mod tick_math;
pub mod tick_spacing;


pub use liquidity_math::TokenAmounts;
pub use percentage::Percentage;
