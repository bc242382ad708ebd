mod liquidity_math_unit_tests;
mod tick_math_unit_tests;
