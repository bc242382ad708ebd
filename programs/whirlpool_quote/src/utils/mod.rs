pub mod constants;
pub mod pda;
pub mod swap_util;
