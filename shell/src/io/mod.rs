//! Side-effecting helpers.

pub mod check;
pub mod ensure;
pub mod git;
pub mod print;
pub mod process;
