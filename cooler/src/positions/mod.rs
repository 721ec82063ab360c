pub mod borrow;
pub mod collateral;
pub mod debt;
pub mod liquidation;
pub mod repay;
