pub mod borrow;
pub mod collateral;
pub mod supply;
