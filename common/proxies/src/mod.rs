#![no_std]

pub mod pool_proxy;
pub mod price_oracle_proxy;
