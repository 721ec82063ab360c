#![no_std]

pub mod proxy_cooler;
pub mod proxy_delegate_escrow;
pub mod proxy_dlgte;
pub mod proxy_ltv_oracle;
pub mod proxy_staking;
pub mod proxy_treasury;
