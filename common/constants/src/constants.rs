#![no_std]

pub const SECONDS_PER_DAY: u64 = 86_400;
/// Interest is quoted per 365 day year.
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Token amounts, LTVs and the annual interest rate are WAD scaled
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;
pub const WAD_TO_RAY_FACTOR: u128 = 1_000_000_000;

pub const BPS: u64 = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Both the collateral and the debt token must be 18 decimals
pub const EXPECTED_TOKEN_DECIMALS: usize = 18;

/// Upper bound on the annual interest rate (10%)
pub const MAX_INTEREST_RATE: u128 = 100_000_000_000_000_000;

/// Number of delegates an account may use when no policy has overridden it
pub const DEFAULT_MAX_DELEGATE_ADDRESSES: u32 = 10;

/// Hard stop for the continuous compounding series
pub const MAX_COMPOUNDING_TERMS: u32 = 40;

/// Upper bound for `current_ltv` when an account has debt but no collateral
pub const MAX_LTV: u128 = u128::MAX;

/// Cap on the liquidation LTV premium (100%)
pub const MAX_LIQUIDATION_LTV_PREMIUM_BPS: u64 = BPS;

pub const AUTHORIZATION_DOMAIN_TAG: &[u8] = b"CoolerAuthorization";
