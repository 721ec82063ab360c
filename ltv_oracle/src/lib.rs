#![no_std]

pub mod storage;

use common_constants::{BPS, MAX_LIQUIDATION_LTV_PREMIUM_BPS, WAD_PRECISION};
pub use common_errors::*;
use common_structs::OriginationLtvData;

multiversx_sc::imports!();

/// Origination and liquidation LTVs for the cooler, denominated in debt
/// token per unit of collateral (WAD).
///
/// The origination LTV follows a linear ramp from the value it had when the
/// last target was set up to that target. It can only go up. The
/// liquidation LTV sits a fixed premium above it.
#[multiversx_sc::contract]
pub trait LtvOracle:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    #[init]
    fn init(
        &self,
        initial_origination_ltv: BigUint,
        max_origination_ltv: BigUint,
        min_origination_ltv_target_time_delta: u64,
        max_origination_ltv_rate_of_change: BigUint,
        liquidation_ltv_premium_bps: u64,
        max_liquidation_ltv_premium_bps: u64,
    ) {
        require!(initial_origination_ltv > 0, ERROR_INVALID_PARAM);
        require!(
            initial_origination_ltv <= max_origination_ltv,
            ERROR_BREACHED_MAX_ORIGINATION_LTV
        );
        require!(
            max_liquidation_ltv_premium_bps <= MAX_LIQUIDATION_LTV_PREMIUM_BPS,
            ERROR_INVALID_PARAM
        );
        require!(
            liquidation_ltv_premium_bps <= max_liquidation_ltv_premium_bps,
            ERROR_INVALID_PARAM
        );

        let now = self.blockchain().get_block_timestamp();
        let initial = self.to_decimal_wad(initial_origination_ltv);
        self.origination_ltv_data().set(OriginationLtvData {
            start_value: initial.clone(),
            start_time: now,
            target_value: initial,
            target_time: now,
            slope: self.wad_zero(),
        });

        self.max_origination_ltv()
            .set(self.to_decimal_wad(max_origination_ltv));
        self.min_origination_ltv_target_time_delta()
            .set(min_origination_ltv_target_time_delta);
        self.max_origination_ltv_rate_of_change()
            .set(self.to_decimal_wad(max_origination_ltv_rate_of_change));
        self.liquidation_ltv_premium_bps()
            .set(liquidation_ltv_premium_bps);
        self.max_liquidation_ltv_premium_bps()
            .set(max_liquidation_ltv_premium_bps);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Starts a linear ramp from the current origination LTV to
    /// `target_value`, reached at `target_time`.
    #[only_owner]
    #[endpoint(setOriginationLtvAt)]
    fn set_origination_ltv_at(&self, target_value: BigUint, target_time: u64) {
        let now = self.blockchain().get_block_timestamp();
        let min_delta = self.min_origination_ltv_target_time_delta().get();

        require!(target_time > now, ERROR_BREACHED_MIN_DATE_DELTA);
        require!(
            target_time - now >= min_delta,
            ERROR_BREACHED_MIN_DATE_DELTA
        );

        let target = self.to_decimal_wad(target_value);
        require!(
            target <= self.max_origination_ltv().get(),
            ERROR_BREACHED_MAX_ORIGINATION_LTV
        );

        let current = self.current_origination_ltv();
        require!(target >= current, ERROR_CANNOT_DECREASE_LTV);

        let time_delta = BigUint::from(target_time - now);
        let slope_raw = (target.into_raw_units() - current.into_raw_units()) / &time_delta;
        let slope = self.to_decimal_wad(slope_raw);
        require!(
            slope <= self.max_origination_ltv_rate_of_change().get(),
            ERROR_BREACHED_MAX_ORIGINATION_LTV_RATE_OF_CHANGE
        );

        self.origination_ltv_set_at_event(
            current.into_raw_units(),
            target.into_raw_units(),
            target_time,
        );

        self.origination_ltv_data().set(OriginationLtvData {
            start_value: current,
            start_time: now,
            target_value: target,
            target_time,
            slope,
        });
    }

    #[only_owner]
    #[endpoint(setLiquidationLtvPremiumBps)]
    fn set_liquidation_ltv_premium_bps(&self, premium_bps: u64) {
        require!(
            premium_bps <= self.max_liquidation_ltv_premium_bps().get(),
            ERROR_INVALID_PARAM
        );
        require!(
            premium_bps >= self.liquidation_ltv_premium_bps().get(),
            ERROR_CANNOT_DECREASE_LTV
        );

        self.liquidation_ltv_premium_bps().set(premium_bps);
        self.liquidation_ltv_premium_bps_set_event(premium_bps);
    }

    /// The cap can not go below the target already scheduled.
    #[only_owner]
    #[endpoint(setMaxOriginationLtv)]
    fn set_max_origination_ltv(&self, max_origination_ltv: BigUint) {
        let max = self.to_decimal_wad(max_origination_ltv);
        let data = self.origination_ltv_data().get();
        require!(
            max >= data.target_value,
            ERROR_BREACHED_MAX_ORIGINATION_LTV
        );

        self.max_origination_ltv().set(max);
        self.emit_limits();
    }

    #[only_owner]
    #[endpoint(setMinOriginationLtvTargetTimeDelta)]
    fn set_min_origination_ltv_target_time_delta(&self, min_target_time_delta: u64) {
        self.min_origination_ltv_target_time_delta()
            .set(min_target_time_delta);
        self.emit_limits();
    }

    #[only_owner]
    #[endpoint(setMaxOriginationLtvRateOfChange)]
    fn set_max_origination_ltv_rate_of_change(&self, max_rate_of_change: BigUint) {
        self.max_origination_ltv_rate_of_change()
            .set(self.to_decimal_wad(max_rate_of_change));
        self.emit_limits();
    }

    /// Returns `(origination_ltv, liquidation_ltv)` at the current block.
    #[view(currentLtvs)]
    fn current_ltvs(
        &self,
    ) -> MultiValue2<ManagedDecimal<Self::Api, NumDecimals>, ManagedDecimal<Self::Api, NumDecimals>>
    {
        let origination = self.current_origination_ltv();
        let liquidation = self.liquidation_ltv_from(&origination);

        (origination, liquidation).into()
    }

    #[view(currentOriginationLtv)]
    fn current_origination_ltv(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let now = self.blockchain().get_block_timestamp();
        self.origination_ltv_data().get().value_at(now)
    }

    #[view(currentLiquidationLtv)]
    fn current_liquidation_ltv(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let origination = self.current_origination_ltv();
        self.liquidation_ltv_from(&origination)
    }

    fn liquidation_ltv_from(
        &self,
        origination_ltv: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let premium = self.liquidation_ltv_premium_bps().get();
        let factor = BigUint::from(BPS + premium);
        let raw = origination_ltv.into_raw_units() * &factor / BigUint::from(BPS);

        ManagedDecimal::from_raw_units(raw, WAD_PRECISION)
    }

    fn emit_limits(&self) {
        self.oracle_limits_set_event(
            self.max_origination_ltv().get().into_raw_units(),
            self.min_origination_ltv_target_time_delta().get(),
            self.max_origination_ltv_rate_of_change().get().into_raw_units(),
        );
    }
}
