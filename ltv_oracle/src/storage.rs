use common_structs::OriginationLtvData;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    #[view(getOriginationLtvData)]
    #[storage_mapper("origination_ltv_data")]
    fn origination_ltv_data(&self) -> SingleValueMapper<OriginationLtvData<Self::Api>>;

    #[view(getLiquidationLtvPremiumBps)]
    #[storage_mapper("liquidation_ltv_premium_bps")]
    fn liquidation_ltv_premium_bps(&self) -> SingleValueMapper<u64>;

    #[view(getMaxLiquidationLtvPremiumBps)]
    #[storage_mapper("max_liquidation_ltv_premium_bps")]
    fn max_liquidation_ltv_premium_bps(&self) -> SingleValueMapper<u64>;

    #[view(getMaxOriginationLtv)]
    #[storage_mapper("max_origination_ltv")]
    fn max_origination_ltv(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Minimum seconds between a new target being set and it being reached
    #[view(getMinOriginationLtvTargetTimeDelta)]
    #[storage_mapper("min_origination_ltv_target_time_delta")]
    fn min_origination_ltv_target_time_delta(&self) -> SingleValueMapper<u64>;

    /// WAD per second
    #[view(getMaxOriginationLtvRateOfChange)]
    #[storage_mapper("max_origination_ltv_rate_of_change")]
    fn max_origination_ltv_rate_of_change(
        &self,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;
}
