use common_constants::MAX_LTV;
use common_errors::ERROR_EXCEEDED_MAX_ORIGINATION_LTV;
use common_math::Rounding;

multiversx_sc::imports!();

/// Stateless LTV rules. Every amount and ratio here is WAD.
///
/// Rounding always favours the protocol: debt capacity rounds down, the
/// collateral a debt needs and the LTV of a position round up.
#[multiversx_sc::module]
pub trait LtvModule: common_math::SharedMathModule {
    /// Largest debt `collateral` can back at `origination_ltv`.
    fn max_debt_for(
        &self,
        collateral: &ManagedDecimal<Self::Api, NumDecimals>,
        origination_ltv: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_div(collateral, origination_ltv, &self.wad(), Rounding::Down)
    }

    /// Smallest collateral that keeps `debt` within `origination_ltv`.
    fn min_collateral_for(
        &self,
        debt: &ManagedDecimal<Self::Api, NumDecimals>,
        origination_ltv: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_div(debt, &self.wad(), origination_ltv, Rounding::Up)
    }

    /// `debt / collateral`. Zero without debt, `MAX_LTV` when debt has no
    /// collateral behind it.
    fn calculate_ltv(
        &self,
        debt: &ManagedDecimal<Self::Api, NumDecimals>,
        collateral: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_zero(debt) {
            return self.wad_zero();
        }
        if self.is_zero(collateral) {
            return self.to_decimal_wad(BigUint::from(MAX_LTV));
        }

        self.mul_div(debt, &self.wad(), collateral, Rounding::Up)
    }

    fn validate_origination_ltv(
        &self,
        ltv: &ManagedDecimal<Self::Api, NumDecimals>,
        max_origination_ltv: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        require!(
            ltv <= max_origination_ltv,
            ERROR_EXCEEDED_MAX_ORIGINATION_LTV
        );
    }

    /// Positions without collateral have nothing to seize and never qualify.
    fn exceeds_liquidation_ltv(
        &self,
        collateral: &ManagedDecimal<Self::Api, NumDecimals>,
        current_ltv: &ManagedDecimal<Self::Api, NumDecimals>,
        liquidation_ltv: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> bool {
        !self.is_zero(collateral) && current_ltv > liquidation_ltv
    }

    /// Collateral paid to the liquidator: how far the collateral falls short
    /// of what the debt needs at `liquidation_ltv`, capped at the collateral.
    fn liquidation_incentive(
        &self,
        collateral: &ManagedDecimal<Self::Api, NumDecimals>,
        debt: &ManagedDecimal<Self::Api, NumDecimals>,
        liquidation_ltv: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let required_collateral =
            self.mul_div(debt, &self.wad(), liquidation_ltv, Rounding::Down);
        let shortfall = self.saturating_sub(&required_collateral, collateral);

        self.get_min(shortfall, collateral.clone())
    }

    /// `liquidation_ltv / current_ltv`; `MAX_LTV` for a position without debt.
    fn health_factor(
        &self,
        current_ltv: &ManagedDecimal<Self::Api, NumDecimals>,
        liquidation_ltv: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_zero(current_ltv) {
            return self.to_decimal_wad(BigUint::from(MAX_LTV));
        }

        self.mul_div(liquidation_ltv, &self.wad(), current_ltv, Rounding::Down)
    }
}
