#![no_std]

use common_constants::{BPS, BPS_PRECISION, RAY, RAY_PRECISION, WAD, WAD_PRECISION};

multiversx_sc::imports!();

/// Direction in which an inexact division is resolved.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rounding {
    Down,
    Up,
}

#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b / denominator` on raw integers, rounded in the requested direction.
    ///
    /// The product is kept at full width before dividing, so the only
    /// precision loss is the final division.
    fn mul_div_raw(
        &self,
        a: &BigUint,
        b: &BigUint,
        denominator: &BigUint,
        rounding: Rounding,
    ) -> BigUint {
        let product = a * b;
        let quotient = &product / denominator;

        if rounding == Rounding::Up && &quotient * denominator < product {
            quotient + BigUint::from(1u64)
        } else {
            quotient
        }
    }

    /// Decimal flavour of `mul_div_raw`. The result scale is
    /// `a.scale() + b.scale() - denominator.scale()`, so `wad * ray / ray`
    /// stays WAD and `wad * wad / wad` stays WAD.
    fn mul_div(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        denominator: &ManagedDecimal<Self::Api, NumDecimals>,
        rounding: Rounding,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let precision = a.scale() + b.scale() - denominator.scale();
        let raw = self.mul_div_raw(
            a.into_raw_units(),
            b.into_raw_units(),
            denominator.into_raw_units(),
            rounding,
        );

        self.to_decimal(raw, precision)
    }

    /// `a - b`, floored at zero. Scales must match.
    fn saturating_sub(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a > b {
            a.clone() - b.clone()
        } else {
            self.to_decimal(BigUint::zero(), a.scale())
        }
    }

    fn is_zero(&self, value: &ManagedDecimal<Self::Api, NumDecimals>) -> bool {
        value.into_raw_units() == &BigUint::zero()
    }

    fn to_decimal_wad(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    /// Zero at WAD scale.
    fn wad_zero(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn ray_zero(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_ray(BigUint::zero())
    }

    fn to_decimal_ray(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn ray(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(RAY), RAY_PRECISION)
    }

    fn wad(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn bps(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(BPS), BPS_PRECISION)
    }

    fn to_decimal(
        self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn get_min(
        self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a < b {
            a
        } else {
            b
        }
    }
}
