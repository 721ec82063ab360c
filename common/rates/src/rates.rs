#![no_std]
use common_constants::{MAX_COMPOUNDING_TERMS, SECONDS_PER_YEAR, WAD_TO_RAY_FACTOR};
use common_math::Rounding;

multiversx_sc::imports!();

/// The InterestRates module compounds the global interest accumulator.
///
/// **Scope**: Continuous compounding of a fixed annual rate over elapsed seconds.
///
/// **Goal**: Keep debt growth deterministic and biased in favour of the protocol.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Computes `e^(rate * elapsed / SECONDS_PER_YEAR)` in RAY.
    ///
    /// **Formula**:
    /// - `x = rate * elapsed / SECONDS_PER_YEAR`, rate is WAD and lifted to RAY.
    /// - `e^x = sum(x^n / n!)`, each term derived from the previous one as
    ///   `term_n = term_(n-1) * x / n`, stopping once a term truncates to zero
    ///   or after `MAX_COMPOUNDING_TERMS` terms.
    /// - Terms are truncated, so the factor never overshoots the exact value by
    ///   more than the final rounding applied by the caller.
    ///
    /// # Arguments
    /// - `rate`: Annual continuously compounded rate (WAD).
    /// - `elapsed`: Seconds since the last accumulator update.
    ///
    /// # Returns
    /// - Growth factor (RAY), exactly `1` when `elapsed == 0` or `rate == 0`.
    fn continuously_compounded_factor(
        &self,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
        elapsed: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let ray = self.ray();

        if elapsed == 0 || self.is_zero(rate) {
            return ray;
        }

        let rate_ray = rate.into_raw_units() * &BigUint::from(WAD_TO_RAY_FACTOR);
        let x = self.mul_div_raw(
            &rate_ray,
            &BigUint::from(elapsed),
            &BigUint::from(SECONDS_PER_YEAR),
            Rounding::Down,
        );

        let ray_raw = ray.into_raw_units().clone();
        let mut sum = ray_raw.clone();
        let mut term = ray_raw.clone();

        for n in 1..=MAX_COMPOUNDING_TERMS {
            let denominator = &ray_raw * &BigUint::from(n);
            term = self.mul_div_raw(&term, &x, &denominator, Rounding::Down);
            if term == BigUint::zero() {
                break;
            }
            sum += &term;
        }

        self.to_decimal_ray(sum)
    }

    /// Compounds `accumulator` forward by `elapsed` seconds at `rate`.
    /// Rounded up, so the accumulator never decreases.
    fn compound_accumulator(
        &self,
        accumulator: &ManagedDecimal<Self::Api, NumDecimals>,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
        elapsed: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if elapsed == 0 {
            return accumulator.clone();
        }

        let factor = self.continuously_compounded_factor(rate, elapsed);
        self.mul_div(accumulator, &factor, &self.ray(), Rounding::Up)
    }

    /// Grows a debt figure checkpointed at `old_accumulator` to `new_accumulator`.
    fn scale_debt(
        &self,
        debt: &ManagedDecimal<Self::Api, NumDecimals>,
        new_accumulator: &ManagedDecimal<Self::Api, NumDecimals>,
        old_accumulator: &ManagedDecimal<Self::Api, NumDecimals>,
        rounding: Rounding,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_zero(debt) || new_accumulator == old_accumulator {
            return debt.clone();
        }

        self.mul_div(debt, new_accumulator, old_accumulator, rounding)
    }
}
