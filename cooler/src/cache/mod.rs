multiversx_sc::imports!();

/// In-memory view of the global debt state for the duration of one call.
///
/// Building it brings the interest accumulator and the total debt up to the
/// current block and pulls fresh LTVs from the oracle. Mutable fields are
/// written back when the cache is dropped, unless it was built with
/// [`Cache::read_only`].
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    /// Sum of all account collateral (WAD)
    pub total_collateral: ManagedDecimal<C::Api, NumDecimals>,
    /// Sum of all account debt as of `interest_accumulator` (WAD)
    pub total_debt: ManagedDecimal<C::Api, NumDecimals>,
    /// RAY, starts at one and never decreases
    pub interest_accumulator: ManagedDecimal<C::Api, NumDecimals>,
    pub interest_rate: ManagedDecimal<C::Api, NumDecimals>,
    pub updated_at: u64,
    pub timestamp: u64,
    pub origination_ltv: ManagedDecimal<C::Api, NumDecimals>,
    pub liquidation_ltv: ManagedDecimal<C::Api, NumDecimals>,
    commit: bool,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage
        + crate::oracle::OracleModule
        + common_rates::InterestRates
        + common_events::EventsModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let last_update = sc_ref.interest_accumulator_updated_at().get();
        let cache = Self::load(sc_ref, true);

        if last_update < cache.timestamp {
            sc_ref.accumulator_updated_event(
                cache.interest_accumulator.into_raw_units(),
                cache.total_debt.into_raw_units(),
                cache.timestamp,
            );
        }

        cache
    }

    /// Same snapshot as [`Cache::new`], never persisted.
    pub fn read_only(sc_ref: &'a C) -> Self {
        Self::load(sc_ref, false)
    }

    fn load(sc_ref: &'a C, commit: bool) -> Self {
        let (origination_ltv, liquidation_ltv) = sc_ref.current_ltvs();

        let mut cache = Cache {
            total_collateral: sc_ref.total_collateral().get(),
            total_debt: sc_ref.total_debt().get(),
            interest_accumulator: sc_ref.global_interest_accumulator().get(),
            interest_rate: sc_ref.interest_rate().get(),
            updated_at: sc_ref.interest_accumulator_updated_at().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            origination_ltv,
            liquidation_ltv,
            commit,
            sc_ref,
        };
        cache.accrue_interest();

        cache
    }

    /// Compounds the accumulator over the time elapsed since the last
    /// update and scales the total debt with it. No-op within a block.
    fn accrue_interest(&mut self) {
        if self.timestamp <= self.updated_at {
            return;
        }

        let elapsed = self.timestamp - self.updated_at;
        let new_accumulator = self.sc_ref.compound_accumulator(
            &self.interest_accumulator,
            &self.interest_rate,
            elapsed,
        );

        self.total_debt = self.sc_ref.scale_debt(
            &self.total_debt,
            &new_accumulator,
            &self.interest_accumulator,
            common_math::Rounding::Up,
        );
        self.interest_accumulator = new_accumulator;
        self.updated_at = self.timestamp;
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        if !self.commit {
            return;
        }

        self.sc_ref.total_collateral().set(&self.total_collateral);
        self.sc_ref.total_debt().set(&self.total_debt);
        self.sc_ref
            .global_interest_accumulator()
            .set(&self.interest_accumulator);
        self.sc_ref
            .interest_accumulator_updated_at()
            .set(self.updated_at);
    }
}
