use common_errors::{ERROR_INVALID_AMOUNT, ERROR_MIN_DEBT_NOT_MET};
use common_math::Rounding;
use common_proxies::proxy_treasury;
use common_structs::AmountRequest;

use crate::{cache::Cache, ltv, storage};

use super::debt;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait BorrowModule:
    storage::Storage
    + ltv::LtvModule
    + debt::DebtModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Adds debt to a position and has the treasury borrower fund
    /// `recipient`.
    ///
    /// Existing debt is valued rounded down, which is what sizes a `Max`
    /// request. The resulting position must stay at or below the
    /// origination LTV and hold at least the minimum debt.
    ///
    /// # Returns
    /// - The amount borrowed.
    fn process_borrow(
        &self,
        caller: &ManagedAddress,
        on_behalf_of: &ManagedAddress,
        recipient: &ManagedAddress,
        amount: AmountRequest<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let mut state = self.load_account_state(on_behalf_of);
        let current_debt = self.account_debt(&state, cache, Rounding::Down);

        let borrowed = match amount {
            AmountRequest::Exact(value) => {
                require!(value > 0, ERROR_INVALID_AMOUNT);
                self.to_decimal_wad(value)
            },
            AmountRequest::Max => {
                let max_debt = self.max_debt_for(&state.collateral, &cache.origination_ltv);
                let available = self.saturating_sub(&max_debt, &current_debt);
                require!(!self.is_zero(&available), ERROR_INVALID_AMOUNT);
                available
            },
        };

        let new_debt = current_debt + borrowed.clone();
        require!(
            new_debt >= self.min_debt_required().get(),
            ERROR_MIN_DEBT_NOT_MET
        );

        let new_ltv = self.calculate_ltv(&new_debt, &state.collateral);
        self.validate_origination_ltv(&new_ltv, &cache.origination_ltv);

        self.checkpoint_debt(&mut state, new_debt, cache);
        self.store_account_state(on_behalf_of, &state);
        cache.total_debt += &borrowed;

        let borrowed_raw = borrowed.into_raw_units().clone();
        self.tx()
            .to(self.treasury_borrower().get())
            .typed(proxy_treasury::TreasuryMockProxy)
            .borrow(&borrowed_raw, recipient)
            .sync_call();

        self.borrow_event(caller, on_behalf_of, recipient, &borrowed_raw);
        borrowed_raw
    }
}
