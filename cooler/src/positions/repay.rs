use common_errors::{ERROR_INVALID_AMOUNT, ERROR_MIN_DEBT_NOT_MET};
use common_math::Rounding;
use common_proxies::proxy_treasury;

use crate::{cache::Cache, storage};

use super::debt;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait RepayModule:
    storage::Storage
    + debt::DebtModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Repays up to the full debt of `on_behalf_of` out of `payment` and
    /// forwards the repaid part to the treasury borrower.
    ///
    /// Debt is valued rounded up. Anything paid above it is refunded to
    /// `caller`. A partial repayment may not leave the position below the
    /// minimum debt.
    ///
    /// # Returns
    /// - The amount applied to the debt.
    fn process_repay(
        &self,
        caller: &ManagedAddress,
        on_behalf_of: &ManagedAddress,
        payment: &EsdtTokenPayment,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let mut state = self.load_account_state(on_behalf_of);
        let debt = self.account_debt(&state, cache, Rounding::Up);
        let paid = self.to_decimal_wad(payment.amount.clone());

        let repaid = self.get_min(paid, debt.clone());
        require!(!self.is_zero(&repaid), ERROR_INVALID_AMOUNT);

        let remaining = debt - repaid.clone();
        if !self.is_zero(&remaining) {
            require!(
                remaining >= self.min_debt_required().get(),
                ERROR_MIN_DEBT_NOT_MET
            );
        }

        self.checkpoint_debt(&mut state, remaining, cache);
        self.store_account_state(on_behalf_of, &state);
        cache.total_debt = self.saturating_sub(&cache.total_debt, &repaid);

        let repaid_raw = repaid.into_raw_units().clone();
        self.tx()
            .to(self.treasury_borrower().get())
            .typed(proxy_treasury::TreasuryMockProxy)
            .repay()
            .single_esdt(&payment.token_identifier, 0, &repaid_raw)
            .sync_call();

        if payment.amount > repaid_raw {
            let excess = &payment.amount - &repaid_raw;
            self.tx()
                .to(caller)
                .single_esdt(&payment.token_identifier, 0, &excess)
                .transfer();
        }

        self.repay_event(caller, on_behalf_of, &repaid_raw);
        repaid_raw
    }
}
