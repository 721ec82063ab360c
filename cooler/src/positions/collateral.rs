use common_errors::{ERROR_EXCEEDED_COLLATERAL_BALANCE, ERROR_INVALID_AMOUNT};
use common_math::Rounding;
use common_structs::AmountRequest;

use crate::{cache::Cache, ledger, ltv, storage};

use super::debt;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait CollateralModule:
    storage::Storage
    + ledger::LedgerModule
    + ltv::LtvModule
    + debt::DebtModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Books `amount` of freshly received collateral for `on_behalf_of` and
    /// hands it to the escrow ledger. No LTV check, adding collateral can
    /// only improve a position.
    fn process_add_collateral(
        &self,
        caller: &ManagedAddress,
        on_behalf_of: &ManagedAddress,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) {
        let amount_dec = self.to_decimal_wad(amount.clone());

        let mut state = self.load_account_state(on_behalf_of);
        state.collateral += &amount_dec;
        self.store_account_state(on_behalf_of, &state);
        cache.total_collateral += &amount_dec;

        self.deposit_to_ledger(on_behalf_of, amount);

        self.collateral_added_event(caller, on_behalf_of, amount);
    }

    /// Resolves the requested amount, validates the remaining position and
    /// pulls the collateral out of the escrow ledger into this contract.
    ///
    /// # Arguments
    /// - `amount`: Exact amount, or `Max` for everything not needed to back
    ///   the current debt at the origination LTV.
    ///
    /// # Returns
    /// - The amount withdrawn, still held by this contract.
    fn process_withdraw_collateral(
        &self,
        caller: &ManagedAddress,
        on_behalf_of: &ManagedAddress,
        recipient: &ManagedAddress,
        amount: AmountRequest<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let mut state = self.load_account_state(on_behalf_of);
        let debt = self.account_debt(&state, cache, Rounding::Up);

        let withdrawn = match amount {
            AmountRequest::Exact(value) => {
                require!(value > 0, ERROR_INVALID_AMOUNT);
                let value = self.to_decimal_wad(value);
                require!(
                    value <= state.collateral,
                    ERROR_EXCEEDED_COLLATERAL_BALANCE
                );
                value
            },
            AmountRequest::Max => {
                let required = self.min_collateral_for(&debt, &cache.origination_ltv);
                let available = self.saturating_sub(&state.collateral, &required);
                require!(!self.is_zero(&available), ERROR_INVALID_AMOUNT);
                available
            },
        };

        let remaining = state.collateral.clone() - withdrawn.clone();
        if !self.is_zero(&debt) {
            let new_ltv = self.calculate_ltv(&debt, &remaining);
            self.validate_origination_ltv(&new_ltv, &cache.origination_ltv);
        }

        state.collateral = remaining;
        self.store_account_state(on_behalf_of, &state);
        cache.total_collateral = self.saturating_sub(&cache.total_collateral, &withdrawn);

        let withdrawn_raw = withdrawn.into_raw_units().clone();
        self.withdraw_from_ledger(on_behalf_of, &withdrawn_raw);

        self.collateral_withdrawn_event(caller, on_behalf_of, recipient, &withdrawn_raw);
        withdrawn_raw
    }
}
