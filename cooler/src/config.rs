use common_constants::MAX_INTEREST_RATE;
use common_errors::{
    ERROR_CANNOT_DECREASE_LTV, ERROR_INVALID_ADDRESS, ERROR_INVALID_DEBT_TOKEN, ERROR_INVALID_PARAM,
};
use common_proxies::proxy_treasury;

use crate::{cache::Cache, ledger, oracle, storage};

multiversx_sc::imports!();

/// Policy administration. Admins are managed by the owner through the
/// `addAdmin` / `removeAdmin` endpoints.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + oracle::OracleModule
    + ledger::LedgerModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
    + multiversx_sc_modules::only_admin::OnlyAdminModule
{
    /// Switches to another LTV oracle. Neither LTV may drop below what the
    /// current oracle reports, or healthy positions could become
    /// liquidatable on the spot.
    #[endpoint(setLtvOracle)]
    fn set_ltv_oracle(&self, new_oracle: ManagedAddress) {
        self.require_caller_is_admin();
        require!(
            self.blockchain().is_smart_contract(&new_oracle),
            ERROR_INVALID_ADDRESS
        );

        let (old_origination, old_liquidation) = self.current_ltvs();
        let (new_origination, new_liquidation) = self.ltvs_from(&new_oracle);
        require!(
            new_origination >= old_origination && new_liquidation >= old_liquidation,
            ERROR_CANNOT_DECREASE_LTV
        );

        self.ltv_oracle().set(&new_oracle);
        self.ltv_oracle_set_event(&new_oracle);
    }

    /// The new treasury borrower must lend the same debt token.
    #[endpoint(setTreasuryBorrower)]
    fn set_treasury_borrower(&self, new_treasury_borrower: ManagedAddress) {
        self.require_caller_is_admin();
        require!(
            self.blockchain().is_smart_contract(&new_treasury_borrower),
            ERROR_INVALID_ADDRESS
        );

        let (debt_token, _) = self.treasury_debt_token(&new_treasury_borrower);
        require!(
            debt_token == self.debt_token().get(),
            ERROR_INVALID_DEBT_TOKEN
        );

        self.treasury_borrower().set(&new_treasury_borrower);
        self.treasury_borrower_set_event(&new_treasury_borrower);
    }

    #[endpoint(setBorrowsPaused)]
    fn set_borrows_paused(&self, is_paused: bool) {
        self.require_caller_is_admin();
        self.borrows_paused().set(is_paused);
        self.borrows_paused_event(is_paused);
    }

    #[endpoint(setLiquidationsPaused)]
    fn set_liquidations_paused(&self, is_paused: bool) {
        self.require_caller_is_admin();
        self.liquidations_paused().set(is_paused);
        self.liquidations_paused_event(is_paused);
    }

    /// Interest up to now accrues at the old rate before the switch.
    #[endpoint(setInterestRate)]
    fn set_interest_rate(&self, interest_rate: BigUint) {
        self.require_caller_is_admin();
        require!(
            interest_rate <= BigUint::from(MAX_INTEREST_RATE),
            ERROR_INVALID_PARAM
        );

        drop(Cache::new(self));

        self.interest_rate()
            .set(self.to_decimal_wad(interest_rate.clone()));
        self.interest_rate_set_event(&interest_rate);
    }

    #[endpoint(setMaxDelegateAddresses)]
    fn set_max_delegate_addresses(&self, account: ManagedAddress, max_delegate_addresses: u32) {
        self.require_caller_is_admin();
        self.set_ledger_max_delegate_addresses(&account, max_delegate_addresses);
    }

    #[only_owner]
    #[endpoint(setMinDebtRequired)]
    fn set_min_debt_required(&self, min_debt_required: BigUint) {
        self.min_debt_required()
            .set(self.to_decimal_wad(min_debt_required.clone()));
        self.min_debt_required_set_event(&min_debt_required);
    }

    /// `(token, decimals)` lent by `treasury_borrower`.
    fn treasury_debt_token(&self, treasury_borrower: &ManagedAddress) -> (TokenIdentifier, usize) {
        let debt_token = self
            .tx()
            .to(treasury_borrower)
            .typed(proxy_treasury::TreasuryMockProxy)
            .debt_token()
            .returns(ReturnsResult)
            .sync_call_readonly();

        debt_token.into_tuple()
    }
}
