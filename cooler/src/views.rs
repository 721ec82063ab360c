use common_errors::ERROR_INVALID_COLLATERAL_DELTA;
use common_math::Rounding;
use common_structs::{
    AccountDelegation, AccountPosition, AccountState, GlobalState, LiquidationStatus,
};

use crate::{
    cache::Cache,
    ledger, ltv, oracle,
    positions::{debt, liquidation},
    storage,
};

multiversx_sc::imports!();

/// Read-only views. Every view brings interest up to the current block on
/// a throwaway cache, so figures match what an endpoint would see now.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + oracle::OracleModule
    + ledger::LedgerModule
    + ltv::LtvModule
    + debt::DebtModule
    + liquidation::LiquidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    #[view(globalState)]
    fn global_state(&self) -> GlobalState<Self::Api> {
        let cache = Cache::read_only(self);

        GlobalState {
            total_collateral: cache.total_collateral.clone(),
            total_debt: cache.total_debt.clone(),
            interest_accumulator: cache.interest_accumulator.clone(),
            interest_rate: cache.interest_rate.clone(),
            interest_accumulator_updated_at: cache.updated_at,
        }
    }

    #[view(interestAccumulator)]
    fn interest_accumulator(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let cache = Cache::read_only(self);
        cache.interest_accumulator.clone()
    }

    /// Returns `(origination_ltv, liquidation_ltv)`.
    #[view(loanToValues)]
    fn loan_to_values(
        &self,
    ) -> MultiValue2<ManagedDecimal<Self::Api, NumDecimals>, ManagedDecimal<Self::Api, NumDecimals>>
    {
        self.current_ltvs().into()
    }

    /// Stored state, debt checkpoint not brought forward.
    #[view(accountState)]
    fn account_state(&self, account: ManagedAddress) -> AccountState<Self::Api> {
        self.load_account_state(&account)
    }

    #[view(accountCollateral)]
    fn account_collateral(&self, account: ManagedAddress) -> BigUint {
        self.load_account_state(&account)
            .collateral
            .into_raw_units()
            .clone()
    }

    /// Current debt, rounded up.
    #[view(accountDebt)]
    fn account_debt_view(&self, account: ManagedAddress) -> BigUint {
        let cache = Cache::read_only(self);
        let state = self.load_account_state(&account);

        self.account_debt(&state, &cache, Rounding::Up)
            .into_raw_units()
            .clone()
    }

    #[view(accountPosition)]
    fn account_position(&self, account: ManagedAddress) -> AccountPosition<Self::Api> {
        let cache = Cache::read_only(self);
        let state = self.load_account_state(&account);
        let summary = self.ledger_delegation_summary(&account);

        let current_debt = self.account_debt(&state, &cache, Rounding::Up);
        let current_ltv = self.calculate_ltv(&current_debt, &state.collateral);

        AccountPosition {
            max_origination_debt_amount: self
                .max_debt_for(&state.collateral, &cache.origination_ltv),
            liquidation_debt_amount: self.max_debt_for(&state.collateral, &cache.liquidation_ltv),
            health_factor: self.health_factor(&current_ltv, &cache.liquidation_ltv),
            collateral: state.collateral,
            current_debt,
            current_ltv,
            total_delegated: summary.delegated_collateral,
            num_delegate_addresses: summary.num_delegate_addresses,
            max_delegate_addresses: summary.max_delegate_addresses,
        }
    }

    #[view(computeLiquidity)]
    fn compute_liquidity(
        &self,
        accounts: MultiValueEncoded<ManagedAddress>,
    ) -> MultiValueEncoded<LiquidationStatus<Self::Api>> {
        let cache = Cache::read_only(self);
        let mut result = MultiValueEncoded::new();

        for account in accounts {
            let state = self.load_account_state(&account);
            result.push(self.liquidation_status(&state, &cache));
        }

        result
    }

    /// How much debt `account` could add (positive) or must repay (negative)
    /// to sit exactly at the origination LTV after changing its collateral
    /// by `collateral_delta`.
    #[view(debtDeltaForMaxOriginationLtv)]
    fn debt_delta_for_max_origination_ltv(
        &self,
        account: ManagedAddress,
        collateral_delta: BigInt,
    ) -> BigInt {
        let cache = Cache::read_only(self);
        let state = self.load_account_state(&account);

        let new_collateral = match (BigInt::from(state.collateral.into_raw_units().clone())
            + collateral_delta)
            .into_big_uint()
            .into_option()
        {
            Some(collateral) => collateral,
            None => sc_panic!(ERROR_INVALID_COLLATERAL_DELTA),
        };

        let max_debt = self.max_debt_for(
            &self.to_decimal_wad(new_collateral),
            &cache.origination_ltv,
        );
        let current_debt = self.account_debt(&state, &cache, Rounding::Up);

        BigInt::from(max_debt.into_raw_units().clone())
            - BigInt::from(current_debt.into_raw_units().clone())
    }

    #[view(accountDelegationsList)]
    fn account_delegations_list(
        &self,
        account: ManagedAddress,
        start: usize,
        count: usize,
    ) -> MultiValueEncoded<AccountDelegation<Self::Api>> {
        self.ledger_delegations_list(&account, start, count)
    }
}
