use common_errors::ERROR_INVALID_DELEGATION_REQUESTS;
use common_math::Rounding;
use common_proxies::{proxy_staking, proxy_treasury};
use common_structs::{AccountState, DelegationRequest, LiquidationStatus};

use crate::{cache::Cache, ledger, ltv, storage};

use super::debt;

multiversx_sc::imports!();

/// Totals of one liquidation batch.
pub struct LiquidationTotals<M: ManagedTypeApi> {
    pub collateral: BigUint<M>,
    pub debt: BigUint<M>,
    pub incentives: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for LiquidationTotals<M> {
    fn default() -> Self {
        LiquidationTotals {
            collateral: BigUint::zero(),
            debt: BigUint::zero(),
            incentives: BigUint::zero(),
        }
    }
}

#[multiversx_sc::module]
pub trait LiquidationModule:
    storage::Storage
    + ledger::LedgerModule
    + ltv::LtvModule
    + debt::DebtModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Health of a position against the cached LTVs. Debt is rounded up.
    fn liquidation_status(
        &self,
        state: &AccountState<Self::Api>,
        cache: &Cache<Self>,
    ) -> LiquidationStatus<Self::Api> {
        let current_debt = self.account_debt(state, cache, Rounding::Up);
        let current_ltv = self.calculate_ltv(&current_debt, &state.collateral);

        let exceeded_liquidation_ltv =
            self.exceeds_liquidation_ltv(&state.collateral, &current_ltv, &cache.liquidation_ltv);
        let current_incentive = if exceeded_liquidation_ltv {
            self.liquidation_incentive(&state.collateral, &current_debt, &cache.liquidation_ltv)
        } else {
            self.wad_zero()
        };

        LiquidationStatus {
            collateral: state.collateral.clone(),
            exceeded_max_origination_ltv: current_ltv > cache.origination_ltv,
            exceeded_liquidation_ltv,
            current_incentive,
            current_ltv,
            current_debt,
        }
    }

    /// Closes every position in `accounts` that is above the liquidation
    /// LTV. Healthy or empty positions are skipped.
    ///
    /// # Arguments
    /// - `accounts`: Positions to check, processed in order.
    /// - `delegation_requests`: Either empty, or one list of undelegations per
    ///   account, applied before its collateral is pulled from the ledger.
    fn process_liquidations(
        &self,
        accounts: &ManagedVec<ManagedAddress>,
        delegation_requests: &ManagedVec<ManagedVec<DelegationRequest<Self::Api>>>,
        cache: &mut Cache<Self>,
    ) -> LiquidationTotals<Self::Api> {
        let has_requests = !delegation_requests.is_empty();
        require!(
            !has_requests || delegation_requests.len() == accounts.len(),
            ERROR_INVALID_DELEGATION_REQUESTS
        );

        let mut totals = LiquidationTotals::default();

        for (index, account) in accounts.iter().enumerate() {
            let state = self.load_account_state(&account);
            let status = self.liquidation_status(&state, cache);
            if !status.exceeded_liquidation_ltv {
                continue;
            }

            if has_requests {
                let requests = delegation_requests.get(index);
                if !requests.is_empty() {
                    for request in requests.iter() {
                        require!(
                            request.is_undelegation(),
                            ERROR_INVALID_DELEGATION_REQUESTS
                        );
                    }
                    self.apply_ledger_delegations(&account, &requests);
                }
            }

            let collateral = status.collateral.into_raw_units().clone();
            let debt = status.current_debt.into_raw_units().clone();
            let incentive = status.current_incentive.into_raw_units().clone();

            self.withdraw_from_ledger(&account, &collateral);

            let mut cleared = state;
            cleared.collateral = self.wad_zero();
            self.checkpoint_debt(&mut cleared, self.wad_zero(), cache);
            self.store_account_state(&account, &cleared);

            self.liquidation_event(&account, &collateral, &debt, &incentive);

            totals.collateral += collateral;
            totals.debt += debt;
            totals.incentives += incentive;
        }

        if totals.collateral > 0 {
            cache.total_collateral = self.saturating_sub(
                &cache.total_collateral,
                &self.to_decimal_wad(totals.collateral.clone()),
            );
            cache.total_debt = self.saturating_sub(
                &cache.total_debt,
                &self.to_decimal_wad(totals.debt.clone()),
            );
        }

        totals
    }

    /// Pays the incentive to the liquidator, then unstakes and burns the
    /// rest of the seized collateral and writes the wiped debt off at the
    /// treasury borrower.
    fn settle_liquidations(&self, liquidator: &ManagedAddress, totals: &LiquidationTotals<Self::Api>) {
        if totals.collateral == 0 {
            return;
        }

        let collateral_token = self.collateral_token().get();
        if totals.incentives > 0 {
            self.tx()
                .to(liquidator)
                .single_esdt(&collateral_token, 0, &totals.incentives)
                .transfer();
        }

        let to_burn = &totals.collateral - &totals.incentives;
        if to_burn > 0 {
            let underlying = self
                .tx()
                .to(self.staking().get())
                .typed(proxy_staking::StakingMockProxy)
                .unstake()
                .single_esdt(&collateral_token, 0, &to_burn)
                .returns(ReturnsResult)
                .sync_call();

            if underlying.amount > 0 {
                self.send()
                    .esdt_local_burn(&underlying.token_identifier, 0, &underlying.amount);
            }
        }

        if totals.debt > 0 {
            self.tx()
                .to(self.treasury_borrower().get())
                .typed(proxy_treasury::TreasuryMockProxy)
                .write_off_debt(&totals.debt)
                .sync_call();
        }
    }
}
