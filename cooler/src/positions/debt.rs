use common_math::Rounding;
use common_structs::AccountState;

use crate::{cache::Cache, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait DebtModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    /// Stored state of `account`, or an empty position if it never had one.
    fn load_account_state(&self, account: &ManagedAddress) -> AccountState<Self::Api> {
        let mapper = self.account_states(account);
        if mapper.is_empty() {
            return AccountState {
                collateral: self.wad_zero(),
                debt_checkpoint: self.wad_zero(),
                interest_accumulator: self.ray_zero(),
            };
        }

        mapper.get()
    }

    fn store_account_state(&self, account: &ManagedAddress, state: &AccountState<Self::Api>) {
        self.account_states(account).set(state);
    }

    /// Debt of a position at the cache's accumulator.
    ///
    /// Round up whenever the figure protects the protocol (repay,
    /// liquidation, LTV checks) and down when it sizes new borrowing.
    fn account_debt(
        &self,
        state: &AccountState<Self::Api>,
        cache: &Cache<Self>,
        rounding: Rounding,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_zero(&state.debt_checkpoint) {
            return self.wad_zero();
        }

        self.scale_debt(
            &state.debt_checkpoint,
            &cache.interest_accumulator,
            &state.interest_accumulator,
            rounding,
        )
    }

    /// Checkpoints `new_debt` at the current accumulator.
    fn checkpoint_debt(
        &self,
        state: &mut AccountState<Self::Api>,
        new_debt: ManagedDecimal<Self::Api, NumDecimals>,
        cache: &Cache<Self>,
    ) {
        state.debt_checkpoint = new_debt;
        state.interest_accumulator = cache.interest_accumulator.clone();
    }
}
