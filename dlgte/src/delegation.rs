use common_errors::{
    ERROR_EXCEEDED_DELEGATED_BALANCE, ERROR_EXCEEDED_UNDELEGATED_BALANCE, ERROR_INVALID_ADDRESS,
    ERROR_INVALID_AMOUNT, ERROR_INVALID_DELEGATE_ESCROW, ERROR_TOO_MANY_DELEGATES,
};
use common_structs::{AccountDelegationTotals, DelegationAction, DelegationRequest};

use crate::{escrows, storage};

multiversx_sc::imports!();

/// Moves collateral between the undelegated balance of an account and the
/// delegate escrows.
///
/// The account totals are loaded once per operation, mutated in memory and
/// written back by the caller, mirroring how positions are handled elsewhere.
#[multiversx_sc::module]
pub trait DelegationModule:
    storage::Storage + escrows::EscrowModule + common_events::EventsModule
{
    /// Applies one request and returns `(delegated, undelegated)` amounts.
    fn apply_delegation_request(
        &self,
        account: &ManagedAddress,
        totals: &mut AccountDelegationTotals<Self::Api>,
        request: &DelegationRequest<Self::Api>,
    ) -> (BigUint, BigUint) {
        require!(!request.delegate.is_zero(), ERROR_INVALID_ADDRESS);

        match request.action {
            DelegationAction::Delegate => {
                self.add_delegation(account, totals, &request.delegate, &request.amount);
                (request.amount.clone(), BigUint::zero())
            },
            DelegationAction::Undelegate => {
                let rescinded =
                    self.remove_delegation(account, totals, &request.delegate, Some(&request.amount));
                (BigUint::zero(), rescinded)
            },
            DelegationAction::UndelegateAll => {
                let rescinded = self.remove_delegation(account, totals, &request.delegate, None);
                (BigUint::zero(), rescinded)
            },
        }
    }

    fn add_delegation(
        &self,
        account: &ManagedAddress,
        totals: &mut AccountDelegationTotals<Self::Api>,
        delegate: &ManagedAddress,
        amount: &BigUint,
    ) {
        require!(amount > &BigUint::zero(), ERROR_INVALID_AMOUNT);
        require!(
            amount <= &totals.undelegated_collateral(),
            ERROR_EXCEEDED_UNDELEGATED_BALANCE
        );

        let mut delegations = self.account_delegations(account);
        let current = match delegations.get(delegate) {
            Some(current) => current,
            None => {
                require!(
                    (delegations.len() as u32) < totals.effective_max_delegate_addresses(),
                    ERROR_TOO_MANY_DELEGATES
                );
                BigUint::zero()
            },
        };

        let escrow = self.get_or_create_escrow(delegate);
        self.escrow_delegate(&escrow, account, amount);

        delegations.insert(delegate.clone(), current + amount);
        totals.delegated_collateral += amount;

        self.delegation_applied_event(account, delegate, amount, true);
    }

    /// Rescinds `amount` (or everything when `None`) from the delegate.
    fn remove_delegation(
        &self,
        account: &ManagedAddress,
        totals: &mut AccountDelegationTotals<Self::Api>,
        delegate: &ManagedAddress,
        amount: Option<&BigUint>,
    ) -> BigUint {
        let escrow = self.existing_escrow(delegate);

        let mut delegations = self.account_delegations(account);
        let current = match delegations.get(delegate) {
            Some(current) => current,
            None => sc_panic!(ERROR_INVALID_DELEGATE_ESCROW),
        };

        let to_rescind = match amount {
            Some(amount) => {
                require!(amount > &BigUint::zero(), ERROR_INVALID_AMOUNT);
                require!(amount <= &current, ERROR_EXCEEDED_DELEGATED_BALANCE);
                amount.clone()
            },
            None => current.clone(),
        };

        self.escrow_rescind(&escrow, account, &to_rescind);

        let remaining = &current - &to_rescind;
        if remaining == 0 {
            delegations.remove(delegate);
        } else {
            delegations.insert(delegate.clone(), remaining);
        }
        totals.delegated_collateral -= &to_rescind;

        self.delegation_applied_event(account, delegate, &to_rescind, false);
        to_rescind
    }

    /// Recalls delegations in insertion order until the undelegated balance
    /// reaches `requested_undelegated_balance` or nothing is left to recall.
    /// Returns the total rescinded.
    fn rescind_until(
        &self,
        account: &ManagedAddress,
        totals: &mut AccountDelegationTotals<Self::Api>,
        requested_undelegated_balance: &BigUint,
    ) -> BigUint {
        let mut total_rescinded = BigUint::zero();
        let undelegated = totals.undelegated_collateral();
        if &undelegated >= requested_undelegated_balance {
            return total_rescinded;
        }

        let mut shortfall = requested_undelegated_balance - &undelegated;

        // Snapshot first, the map is mutated while rescinding
        let mut delegates = ManagedVec::<Self::Api, ManagedAddress>::new();
        for delegate in self.account_delegations(account).keys() {
            delegates.push(delegate);
        }

        for delegate in delegates.iter() {
            let delegated = self
                .account_delegations(account)
                .get(&delegate)
                .unwrap_or_default();
            let to_rescind = if delegated > shortfall {
                shortfall.clone()
            } else {
                delegated
            };

            let rescinded = self.remove_delegation(account, totals, &delegate, Some(&to_rescind));
            shortfall -= &rescinded;
            total_rescinded += rescinded;

            if shortfall == 0 {
                break;
            }
        }

        total_rescinded
    }
}
