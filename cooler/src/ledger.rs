use common_proxies::proxy_dlgte;
use common_structs::{AccountDelegation, AccountDelegationSummary, DelegationRequest};

use crate::storage;

multiversx_sc::imports!();

/// Calls into the escrow ledger, which custodies all collateral on behalf of
/// this contract.
#[multiversx_sc::module]
pub trait LedgerModule: storage::Storage {
    fn deposit_to_ledger(&self, account: &ManagedAddress, amount: &BigUint) {
        self.tx()
            .to(self.dlgte().get())
            .typed(proxy_dlgte::DlgteProxy)
            .deposit_undelegated_collateral(account)
            .single_esdt(&self.collateral_token().get(), 0, amount)
            .sync_call();
    }

    /// Pulls `amount` back into this contract, recalling delegations when the
    /// undelegated balance is short.
    fn withdraw_from_ledger(&self, account: &ManagedAddress, amount: &BigUint) {
        self.tx()
            .to(self.dlgte().get())
            .typed(proxy_dlgte::DlgteProxy)
            .withdraw_undelegated_collateral(account, amount, true)
            .sync_call();
    }

    fn apply_ledger_delegations(
        &self,
        account: &ManagedAddress,
        requests: &ManagedVec<DelegationRequest<Self::Api>>,
    ) -> MultiValue3<BigUint, BigUint, BigUint> {
        self.tx()
            .to(self.dlgte().get())
            .typed(proxy_dlgte::DlgteProxy)
            .apply_delegations(account, requests.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn set_ledger_max_delegate_addresses(&self, account: &ManagedAddress, max: u32) {
        self.tx()
            .to(self.dlgte().get())
            .typed(proxy_dlgte::DlgteProxy)
            .set_max_delegate_addresses(account, max)
            .sync_call();
    }

    fn ledger_delegation_summary(
        &self,
        account: &ManagedAddress,
    ) -> AccountDelegationSummary<Self::Api> {
        self.tx()
            .to(self.dlgte().get())
            .typed(proxy_dlgte::DlgteProxy)
            .account_delegation_summary(account)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn ledger_delegations_list(
        &self,
        account: &ManagedAddress,
        start: usize,
        count: usize,
    ) -> MultiValueEncoded<AccountDelegation<Self::Api>> {
        self.tx()
            .to(self.dlgte().get())
            .typed(proxy_dlgte::DlgteProxy)
            .account_delegations_list(account, start, count)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
