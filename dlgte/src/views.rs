use common_structs::{AccountDelegation, AccountDelegationSummary};

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule: storage::Storage {
    /// Lists the delegations of an account in the order delegates were first
    /// used. Returns at most `count` entries starting at `start`; a `start`
    /// past the end yields an empty list.
    #[view(accountDelegationsList)]
    fn account_delegations_list(
        &self,
        account: ManagedAddress,
        start: usize,
        count: usize,
    ) -> MultiValueEncoded<AccountDelegation<Self::Api>> {
        let mut result = MultiValueEncoded::new();

        for (delegate, amount) in self
            .account_delegations(&account)
            .iter()
            .skip(start)
            .take(count)
        {
            let escrow = self.delegate_escrows(&delegate).get();
            result.push(AccountDelegation {
                delegate,
                amount,
                escrow,
            });
        }

        result
    }

    #[view(accountDelegationSummary)]
    fn account_delegation_summary(
        &self,
        account: ManagedAddress,
    ) -> AccountDelegationSummary<Self::Api> {
        let totals = self.load_account_totals(&account);

        AccountDelegationSummary {
            num_delegate_addresses: self.account_delegations(&account).len() as u32,
            max_delegate_addresses: totals.effective_max_delegate_addresses(),
            total_collateral: totals.total_collateral,
            delegated_collateral: totals.delegated_collateral,
        }
    }

    /// Everything currently delegated to `delegate` through its escrow.
    #[view(totalDelegatedTo)]
    fn total_delegated_to(&self, delegate: ManagedAddress) -> BigUint {
        let mapper = self.delegate_escrows(&delegate);
        if mapper.is_empty() {
            return BigUint::zero();
        }

        self.escrow_total_delegated(mapper.get()).get()
    }

    /// Escrow of `delegate`, or the zero address if none was deployed yet.
    #[view(getDelegateEscrow)]
    fn delegate_escrow(&self, delegate: ManagedAddress) -> ManagedAddress {
        let mapper = self.delegate_escrows(&delegate);
        if mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            mapper.get()
        }
    }
}
