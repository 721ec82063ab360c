use common_structs::AccountDelegationTotals;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// The only token this ledger accepts and escrows.
    #[view(getCollateralToken)]
    #[storage_mapper("collateral_token")]
    fn collateral_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Template every delegate escrow is deployed from.
    #[view(getEscrowTemplate)]
    #[storage_mapper("escrow_template")]
    fn escrow_template(&self) -> SingleValueMapper<ManagedAddress>;

    /// Policy contracts allowed to move collateral through the ledger.
    #[view(getPolicies)]
    #[storage_mapper("policies")]
    fn policies(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Collateral a policy deposited for an account and has not yet withdrawn.
    #[view(policyAccountBalance)]
    #[storage_mapper("policy_account_balance")]
    fn policy_account_balance(
        &self,
        policy: &ManagedAddress,
        account: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("account_totals")]
    fn account_totals(
        &self,
        account: &ManagedAddress,
    ) -> SingleValueMapper<AccountDelegationTotals<Self::Api>>;

    fn load_account_totals(&self, account: &ManagedAddress) -> AccountDelegationTotals<Self::Api> {
        let mapper = self.account_totals(account);
        if mapper.is_empty() {
            AccountDelegationTotals::default()
        } else {
            mapper.get()
        }
    }

    /// Delegate -> amount, in the order the delegates were first used.
    #[storage_mapper("account_delegations")]
    fn account_delegations(
        &self,
        account: &ManagedAddress,
    ) -> MapMapper<ManagedAddress, BigUint>;

    /// Escrow contract of a delegate, set once on first delegation.
    #[storage_mapper("delegate_escrows")]
    fn delegate_escrows(&self, delegate: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    /// Total delegated into an escrow, read straight from its storage.
    #[storage_mapper_from_address("total_delegated")]
    fn escrow_total_delegated(
        &self,
        escrow_address: ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;
}
