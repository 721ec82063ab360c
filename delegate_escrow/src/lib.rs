#![no_std]

use common_errors::{
    ERROR_EXCEEDED_DELEGATED_BALANCE, ERROR_INVALID_ADDRESS, ERROR_INVALID_AMOUNT,
    ERROR_INVALID_COLLATERAL_TOKEN,
};

multiversx_sc::imports!();

/// Holds collateral delegated to a single delegate account.
///
/// One escrow exists per delegate. It is deployed from a template by the
/// escrow ledger, which becomes its owner and the only party allowed to move
/// collateral in or out. Balances are tracked per `(delegator, on_behalf_of)`
/// so that several ledgers could share one escrow without mixing funds.
/// Tokens sent to the escrow outside of `delegate` are never credited.
#[multiversx_sc::contract]
pub trait DelegateEscrow: common_events::EventsModule {
    #[init]
    fn init(&self, collateral_token: TokenIdentifier, delegate_account: ManagedAddress) {
        require!(collateral_token.is_valid_esdt_identifier(), ERROR_INVALID_COLLATERAL_TOKEN);
        require!(!delegate_account.is_zero(), ERROR_INVALID_ADDRESS);

        self.collateral_token().set(collateral_token);
        self.delegate_account().set(delegate_account);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Credits the attached collateral to `on_behalf_of` for the calling ledger.
    /// Returns the new delegated balance of that account.
    #[only_owner]
    #[payable]
    #[endpoint(delegate)]
    fn delegate(&self, on_behalf_of: ManagedAddress) -> BigUint {
        let payment = self.call_value().single_esdt().clone();
        require!(
            payment.token_identifier == self.collateral_token().get(),
            ERROR_INVALID_COLLATERAL_TOKEN
        );
        require!(payment.amount > 0, ERROR_INVALID_AMOUNT);
        require!(!on_behalf_of.is_zero(), ERROR_INVALID_ADDRESS);

        let delegator = self.blockchain().get_caller();
        let delegated = self.delegations(&delegator, &on_behalf_of).update(|amount| {
            *amount += &payment.amount;
            amount.clone()
        });
        self.total_delegated().update(|total| *total += &payment.amount);

        self.escrow_delegation_changed_event(&delegator, &on_behalf_of, &delegated);
        delegated
    }

    /// Sends `amount` of the account's delegation back to the calling ledger.
    /// Returns the remaining delegated balance of that account.
    #[only_owner]
    #[endpoint(rescindDelegation)]
    fn rescind_delegation(&self, on_behalf_of: ManagedAddress, amount: BigUint) -> BigUint {
        require!(amount > 0, ERROR_INVALID_AMOUNT);

        let delegator = self.blockchain().get_caller();
        let mapper = self.delegations(&delegator, &on_behalf_of);
        let current = mapper.get();
        require!(amount <= current, ERROR_EXCEEDED_DELEGATED_BALANCE);

        let remaining = &current - &amount;
        if remaining == 0 {
            mapper.clear();
        } else {
            mapper.set(&remaining);
        }
        self.total_delegated().update(|total| *total -= &amount);

        self.tx()
            .to(&delegator)
            .single_esdt(&self.collateral_token().get(), 0, &amount)
            .transfer();

        self.escrow_delegation_changed_event(&delegator, &on_behalf_of, &remaining);
        remaining
    }

    #[view(getDelegateAccount)]
    #[storage_mapper("delegate_account")]
    fn delegate_account(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCollateralToken)]
    #[storage_mapper("collateral_token")]
    fn collateral_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Sum of all credited delegations. Read directly by the ledger.
    #[view(getTotalDelegated)]
    #[storage_mapper("total_delegated")]
    fn total_delegated(&self) -> SingleValueMapper<BigUint>;

    #[view(delegations)]
    #[storage_mapper("delegations")]
    fn delegations(
        &self,
        delegator: &ManagedAddress,
        on_behalf_of: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
