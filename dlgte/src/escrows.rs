use common_errors::{ERROR_INVALID_DELEGATE_ESCROW, ERROR_TEMPLATE_EMPTY};
use common_proxies::proxy_delegate_escrow;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EscrowModule: storage::Storage + common_events::EventsModule {
    /// Returns the escrow of `delegate`, deploying it from the template the
    /// first time the delegate is used.
    fn get_or_create_escrow(&self, delegate: &ManagedAddress) -> ManagedAddress {
        let mapper = self.delegate_escrows(delegate);
        if !mapper.is_empty() {
            return mapper.get();
        }

        require!(!self.escrow_template().is_empty(), ERROR_TEMPLATE_EMPTY);

        let escrow = self
            .tx()
            .typed(proxy_delegate_escrow::DelegateEscrowProxy)
            .init(self.collateral_token().get(), delegate)
            .from_source(self.escrow_template().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        mapper.set(&escrow);
        self.delegate_escrow_created_event(&self.blockchain().get_caller(), delegate, &escrow);

        escrow
    }

    fn existing_escrow(&self, delegate: &ManagedAddress) -> ManagedAddress {
        let mapper = self.delegate_escrows(delegate);
        require!(!mapper.is_empty(), ERROR_INVALID_DELEGATE_ESCROW);
        mapper.get()
    }

    fn escrow_delegate(&self, escrow: &ManagedAddress, account: &ManagedAddress, amount: &BigUint) {
        self.tx()
            .to(escrow)
            .typed(proxy_delegate_escrow::DelegateEscrowProxy)
            .delegate(account)
            .single_esdt(&self.collateral_token().get(), 0, amount)
            .sync_call();
    }

    /// Pulls `amount` back from the escrow into this contract.
    fn escrow_rescind(&self, escrow: &ManagedAddress, account: &ManagedAddress, amount: &BigUint) {
        self.tx()
            .to(escrow)
            .typed(proxy_delegate_escrow::DelegateEscrowProxy)
            .rescind_delegation(account, amount)
            .sync_call();
    }
}
