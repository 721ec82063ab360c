use common_errors::{ERROR_INVALID_ADDRESS, ERROR_POLICY_NOT_PERMITTED};

use crate::storage;

multiversx_sc::imports!();

/// Owner managed table of the policy contracts the ledger serves.
#[multiversx_sc::module]
pub trait KernelModule: storage::Storage + common_events::EventsModule {
    #[only_owner]
    #[endpoint(enablePolicy)]
    fn enable_policy(&self, policy: ManagedAddress) {
        require!(!policy.is_zero(), ERROR_INVALID_ADDRESS);

        self.policies().insert(policy.clone());
        self.policy_enabled_event(&policy, true);
    }

    #[only_owner]
    #[endpoint(disablePolicy)]
    fn disable_policy(&self, policy: ManagedAddress) {
        self.policies().swap_remove(&policy);
        self.policy_enabled_event(&policy, false);
    }

    #[view(isPolicyEnabled)]
    fn is_policy_enabled(&self, policy: ManagedAddress) -> bool {
        self.policies().contains(&policy)
    }

    fn require_enabled_policy(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.policies().contains(&caller), ERROR_POLICY_NOT_PERMITTED);
        caller
    }
}
