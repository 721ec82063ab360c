#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    // Position manager

    #[event("collateral_added")]
    fn collateral_added_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("collateral_withdrawn")]
    fn collateral_withdrawn_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("liquidation")]
    fn liquidation_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] collateral_seized: &BigUint,
        #[indexed] debt_wiped: &BigUint,
        #[indexed] incentives: &BigUint,
    );

    #[event("interest_rate_set")]
    fn interest_rate_set_event(&self, #[indexed] interest_rate: &BigUint);

    #[event("accumulator_updated")]
    fn accumulator_updated_event(
        &self,
        #[indexed] interest_accumulator: &BigUint,
        #[indexed] total_debt: &BigUint,
        #[indexed] timestamp: u64,
    );

    #[event("borrows_paused")]
    fn borrows_paused_event(&self, #[indexed] is_paused: bool);

    #[event("liquidations_paused")]
    fn liquidations_paused_event(&self, #[indexed] is_paused: bool);

    #[event("ltv_oracle_set")]
    fn ltv_oracle_set_event(&self, #[indexed] oracle: &ManagedAddress);

    #[event("treasury_borrower_set")]
    fn treasury_borrower_set_event(&self, #[indexed] treasury_borrower: &ManagedAddress);

    #[event("min_debt_required_set")]
    fn min_debt_required_set_event(&self, #[indexed] min_debt_required: &BigUint);

    #[event("authorization_set")]
    fn authorization_set_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] account: &ManagedAddress,
        #[indexed] authorized: &ManagedAddress,
        #[indexed] authorization_deadline: u64,
    );

    // Escrow ledger

    #[event("policy_enabled")]
    fn policy_enabled_event(&self, #[indexed] policy: &ManagedAddress, #[indexed] enabled: bool);

    #[event("delegate_escrow_created")]
    fn delegate_escrow_created_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
        #[indexed] escrow: &ManagedAddress,
    );

    #[event("delegation_applied")]
    fn delegation_applied_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] is_delegation: bool,
    );

    #[event("max_delegate_addresses_set")]
    fn max_delegate_addresses_set_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] max_delegate_addresses: u32,
    );

    #[event("collateral_deposited")]
    fn collateral_deposited_event(
        &self,
        #[indexed] policy: &ManagedAddress,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("collateral_released")]
    fn collateral_released_event(
        &self,
        #[indexed] policy: &ManagedAddress,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("escrow_delegation_changed")]
    fn escrow_delegation_changed_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] delegated_amount: &BigUint,
    );

    // LTV oracle

    #[event("origination_ltv_set_at")]
    fn origination_ltv_set_at_event(
        &self,
        #[indexed] start_value: &BigUint,
        #[indexed] target_value: &BigUint,
        #[indexed] target_time: u64,
    );

    #[event("liquidation_ltv_premium_bps_set")]
    fn liquidation_ltv_premium_bps_set_event(&self, #[indexed] premium_bps: u64);

    #[event("oracle_limits_set")]
    fn oracle_limits_set_event(
        &self,
        #[indexed] max_origination_ltv: &BigUint,
        #[indexed] min_target_time_delta: u64,
        #[indexed] max_rate_of_change: &BigUint,
    );
}
