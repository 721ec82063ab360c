#![no_std]

pub mod delegation;
pub mod escrows;
pub mod kernel;
pub mod storage;
pub mod views;

pub use common_errors::*;
use common_structs::DelegationRequest;

multiversx_sc::imports!();

/// Escrow ledger for delegatable collateral.
///
/// Enabled policies deposit collateral on behalf of accounts. Each account
/// may then spread its collateral across delegate escrows (one contract per
/// delegate) and recall it later. A policy can only ever withdraw what it
/// deposited for an account, even when several policies serve the same
/// account.
#[multiversx_sc::contract]
pub trait Dlgte:
    storage::Storage
    + kernel::KernelModule
    + escrows::EscrowModule
    + delegation::DelegationModule
    + views::ViewsModule
    + common_events::EventsModule
{
    #[init]
    fn init(&self, collateral_token: TokenIdentifier, escrow_template: ManagedAddress) {
        require!(
            collateral_token.is_valid_esdt_identifier(),
            ERROR_INVALID_COLLATERAL_TOKEN
        );
        require!(!escrow_template.is_zero(), ERROR_INVALID_ADDRESS);

        self.collateral_token().set(collateral_token);
        self.escrow_template().set(escrow_template);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setEscrowTemplate)]
    fn set_escrow_template(&self, escrow_template: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&escrow_template),
            ERROR_INVALID_ADDRESS
        );
        self.escrow_template().set(escrow_template);
    }

    /// Credits the attached collateral to `account` as undelegated balance.
    #[payable]
    #[endpoint(depositUndelegatedCollateral)]
    fn deposit_undelegated_collateral(&self, account: ManagedAddress) {
        let policy = self.require_enabled_policy();
        let payment = self.call_value().single_esdt().clone();

        require!(
            payment.token_identifier == self.collateral_token().get(),
            ERROR_INVALID_COLLATERAL_TOKEN
        );
        require!(payment.amount > 0, ERROR_INVALID_AMOUNT);
        require!(!account.is_zero(), ERROR_INVALID_ADDRESS);

        self.policy_account_balance(&policy, &account)
            .update(|balance| *balance += &payment.amount);

        let mut totals = self.load_account_totals(&account);
        totals.total_collateral += &payment.amount;
        self.account_totals(&account).set(&totals);

        self.collateral_deposited_event(&policy, &account, &payment.amount);
    }

    /// Sends `amount` of undelegated collateral back to the calling policy.
    /// With `auto_rescind` any shortfall is first recalled from the
    /// account's delegates.
    #[endpoint(withdrawUndelegatedCollateral)]
    fn withdraw_undelegated_collateral(
        &self,
        account: ManagedAddress,
        amount: BigUint,
        auto_rescind: bool,
    ) {
        let policy = self.require_enabled_policy();
        require!(amount > 0, ERROR_INVALID_AMOUNT);
        require!(!account.is_zero(), ERROR_INVALID_ADDRESS);

        let balance_mapper = self.policy_account_balance(&policy, &account);
        let policy_balance = balance_mapper.get();
        require!(
            amount <= policy_balance,
            ERROR_EXCEEDED_POLICY_ACCOUNT_BALANCE
        );

        let mut totals = self.load_account_totals(&account);
        if auto_rescind && totals.undelegated_collateral() < amount {
            self.rescind_until(&account, &mut totals, &amount);
        }
        require!(
            amount <= totals.undelegated_collateral(),
            ERROR_EXCEEDED_UNDELEGATED_BALANCE
        );

        balance_mapper.set(&policy_balance - &amount);
        totals.total_collateral -= &amount;
        self.account_totals(&account).set(&totals);

        self.tx()
            .to(&policy)
            .single_esdt(&self.collateral_token().get(), 0, &amount)
            .transfer();

        self.collateral_released_event(&policy, &account, &amount);
    }

    /// Applies delegation requests in order.
    ///
    /// Returns `(total_delegated, total_undelegated, undelegated_balance)`.
    #[endpoint(applyDelegations)]
    fn apply_delegations(
        &self,
        account: ManagedAddress,
        delegation_requests: ManagedVec<DelegationRequest<Self::Api>>,
    ) -> MultiValue3<BigUint, BigUint, BigUint> {
        self.require_enabled_policy();
        require!(!account.is_zero(), ERROR_INVALID_ADDRESS);
        require!(
            !delegation_requests.is_empty(),
            ERROR_INVALID_DELEGATION_REQUESTS
        );

        let mut totals = self.load_account_totals(&account);
        let mut total_delegated = BigUint::zero();
        let mut total_undelegated = BigUint::zero();

        for request in delegation_requests.iter() {
            let (delegated, undelegated) =
                self.apply_delegation_request(&account, &mut totals, &request);
            total_delegated += delegated;
            total_undelegated += undelegated;
        }

        let undelegated_balance = totals.undelegated_collateral();
        self.account_totals(&account).set(&totals);

        (total_delegated, total_undelegated, undelegated_balance).into()
    }

    /// Recalls delegations until `requested_undelegated_balance` is
    /// available. May fall short without failing.
    ///
    /// Returns `(total_rescinded, new_undelegated_balance)`.
    #[endpoint(rescindDelegations)]
    fn rescind_delegations(
        &self,
        account: ManagedAddress,
        requested_undelegated_balance: BigUint,
    ) -> MultiValue2<BigUint, BigUint> {
        self.require_enabled_policy();

        let mut totals = self.load_account_totals(&account);
        let total_rescinded = self.rescind_until(&account, &mut totals, &requested_undelegated_balance);
        let undelegated_balance = totals.undelegated_collateral();
        self.account_totals(&account).set(&totals);

        (total_rescinded, undelegated_balance).into()
    }

    #[endpoint(setMaxDelegateAddresses)]
    fn set_max_delegate_addresses(&self, account: ManagedAddress, max_delegate_addresses: u32) {
        self.require_enabled_policy();
        require!(!account.is_zero(), ERROR_INVALID_ADDRESS);

        let mut totals = self.load_account_totals(&account);
        totals.max_delegate_addresses = max_delegate_addresses;
        self.account_totals(&account).set(&totals);

        self.max_delegate_addresses_set_event(&account, max_delegate_addresses);
    }
}
