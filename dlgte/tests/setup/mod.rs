use crate::constants::*;

use common_proxies::{proxy_delegate_escrow, proxy_dlgte};
use common_structs::{AccountDelegation, AccountDelegationSummary, DelegationRequest};
use multiversx_sc::{
    imports::{MultiValue2, MultiValue3},
    types::{
        BigUint, CodeMetadata, EsdtTokenPayment, ManagedAddress, ManagedVec, MultiValueEncoded,
        ReturnsNewManagedAddress, ReturnsResult,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(DLGTE_PATH, dlgte::ContractBuilder);
    blockchain.register_contract(DELEGATE_ESCROW_PATH, delegate_escrow::ContractBuilder);

    blockchain
}

pub fn tokens(units: u64) -> BigUint<StaticApi> {
    BigUint::from(units) * BigUint::from(10u64).pow(GOHM_DECIMALS as u32)
}

pub struct DlgteTestState {
    pub world: ScenarioWorld,
    pub dlgte_sc: ManagedAddress<StaticApi>,
    pub escrow_template: ManagedAddress<StaticApi>,
}

impl DlgteTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(1_000);

        let escrow_template = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_delegate_escrow::DelegateEscrowProxy)
            .init(
                GOHM_TOKEN.to_token_identifier(),
                OWNER_ADDRESS.to_managed_address(),
            )
            .code(DELEGATE_ESCROW_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let dlgte_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_dlgte::DlgteProxy)
            .init(GOHM_TOKEN.to_token_identifier(), &escrow_template)
            .code(DLGTE_PATH)
            .code_metadata(
                CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE | CodeMetadata::PAYABLE_BY_SC,
            )
            .returns(ReturnsNewManagedAddress)
            .run();

        for policy in [POLICY_ADDRESS, SECOND_POLICY_ADDRESS] {
            world
                .tx()
                .from(OWNER_ADDRESS)
                .to(&dlgte_sc)
                .typed(proxy_dlgte::DlgteProxy)
                .enable_policy(policy.to_managed_address())
                .run();
        }

        Self {
            world,
            dlgte_sc,
            escrow_template,
        }
    }

    pub fn deposit(&mut self, policy: TestAddress, account: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(policy)
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .deposit_undelegated_collateral(account.to_managed_address())
            .esdt(EsdtTokenPayment::new(GOHM_TOKEN.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn deposit_error(
        &mut self,
        policy: TestAddress,
        account: &ManagedAddress<StaticApi>,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(policy)
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .deposit_undelegated_collateral(account)
            .esdt(EsdtTokenPayment::new(GOHM_TOKEN.to_token_identifier(), 0, amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(
        &mut self,
        policy: TestAddress,
        account: TestAddress,
        amount: BigUint<StaticApi>,
        auto_rescind: bool,
    ) {
        self.world
            .tx()
            .from(policy)
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .withdraw_undelegated_collateral(account.to_managed_address(), amount, auto_rescind)
            .run();
    }

    pub fn withdraw_error(
        &mut self,
        policy: TestAddress,
        account: TestAddress,
        amount: BigUint<StaticApi>,
        auto_rescind: bool,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(policy)
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .withdraw_undelegated_collateral(account.to_managed_address(), amount, auto_rescind)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn apply_delegations(
        &mut self,
        policy: TestAddress,
        account: TestAddress,
        requests: ManagedVec<StaticApi, DelegationRequest<StaticApi>>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue3<BigUint<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .tx()
            .from(policy)
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .apply_delegations(account.to_managed_address(), requests)
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn apply_delegations_error(
        &mut self,
        policy: TestAddress,
        account: TestAddress,
        requests: ManagedVec<StaticApi, DelegationRequest<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(policy)
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .apply_delegations(account.to_managed_address(), requests)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn rescind_delegations(
        &mut self,
        policy: TestAddress,
        account: TestAddress,
        requested: BigUint<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue2<BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .tx()
            .from(policy)
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .rescind_delegations(account.to_managed_address(), requested)
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn set_max_delegate_addresses(&mut self, account: TestAddress, max: u32) {
        self.world
            .tx()
            .from(POLICY_ADDRESS)
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .set_max_delegate_addresses(account.to_managed_address(), max)
            .run();
    }

    pub fn summary(&mut self, account: TestAddress) -> AccountDelegationSummary<StaticApi> {
        self.world
            .query()
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .account_delegation_summary(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn delegations_list(
        &mut self,
        account: TestAddress,
        start: usize,
        count: usize,
    ) -> Vec<AccountDelegation<StaticApi>> {
        let list: MultiValueEncoded<StaticApi, AccountDelegation<StaticApi>> = self
            .world
            .query()
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .account_delegations_list(account.to_managed_address(), start, count)
            .returns(ReturnsResult)
            .run();

        list.into_iter().collect()
    }

    pub fn policy_account_balance(
        &mut self,
        policy: TestAddress,
        account: TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .policy_account_balance(policy.to_managed_address(), account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_delegated_to(&mut self, delegate: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .total_delegated_to(delegate.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn delegate_escrow(&mut self, delegate: TestAddress) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .delegate_escrow(delegate.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }
}

pub fn delegate_request(
    delegate: TestAddress,
    amount: BigUint<StaticApi>,
) -> DelegationRequest<StaticApi> {
    DelegationRequest::delegate(delegate.to_managed_address(), amount)
}

pub fn undelegate_request(
    delegate: TestAddress,
    amount: BigUint<StaticApi>,
) -> DelegationRequest<StaticApi> {
    DelegationRequest::undelegate(delegate.to_managed_address(), amount)
}

pub fn requests(
    items: Vec<DelegationRequest<StaticApi>>,
) -> ManagedVec<StaticApi, DelegationRequest<StaticApi>> {
    let mut vec = ManagedVec::new();
    for item in items {
        vec.push(item);
    }
    vec
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.account(STRANGER_ADDRESS).nonce(1).esdt_balance(GOHM_TOKEN, tokens(INITIAL_BALANCE));

    for policy in [POLICY_ADDRESS, SECOND_POLICY_ADDRESS] {
        world
            .account(policy)
            .nonce(1)
            .esdt_balance(GOHM_TOKEN, tokens(INITIAL_BALANCE));
    }
}
