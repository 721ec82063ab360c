use crate::constants::*;

use common_proxies::{
    proxy_cooler, proxy_delegate_escrow, proxy_dlgte, proxy_ltv_oracle, proxy_staking,
    proxy_treasury,
};
use common_structs::{
    AccountDelegation, AccountPosition, AccountState, AmountRequest, Authorization,
    DelegationRequest, GlobalState, LiquidationStatus,
};
use ed25519_dalek::{Signer, SigningKey};
use multiversx_sc::{
    imports::{MultiValue2, MultiValue3},
    types::{
        BigInt, BigUint, CodeMetadata, EsdtLocalRole, EsdtTokenPayment, ManagedAddress,
        ManagedBuffer, ManagedDecimal, ManagedVec, MultiValueEncoded, ReturnsNewManagedAddress,
        ReturnsResult, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(COOLER_PATH, cooler::ContractBuilder);
    blockchain.register_contract(DLGTE_PATH, dlgte::ContractBuilder);
    blockchain.register_contract(DELEGATE_ESCROW_PATH, delegate_escrow::ContractBuilder);
    blockchain.register_contract(LTV_ORACLE_PATH, ltv_oracle::ContractBuilder);
    blockchain.register_contract(TREASURY_PATH, treasury_mock::ContractBuilder);
    blockchain.register_contract(STAKING_PATH, staking_mock::ContractBuilder);

    blockchain
}

/// Whole tokens to 18 decimal units.
pub fn tokens(units: u64) -> BigUint<StaticApi> {
    BigUint::from(units) * BigUint::from(10u64).pow(TOKEN_DECIMALS as u32)
}

pub fn wad(raw: u128) -> BigUint<StaticApi> {
    BigUint::from(raw)
}

pub fn raw(value: &ManagedDecimal<StaticApi, usize>) -> BigUint<StaticApi> {
    value.into_raw_units().clone()
}

/// Asserts `actual` is within `tolerance` units of `expected`.
pub fn assert_close(
    actual: &BigUint<StaticApi>,
    expected: &BigUint<StaticApi>,
    tolerance: &BigUint<StaticApi>,
) {
    let diff = if actual > expected {
        actual - expected
    } else {
        expected - actual
    };
    assert!(
        &diff <= tolerance,
        "{:?} is not within {:?} of {:?}",
        actual,
        tolerance,
        expected
    );
}

pub struct CoolerTestState {
    pub world: ScenarioWorld,
    pub cooler_sc: ManagedAddress<StaticApi>,
    pub dlgte_sc: ManagedAddress<StaticApi>,
    pub ltv_oracle_sc: ManagedAddress<StaticApi>,
    pub treasury_sc: ManagedAddress<StaticApi>,
    pub staking_sc: ManagedAddress<StaticApi>,
}

impl CoolerTestState {
    pub fn new() -> Self {
        Self::on_chain(CHAIN_TAG)
    }

    pub fn on_chain(chain_tag: &[u8]) -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(START_TIMESTAMP);

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

        let ltv_oracle_sc = deploy_ltv_oracle(&mut world, ORIGINATION_LTV);
        let treasury_sc = deploy_treasury(&mut world, USDS_TOKEN);

        let staking_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_staking::StakingMockProxy)
            .init(
                GOHM_TOKEN.to_token_identifier(),
                OHM_TOKEN.to_token_identifier(),
                tokens(STAKING_INDEX),
            )
            .code(STAKING_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();
        world.set_esdt_balance(
            staking_sc.clone(),
            OHM_TOKEN.as_bytes(),
            tokens(STAKING_LIQUIDITY),
        );

        let cooler_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_cooler::CoolerProxy)
            .init(
                GOHM_TOKEN.to_token_identifier(),
                TOKEN_DECIMALS,
                &dlgte_sc,
                &ltv_oracle_sc,
                &treasury_sc,
                &staking_sc,
                BigUint::from(INTEREST_RATE),
                tokens(MIN_DEBT_REQUIRED),
                ManagedBuffer::new_from_bytes(chain_tag),
            )
            .code(COOLER_PATH)
            .code_metadata(
                CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE | CodeMetadata::PAYABLE_BY_SC,
            )
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .enable_policy(&cooler_sc)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&treasury_sc)
            .typed(proxy_treasury::TreasuryMockProxy)
            .set_borrower(&cooler_sc)
            .run();

        world.set_esdt_local_roles(cooler_sc.clone(), OHM_TOKEN.as_bytes(), &[EsdtLocalRole::Burn]);

        Self {
            world,
            cooler_sc,
            dlgte_sc,
            ltv_oracle_sc,
            treasury_sc,
            staking_sc,
        }
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn add_collateral(
        &mut self,
        from: TestAddress,
        on_behalf_of: TestAddress,
        amount: BigUint<StaticApi>,
        delegation_requests: ManagedVec<StaticApi, DelegationRequest<StaticApi>>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .add_collateral(on_behalf_of.to_managed_address(), delegation_requests)
            .esdt(EsdtTokenPayment::new(GOHM_TOKEN.to_token_identifier(), 0, amount))
            .run();
    }

    pub fn add_collateral_error(
        &mut self,
        from: TestAddress,
        on_behalf_of: &ManagedAddress<StaticApi>,
        payment: EsdtTokenPayment<StaticApi>,
        delegation_requests: ManagedVec<StaticApi, DelegationRequest<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .add_collateral(on_behalf_of, delegation_requests)
            .esdt(payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw_collateral(
        &mut self,
        from: TestAddress,
        amount: AmountRequest<StaticApi>,
        on_behalf_of: TestAddress,
        recipient: TestAddress,
        delegation_requests: ManagedVec<StaticApi, DelegationRequest<StaticApi>>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .withdraw_collateral(
                amount,
                on_behalf_of.to_managed_address(),
                recipient.to_managed_address(),
                delegation_requests,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_collateral_error(
        &mut self,
        from: TestAddress,
        amount: AmountRequest<StaticApi>,
        on_behalf_of: TestAddress,
        recipient: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .withdraw_collateral(
                amount,
                on_behalf_of.to_managed_address(),
                recipient,
                ManagedVec::<StaticApi, DelegationRequest<StaticApi>>::new(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn borrow(
        &mut self,
        from: TestAddress,
        amount: AmountRequest<StaticApi>,
        on_behalf_of: TestAddress,
        recipient: TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .borrow(
                amount,
                on_behalf_of.to_managed_address(),
                recipient.to_managed_address(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_error(
        &mut self,
        from: TestAddress,
        amount: AmountRequest<StaticApi>,
        on_behalf_of: TestAddress,
        recipient: TestAddress,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .borrow(
                amount,
                on_behalf_of.to_managed_address(),
                recipient.to_managed_address(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay(
        &mut self,
        from: TestAddress,
        on_behalf_of: TestAddress,
        amount: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .repay(on_behalf_of.to_managed_address())
            .esdt(EsdtTokenPayment::new(USDS_TOKEN.to_token_identifier(), 0, amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn repay_error(
        &mut self,
        from: TestAddress,
        on_behalf_of: TestAddress,
        payment: EsdtTokenPayment<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .repay(on_behalf_of.to_managed_address())
            .esdt(payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn apply_delegations(
        &mut self,
        from: TestAddress,
        on_behalf_of: TestAddress,
        delegation_requests: ManagedVec<StaticApi, DelegationRequest<StaticApi>>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue3<BigUint<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .apply_delegations(on_behalf_of.to_managed_address(), delegation_requests)
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn apply_delegations_error(
        &mut self,
        from: TestAddress,
        on_behalf_of: TestAddress,
        delegation_requests: ManagedVec<StaticApi, DelegationRequest<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .apply_delegations(on_behalf_of.to_managed_address(), delegation_requests)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn batch_liquidate(
        &mut self,
        from: TestAddress,
        accounts: Vec<TestAddress>,
        delegation_requests: Vec<ManagedVec<StaticApi, DelegationRequest<StaticApi>>>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue3<BigUint<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .batch_liquidate(addresses(accounts), nested(delegation_requests))
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn batch_liquidate_error(
        &mut self,
        from: TestAddress,
        accounts: Vec<TestAddress>,
        delegation_requests: Vec<ManagedVec<StaticApi, DelegationRequest<StaticApi>>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .batch_liquidate(addresses(accounts), nested(delegation_requests))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_authorization(&mut self, from: TestAddress, authorized: TestAddress, deadline: u64) {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .set_authorization(authorized.to_managed_address(), deadline)
            .run();
    }

    pub fn set_authorization_with_sig(
        &mut self,
        from: TestAddress,
        authorization: Authorization<StaticApi>,
        signature: ManagedBuffer<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .set_authorization_with_sig(authorization, signature)
            .run();
    }

    pub fn set_authorization_with_sig_error(
        &mut self,
        from: TestAddress,
        authorization: Authorization<StaticApi>,
        signature: ManagedBuffer<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .set_authorization_with_sig(authorization, signature)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Signs the digest the cooler expects for `authorization`.
    pub fn sign_authorization(
        &mut self,
        signing_key: &SigningKey,
        authorization: &Authorization<StaticApi>,
    ) -> ManagedBuffer<StaticApi> {
        let digest: ManagedBuffer<StaticApi> = self
            .world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .authorization_digest(authorization.clone())
            .returns(ReturnsResult)
            .run();

        let signature = signing_key.sign(digest.to_boxed_bytes().as_slice());
        ManagedBuffer::new_from_bytes(&signature.to_bytes())
    }

    pub fn domain_separator(&mut self) -> ManagedBuffer<StaticApi> {
        self.world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .domain_separator()
            .returns(ReturnsResult)
            .run()
    }

    pub fn set_interest_rate(&mut self, interest_rate: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .set_interest_rate(BigUint::from(interest_rate))
            .run();
    }

    pub fn set_borrows_paused(&mut self, is_paused: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .set_borrows_paused(is_paused)
            .run();
    }

    pub fn set_liquidations_paused(&mut self, is_paused: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .set_liquidations_paused(is_paused)
            .run();
    }

    pub fn set_origination_ltv_at(&mut self, target: BigUint<StaticApi>, target_time: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ltv_oracle_sc)
            .typed(proxy_ltv_oracle::LtvOracleProxy)
            .set_origination_ltv_at(target, target_time)
            .run();
    }

    pub fn account_collateral(&mut self, account: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .account_collateral(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn account_debt(&mut self, account: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .account_debt(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn account_state(&mut self, account: TestAddress) -> AccountState<StaticApi> {
        self.world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .account_state(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn account_position(&mut self, account: TestAddress) -> AccountPosition<StaticApi> {
        self.world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .account_position(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn global_state(&mut self) -> GlobalState<StaticApi> {
        self.world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .global_state()
            .returns(ReturnsResult)
            .run()
    }

    pub fn interest_accumulator(&mut self) -> BigUint<StaticApi> {
        let accumulator = self
            .world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .interest_accumulator()
            .returns(ReturnsResult)
            .run();

        raw(&accumulator)
    }

    pub fn loan_to_values(&mut self) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let ltvs: MultiValue2<
            ManagedDecimal<StaticApi, usize>,
            ManagedDecimal<StaticApi, usize>,
        > = self
            .world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .loan_to_values()
            .returns(ReturnsResult)
            .run();

        let (origination, liquidation) = ltvs.into_tuple();
        (raw(&origination), raw(&liquidation))
    }

    pub fn compute_liquidity(
        &mut self,
        accounts: Vec<TestAddress>,
    ) -> Vec<LiquidationStatus<StaticApi>> {
        let mut args = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
        for account in accounts {
            args.push(account.to_managed_address());
        }

        let statuses: MultiValueEncoded<StaticApi, LiquidationStatus<StaticApi>> = self
            .world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .compute_liquidity(args)
            .returns(ReturnsResult)
            .run();

        statuses.into_iter().collect()
    }

    pub fn debt_delta_for_max_origination_ltv(
        &mut self,
        account: TestAddress,
        collateral_delta: BigInt<StaticApi>,
    ) -> BigInt<StaticApi> {
        self.world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .debt_delta_for_max_origination_ltv(account.to_managed_address(), collateral_delta)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_sender_authorized(&mut self, sender: TestAddress, on_behalf_of: TestAddress) -> bool {
        self.is_sender_authorized_for(sender, &on_behalf_of.to_managed_address())
    }

    pub fn is_sender_authorized_for(
        &mut self,
        sender: TestAddress,
        on_behalf_of: &ManagedAddress<StaticApi>,
    ) -> bool {
        self.world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .is_sender_authorized(sender.to_managed_address(), on_behalf_of)
            .returns(ReturnsResult)
            .run()
    }

    pub fn authorization_nonce(&mut self, account: &ManagedAddress<StaticApi>) -> u64 {
        self.world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .authorization_nonce(account)
            .returns(ReturnsResult)
            .run()
    }

    pub fn delegations_list(&mut self, account: TestAddress) -> Vec<AccountDelegation<StaticApi>> {
        let list: MultiValueEncoded<StaticApi, AccountDelegation<StaticApi>> = self
            .world
            .query()
            .to(&self.cooler_sc)
            .typed(proxy_cooler::CoolerProxy)
            .account_delegations_list(account.to_managed_address(), 0usize, 10usize)
            .returns(ReturnsResult)
            .run();

        list.into_iter().collect()
    }

    pub fn ledger_balance(&mut self, account: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.dlgte_sc)
            .typed(proxy_dlgte::DlgteProxy)
            .policy_account_balance(&self.cooler_sc, account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn treasury_outstanding_debt(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.treasury_sc)
            .typed(proxy_treasury::TreasuryMockProxy)
            .outstanding_debt()
            .returns(ReturnsResult)
            .run()
    }
}

pub fn deploy_ltv_oracle(
    world: &mut ScenarioWorld,
    origination_ltv: u128,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_ltv_oracle::LtvOracleProxy)
        .init(
            wad(origination_ltv),
            wad(MAX_ORIGINATION_LTV),
            SECONDS_PER_DAY,
            wad(MAX_ORIGINATION_LTV_RATE_OF_CHANGE),
            LIQUIDATION_LTV_PREMIUM_BPS,
            MAX_LIQUIDATION_LTV_PREMIUM_BPS,
        )
        .code(LTV_ORACLE_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_treasury(
    world: &mut ScenarioWorld,
    debt_token: TestTokenIdentifier,
) -> ManagedAddress<StaticApi> {
    let treasury_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_treasury::TreasuryMockProxy)
        .init(debt_token.to_token_identifier(), TOKEN_DECIMALS)
        .code(TREASURY_PATH)
        .code_metadata(
            CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE | CodeMetadata::PAYABLE_BY_SC,
        )
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_balance(
        treasury_sc.clone(),
        debt_token.as_bytes(),
        tokens(TREASURY_LIQUIDITY),
    );

    treasury_sc
}

pub fn delegate_request(
    delegate: TestAddress,
    amount: BigUint<StaticApi>,
) -> DelegationRequest<StaticApi> {
    DelegationRequest::delegate(delegate.to_managed_address(), amount)
}

pub fn undelegate_all_request(delegate: TestAddress) -> DelegationRequest<StaticApi> {
    DelegationRequest::undelegate_all(delegate.to_managed_address())
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

pub fn no_requests() -> ManagedVec<StaticApi, DelegationRequest<StaticApi>> {
    ManagedVec::new()
}

fn addresses(accounts: Vec<TestAddress>) -> ManagedVec<StaticApi, ManagedAddress<StaticApi>> {
    let mut vec = ManagedVec::new();
    for account in accounts {
        vec.push(account.to_managed_address());
    }
    vec
}

fn nested(
    items: Vec<ManagedVec<StaticApi, DelegationRequest<StaticApi>>>,
) -> ManagedVec<StaticApi, ManagedVec<StaticApi, DelegationRequest<StaticApi>>> {
    let mut vec = ManagedVec::new();
    for item in items {
        vec.push(item);
    }
    vec
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.account(LIQUIDATOR_ADDRESS).nonce(1);

    for user in [ALICE_ADDRESS, BOB_ADDRESS] {
        world
            .account(user)
            .nonce(1)
            .esdt_balance(GOHM_TOKEN, tokens(INITIAL_COLLATERAL))
            .esdt_balance(USDS_TOKEN, tokens(INITIAL_DEBT_BALANCE))
            .esdt_balance(OTHER_DEBT_TOKEN, tokens(INITIAL_DEBT_BALANCE));
    }
}
