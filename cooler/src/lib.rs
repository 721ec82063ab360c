#![no_std]

multiversx_sc::imports!();

pub mod authorization;
pub mod cache;
pub mod config;
pub mod ledger;
pub mod ltv;
pub mod oracle;
pub mod positions;
pub mod storage;
pub mod views;

use cache::Cache;
use common_constants::{EXPECTED_TOKEN_DECIMALS, MAX_INTEREST_RATE};
pub use common_errors::*;
pub use common_structs::*;

/// Single pool, fixed rate lending of the debt token against the staked
/// collateral token.
///
/// Positions are keyed by account address. Collateral is custodied by the
/// escrow ledger, where owners may delegate it. Debt accrues through a
/// global interest accumulator and is funded by the treasury borrower.
#[multiversx_sc::contract]
pub trait Cooler:
    positions::collateral::CollateralModule
    + positions::borrow::BorrowModule
    + positions::repay::RepayModule
    + positions::liquidation::LiquidationModule
    + positions::debt::DebtModule
    + authorization::AuthorizationModule
    + config::ConfigModule
    + views::ViewsModule
    + ledger::LedgerModule
    + ltv::LtvModule
    + oracle::OracleModule
    + storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::only_admin::OnlyAdminModule
{
    /// # Arguments
    /// - `collateral_token`: Staked token accepted as collateral.
    /// - `collateral_decimals`: Must be 18.
    /// - `dlgte`: Escrow ledger that enabled this contract as a policy.
    /// - `ltv_oracle`: Source of the origination and liquidation LTVs.
    /// - `treasury_borrower`: Funds borrows, the debt token is read from it.
    /// - `staking`: Unstakes seized collateral.
    /// - `interest_rate`: Annual rate, WAD, at most 10%.
    /// - `min_debt_required`: Smallest non zero debt a position may hold.
    /// - `chain_tag`: Network identifier (the chain ID), binds signed
    ///   authorizations to one network.
    #[init]
    fn init(
        &self,
        collateral_token: TokenIdentifier,
        collateral_decimals: usize,
        dlgte: ManagedAddress,
        ltv_oracle: ManagedAddress,
        treasury_borrower: ManagedAddress,
        staking: ManagedAddress,
        interest_rate: BigUint,
        min_debt_required: BigUint,
        chain_tag: ManagedBuffer,
    ) {
        require!(
            collateral_token.is_valid_esdt_identifier(),
            ERROR_INVALID_COLLATERAL_TOKEN
        );
        require!(
            collateral_decimals == EXPECTED_TOKEN_DECIMALS,
            ERROR_INVALID_PARAM
        );
        for address in [&dlgte, &ltv_oracle, &treasury_borrower, &staking] {
            require!(
                self.blockchain().is_smart_contract(address),
                ERROR_INVALID_ADDRESS
            );
        }
        require!(
            interest_rate <= BigUint::from(MAX_INTEREST_RATE),
            ERROR_INVALID_PARAM
        );
        require!(!chain_tag.is_empty(), ERROR_INVALID_PARAM);

        let (debt_token, debt_decimals) = self.treasury_debt_token(&treasury_borrower);
        require!(debt_decimals == EXPECTED_TOKEN_DECIMALS, ERROR_INVALID_PARAM);

        self.collateral_token().set(collateral_token);
        self.debt_token().set(debt_token);
        self.dlgte().set(dlgte);
        self.ltv_oracle().set(ltv_oracle);
        self.treasury_borrower().set(treasury_borrower);
        self.staking().set(staking);
        self.chain_tag().set(chain_tag);
        self.interest_rate()
            .set(self.to_decimal_wad(interest_rate));
        self.min_debt_required()
            .set(self.to_decimal_wad(min_debt_required));

        self.total_collateral().set(self.wad_zero());
        self.total_debt().set(self.wad_zero());
        self.global_interest_accumulator().set(self.ray());
        self.interest_accumulator_updated_at()
            .set(self.blockchain().get_block_timestamp());

        self.admins().insert(self.blockchain().get_caller());
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Adds the attached collateral to the position of `on_behalf_of`.
    ///
    /// Anyone may add collateral for anyone. Delegation requests, applied
    /// right after the deposit, need the caller to be authorized.
    #[payable]
    #[endpoint(addCollateral)]
    fn add_collateral(
        &self,
        on_behalf_of: ManagedAddress,
        delegation_requests: ManagedVec<DelegationRequest<Self::Api>>,
    ) {
        let mut cache = Cache::new(self);
        let payment = self.call_value().single_esdt().clone();
        require!(
            payment.token_identifier == self.collateral_token().get(),
            ERROR_INVALID_COLLATERAL_TOKEN
        );
        require!(payment.amount > 0, ERROR_INVALID_AMOUNT);
        require!(!on_behalf_of.is_zero(), ERROR_INVALID_ADDRESS);

        let caller = self.blockchain().get_caller();
        self.process_add_collateral(&caller, &on_behalf_of, &payment.amount, &mut cache);

        if !delegation_requests.is_empty() {
            self.require_sender_authorized(&on_behalf_of);
            self.apply_ledger_delegations(&on_behalf_of, &delegation_requests);
        }
    }

    /// Withdraws collateral of `on_behalf_of` to `recipient` after applying
    /// `delegation_requests`.
    ///
    /// # Errors
    /// - `ERROR_UNAUTHORIZED_ON_BEHALF_OF`: Caller may not act for the account.
    /// - `ERROR_EXCEEDED_COLLATERAL_BALANCE`: More than the position holds.
    /// - `ERROR_EXCEEDED_MAX_ORIGINATION_LTV`: Remaining debt would be under-collateralized.
    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(
        &self,
        amount: AmountRequest<Self::Api>,
        on_behalf_of: ManagedAddress,
        recipient: ManagedAddress,
        delegation_requests: ManagedVec<DelegationRequest<Self::Api>>,
    ) -> BigUint {
        let mut cache = Cache::new(self);
        let caller = self.require_sender_authorized(&on_behalf_of);
        require!(!recipient.is_zero(), ERROR_INVALID_ADDRESS);

        if !delegation_requests.is_empty() {
            self.apply_ledger_delegations(&on_behalf_of, &delegation_requests);
        }

        let withdrawn = self.process_withdraw_collateral(
            &caller,
            &on_behalf_of,
            &recipient,
            amount,
            &mut cache,
        );

        self.tx()
            .to(&recipient)
            .single_esdt(&self.collateral_token().get(), 0, &withdrawn)
            .transfer();

        withdrawn
    }

    /// Borrows against the position of `on_behalf_of`, paid to `recipient`.
    ///
    /// # Errors
    /// - `ERROR_PAUSED`: Borrowing is paused.
    /// - `ERROR_MIN_DEBT_NOT_MET`: Resulting debt below the minimum.
    /// - `ERROR_EXCEEDED_MAX_ORIGINATION_LTV`: Not enough collateral.
    #[endpoint(borrow)]
    fn borrow(
        &self,
        amount: AmountRequest<Self::Api>,
        on_behalf_of: ManagedAddress,
        recipient: ManagedAddress,
    ) -> BigUint {
        let mut cache = Cache::new(self);
        require!(!self.borrows_paused().get(), ERROR_PAUSED);
        let caller = self.require_sender_authorized(&on_behalf_of);
        require!(!recipient.is_zero(), ERROR_INVALID_ADDRESS);

        self.process_borrow(&caller, &on_behalf_of, &recipient, amount, &mut cache)
    }

    /// Repays debt of `on_behalf_of` with the attached debt token. Open to
    /// anyone, any excess is refunded.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self, on_behalf_of: ManagedAddress) -> BigUint {
        let mut cache = Cache::new(self);
        let payment = self.call_value().single_esdt().clone();
        require!(
            payment.token_identifier == self.debt_token().get(),
            ERROR_INVALID_DEBT_TOKEN
        );
        require!(payment.amount > 0, ERROR_INVALID_AMOUNT);
        require!(!on_behalf_of.is_zero(), ERROR_INVALID_ADDRESS);

        let caller = self.blockchain().get_caller();
        self.process_repay(&caller, &on_behalf_of, &payment, &mut cache)
    }

    /// Delegates or undelegates collateral of `on_behalf_of`.
    ///
    /// Returns `(total_delegated, total_undelegated, undelegated_balance)`.
    #[endpoint(applyDelegations)]
    fn apply_delegations(
        &self,
        on_behalf_of: ManagedAddress,
        delegation_requests: ManagedVec<DelegationRequest<Self::Api>>,
    ) -> MultiValue3<BigUint, BigUint, BigUint> {
        self.require_sender_authorized(&on_behalf_of);
        self.apply_ledger_delegations(&on_behalf_of, &delegation_requests)
    }

    /// Liquidates every position in `accounts` above the liquidation LTV.
    ///
    /// The caller receives the summed incentive in collateral. The rest of
    /// the seized collateral is unstaked and burned.
    ///
    /// Returns `(total_collateral_seized, total_debt_wiped, total_incentives)`.
    #[endpoint(batchLiquidate)]
    fn batch_liquidate(
        &self,
        accounts: ManagedVec<ManagedAddress>,
        delegation_requests: ManagedVec<ManagedVec<DelegationRequest<Self::Api>>>,
    ) -> MultiValue3<BigUint, BigUint, BigUint> {
        let mut cache = Cache::new(self);
        require!(!self.liquidations_paused().get(), ERROR_PAUSED);
        require!(!accounts.is_empty(), ERROR_CANNOT_LIQUIDATE);

        let totals = self.process_liquidations(&accounts, &delegation_requests, &mut cache);

        let caller = self.blockchain().get_caller();
        self.settle_liquidations(&caller, &totals);

        (totals.collateral, totals.debt, totals.incentives).into()
    }
}
