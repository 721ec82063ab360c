use common_structs::AccountState;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// The staked token accepted as collateral (gOHM)
    #[view(getCollateralToken)]
    #[storage_mapper("collateral_token")]
    fn collateral_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// The token lent out and repaid, as reported by the treasury borrower
    #[view(getDebtToken)]
    #[storage_mapper("debt_token")]
    fn debt_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Escrow ledger holding every account's collateral
    #[view(getDlgte)]
    #[storage_mapper("dlgte")]
    fn dlgte(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLtvOracle)]
    #[storage_mapper("ltv_oracle")]
    fn ltv_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTreasuryBorrower)]
    #[storage_mapper("treasury_borrower")]
    fn treasury_borrower(&self) -> SingleValueMapper<ManagedAddress>;

    /// Unstakes seized collateral during liquidations
    #[view(getStaking)]
    #[storage_mapper("staking")]
    fn staking(&self) -> SingleValueMapper<ManagedAddress>;

    /// Network identity folded into the authorization domain separator
    #[view(getChainTag)]
    #[storage_mapper("chain_tag")]
    fn chain_tag(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getMinDebtRequired)]
    #[storage_mapper("min_debt_required")]
    fn min_debt_required(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Annual continuously compounded rate, WAD
    #[view(getInterestRate)]
    #[storage_mapper("interest_rate")]
    fn interest_rate(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(isBorrowsPaused)]
    #[storage_mapper("borrows_paused")]
    fn borrows_paused(&self) -> SingleValueMapper<bool>;

    #[view(isLiquidationsPaused)]
    #[storage_mapper("liquidations_paused")]
    fn liquidations_paused(&self) -> SingleValueMapper<bool>;

    // Global debt state, committed by the cache

    #[storage_mapper("total_collateral")]
    fn total_collateral(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("total_debt")]
    fn total_debt(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("interest_accumulator")]
    fn global_interest_accumulator(
        &self,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("interest_accumulator_updated_at")]
    fn interest_accumulator_updated_at(&self) -> SingleValueMapper<u64>;

    /// Per account position. Zeroed, never cleared, once it existed.
    #[storage_mapper("account_states")]
    fn account_states(
        &self,
        account: &ManagedAddress,
    ) -> SingleValueMapper<AccountState<Self::Api>>;

    /// Deadline until which `authorized` may act for `account`
    #[view(authorizations)]
    #[storage_mapper("authorizations")]
    fn authorizations(
        &self,
        account: &ManagedAddress,
        authorized: &ManagedAddress,
    ) -> SingleValueMapper<u64>;

    #[view(authorizationNonce)]
    #[storage_mapper("authorization_nonces")]
    fn authorization_nonce(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;
}
