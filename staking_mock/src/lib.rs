#![no_std]

use common_constants::WAD;
use common_errors::{ERROR_INVALID_AMOUNT, ERROR_INVALID_COLLATERAL_TOKEN};

multiversx_sc::imports!();

/// Stand-in for the staking contract. Swaps the staked token back into the
/// underlying at a fixed WAD index, paid from its own balance.
#[multiversx_sc::contract]
pub trait StakingMock {
    #[init]
    fn init(&self, staked_token: TokenIdentifier, underlying_token: TokenIdentifier, index: BigUint) {
        self.staked_token().set(staked_token);
        self.underlying_token().set(underlying_token);
        self.index().set(index);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable]
    #[endpoint(unstake)]
    fn unstake(&self) -> EsdtTokenPayment {
        let payment = self.call_value().single_esdt().clone();
        require!(
            payment.token_identifier == self.staked_token().get(),
            ERROR_INVALID_COLLATERAL_TOKEN
        );
        require!(payment.amount > 0, ERROR_INVALID_AMOUNT);

        let amount = &payment.amount * &self.index().get() / BigUint::from(WAD);
        let underlying = EsdtTokenPayment::new(self.underlying_token().get(), 0, amount);

        sc_print!("Unstaked {} into {}", payment.amount, underlying.amount);

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .single_esdt(&underlying.token_identifier, 0, &underlying.amount)
            .transfer();

        underlying
    }

    /// Underlying per staked token, WAD
    #[view(getIndex)]
    #[storage_mapper("index")]
    fn index(&self) -> SingleValueMapper<BigUint>;

    #[view(getStakedToken)]
    #[storage_mapper("staked_token")]
    fn staked_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getUnderlyingToken)]
    #[storage_mapper("underlying_token")]
    fn underlying_token(&self) -> SingleValueMapper<TokenIdentifier>;
}
