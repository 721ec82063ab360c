#![no_std]

use common_constants::EXPECTED_TOKEN_DECIMALS;
use common_errors::{ERROR_INVALID_AMOUNT, ERROR_INVALID_DEBT_TOKEN, ERROR_UNAUTHORIZED_BORROWER};

multiversx_sc::imports!();

/// Stand-in for the treasury borrower. Lends the debt token it holds to a
/// single whitelisted borrower and books repayments against it.
#[multiversx_sc::contract]
pub trait TreasuryMock {
    #[init]
    fn init(&self, debt_token: TokenIdentifier, debt_token_decimals: usize) {
        self.debt_token_id().set(debt_token);
        self.debt_token_decimals().set(debt_token_decimals);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setBorrower)]
    fn set_borrower(&self, borrower: ManagedAddress) {
        self.borrower().set(borrower);
    }

    #[endpoint(borrow)]
    fn borrow(&self, amount: BigUint, recipient: ManagedAddress) {
        self.require_borrower();
        require!(amount > 0, ERROR_INVALID_AMOUNT);

        self.outstanding_debt().update(|debt| *debt += &amount);
        sc_print!("Lent {} to the cooler", amount);

        self.tx()
            .to(&recipient)
            .single_esdt(&self.debt_token_id().get(), 0, &amount)
            .transfer();
    }

    #[payable]
    #[endpoint(repay)]
    fn repay(&self) {
        self.require_borrower();
        let payment = self.call_value().single_esdt().clone();
        require!(
            payment.token_identifier == self.debt_token_id().get(),
            ERROR_INVALID_DEBT_TOKEN
        );

        self.reduce_outstanding_debt(&payment.amount);
    }

    /// Books debt that will never be repaid, e.g. after a liquidation.
    #[endpoint(writeOffDebt)]
    fn write_off_debt(&self, amount: BigUint) {
        self.require_borrower();
        sc_print!("Wrote off {}", amount);

        self.reduce_outstanding_debt(&amount);
    }

    /// Returns `(token, decimals)`.
    #[view(debtToken)]
    fn debt_token(&self) -> MultiValue2<TokenIdentifier, usize> {
        (self.debt_token_id().get(), self.debt_token_decimals().get()).into()
    }

    /// Amounts are already denominated in the debt token when decimals
    /// match, otherwise they are rescaled from 18 decimals.
    #[view(convertToDebtTokenAmount)]
    fn convert_to_debt_token_amount(&self, amount: BigUint) -> MultiValue2<TokenIdentifier, BigUint> {
        let decimals = self.debt_token_decimals().get();
        let converted = ManagedDecimal::from_raw_units(amount, EXPECTED_TOKEN_DECIMALS)
            .rescale(decimals)
            .into_raw_units()
            .clone();

        (self.debt_token_id().get(), converted).into()
    }

    fn reduce_outstanding_debt(&self, amount: &BigUint) {
        self.outstanding_debt().update(|debt| {
            if *debt > *amount {
                *debt -= amount;
            } else {
                *debt = BigUint::zero();
            }
        });
    }

    fn require_borrower(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.borrower().get(), ERROR_UNAUTHORIZED_BORROWER);
    }

    #[storage_mapper("debt_token")]
    fn debt_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("debt_token_decimals")]
    fn debt_token_decimals(&self) -> SingleValueMapper<usize>;

    #[view(getOutstandingDebt)]
    #[storage_mapper("outstanding_debt")]
    fn outstanding_debt(&self) -> SingleValueMapper<BigUint>;

    #[view(getBorrower)]
    #[storage_mapper("borrower")]
    fn borrower(&self) -> SingleValueMapper<ManagedAddress>;
}
