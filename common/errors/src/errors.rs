#![no_std]

pub static ERROR_INVALID_PARAM: &[u8] = b"Invalid parameter.";

pub static ERROR_INVALID_ADDRESS: &[u8] = b"Invalid address provided.";

pub static ERROR_INVALID_AMOUNT: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_COLLATERAL_TOKEN: &[u8] = b"Token sent is not the collateral token.";

pub static ERROR_INVALID_DEBT_TOKEN: &[u8] = b"Token sent is not the debt token.";

pub static ERROR_INVALID_COLLATERAL_DELTA: &[u8] =
    b"Collateral delta would leave a negative collateral balance.";

// Authorization

pub static ERROR_UNAUTHORIZED_ON_BEHALF_OF: &[u8] =
    b"Caller is not authorized to act on behalf of this account.";

pub static ERROR_POLICY_NOT_PERMITTED: &[u8] = b"Caller is not an enabled policy.";

pub static ERROR_UNAUTHORIZED_BORROWER: &[u8] = b"Caller is not the borrower.";

pub static ERROR_EXPIRED_SIGNATURE: &[u8] = b"Authorization signature has expired.";

pub static ERROR_INVALID_NONCE: &[u8] = b"Authorization nonce does not match.";

pub static ERROR_INVALID_SIGNER: &[u8] = b"Authorizing account cannot sign.";

// Limits

pub static ERROR_EXCEEDED_MAX_ORIGINATION_LTV: &[u8] =
    b"Position would exceed the maximum origination LTV.";

pub static ERROR_EXCEEDED_COLLATERAL_BALANCE: &[u8] =
    b"Amount exceeds the account collateral balance.";

pub static ERROR_EXCEEDED_DELEGATED_BALANCE: &[u8] =
    b"Amount exceeds the collateral delegated to this delegate.";

pub static ERROR_EXCEEDED_UNDELEGATED_BALANCE: &[u8] =
    b"Amount exceeds the undelegated collateral balance.";

pub static ERROR_EXCEEDED_POLICY_ACCOUNT_BALANCE: &[u8] =
    b"Amount exceeds the collateral this policy deposited for the account.";

pub static ERROR_TOO_MANY_DELEGATES: &[u8] = b"Account has reached its delegate address limit.";

pub static ERROR_MIN_DEBT_NOT_MET: &[u8] = b"Debt would be below the minimum debt required.";

// State

pub static ERROR_CANNOT_LIQUIDATE: &[u8] = b"Account cannot be liquidated.";

pub static ERROR_PAUSED: &[u8] = b"Action is paused.";

pub static ERROR_INVALID_DELEGATE_ESCROW: &[u8] = b"No delegate escrow holds a delegation for this account.";

pub static ERROR_INVALID_DELEGATION_REQUESTS: &[u8] = b"Invalid delegation requests.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Delegate escrow contract template is empty.";

// LTV oracle

pub static ERROR_BREACHED_MAX_ORIGINATION_LTV: &[u8] =
    b"Target origination LTV is above the maximum origination LTV.";

pub static ERROR_BREACHED_MIN_DATE_DELTA: &[u8] = b"Target time is too close to now.";

pub static ERROR_BREACHED_MAX_ORIGINATION_LTV_RATE_OF_CHANGE: &[u8] =
    b"Origination LTV would change faster than allowed.";

pub static ERROR_CANNOT_DECREASE_LTV: &[u8] = b"LTV cannot decrease.";
