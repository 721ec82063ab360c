#![no_std]

use common_constants::DEFAULT_MAX_DELEGATE_ADDRESSES;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Amount selector for borrow and collateral withdrawal.
/// `Max` resolves to the largest amount the LTV rules allow at execution time.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub enum AmountRequest<M: ManagedTypeApi> {
    Exact(BigUint<M>),
    Max,
}

#[type_abi]
#[derive(
    TopEncode,
    TopDecode,
    NestedEncode,
    NestedDecode,
    ManagedVecItem,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
)]
pub enum DelegationAction {
    Delegate,
    Undelegate,
    /// Rescinds whatever the account currently has with the delegate
    UndelegateAll,
}

/// A single instruction to move collateral between the undelegated balance
/// of an account and a delegate escrow.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Eq, Debug,
)]
pub struct DelegationRequest<M: ManagedTypeApi> {
    pub delegate: ManagedAddress<M>,
    pub action: DelegationAction,
    pub amount: BigUint<M>,
}

impl<M: ManagedTypeApi> DelegationRequest<M> {
    pub fn delegate(delegate: ManagedAddress<M>, amount: BigUint<M>) -> Self {
        DelegationRequest {
            delegate,
            action: DelegationAction::Delegate,
            amount,
        }
    }

    pub fn undelegate(delegate: ManagedAddress<M>, amount: BigUint<M>) -> Self {
        DelegationRequest {
            delegate,
            action: DelegationAction::Undelegate,
            amount,
        }
    }

    pub fn undelegate_all(delegate: ManagedAddress<M>) -> Self {
        DelegationRequest {
            delegate,
            action: DelegationAction::UndelegateAll,
            amount: BigUint::zero(),
        }
    }

    pub fn is_undelegation(&self) -> bool {
        self.action != DelegationAction::Delegate
    }
}

/// Per account ledger kept by the escrow ledger contract.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct AccountDelegationTotals<M: ManagedTypeApi> {
    pub total_collateral: BigUint<M>,
    pub delegated_collateral: BigUint<M>,
    /// Zero means the default cap applies
    pub max_delegate_addresses: u32,
}

impl<M: ManagedTypeApi> Default for AccountDelegationTotals<M> {
    fn default() -> Self {
        AccountDelegationTotals {
            total_collateral: BigUint::zero(),
            delegated_collateral: BigUint::zero(),
            max_delegate_addresses: 0,
        }
    }
}

impl<M: ManagedTypeApi> AccountDelegationTotals<M> {
    pub fn undelegated_collateral(&self) -> BigUint<M> {
        if self.total_collateral > self.delegated_collateral {
            &self.total_collateral - &self.delegated_collateral
        } else {
            BigUint::zero()
        }
    }

    pub fn effective_max_delegate_addresses(&self) -> u32 {
        if self.max_delegate_addresses == 0 {
            DEFAULT_MAX_DELEGATE_ADDRESSES
        } else {
            self.max_delegate_addresses
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct AccountDelegationSummary<M: ManagedTypeApi> {
    pub total_collateral: BigUint<M>,
    pub delegated_collateral: BigUint<M>,
    pub num_delegate_addresses: u32,
    pub max_delegate_addresses: u32,
}

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Eq, Debug,
)]
pub struct AccountDelegation<M: ManagedTypeApi> {
    pub delegate: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub escrow: ManagedAddress<M>,
}

/// Snapshot of the global debt state of the position manager.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct GlobalState<M: ManagedTypeApi> {
    pub total_collateral: ManagedDecimal<M, NumDecimals>,
    pub total_debt: ManagedDecimal<M, NumDecimals>,
    pub interest_accumulator: ManagedDecimal<M, NumDecimals>,
    pub interest_rate: ManagedDecimal<M, NumDecimals>,
    pub interest_accumulator_updated_at: u64,
}

/// Stored position of a single account. Debt is kept as a checkpoint plus
/// the accumulator it was taken at.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountState<M: ManagedTypeApi> {
    pub collateral: ManagedDecimal<M, NumDecimals>,
    pub debt_checkpoint: ManagedDecimal<M, NumDecimals>,
    pub interest_accumulator: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountPosition<M: ManagedTypeApi> {
    pub collateral: ManagedDecimal<M, NumDecimals>,
    pub current_debt: ManagedDecimal<M, NumDecimals>,
    pub max_origination_debt_amount: ManagedDecimal<M, NumDecimals>,
    pub liquidation_debt_amount: ManagedDecimal<M, NumDecimals>,
    pub health_factor: ManagedDecimal<M, NumDecimals>,
    pub current_ltv: ManagedDecimal<M, NumDecimals>,
    pub total_delegated: BigUint<M>,
    pub num_delegate_addresses: u32,
    pub max_delegate_addresses: u32,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LiquidationStatus<M: ManagedTypeApi> {
    pub collateral: ManagedDecimal<M, NumDecimals>,
    pub current_debt: ManagedDecimal<M, NumDecimals>,
    pub current_ltv: ManagedDecimal<M, NumDecimals>,
    pub exceeded_liquidation_ltv: bool,
    pub exceeded_max_origination_ltv: bool,
    pub current_incentive: ManagedDecimal<M, NumDecimals>,
}

/// Grant for `authorized` to act for `account` until `authorization_deadline`,
/// signed off chain by `account`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct Authorization<M: ManagedTypeApi> {
    pub account: ManagedAddress<M>,
    pub authorized: ManagedAddress<M>,
    pub authorization_deadline: u64,
    pub nonce: u64,
    pub signature_deadline: u64,
}

impl<M: ManagedTypeApi> Authorization<M> {
    /// Canonical byte layout the signature commits to.
    pub fn signing_payload(&self) -> ManagedBuffer<M> {
        let mut payload = ManagedBuffer::new();
        payload.append(self.account.as_managed_buffer());
        payload.append(self.authorized.as_managed_buffer());
        payload.append_bytes(&self.authorization_deadline.to_be_bytes());
        payload.append_bytes(&self.nonce.to_be_bytes());
        payload.append_bytes(&self.signature_deadline.to_be_bytes());
        payload
    }
}

/// Linear ramp of the origination LTV towards `target_value`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct OriginationLtvData<M: ManagedTypeApi> {
    pub start_value: ManagedDecimal<M, NumDecimals>,
    pub start_time: u64,
    pub target_value: ManagedDecimal<M, NumDecimals>,
    pub target_time: u64,
    /// WAD per second
    pub slope: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> OriginationLtvData<M> {
    pub fn value_at(&self, timestamp: u64) -> ManagedDecimal<M, NumDecimals> {
        if timestamp >= self.target_time {
            return self.target_value.clone();
        }

        let elapsed = timestamp.saturating_sub(self.start_time);
        let increase = self.slope.into_raw_units() * &BigUint::from(elapsed);

        ManagedDecimal::from_raw_units(
            self.start_value.into_raw_units() + &increase,
            self.start_value.scale(),
        )
    }
}
