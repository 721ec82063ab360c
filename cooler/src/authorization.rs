use common_constants::AUTHORIZATION_DOMAIN_TAG;
use common_errors::{
    ERROR_EXPIRED_SIGNATURE, ERROR_INVALID_ADDRESS, ERROR_INVALID_NONCE, ERROR_INVALID_SIGNER,
    ERROR_UNAUTHORIZED_ON_BEHALF_OF,
};
use common_structs::Authorization;

use crate::storage;

multiversx_sc::imports!();

/// Lets an account grant another address the right to manage its position
/// until a deadline, either directly or through an off chain ed25519
/// signature relayed by anyone.
#[multiversx_sc::module]
pub trait AuthorizationModule: storage::Storage + common_events::EventsModule {
    /// Grants `authorized` rights over the caller's position until
    /// `authorization_deadline`. A past deadline revokes.
    #[endpoint(setAuthorization)]
    fn set_authorization(&self, authorized: ManagedAddress, authorization_deadline: u64) {
        require!(!authorized.is_zero(), ERROR_INVALID_ADDRESS);

        let caller = self.blockchain().get_caller();
        self.authorizations(&caller, &authorized)
            .set(authorization_deadline);

        self.authorization_set_event(&caller, &caller, &authorized, authorization_deadline);
    }

    /// Applies an authorization signed by `authorization.account`.
    ///
    /// # Arguments
    /// - `authorization`: The grant, including the account's current nonce.
    /// - `signature`: ed25519 signature over `keccak256(domain_separator ++ payload)`.
    ///
    /// # Errors
    /// - `ERROR_EXPIRED_SIGNATURE`: `signature_deadline` is in the past.
    /// - `ERROR_INVALID_NONCE`: The nonce was already used or skipped ahead.
    /// - `ERROR_INVALID_SIGNER`: The account is a contract and holds no key.
    /// - A signature that does not verify against the account's key aborts
    ///   in the VM hook with `ed25519 verify error`, there is no typed error
    ///   for it.
    #[endpoint(setAuthorizationWithSig)]
    fn set_authorization_with_sig(
        &self,
        authorization: Authorization<Self::Api>,
        signature: ManagedBuffer,
    ) {
        let now = self.blockchain().get_block_timestamp();
        require!(
            now <= authorization.signature_deadline,
            ERROR_EXPIRED_SIGNATURE
        );
        require!(!authorization.authorized.is_zero(), ERROR_INVALID_ADDRESS);

        let nonce_mapper = self.authorization_nonce(&authorization.account);
        require!(
            authorization.nonce == nonce_mapper.get(),
            ERROR_INVALID_NONCE
        );
        require!(
            !self
                .blockchain()
                .is_smart_contract(&authorization.account),
            ERROR_INVALID_SIGNER
        );

        let digest = self.authorization_digest(authorization.clone());
        self.crypto().verify_ed25519(
            authorization.account.as_managed_buffer(),
            &digest,
            &signature,
        );

        nonce_mapper.set(authorization.nonce + 1);
        self.authorizations(&authorization.account, &authorization.authorized)
            .set(authorization.authorization_deadline);

        self.authorization_set_event(
            &self.blockchain().get_caller(),
            &authorization.account,
            &authorization.authorized,
            authorization.authorization_deadline,
        );
    }

    #[view(isSenderAuthorized)]
    fn is_sender_authorized(&self, sender: &ManagedAddress, on_behalf_of: &ManagedAddress) -> bool {
        if sender == on_behalf_of {
            return true;
        }

        let now = self.blockchain().get_block_timestamp();
        now <= self.authorizations(on_behalf_of, sender).get()
    }

    /// Binds signatures to this contract instance on this network. The
    /// contract address alone repeats across networks for the same deployer
    /// and nonce.
    #[view(domainSeparator)]
    fn domain_separator(&self) -> ManagedBuffer {
        let mut data = ManagedBuffer::new_from_bytes(AUTHORIZATION_DOMAIN_TAG);
        data.append(&self.chain_tag().get());
        data.append(self.blockchain().get_sc_address().as_managed_buffer());

        self.crypto().keccak256(&data).as_managed_buffer().clone()
    }

    /// The 32 bytes `authorization.account` signs off chain.
    #[view(authorizationDigest)]
    fn authorization_digest(&self, authorization: Authorization<Self::Api>) -> ManagedBuffer {
        let mut data = self.domain_separator();
        data.append(&authorization.signing_payload());

        self.crypto().keccak256(&data).as_managed_buffer().clone()
    }

    /// Returns the caller once it may act for `on_behalf_of`.
    fn require_sender_authorized(&self, on_behalf_of: &ManagedAddress) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(
            self.is_sender_authorized(&caller, on_behalf_of),
            ERROR_UNAUTHORIZED_ON_BEHALF_OF
        );
        caller
    }
}
