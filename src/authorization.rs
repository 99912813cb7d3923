multiversx_sc::imports!();

use crate::errors::ERR_AUTHORIZATION_EXPIRED;
use crate::types::SignedAction;

pub const ACTION_STAKE: &[u8] = b"stake";
pub const ACTION_STAKE_MORE: &[u8] = b"stakeMore";
pub const ACTION_WITHDRAW: &[u8] = b"withdraw";
pub const ACTION_CLAIM: &[u8] = b"claimReward";
pub const ACTION_ALTER_DELEGATEE: &[u8] = b"alterDelegatee";
pub const ACTION_ALTER_CLAIMER: &[u8] = b"alterClaimer";

/// Signed, expiring, single-use authorizations. A MultiversX address is an
/// ed25519 public key, so the signer's address verifies its own signature.
#[multiversx_sc::module]
pub trait AuthorizationModule: crate::events::EventsModule + crate::guard::GuardModule {
    /// Burns the caller's current nonce, revoking every signature made with it.
    #[endpoint(invalidateNonce)]
    fn invalidate_nonce(&self) {
        self.acquire_lock();

        let caller = self.blockchain().get_caller();
        let nonce = self.consume_nonce(&caller);
        self.nonce_invalidated_event(&caller, nonce);

        self.release_lock();
    }

    /// Checks the deadline, verifies `signature` over the action payload bound
    /// to the signer's current nonce, then consumes that nonce.
    fn verify_signed_action(
        &self,
        signer: &ManagedAddress,
        action: &[u8],
        position_id: u64,
        amount: &BigUint,
        delegatee: &ManagedAddress,
        claimer: &ManagedAddress,
        deadline: u64,
        signature: &ManagedBuffer,
    ) {
        self.require_not_expired(deadline);

        let message = self.signed_action_message(
            signer,
            action,
            position_id,
            amount,
            delegatee,
            claimer,
            self.nonces(signer).get(),
            deadline,
        );
        self.crypto()
            .verify_ed25519(signer.as_managed_buffer(), &message, signature);

        self.consume_nonce(signer);
    }

    fn signed_action_message(
        &self,
        signer: &ManagedAddress,
        action: &[u8],
        position_id: u64,
        amount: &BigUint,
        delegatee: &ManagedAddress,
        claimer: &ManagedAddress,
        nonce: u64,
        deadline: u64,
    ) -> ManagedBuffer {
        let payload = SignedAction {
            ledger: self.blockchain().get_sc_address(),
            action: ManagedBuffer::from(action),
            signer: signer.clone(),
            position_id,
            amount: amount.clone(),
            delegatee: delegatee.clone(),
            claimer: claimer.clone(),
            nonce,
            deadline,
        };
        self.serializer().top_encode_to_managed_buffer(&payload)
    }

    fn require_not_expired(&self, deadline: u64) {
        require!(
            self.blockchain().get_block_timestamp() <= deadline,
            ERR_AUTHORIZATION_EXPIRED
        );
    }

    fn consume_nonce(&self, signer: &ManagedAddress) -> u64 {
        let nonce = self.nonces(signer).get();
        self.nonces(signer).set(nonce + 1);
        nonce
    }

    #[view(getNonce)]
    #[storage_mapper("nonces")]
    fn nonces(&self, signer: &ManagedAddress) -> SingleValueMapper<u64>;
}
