#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const ERR_REJECTED: &str = "mechanism rejected the sign-up";

/// Same field layout as the authorization the staking ledger forwards.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct SignUpAuthorization<M: ManagedTypeApi> {
    pub signer: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub nonce: u64,
    pub deadline: u64,
    pub signature: ManagedBuffer<M>,
}

/// Allocation mechanism stand-in for ledger tests: records every sign-up
/// and can be told to refuse them.
#[multiversx_sc::contract]
pub trait AllocationMechanismMock {
    #[init]
    fn init(&self) {}

    #[payable("*")]
    #[endpoint(signUp)]
    fn sign_up(&self, delegate: ManagedAddress, authorization: SignUpAuthorization<Self::Api>) {
        require!(!self.rejecting().get(), ERR_REJECTED);

        let payment = self.call_value().single_esdt();
        require!(payment.amount == authorization.amount, "amount mismatch");

        self.total_received()
            .update(|total| *total += &payment.amount);
        self.last_delegate().set(&delegate);
        self.last_authorization().set(&authorization);
    }

    #[endpoint(setRejecting)]
    fn set_rejecting(&self, rejecting: bool) {
        self.rejecting().set(rejecting);
    }

    #[storage_mapper("rejecting")]
    fn rejecting(&self) -> SingleValueMapper<bool>;

    #[view(getTotalReceived)]
    #[storage_mapper("totalReceived")]
    fn total_received(&self) -> SingleValueMapper<BigUint>;

    #[view(getLastDelegate)]
    #[storage_mapper("lastDelegate")]
    fn last_delegate(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLastAuthorization)]
    #[storage_mapper("lastAuthorization")]
    fn last_authorization(&self) -> SingleValueMapper<SignUpAuthorization<Self::Api>>;
}
