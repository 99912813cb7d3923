multiversx_sc::imports!();

use crate::types::{Custodian, CustodyMode};

// ============================================================
// Delegation custody registry
// All staked value for positions sharing a delegatee sits with that
// delegatee's custodian, so influence read from custody follows the
// delegatee. Under `CustodyMode::Direct` the ledger keeps everything
// and every custody operation is a no-op.
// Custodians are records in the ledger's storage; tokens never leave the
// ledger's account in either mode. `getCustodianBalance` is the influence
// signal a delegatee is credited with.
// ============================================================

#[multiversx_sc::module]
pub trait CustodyModule: crate::events::EventsModule {
    /// Idempotent: the first call for a delegatee creates its custodian,
    /// later calls return the same one.
    fn fetch_or_create_custodian(&self, delegatee: &ManagedAddress) -> Custodian<Self::Api> {
        let mapper = self.custodians(delegatee);
        if !mapper.is_empty() {
            return mapper.get();
        }

        let id = self.custodian_count().get() + 1;
        let custodian = Custodian {
            id,
            delegatee: delegatee.clone(),
            balance: BigUint::zero(),
        };
        mapper.set(&custodian);
        self.custodian_count().set(id);
        self.custodian_created_event(delegatee, id);

        custodian
    }

    fn custody_deposit(&self, delegatee: &ManagedAddress, amount: &BigUint) {
        if !self.uses_custodians() || *amount == 0u64 {
            return;
        }
        let mut custodian = self.fetch_or_create_custodian(delegatee);
        custodian.balance += amount;
        self.custodians(delegatee).set(&custodian);
    }

    fn custody_withdraw(&self, delegatee: &ManagedAddress, amount: &BigUint) {
        if !self.uses_custodians() || *amount == 0u64 {
            return;
        }
        let mut custodian = self.fetch_or_create_custodian(delegatee);
        custodian.balance -= amount;
        self.custodians(delegatee).set(&custodian);
    }

    fn custody_transfer(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        if from == to {
            return;
        }
        self.custody_withdraw(from, amount);
        self.custody_deposit(to, amount);
    }

    fn uses_custodians(&self) -> bool {
        self.custody_mode().get() == CustodyMode::PerDelegatee
    }

    #[view(getCustodian)]
    fn get_custodian(&self, delegatee: &ManagedAddress) -> OptionalValue<Custodian<Self::Api>> {
        let mapper = self.custodians(delegatee);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    /// Value held for a delegatee; this is the influence it carries.
    #[view(getCustodianBalance)]
    fn get_custodian_balance(&self, delegatee: &ManagedAddress) -> BigUint {
        let mapper = self.custodians(delegatee);
        if mapper.is_empty() {
            BigUint::zero()
        } else {
            mapper.get().balance
        }
    }

    #[view(getCustodyMode)]
    #[storage_mapper("custodyMode")]
    fn custody_mode(&self) -> SingleValueMapper<CustodyMode>;

    #[storage_mapper("custodians")]
    fn custodians(&self, delegatee: &ManagedAddress) -> SingleValueMapper<Custodian<Self::Api>>;

    #[view(getCustodianCount)]
    #[storage_mapper("custodianCount")]
    fn custodian_count(&self) -> SingleValueMapper<u64>;
}
