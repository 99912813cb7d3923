multiversx_sc::imports!();

use crate::errors::ERR_MECHANISM_GATE_MANDATORY;
use crate::types::{AccessMode, GateKind};

/// Call-time allow/block lists. A gate's verdict never reaches back to
/// positions opened before a list changed; it is only consulted when an
/// endpoint runs.
#[multiversx_sc::module]
pub trait AccessGatesModule:
    crate::admin::AdminModule + crate::events::EventsModule + crate::guard::GuardModule
{
    #[endpoint(setGateMode)]
    fn set_gate_mode(&self, gate: GateKind, mode: AccessMode) {
        self.acquire_lock();
        self.require_admin();
        self.require_mode_permitted(gate, mode);

        self.gate_mode(gate).set(mode);
        self.gate_mode_set_event(gate, mode);

        self.release_lock();
    }

    #[endpoint(addGateMembers)]
    fn add_gate_members(&self, gate: GateKind, members: MultiValueEncoded<ManagedAddress>) {
        self.acquire_lock();
        self.require_admin();
        for member in members {
            if self.gate_members(gate).insert(member.clone()) {
                self.gate_members_changed_event(gate, &member, true);
            }
        }

        self.release_lock();
    }

    #[endpoint(removeGateMembers)]
    fn remove_gate_members(&self, gate: GateKind, members: MultiValueEncoded<ManagedAddress>) {
        self.acquire_lock();
        self.require_admin();
        for member in members {
            if self.gate_members(gate).swap_remove(&member) {
                self.gate_members_changed_event(gate, &member, false);
            }
        }

        self.release_lock();
    }

    /// Swaps the whole list in one step. This is the only way to change the
    /// mechanism gate wholesale, since it can never be opened.
    #[endpoint(replaceGate)]
    fn replace_gate(
        &self,
        gate: GateKind,
        mode: AccessMode,
        members: MultiValueEncoded<ManagedAddress>,
    ) {
        self.acquire_lock();
        self.require_admin();
        self.require_mode_permitted(gate, mode);

        self.clear_gate_members(gate);
        for member in members {
            if self.gate_members(gate).insert(member.clone()) {
                self.gate_members_changed_event(gate, &member, true);
            }
        }
        self.gate_mode(gate).set(mode);
        self.gate_mode_set_event(gate, mode);

        self.release_lock();
    }

    /// Opens a gate to everyone and forgets its members.
    #[endpoint(clearGate)]
    fn clear_gate(&self, gate: GateKind) {
        self.acquire_lock();
        self.require_admin();
        self.require_mode_permitted(gate, AccessMode::Open);

        self.clear_gate_members(gate);
        self.gate_mode(gate).set(AccessMode::Open);
        self.gate_mode_set_event(gate, AccessMode::Open);

        self.release_lock();
    }

    #[view(hasAccess)]
    fn has_access(&self, gate: GateKind, account: &ManagedAddress) -> bool {
        let mode = self.gate_mode(gate).get();
        if mode == AccessMode::Open {
            return true;
        }
        mode.permits(self.gate_members(gate).contains(account))
    }

    #[view(getGateMembers)]
    fn get_gate_members(&self, gate: GateKind) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.gate_members(gate).iter() {
            result.push(member);
        }
        result
    }

    fn require_mode_permitted(&self, gate: GateKind, mode: AccessMode) {
        require!(
            gate != GateKind::Mechanism || mode == AccessMode::Allowlist,
            ERR_MECHANISM_GATE_MANDATORY
        );
    }

    fn clear_gate_members(&self, gate: GateKind) {
        let mut members: ManagedVec<ManagedAddress> = ManagedVec::new();
        for member in self.gate_members(gate).iter() {
            members.push(member);
        }
        for member in members.iter() {
            self.gate_members(gate).swap_remove(&member);
            self.gate_members_changed_event(gate, &member, false);
        }
    }

    #[view(getGateMode)]
    #[storage_mapper("gateMode")]
    fn gate_mode(&self, gate: GateKind) -> SingleValueMapper<AccessMode>;

    #[storage_mapper("gateMembers")]
    fn gate_members(&self, gate: GateKind) -> UnorderedSetMapper<ManagedAddress>;
}
