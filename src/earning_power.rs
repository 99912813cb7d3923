multiversx_sc::imports!();

use crate::types::{EarningPowerKind, EarningPowerPolicy, GateKind};
use crate::errors::ERR_ZERO_AMOUNT;

/// Largest earning power a single position may carry by default (`2^96 - 1`).
pub fn default_cap<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(2u64).pow(96) - BigUint::from(1u64)
}

/// Weight a position earns with. `has_access` is the owner's standing on the
/// earning-power gate; it only matters for the gated policy.
pub fn weight<M: ManagedTypeApi>(
    policy: &EarningPowerPolicy<M>,
    balance: &BigUint<M>,
    has_access: bool,
) -> BigUint<M> {
    match policy.kind {
        EarningPowerKind::Capped => crate::scaled::min(balance, &policy.cap),
        EarningPowerKind::Gated => {
            if has_access {
                crate::scaled::min(balance, &policy.cap)
            } else {
                BigUint::zero()
            }
        }
    }
}

/// Fresh weight plus whether refreshing it earns the caller a tip.
/// A position qualifies only when its stored weight is stale.
pub fn recalc<M: ManagedTypeApi>(
    policy: &EarningPowerPolicy<M>,
    balance: &BigUint<M>,
    has_access: bool,
    old_weight: &BigUint<M>,
) -> (BigUint<M>, bool) {
    let new_weight = weight(policy, balance, has_access);
    let qualifies = &new_weight != old_weight;
    (new_weight, qualifies)
}

#[multiversx_sc::module]
pub trait EarningPowerModule:
    crate::access::AccessGatesModule
    + crate::admin::AdminModule
    + crate::events::EventsModule
    + crate::guard::GuardModule
{
    /// Positions keep their stored weight until their next touch or a bump.
    #[endpoint(setEarningPowerPolicy)]
    fn set_earning_power_policy(&self, kind: EarningPowerKind, cap: BigUint) {
        self.acquire_lock();
        self.require_admin();
        require!(cap > 0u64, ERR_ZERO_AMOUNT);

        self.earning_power_policy().set(EarningPowerPolicy {
            kind,
            cap: cap.clone(),
        });
        self.earning_power_policy_set_event(kind, &cap);

        self.release_lock();
    }

    /// Neither built-in policy weighs the delegatee.
    fn earning_power_of(
        &self,
        balance: &BigUint,
        owner: &ManagedAddress,
        _delegatee: &ManagedAddress,
    ) -> BigUint {
        let policy = self.earning_power_policy().get();
        let has_access = self.has_access(GateKind::EarningPower, owner);
        weight(&policy, balance, has_access)
    }

    fn recalc_earning_power(
        &self,
        balance: &BigUint,
        owner: &ManagedAddress,
        _delegatee: &ManagedAddress,
        old_weight: &BigUint,
    ) -> (BigUint, bool) {
        let policy = self.earning_power_policy().get();
        let has_access = self.has_access(GateKind::EarningPower, owner);
        recalc(&policy, balance, has_access, old_weight)
    }

    #[view(getEarningPowerPolicy)]
    #[storage_mapper("earningPowerPolicy")]
    fn earning_power_policy(&self) -> SingleValueMapper<EarningPowerPolicy<Self::Api>>;
}
