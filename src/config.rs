multiversx_sc::imports!();

use crate::errors::{ERR_ACTIVE_PERIOD, ERR_FEE_TOO_HIGH, ERR_ZERO_ADDRESS};
use crate::types::ClaimFeeParameters;

// ============================================================
// Fee & minimum-size policy
// ============================================================

#[multiversx_sc::module]
pub trait ConfigModule:
    crate::admin::AdminModule
    + crate::rewards::RewardsModule
    + crate::events::EventsModule
    + crate::guard::GuardModule
{
    #[endpoint(setClaimFeeParameters)]
    fn set_claim_fee_parameters(&self, fee_amount: BigUint, fee_collector: ManagedAddress) {
        self.acquire_lock();
        self.require_admin();
        require!(fee_amount <= self.max_claim_fee().get(), ERR_FEE_TOO_HIGH);
        require!(fee_amount == 0u64 || !fee_collector.is_zero(), ERR_ZERO_ADDRESS);

        self.claim_fee_parameters().set(ClaimFeeParameters {
            fee_amount: fee_amount.clone(),
            fee_collector: fee_collector.clone(),
        });
        self.claim_fee_parameters_set_event(&fee_collector, &fee_amount);

        self.release_lock();
    }

    /// Lowering is always allowed; raising waits for the reward period to end.
    /// Positions already under a raised floor are grandfathered until touched.
    #[endpoint(setMinimumStakeAmount)]
    fn set_minimum_stake_amount(&self, amount: BigUint) {
        self.acquire_lock();
        self.require_admin();
        let old_amount = self.minimum_stake_amount().get();
        if amount > old_amount {
            require!(!self.is_reward_period_active(), ERR_ACTIVE_PERIOD);
        }

        self.minimum_stake_amount().set(&amount);
        self.minimum_stake_amount_set_event(&old_amount, &amount);

        self.release_lock();
    }

    /// Raising waits for the reward period to end.
    #[endpoint(setMaxBumpTip)]
    fn set_max_bump_tip(&self, tip: BigUint) {
        self.acquire_lock();
        self.require_admin();
        let old_tip = self.max_bump_tip().get();
        if tip > old_tip {
            require!(!self.is_reward_period_active(), ERR_ACTIVE_PERIOD);
        }

        self.max_bump_tip().set(&tip);
        self.max_bump_tip_set_event(&old_tip, &tip);

        self.release_lock();
    }

    /// Zero is always acceptable; otherwise the balance must reach the floor.
    fn meets_minimum_stake(&self, balance: &BigUint) -> bool {
        *balance == 0u64 || *balance >= self.minimum_stake_amount().get()
    }

    #[view(getClaimFeeParameters)]
    #[storage_mapper("claimFeeParameters")]
    fn claim_fee_parameters(&self) -> SingleValueMapper<ClaimFeeParameters<Self::Api>>;

    #[view(getMaxClaimFee)]
    #[storage_mapper("maxClaimFee")]
    fn max_claim_fee(&self) -> SingleValueMapper<BigUint>;

    #[view(getMinimumStakeAmount)]
    #[storage_mapper("minimumStakeAmount")]
    fn minimum_stake_amount(&self) -> SingleValueMapper<BigUint>;

    #[view(getMaxBumpTip)]
    #[storage_mapper("maxBumpTip")]
    fn max_bump_tip(&self) -> SingleValueMapper<BigUint>;
}
