multiversx_sc::imports!();

use crate::types::{AccessMode, EarningPowerKind, GateKind};

#[multiversx_sc::module]
pub trait EventsModule {
    // ========================================================
    // Positions
    // ========================================================

    #[event("stakeDeposited")]
    fn stake_deposited_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] new_balance: &BigUint,
        earning_power: &BigUint,
    );

    #[event("stakeWithdrawn")]
    fn stake_withdrawn_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] new_balance: &BigUint,
        earning_power: &BigUint,
    );

    #[event("delegateeAltered")]
    fn delegatee_altered_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] old_delegatee: &ManagedAddress,
        #[indexed] new_delegatee: &ManagedAddress,
        earning_power: &BigUint,
    );

    #[event("claimerAltered")]
    fn claimer_altered_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] old_claimer: &ManagedAddress,
        #[indexed] new_claimer: &ManagedAddress,
        earning_power: &BigUint,
    );

    #[event("earningPowerAltered")]
    fn earning_power_altered_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] old_earning_power: &BigUint,
        new_earning_power: &BigUint,
    );

    // ========================================================
    // Rewards
    // ========================================================

    #[event("rewardClaimed")]
    fn reward_claimed_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] claimer: &ManagedAddress,
        #[indexed] payout: &BigUint,
        fee: &BigUint,
    );

    #[event("rewardCompounded")]
    fn reward_compounded_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] caller: &ManagedAddress,
        #[indexed] compounded: &BigUint,
        fee: &BigUint,
    );

    #[event("rewardContributed")]
    fn reward_contributed_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] mechanism: &ManagedAddress,
        #[indexed] net_amount: &BigUint,
        fee: &BigUint,
    );

    #[event("rewardNotified")]
    fn reward_notified_event(
        &self,
        #[indexed] notifier: &ManagedAddress,
        #[indexed] reward_end_time: u64,
        #[indexed] amount: &BigUint,
        scaled_reward_rate: &BigUint,
    );

    #[event("earningPowerBumped")]
    fn earning_power_bumped_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] tip_receiver: &ManagedAddress,
        #[indexed] old_earning_power: &BigUint,
        #[indexed] new_earning_power: &BigUint,
        tip: &BigUint,
    );

    #[event("custodianCreated")]
    fn custodian_created_event(&self, #[indexed] delegatee: &ManagedAddress, #[indexed] id: u64);

    // ========================================================
    // Administration
    // ========================================================

    #[event("adminSet")]
    fn admin_set_event(
        &self,
        #[indexed] old_admin: &ManagedAddress,
        #[indexed] new_admin: &ManagedAddress,
    );

    #[event("pauseStateChanged")]
    fn pause_state_changed_event(&self, #[indexed] paused: bool);

    #[event("rewardNotifierSet")]
    fn reward_notifier_set_event(
        &self,
        #[indexed] notifier: &ManagedAddress,
        #[indexed] enabled: bool,
    );

    #[event("rewardDurationSet")]
    fn reward_duration_set_event(&self, #[indexed] old_duration: u64, #[indexed] new_duration: u64);

    #[event("claimFeeParametersSet")]
    fn claim_fee_parameters_set_event(
        &self,
        #[indexed] fee_collector: &ManagedAddress,
        fee_amount: &BigUint,
    );

    #[event("minimumStakeAmountSet")]
    fn minimum_stake_amount_set_event(&self, #[indexed] old_amount: &BigUint, new_amount: &BigUint);

    #[event("maxBumpTipSet")]
    fn max_bump_tip_set_event(&self, #[indexed] old_tip: &BigUint, new_tip: &BigUint);

    #[event("earningPowerPolicySet")]
    fn earning_power_policy_set_event(&self, #[indexed] kind: EarningPowerKind, cap: &BigUint);

    #[event("gateModeSet")]
    fn gate_mode_set_event(&self, #[indexed] gate: GateKind, #[indexed] mode: AccessMode);

    #[event("gateMembersChanged")]
    fn gate_members_changed_event(
        &self,
        #[indexed] gate: GateKind,
        #[indexed] member: &ManagedAddress,
        #[indexed] listed: bool,
    );

    #[event("nonceInvalidated")]
    fn nonce_invalidated_event(&self, #[indexed] signer: &ManagedAddress, #[indexed] nonce: u64);
}
