multiversx_sc::imports!();

use crate::errors::{
    ERR_ACTIVE_PERIOD, ERR_DURATION_OUT_OF_RANGE, ERR_NOT_NOTIFIER, ERR_RATE_TOO_LOW,
    ERR_REWARD_NOT_BACKED, ERR_WRONG_TOKEN, ERR_ZERO_ADDRESS,
};
use crate::scaled;
use crate::types::Position;

/// Shortest reward period: 7 days in seconds
pub const MIN_REWARD_DURATION: u64 = 7 * 86_400;

/// Longest reward period: 3000 days in seconds
pub const MAX_REWARD_DURATION: u64 = 3_000 * 86_400;

// ============================================================
// Global reward accumulator
// ============================================================

#[multiversx_sc::module]
pub trait RewardsModule:
    crate::admin::AdminModule + crate::events::EventsModule + crate::guard::GuardModule
{
    /// Starts a new reward period of `rewardDuration` seconds. Reward still
    /// owed by the current period rolls into the new rate. Any payment sent
    /// along must be in the reward token; `amount` may also draw on reward
    /// tokens transferred earlier.
    #[payable("*")]
    #[endpoint(notifyRewardAmount)]
    fn notify_reward_amount(&self, amount: BigUint) {
        self.acquire_lock();

        let caller = self.blockchain().get_caller();
        require!(self.reward_notifiers().contains(&caller), ERR_NOT_NOTIFIER);

        let payment = self.call_value().egld_or_single_esdt();
        if payment.amount > 0u64 {
            require!(
                payment.token_identifier == EgldOrEsdtTokenIdentifier::esdt(self.reward_token().get()),
                ERR_WRONG_TOKEN
            );
        }

        self.checkpoint_global_reward();

        let now = self.blockchain().get_block_timestamp();
        let duration = self.reward_duration().get();
        let end = self.reward_end_time().get();

        let remaining = if now >= end {
            BigUint::zero()
        } else {
            self.scaled_reward_rate().get() * BigUint::from(end - now)
        };
        let new_rate = scaled::scaled_rate(&amount, &remaining, duration);
        require!(new_rate >= scaled::scale_factor::<Self::Api>(), ERR_RATE_TOO_LOW);

        // Best effort: a transfer outside this contract's control can still
        // drain the balance after this check.
        let owed = &new_rate * &BigUint::from(duration);
        let available = self.reward_backing_balance();
        require!(owed <= scaled::scale(&available), ERR_REWARD_NOT_BACKED);

        let new_end = now + duration;
        self.scaled_reward_rate().set(&new_rate);
        self.reward_end_time().set(new_end);
        self.last_checkpoint_time().set(now);

        self.reward_notified_event(&caller, new_end, &amount, &new_rate);

        self.release_lock();
    }

    #[endpoint(setRewardNotifier)]
    fn set_reward_notifier(&self, notifier: ManagedAddress, enabled: bool) {
        self.acquire_lock();
        self.require_admin();
        require!(!notifier.is_zero(), ERR_ZERO_ADDRESS);

        if enabled {
            self.reward_notifiers().insert(notifier.clone());
        } else {
            self.reward_notifiers().swap_remove(&notifier);
        }
        self.reward_notifier_set_event(&notifier, enabled);

        self.release_lock();
    }

    #[endpoint(setRewardDuration)]
    fn set_reward_duration(&self, duration: u64) {
        self.acquire_lock();
        self.require_admin();
        require!(!self.is_reward_period_active(), ERR_ACTIVE_PERIOD);
        require!(is_valid_duration(duration), ERR_DURATION_OUT_OF_RANGE);

        let old_duration = self.reward_duration().get();
        self.reward_duration().set(duration);
        self.reward_duration_set_event(old_duration, duration);

        self.release_lock();
    }

    // ========================================================
    // Checkpoints
    // ========================================================

    /// Must run before any balance or earning-power change, otherwise reward
    /// accrued under the old weights is attributed to the new ones.
    fn checkpoint_global_reward(&self) {
        let accumulated = self.reward_per_weight_accumulated();
        self.reward_per_weight_checkpoint().set(&accumulated);
        self.last_checkpoint_time().set(self.last_time_reward_distributed());
    }

    fn checkpoint_position_reward(&self, position: &mut Position<Self::Api>) {
        let accumulated = self.reward_per_weight_checkpoint().get();
        let earned = scaled::accrued(
            &position.earning_power,
            &accumulated,
            &position.reward_per_weight_checkpoint,
        );
        position.scaled_unclaimed_reward += &earned;
        position.reward_per_weight_checkpoint = accumulated;
    }

    /// Reward tokens available to back future payouts. When the reward and
    /// stake token coincide, staked principal is not counted.
    fn reward_backing_balance(&self) -> BigUint {
        let reward_token = self.reward_token().get();
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(reward_token.clone()), 0);
        if reward_token == self.stake_token().get() {
            scaled::saturating_sub(&balance, &self.total_staked().get())
        } else {
            balance
        }
    }

    // ========================================================
    // Views
    // ========================================================

    #[view(lastTimeRewardDistributed)]
    fn last_time_reward_distributed(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let end = self.reward_end_time().get();
        if end <= now {
            end
        } else {
            now
        }
    }

    #[view(rewardPerWeightAccumulated)]
    fn reward_per_weight_accumulated(&self) -> BigUint {
        let last_time = self.last_time_reward_distributed();
        let elapsed = last_time.saturating_sub(self.last_checkpoint_time().get());
        scaled::accumulate(
            &self.reward_per_weight_checkpoint().get(),
            &self.scaled_reward_rate().get(),
            elapsed,
            &self.total_earning_power().get(),
        )
    }

    #[view(isRewardPeriodActive)]
    fn is_reward_period_active(&self) -> bool {
        self.blockchain().get_block_timestamp() < self.reward_end_time().get()
    }

    #[view(isRewardNotifier)]
    fn is_reward_notifier(&self, account: &ManagedAddress) -> bool {
        self.reward_notifiers().contains(account)
    }

    // ========================================================
    // Storage: global ledger state
    // ========================================================

    #[view(getStakeToken)]
    #[storage_mapper("stakeToken")]
    fn stake_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getRewardToken)]
    #[storage_mapper("rewardToken")]
    fn reward_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getTotalStaked)]
    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalEarningPower)]
    #[storage_mapper("totalEarningPower")]
    fn total_earning_power(&self) -> SingleValueMapper<BigUint>;

    #[view(getScaledRewardRate)]
    #[storage_mapper("scaledRewardRate")]
    fn scaled_reward_rate(&self) -> SingleValueMapper<BigUint>;

    #[view(getRewardEndTime)]
    #[storage_mapper("rewardEndTime")]
    fn reward_end_time(&self) -> SingleValueMapper<u64>;

    #[view(getLastCheckpointTime)]
    #[storage_mapper("lastCheckpointTime")]
    fn last_checkpoint_time(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("rewardPerWeightCheckpoint")]
    fn reward_per_weight_checkpoint(&self) -> SingleValueMapper<BigUint>;

    #[view(getRewardDuration)]
    #[storage_mapper("rewardDuration")]
    fn reward_duration(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("rewardNotifiers")]
    fn reward_notifiers(&self) -> UnorderedSetMapper<ManagedAddress>;
}

pub fn is_valid_duration(duration: u64) -> bool {
    (MIN_REWARD_DURATION..=MAX_REWARD_DURATION).contains(&duration)
}
