#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod admin;
pub mod allocation_mechanism_proxy;
pub mod authorization;
pub mod config;
pub mod custody;
pub mod earning_power;
pub mod errors;
pub mod events;
pub mod guard;
pub mod rewards;
pub mod scaled;
pub mod types;

use authorization::{
    ACTION_ALTER_CLAIMER, ACTION_ALTER_DELEGATEE, ACTION_CLAIM, ACTION_STAKE, ACTION_STAKE_MORE,
    ACTION_WITHDRAW,
};
use errors::{
    ERR_BELOW_MINIMUM, ERR_CANNOT_COVER_FEE, ERR_CANNOT_COVER_TIP, ERR_COMPOUND_UNSUPPORTED,
    ERR_CONTRIBUTION_GATE, ERR_DURATION_OUT_OF_RANGE, ERR_EXCEEDS_UNCLAIMED, ERR_INVALID_TOKEN,
    ERR_MECHANISM_GATE, ERR_NOT_OWNER, ERR_NOT_OWNER_OR_CLAIMER, ERR_NOT_QUALIFIED,
    ERR_POSITION_NOT_FOUND, ERR_STAKER_GATE, ERR_TIP_TOO_HIGH, ERR_WITHDRAW_EXCEEDS_BALANCE,
    ERR_WRONG_TOKEN, ERR_ZERO_ADDRESS, ERR_ZERO_AMOUNT,
};
use types::{
    AccessMode, ClaimFeeParameters, ContributionAuthorization, CustodyMode, EarningPowerKind,
    EarningPowerPolicy, GateKind, PausePolicy, Position,
};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait StakingLedger:
    admin::AdminModule
    + events::EventsModule
    + access::AccessGatesModule
    + rewards::RewardsModule
    + config::ConfigModule
    + earning_power::EarningPowerModule
    + custody::CustodyModule
    + authorization::AuthorizationModule
    + guard::GuardModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        stake_token: TokenIdentifier,
        reward_token: TokenIdentifier,
        custody_mode: CustodyMode,
        pause_policy: PausePolicy,
        reward_duration: u64,
        max_claim_fee: BigUint,
        max_bump_tip: BigUint,
        minimum_stake_amount: BigUint,
    ) {
        require!(stake_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(reward_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(
            rewards::is_valid_duration(reward_duration),
            ERR_DURATION_OUT_OF_RANGE
        );

        let caller = self.blockchain().get_caller();
        self.admin().set(&caller);

        self.stake_token().set(&stake_token);
        self.reward_token().set(&reward_token);
        self.custody_mode().set(custody_mode);
        self.pause_policy().set(pause_policy);
        self.reward_duration().set(reward_duration);

        self.max_claim_fee().set(&max_claim_fee);
        self.claim_fee_parameters().set(ClaimFeeParameters {
            fee_amount: BigUint::zero(),
            fee_collector: caller,
        });
        self.max_bump_tip().set(&max_bump_tip);
        self.minimum_stake_amount().set(&minimum_stake_amount);

        self.earning_power_policy().set(EarningPowerPolicy {
            kind: EarningPowerKind::Capped,
            cap: earning_power::default_cap(),
        });
        self.gate_mode(GateKind::Mechanism).set(AccessMode::Allowlist);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: stake
    // Opens a position owned by the caller. Claimer defaults to the owner.
    // ========================================================

    #[payable("*")]
    #[endpoint(stake)]
    fn stake(&self, delegatee: ManagedAddress, claimer: OptionalValue<ManagedAddress>) -> u64 {
        self.acquire_lock();
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let amount = self.receive_stake_payment();
        let claimer = match claimer {
            OptionalValue::Some(claimer) => claimer,
            OptionalValue::None => caller.clone(),
        };

        let position_id = self.open_position(&caller, &delegatee, &claimer, &amount);

        self.release_lock();
        position_id
    }

    // ========================================================
    // ENDPOINT: stakeMore
    // ========================================================

    #[payable("*")]
    #[endpoint(stakeMore)]
    fn stake_more(&self, position_id: u64) {
        self.acquire_lock();
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let position = self.load_position(position_id);
        require!(position.owner == caller, ERR_NOT_OWNER);

        let amount = self.receive_stake_payment();
        self.top_up(position, &amount);

        self.release_lock();
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Stake goes back to the owner. Draining to zero is always allowed;
    // anything else must leave at least the minimum stake behind.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, position_id: u64, amount: BigUint) {
        self.acquire_lock();
        self.require_exit_allowed();

        let caller = self.blockchain().get_caller();
        let position = self.load_position(position_id);
        require!(position.owner == caller, ERR_NOT_OWNER);

        self.withdraw_from(position, &amount);

        self.release_lock();
    }

    // ========================================================
    // ENDPOINT: claimReward
    // Pays the realised reward, net of the claim fee, to the claimer.
    // Returns 0 without failing when there is nothing to pay.
    // ========================================================

    #[endpoint(claimReward)]
    fn claim_reward(&self, position_id: u64) -> BigUint {
        self.acquire_lock();
        self.require_exit_allowed();

        let caller = self.blockchain().get_caller();
        let position = self.load_position(position_id);
        require!(
            position.owner == caller || position.claimer == caller,
            ERR_NOT_OWNER_OR_CLAIMER
        );

        let payout = self.claim_for(position);

        self.release_lock();
        payout
    }

    // ========================================================
    // ENDPOINT: compoundRewards
    // Restakes the realised reward into the same position.
    // Only meaningful when rewards are paid in the stake token.
    // ========================================================

    #[endpoint(compoundRewards)]
    fn compound_rewards(&self, position_id: u64) -> BigUint {
        self.acquire_lock();
        require!(
            self.reward_token().get() == self.stake_token().get(),
            ERR_COMPOUND_UNSUPPORTED
        );
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let mut position = self.load_position(position_id);
        require!(
            position.owner == caller || position.claimer == caller,
            ERR_NOT_OWNER_OR_CLAIMER
        );
        require!(
            self.has_access(GateKind::Staker, &position.owner),
            ERR_STAKER_GATE
        );

        self.checkpoint_position(&mut position);

        let reward = scaled::descale_settled(&position.scaled_unclaimed_reward);
        let fee_parameters = self.claim_fee_parameters().get();
        let (fee, compounded) = match scaled::split_fee(&reward, &fee_parameters.fee_amount) {
            Some(split) => split,
            None => {
                self.positions(position_id).set(&position);
                self.release_lock();
                return BigUint::zero();
            }
        };

        position.scaled_unclaimed_reward =
            scaled::saturating_sub(&position.scaled_unclaimed_reward, &scaled::scale(&reward));

        self.custody_deposit(&position.delegatee, &compounded);
        let new_balance = &position.balance + &compounded;
        self.set_position_balance(&mut position, new_balance);
        self.refresh_earning_power(&mut position);
        require!(
            self.meets_minimum_stake(&position.balance),
            ERR_BELOW_MINIMUM
        );
        self.positions(position_id).set(&position);

        let reward_token = self.reward_token().get();
        self.send_tokens(&fee_parameters.fee_collector, &reward_token, &fee);

        self.reward_compounded_event(position_id, &caller, &compounded, &fee);

        self.release_lock();
        compounded
    }

    // ========================================================
    // ENDPOINT: contribute
    // Redirects part of the unclaimed reward to an approved allocation
    // mechanism. Once the tokens leave, the mechanism is trusted with them.
    // The call is synchronous, so mechanisms must live in the ledger's
    // shard; a failing `signUp` reverts the whole contribution.
    // ========================================================

    #[endpoint(contribute)]
    fn contribute(
        &self,
        position_id: u64,
        mechanism: ManagedAddress,
        amount: BigUint,
        deadline: u64,
        signature: ManagedBuffer,
    ) -> BigUint {
        self.acquire_lock();
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let mut position = self.load_position(position_id);
        require!(
            position.owner == caller || position.claimer == caller,
            ERR_NOT_OWNER_OR_CLAIMER
        );

        // ── Gates: owner may contribute, target is an approved mechanism ──
        require!(
            self.has_access(GateKind::Contribution, &position.owner),
            ERR_CONTRIBUTION_GATE
        );
        require!(
            self.has_access(GateKind::Mechanism, &mechanism),
            ERR_MECHANISM_GATE
        );
        self.require_not_expired(deadline);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.checkpoint_position(&mut position);

        let unclaimed = scaled::descale_settled(&position.scaled_unclaimed_reward);
        require!(amount <= unclaimed, ERR_EXCEEDS_UNCLAIMED);
        let fee_parameters = self.claim_fee_parameters().get();
        let (fee, net_amount) = match scaled::split_fee(&amount, &fee_parameters.fee_amount) {
            Some(split) => split,
            None => sc_panic!(ERR_CANNOT_COVER_FEE),
        };

        position.scaled_unclaimed_reward =
            scaled::saturating_sub(&position.scaled_unclaimed_reward, &scaled::scale(&amount));
        self.refresh_earning_power(&mut position);
        require!(
            self.meets_minimum_stake(&position.balance),
            ERR_BELOW_MINIMUM
        );
        self.positions(position_id).set(&position);

        let nonce = self.consume_nonce(&caller);
        let reward_token = self.reward_token().get();
        self.send_tokens(&fee_parameters.fee_collector, &reward_token, &fee);

        let authorization = ContributionAuthorization {
            signer: caller.clone(),
            amount: net_amount.clone(),
            nonce,
            deadline,
            signature,
        };
        self.tx()
            .to(&mechanism)
            .typed(allocation_mechanism_proxy::AllocationMechanismProxy)
            .sign_up(&caller, authorization)
            .single_esdt(&reward_token, 0, &net_amount)
            .sync_call();

        self.reward_contributed_event(position_id, &caller, &mechanism, &net_amount, &fee);

        self.release_lock();
        net_amount
    }

    // ========================================================
    // ENDPOINT: alterDelegatee / alterClaimer
    // ========================================================

    #[endpoint(alterDelegatee)]
    fn alter_delegatee(&self, position_id: u64, new_delegatee: ManagedAddress) {
        self.acquire_lock();
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let position = self.load_position(position_id);
        require!(position.owner == caller, ERR_NOT_OWNER);

        self.set_delegatee(position, &new_delegatee);

        self.release_lock();
    }

    #[endpoint(alterClaimer)]
    fn alter_claimer(&self, position_id: u64, new_claimer: ManagedAddress) {
        self.acquire_lock();
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let position = self.load_position(position_id);
        require!(position.owner == caller, ERR_NOT_OWNER);

        self.set_claimer(position, &new_claimer);

        self.release_lock();
    }

    // ========================================================
    // ENDPOINT: bumpEarningPower
    // Anyone may refresh a stale earning power and take a tip, paid from
    // the position's unclaimed reward, for doing so.
    // ========================================================

    #[endpoint(bumpEarningPower)]
    fn bump_earning_power(&self, position_id: u64, tip_receiver: ManagedAddress, requested_tip: BigUint) {
        self.acquire_lock();
        self.require_not_paused();

        let max_tip = self.max_bump_tip().get();
        require!(requested_tip <= max_tip, ERR_TIP_TOO_HIGH);
        require!(!tip_receiver.is_zero(), ERR_ZERO_ADDRESS);

        let mut position = self.load_position(position_id);
        self.checkpoint_position(&mut position);

        let unclaimed = scaled::descale_settled(&position.scaled_unclaimed_reward);
        let old_earning_power = position.earning_power.clone();
        let (new_earning_power, qualifies) = self.recalc_earning_power(
            &position.balance,
            &position.owner,
            &position.delegatee,
            &old_earning_power,
        );
        require!(qualifies, ERR_NOT_QUALIFIED);

        // A falling weight must still leave room for a full tip afterwards.
        if new_earning_power > old_earning_power {
            require!(unclaimed >= requested_tip, ERR_CANNOT_COVER_TIP);
        } else {
            require!(unclaimed >= &requested_tip + &max_tip, ERR_CANNOT_COVER_TIP);
        }

        self.apply_earning_power(&mut position, new_earning_power.clone());
        position.scaled_unclaimed_reward = scaled::saturating_sub(
            &position.scaled_unclaimed_reward,
            &scaled::scale(&requested_tip),
        );
        self.positions(position_id).set(&position);

        let reward_token = self.reward_token().get();
        self.send_tokens(&tip_receiver, &reward_token, &requested_tip);

        self.earning_power_bumped_event(
            position_id,
            &tip_receiver,
            &old_earning_power,
            &new_earning_power,
            &requested_tip,
        );

        self.release_lock();
    }

    // ========================================================
    // ENDPOINTS: signed delegated operations
    // The caller relays an owner-signed authorization; gates and
    // ownership are evaluated against the signer, never the relayer.
    // ========================================================

    #[payable("*")]
    #[endpoint(stakeOnBehalf)]
    fn stake_on_behalf(
        &self,
        owner: ManagedAddress,
        delegatee: ManagedAddress,
        claimer: ManagedAddress,
        deadline: u64,
        signature: ManagedBuffer,
    ) -> u64 {
        self.acquire_lock();
        self.require_not_paused();

        let amount = self.receive_stake_payment();
        self.verify_signed_action(
            &owner,
            ACTION_STAKE,
            0,
            &amount,
            &delegatee,
            &claimer,
            deadline,
            &signature,
        );
        let position_id = self.open_position(&owner, &delegatee, &claimer, &amount);

        self.release_lock();
        position_id
    }

    #[payable("*")]
    #[endpoint(stakeMoreOnBehalf)]
    fn stake_more_on_behalf(&self, position_id: u64, deadline: u64, signature: ManagedBuffer) {
        self.acquire_lock();
        self.require_not_paused();

        let position = self.load_position(position_id);
        let amount = self.receive_stake_payment();
        self.verify_signed_action(
            &position.owner,
            ACTION_STAKE_MORE,
            position_id,
            &amount,
            &ManagedAddress::zero(),
            &ManagedAddress::zero(),
            deadline,
            &signature,
        );
        self.top_up(position, &amount);

        self.release_lock();
    }

    #[endpoint(withdrawOnBehalf)]
    fn withdraw_on_behalf(
        &self,
        position_id: u64,
        amount: BigUint,
        deadline: u64,
        signature: ManagedBuffer,
    ) {
        self.acquire_lock();
        self.require_exit_allowed();

        let position = self.load_position(position_id);
        self.verify_signed_action(
            &position.owner,
            ACTION_WITHDRAW,
            position_id,
            &amount,
            &ManagedAddress::zero(),
            &ManagedAddress::zero(),
            deadline,
            &signature,
        );
        self.withdraw_from(position, &amount);

        self.release_lock();
    }

    /// `signer` must be the position's owner or claimer.
    #[endpoint(claimRewardOnBehalf)]
    fn claim_reward_on_behalf(
        &self,
        position_id: u64,
        signer: ManagedAddress,
        deadline: u64,
        signature: ManagedBuffer,
    ) -> BigUint {
        self.acquire_lock();
        self.require_exit_allowed();

        let position = self.load_position(position_id);
        require!(
            position.owner == signer || position.claimer == signer,
            ERR_NOT_OWNER_OR_CLAIMER
        );
        self.verify_signed_action(
            &signer,
            ACTION_CLAIM,
            position_id,
            &BigUint::zero(),
            &ManagedAddress::zero(),
            &ManagedAddress::zero(),
            deadline,
            &signature,
        );
        let payout = self.claim_for(position);

        self.release_lock();
        payout
    }

    #[endpoint(alterDelegateeOnBehalf)]
    fn alter_delegatee_on_behalf(
        &self,
        position_id: u64,
        new_delegatee: ManagedAddress,
        deadline: u64,
        signature: ManagedBuffer,
    ) {
        self.acquire_lock();
        self.require_not_paused();

        let position = self.load_position(position_id);
        self.verify_signed_action(
            &position.owner,
            ACTION_ALTER_DELEGATEE,
            position_id,
            &BigUint::zero(),
            &new_delegatee,
            &ManagedAddress::zero(),
            deadline,
            &signature,
        );
        self.set_delegatee(position, &new_delegatee);

        self.release_lock();
    }

    #[endpoint(alterClaimerOnBehalf)]
    fn alter_claimer_on_behalf(
        &self,
        position_id: u64,
        new_claimer: ManagedAddress,
        deadline: u64,
        signature: ManagedBuffer,
    ) {
        self.acquire_lock();
        self.require_not_paused();

        let position = self.load_position(position_id);
        self.verify_signed_action(
            &position.owner,
            ACTION_ALTER_CLAIMER,
            position_id,
            &BigUint::zero(),
            &ManagedAddress::zero(),
            &new_claimer,
            deadline,
            &signature,
        );
        self.set_claimer(position, &new_claimer);

        self.release_lock();
    }

    // ========================================================
    // INTERNAL: position transitions
    // Each one checkpoints first, then changes balance or weight.
    // ========================================================

    fn open_position(
        &self,
        owner: &ManagedAddress,
        delegatee: &ManagedAddress,
        claimer: &ManagedAddress,
        amount: &BigUint,
    ) -> u64 {
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);
        require!(!delegatee.is_zero() && !claimer.is_zero(), ERR_ZERO_ADDRESS);
        // ── Gate: checked against the owner, never a relayer ──
        require!(self.has_access(GateKind::Staker, owner), ERR_STAKER_GATE);

        self.checkpoint_global_reward();

        let position_id = self.position_count().get() + 1;
        self.position_count().set(position_id);
        let mut position = Position {
            id: position_id,
            owner: owner.clone(),
            delegatee: delegatee.clone(),
            claimer: claimer.clone(),
            balance: BigUint::zero(),
            earning_power: BigUint::zero(),
            reward_per_weight_checkpoint: self.reward_per_weight_checkpoint().get(),
            scaled_unclaimed_reward: BigUint::zero(),
        };

        self.custody_deposit(delegatee, amount);
        self.set_position_balance(&mut position, amount.clone());
        self.refresh_earning_power(&mut position);
        require!(
            self.meets_minimum_stake(&position.balance),
            ERR_BELOW_MINIMUM
        );
        self.positions(position_id).set(&position);

        self.stake_deposited_event(
            position_id,
            owner,
            amount,
            &position.balance,
            &position.earning_power,
        );

        position_id
    }

    fn top_up(&self, position: Position<Self::Api>, amount: &BigUint) {
        let mut position = position;
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);
        require!(
            self.has_access(GateKind::Staker, &position.owner),
            ERR_STAKER_GATE
        );

        self.checkpoint_position(&mut position);

        self.custody_deposit(&position.delegatee, amount);
        let new_balance = &position.balance + amount;
        self.set_position_balance(&mut position, new_balance);
        self.refresh_earning_power(&mut position);
        require!(
            self.meets_minimum_stake(&position.balance),
            ERR_BELOW_MINIMUM
        );
        self.positions(position.id).set(&position);

        self.stake_deposited_event(
            position.id,
            &position.owner,
            amount,
            &position.balance,
            &position.earning_power,
        );
    }

    fn withdraw_from(&self, position: Position<Self::Api>, amount: &BigUint) {
        let mut position = position;
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);
        require!(*amount <= position.balance, ERR_WITHDRAW_EXCEEDS_BALANCE);

        self.checkpoint_position(&mut position);

        self.custody_withdraw(&position.delegatee, amount);
        let new_balance = &position.balance - amount;
        self.set_position_balance(&mut position, new_balance);
        self.refresh_earning_power(&mut position);
        require!(
            self.meets_minimum_stake(&position.balance),
            ERR_BELOW_MINIMUM
        );
        self.positions(position.id).set(&position);

        let stake_token = self.stake_token().get();
        self.send_tokens(&position.owner, &stake_token, amount);

        self.stake_withdrawn_event(
            position.id,
            &position.owner,
            amount,
            &position.balance,
            &position.earning_power,
        );
    }

    fn claim_for(&self, position: Position<Self::Api>) -> BigUint {
        let mut position = position;
        self.checkpoint_position(&mut position);

        let reward = scaled::descale_settled(&position.scaled_unclaimed_reward);
        let fee_parameters = self.claim_fee_parameters().get();
        let (fee, payout) = match scaled::split_fee(&reward, &fee_parameters.fee_amount) {
            Some(split) => split,
            None => {
                self.positions(position.id).set(&position);
                return BigUint::zero();
            }
        };

        position.scaled_unclaimed_reward =
            scaled::saturating_sub(&position.scaled_unclaimed_reward, &scaled::scale(&reward));
        self.refresh_earning_power(&mut position);
        require!(
            self.meets_minimum_stake(&position.balance),
            ERR_BELOW_MINIMUM
        );
        self.positions(position.id).set(&position);

        let reward_token = self.reward_token().get();
        self.send_tokens(&fee_parameters.fee_collector, &reward_token, &fee);
        self.send_tokens(&position.claimer, &reward_token, &payout);

        self.reward_claimed_event(position.id, &position.claimer, &payout, &fee);

        payout
    }

    fn set_delegatee(&self, position: Position<Self::Api>, new_delegatee: &ManagedAddress) {
        let mut position = position;
        require!(!new_delegatee.is_zero(), ERR_ZERO_ADDRESS);

        self.checkpoint_position(&mut position);

        let old_delegatee = position.delegatee.clone();
        self.custody_transfer(&old_delegatee, new_delegatee, &position.balance);
        position.delegatee = new_delegatee.clone();
        self.refresh_earning_power(&mut position);
        self.positions(position.id).set(&position);

        self.delegatee_altered_event(
            position.id,
            &old_delegatee,
            new_delegatee,
            &position.earning_power,
        );
    }

    fn set_claimer(&self, position: Position<Self::Api>, new_claimer: &ManagedAddress) {
        let mut position = position;
        require!(!new_claimer.is_zero(), ERR_ZERO_ADDRESS);

        self.checkpoint_position(&mut position);

        let old_claimer = position.claimer.clone();
        position.claimer = new_claimer.clone();
        self.refresh_earning_power(&mut position);
        self.positions(position.id).set(&position);

        self.claimer_altered_event(
            position.id,
            &old_claimer,
            new_claimer,
            &position.earning_power,
        );
    }

    // ========================================================
    // INTERNAL: aggregates
    // ========================================================

    fn checkpoint_position(&self, position: &mut Position<Self::Api>) {
        self.checkpoint_global_reward();
        self.checkpoint_position_reward(position);
    }

    fn set_position_balance(&self, position: &mut Position<Self::Api>, new_balance: BigUint) {
        let owner = position.owner.clone();
        if new_balance >= position.balance {
            let delta = &new_balance - &position.balance;
            self.total_staked().update(|total| *total += &delta);
            self.depositor_total_staked(&owner).update(|total| *total += &delta);
        } else {
            let delta = &position.balance - &new_balance;
            self.total_staked().update(|total| *total -= &delta);
            self.depositor_total_staked(&owner).update(|total| *total -= &delta);
        }
        position.balance = new_balance;
    }

    fn apply_earning_power(&self, position: &mut Position<Self::Api>, new_earning_power: BigUint) {
        if new_earning_power == position.earning_power {
            return;
        }

        let owner = position.owner.clone();
        if new_earning_power > position.earning_power {
            let delta = &new_earning_power - &position.earning_power;
            self.total_earning_power().update(|total| *total += &delta);
            self.depositor_total_earning_power(&owner)
                .update(|total| *total += &delta);
        } else {
            let delta = &position.earning_power - &new_earning_power;
            self.total_earning_power().update(|total| *total -= &delta);
            self.depositor_total_earning_power(&owner)
                .update(|total| *total -= &delta);
        }

        self.earning_power_altered_event(position.id, &position.earning_power, &new_earning_power);
        position.earning_power = new_earning_power;
    }

    /// Policy may have changed since the last touch, so every transition
    /// re-derives the weight rather than scaling the old one.
    fn refresh_earning_power(&self, position: &mut Position<Self::Api>) {
        let new_earning_power =
            self.earning_power_of(&position.balance, &position.owner, &position.delegatee);
        self.apply_earning_power(position, new_earning_power);
    }

    // ========================================================
    // INTERNAL: value transfer
    // ========================================================

    fn receive_stake_payment(&self) -> BigUint {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.stake_token().get(),
            ERR_WRONG_TOKEN
        );
        payment.amount.clone()
    }

    fn send_tokens(&self, to: &ManagedAddress, token: &TokenIdentifier, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        self.send().direct_esdt(to, token, 0, amount);
    }

    fn load_position(&self, position_id: u64) -> Position<Self::Api> {
        require!(
            !self.positions(position_id).is_empty(),
            ERR_POSITION_NOT_FOUND
        );
        self.positions(position_id).get()
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(getPosition)]
    fn get_position(&self, position_id: u64) -> Position<Self::Api> {
        self.load_position(position_id)
    }

    /// Reward the position could realise right now, before fees.
    #[view(getUnclaimedReward)]
    fn get_unclaimed_reward(&self, position_id: u64) -> BigUint {
        let position = self.load_position(position_id);
        let earned = scaled::accrued(
            &position.earning_power,
            &self.reward_per_weight_accumulated(),
            &position.reward_per_weight_checkpoint,
        );
        scaled::descale_settled(&(&position.scaled_unclaimed_reward + &earned))
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getPositionCount)]
    #[storage_mapper("positionCount")]
    fn position_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("positions")]
    fn positions(&self, position_id: u64) -> SingleValueMapper<Position<Self::Api>>;

    #[view(getDepositorTotalStaked)]
    #[storage_mapper("depositorTotalStaked")]
    fn depositor_total_staked(&self, owner: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getDepositorTotalEarningPower)]
    #[storage_mapper("depositorTotalEarningPower")]
    fn depositor_total_earning_power(&self, owner: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
