#![allow(dead_code)]

use allocation_mechanism_mock::AllocationMechanismMock;
use multiversx_sc::codec::multi_types::OptionalValue;
use multiversx_sc::types::{Address, ManagedBuffer, MultiValueEncoded};
use multiversx_sc_scenario::{
    api::DebugApi, managed_address, managed_biguint, managed_token_id, rust_biguint,
    whitebox_legacy::*,
};

use staking_ledger::access::AccessGatesModule;
use staking_ledger::admin::AdminModule;
use staking_ledger::config::ConfigModule;
use staking_ledger::rewards::RewardsModule;
use staking_ledger::types::{CustodyMode, GateKind, PausePolicy};
use staking_ledger::StakingLedger;

pub const STAKE_TOKEN: &[u8] = b"STAKE-123456";
pub const REWARD_TOKEN: &[u8] = b"REWARD-123456";
pub const WASM_PATH: &str = "output/staking-ledger.wasm";
pub const MECHANISM_WASM_PATH: &str = "mocks/allocation-mechanism/output/allocation-mechanism-mock.wasm";

/// Minimum allowed reward duration: 7 days
pub const DURATION: u64 = 7 * 86_400;
pub const START: u64 = 1_700_000_000;

/// Notifying `n * REWARD_UNIT` streams `n` reward units per second over
/// `DURATION`. Smaller notifications round the rate down to zero.
pub const REWARD_UNIT: u64 = DURATION;

pub const MAX_CLAIM_FEE: u64 = 50;
pub const MAX_BUMP_TIP: u64 = 10;
pub const USER_BALANCE: u64 = 1_000_000;
pub const NOTIFIER_BALANCE: u64 = 10_000 * REWARD_UNIT;

pub type MechanismContract = allocation_mechanism_mock::ContractObj<DebugApi>;
pub type MechanismWrapper = ContractObjWrapper<MechanismContract, fn() -> MechanismContract>;

pub struct LedgerOptions {
    pub reward_token: &'static [u8],
    pub custody_mode: CustodyMode,
    pub pause_policy: PausePolicy,
}

impl Default for LedgerOptions {
    fn default() -> Self {
        LedgerOptions {
            reward_token: REWARD_TOKEN,
            custody_mode: CustodyMode::PerDelegatee,
            pause_policy: PausePolicy::AllowExits,
        }
    }
}

pub struct LedgerSetup<LedgerObjBuilder>
where
    LedgerObjBuilder: 'static + Copy + Fn() -> staking_ledger::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub admin: Address,
    pub notifier: Address,
    pub alice: Address,
    pub bob: Address,
    pub carol: Address,
    pub delegatee_a: Address,
    pub delegatee_b: Address,
    pub collector: Address,
    pub mechanism: Address,
    pub mechanism_sc: MechanismWrapper,
    pub reward_token: &'static [u8],
    pub ledger: ContractObjWrapper<staking_ledger::ContractObj<DebugApi>, LedgerObjBuilder>,
}

impl<LedgerObjBuilder> LedgerSetup<LedgerObjBuilder>
where
    LedgerObjBuilder: 'static + Copy + Fn() -> staking_ledger::ContractObj<DebugApi>,
{
    pub fn new(builder: LedgerObjBuilder, options: LedgerOptions) -> Self {
        let rust_zero = rust_biguint!(0u64);
        let mut b_mock = BlockchainStateWrapper::new();
        b_mock.set_block_timestamp(START);

        let admin = b_mock.create_user_account(&rust_zero);
        let notifier = b_mock.create_user_account(&rust_zero);
        let alice = b_mock.create_user_account(&rust_zero);
        let bob = b_mock.create_user_account(&rust_zero);
        let carol = b_mock.create_user_account(&rust_zero);
        let delegatee_a = b_mock.create_user_account(&rust_zero);
        let delegatee_b = b_mock.create_user_account(&rust_zero);
        let collector = b_mock.create_user_account(&rust_zero);

        for user in [&alice, &bob, &carol] {
            b_mock.set_esdt_balance(user, STAKE_TOKEN, &rust_biguint!(USER_BALANCE));
        }
        b_mock.set_esdt_balance(&notifier, options.reward_token, &rust_biguint!(NOTIFIER_BALANCE));

        let ledger = b_mock.create_sc_account(&rust_zero, Some(&admin), builder, WASM_PATH);
        let mechanism_sc = b_mock.create_sc_account(
            &rust_zero,
            Some(&admin),
            allocation_mechanism_mock::contract_obj::<DebugApi> as fn() -> MechanismContract,
            MECHANISM_WASM_PATH,
        );
        let mechanism = mechanism_sc.address_ref().clone();

        let reward_token = options.reward_token;
        b_mock
            .execute_tx(&admin, &ledger, &rust_zero, |sc| {
                sc.init(
                    managed_token_id!(STAKE_TOKEN),
                    managed_token_id!(reward_token),
                    options.custody_mode,
                    options.pause_policy,
                    DURATION,
                    managed_biguint!(MAX_CLAIM_FEE),
                    managed_biguint!(MAX_BUMP_TIP),
                    managed_biguint!(0u64),
                );
                sc.set_reward_notifier(managed_address!(&notifier), true);
            })
            .assert_ok();

        LedgerSetup {
            b_mock,
            admin,
            notifier,
            alice,
            bob,
            carol,
            delegatee_a,
            delegatee_b,
            collector,
            mechanism,
            mechanism_sc,
            reward_token,
            ledger,
        }
    }

    // ========================================================
    // Position actions
    // ========================================================

    pub fn stake(&mut self, owner: &Address, amount: u64, delegatee: &Address) -> u64 {
        let mut position_id = 0u64;
        self.b_mock
            .execute_esdt_transfer(owner, &self.ledger, STAKE_TOKEN, 0, &rust_biguint!(amount), |sc| {
                position_id = sc.stake(managed_address!(delegatee), OptionalValue::None);
            })
            .assert_ok();
        position_id
    }

    pub fn stake_more(&mut self, owner: &Address, position_id: u64, amount: u64) -> TxResult {
        self.b_mock
            .execute_esdt_transfer(owner, &self.ledger, STAKE_TOKEN, 0, &rust_biguint!(amount), |sc| {
                sc.stake_more(position_id);
            })
    }

    pub fn withdraw(&mut self, owner: &Address, position_id: u64, amount: u64) -> TxResult {
        self.b_mock
            .execute_tx(owner, &self.ledger, &rust_biguint!(0u64), |sc| {
                sc.withdraw(position_id, managed_biguint!(amount));
            })
    }

    pub fn claim(&mut self, caller: &Address, position_id: u64) -> u64 {
        let mut payout = 0u64;
        self.b_mock
            .execute_tx(caller, &self.ledger, &rust_biguint!(0u64), |sc| {
                payout = sc.claim_reward(position_id).to_u64().unwrap();
            })
            .assert_ok();
        payout
    }

    pub fn compound(&mut self, caller: &Address, position_id: u64) -> u64 {
        let mut compounded = 0u64;
        self.b_mock
            .execute_tx(caller, &self.ledger, &rust_biguint!(0u64), |sc| {
                compounded = sc.compound_rewards(position_id).to_u64().unwrap();
            })
            .assert_ok();
        compounded
    }

    pub fn notify(&mut self, amount: u64) -> TxResult {
        let notifier = self.notifier.clone();
        self.b_mock.execute_esdt_transfer(
            &notifier,
            &self.ledger,
            self.reward_token,
            0,
            &rust_biguint!(amount),
            |sc| {
                sc.notify_reward_amount(managed_biguint!(amount));
            },
        )
    }

    pub fn contribute(
        &mut self,
        caller: &Address,
        position_id: u64,
        amount: u64,
        deadline: u64,
    ) -> TxResult {
        let mechanism = self.mechanism.clone();
        self.b_mock
            .execute_tx(caller, &self.ledger, &rust_biguint!(0u64), |sc| {
                sc.contribute(
                    position_id,
                    managed_address!(&mechanism),
                    managed_biguint!(amount),
                    deadline,
                    ManagedBuffer::new_from_bytes(b"signature"),
                );
            })
    }

    pub fn set_mechanism_rejecting(&mut self, rejecting: bool) {
        let admin = self.admin.clone();
        self.b_mock
            .execute_tx(&admin, &self.mechanism_sc, &rust_biguint!(0u64), |sc| {
                sc.set_rejecting(rejecting);
            })
            .assert_ok();
    }

    // ========================================================
    // Administration
    // ========================================================

    pub fn set_minimum_stake(&mut self, amount: u64) -> TxResult {
        let admin = self.admin.clone();
        self.b_mock
            .execute_tx(&admin, &self.ledger, &rust_biguint!(0u64), |sc| {
                sc.set_minimum_stake_amount(managed_biguint!(amount));
            })
    }

    pub fn set_claim_fee(&mut self, amount: u64) -> TxResult {
        let admin = self.admin.clone();
        let collector = self.collector.clone();
        self.b_mock
            .execute_tx(&admin, &self.ledger, &rust_biguint!(0u64), |sc| {
                sc.set_claim_fee_parameters(managed_biguint!(amount), managed_address!(&collector));
            })
    }

    pub fn add_gate_member(&mut self, gate: GateKind, member: &Address) -> TxResult {
        let admin = self.admin.clone();
        self.b_mock
            .execute_tx(&admin, &self.ledger, &rust_biguint!(0u64), |sc| {
                let mut members = MultiValueEncoded::new();
                members.push(managed_address!(member));
                sc.add_gate_members(gate, members);
            })
    }

    pub fn pause(&mut self) {
        let admin = self.admin.clone();
        self.b_mock
            .execute_tx(&admin, &self.ledger, &rust_biguint!(0u64), |sc| {
                sc.pause();
            })
            .assert_ok();
    }

    pub fn advance_to(&mut self, timestamp: u64) {
        self.b_mock.set_block_timestamp(timestamp);
    }

    // ========================================================
    // Queries
    // ========================================================

    pub fn position_balance(&mut self, position_id: u64) -> u64 {
        let mut balance = 0u64;
        self.b_mock
            .execute_query(&self.ledger, |sc| {
                balance = sc.get_position(position_id).balance.to_u64().unwrap();
            })
            .assert_ok();
        balance
    }

    pub fn unclaimed(&mut self, position_id: u64) -> u64 {
        let mut unclaimed = 0u64;
        self.b_mock
            .execute_query(&self.ledger, |sc| {
                unclaimed = sc.get_unclaimed_reward(position_id).to_u64().unwrap();
            })
            .assert_ok();
        unclaimed
    }

    pub fn total_staked(&mut self) -> u64 {
        let mut total = 0u64;
        self.b_mock
            .execute_query(&self.ledger, |sc| {
                total = sc.total_staked().get().to_u64().unwrap();
            })
            .assert_ok();
        total
    }

    pub fn is_paused(&mut self) -> bool {
        let mut paused = false;
        self.b_mock
            .execute_query(&self.ledger, |sc| {
                paused = sc.paused().get();
            })
            .assert_ok();
        paused
    }
}
