// Drives a pseudo-random sequence of position actions and checks the ledger
// aggregates after every step.

mod ledger_setup;

use ledger_setup::*;
use multiversx_sc::types::{Address, BigUint};
use multiversx_sc_scenario::{api::DebugApi, managed_address, num_bigint, rust_biguint};

use staking_ledger::rewards::RewardsModule;
use staking_ledger::StakingLedger;

const STEPS: usize = 120;

struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

struct Snapshot {
    accumulator: num_bigint::BigUint,
}

fn check_aggregates<B>(setup: &mut LedgerSetup<B>, position_count: u64) -> Snapshot
where
    B: 'static + Copy + Fn() -> staking_ledger::ContractObj<DebugApi>,
{
    let mut accumulator = num_bigint::BigUint::default();
    setup
        .b_mock
        .execute_query(&setup.ledger, |sc| {
            let mut balances = BigUint::<DebugApi>::zero();
            let mut earning_power = BigUint::<DebugApi>::zero();
            for id in 1..=position_count {
                let position = sc.get_position(id);
                balances += &position.balance;
                earning_power += &position.earning_power;
            }
            assert_eq!(balances, sc.total_staked().get());
            assert_eq!(earning_power, sc.total_earning_power().get());

            let bytes = sc.reward_per_weight_accumulated().to_bytes_be();
            accumulator = num_bigint::BigUint::from_bytes_be(bytes.as_slice());
        })
        .assert_ok();
    Snapshot { accumulator }
}

#[test]
fn random_actions_keep_aggregates_consistent() {
    let options = LedgerOptions {
        reward_token: STAKE_TOKEN,
        ..LedgerOptions::default()
    };
    let mut setup = LedgerSetup::new(staking_ledger::contract_obj, options);
    let users: Vec<Address> = vec![setup.alice.clone(), setup.bob.clone(), setup.carol.clone()];
    let delegatees: Vec<Address> = vec![setup.delegatee_a.clone(), setup.delegatee_b.clone()];

    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    let mut positions: Vec<(u64, Address)> = Vec::new();
    let mut now = START;
    let mut notified = 0u64;
    let mut last_accumulator = num_bigint::BigUint::default();

    for _ in 0..STEPS {
        match rng.below(8) {
            0 | 1 => {
                let owner = users[rng.below(3) as usize].clone();
                let delegatee = delegatees[rng.below(2) as usize].clone();
                let amount = 1 + rng.below(1_000);
                let id = setup.stake(&owner, amount, &delegatee);
                positions.push((id, owner));
            }
            2 if !positions.is_empty() => {
                let (id, owner) = positions[rng.below(positions.len() as u64) as usize].clone();
                let amount = 1 + rng.below(500);
                setup.stake_more(&owner, id, amount).assert_ok();
            }
            3 if !positions.is_empty() => {
                let (id, owner) = positions[rng.below(positions.len() as u64) as usize].clone();
                let balance = setup.position_balance(id);
                if balance > 0 {
                    let amount = 1 + rng.below(balance);
                    setup.withdraw(&owner, id, amount).assert_ok();
                }
            }
            4 if !positions.is_empty() => {
                let (id, owner) = positions[rng.below(positions.len() as u64) as usize].clone();
                setup.claim(&owner, id);
            }
            5 if !positions.is_empty() => {
                let (id, owner) = positions[rng.below(positions.len() as u64) as usize].clone();
                setup.compound(&owner, id);
            }
            6 if !positions.is_empty() => {
                let (id, owner) = positions[rng.below(positions.len() as u64) as usize].clone();
                let delegatee = delegatees[rng.below(2) as usize].clone();
                setup
                    .b_mock
                    .execute_tx(&owner, &setup.ledger, &rust_biguint!(0u64), |sc| {
                        sc.alter_delegatee(id, managed_address!(&delegatee));
                    })
                    .assert_ok();
            }
            _ => {
                if notified < 5 && !positions.is_empty() {
                    setup.notify(DURATION * (1 + rng.below(3))).assert_ok();
                    notified += 1;
                }
            }
        }

        now += rng.below(DURATION / 4);
        setup.advance_to(now);

        let snapshot = check_aggregates(&mut setup, positions.len() as u64);
        assert!(snapshot.accumulator >= last_accumulator);
        last_accumulator = snapshot.accumulator;
    }
}
