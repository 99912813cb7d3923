multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Position: a single staking record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Position<M: ManagedTypeApi> {
    pub id: u64,
    pub owner: ManagedAddress<M>,
    pub delegatee: ManagedAddress<M>,
    /// Address that receives claimed rewards and may claim on the owner's behalf
    pub claimer: ManagedAddress<M>,
    pub balance: BigUint<M>,
    /// Weight used to apportion reward; derived from `balance` by the policy
    pub earning_power: BigUint<M>,
    /// Value of the reward-per-weight accumulator at the last touch
    pub reward_per_weight_checkpoint: BigUint<M>,
    /// Unrealized reward, multiplied by `SCALE_FACTOR`
    pub scaled_unclaimed_reward: BigUint<M>,
}

// ============================================================
// Custody
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum CustodyMode {
    /// One custodian per delegatee holds the value staked toward it.
    PerDelegatee,
    /// The ledger holds everything; delegatee is informational only.
    Direct,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Custodian<M: ManagedTypeApi> {
    pub id: u64,
    pub delegatee: ManagedAddress<M>,
    pub balance: BigUint<M>,
}

// ============================================================
// Access gates
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum GateKind {
    /// Who may own a position that is opened or grown
    Staker,
    /// Who may redirect unclaimed reward externally
    Contribution,
    /// Which allocation mechanisms may receive redirected reward
    Mechanism,
    /// Whose positions earn under the gated earning-power policy
    EarningPower,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum AccessMode {
    Open,
    Allowlist,
    Blocklist,
}

impl AccessMode {
    pub fn permits(self, listed: bool) -> bool {
        match self {
            AccessMode::Open => true,
            AccessMode::Allowlist => listed,
            AccessMode::Blocklist => !listed,
        }
    }
}

// ============================================================
// Earning power
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum EarningPowerKind {
    /// `min(balance, cap)` for everyone
    Capped,
    /// `min(balance, cap)` if the owner passes the earning-power gate, else 0
    Gated,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct EarningPowerPolicy<M: ManagedTypeApi> {
    pub kind: EarningPowerKind,
    pub cap: BigUint<M>,
}

// ============================================================
// Fees & pause
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ClaimFeeParameters<M: ManagedTypeApi> {
    pub fee_amount: BigUint<M>,
    pub fee_collector: ManagedAddress<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum PausePolicy {
    /// Withdraw and claim keep working while paused.
    AllowExits,
    /// Every position endpoint is blocked while paused.
    FreezeAll,
}

// ============================================================
// Authorizations
// ============================================================

/// Payload an owner (or claimer) signs to let someone else act on a position.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct SignedAction<M: ManagedTypeApi> {
    pub ledger: ManagedAddress<M>,
    pub action: ManagedBuffer<M>,
    pub signer: ManagedAddress<M>,
    pub position_id: u64,
    pub amount: BigUint<M>,
    /// Zero when the action does not set a delegatee
    pub delegatee: ManagedAddress<M>,
    /// Zero when the action does not set a claimer
    pub claimer: ManagedAddress<M>,
    pub nonce: u64,
    pub deadline: u64,
}

/// Forwarded to an allocation mechanism alongside contributed tokens.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ContributionAuthorization<M: ManagedTypeApi> {
    pub signer: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub nonce: u64,
    pub deadline: u64,
    pub signature: ManagedBuffer<M>,
}
