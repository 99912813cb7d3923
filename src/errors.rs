// ============================================================
// Error messages
// Every message carries its category as a prefix so callers can
// classify a failed transaction without parsing free text.
// ============================================================

// ── Authorization ──

pub const ERR_NOT_ADMIN: &str = "Authorization: caller is not the admin";
pub const ERR_NOT_NOTIFIER: &str = "Authorization: caller is not a reward notifier";
pub const ERR_NOT_OWNER: &str = "Authorization: caller is not the position owner";
pub const ERR_NOT_OWNER_OR_CLAIMER: &str =
    "Authorization: caller is neither position owner nor claimer";

// ── GateDenied ──

pub const ERR_STAKER_GATE: &str = "GateDenied: owner is not allowed to stake";
pub const ERR_CONTRIBUTION_GATE: &str = "GateDenied: owner is not allowed to contribute";
pub const ERR_MECHANISM_GATE: &str = "GateDenied: target is not an approved allocation mechanism";

// ── InsufficientFunds ──

pub const ERR_WITHDRAW_EXCEEDS_BALANCE: &str = "InsufficientFunds: amount exceeds position balance";
pub const ERR_EXCEEDS_UNCLAIMED: &str = "InsufficientFunds: amount exceeds unclaimed reward";
pub const ERR_CANNOT_COVER_FEE: &str = "InsufficientFunds: amount does not cover the claim fee";
pub const ERR_CANNOT_COVER_TIP: &str = "InsufficientFunds: unclaimed reward does not cover the tip";
pub const ERR_REWARD_NOT_BACKED: &str = "InsufficientFunds: reward balance does not cover the rate";

// ── InvalidParameter ──

pub const ERR_ZERO_AMOUNT: &str = "InvalidParameter: amount must be greater than zero";
pub const ERR_ZERO_ADDRESS: &str = "InvalidParameter: address must not be zero";
pub const ERR_WRONG_TOKEN: &str = "InvalidParameter: unexpected payment token";
pub const ERR_INVALID_TOKEN: &str = "InvalidParameter: invalid token identifier";
pub const ERR_POSITION_NOT_FOUND: &str = "InvalidParameter: position does not exist";
pub const ERR_DURATION_OUT_OF_RANGE: &str = "InvalidParameter: reward duration out of range";
pub const ERR_RATE_TOO_LOW: &str = "InvalidParameter: reward rate rounds to zero";
pub const ERR_FEE_TOO_HIGH: &str = "InvalidParameter: fee exceeds the configured maximum";
pub const ERR_TIP_TOO_HIGH: &str = "InvalidParameter: tip exceeds the maximum bump tip";
pub const ERR_NOT_QUALIFIED: &str = "InvalidParameter: position does not qualify for recalculation";
pub const ERR_AUTHORIZATION_EXPIRED: &str = "InvalidParameter: authorization expired";

// ── StateConflict ──

pub const ERR_REENTRANT_CALL: &str = "StateConflict: re-entrant call";
pub const ERR_PAUSED: &str = "StateConflict: ledger is paused";
pub const ERR_ACTIVE_PERIOD: &str = "StateConflict: not allowed during an active reward period";
pub const ERR_MECHANISM_GATE_MANDATORY: &str =
    "StateConflict: mechanism gate must remain an allowlist";

// ── Unsupported ──

pub const ERR_COMPOUND_UNSUPPORTED: &str = "Unsupported: reward token differs from stake token";

// ── BelowMinimum ──

pub const ERR_BELOW_MINIMUM: &str = "BelowMinimum: balance below the minimum stake amount";
