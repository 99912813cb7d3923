//! Fixed-point helpers. Every multiply-then-divide ordering used by the
//! reward accounting lives here so the precision policy can be audited in
//! one place.

multiversx_sc::imports!();

/// Rates and accumulators are stored multiplied by `10^SCALE_EXPONENT`.
pub const SCALE_EXPONENT: u32 = 36;

/// Truncation dust forgiven when a scaled reward is realised: `SCALE / 10^12`.
pub const DUST_TOLERANCE_EXPONENT: u32 = 24;

pub fn scale_factor<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(10u64).pow(SCALE_EXPONENT)
}

pub fn dust_tolerance<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(10u64).pow(DUST_TOLERANCE_EXPONENT)
}

pub fn scale<M: ManagedTypeApi>(amount: &BigUint<M>) -> BigUint<M> {
    amount * &scale_factor::<M>()
}

/// Rounds down after forgiving truncation dust left by the rate division,
/// so a position entitled to exactly `n` units realises `n`, not `n - 1`.
pub fn descale_settled<M: ManagedTypeApi>(scaled: &BigUint<M>) -> BigUint<M> {
    (scaled + &dust_tolerance::<M>()) / &scale_factor::<M>()
}

pub fn saturating_sub<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> BigUint<M> {
    if a > b {
        a - b
    } else {
        BigUint::zero()
    }
}

pub fn min<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> BigUint<M> {
    if a < b {
        a.clone()
    } else {
        b.clone()
    }
}

/// Scaled reward rate for a new period: leftover scaled reward from the
/// current period plus the freshly notified amount, spread over `duration`.
pub fn scaled_rate<M: ManagedTypeApi>(
    amount: &BigUint<M>,
    remaining_scaled_reward: &BigUint<M>,
    duration: u64,
) -> BigUint<M> {
    (scale(amount) + remaining_scaled_reward) / BigUint::from(duration)
}

/// Accumulator advanced by `elapsed` seconds at `scaled_rate`. Unchanged when
/// nobody earns.
pub fn accumulate<M: ManagedTypeApi>(
    stored: &BigUint<M>,
    scaled_rate: &BigUint<M>,
    elapsed: u64,
    total_earning_power: &BigUint<M>,
) -> BigUint<M> {
    if *total_earning_power == 0u64 || elapsed == 0 {
        return stored.clone();
    }
    stored + &((scaled_rate * &BigUint::from(elapsed)) / total_earning_power)
}

/// Scaled reward earned by `earning_power` since `checkpoint`.
pub fn accrued<M: ManagedTypeApi>(
    earning_power: &BigUint<M>,
    accumulator: &BigUint<M>,
    checkpoint: &BigUint<M>,
) -> BigUint<M> {
    earning_power * &saturating_sub(accumulator, checkpoint)
}

/// Splits a realised reward into `(fee, payout)`. `None` when the reward does
/// not cover the fee or leaves nothing to pay out.
pub fn split_fee<M: ManagedTypeApi>(
    reward: &BigUint<M>,
    fee: &BigUint<M>,
) -> Option<(BigUint<M>, BigUint<M>)> {
    if reward <= fee {
        return None;
    }
    Some((fee.clone(), reward - fee))
}
