use crate::{registry::GlobalConfig, registry::Pool, ContractError};

/// Fixed-point scaling factor.
///
/// All reward-per-share values are multiplied by this constant before
/// storage to preserve sub-unit precision without floating-point arithmetic.
/// 10^12 gives 12 decimal places on top of a 7-decimal Stellar asset.
pub const PRECISION: i128 = 1_000_000_000_000;

// ── Core reward engine ──────────────────────────────────────────────────────

/// Reward emitted to one pool over `elapsed` ticks.
///
/// ```text
/// pool_reward = elapsed × reward_per_tick × weight / total_weight
/// ```
///
/// Truncates toward zero so the ledger never promises more than it emits.
/// Returns `None` on overflow.
pub fn pool_reward(
    elapsed: u32,
    reward_per_tick: i128,
    weight: u64,
    total_weight: u64,
) -> Option<i128> {
    if total_weight == 0 {
        return Some(0);
    }
    let gross = i128::from(elapsed)
        .checked_mul(reward_per_tick)?
        .checked_mul(i128::from(weight))?;
    gross.checked_div(i128::from(total_weight))
}

/// Adds `reward` spread over `total_staked` units to the accumulator.
///
/// ```text
/// new_acc = acc + reward × PRECISION / total_staked
/// ```
///
/// An empty pool leaves the accumulator untouched.
pub fn accumulate(acc: i128, reward: i128, total_staked: i128) -> Option<i128> {
    if total_staked <= 0 {
        return Some(acc);
    }
    let delta = reward.checked_mul(PRECISION)?.checked_div(total_staked)?;
    acc.checked_add(delta)
}

/// The accumulator value "priced in" to a stake of `amount`.
pub fn priced_in(amount: i128, acc: i128) -> Option<i128> {
    amount.checked_mul(acc)?.checked_div(PRECISION)
}

/// Reward earned by `amount` since it was last priced in at `reward_debt`.
///
/// ```text
/// owed = amount × acc / PRECISION − reward_debt
/// ```
pub fn owed(amount: i128, acc: i128, reward_debt: i128) -> Option<i128> {
    priced_in(amount, acc)?.checked_sub(reward_debt)
}

/// Brings `pool`'s accumulator up to tick `now`.
///
/// Idempotent: once `last_accrual_tick == now` further calls change nothing.
/// Ticks during which the pool is empty, or no pool carries weight, are
/// skipped rather than banked.
pub fn advance(pool: &mut Pool, config: &GlobalConfig, now: u32) -> Result<(), ContractError> {
    if now <= pool.last_accrual_tick {
        return Ok(());
    }
    if pool.total_staked == 0 || config.total_weight == 0 {
        pool.last_accrual_tick = now;
        return Ok(());
    }

    let elapsed = now - pool.last_accrual_tick;
    let reward = pool_reward(
        elapsed,
        config.reward_per_tick,
        pool.weight,
        config.total_weight,
    )
    .ok_or(ContractError::ArithmeticOverflow)?;

    pool.acc_reward_per_share = accumulate(pool.acc_reward_per_share, reward, pool.total_staked)
        .ok_or(ContractError::ArithmeticOverflow)?;
    pool.last_accrual_tick = now;

    Ok(())
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.
