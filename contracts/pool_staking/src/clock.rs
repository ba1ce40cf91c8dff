//! Time sources for the ledger.
//!
//! Reward accrual and lock periods are measured in ticks, which are ledger
//! sequence numbers. Swap deadlines are measured in ledger close time.

use soroban_sdk::Env;

/// The current tick: the ledger sequence number of the executing invocation.
pub fn current_tick(env: &Env) -> u32 {
    env.ledger().sequence()
}

/// Ledger close time in seconds, used for swap deadlines.
pub fn current_time(env: &Env) -> u64 {
    env.ledger().timestamp()
}
