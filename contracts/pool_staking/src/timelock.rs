use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::ContractError;

const UNSTAKE_QUEUE: Symbol = symbol_short!("USTK_Q");

const TTL_THRESHOLD: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 518_400;

// ── Types ───────────────────────────────────────────────────────────────────

/// A pending withdrawal sitting in a participant's per-pool queue.
///
/// Created by `unstake`, removed by `withdraw` once `unlock_tick` is reached.
/// Requests are never edited in place.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeRequest {
    pub amount: i128,
    pub unlock_tick: u32,
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn queue_key(pool_id: u32, participant: &Address) -> (Symbol, u32, Address) {
    (UNSTAKE_QUEUE, pool_id, participant.clone())
}

pub fn load_queue(env: &Env, pool_id: u32, participant: &Address) -> Vec<UnstakeRequest> {
    env.storage()
        .persistent()
        .get(&queue_key(pool_id, participant))
        .unwrap_or(Vec::new(env))
}

/// Persists the queue; an empty queue deletes the entry.
pub fn store_queue(env: &Env, pool_id: u32, participant: &Address, queue: &Vec<UnstakeRequest>) {
    let key = queue_key(pool_id, participant);
    if queue.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, queue);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Appends a request unlocking `lock_duration` ticks after `now`.
pub fn enqueue(
    env: &Env,
    pool_id: u32,
    participant: &Address,
    amount: i128,
    now: u32,
    lock_duration: u32,
) -> Result<UnstakeRequest, ContractError> {
    let unlock_tick = now
        .checked_add(lock_duration)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let request = UnstakeRequest {
        amount,
        unlock_tick,
    };

    let mut queue = load_queue(env, pool_id, participant);
    queue.push_back(request.clone());
    store_queue(env, pool_id, participant, &queue);

    Ok(request)
}

/// Splits `queue` into the total of every matured request and the requests
/// still locked, preserving their order.
pub fn drain_matured(
    env: &Env,
    queue: &Vec<UnstakeRequest>,
    now: u32,
) -> Result<(i128, Vec<UnstakeRequest>), ContractError> {
    let mut total: i128 = 0;
    let mut remaining = Vec::new(env);

    for request in queue.iter() {
        if request.unlock_tick <= now {
            total = total
                .checked_add(request.amount)
                .ok_or(ContractError::ArithmeticOverflow)?;
        } else {
            remaining.push_back(request);
        }
    }

    Ok((total, remaining))
}
