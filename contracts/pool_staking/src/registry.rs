use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{rewards, ContractError};

// ── Storage keys ────────────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const POOL_COUNT: Symbol = symbol_short!("POOL_CNT");
const POOL: Symbol = symbol_short!("POOL");

const TTL_THRESHOLD: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 518_400;

// ── Types ───────────────────────────────────────────────────────────────────

/// The asset a pool accepts as stake.
///
/// `Native` is the network's native asset (its Stellar asset contract is
/// configured once at initialisation); `Token` is any other asset contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StakeAsset {
    Native,
    Token(Address),
}

/// Emission parameters shared by every pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalConfig {
    /// Reward units emitted per tick across all pools.
    pub reward_per_tick: i128,
    /// Sum of every pool's weight.
    pub total_weight: u64,
    /// No pool accrues before this tick.
    pub emission_start_tick: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub id: u32,
    pub stake_asset: StakeAsset,
    /// Relative share of the global emission.
    pub weight: u64,
    /// Sum of all positions in this pool.
    pub total_staked: i128,
    /// Reward per staked unit since inception, scaled by `rewards::PRECISION`.
    pub acc_reward_per_share: i128,
    pub last_accrual_tick: u32,
    pub min_deposit: i128,
    /// Ticks an unstake request waits before it can be withdrawn.
    pub lock_duration: u32,
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn pool_key(id: u32) -> (Symbol, u32) {
    (POOL, id)
}

pub fn load_config(env: &Env) -> Result<GlobalConfig, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

pub fn save_config(env: &Env, config: &GlobalConfig) {
    env.storage().instance().set(&CONFIG, config);
}

pub fn pool_count(env: &Env) -> u32 {
    env.storage().instance().get(&POOL_COUNT).unwrap_or(0)
}

pub fn load_pool(env: &Env, id: u32) -> Result<Pool, ContractError> {
    env.storage()
        .persistent()
        .get(&pool_key(id))
        .ok_or(ContractError::PoolNotFound)
}

pub fn save_pool(env: &Env, pool: &Pool) {
    let key = pool_key(pool.id);
    env.storage().persistent().set(&key, pool);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Registry operations ─────────────────────────────────────────────────────

/// Appends a new pool at the next dense index and adds its weight to the
/// global total. Existing pools must already be accrued to `now`.
pub fn append_pool(
    env: &Env,
    config: &mut GlobalConfig,
    stake_asset: StakeAsset,
    weight: u64,
    min_deposit: i128,
    lock_duration: u32,
    now: u32,
) -> Result<Pool, ContractError> {
    let id = pool_count(env);
    let next = id.checked_add(1).ok_or(ContractError::ArithmeticOverflow)?;
    config.total_weight = config
        .total_weight
        .checked_add(weight)
        .ok_or(ContractError::ArithmeticOverflow)?;

    let pool = Pool {
        id,
        stake_asset,
        weight,
        total_staked: 0,
        acc_reward_per_share: 0,
        last_accrual_tick: now.max(config.emission_start_tick),
        min_deposit,
        lock_duration,
    };

    save_pool(env, &pool);
    save_config(env, config);
    env.storage().instance().set(&POOL_COUNT, &next);

    Ok(pool)
}

/// Replaces a pool's weight, adjusting the global total by the signed delta.
///
/// Fails with `ZeroTotalWeight` if no pool would carry weight afterwards.
pub fn reweight(config: &mut GlobalConfig, pool: &mut Pool, new_weight: u64) -> Result<(), ContractError> {
    let total = config
        .total_weight
        .checked_sub(pool.weight)
        .and_then(|rest| rest.checked_add(new_weight))
        .ok_or(ContractError::ArithmeticOverflow)?;
    if total == 0 {
        return Err(ContractError::ZeroTotalWeight);
    }
    config.total_weight = total;
    pool.weight = new_weight;
    Ok(())
}

/// Loads a pool, advances its accumulator to `now` and writes it back.
pub fn accrue(env: &Env, config: &GlobalConfig, id: u32, now: u32) -> Result<Pool, ContractError> {
    let mut pool = load_pool(env, id)?;
    rewards::advance(&mut pool, config, now)?;
    save_pool(env, &pool);
    Ok(pool)
}

/// Accrues every pool. Used before anything that changes the emission split
/// (`total_weight` or `reward_per_tick`), so past reward stays priced at the
/// old split.
pub fn accrue_all(env: &Env, config: &GlobalConfig, now: u32) -> Result<(), ContractError> {
    for id in 0..pool_count(env) {
        accrue(env, config, id, now)?;
    }
    Ok(())
}
