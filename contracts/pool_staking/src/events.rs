#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

use crate::{pause::PauseCategory, registry::StakeAsset};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the ledger is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub reward_token: Address,
    pub native_token: Address,
    pub reward_per_tick: i128,
    pub emission_start_tick: u32,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolAddedEvent {
    pub pool_id: u32,
    pub stake_asset: StakeAsset,
    pub weight: u64,
    pub min_deposit: i128,
    pub lock_duration: u32,
    pub total_weight: u64,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolUpdatedEvent {
    pub pool_id: u32,
    pub weight: u64,
    pub min_deposit: i128,
    pub lock_duration: u32,
    pub total_weight: u64,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub participant: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub new_total_staked: i128,
    pub tick: u32,
}

/// Fired when stake moves into the unstake queue.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub participant: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub unlock_tick: u32,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub participant: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub participant: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedAndSwappedEvent {
    pub participant: Address,
    pub pool_id: u32,
    pub reward_amount: i128,
    pub output_asset: StakeAsset,
    pub amount_out: i128,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeExecutorSetEvent {
    pub previous: Option<Address>,
    pub executor: Address,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub previous: i128,
    pub reward_per_tick: i128,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseStatusSetEvent {
    pub category: PauseCategory,
    pub paused: bool,
    pub tick: u32,
}

/// Fired when a SuperAdmin moves funds out through the escape hatch.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawalEvent {
    pub asset: StakeAsset,
    pub recipient: Address,
    pub amount: i128,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTierSetEvent {
    pub caller: Address,
    pub target: Address,
    /// Rank of the new tier (`AdminTier::rank`); `None` when it was removed.
    pub tier: Option<u32>,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaMigratedEvent {
    pub from_version: u32,
    pub to_version: u32,
    pub tick: u32,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    reward_token: Address,
    native_token: Address,
    reward_per_tick: i128,
    emission_start_tick: u32,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            reward_token,
            native_token,
            reward_per_tick,
            emission_start_tick,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_pool_added(
    env: &Env,
    pool_id: u32,
    stake_asset: StakeAsset,
    weight: u64,
    min_deposit: i128,
    lock_duration: u32,
    total_weight: u64,
) {
    env.events().publish(
        (symbol_short!("POOL_ADD"), pool_id),
        PoolAddedEvent {
            pool_id,
            stake_asset,
            weight,
            min_deposit,
            lock_duration,
            total_weight,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_pool_updated(
    env: &Env,
    pool_id: u32,
    weight: u64,
    min_deposit: i128,
    lock_duration: u32,
    total_weight: u64,
) {
    env.events().publish(
        (symbol_short!("POOL_UPD"), pool_id),
        PoolUpdatedEvent {
            pool_id,
            weight,
            min_deposit,
            lock_duration,
            total_weight,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    participant: Address,
    pool_id: u32,
    amount: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), participant.clone(), pool_id),
        StakedEvent {
            participant,
            pool_id,
            amount,
            new_total_staked,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_unstaked(env: &Env, participant: Address, pool_id: u32, amount: i128, unlock_tick: u32) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), participant.clone(), pool_id),
        UnstakedEvent {
            participant,
            pool_id,
            amount,
            unlock_tick,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, participant: Address, pool_id: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), participant.clone(), pool_id),
        WithdrawnEvent {
            participant,
            pool_id,
            amount,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_claimed(env: &Env, participant: Address, pool_id: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("CLMD"), participant.clone(), pool_id),
        ClaimedEvent {
            participant,
            pool_id,
            amount,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_claimed_and_swapped(
    env: &Env,
    participant: Address,
    pool_id: u32,
    reward_amount: i128,
    output_asset: StakeAsset,
    amount_out: i128,
) {
    env.events().publish(
        (symbol_short!("CLMD_SWP"), participant.clone(), pool_id),
        ClaimedAndSwappedEvent {
            participant,
            pool_id,
            reward_amount,
            output_asset,
            amount_out,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_exchange_executor_set(env: &Env, previous: Option<Address>, executor: Address) {
    env.events().publish(
        (symbol_short!("ROUTER"),),
        ExchangeExecutorSetEvent {
            previous,
            executor,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, previous: i128, reward_per_tick: i128) {
    env.events().publish(
        (symbol_short!("RWD_RATE"),),
        RewardRateSetEvent {
            previous,
            reward_per_tick,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_pause_status_set(env: &Env, category: PauseCategory, paused: bool) {
    env.events().publish(
        (symbol_short!("PAUSE"), category),
        PauseStatusSetEvent {
            category,
            paused,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_emergency_withdrawal(env: &Env, asset: StakeAsset, recipient: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("EMRG_WD"), recipient.clone()),
        EmergencyWithdrawalEvent {
            asset,
            recipient,
            amount,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_admin_tier_set(env: &Env, caller: Address, target: Address, tier: Option<u32>) {
    env.events().publish(
        (symbol_short!("ADM_TIER"), target.clone()),
        AdminTierSetEvent {
            caller,
            target,
            tier,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_schema_migrated(env: &Env, from_version: u32, to_version: u32) {
    env.events().publish(
        (symbol_short!("MIGRATED"),),
        SchemaMigratedEvent {
            from_version,
            to_version,
            tick: env.ledger().sequence(),
        },
    );
}
