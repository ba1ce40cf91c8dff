#![no_std]

pub mod clock;
pub mod events;
pub mod migration;
pub mod pause;
pub mod positions;
pub mod registry;
pub mod rewards;
pub mod swap;
pub mod timelock;

use common::admin_tiers::{self, AdminTier};
use common::reentrancy::{ReentrancyError, ReentrancyGuard};
use soroban_sdk::{contract, contractimpl, log, symbol_short, token, Address, Env, Symbol, Vec};

pub use pause::PauseCategory;
pub use positions::Position;
pub use registry::{GlobalConfig, Pool, StakeAsset};
pub use swap::{SwapRouterClient, SwapRouterInterface};
pub use timelock::UnstakeRequest;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const NATIVE_TOKEN: Symbol = symbol_short!("NTV_TOK");

const INSTANCE_TTL_THRESHOLD: u32 = 17_280;
const INSTANCE_TTL_EXTEND_TO: u32 = 518_400;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    PoolNotFound = 5,
    BelowMinDeposit = 6,
    IncorrectNativeAmount = 7,
    NativeNotAccepted = 8,
    InsufficientStaked = 9,
    NoRewardToClaim = 10,
    NoWithdrawableAmount = 11,
    DeadlinePassed = 12,
    RouterNotSet = 13,
    SlippageExceeded = 14,
    SwapFailed = 15,
    ZeroTotalWeight = 16,
    Reentrancy = 17,
    Paused = 18,
    RequestNotFound = 19,
    InsufficientRewardBalance = 20,
    ArithmeticOverflow = 21,
}

impl From<ReentrancyError> for ContractError {
    fn from(_: ReentrancyError) -> Self {
        ContractError::Reentrancy
    }
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct PoolStakingContract;

#[contractimpl]
impl PoolStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `reward_token`        – asset contract paid out as rewards.
    /// * `native_token`        – asset contract standing for `StakeAsset::Native`,
    ///                           also the intermediate hop of every swap.
    /// * `reward_per_tick`     – reward units emitted per ledger across all pools.
    /// * `emission_start_tick` – first ledger sequence that accrues reward.
    pub fn initialize(
        env: Env,
        admin: Address,
        reward_token: Address,
        native_token: Address,
        reward_per_tick: i128,
        emission_start_tick: u32,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_per_tick < 0 || reward_token == native_token {
            return Err(ContractError::InvalidInput);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        env.storage().instance().set(&NATIVE_TOKEN, &native_token);
        registry::save_config(
            &env,
            &GlobalConfig {
                reward_per_tick,
                total_weight: 0,
                emission_start_tick,
            },
        );
        migration::set_schema_version(&env, migration::CURRENT_SCHEMA_VERSION);

        admin_tiers::set_super_admin(&env, &admin);
        Self::bump_instance(&env);

        log!(&env, "PoolStaking: initialized, reward_per_tick={}", reward_per_tick);
        events::publish_initialized(
            &env,
            admin,
            reward_token,
            native_token,
            reward_per_tick,
            emission_start_tick,
        );

        Ok(())
    }

    // ── Pool registry ───────────────────────────────────────────────────────

    /// Register a new pool and return its id.
    ///
    /// Every existing pool is accrued first so reward they earned under the
    /// previous total weight is fixed before the split changes.
    ///
    /// Requires at least `ContractAdmin` tier.
    pub fn add_pool(
        env: Env,
        caller: Address,
        stake_asset: StakeAsset,
        weight: u64,
        min_deposit: i128,
        lock_duration: u32,
    ) -> Result<u32, ContractError> {
        Self::require_admin_tier(&env, &caller, &AdminTier::ContractAdmin)?;
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;

        if weight == 0 || min_deposit < 0 {
            return Err(ContractError::InvalidInput);
        }

        let now = clock::current_tick(&env);
        let mut config = registry::load_config(&env)?;
        registry::accrue_all(&env, &config, now)?;

        let pool = registry::append_pool(
            &env,
            &mut config,
            stake_asset,
            weight,
            min_deposit,
            lock_duration,
            now,
        )?;
        Self::bump_instance(&env);

        log!(&env, "PoolStaking: pool {} added, weight={}", pool.id, weight);
        events::publish_pool_added(
            &env,
            pool.id,
            pool.stake_asset,
            weight,
            min_deposit,
            lock_duration,
            config.total_weight,
        );

        Ok(pool.id)
    }

    /// Change a pool's weight, minimum deposit and lock duration.
    ///
    /// The accumulators are brought up to date at the old weight before the
    /// new one takes effect. A new lock duration applies to future unstake
    /// requests only.
    ///
    /// Requires at least `ContractAdmin` tier.
    pub fn update_pool_config(
        env: Env,
        caller: Address,
        pool_id: u32,
        new_weight: u64,
        new_min_deposit: i128,
        new_lock_duration: u32,
    ) -> Result<(), ContractError> {
        Self::require_admin_tier(&env, &caller, &AdminTier::ContractAdmin)?;
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;

        if new_min_deposit < 0 {
            return Err(ContractError::InvalidInput);
        }

        let now = clock::current_tick(&env);
        let mut config = registry::load_config(&env)?;
        // Fails with PoolNotFound before anything is written.
        registry::load_pool(&env, pool_id)?;
        registry::accrue_all(&env, &config, now)?;

        let mut pool = registry::load_pool(&env, pool_id)?;
        registry::reweight(&mut config, &mut pool, new_weight)?;
        pool.min_deposit = new_min_deposit;
        pool.lock_duration = new_lock_duration;

        registry::save_pool(&env, &pool);
        registry::save_config(&env, &config);
        Self::bump_instance(&env);

        events::publish_pool_updated(
            &env,
            pool_id,
            new_weight,
            new_min_deposit,
            new_lock_duration,
            config.total_weight,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of the pool's stake asset.
    ///
    /// `native_value` declares how much of the native asset accompanies the
    /// call: it must equal `amount` for a native pool and be zero for a token
    /// pool. The pool is accrued and earlier reward rolled into
    /// `pending_reward` before the position grows, so the new stake never
    /// earns retroactively.
    pub fn stake(
        env: Env,
        participant: Address,
        pool_id: u32,
        amount: i128,
        native_value: i128,
    ) -> Result<(), ContractError> {
        participant.require_auth();
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        pause::require_not_paused(&env, PauseCategory::Stake)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        let pool = registry::load_pool(&env, pool_id)?;
        match pool.stake_asset {
            StakeAsset::Native if native_value != amount => {
                return Err(ContractError::IncorrectNativeAmount)
            }
            StakeAsset::Token(_) if native_value != 0 => {
                return Err(ContractError::NativeNotAccepted)
            }
            _ => {}
        }
        if amount < pool.min_deposit {
            return Err(ContractError::BelowMinDeposit);
        }

        // 1. Accrue, then roll up what the existing stake earned.
        let now = clock::current_tick(&env);
        let config = registry::load_config(&env)?;
        let mut pool = registry::accrue(&env, &config, pool_id, now)?;
        let mut position = positions::load(&env, pool_id, &participant);
        position.roll_up(pool.acc_reward_per_share)?;

        // 2. Grow the position and the pool total together.
        position.amount = position
            .amount
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        position.reprice(pool.acc_reward_per_share)?;

        positions::save(&env, pool_id, &participant, &position);
        registry::save_pool(&env, &pool);
        Self::bump_instance(&env);

        // 3. Pull the asset last.
        let asset = Self::resolve_asset(&env, &pool.stake_asset)?;
        token::Client::new(&env, &asset).transfer(
            &participant,
            &env.current_contract_address(),
            &amount,
        );

        log!(&env, "PoolStaking: stake pool={} amount={}", pool_id, amount);
        events::publish_staked(&env, participant, pool_id, amount, pool.total_staked);

        Ok(())
    }

    /// Move `amount` out of the position into the unstake queue.
    ///
    /// The amount stops earning immediately but is only returned by
    /// `withdraw` once the pool's lock duration has elapsed.
    pub fn unstake(
        env: Env,
        participant: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<UnstakeRequest, ContractError> {
        participant.require_auth();
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        pause::require_not_paused(&env, PauseCategory::Unstake)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let now = clock::current_tick(&env);
        let config = registry::load_config(&env)?;
        let mut pool = registry::accrue(&env, &config, pool_id, now)?;
        let mut position = positions::load(&env, pool_id, &participant);
        if amount > position.amount {
            return Err(ContractError::InsufficientStaked);
        }
        position.roll_up(pool.acc_reward_per_share)?;

        position.amount -= amount;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        position.reprice(pool.acc_reward_per_share)?;

        positions::save(&env, pool_id, &participant, &position);
        registry::save_pool(&env, &pool);
        let request =
            timelock::enqueue(&env, pool_id, &participant, amount, now, pool.lock_duration)?;
        Self::bump_instance(&env);

        log!(
            &env,
            "PoolStaking: unstake pool={} amount={} unlock={}",
            pool_id,
            amount,
            request.unlock_tick
        );
        events::publish_unstaked(&env, participant, pool_id, amount, request.unlock_tick);

        Ok(request)
    }

    /// Pay out every matured unstake request for this pool in one transfer.
    ///
    /// Requests that are still locked stay queued untouched.
    pub fn withdraw(env: Env, participant: Address, pool_id: u32) -> Result<i128, ContractError> {
        participant.require_auth();
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        pause::require_not_paused(&env, PauseCategory::Unstake)?;

        let pool = registry::load_pool(&env, pool_id)?;
        let now = clock::current_tick(&env);
        let queue = timelock::load_queue(&env, pool_id, &participant);
        let (amount, remaining) = timelock::drain_matured(&env, &queue, now)?;
        if amount == 0 {
            return Err(ContractError::NoWithdrawableAmount);
        }

        timelock::store_queue(&env, pool_id, &participant, &remaining);
        Self::bump_instance(&env);

        let asset = Self::resolve_asset(&env, &pool.stake_asset)?;
        token::Client::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &participant,
            &amount,
        );

        log!(&env, "PoolStaking: withdraw pool={} amount={}", pool_id, amount);
        events::publish_withdrawn(&env, participant, pool_id, amount);

        Ok(amount)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out the participant's accrued reward for this pool.
    ///
    /// Fails with `NoRewardToClaim` when nothing has accrued since the last
    /// claim.
    pub fn claim(env: Env, participant: Address, pool_id: u32) -> Result<i128, ContractError> {
        participant.require_auth();
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        pause::require_not_paused(&env, PauseCategory::Claim)?;

        let amount = Self::settle_reward(&env, &participant, pool_id)?;

        let reward_token = Self::reward_token(&env)?;
        token::Client::new(&env, &reward_token).transfer(
            &env.current_contract_address(),
            &participant,
            &amount,
        );

        log!(&env, "PoolStaking: claim pool={} amount={}", pool_id, amount);
        events::publish_claimed(&env, participant, pool_id, amount);

        Ok(amount)
    }

    /// Claim and liquidate the reward through the exchange executor.
    ///
    /// Returns the amount of `output_asset` delivered to the participant.
    /// If the executor fails or delivers less than `min_output`, the whole
    /// call reverts and the reward stays pending.
    pub fn claim_and_swap(
        env: Env,
        participant: Address,
        pool_id: u32,
        output_asset: StakeAsset,
        min_output: i128,
        deadline: u64,
    ) -> Result<i128, ContractError> {
        participant.require_auth();
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        pause::require_not_paused(&env, PauseCategory::Claim)?;

        if clock::current_time(&env) > deadline {
            return Err(ContractError::DeadlinePassed);
        }
        let router = swap::router(&env).ok_or(ContractError::RouterNotSet)?;
        if min_output < 0 {
            return Err(ContractError::InvalidInput);
        }
        let reward_token = Self::reward_token(&env)?;
        let native_token = Self::native_token(&env)?;
        let path = swap::build_path(&env, &reward_token, &native_token, &output_asset)?;

        let reward_amount = Self::settle_reward(&env, &participant, pool_id)?;
        let amount_out = swap::execute(
            &env,
            &router,
            reward_amount,
            min_output,
            &path,
            &participant,
            deadline,
        )?;

        log!(
            &env,
            "PoolStaking: claim_and_swap pool={} reward={} out={}",
            pool_id,
            reward_amount,
            amount_out
        );
        events::publish_claimed(&env, participant.clone(), pool_id, reward_amount);
        events::publish_claimed_and_swapped(
            &env,
            participant,
            pool_id,
            reward_amount,
            output_asset,
            amount_out,
        );

        Ok(amount_out)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Update the global emission rate.
    ///
    /// Every pool is accrued at the old rate first, so the change is never
    /// retroactive.
    ///
    /// Requires at least `ContractAdmin` tier.
    pub fn set_reward_per_tick(
        env: Env,
        caller: Address,
        reward_per_tick: i128,
    ) -> Result<(), ContractError> {
        Self::require_admin_tier(&env, &caller, &AdminTier::ContractAdmin)?;
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;

        if reward_per_tick < 0 {
            return Err(ContractError::InvalidInput);
        }

        let now = clock::current_tick(&env);
        let mut config = registry::load_config(&env)?;
        registry::accrue_all(&env, &config, now)?;

        let previous = config.reward_per_tick;
        config.reward_per_tick = reward_per_tick;
        registry::save_config(&env, &config);
        Self::bump_instance(&env);

        events::publish_reward_rate_set(&env, previous, reward_per_tick);

        Ok(())
    }

    /// Set the exchange executor used by `claim_and_swap`.
    ///
    /// Requires at least `ContractAdmin` tier.
    pub fn set_exchange_executor(
        env: Env,
        caller: Address,
        router: Address,
    ) -> Result<(), ContractError> {
        Self::require_admin_tier(&env, &caller, &AdminTier::ContractAdmin)?;
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;

        if router == env.current_contract_address() {
            return Err(ContractError::InvalidInput);
        }

        let previous = swap::router(&env);
        swap::set_router(&env, &router);
        Self::bump_instance(&env);

        events::publish_exchange_executor_set(&env, previous, router);

        Ok(())
    }

    /// Halt or resume one category of user operations.
    ///
    /// Requires at least `OperatorAdmin` tier.
    pub fn set_pause_status(
        env: Env,
        caller: Address,
        category: PauseCategory,
        paused: bool,
    ) -> Result<(), ContractError> {
        Self::require_admin_tier(&env, &caller, &AdminTier::OperatorAdmin)?;
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;

        pause::set_paused(&env, category, paused);
        Self::bump_instance(&env);

        events::publish_pause_status_set(&env, category, paused);

        Ok(())
    }

    /// Move `amount` of any asset held by the ledger to `recipient`.
    ///
    /// Disaster recovery only: no pool, position or queue is adjusted.
    ///
    /// Requires `SuperAdmin` tier.
    pub fn emergency_withdraw(
        env: Env,
        caller: Address,
        asset: StakeAsset,
        recipient: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_admin_tier(&env, &caller, &AdminTier::SuperAdmin)?;
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let token = Self::resolve_asset(&env, &asset)?;
        token::Client::new(&env, &token).transfer(
            &env.current_contract_address(),
            &recipient,
            &amount,
        );

        log!(&env, "PoolStaking: emergency withdrawal amount={}", amount);
        events::publish_emergency_withdrawal(&env, asset, recipient, amount);

        Ok(())
    }

    /// Bring the storage layout up to the current schema version.
    ///
    /// Returns the version the storage was migrated from; a call on an
    /// up-to-date layout changes nothing.
    ///
    /// Requires `SuperAdmin` tier.
    pub fn migrate(env: Env, caller: Address) -> Result<u32, ContractError> {
        Self::require_admin_tier(&env, &caller, &AdminTier::SuperAdmin)?;
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;

        let from = migration::migrate(&env);
        Self::bump_instance(&env);

        if from != migration::CURRENT_SCHEMA_VERSION {
            events::publish_schema_migrated(&env, from, migration::CURRENT_SCHEMA_VERSION);
        }

        Ok(from)
    }

    // ── Admin tier management ────────────────────────────────────────────────

    /// Promotes or assigns a target address to the specified admin tier.
    ///
    /// Only a `SuperAdmin` may call this; the bootstrap admin's tier can only
    /// be re-assigned to `SuperAdmin`.
    pub fn promote_admin(
        env: Env,
        caller: Address,
        target: Address,
        tier: AdminTier,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        if !admin_tiers::promote_admin(&env, &caller, &target, tier.clone()) {
            return Err(ContractError::Unauthorized);
        }
        events::publish_admin_tier_set(&env, caller, target, Some(tier.rank()));
        Ok(())
    }

    /// Removes the admin tier from the target address entirely.
    ///
    /// Only a `SuperAdmin` may call this; the bootstrap admin cannot be
    /// demoted.
    pub fn demote_admin(env: Env, caller: Address, target: Address) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::acquire(&env)?;
        if !admin_tiers::demote_admin(&env, &caller, &target) {
            return Err(ContractError::Unauthorized);
        }
        events::publish_admin_tier_set(&env, caller, target, None);
        Ok(())
    }

    pub fn get_admin_tier(env: Env, admin: Address) -> Option<AdminTier> {
        admin_tiers::get_admin_tier(&env, &admin)
    }

    /// Every address currently holding a tier, in promotion order.
    pub fn get_admins(env: Env) -> Vec<Address> {
        admin_tiers::list_admins(&env)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_config(env: Env) -> Result<GlobalConfig, ContractError> {
        registry::load_config(&env)
    }

    /// Stored pool record; the accumulator is as of `last_accrual_tick`.
    pub fn get_pool(env: Env, pool_id: u32) -> Result<Pool, ContractError> {
        registry::load_pool(&env, pool_id)
    }

    pub fn get_total_pools(env: Env) -> u32 {
        registry::pool_count(&env)
    }

    pub fn get_position(env: Env, pool_id: u32, participant: Address) -> Position {
        positions::load(&env, pool_id, &participant)
    }

    /// Real-time claimable reward, simulating accrual up to the current tick
    /// without writing anything.
    pub fn get_pending_reward(
        env: Env,
        pool_id: u32,
        participant: Address,
    ) -> Result<i128, ContractError> {
        let config = registry::load_config(&env)?;
        let mut pool = registry::load_pool(&env, pool_id)?;
        rewards::advance(&mut pool, &config, clock::current_tick(&env))?;
        positions::load(&env, pool_id, &participant).claimable(pool.acc_reward_per_share)
    }

    pub fn get_unstake_request_count(env: Env, pool_id: u32, participant: Address) -> u32 {
        timelock::load_queue(&env, pool_id, &participant).len()
    }

    pub fn get_unstake_request(
        env: Env,
        pool_id: u32,
        participant: Address,
        index: u32,
    ) -> Result<UnstakeRequest, ContractError> {
        timelock::load_queue(&env, pool_id, &participant)
            .get(index)
            .ok_or(ContractError::RequestNotFound)
    }

    /// Estimated output of swapping `amount_in` reward units into
    /// `output_asset`. Zero when no executor is set or it cannot quote.
    pub fn get_swap_amount_out(env: Env, amount_in: i128, output_asset: StakeAsset) -> i128 {
        let Some(router) = swap::router(&env) else {
            return 0;
        };
        let (Ok(reward_token), Ok(native_token)) =
            (Self::reward_token(&env), Self::native_token(&env))
        else {
            return 0;
        };
        let Ok(path) = swap::build_path(&env, &reward_token, &native_token, &output_asset) else {
            return 0;
        };
        swap::quote(&env, &router, amount_in, &path).unwrap_or(0)
    }

    pub fn get_exchange_executor(env: Env) -> Option<Address> {
        swap::router(&env)
    }

    pub fn get_reward_token(env: Env) -> Result<Address, ContractError> {
        Self::reward_token(&env)
    }

    pub fn is_paused(env: Env, category: PauseCategory) -> bool {
        pause::is_paused(&env, category)
    }

    pub fn get_schema_version(env: Env) -> u32 {
        migration::schema_version(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: authenticate `caller` and require at least `min_tier`.
    fn require_admin_tier(
        env: &Env,
        caller: &Address,
        min_tier: &AdminTier,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        if !admin_tiers::require_tier(env, caller, min_tier) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
    }

    fn reward_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    fn native_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&NATIVE_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    fn resolve_asset(env: &Env, asset: &StakeAsset) -> Result<Address, ContractError> {
        match asset {
            StakeAsset::Native => Self::native_token(env),
            StakeAsset::Token(address) => Ok(address.clone()),
        }
    }

    /// Accrue the pool, roll up the participant's reward and zero it out.
    ///
    /// Returns the amount the caller must now pay out. The reward balance
    /// is checked here so a shortfall aborts before any state is written.
    fn settle_reward(
        env: &Env,
        participant: &Address,
        pool_id: u32,
    ) -> Result<i128, ContractError> {
        let now = clock::current_tick(env);
        let config = registry::load_config(env)?;
        let pool = registry::accrue(env, &config, pool_id, now)?;

        let mut position = positions::load(env, pool_id, participant);
        position.roll_up(pool.acc_reward_per_share)?;
        position.reprice(pool.acc_reward_per_share)?;

        let amount = position.pending_reward;
        if amount <= 0 {
            return Err(ContractError::NoRewardToClaim);
        }
        let reward_token = Self::reward_token(env)?;
        let available =
            token::Client::new(env, &reward_token).balance(&env.current_contract_address());
        if available < amount {
            return Err(ContractError::InsufficientRewardBalance);
        }

        position.pending_reward = 0;
        positions::save(env, pool_id, participant, &position);
        Self::bump_instance(env);

        Ok(amount)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin_tiers;


#[cfg(test)]
mod test_swap;

#[cfg(test)]
mod test_migration;
