use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ADMIN_TIER_PREFIX: Symbol = symbol_short!("ADM_TIER");
const SUPER_ADMIN: Symbol = symbol_short!("S_ADMIN");
const ADMIN_LIST: Symbol = symbol_short!("ADM_LIST");

const TTL_THRESHOLD: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 518_400;

// ── Admin Tier Enum ──────────────────────────────────────────────────────────

/// Three-tier admin hierarchy used by the staking ledger.
///
/// - `SuperAdmin`    – promotes/demotes admins, runs schema migrations and
///                     the emergency withdrawal escape hatch.
/// - `ContractAdmin` – manages pools, the reward emission rate and the
///                     exchange executor.
/// - `OperatorAdmin` – can only flip the per-category pause flags.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AdminTier {
    OperatorAdmin = 1,
    ContractAdmin = 2,
    SuperAdmin = 3,
}

impl AdminTier {
    pub fn rank(&self) -> u32 {
        match self {
            AdminTier::OperatorAdmin => 1,
            AdminTier::ContractAdmin => 2,
            AdminTier::SuperAdmin => 3,
        }
    }

    /// Returns true if this tier is at least as high as `min_tier`.
    pub fn has_at_least(&self, min_tier: &AdminTier) -> bool {
        self.rank() >= min_tier.rank()
    }
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn admin_tier_key(admin: &Address) -> (Symbol, Address) {
    (ADMIN_TIER_PREFIX, admin.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn load_admin_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&ADMIN_LIST)
        .unwrap_or(Vec::new(env))
}

// ── Permission table ─────────────────────────────────────────────────────────

/// Assigns `tier` to `admin`, replacing any previous tier.
/// Callers must verify authorization beforehand.
pub fn set_admin_tier(env: &Env, admin: &Address, tier: AdminTier) {
    let key = admin_tier_key(admin);
    env.storage().persistent().set(&key, &tier);
    extend_ttl(env, &key);
    track_admin(env, admin);
}

pub fn get_admin_tier(env: &Env, admin: &Address) -> Option<AdminTier> {
    env.storage().persistent().get(&admin_tier_key(admin))
}

/// Removes the tier from `admin` and drops it from the tracked list.
pub fn remove_admin_tier(env: &Env, admin: &Address) {
    env.storage().persistent().remove(&admin_tier_key(admin));
    untrack_admin(env, admin);
}

/// Returns `true` when `caller` holds at least `min_tier`.
pub fn require_tier(env: &Env, caller: &Address, min_tier: &AdminTier) -> bool {
    match get_admin_tier(env, caller) {
        Some(tier) => tier.has_at_least(min_tier),
        None => false,
    }
}

// ── SuperAdmin bootstrap ─────────────────────────────────────────────────────

/// Records the bootstrap admin and grants it `SuperAdmin`.
pub fn set_super_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&SUPER_ADMIN, admin);
    set_admin_tier(env, admin, AdminTier::SuperAdmin);
}

pub fn get_super_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&SUPER_ADMIN)
}

// ── Promote / Demote ─────────────────────────────────────────────────────────

/// Assigns `tier` to `target`. Only a `SuperAdmin` may do this.
///
/// Returns `false` if `caller` is not a `SuperAdmin`, or if the assignment
/// would lower the bootstrap super admin. The caller must already have been
/// authenticated via `require_auth()`.
pub fn promote_admin(env: &Env, caller: &Address, target: &Address, tier: AdminTier) -> bool {
    if !require_tier(env, caller, &AdminTier::SuperAdmin) {
        return false;
    }
    if get_super_admin(env).as_ref() == Some(target) && tier != AdminTier::SuperAdmin {
        return false;
    }
    set_admin_tier(env, target, tier);
    true
}

/// Removes `target`'s tier. Only a `SuperAdmin` may do this, and the
/// bootstrap super admin can never be demoted.
pub fn demote_admin(env: &Env, caller: &Address, target: &Address) -> bool {
    if !require_tier(env, caller, &AdminTier::SuperAdmin) {
        return false;
    }
    if get_super_admin(env).as_ref() == Some(target) {
        return false;
    }
    remove_admin_tier(env, target);
    true
}

/// All addresses currently holding a tier, in promotion order.
pub fn list_admins(env: &Env) -> Vec<Address> {
    load_admin_list(env)
}

fn track_admin(env: &Env, admin: &Address) {
    let mut admins = load_admin_list(env);
    if admins.contains(admin) {
        return;
    }
    admins.push_back(admin.clone());
    store_admin_list(env, &admins);
}

fn untrack_admin(env: &Env, admin: &Address) {
    let admins = load_admin_list(env);
    let mut kept = Vec::new(env);
    for a in admins.iter() {
        if a != *admin {
            kept.push_back(a);
        }
    }
    store_admin_list(env, &kept);
}

fn store_admin_list(env: &Env, admins: &Vec<Address>) {
    env.storage().persistent().set(&ADMIN_LIST, admins);
    env.storage()
        .persistent()
        .extend_ttl(&ADMIN_LIST, TTL_THRESHOLD, TTL_EXTEND_TO);
}
