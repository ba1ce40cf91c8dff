//! Versioned storage-schema migrations.
//!
//! Layout history:
//! - **v1** kept a single `PAUSED` boolean that halted every user operation.
//! - **v2** replaced it with one flag per [`PauseCategory`].
//!
//! A deployment without a recorded version is treated as v1.

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::pause::{self, PauseCategory};

pub const CURRENT_SCHEMA_VERSION: u32 = 2;

const SCHEMA_VERSION: Symbol = symbol_short!("SCHEMA");
const LEGACY_PAUSED: Symbol = symbol_short!("PAUSED");

pub fn schema_version(env: &Env) -> u32 {
    env.storage().instance().get(&SCHEMA_VERSION).unwrap_or(1)
}

pub fn set_schema_version(env: &Env, version: u32) {
    env.storage().instance().set(&SCHEMA_VERSION, &version);
}

/// Applies every pending step and returns the version the storage started at.
pub fn migrate(env: &Env) -> u32 {
    let from = schema_version(env);
    if from < 2 {
        v1_to_v2(env);
    }
    set_schema_version(env, CURRENT_SCHEMA_VERSION);
    from
}

fn v1_to_v2(env: &Env) {
    let paused: bool = env
        .storage()
        .instance()
        .get(&LEGACY_PAUSED)
        .unwrap_or(false);
    for category in [
        PauseCategory::Stake,
        PauseCategory::Unstake,
        PauseCategory::Claim,
    ] {
        pause::set_paused(env, category, paused);
    }
    env.storage().instance().remove(&LEGACY_PAUSED);
}

#[cfg(test)]
pub(crate) fn write_legacy_layout(env: &Env, paused: bool) {
    env.storage().instance().remove(&SCHEMA_VERSION);
    env.storage().instance().set(&LEGACY_PAUSED, &paused);
}
