use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::ContractError;

/// Operation categories that can be halted independently.
///
/// `Unstake` also gates `withdraw`; `Claim` also gates `claim_and_swap`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PauseCategory {
    Stake = 0,
    Unstake = 1,
    Claim = 2,
}

fn pause_key(category: PauseCategory) -> (Symbol, PauseCategory) {
    (symbol_short!("P_CAT"), category)
}

pub fn is_paused(env: &Env, category: PauseCategory) -> bool {
    env.storage()
        .instance()
        .get(&pause_key(category))
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, category: PauseCategory, paused: bool) {
    if paused {
        env.storage().instance().set(&pause_key(category), &true);
    } else {
        env.storage().instance().remove(&pause_key(category));
    }
}

pub fn require_not_paused(env: &Env, category: PauseCategory) -> Result<(), ContractError> {
    if is_paused(env, category) {
        return Err(ContractError::Paused);
    }
    Ok(())
}
