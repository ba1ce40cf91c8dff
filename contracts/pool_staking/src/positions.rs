use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{rewards, ContractError};

const POSITION: Symbol = symbol_short!("POS");

const TTL_THRESHOLD: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 518_400;

/// One participant's stake in one pool.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    /// Currently staked (excludes amounts queued for withdrawal).
    pub amount: i128,
    /// `amount × acc_reward_per_share / PRECISION` at the last interaction.
    pub reward_debt: i128,
    /// Realized reward not yet paid out.
    pub pending_reward: i128,
}

impl Position {
    /// Moves everything earned since the last interaction into
    /// `pending_reward`. Must run before `amount` changes.
    pub fn roll_up(&mut self, acc: i128) -> Result<(), ContractError> {
        if self.amount > 0 {
            let owed = rewards::owed(self.amount, acc, self.reward_debt)
                .ok_or(ContractError::ArithmeticOverflow)?;
            self.pending_reward = self
                .pending_reward
                .checked_add(owed)
                .ok_or(ContractError::ArithmeticOverflow)?;
        }
        Ok(())
    }

    /// Prices the current `amount` in at `acc`. Must run after `amount` changes.
    pub fn reprice(&mut self, acc: i128) -> Result<(), ContractError> {
        self.reward_debt =
            rewards::priced_in(self.amount, acc).ok_or(ContractError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Reward claimable right now given an up-to-date accumulator, without
    /// mutating the position.
    pub fn claimable(&self, acc: i128) -> Result<i128, ContractError> {
        let mut preview = self.clone();
        preview.roll_up(acc)?;
        Ok(preview.pending_reward)
    }
}

fn position_key(pool_id: u32, participant: &Address) -> (Symbol, u32, Address) {
    (POSITION, pool_id, participant.clone())
}

pub fn load(env: &Env, pool_id: u32, participant: &Address) -> Position {
    env.storage()
        .persistent()
        .get(&position_key(pool_id, participant))
        .unwrap_or_default()
}

pub fn save(env: &Env, pool_id: u32, participant: &Address, position: &Position) {
    let key = position_key(pool_id, participant);
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
