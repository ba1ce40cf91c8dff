use soroban_sdk::{symbol_short, Env, Symbol};

const IN_PROGRESS: Symbol = symbol_short!("IN_PROG");

/// Returned when an entry point is invoked while another one is still running.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReentrancyError;

/// Owns the contract's in-progress flag for the duration of one operation.
///
/// `acquire` sets the flag and fails if it is already set; dropping the guard
/// clears it. A failed operation has its storage writes rolled back by the
/// host, so the flag can never stay set after an aborted call.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, ReentrancyError> {
        if is_entered(env) {
            return Err(ReentrancyError);
        }
        env.storage().instance().set(&IN_PROGRESS, &true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&IN_PROGRESS);
    }
}

pub fn is_entered(env: &Env) -> bool {
    env.storage().instance().get(&IN_PROGRESS).unwrap_or(false)
}
