use soroban_sdk::{contractclient, symbol_short, token, vec, Address, Env, Symbol, Vec};

use crate::{registry::StakeAsset, ContractError};

const ROUTER: Symbol = symbol_short!("ROUTER");

/// Interface of the external exchange used to liquidate rewards.
///
/// The router must already hold `amount_in` of `path[0]` when
/// `swap_exact_tokens_for_tokens` is invoked; it delivers the output of the
/// last hop to `to` and returns the amount produced at every hop.
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    fn swap_exact_tokens_for_tokens(
        env: Env,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<i128>;

    fn get_amounts_out(env: Env, amount_in: i128, path: Vec<Address>) -> Vec<i128>;
}

pub fn router(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ROUTER)
}

pub fn set_router(env: &Env, router: &Address) {
    env.storage().instance().set(&ROUTER, router);
}

/// Route from the reward asset to `output`, hopping through the native asset.
pub fn build_path(
    env: &Env,
    reward_token: &Address,
    native_token: &Address,
    output: &StakeAsset,
) -> Result<Vec<Address>, ContractError> {
    match output {
        StakeAsset::Native => Ok(vec![env, reward_token.clone(), native_token.clone()]),
        StakeAsset::Token(token) if token == reward_token => Err(ContractError::InvalidInput),
        StakeAsset::Token(token) if token == native_token => {
            Ok(vec![env, reward_token.clone(), native_token.clone()])
        }
        StakeAsset::Token(token) => Ok(vec![
            env,
            reward_token.clone(),
            native_token.clone(),
            token.clone(),
        ]),
    }
}

/// Read-only price query. `None` when the router cannot quote the path.
pub fn quote(env: &Env, router: &Address, amount_in: i128, path: &Vec<Address>) -> Option<i128> {
    let client = SwapRouterClient::new(env, router);
    match client.try_get_amounts_out(&amount_in, path) {
        Ok(Ok(amounts)) => amounts.last(),
        _ => None,
    }
}

/// Hands `amount_in` of `path[0]` to the router and swaps it for at least
/// `min_out` of the last asset in `path`, delivered to `to`.
///
/// Returns the increase in `to`'s balance of the output asset.
///
/// The caller must return the error so the whole invocation, including the
/// transfer to the router, is rolled back.
pub fn execute(
    env: &Env,
    router: &Address,
    amount_in: i128,
    min_out: i128,
    path: &Vec<Address>,
    to: &Address,
    deadline: u64,
) -> Result<i128, ContractError> {
    let input = path.first().ok_or(ContractError::InvalidInput)?;
    let output = path.last().ok_or(ContractError::InvalidInput)?;
    let output_token = token::Client::new(env, &output);
    let before = output_token.balance(to);

    token::Client::new(env, &input).transfer(&env.current_contract_address(), router, &amount_in);

    let client = SwapRouterClient::new(env, router);
    match client.try_swap_exact_tokens_for_tokens(&amount_in, &min_out, path, to, &deadline) {
        Ok(Ok(_)) => {}
        _ => return Err(ContractError::SwapFailed),
    }

    // Measured at the recipient; the router's reported amounts are not trusted.
    let amount_out = output_token
        .balance(to)
        .checked_sub(before)
        .ok_or(ContractError::ArithmeticOverflow)?;
    if amount_out < min_out {
        return Err(ContractError::SlippageExceeded);
    }
    Ok(amount_out)
}
