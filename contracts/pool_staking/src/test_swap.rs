extern crate std;

use soroban_sdk::{
    contract, contractimpl, symbol_short,
    testutils::{Address as _, Ledger as _},
    token, Address, Env, Symbol, Vec,
};

use crate::test::{setup, Fixture, REWARD_FUNDING};
use crate::{ContractError, PauseCategory, StakeAsset};

// ── Mock exchange ────────────────────────────────────────────────────────────

const RATE_SCALE: i128 = 10_000_000;
const RATE: Symbol = symbol_short!("RATE");
const OFFLINE: Symbol = symbol_short!("OFFLINE");
const WITHHELD: Symbol = symbol_short!("WITHHELD");

/// Constant-rate exchange: every hop converts at `RATE / RATE_SCALE`.
/// Output is paid from its own balance; it does not check `amount_out_min`.
/// `set_withheld` makes it pay less than the amounts it reports.
#[contract]
pub struct MockRouter;

#[contractimpl]
impl MockRouter {
    pub fn set_rate(env: Env, rate: i128) {
        env.storage().instance().set(&RATE, &rate);
    }

    pub fn set_offline(env: Env, offline: bool) {
        env.storage().instance().set(&OFFLINE, &offline);
    }

    pub fn set_withheld(env: Env, withheld: i128) {
        env.storage().instance().set(&WITHHELD, &withheld);
    }

    pub fn get_amounts_out(env: Env, amount_in: i128, path: Vec<Address>) -> Vec<i128> {
        let offline: bool = env.storage().instance().get(&OFFLINE).unwrap_or(false);
        if offline {
            panic!("router offline");
        }
        let rate: i128 = env.storage().instance().get(&RATE).unwrap_or(RATE_SCALE);
        let mut amounts = Vec::new(&env);
        let mut amount = amount_in;
        amounts.push_back(amount);
        for _ in 1..path.len() {
            amount = amount * rate / RATE_SCALE;
            amounts.push_back(amount);
        }
        amounts
    }

    pub fn swap_exact_tokens_for_tokens(
        env: Env,
        amount_in: i128,
        _amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        _deadline: u64,
    ) -> Vec<i128> {
        let amounts = Self::get_amounts_out(env.clone(), amount_in, path.clone());
        let output = path.last().unwrap();
        let withheld: i128 = env.storage().instance().get(&WITHHELD).unwrap_or(0);
        let amount_out = amounts.last().unwrap() - withheld;
        token::Client::new(&env, &output).transfer(
            &env.current_contract_address(),
            &to,
            &amount_out,
        );
        amounts
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Ledger with one token pool, a staker holding 1_000 reward units of
/// accrued reward at tick 20, and a funded mock router at 0.5 per hop.
fn setup_with_router() -> (Fixture, Address, Address, u32) {
    let l = setup(100, 0);
    l.env.ledger().set_timestamp(1_000);

    let router = l.env.register(MockRouter, ());
    MockRouterClient::new(&l.env, &router).set_rate(&(RATE_SCALE / 2));
    l.mint(&l.native_token, &router, 1_000_000);
    l.mint(&l.stake_token, &router, 1_000_000);
    l.client.set_exchange_executor(&l.admin, &router);

    let pool = l.token_pool(1, 0, 0);
    let staker = l.funded_staker(1_000);
    l.client.stake(&staker, &pool, &1_000, &0);
    l.set_tick(20);

    (l, router, staker, pool)
}

// ── Quotes ───────────────────────────────────────────────────────────────────

#[test]
fn test_quote_without_router_is_zero() {
    let l = setup(100, 0);
    assert_eq!(l.client.get_swap_amount_out(&1_000, &StakeAsset::Native), 0);
}

#[test]
fn test_quote_follows_router_path() {
    let (l, _router, _staker, _pool) = setup_with_router();

    assert_eq!(l.client.get_swap_amount_out(&1_000, &StakeAsset::Native), 500);
    assert_eq!(
        l.client
            .get_swap_amount_out(&1_000, &StakeAsset::Token(l.stake_token.clone())),
        250
    );
    // Swapping the reward asset into itself has no route.
    assert_eq!(
        l.client
            .get_swap_amount_out(&1_000, &StakeAsset::Token(l.reward_token.clone())),
        0
    );
}

#[test]
fn test_quote_from_failing_router_is_zero() {
    let (l, router, _staker, _pool) = setup_with_router();
    MockRouterClient::new(&l.env, &router).set_offline(&true);

    assert_eq!(l.client.get_swap_amount_out(&1_000, &StakeAsset::Native), 0);
}

// ── claim_and_swap ───────────────────────────────────────────────────────────

#[test]
fn test_claim_and_swap_to_native() {
    let (l, router, staker, pool) = setup_with_router();

    let out = l
        .client
        .claim_and_swap(&staker, &pool, &StakeAsset::Native, &400, &2_000);

    assert_eq!(out, 500);
    assert_eq!(l.balance(&l.native_token, &staker), 500);
    assert_eq!(l.balance(&l.reward_token, &router), 1_000);
    assert_eq!(
        l.balance(&l.reward_token, &l.contract_id),
        REWARD_FUNDING - 1_000
    );
    assert_eq!(l.client.get_pending_reward(&pool, &staker), 0);
}

#[test]
fn test_claim_and_swap_to_token_hops_through_native() {
    let (l, _router, staker, pool) = setup_with_router();

    let out = l.client.claim_and_swap(
        &staker,
        &pool,
        &StakeAsset::Token(l.stake_token.clone()),
        &250,
        &2_000,
    );

    assert_eq!(out, 250);
    assert_eq!(l.balance(&l.stake_token, &staker), 250);
}

#[test]
fn test_slippage_reverts_everything() {
    let (l, router, staker, pool) = setup_with_router();

    let result = l
        .client
        .try_claim_and_swap(&staker, &pool, &StakeAsset::Native, &501, &2_000);
    assert_eq!(result, Err(Ok(ContractError::SlippageExceeded)));

    assert_eq!(l.client.get_pending_reward(&pool, &staker), 1_000);
    assert_eq!(l.balance(&l.reward_token, &router), 0);
    assert_eq!(l.balance(&l.native_token, &staker), 0);
}

#[test]
fn test_underpaying_router_trips_slippage() {
    let (l, router, staker, pool) = setup_with_router();
    // Reports 500 out but delivers 1.
    MockRouterClient::new(&l.env, &router).set_withheld(&499);

    let result = l
        .client
        .try_claim_and_swap(&staker, &pool, &StakeAsset::Native, &400, &2_000);
    assert_eq!(result, Err(Ok(ContractError::SlippageExceeded)));

    assert_eq!(l.client.get_pending_reward(&pool, &staker), 1_000);
    assert_eq!(l.balance(&l.native_token, &staker), 0);
    assert_eq!(
        l.balance(&l.reward_token, &l.contract_id),
        REWARD_FUNDING
    );
}

#[test]
fn test_claim_and_swap_reports_delivered_amount() {
    let (l, router, staker, pool) = setup_with_router();
    MockRouterClient::new(&l.env, &router).set_withheld(&100);

    let out = l
        .client
        .claim_and_swap(&staker, &pool, &StakeAsset::Native, &300, &2_000);

    assert_eq!(out, 400);
    assert_eq!(l.balance(&l.native_token, &staker), 400);
}

#[test]
fn test_router_failure_reverts_everything() {
    let (l, router, staker, pool) = setup_with_router();
    MockRouterClient::new(&l.env, &router).set_offline(&true);

    let result = l
        .client
        .try_claim_and_swap(&staker, &pool, &StakeAsset::Native, &0, &2_000);
    assert_eq!(result, Err(Ok(ContractError::SwapFailed)));

    assert_eq!(l.client.get_pending_reward(&pool, &staker), 1_000);
    assert_eq!(
        l.balance(&l.reward_token, &l.contract_id),
        REWARD_FUNDING
    );
}

#[test]
fn test_expired_deadline_fails() {
    let (l, _router, staker, pool) = setup_with_router();

    let result = l
        .client
        .try_claim_and_swap(&staker, &pool, &StakeAsset::Native, &0, &999);
    assert_eq!(result, Err(Ok(ContractError::DeadlinePassed)));

    // A deadline equal to the current time is still valid.
    let out = l
        .client
        .claim_and_swap(&staker, &pool, &StakeAsset::Native, &0, &1_000);
    assert_eq!(out, 500);
}

#[test]
fn test_claim_and_swap_without_router_fails() {
    let l = setup(100, 0);
    let pool = l.token_pool(1, 0, 0);
    let staker = l.funded_staker(1_000);
    l.client.stake(&staker, &pool, &1_000, &0);
    l.set_tick(20);

    let result = l
        .client
        .try_claim_and_swap(&staker, &pool, &StakeAsset::Native, &0, &u64::MAX);
    assert_eq!(result, Err(Ok(ContractError::RouterNotSet)));
}

#[test]
fn test_swap_into_reward_asset_is_rejected() {
    let (l, _router, staker, pool) = setup_with_router();

    let result = l.client.try_claim_and_swap(
        &staker,
        &pool,
        &StakeAsset::Token(l.reward_token.clone()),
        &0,
        &2_000,
    );
    assert_eq!(result, Err(Ok(ContractError::InvalidInput)));
}

#[test]
fn test_claim_and_swap_with_nothing_pending_fails() {
    let (l, _router, _staker, pool) = setup_with_router();
    let stranger = Address::generate(&l.env);

    let result = l
        .client
        .try_claim_and_swap(&stranger, &pool, &StakeAsset::Native, &0, &2_000);
    assert_eq!(result, Err(Ok(ContractError::NoRewardToClaim)));
}

#[test]
fn test_claim_pause_blocks_claim_and_swap() {
    let (l, _router, staker, pool) = setup_with_router();
    l.client
        .set_pause_status(&l.admin, &PauseCategory::Claim, &true);

    let result = l
        .client
        .try_claim_and_swap(&staker, &pool, &StakeAsset::Native, &0, &2_000);
    assert_eq!(result, Err(Ok(ContractError::Paused)));
}

// ── Executor management ──────────────────────────────────────────────────────

#[test]
fn test_executor_can_be_replaced() {
    let (l, router, _staker, _pool) = setup_with_router();
    let replacement = Address::generate(&l.env);

    assert_eq!(l.client.get_exchange_executor(), Some(router));
    l.client.set_exchange_executor(&l.admin, &replacement);
    assert_eq!(l.client.get_exchange_executor(), Some(replacement));
}

#[test]
fn test_executor_cannot_be_the_ledger_itself() {
    let l = setup(100, 0);
    let result = l.client.try_set_exchange_executor(&l.admin, &l.contract_id);
    assert_eq!(result, Err(Ok(ContractError::InvalidInput)));
}
