extern crate std;

use common::admin_tiers::AdminTier;
use soroban_sdk::{testutils::Address as _, Address};

use crate::test::{setup, Fixture};
use crate::{ContractError, PauseCategory, StakeAsset};

fn promoted(l: &Fixture, tier: AdminTier) -> Address {
    let target = Address::generate(&l.env);
    l.client.promote_admin(&l.admin, &target, &tier);
    target
}

// ── SuperAdmin bootstrapped on initialize ────────────────────────────────────

#[test]
fn test_admin_is_super_admin_after_init() {
    let l = setup(100, 0);
    assert_eq!(l.client.get_admin_tier(&l.admin), Some(AdminTier::SuperAdmin));
}

// ── Promotion & demotion ─────────────────────────────────────────────────────

#[test]
fn test_super_admin_promotes_every_tier() {
    let l = setup(100, 0);

    for tier in [
        AdminTier::OperatorAdmin,
        AdminTier::ContractAdmin,
        AdminTier::SuperAdmin,
    ] {
        let target = promoted(&l, tier.clone());
        assert_eq!(l.client.get_admin_tier(&target), Some(tier));
    }
}

#[test]
fn test_super_admin_demotes_admin() {
    let l = setup(100, 0);
    let target = promoted(&l, AdminTier::ContractAdmin);

    assert!(l.client.get_admins().contains(&target));
    l.client.demote_admin(&l.admin, &target);
    assert_eq!(l.client.get_admin_tier(&target), None);
    assert!(!l.client.get_admins().contains(&target));

    // A demoted manager loses access immediately.
    let result = l.client.try_set_reward_per_tick(&target, &1);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
}

#[test]
fn test_bootstrap_admin_cannot_be_demoted() {
    let l = setup(100, 0);
    let other = promoted(&l, AdminTier::SuperAdmin);

    let result = l.client.try_demote_admin(&other, &l.admin);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
    assert_eq!(l.client.get_admin_tier(&l.admin), Some(AdminTier::SuperAdmin));
}

#[test]
fn test_bootstrap_admin_cannot_be_lowered_by_promotion() {
    let l = setup(100, 0);
    let other = promoted(&l, AdminTier::SuperAdmin);

    for tier in [AdminTier::OperatorAdmin, AdminTier::ContractAdmin] {
        let result = l.client.try_promote_admin(&other, &l.admin, &tier);
        assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
    }
    assert_eq!(l.client.get_admin_tier(&l.admin), Some(AdminTier::SuperAdmin));

    // The bootstrap admin keeps its powers.
    l.client.set_reward_per_tick(&l.admin, &7);
    assert_eq!(l.client.get_config().reward_per_tick, 7);
}

#[test]
fn test_contract_admin_cannot_promote() {
    let l = setup(100, 0);
    let manager = promoted(&l, AdminTier::ContractAdmin);
    let target = Address::generate(&l.env);

    let result = l
        .client
        .try_promote_admin(&manager, &target, &AdminTier::OperatorAdmin);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_operator_admin_cannot_demote() {
    let l = setup(100, 0);
    let operator = promoted(&l, AdminTier::OperatorAdmin);
    let target = promoted(&l, AdminTier::OperatorAdmin);

    let result = l.client.try_demote_admin(&operator, &target);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

// ── ContractAdmin manages pools, rate and router ─────────────────────────────

#[test]
fn test_contract_admin_manages_pools_and_rate() {
    let l = setup(100, 0);
    let manager = promoted(&l, AdminTier::ContractAdmin);

    let pool = l
        .client
        .add_pool(&manager, &StakeAsset::Native, &2, &10, &5);
    l.client.update_pool_config(&manager, &pool, &4, &20, &6);
    l.client.set_reward_per_tick(&manager, &250);

    let stored = l.client.get_pool(&pool);
    assert_eq!(stored.weight, 4);
    assert_eq!(stored.min_deposit, 20);
    assert_eq!(stored.lock_duration, 6);
    assert_eq!(l.client.get_config().reward_per_tick, 250);
}

#[test]
fn test_contract_admin_sets_exchange_executor() {
    let l = setup(100, 0);
    let manager = promoted(&l, AdminTier::ContractAdmin);
    let router = Address::generate(&l.env);

    l.client.set_exchange_executor(&manager, &router);
    assert_eq!(l.client.get_exchange_executor(), Some(router));
}

#[test]
fn test_contract_admin_cannot_migrate() {
    let l = setup(100, 0);
    let manager = promoted(&l, AdminTier::ContractAdmin);

    assert_eq!(
        l.client.try_migrate(&manager),
        Err(Ok(ContractError::Unauthorized))
    );
}

// ── OperatorAdmin can only pause ─────────────────────────────────────────────

#[test]
fn test_operator_admin_can_pause() {
    let l = setup(100, 0);
    let operator = promoted(&l, AdminTier::OperatorAdmin);

    l.client
        .set_pause_status(&operator, &PauseCategory::Stake, &true);
    assert!(l.client.is_paused(&PauseCategory::Stake));
}

#[test]
fn test_operator_admin_cannot_manage_pools() {
    let l = setup(100, 0);
    let operator = promoted(&l, AdminTier::OperatorAdmin);

    let result = l
        .client
        .try_add_pool(&operator, &StakeAsset::Native, &1, &0, &0);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));

    let result = l.client.try_set_reward_per_tick(&operator, &99);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));

    let router = Address::generate(&l.env);
    let result = l.client.try_set_exchange_executor(&operator, &router);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
}

// ── Non-admin cannot call any admin function ─────────────────────────────────

#[test]
fn test_non_admin_is_rejected_everywhere() {
    let l = setup(100, 0);
    let intruder = Address::generate(&l.env);

    assert_eq!(l.client.get_admin_tier(&intruder), None);
    assert_eq!(
        l.client.try_add_pool(&intruder, &StakeAsset::Native, &1, &0, &0),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        l.client
            .try_set_pause_status(&intruder, &PauseCategory::Claim, &true),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        l.client
            .try_promote_admin(&intruder, &intruder, &AdminTier::SuperAdmin),
        Err(Ok(ContractError::Unauthorized))
    );
}
