extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::migration::{self, CURRENT_SCHEMA_VERSION};
use crate::test::setup;
use crate::{ContractError, PauseCategory};

#[test]
fn test_fresh_deployment_is_current() {
    let l = setup(100, 0);

    assert_eq!(l.client.get_schema_version(), CURRENT_SCHEMA_VERSION);
    // Nothing to do: reports the version it was already at.
    assert_eq!(l.client.migrate(&l.admin), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_legacy_global_pause_becomes_per_category() {
    let l = setup(100, 0);
    l.env.as_contract(&l.contract_id, || {
        migration::write_legacy_layout(&l.env, true);
    });
    assert_eq!(l.client.get_schema_version(), 1);

    assert_eq!(l.client.migrate(&l.admin), 1);

    assert_eq!(l.client.get_schema_version(), CURRENT_SCHEMA_VERSION);
    assert!(l.client.is_paused(&PauseCategory::Stake));
    assert!(l.client.is_paused(&PauseCategory::Unstake));
    assert!(l.client.is_paused(&PauseCategory::Claim));
}

#[test]
fn test_legacy_unpaused_layout_stays_unpaused() {
    let l = setup(100, 0);
    l.env.as_contract(&l.contract_id, || {
        migration::write_legacy_layout(&l.env, false);
    });

    l.client.migrate(&l.admin);

    assert!(!l.client.is_paused(&PauseCategory::Stake));
    assert!(!l.client.is_paused(&PauseCategory::Claim));
}

#[test]
fn test_migrate_requires_super_admin() {
    let l = setup(100, 0);
    let stranger = Address::generate(&l.env);

    assert_eq!(
        l.client.try_migrate(&stranger),
        Err(Ok(ContractError::Unauthorized))
    );
}
