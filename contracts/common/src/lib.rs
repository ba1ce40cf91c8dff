//! Shared building blocks for the pool staking contracts.
//!
//! This crate provides:
//! - [`admin_tiers`]: the tiered permission table consulted by every
//!   privileged entry point (`SuperAdmin` > `ContractAdmin` > `OperatorAdmin`).
//! - [`reentrancy`]: an in-progress flag owned by a guard value that rejects
//!   nested entry into a contract while an operation is running.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod admin_tiers;
pub mod reentrancy;

pub use admin_tiers::AdminTier;
pub use reentrancy::{ReentrancyError, ReentrancyGuard};
