//! Core library components.
//!
//! This module contains the reusable business logic for the branch
//! store, encryption, and configuration handling.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod fsutil;
pub mod keyring;
pub mod path;
pub mod repo;
pub mod tree;
pub mod vault;
