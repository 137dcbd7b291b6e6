//! Shared helpers for integration and end-to-end tests
#![allow(dead_code)]

pub mod fake_registry;
pub mod mocks;
