//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `VendingMachine` service which acts as the primary
//! entry point for catalog maintenance and purchases. It owns the storage
//! backend and hands catalog snapshots to the pure purchase kernel.

pub mod vending;
