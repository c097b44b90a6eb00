//! Domain types and the purchase kernel.
//!
//! Nothing here performs I/O: coin validation and the greedy dispenser are
//! plain functions over values, and storage is reached only through the
//! [`ports::CatalogStore`] trait.

pub mod coin;
pub mod dispenser;
pub mod ports;
pub mod product;
