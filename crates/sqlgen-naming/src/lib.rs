//! Deterministic identifier normalization for generated code.
//!
//! Raw schema names are inconsistent across vendors: Oracle shouts
//! (`PRODUCT`, `ORDER_DETAILS`), SQL Server often ships the casing the user
//! actually wants (`orderDetails`). This crate turns those raw names into
//! stable identifiers for emitted source code, with a user-supplied
//! [`OverrideTable`](sqlgen_model::OverrideTable) taking precedence over
//! every heuristic.
//!
//! The pipeline is pure: the same raw name, override table, and options
//! always produce the same identifier, so regeneration never churns
//! generated code.

#![deny(unsafe_code)]

pub mod case;
mod engine;
pub mod keywords;
pub mod plural;

pub use engine::NamingEngine;
