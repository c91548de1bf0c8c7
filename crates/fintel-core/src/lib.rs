//! # fintel-core
//!
//! Core types shared across all Franchise Intel crates:
//! - Entity structs for catalog and user-owned records
//! - Sector and sort-key enums
//! - ID prefix constants
//! - Authenticated identity passed between crates
//! - Input validation run before any backend call
//! - Display formatting for currency, ranges and percentages
//! - The navigable route table
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod format;
pub mod identity;
pub mod ids;
pub mod routes;
pub mod validation;
