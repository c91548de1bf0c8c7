//! Repository methods, all implemented on [`crate::service::FintelService`].

pub mod catalog;
pub mod collection;
pub mod comparison;
pub mod franchise;
pub mod health;
pub mod insight;
