//! Vacation pay calculation service
//!
//! This crate computes the vacation pay owed to an employee from their
//! average monthly salary and either a count of vacation days or a vacation
//! period, skipping public holidays that fall inside the period. It ships the
//! calculation engine and an HTTP API over it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod holiday;
pub mod models;
pub mod validation;
