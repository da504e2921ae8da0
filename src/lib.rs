//! Fleet Billing Engine for vehicle rental businesses
//!
//! This crate turns a month of daily tripsheet entries into a summary, a
//! vehicle-rental invoice and a driver salary, with amounts rendered in
//! Indian-English words (lakh/crore grouping).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
