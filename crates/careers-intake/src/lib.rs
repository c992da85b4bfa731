//! Listing, application intake, and showcase workflows behind the WMSols careers site.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
