//! Vendor due-diligence toolkit: risk scoring, research planning, and reporting.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
