//! Rule layer that ranks rental applications, flags competing applicants,
//! recommends rooms, and folds application records into dashboard analytics.

pub mod config;
pub mod error;
pub mod ingest;
pub mod ranking;
pub mod telemetry;
