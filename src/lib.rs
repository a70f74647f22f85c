//! Client-side domain core for the JobSwiftly employment marketplace.
//!
//! The crate covers the logic a marketplace client has to get right
//! independent of any rendering layer: deriving a posting's lifecycle status
//! from wall-clock time, the per-role navigation and access policy, the
//! enrichment pipeline that joins listings with per-item logo lookups, the
//! prior-submission dedup check, and windowed pagination. Backend services
//! are reached only through the collaborator ports in [`backend`]; page
//! orchestration lives in [`flows`].

pub mod access;
pub mod backend;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod flows;
pub mod listing;
pub mod pagination;
pub mod schedule;
pub mod session;
pub mod submissions;
pub mod telemetry;
