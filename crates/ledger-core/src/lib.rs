//! # ledger-core
//!
//! Core types and rules shared across all Lighthouse Ledger crates.
//!
//! - Entity structs for entries, evidence, assessment rows and verifications
//! - Enums for evidence kinds, confidence bands, layer descriptors and entry status
//! - Request and response payloads for the HTTP surface
//! - Identifier helpers, including the public verification id derivation
//! - Evidence upload rules (size limit, MIME allow-list, storage paths)
//! - Text truncation helpers used for prompt digests and timeline summaries

pub mod entities;
pub mod enums;
pub mod errors;
pub mod evidence_rules;
pub mod identity;
pub mod ids;
pub mod requests;
pub mod responses;
pub mod text;
