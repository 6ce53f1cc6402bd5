#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory farm store, composite filter engine, suggestions, and
//! selection state.
//!
//! This crate is the core of the farm map: it holds the immutable record
//! set for a session, evaluates the composite filter predicate on every
//! criteria change, derives the bounded suggestion list, and tracks the
//! single active selection driving the detail overlay. Everything here is
//! synchronous and single-threaded; the store is read-only after
//! construction, so concurrent rendering passes may read it freely.

pub mod criteria;
pub mod filter;
pub mod selection;
pub mod session;
pub mod store;
pub mod suggest;

pub use criteria::FilterCriteria;
pub use selection::Selection;
pub use session::{MapSession, VisibleStats};
pub use store::FarmStore;
pub use suggest::DEFAULT_SUGGESTION_LIMIT;

use thiserror::Error;

/// Errors raised at the criteria-setter boundary.
///
/// These are recoverable: the session keeps its previous criteria when a
/// setter rejects a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CriteriaError {
    /// The requested minimum herd size cannot be represented as a
    /// non-negative herd count. Negative values are rejected here rather
    /// than silently clamped.
    #[error("invalid minimum herd size {value}: expected a non-negative integer")]
    InvalidMinHerdSize {
        /// The rejected value.
        value: i64,
    },
}
