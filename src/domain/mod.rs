//! Domain layer containing business entities and access rules.
//!
//! Nothing here depends on HTTP or on a concrete database.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`identity`] - The resolved caller and the ownership predicate
//! - [`repositories`] - Data access trait definitions
//!
//! # Ownership
//!
//! Every read, update and delete of a [`entities::Todo`] is gated by
//! [`identity::Identity::owns`]. Callers never see or touch rows that belong
//! to someone else; such rows are reported exactly like missing ones.

pub mod entities;
pub mod identity;
pub mod repositories;
