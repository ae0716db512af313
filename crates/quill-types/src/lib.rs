//! Foundation types for the Quill blog.
//!
//! This crate provides the identifier and date-presentation types used
//! throughout the Quill system. Every other Quill crate depends on
//! `quill-types`.
//!
//! # Key Types
//!
//! - [`DocumentId`] — the store's 12-byte document identifier, exposed
//!   externally as a 24-character hex string
//! - [`IdError`] — identifier decoding failures
//! - [`temporal`] — display and wire renderings of stored timestamps

pub mod error;
pub mod id;
pub mod temporal;

pub use error::IdError;
pub use id::DocumentId;
pub use temporal::{display_date, wire_date, Locale};
