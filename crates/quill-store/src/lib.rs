//! Document storage for the Quill blog.
//!
//! This crate implements a schema-flexible document store: JSON documents
//! grouped into named collections inside one logical database. The blog's
//! repositories talk to it through five operations -- `find`, `find_one`,
//! `insert_one`, `update_one`, `delete_one` -- each a single asynchronous
//! round trip.
//!
//! # Pieces
//!
//! - [`Document`] -- a JSON object; [`to_document`]/[`from_document`] convert
//!   typed records
//! - [`Filter`] -- which documents an operation addresses
//! - [`Projection`] -- which fields a read returns
//! - [`DocumentStore`] -- the backend trait; [`InMemoryDocumentStore`] is the
//!   bundled backend
//! - [`StoreHandle`] -- connect-once handle yielding a [`Database`] of
//!   [`Collection`]s
//!
//! # Design Rules
//!
//! 1. Every operation touches exactly one collection; single-document
//!    atomicity comes from the backend, nothing more.
//! 2. Result order is the store's natural order and is not guaranteed
//!    stable across calls.
//! 3. All backend errors are propagated, never retried and never swallowed.
//! 4. The handle is connected once at startup and read-only afterwards.

pub mod document;
pub mod error;
pub mod filter;
pub mod handle;
pub mod memory;
pub mod projection;
pub mod traits;

pub use document::{document_id, from_document, to_document, Document, ID_FIELD};
pub use error::{StoreError, StoreResult};
pub use filter::Filter;
pub use handle::{Collection, Database, StoreConfig, StoreHandle};
pub use memory::InMemoryDocumentStore;
pub use projection::Projection;
pub use traits::DocumentStore;
