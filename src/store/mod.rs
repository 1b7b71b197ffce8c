//! SQL-backed product storage.
//!
//! A single [`StoreActor`] task owns the database connection. Everything else
//! talks to it through a cloneable [`StoreClient`], which is also the
//! [`ProductRepository`](crate::repository::ProductRepository) used by the
//! console session.

pub mod actor;
pub mod client;

pub use actor::*;
pub use client::*;
