//! Scheduling store interface, record models and the in-memory implementation.

pub mod error;
pub mod memory;
pub mod model;
pub mod provider;
pub mod secret;
pub mod seed;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use provider::{SchedulingStore, StoreFuture};
