//! Utility modules: profile persistence.

pub mod persistence;

pub use persistence::{hunter_dir, JsonFileStore, MemoryStore, ProfileStore, StoreError};
