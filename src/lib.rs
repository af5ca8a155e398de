// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod directory;
pub mod model;
pub mod news;
pub mod samples;
pub mod store;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::config::ServiceConfig;
pub use crate::news::{priority_rank, rank, NewsFilter, NewsProvider, StaticNewsBoard};
