/// State management module
///
/// This module handles the in-memory application state:
/// - Shared data structures (data.rs)
/// - Canonical item lists and category filtering (store.rs)
pub mod data;
pub mod store;
