//! Graph construction and representation
//!
//! This module provides the weighted adjacency store and the edge-list
//! importer that feeds it.

pub mod import;
pub mod store;
