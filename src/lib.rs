// src/lib.rs

//! top4crawler Library
//!
//! Resolves accepted-paper metadata for the Top4 security conferences
//! (S&P, CCS, USENIX Security, NDSS) by trying upstream sources in
//! priority order and normalizing whatever answers first.

pub mod error;
pub mod models;
pub mod resolver;
pub mod sources;
pub mod utils;

pub use resolver::{Resolver, resolve, resolve_with};
