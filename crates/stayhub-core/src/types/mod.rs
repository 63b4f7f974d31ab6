//! Shared type definitions.

pub mod pagination;
