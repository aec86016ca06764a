//! Canonical application datasets and their on-disk form.
//!
//! This module provides:
//! - `ApplicationDataset` - the shortcuts of one app version on one platform
//! - Deterministic JSON serialization of a dataset
//! - Regeneration of the site index (`apps.js`) after every write

mod dataset;
mod index;
mod serialize;

pub use dataset::{ApplicationDataset, OutputLayout};
pub use index::regenerate_index;
