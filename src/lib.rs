//! Shortcut Mapper - canonical keyboard shortcut datasets
//!
//! This library turns free-text shortcut documentation scraped from many
//! sources into canonical, deduplicated, deterministically serialized
//! datasets, one per application version and platform.

pub mod appdata;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod intermediate;
pub mod keynames;
pub mod logging;
pub mod shortcuts;
