//! Soulgraph Core - Domain types for the trust graph
//!
//! This crate defines the soul profile, its classification tags, and the
//! in-memory directory that stands in for the persistence layer. The
//! graph algorithms live in `soulgraph-graph` and operate on the ordered
//! snapshot the directory exposes.

mod directory;
mod soul;

pub use directory::{DirectoryError, SoulDirectory};
pub use soul::{Alignment, Element, Rarity, Soul, TrustLink};
