//! In-memory soul directory.
//!
//! The directory plays the role of the persistence collaborator: it owns
//! the ordered soul collection, mints new souls, and records trust
//! endorsements. Graph queries never go through it; they take the
//! snapshot slice it exposes.

use crate::soul::{Soul, TrustLink};
use chrono::Utc;
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("unknown soul id: {0}")]
    UnknownSoul(String),
    #[error("duplicate soul id: {0}")]
    DuplicateSoul(String),
    #[error("a soul cannot endorse itself: {0}")]
    SelfEndorsement(String),
}

/// Owns the soul collection and the endorsement log.
///
/// Souls keep their insertion order; every query layer above depends on
/// that order for deterministic results.
#[derive(Debug, Default)]
pub struct SoulDirectory {
    souls: Vec<Soul>,
    /// Maps soul ids to positions in `souls`.
    id_index: HashMap<String, usize>,
    links: Vec<TrustLink>,
}

impl SoulDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from an existing snapshot (e.g. a loaded file).
    ///
    /// Souls with a duplicate id are rejected; endorsement history is not
    /// reconstructed, only the denormalized `trusted_by` lists carry it.
    pub fn from_souls(souls: Vec<Soul>) -> Result<Self, DirectoryError> {
        let mut dir = Self::new();
        for soul in souls {
            dir.insert(soul)?;
        }
        Ok(dir)
    }

    /// Adds a pre-built soul to the directory.
    pub fn insert(&mut self, soul: Soul) -> Result<&Soul, DirectoryError> {
        if self.id_index.contains_key(&soul.id) {
            return Err(DirectoryError::DuplicateSoul(soul.id));
        }
        self.id_index.insert(soul.id.clone(), self.souls.len());
        self.souls.push(soul);
        Ok(self.souls.last().unwrap())
    }

    /// Mints a new soul with no endorsements.
    pub fn mint(&mut self, soul: Soul) -> Result<&Soul, DirectoryError> {
        let mut soul = soul;
        soul.trusted_by.clear();
        self.insert(soul)
    }

    /// Records a trust endorsement: `from` endorses `to`.
    ///
    /// Appends to the target's `trusted_by`, bumps its trust score, and
    /// logs a [`TrustLink`]. A repeated endorsement is appended as-is,
    /// since deduplicating here would silently change degree and
    /// influence numbers downstream, and flagged with a warning.
    pub fn record_trust(&mut self, from_id: &str, to_id: &str) -> Result<(), DirectoryError> {
        if from_id == to_id {
            return Err(DirectoryError::SelfEndorsement(from_id.to_string()));
        }
        if !self.id_index.contains_key(from_id) {
            return Err(DirectoryError::UnknownSoul(from_id.to_string()));
        }
        let to_pos = *self
            .id_index
            .get(to_id)
            .ok_or_else(|| DirectoryError::UnknownSoul(to_id.to_string()))?;

        let target = &mut self.souls[to_pos];
        if target.is_endorsed_by(from_id) {
            warn!(from = from_id, to = to_id, "duplicate trust endorsement");
        }
        target.trusted_by.push(from_id.to_string());
        target.trust_score += 1;

        self.links.push(TrustLink {
            from_soul_id: from_id.to_string(),
            to_soul_id: to_id.to_string(),
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Gets a soul by id.
    pub fn get(&self, id: &str) -> Option<&Soul> {
        self.id_index.get(id).map(|&pos| &self.souls[pos])
    }

    /// The ordered snapshot all graph queries operate on.
    pub fn souls(&self) -> &[Soul] {
        &self.souls
    }

    /// Consumes the directory, returning the snapshot for serialization.
    pub fn into_souls(self) -> Vec<Soul> {
        self.souls
    }

    /// The endorsement log, in recording order.
    pub fn links(&self) -> &[TrustLink] {
        &self.links
    }

    /// Returns the number of souls.
    pub fn len(&self) -> usize {
        self.souls.len()
    }

    /// Returns true if no souls have been minted.
    pub fn is_empty(&self) -> bool {
        self.souls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_and_get() {
        let mut dir = SoulDirectory::new();
        dir.mint(Soul::new("a", "Aria")).unwrap();
        dir.mint(Soul::new("b", "Bram")).unwrap();

        assert_eq!(dir.len(), 2);
        assert_eq!(dir.get("a").unwrap().name, "Aria");
        assert!(dir.get("z").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut dir = SoulDirectory::new();
        dir.mint(Soul::new("a", "Aria")).unwrap();
        let err = dir.mint(Soul::new("a", "Impostor")).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateSoul(_)));
    }

    #[test]
    fn test_record_trust_updates_target() {
        let mut dir = SoulDirectory::new();
        dir.mint(Soul::new("a", "Aria")).unwrap();
        dir.mint(Soul::new("b", "Bram")).unwrap();

        dir.record_trust("a", "b").unwrap();

        let b = dir.get("b").unwrap();
        assert_eq!(b.trusted_by, vec!["a".to_string()]);
        assert_eq!(b.trust_score, 1);
        assert_eq!(dir.links().len(), 1);
        assert_eq!(dir.links()[0].from_soul_id, "a");

        // The endorser itself is untouched
        let a = dir.get("a").unwrap();
        assert!(a.trusted_by.is_empty());
        assert_eq!(a.trust_score, 0);
    }

    #[test]
    fn test_self_endorsement_rejected() {
        let mut dir = SoulDirectory::new();
        dir.mint(Soul::new("a", "Aria")).unwrap();
        let err = dir.record_trust("a", "a").unwrap_err();
        assert!(matches!(err, DirectoryError::SelfEndorsement(_)));
    }

    #[test]
    fn test_unknown_souls_rejected() {
        let mut dir = SoulDirectory::new();
        dir.mint(Soul::new("a", "Aria")).unwrap();

        assert!(matches!(
            dir.record_trust("ghost", "a"),
            Err(DirectoryError::UnknownSoul(_))
        ));
        assert!(matches!(
            dir.record_trust("a", "ghost"),
            Err(DirectoryError::UnknownSoul(_))
        ));
    }

    #[test]
    fn test_duplicate_endorsement_preserved() {
        let mut dir = SoulDirectory::new();
        dir.mint(Soul::new("a", "Aria")).unwrap();
        dir.mint(Soul::new("b", "Bram")).unwrap();

        dir.record_trust("a", "b").unwrap();
        dir.record_trust("a", "b").unwrap();

        // Literal append: the upstream store does not deduplicate, and
        // neither do we.
        let b = dir.get("b").unwrap();
        assert_eq!(b.trusted_by, vec!["a".to_string(), "a".to_string()]);
        assert_eq!(b.trust_score, 2);
    }

    #[test]
    fn test_from_souls_preserves_order() {
        let souls = vec![
            Soul::new("c", "Cyra"),
            Soul::new("a", "Aria"),
            Soul::new("b", "Bram"),
        ];
        let dir = SoulDirectory::from_souls(souls).unwrap();
        let ids: Vec<&str> = dir.souls().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
