//! Soul profiles and their classification tags.
//!
//! A soul is one participant in the trust graph. Trust edges are stored
//! denormalized: each soul carries the ordered list of ids that have
//! endorsed it (`trusted_by`), and the rest of the system derives the
//! directed graph from those lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Elemental classification of a soul.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Celestial,
    Crystal,
    Desert,
    Digital,
    Electric,
    Ether,
    Fire,
    Frost,
    Lunar,
    Nature,
    Neon,
    Quantum,
    Shadow,
    Sky,
    Solar,
    Water,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Celestial => "celestial",
            Self::Crystal => "crystal",
            Self::Desert => "desert",
            Self::Digital => "digital",
            Self::Electric => "electric",
            Self::Ether => "ether",
            Self::Fire => "fire",
            Self::Frost => "frost",
            Self::Lunar => "lunar",
            Self::Nature => "nature",
            Self::Neon => "neon",
            Self::Quantum => "quantum",
            Self::Shadow => "shadow",
            Self::Sky => "sky",
            Self::Solar => "solar",
            Self::Water => "water",
        };
        write!(f, "{}", s)
    }
}

/// Behavioral alignment of a soul.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Guardian,
    Healer,
    Mystic,
    Oracle,
    Sage,
    Wanderer,
    Warrior,
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Guardian => "guardian",
            Self::Healer => "healer",
            Self::Mystic => "mystic",
            Self::Oracle => "oracle",
            Self::Sage => "sage",
            Self::Wanderer => "wanderer",
            Self::Warrior => "warrior",
        };
        write!(f, "{}", s)
    }
}

/// Rarity tier assigned at mint time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        };
        write!(f, "{}", s)
    }
}

/// A participant profile node in the trust graph.
///
/// `trusted_by` is ground truth for graph structure; `trust_score` is a
/// display/ranking signal maintained alongside it by the store and may
/// transiently diverge from `trusted_by.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Soul {
    /// Opaque unique id, immutable once minted.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Bio text shown on the profile.
    pub bio: String,

    /// Avatar reference (emoji or asset path).
    pub avatar: String,

    /// Generated profile image, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Ranking signal, expected to track endorsement count.
    pub trust_score: u32,

    /// Owning wallet address.
    pub wallet_address: String,

    /// Mint timestamp.
    pub created_at: DateTime<Utc>,

    /// Ids of souls that have endorsed this soul, in endorsement order.
    pub trusted_by: Vec<String>,

    /// Archetype display name chosen at mint time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
}

impl Soul {
    /// Creates a freshly minted soul with no endorsements.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bio: String::new(),
            avatar: String::new(),
            image: None,
            trust_score: 0,
            wallet_address: String::new(),
            created_at: Utc::now(),
            trusted_by: Vec::new(),
            archetype: None,
            element: None,
            alignment: None,
            rarity: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn with_wallet(mut self, wallet: impl Into<String>) -> Self {
        self.wallet_address = wallet.into();
        self
    }

    pub fn with_trust_score(mut self, score: u32) -> Self {
        self.trust_score = score;
        self
    }

    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = Some(archetype.into());
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    /// True if the soul with `id` has endorsed this soul.
    pub fn is_endorsed_by(&self, id: &str) -> bool {
        self.trusted_by.iter().any(|e| e == id)
    }

    /// True if this soul has endorsed `other` ("this trusts other").
    pub fn trusts(&self, other: &Soul) -> bool {
        other.is_endorsed_by(&self.id)
    }
}

/// One recorded endorsement, kept as an audit trail by the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustLink {
    pub from_soul_id: String,
    pub to_soul_id: String,
    pub timestamp: DateTime<Utc>,
}
