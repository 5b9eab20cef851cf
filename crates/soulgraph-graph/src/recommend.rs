//! "Who to trust next" recommendation scoring.
//!
//! Candidates are every soul the current soul has not yet endorsed,
//! scored by a set of independent additive factors. Each factor that
//! fires contributes a human-readable reason string, in factor order.
//! Scoring is fully deterministic; ties keep snapshot order.

use soulgraph_core::{Rarity, Soul};
use std::collections::HashSet;

/// Trust score at or above which the high-trust bonus fires.
const HIGH_TRUST_THRESHOLD: u32 = 4;

/// A scored endorsement candidate.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SoulRecommendation {
    pub soul: Soul,
    pub score: u32,
    /// One entry per scoring factor that fired, in factor order.
    pub reasons: Vec<String>,
}

/// Ranks up to `limit` souls for the current soul to endorse next.
///
/// The current soul and anyone it already endorses are excluded. Results
/// are sorted by descending score; equal scores keep snapshot order.
pub fn recommended_souls(current: &Soul, all: &[Soul], limit: usize) -> Vec<SoulRecommendation> {
    let already_trusted: HashSet<&str> = all
        .iter()
        .filter(|s| s.is_endorsed_by(&current.id))
        .map(|s| s.id.as_str())
        .collect();

    let mut recommendations: Vec<SoulRecommendation> = all
        .iter()
        .filter(|soul| soul.id != current.id && !already_trusted.contains(soul.id.as_str()))
        .map(|soul| score_candidate(current, soul, all))
        .collect();

    recommendations.sort_by(|a, b| b.score.cmp(&a.score));
    recommendations.truncate(limit);
    recommendations
}

fn score_candidate(current: &Soul, candidate: &Soul, all: &[Soul]) -> SoulRecommendation {
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    // Souls endorsed by both the current soul and the candidate.
    let mutual_connections = all
        .iter()
        .filter(|s| s.is_endorsed_by(&current.id) && s.is_endorsed_by(&candidate.id))
        .count();

    if mutual_connections > 0 {
        score += mutual_connections as u32 * 10;
        reasons.push(format!(
            "{} mutual {}",
            mutual_connections,
            if mutual_connections == 1 {
                "connection"
            } else {
                "connections"
            }
        ));
    }

    // Souls the current soul endorses that in turn endorse the candidate.
    let trusted_by_network = all
        .iter()
        .filter(|s| s.is_endorsed_by(&current.id) && candidate.is_endorsed_by(&s.id))
        .count();

    if trusted_by_network > 0 {
        score += trusted_by_network as u32 * 8;
        reasons.push(format!("Trusted by {} souls you trust", trusted_by_network));
    }

    if let Some(element) = current.element {
        if candidate.element == Some(element) {
            score += 5;
            reasons.push(format!("Same element ({})", element));
        }
    }

    if let Some(alignment) = current.alignment {
        if candidate.alignment == Some(alignment) {
            score += 5;
            reasons.push(format!("Same alignment ({})", alignment));
        }
    }

    match candidate.rarity {
        Some(Rarity::Legendary) => {
            score += 3;
            reasons.push("Legendary soul".to_string());
        }
        Some(Rarity::Epic) => {
            score += 2;
            reasons.push("Epic soul".to_string());
        }
        _ => {}
    }

    if candidate.trust_score >= HIGH_TRUST_THRESHOLD {
        score += candidate.trust_score;
        reasons.push(format!("High trust score ({})", candidate.trust_score));
    }

    if current.is_endorsed_by(&candidate.id) {
        score += 15;
        reasons.push("Already trusts you".to_string());
    }

    if reasons.is_empty() {
        reasons.push("New soul to discover".to_string());
    }

    SoulRecommendation {
        soul: candidate.clone(),
        score,
        reasons,
    }
}

/// Top `limit` souls most similar to the reference, by tag overlap and
/// trust-score proximity. Used for the "similar souls" display; no
/// scores or reasons are exposed.
pub fn similar_souls(reference: &Soul, all: &[Soul], limit: usize) -> Vec<Soul> {
    let mut scored: Vec<(u32, &Soul)> = all
        .iter()
        .filter(|soul| soul.id != reference.id)
        .map(|soul| {
            let mut similarity: u32 = 0;

            if reference.element.is_some() && soul.element == reference.element {
                similarity += 3;
            }
            if reference.alignment.is_some() && soul.alignment == reference.alignment {
                similarity += 3;
            }
            if reference.rarity.is_some() && soul.rarity == reference.rarity {
                similarity += 2;
            }

            let delta = reference.trust_score.abs_diff(soul.trust_score);
            similarity += 5u32.saturating_sub(delta);

            (similarity, soul)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, s)| s.clone()).collect()
}
