//! Trust path discovery.
//!
//! Breadth-first traversal over the endorsement graph. Traversal follows
//! the "X trusts Y" direction: the neighbors of X are every soul whose
//! `trusted_by` lists X. Neighbors are scanned in snapshot order, so tie
//! breaks among equal-length paths are deterministic for a fixed input
//! order.

use soulgraph_core::Soul;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// A shortest trust path from a source soul to a target.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TrustPath {
    /// Souls along the path, source first.
    pub souls: Vec<Soul>,
    /// Edge count of the path ("degrees of separation").
    pub degrees: usize,
}

/// Finds the shortest directed trust path from `source` to `target`.
///
/// A self-query returns a zero-length path containing only the source.
/// Returns `None` when the target is unreachable. Ids in `trusted_by`
/// with no matching soul in the snapshot are skipped, never an error.
pub fn find_trust_path(source: &Soul, target: &Soul, all: &[Soul]) -> Option<TrustPath> {
    if source.id == target.id {
        return Some(TrustPath {
            souls: vec![source.clone()],
            degrees: 0,
        });
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(&Soul, Vec<Soul>)> = VecDeque::new();

    visited.insert(source.id.clone());
    queue.push_back((source, vec![source.clone()]));

    while let Some((soul, path)) = queue.pop_front() {
        for next in all.iter().filter(|s| s.is_endorsed_by(&soul.id)) {
            if visited.contains(&next.id) {
                continue;
            }

            let mut new_path = path.clone();
            new_path.push(next.clone());

            if next.id == target.id {
                let degrees = new_path.len() - 1;
                return Some(TrustPath {
                    souls: new_path,
                    degrees,
                });
            }

            visited.insert(next.id.clone());
            queue.push_back((next, new_path));
        }
    }

    None
}

/// Enumerates every soul reachable from `source` within `max_degrees`
/// hops, mapped by id to its first (shortest) path.
///
/// The source itself is excluded; souls beyond the bound are absent.
pub fn find_all_paths_within_degrees(
    source: &Soul,
    all: &[Soul],
    max_degrees: usize,
) -> HashMap<String, TrustPath> {
    let mut paths: HashMap<String, TrustPath> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(&Soul, Vec<Soul>, usize)> = VecDeque::new();

    visited.insert(source.id.clone());
    queue.push_back((source, vec![source.clone()], 0));

    while let Some((soul, path, degree)) = queue.pop_front() {
        if degree >= max_degrees {
            continue;
        }

        for next in all.iter().filter(|s| s.is_endorsed_by(&soul.id)) {
            if visited.contains(&next.id) {
                continue;
            }

            let mut new_path = path.clone();
            new_path.push(next.clone());
            let new_degree = degree + 1;

            paths.insert(
                next.id.clone(),
                TrustPath {
                    souls: new_path.clone(),
                    degrees: new_degree,
                },
            );

            visited.insert(next.id.clone());
            queue.push_back((next, new_path, new_degree));
        }
    }

    debug!(
        source = %source.id,
        max_degrees,
        reachable = paths.len(),
        "bounded trust traversal complete"
    );

    paths
}

/// Degrees of separation between two souls, or `-1` if unreachable.
pub fn degrees_of_separation(source: &Soul, target: &Soul, all: &[Soul]) -> i64 {
    match find_trust_path(source, target, all) {
        Some(path) => path.degrees as i64,
        None => -1,
    }
}

/// Reachable souls within `max_degrees`, sorted nearest first.
///
/// Ties at the same degree keep snapshot order; truncated to `limit`.
pub fn nearby_connections(
    source: &Soul,
    all: &[Soul],
    max_degrees: usize,
    limit: usize,
) -> Vec<(Soul, usize)> {
    let paths = find_all_paths_within_degrees(source, all, max_degrees);

    let mut nearby: Vec<(Soul, usize)> = all
        .iter()
        .filter_map(|s| paths.get(&s.id).map(|p| (s.clone(), p.degrees)))
        .collect();

    nearby.sort_by_key(|(_, degrees)| *degrees);
    nearby.truncate(limit);
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_soul(id: &str, trusted_by: &[&str]) -> Soul {
        let mut soul = Soul::new(id, id);
        soul.trusted_by = trusted_by.iter().map(|s| s.to_string()).collect();
        soul
    }

    /// A trusts B trusts C trusts D, plus a direct A trusts D shortcut.
    fn chain_with_shortcut() -> Vec<Soul> {
        vec![
            make_soul("a", &[]),
            make_soul("b", &["a"]),
            make_soul("c", &["b"]),
            make_soul("d", &["c", "a"]),
        ]
    }

    #[test]
    fn test_self_path() {
        let all = vec![make_soul("a", &[])];
        let path = find_trust_path(&all[0], &all[0], &all).unwrap();
        assert_eq!(path.degrees, 0);
        assert_eq!(path.souls.len(), 1);
        assert_eq!(path.souls[0].id, "a");
    }

    #[test]
    fn test_direct_edge() {
        let all = vec![make_soul("a", &[]), make_soul("b", &["a"])];
        let path = find_trust_path(&all[0], &all[1], &all).unwrap();
        assert_eq!(path.degrees, 1);
        let ids: Vec<&str> = path.souls.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_trust_is_not_symmetric() {
        // a trusts b, but b does not trust a
        let all = vec![make_soul("a", &[]), make_soul("b", &["a"])];
        assert!(find_trust_path(&all[0], &all[1], &all).is_some());
        assert!(find_trust_path(&all[1], &all[0], &all).is_none());
    }

    #[test]
    fn test_shortcut_beats_chain() {
        let all = chain_with_shortcut();
        let path = find_trust_path(&all[0], &all[3], &all).unwrap();
        assert_eq!(path.degrees, 1);
        let ids: Vec<&str> = path.souls.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_multi_hop_path() {
        let all = vec![
            make_soul("a", &[]),
            make_soul("b", &["a"]),
            make_soul("c", &["b"]),
        ];
        let path = find_trust_path(&all[0], &all[2], &all).unwrap();
        assert_eq!(path.degrees, 2);
        let ids: Vec<&str> = path.souls.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cycle_terminates() {
        // a -> b -> c -> a, query an unreachable node
        let all = vec![
            make_soul("a", &["c"]),
            make_soul("b", &["a"]),
            make_soul("c", &["b"]),
            make_soul("island", &[]),
        ];
        assert!(find_trust_path(&all[0], &all[3], &all).is_none());
        assert_eq!(degrees_of_separation(&all[0], &all[3], &all), -1);
    }

    #[test]
    fn test_dangling_endorser_skipped() {
        // b's only route from a goes through an id missing from the snapshot
        let all = vec![make_soul("a", &[]), make_soul("b", &["ghost"])];
        assert!(find_trust_path(&all[0], &all[1], &all).is_none());
    }

    #[test]
    fn test_tie_break_follows_snapshot_order() {
        // Two equal-length routes a->b->d and a->c->d; b precedes c in the
        // snapshot, so the first discovered path goes through b.
        let all = vec![
            make_soul("a", &[]),
            make_soul("b", &["a"]),
            make_soul("c", &["a"]),
            make_soul("d", &["b", "c"]),
        ];
        let path = find_trust_path(&all[0], &all[3], &all).unwrap();
        let ids: Vec<&str> = path.souls.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "d"]);
    }

    #[test]
    fn test_bounded_enumeration() {
        // a -> b -> c -> d chain: within 2 degrees only b and c qualify
        let all = vec![
            make_soul("a", &[]),
            make_soul("b", &["a"]),
            make_soul("c", &["b"]),
            make_soul("d", &["c"]),
        ];
        let paths = find_all_paths_within_degrees(&all[0], &all, 2);

        assert_eq!(paths.len(), 2);
        assert_eq!(paths.get("b").unwrap().degrees, 1);
        assert_eq!(paths.get("c").unwrap().degrees, 2);
        assert!(paths.get("d").is_none());
        assert!(paths.get("a").is_none(), "source must be excluded");
    }

    #[test]
    fn test_zero_degrees_is_empty() {
        let all = vec![make_soul("a", &[]), make_soul("b", &["a"])];
        assert!(find_all_paths_within_degrees(&all[0], &all, 0).is_empty());
    }

    #[test]
    fn test_bounded_enumeration_records_shortest() {
        let all = chain_with_shortcut();
        let paths = find_all_paths_within_degrees(&all[0], &all, 3);
        // d is reachable in 1 via the shortcut even though the chain takes 3
        assert_eq!(paths.get("d").unwrap().degrees, 1);
    }

    #[test]
    fn test_degrees_of_separation() {
        let all = chain_with_shortcut();
        assert_eq!(degrees_of_separation(&all[0], &all[1], &all), 1);
        assert_eq!(degrees_of_separation(&all[0], &all[2], &all), 2);
        assert_eq!(degrees_of_separation(&all[0], &all[3], &all), 1);
        assert_eq!(degrees_of_separation(&all[0], &all[0], &all), 0);
    }

    #[test]
    fn test_nearby_connections_sorted_and_limited() {
        let all = vec![
            make_soul("a", &[]),
            make_soul("b", &["a"]),
            make_soul("c", &["b"]),
            make_soul("d", &["a"]),
            make_soul("e", &["c"]),
        ];
        let nearby = nearby_connections(&all[0], &all, 3, 3);
        let ids: Vec<(&str, usize)> = nearby.iter().map(|(s, d)| (s.id.as_str(), *d)).collect();
        // b and d at degree 1 in snapshot order, then c at degree 2; e cut
        // by the limit.
        assert_eq!(ids, vec![("b", 1), ("d", 1), ("c", 2)]);
    }
}
