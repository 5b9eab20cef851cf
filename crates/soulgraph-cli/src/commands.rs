//! CLI command implementations.

use colored::Colorize;
use soulgraph_core::{Soul, SoulDirectory};
use soulgraph_graph::{
    degrees_of_separation, find_trust_path, nearby_connections, recommended_souls, similar_souls,
    trust_stats, TrustGraph,
};
use std::fs;
use std::path::Path;
use thiserror::Error;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no soul matches \"{0}\"")]
    NoMatch(String),
    #[error("\"{0}\" is ambiguous, matches: {1}")]
    Ambiguous(String, String),
}

/// Loads the soul snapshot from a JSON file.
fn load_snapshot(file: &Path) -> Result<Vec<Soul>> {
    let raw = fs::read_to_string(file)?;
    let souls: Vec<Soul> = serde_json::from_str(&raw)?;
    tracing::debug!(souls = souls.len(), file = %file.display(), "snapshot loaded");
    Ok(souls)
}

/// Resolves a soul by exact id, then by unique name prefix.
fn resolve<'a>(souls: &'a [Soul], query: &str) -> std::result::Result<&'a Soul, ResolveError> {
    if let Some(soul) = souls.iter().find(|s| s.id == query) {
        return Ok(soul);
    }

    let query_lower = query.to_lowercase();
    let matches: Vec<&Soul> = souls
        .iter()
        .filter(|s| s.name.to_lowercase().starts_with(&query_lower))
        .collect();

    match matches.len() {
        0 => Err(ResolveError::NoMatch(query.to_string())),
        1 => Ok(matches[0]),
        _ => {
            let names: Vec<&str> = matches.iter().map(|s| s.name.as_str()).collect();
            Err(ResolveError::Ambiguous(
                query.to_string(),
                names.join(", "),
            ))
        }
    }
}

fn label(soul: &Soul) -> String {
    format!("{} {}", soul.name.cyan(), format!("({})", soul.id).dimmed())
}

/// Find and print the shortest trust path between two souls.
pub fn path(file: &Path, from: &str, to: &str) -> Result<()> {
    let souls = load_snapshot(file)?;
    let source = resolve(&souls, from)?;
    let target = resolve(&souls, to)?;

    match find_trust_path(source, target, &souls) {
        Some(path) => {
            let chain: Vec<String> = path.souls.iter().map(|s| s.name.clone()).collect();
            println!(
                "{} {} ({} degree{})",
                "✓".green(),
                chain.join(" → ").cyan(),
                path.degrees,
                if path.degrees == 1 { "" } else { "s" }
            );
        }
        None => {
            println!(
                "No trust path from {} to {}",
                source.name.cyan(),
                target.name.cyan()
            );
        }
    }

    Ok(())
}

/// Print the degrees of separation between two souls.
pub fn degrees(file: &Path, from: &str, to: &str) -> Result<()> {
    let souls = load_snapshot(file)?;
    let source = resolve(&souls, from)?;
    let target = resolve(&souls, to)?;

    println!("{}", degrees_of_separation(source, target, &souls));
    Ok(())
}

/// List souls reachable within a bounded number of hops, nearest first.
pub fn network(file: &Path, soul: &str, max_degrees: usize, limit: usize) -> Result<()> {
    let souls = load_snapshot(file)?;
    let source = resolve(&souls, soul)?;

    let nearby = nearby_connections(source, &souls, max_degrees, limit);

    if nearby.is_empty() {
        println!(
            "No souls within {} degrees of {}",
            max_degrees,
            source.name.cyan()
        );
        return Ok(());
    }

    println!(
        "{} souls within {} degrees of {}:\n",
        nearby.len(),
        max_degrees,
        source.name.cyan()
    );
    for (connection, degree) in &nearby {
        println!(
            "  {} {}",
            label(connection),
            format!("{} degree{}", degree, if *degree == 1 { "" } else { "s" }).yellow()
        );
    }

    Ok(())
}

/// Print ranked endorsement recommendations with their reasons.
pub fn recommend(file: &Path, soul: &str, limit: usize) -> Result<()> {
    let souls = load_snapshot(file)?;
    let current = resolve(&souls, soul)?;

    let recommendations = recommended_souls(current, &souls, limit);

    if recommendations.is_empty() {
        println!("No recommendations for {}", current.name.cyan());
        return Ok(());
    }

    println!("Recommended for {}:\n", current.name.cyan());
    for rec in &recommendations {
        println!(
            "  {} {}",
            label(&rec.soul),
            format!("score {}", rec.score).yellow()
        );
        for reason in &rec.reasons {
            println!("    {}", reason.dimmed());
        }
    }

    Ok(())
}

/// Print souls similar to the given one.
pub fn similar(file: &Path, soul: &str, limit: usize) -> Result<()> {
    let souls = load_snapshot(file)?;
    let reference = resolve(&souls, soul)?;

    let matches = similar_souls(reference, &souls, limit);

    if matches.is_empty() {
        println!("No similar souls for {}", reference.name.cyan());
        return Ok(());
    }

    println!("Souls similar to {}:\n", reference.name.cyan());
    for candidate in &matches {
        let tags: Vec<String> = [
            candidate.element.map(|e| e.to_string()),
            candidate.alignment.map(|a| a.to_string()),
            candidate.rarity.map(|r| r.to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();

        println!("  {} {}", label(candidate), tags.join(" / ").dimmed());
    }

    Ok(())
}

/// Print a soul's four-field trust summary.
pub fn stats(file: &Path, soul: &str) -> Result<()> {
    let souls = load_snapshot(file)?;
    let current = resolve(&souls, soul)?;

    let summary = trust_stats(current, &souls);

    println!("Trust summary for {}:\n", label(current));
    println!(
        "  Trusted by:      {}",
        summary.trusted_by.len().to_string().cyan()
    );
    for endorser in &summary.trusted_by {
        println!("    {}", endorser.name.dimmed());
    }
    println!(
        "  Trusting:        {}",
        summary.trusting.len().to_string().cyan()
    );
    for trustee in &summary.trusting {
        println!("    {}", trustee.name.dimmed());
    }
    println!(
        "  Mutual trust:    {}",
        summary.mutual_trust.len().to_string().cyan()
    );
    for mutual in &summary.mutual_trust {
        println!("    {}", mutual.name.dimmed());
    }
    println!(
        "  Trust influence: {}",
        summary.trust_influence.to_string().cyan()
    );

    Ok(())
}

/// Print snapshot-wide statistics.
pub fn info(file: &Path) -> Result<()> {
    let souls = load_snapshot(file)?;
    let graph = TrustGraph::from_snapshot(&souls);
    let summary = graph.summary();

    println!("Souls:        {}", summary.souls.to_string().cyan());
    println!("Endorsements: {}", summary.endorsements.to_string().cyan());
    println!("Mutual pairs: {}", summary.mutual_pairs.to_string().cyan());
    println!("Isolated:     {}", summary.isolated.to_string().cyan());

    Ok(())
}

/// Export the graph (nodes + edges) to a JSON file.
pub fn export(file: &Path, output: &Path) -> Result<()> {
    let souls = load_snapshot(file)?;
    let graph = TrustGraph::from_snapshot(&souls);
    let summary = graph.summary();

    let export = serde_json::json!({
        "version": "1.0",
        "stats": {
            "soulCount": summary.souls,
            "endorsementCount": summary.endorsements
        },
        "nodes": souls,
        "edges": graph.export_edges()
    });

    fs::write(output, serde_json::to_string_pretty(&export)?)?;
    println!("{} Exported to {}", "✓".green(), output.display());

    Ok(())
}

/// Record a trust endorsement and rewrite the snapshot file.
pub fn trust(file: &Path, from: &str, to: &str) -> Result<()> {
    let souls = load_snapshot(file)?;
    let from_id = resolve(&souls, from)?.id.clone();
    let to_id = resolve(&souls, to)?.id.clone();

    let mut directory = SoulDirectory::from_souls(souls)?;
    directory.record_trust(&from_id, &to_id)?;

    let from_name = directory.get(&from_id).unwrap().name.clone();
    let to_name = directory.get(&to_id).unwrap().name.clone();

    let updated = directory.into_souls();
    fs::write(file, serde_json::to_string_pretty(&updated)?)?;

    println!(
        "{} {} now trusts {}",
        "✓".green(),
        from_name.cyan(),
        to_name.cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_soul(id: &str, name: &str, trusted_by: &[&str]) -> Soul {
        let mut soul = Soul::new(id, name);
        soul.trusted_by = trusted_by.iter().map(|s| s.to_string()).collect();
        soul
    }

    fn write_snapshot(dir: &Path, souls: &[Soul]) -> std::path::PathBuf {
        let file = dir.join("souls.json");
        fs::write(&file, serde_json::to_string_pretty(souls).unwrap()).unwrap();
        file
    }

    #[test]
    fn test_load_snapshot_round_trip() {
        let dir = tempdir().unwrap();
        let souls = vec![
            make_soul("a", "Aria", &[]),
            make_soul("b", "Bram", &["a"]),
        ];
        let file = write_snapshot(dir.path(), &souls);

        let loaded = load_snapshot(&file).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].trusted_by, vec!["a".to_string()]);
    }

    #[test]
    fn test_resolve_by_id_and_name_prefix() {
        let souls = vec![
            make_soul("soul_1", "Aria", &[]),
            make_soul("soul_2", "Bram", &[]),
        ];

        assert_eq!(resolve(&souls, "soul_2").unwrap().name, "Bram");
        assert_eq!(resolve(&souls, "ar").unwrap().id, "soul_1");
        assert!(matches!(
            resolve(&souls, "zed"),
            Err(ResolveError::NoMatch(_))
        ));
    }

    #[test]
    fn test_resolve_ambiguous_prefix_is_error() {
        let souls = vec![
            make_soul("soul_1", "Aria", &[]),
            make_soul("soul_2", "Ariel", &[]),
        ];
        assert!(matches!(
            resolve(&souls, "ari"),
            Err(ResolveError::Ambiguous(_, _))
        ));
    }

    #[test]
    fn test_trust_command_rewrites_snapshot() {
        let dir = tempdir().unwrap();
        let souls = vec![
            make_soul("a", "Aria", &[]),
            make_soul("b", "Bram", &[]),
        ];
        let file = write_snapshot(dir.path(), &souls);

        trust(&file, "Aria", "Bram").unwrap();

        let updated = load_snapshot(&file).unwrap();
        let bram = updated.iter().find(|s| s.id == "b").unwrap();
        assert_eq!(bram.trusted_by, vec!["a".to_string()]);
        assert_eq!(bram.trust_score, 1);
    }

    #[test]
    fn test_export_writes_nodes_and_edges() {
        let dir = tempdir().unwrap();
        let souls = vec![
            make_soul("a", "Aria", &[]),
            make_soul("b", "Bram", &["a"]),
        ];
        let file = write_snapshot(dir.path(), &souls);
        let out = dir.path().join("export.json");

        export(&file, &out).unwrap();

        let exported: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(exported["stats"]["soulCount"], 2);
        assert_eq!(exported["stats"]["endorsementCount"], 1);
        assert_eq!(exported["edges"][0]["source"], "a");
        assert_eq!(exported["edges"][0]["target"], "b");
    }
}
