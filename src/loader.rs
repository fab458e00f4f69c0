// src/loader.rs
//! Flat-file loaders for the three data files.
//!
//! Edges and influence scores are whitespace-delimited number streams: line
//! breaks carry no meaning, reading stops at the first token that is not an
//! integer, and a trailing partial record is discarded. Labels are
//! line-oriented: a line needs an integer id and at least two name tokens,
//! anything else is skipped, and tokens past the second name are ignored.
//!
//! Loaders append into an existing [`SocialGraph`] so the three files can be
//! layered onto one graph in any order.

use std::fs;
use std::path::Path;

use crate::error::{Result, SociogramError};
use crate::graph::SocialGraph;

/// Loads friendship edges from `path` as (user, user, weight) triples.
///
/// Every triple becomes one undirected edge. Returns the number of edges
/// added.
pub fn load_edges(graph: &mut SocialGraph, path: &Path) -> Result<usize> {
    let text = read(path)?;
    let numbers = leading_integers(&text);

    let mut added = 0;
    for chunk in numbers.chunks_exact(3) {
        if let [u, v, weight] = chunk {
            graph.add_edge(*u, *v, *weight);
            added += 1;
        }
    }
    Ok(added)
}

/// Loads influence scores from `path` as (user, score) pairs.
///
/// A repeated user id overwrites the earlier score. Returns the number of
/// pairs applied.
pub fn load_influences(graph: &mut SocialGraph, path: &Path) -> Result<usize> {
    let text = read(path)?;
    let numbers = leading_integers(&text);

    let mut applied = 0;
    for chunk in numbers.chunks_exact(2) {
        if let [node, score] = chunk {
            graph.add_influence_score(*node, *score);
            applied += 1;
        }
    }
    Ok(applied)
}

/// Loads display labels from `path`, one `id first last` record per line.
///
/// Malformed lines are skipped rather than aborting the load. Returns the
/// number of labels applied.
pub fn load_labels(graph: &mut SocialGraph, path: &Path) -> Result<usize> {
    let text = read(path)?;

    let mut applied = 0;
    for line in text.lines() {
        let mut parts = line.split_whitespace();
        let (Some(id), Some(first), Some(last)) = (parts.next(), parts.next(), parts.next())
        else {
            continue;
        };
        let Ok(node) = id.parse::<i64>() else {
            continue;
        };
        graph.add_user_label(node, format!("{first} {last}"));
        applied += 1;
    }
    Ok(applied)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SociogramError::io(source, path))
}

/// Takes whitespace-separated tokens from the front of `text` for as long as
/// they parse as integers. A token like `12abc` is not an integer.
fn leading_integers(text: &str) -> Vec<i64> {
    text.split_whitespace()
        .map_while(|token| token.parse::<i64>().ok())
        .collect()
}
