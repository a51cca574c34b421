//! Network loader for the line-oriented source format.
//!
//! A source looks like this:
//!
//! ```text
//! 3
//! Alice Bob
//! Carol
//! ```
//!
//! The first line declares how many distinct members the network has.
//! Every other line names one member (registered without friends) or
//! two members (registered and made friends). A line naming the same
//! member twice only registers it. Anything else rejects the whole
//! source. Lines may end in `\n`, `\r\n` or a bare `\r`.

use crate::error::{LoadError, Result};
use crate::graph::SocialGraph;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Builds a SocialGraph from source records.
///
/// The builder owns the graph until every record has been applied and
/// the member count checked, so a failed load never leaks a partially
/// populated graph.
pub struct NetworkBuilder {
    graph: SocialGraph,
    declared_count: usize,
}

impl NetworkBuilder {
    /// Creates a builder expecting `declared_count` distinct members.
    pub fn new(declared_count: usize) -> Self {
        Self {
            graph: SocialGraph::new(),
            declared_count,
        }
    }

    /// Creates a builder from the header line of a source.
    ///
    /// The header is an optionally signed integer that must not be
    /// negative, so `-0` and `+3` are accepted.
    pub fn from_header(header: &str) -> Result<Self> {
        let header = header.trim();
        let declared_count = header
            .parse::<i64>()
            .ok()
            .and_then(|count| usize::try_from(count).ok())
            .ok_or_else(|| LoadError::HeaderInvalid {
                header: header.to_string(),
            })?;
        Ok(Self::new(declared_count))
    }

    /// Applies one data line. `line` is the 1-based line number used
    /// in error reports.
    pub fn add_record(&mut self, line: usize, record: &str) -> Result<()> {
        let names: Vec<&str> = record.split_whitespace().collect();

        match names.as_slice() {
            [name] => {
                self.graph.add_member(*name);
            }
            [first, second] if first == second => {
                // no self-edges
                self.graph.add_member(*first);
            }
            [first, second] => {
                let a = self.graph.add_member(*first);
                let b = self.graph.add_member(*second);
                self.graph.make_friends(a, b);
            }
            _ => {
                return Err(LoadError::RecordInvalid {
                    line,
                    tokens: names.len(),
                });
            }
        }

        Ok(())
    }

    /// Checks the member count and returns the finished graph.
    pub fn build(self) -> Result<SocialGraph> {
        let actual = self.graph.member_count();
        if actual != self.declared_count {
            return Err(LoadError::CountMismatch {
                declared: self.declared_count,
                actual,
            });
        }
        Ok(self.graph)
    }
}

/// Parses a network from source text.
pub fn parse_network(source: &str) -> Result<SocialGraph> {
    let source = source.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = source.lines();
    let mut builder = NetworkBuilder::from_header(lines.next().unwrap_or_default())?;

    for (offset, record) in lines.enumerate() {
        // header is line 1
        builder.add_record(offset + 2, record)?;
    }

    let graph = builder.build()?;
    debug!(
        "Parsed network: {} members, {} friendships",
        graph.member_count(),
        graph.friendship_count()
    );
    Ok(graph)
}

/// Reads and parses a network from a file.
pub fn load_network(path: impl AsRef<Path>) -> Result<SocialGraph> {
    let path = path.as_ref();
    debug!("Loading network from {}", path.display());

    let source = fs::read_to_string(path).map_err(|source| LoadError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_network(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(graph: &SocialGraph) -> Vec<String> {
        graph.members().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn test_pair_and_single() {
        let graph = parse_network("3\nA B\nC\n").unwrap();

        assert_eq!(names(&graph), vec!["A", "B", "C"]);
        let a = graph.get_member("A").unwrap();
        let b = graph.get_member("B").unwrap();
        let c = graph.get_member("C").unwrap();
        assert!(graph.are_friends(a, b));
        assert_eq!(graph.degree(c), 0);
    }

    #[test]
    fn test_count_matches_pair() {
        let graph = parse_network("2\nA B\n").unwrap();
        assert_eq!(graph.member_count(), 2);
        assert_eq!(graph.friendship_count(), 1);
    }

    #[test]
    fn test_count_mismatch() {
        let err = parse_network("1\nA B\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::CountMismatch {
                declared: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_three_names_rejected() {
        let err = parse_network("2\nA B C\n").unwrap_err();
        assert!(matches!(err, LoadError::RecordInvalid { line: 2, tokens: 3 }));
    }

    #[test]
    fn test_blank_record_rejected() {
        let err = parse_network("2\nA B\n\n").unwrap_err();
        assert!(matches!(err, LoadError::RecordInvalid { line: 3, tokens: 0 }));

        let err = parse_network("1\n   \nA\n").unwrap_err();
        assert!(matches!(err, LoadError::RecordInvalid { line: 2, tokens: 0 }));
    }

    #[test]
    fn test_same_name_twice_registers_once() {
        let graph = parse_network("1\nA A\n").unwrap();
        let a = graph.get_member("A").unwrap();

        assert_eq!(graph.member_count(), 1);
        assert_eq!(graph.degree(a), 0);
        assert_eq!(graph.friendship_count(), 0);
    }

    #[test]
    fn test_same_name_twice_counts_once() {
        assert!(parse_network("2\nA A\nB A\n").is_ok());
        assert!(parse_network("2\nA A\n").is_err());
    }

    #[test]
    fn test_bare_carriage_return_lines() {
        let graph = parse_network("2\rA B\r").unwrap();
        assert_eq!(names(&graph), vec!["A", "B"]);

        let mixed = parse_network("3\r\nA B\rC\n").unwrap();
        assert_eq!(names(&mixed), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_signed_zero_and_plus_headers() {
        assert!(parse_network("-0\n").unwrap().is_empty());
        assert_eq!(parse_network("+1\nA\n").unwrap().member_count(), 1);
    }

    #[test]
    fn test_invalid_header() {
        for source in ["three\nA\n", "-1\nA\n", "2.5\nA B\n", "", "\nA\n"] {
            let err = parse_network(source).unwrap_err();
            assert!(
                matches!(err, LoadError::HeaderInvalid { .. }),
                "expected header error for {:?}, got {:?}",
                source,
                err
            );
        }
    }

    #[test]
    fn test_header_and_records_are_trimmed() {
        let graph = parse_network("  2  \r\n  A \t B  \r\n").unwrap();
        assert_eq!(names(&graph), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_network() {
        let graph = parse_network("0\n").unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_duplicate_lines_absorbed() {
        let graph = parse_network("2\nA B\nB A\nA B\nA\n").unwrap();
        assert_eq!(graph.member_count(), 2);
        assert_eq!(graph.friendship_count(), 1);
    }

    #[test]
    fn test_first_seen_order_across_sides() {
        let graph = parse_network("4\nB C\nA\nD B\n").unwrap();
        assert_eq!(names(&graph), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_count_is_distinct_names() {
        // Five lines, four distinct names
        let source = "4\nA B\nB C\nC D\nD A\nA\n";
        assert!(parse_network(source).is_ok());
        assert!(parse_network(&source.replacen('4', "5", 1)).is_err());
        assert!(parse_network(&source.replacen('4', "3", 1)).is_err());
    }

    #[test]
    fn test_reload_is_identical() {
        let source = "5\nA B\nA C\nB C\nD C\nE\n";
        let first = parse_network(source).unwrap();
        let second = parse_network(source).unwrap();

        assert_eq!(names(&first), names(&second));
        for (x, y) in first.list_members().into_iter().zip(second.list_members()) {
            assert_eq!(first.describe(x), second.describe(y));
        }
        assert_eq!(first.friendships(), second.friendships());
    }

    #[test]
    fn test_builder_directly() {
        let mut builder = NetworkBuilder::new(2);
        builder.add_record(2, "A").unwrap();
        builder.add_record(3, "B").unwrap();
        let graph = builder.build().unwrap();

        assert_eq!(graph.member_count(), 2);
        assert_eq!(graph.friendship_count(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.txt");
        fs::write(&path, "3\nA B\nC\n").unwrap();

        let graph = load_network(&path).unwrap();
        assert_eq!(graph.member_count(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_network(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, LoadError::SourceUnreadable { .. }));
    }
}
