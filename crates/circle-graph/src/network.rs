//! Session wrapper around the currently loaded graph.
//!
//! A host (the CLI, a test) owns one `Network` and reloads it on demand.
//! Loading always starts from an empty graph, and a failed load leaves
//! the session empty rather than half populated.

use crate::error::LoadError;
use crate::graph::SocialGraph;
use crate::loader::{load_network, parse_network};
use crate::member::{MemberId, MemberInfo};
use crate::query::LeastConnected;
use std::path::Path;
use tracing::{info, warn};

/// The network a session is working with.
#[derive(Debug, Default)]
pub struct Network {
    graph: SocialGraph,
}

impl Network {
    /// Creates a session with an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a network file, replacing whatever was loaded before.
    ///
    /// Returns true iff the network is now valid and queryable. The
    /// reason for a failure is logged; use [`Network::try_load`] to get
    /// it back instead.
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_load(path) {
            Ok(()) => true,
            Err(e) => {
                warn!("Rejected network {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Loads a network file, replacing whatever was loaded before.
    pub fn try_load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        self.graph.clear();
        self.graph = load_network(path.as_ref())?;
        info!(
            "Loaded {} members from {}",
            self.graph.member_count(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Loads a network from source text. Same contract as [`Network::load`].
    pub fn load_str(&mut self, source: &str) -> bool {
        match self.try_load_str(source) {
            Ok(()) => true,
            Err(e) => {
                warn!("Rejected network source: {}", e);
                false
            }
        }
    }

    /// Loads a network from source text.
    pub fn try_load_str(&mut self, source: &str) -> Result<(), LoadError> {
        self.graph.clear();
        self.graph = parse_network(source)?;
        Ok(())
    }

    /// The loaded graph.
    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    /// Returns true if no members are loaded.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Looks a member up by exact name.
    pub fn lookup(&self, name: &str) -> Option<MemberId> {
        self.graph.get_member(name)
    }

    /// All members in first-seen order.
    pub fn list_all(&self) -> Vec<MemberId> {
        self.graph.list_members()
    }

    pub fn recommend(&self, member: MemberId) -> Option<MemberId> {
        self.graph.recommend_friend(member)
    }

    pub fn degree(&self, member: MemberId) -> usize {
        self.graph.degree(member)
    }

    pub fn least_connected(&self) -> LeastConnected {
        self.graph.least_connected()
    }

    pub fn neighbors(&self, member: MemberId) -> Vec<MemberId> {
        self.graph.friends(member)
    }

    pub fn mutual_friend_count(&self, a: MemberId, b: MemberId) -> usize {
        self.graph.mutual_friend_count(a, b)
    }

    /// Resolves a member and its friends to names for display.
    pub fn describe(&self, member: MemberId) -> Option<MemberInfo> {
        self.graph.describe(member)
    }

    pub fn name(&self, member: MemberId) -> Option<&str> {
        self.graph.name(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.txt");
        fs::write(&path, "3\nA B\nC\n").unwrap();

        let mut network = Network::new();
        assert!(network.load(&path));

        let c = network.lookup("C").unwrap();
        assert_eq!(network.degree(c), 0);
        assert_eq!(network.least_connected().isolated, vec![c]);
        assert_eq!(network.list_all().len(), 3);
    }

    #[test]
    fn test_failed_load_leaves_network_empty() {
        let mut network = Network::new();
        assert!(network.load_str("2\nA B\n"));
        assert!(!network.is_empty());

        assert!(!network.load_str("1\nA B\n"));
        assert!(network.is_empty());
        assert!(network.lookup("A").is_none());
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempdir().unwrap();
        let mut network = Network::new();
        assert!(network.load_str("1\nA\n"));

        assert!(!network.load(dir.path().join("nope.txt")));
        assert!(network.is_empty());
    }

    #[test]
    fn test_reload_replaces_network() {
        let mut network = Network::new();
        assert!(network.load_str("2\nA B\n"));
        assert!(network.load_str("2\nC D\n"));

        assert!(network.lookup("A").is_none());
        let c = network.lookup("C").unwrap();
        let d = network.lookup("D").unwrap();
        assert_eq!(network.neighbors(c), vec![d]);
    }

    #[test]
    fn test_try_load_reports_reason() {
        let mut network = Network::new();
        let err = network.try_load_str("2\nA B C\n").unwrap_err();
        assert!(matches!(err, LoadError::RecordInvalid { tokens: 3, .. }));
        assert!(network.is_empty());
    }

    #[test]
    fn test_session_queries() {
        let mut network = Network::new();
        assert!(network.load_str("4\nA B\nA C\nB C\nD C\n"));

        let a = network.lookup("A").unwrap();
        let b = network.lookup("B").unwrap();
        let d = network.lookup("D").unwrap();

        assert_eq!(network.recommend(d), Some(a));
        assert_eq!(network.mutual_friend_count(a, b), 1);
        assert_eq!(network.name(d), Some("D"));
        assert_eq!(network.describe(d).unwrap().to_string(), "D -> C");
    }
}
