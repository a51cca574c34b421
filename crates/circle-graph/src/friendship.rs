//! Friendship export type.
//!
//! Friendships are stored as unit-weight undirected edges in the graph.
//! This type names both ends so an edge can be written out as JSON.

use serde::{Deserialize, Serialize};

/// One undirected friendship between two distinct members.
///
/// `a` is the member that was referenced first, `b` the second.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Friendship {
    pub a: String,
    pub b: String,
}

impl Friendship {
    /// Creates a friendship record.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl std::fmt::Display for Friendship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let friendship = Friendship::new("Alice", "Bob");

        assert_eq!(friendship.a, "Alice");
        assert_eq!(friendship.b, "Bob");
        assert_eq!(friendship.to_string(), "Alice -- Bob");
    }
}
