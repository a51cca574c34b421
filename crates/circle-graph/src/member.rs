//! Member types for the social graph.
//!
//! A member is nothing more than a name. Friendships live in the graph,
//! so members never point back at it.

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a member inside a [`SocialGraph`](crate::SocialGraph).
///
/// Handles are assigned in first-seen order, so comparing two handles
/// compares the order in which the members were first referenced.
pub type MemberId = NodeIndex;

/// A named member of the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    /// Unique name of the member. Never changes once created.
    pub name: String,
}

impl Member {
    /// Creates a new member.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A member together with its friends, resolved to names.
///
/// This is what the shell renders when it lists the network or the
/// friends of a member's friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub name: String,
    pub degree: usize,
    /// Friend names in first-seen order.
    pub friends: Vec<String>,
}

impl fmt::Display for MemberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.friends.is_empty() {
            write!(f, "{} -> None", self.name)
        } else {
            write!(f, "{} -> {}", self.name, self.friends.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_display_is_name() {
        assert_eq!(Member::new("Alice").to_string(), "Alice");
    }

    #[test]
    fn test_info_display_with_friends() {
        let info = MemberInfo {
            name: "Alice".to_string(),
            degree: 2,
            friends: vec!["Bob".to_string(), "Carol".to_string()],
        };
        assert_eq!(info.to_string(), "Alice -> Bob, Carol");
    }

    #[test]
    fn test_info_display_without_friends() {
        let info = MemberInfo {
            name: "Dave".to_string(),
            degree: 0,
            friends: Vec::new(),
        };
        assert_eq!(info.to_string(), "Dave -> None");
    }
}
