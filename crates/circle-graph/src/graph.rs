//! Core graph data structure.
//!
//! The SocialGraph wraps petgraph and adds a name index for lookups.
//! It's the only thing that mutates friendships, which keeps the
//! adjacency symmetric and free of self-loops.

use crate::friendship::Friendship;
use crate::member::{Member, MemberId, MemberInfo};
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An undirected, simple graph of named members.
///
/// Members are never removed individually, so petgraph's node indexes
/// stay dense and follow insertion order. That order is the first-seen
/// order every query uses to break ties.
#[derive(Debug, Clone)]
pub struct SocialGraph {
    /// The underlying petgraph graph. Edges carry no weight.
    pub(crate) graph: UnGraph<Member, ()>,

    /// Maps member names to node indexes.
    name_index: HashMap<String, MemberId>,
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            name_index: HashMap::new(),
        }
    }

    /// Adds a member, or returns the existing one with the same name.
    ///
    /// Any string is accepted as a name, including an empty one.
    pub fn add_member(&mut self, name: impl Into<String>) -> MemberId {
        let name = name.into();
        if let Some(&id) = self.name_index.get(&name) {
            return id;
        }

        let id = self.graph.add_node(Member::new(name.clone()));
        self.name_index.insert(name, id);
        id
    }

    /// Makes two members friends with each other.
    ///
    /// Repeating the call for the same pair (in either order) changes
    /// nothing. A member cannot befriend itself; such calls are ignored.
    pub fn make_friends(&mut self, a: MemberId, b: MemberId) {
        debug_assert_ne!(a, b, "a member cannot befriend itself");
        if a == b {
            return;
        }
        self.graph.update_edge(a, b, ());
    }

    /// Looks a member up by exact name.
    pub fn get_member(&self, name: &str) -> Option<MemberId> {
        self.name_index.get(name).copied()
    }

    /// Gets a member by its handle.
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.graph.node_weight(id)
    }

    /// Gets a member's name by its handle.
    pub fn name(&self, id: MemberId) -> Option<&str> {
        self.member(id).map(|member| member.name.as_str())
    }

    /// Returns every member in first-seen order.
    pub fn list_members(&self) -> Vec<MemberId> {
        self.graph.node_indices().collect()
    }

    /// Iterates over all members in first-seen order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.graph.node_weights()
    }

    /// Returns a member's friends in first-seen order.
    pub fn friends(&self, id: MemberId) -> Vec<MemberId> {
        // petgraph yields the most recently added edge first
        let mut friends: Vec<MemberId> = self.graph.neighbors(id).collect();
        friends.sort();
        friends
    }

    /// Number of friends a member has.
    pub fn degree(&self, id: MemberId) -> usize {
        self.graph.neighbors(id).count()
    }

    /// Returns true if the two members are friends.
    pub fn are_friends(&self, a: MemberId, b: MemberId) -> bool {
        self.graph.find_edge(a, b).is_some()
    }

    /// Returns the number of members.
    pub fn member_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of friendships.
    pub fn friendship_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no members.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Drops every member and friendship.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.name_index.clear();
    }

    /// Resolves a member and its friends to names.
    pub fn describe(&self, id: MemberId) -> Option<MemberInfo> {
        let member = self.member(id)?;
        let friends: Vec<String> = self
            .friends(id)
            .into_iter()
            .filter_map(|friend| self.name(friend).map(str::to_string))
            .collect();

        Some(MemberInfo {
            name: member.name.clone(),
            degree: friends.len(),
            friends,
        })
    }

    /// Returns all friendships by name, in the order they were made.
    pub fn friendships(&self) -> Vec<Friendship> {
        self.graph
            .edge_references()
            .map(|edge| {
                let (a, b) = if edge.source() < edge.target() {
                    (edge.source(), edge.target())
                } else {
                    (edge.target(), edge.source())
                };
                Friendship::new(self.graph[a].name.clone(), self.graph[b].name.clone())
            })
            .collect()
    }

    /// Builds the JSON document used for exporting the network.
    pub fn export_json(&self) -> serde_json::Value {
        let members: Vec<MemberInfo> = self
            .list_members()
            .into_iter()
            .filter_map(|id| self.describe(id))
            .collect();

        serde_json::json!({
            "version": "1.0",
            "stats": self.stats(),
            "members": members,
            "friendships": self.friendships(),
        })
    }
}

/// Graph statistics for summaries and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub member_count: usize,
    pub friendship_count: usize,
    /// Members with no friends at all.
    pub isolated_count: usize,
}

impl SocialGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            member_count: self.member_count(),
            friendship_count: self.friendship_count(),
            isolated_count: self
                .graph
                .node_indices()
                .filter(|&id| self.degree(id) == 0)
                .count(),
        }
    }
}
