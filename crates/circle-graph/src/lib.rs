//! Circle Graph - Social network model and friendship queries
//!
//! This crate holds an undirected social graph of named members and
//! answers questions about it: who has mutual friends, who should be
//! recommended as a new friend, and who has the fewest friends.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with a name index for lookups.
//! Networks are read from a small line-oriented text format by the
//! loader, which validates the declared member count before handing
//! a graph over. [`Network`] wraps a graph for a session and exposes
//! the boolean `load` contract the shell works with.
//!
//! # Example
//!
//! ```
//! use circle_graph::parse_network;
//!
//! let graph = parse_network("4\nAlice Bob\nAlice Carol\nBob Carol\nDave Carol\n").unwrap();
//!
//! let dave = graph.get_member("Dave").unwrap();
//! let suggestion = graph.recommend_friend(dave).unwrap();
//! assert_eq!(graph.name(suggestion), Some("Alice"));
//! ```

mod error;
mod friendship;
mod graph;
mod loader;
mod member;
mod network;
mod query;

pub use error::LoadError;
pub use friendship::Friendship;
pub use graph::{GraphStats, SocialGraph};
pub use loader::{load_network, parse_network, NetworkBuilder};
pub use member::{Member, MemberId, MemberInfo};
pub use network::Network;
pub use query::LeastConnected;
