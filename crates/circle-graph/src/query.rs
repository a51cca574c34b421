//! Friendship queries over a loaded graph.
//!
//! Everything here is a pure read. Ties are always broken by first-seen
//! order, which is the order of [`MemberId`]s, so results are stable
//! across runs and across reloads of the same source.

use crate::graph::SocialGraph;
use crate::member::{MemberId, MemberInfo};
use std::collections::HashSet;
use tracing::debug;

/// Members with the fewest friends, split into two buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeastConnected {
    /// Members with no friends, in first-seen order.
    pub isolated: Vec<MemberId>,
    /// Members sharing the smallest non-zero friend count, in first-seen order.
    pub fewest: Vec<MemberId>,
    /// The friend count shared by `fewest`, if any member has friends.
    pub fewest_degree: Option<usize>,
}

impl SocialGraph {
    /// Friends that both members have in common.
    ///
    /// The result is the same for `(a, b)` and `(b, a)`.
    pub fn mutual_friends(&self, a: MemberId, b: MemberId) -> Vec<MemberId> {
        let theirs: HashSet<MemberId> = self.graph.neighbors(b).collect();
        let mut mutual: Vec<MemberId> = self
            .graph
            .neighbors(a)
            .filter(|friend| theirs.contains(friend))
            .collect();
        mutual.sort();
        mutual
    }

    /// Number of friends both members have in common.
    pub fn mutual_friend_count(&self, a: MemberId, b: MemberId) -> usize {
        self.mutual_friends(a, b).len()
    }

    /// Mutual friend counts between `member` and every member of the graph.
    ///
    /// Entries come in first-seen order and include `member` itself, whose
    /// count is its own number of friends.
    pub fn mutual_counts_for_all(&self, member: MemberId) -> Vec<(MemberId, usize)> {
        self.graph
            .node_indices()
            .map(|other| (other, self.mutual_friend_count(member, other)))
            .collect()
    }

    /// Suggests a new friend for `member`.
    ///
    /// The candidate with the most mutual friends wins; ties go to the
    /// member seen first. The member itself and its current friends are
    /// never suggested. Returns `None` when the best remaining candidate
    /// shares no friends with `member`.
    pub fn recommend_friend(&self, member: MemberId) -> Option<MemberId> {
        let mut ranked = self.mutual_counts_for_all(member);

        // Sort: count (descending) → first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let pick = ranked
            .into_iter()
            .find(|&(candidate, _)| candidate != member && !self.are_friends(member, candidate))
            .filter(|&(_, count)| count > 0)
            .map(|(candidate, _)| candidate);

        debug!(
            "Recommendation for {:?}: {:?}",
            self.name(member),
            pick.and_then(|id| self.name(id))
        );
        pick
    }

    /// Members with no friends and members with the fewest friends.
    ///
    /// Isolated members are reported on their own and never count as
    /// having the fewest friends.
    pub fn least_connected(&self) -> LeastConnected {
        let mut by_degree: Vec<(MemberId, usize)> = self
            .graph
            .node_indices()
            .map(|id| (id, self.degree(id)))
            .collect();

        // Sort: degree → first-seen order
        by_degree.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let mut result = LeastConnected::default();
        for (id, degree) in by_degree {
            match result.fewest_degree {
                _ if degree == 0 => result.isolated.push(id),
                None => {
                    result.fewest_degree = Some(degree);
                    result.fewest.push(id);
                }
                Some(fewest) if degree == fewest => result.fewest.push(id),
                Some(_) => break,
            }
        }

        result
    }

    /// The friends of `member`, each with its own friend list.
    ///
    /// This is one hop only: friends of friends are listed by name and
    /// not expanded any further.
    pub fn one_hop_friends(&self, member: MemberId) -> Vec<MemberInfo> {
        self.friends(member)
            .into_iter()
            .filter_map(|friend| self.describe(friend))
            .collect()
    }
}
