//! Plain-text rendering shared by the commands and the menu.

use circle_graph::{LeastConnected, MemberId, Network};

/// Resolves member handles to names.
pub fn names<'a>(network: &'a Network, members: &[MemberId]) -> Vec<&'a str> {
    members.iter().filter_map(|&id| network.name(id)).collect()
}

/// Joins member names with ", ".
pub fn join_names(network: &Network, members: &[MemberId]) -> String {
    names(network, members).join(", ")
}

/// The two result lines for the least-friends query.
pub fn least_lines(network: &Network, least: &LeastConnected) -> [String; 2] {
    [
        format!(
            "The member name for the member with least friends is: {}",
            join_names(network, &least.fewest)
        ),
        format!(
            "The member name for the member with 0 friends is: {}",
            join_names(network, &least.isolated)
        ),
    ]
}

/// The result line for a recommendation; "None" when there is none.
pub fn recommendation_line(network: &Network, member: MemberId, pick: Option<MemberId>) -> String {
    let name = network.name(member).unwrap_or_default();
    let pick = pick.and_then(|id| network.name(id)).unwrap_or("None");
    format!("The recommended friend for {} is {}", name, pick)
}
