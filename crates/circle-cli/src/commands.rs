//! CLI command implementations.

use crate::error::{CliError, Result};
use crate::render::{join_names, least_lines, names, recommendation_line};
use circle_graph::{LeastConnected, MemberId, MemberInfo, Network};
use colored::Colorize;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads a network file, turning a rejected file into an error.
fn open(path: &Path) -> Result<Network> {
    let mut network = Network::new();
    network.try_load(path).map_err(|source| CliError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(network)
}

fn find(network: &Network, name: &str) -> Result<MemberId> {
    network
        .lookup(name)
        .ok_or_else(|| CliError::MemberNotFound(name.to_string()))
}

/// JSON shape of the least-friends query.
#[derive(Serialize)]
struct LeastResult<'a> {
    fewest: Vec<&'a str>,
    fewest_degree: Option<usize>,
    isolated: Vec<&'a str>,
}

fn least_result<'a>(network: &'a Network, least: &LeastConnected) -> LeastResult<'a> {
    LeastResult {
        fewest: names(network, &least.fewest),
        fewest_degree: least.fewest_degree,
        isolated: names(network, &least.isolated),
    }
}

fn print_info(info: &MemberInfo) {
    let friends = if info.friends.is_empty() {
        "None".dimmed().to_string()
    } else {
        info.friends.join(", ")
    };
    println!("{} -> {}", info.name.cyan(), friends);
}

/// Display the whole network.
pub fn show(path: &Path, json_output: bool) -> Result<()> {
    let network = open(path)?;

    if json_output {
        let export = network.graph().export_json();
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    for id in network.list_all() {
        if let Some(info) = network.describe(id) {
            print_info(&info);
        }
    }

    let stats = network.graph().stats();
    println!();
    println!(
        "{}",
        format!(
            "{} members, {} friendships",
            stats.member_count, stats.friendship_count
        )
        .dimmed()
    );

    Ok(())
}

/// Recommend a friend for a member.
pub fn recommend(path: &Path, member: &str) -> Result<()> {
    let network = open(path)?;
    let id = find(&network, member)?;

    let pick = network.recommend(id);
    println!("{}", recommendation_line(&network, id, pick));

    if let Some(pick) = pick {
        let mutual = network.graph().mutual_friends(id, pick);
        println!(
            "  {} {}",
            "mutual friends:".dimmed(),
            join_names(&network, &mutual).cyan()
        );
    }

    Ok(())
}

/// Display the number of friends a member has.
pub fn friends(path: &Path, member: &str) -> Result<()> {
    let network = open(path)?;
    let id = find(&network, member)?;

    println!(
        "Member {} has {} friends",
        member.cyan(),
        network.degree(id).to_string().bold()
    );

    Ok(())
}

/// Display the members with the fewest friends and those with none.
pub fn least(path: &Path, json_output: bool) -> Result<()> {
    let network = open(path)?;
    let least = network.least_connected();

    if json_output {
        let output = least_result(&network, &least);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for line in least_lines(&network, &least) {
        println!("{}", line);
    }

    Ok(())
}

/// Display the friends of a member's friends.
pub fn indirect(path: &Path, member: &str) -> Result<()> {
    let network = open(path)?;
    let id = find(&network, member)?;

    let hop = network.graph().one_hop_friends(id);
    if hop.is_empty() {
        println!("Member {} has no friends", member.cyan());
        return Ok(());
    }

    for info in &hop {
        print_info(info);
    }

    Ok(())
}

/// Display the mutual friends of two members.
pub fn mutual(path: &Path, first: &str, second: &str) -> Result<()> {
    let network = open(path)?;
    let a = find(&network, first)?;
    let b = find(&network, second)?;

    let mutual = network.graph().mutual_friends(a, b);
    debug!("{} and {} share {} friends", first, second, mutual.len());

    println!(
        "{} and {} have {} mutual friends",
        first.cyan(),
        second.cyan(),
        mutual.len().to_string().bold()
    );
    if !mutual.is_empty() {
        println!("  {}", join_names(&network, &mutual));
    }

    Ok(())
}

/// Run the interactive menu on stdin/stdout.
pub fn menu(file: Option<PathBuf>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    crate::menu::run(&mut input, &mut output, file)?;
    Ok(())
}
