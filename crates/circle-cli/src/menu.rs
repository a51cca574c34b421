//! Interactive menu.
//!
//! Asks for a network file, then loops over the main menu until the
//! user changes file or quits. Reads from any `BufRead` and writes to
//! any `Write` so a whole session can be replayed from a buffer.

use crate::render::{least_lines, recommendation_line};
use circle_graph::{MemberId, Network};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const MAIN_MENU: &str = "
Main menu:
 1. Display the social network
 2. Recommend a friend for a member
 3. Display the number of friends for a member
 4. Display members with the least number of or have 0 friends
 5. Display friends of friends for a member
 6. Change social network data file
 7. Quit
";

/// How the main menu was left.
enum MenuExit {
    ChangeFile,
    Quit,
}

/// Runs a full session. `initial` skips the first filename prompt.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    initial: Option<PathBuf>,
) -> io::Result<()> {
    let mut network = Network::new();
    let mut next_file = initial;

    loop {
        let path = match next_file.take() {
            Some(path) => path,
            None => match prompt(input, output, "Enter a filename for network data: ")? {
                Some(name) if name != "n" => PathBuf::from(name),
                _ => return Ok(()),
            },
        };

        if !network.load(&path) {
            writeln!(output, "The network is inconsistent, try another file.")?;
            continue;
        }

        match main_menu(&network, input, output)? {
            MenuExit::ChangeFile => continue,
            MenuExit::Quit => return Ok(()),
        }
    }
}

fn main_menu<R: BufRead, W: Write>(
    network: &Network,
    input: &mut R,
    output: &mut W,
) -> io::Result<MenuExit> {
    loop {
        write!(output, "{}", MAIN_MENU)?;
        let Some(selection) = prompt(input, output, "Choose an option: ")? else {
            return Ok(MenuExit::Quit);
        };

        match selection.as_str() {
            "1" => {
                for id in network.list_all() {
                    if let Some(info) = network.describe(id) {
                        writeln!(output, "{}", info)?;
                    }
                }
            }
            "2" => {
                if let Some(member) = ask_member(network, input, output)? {
                    let line = recommendation_line(network, member, network.recommend(member));
                    writeln!(output, "{}", line)?;
                }
            }
            "3" => {
                if let Some(member) = ask_member(network, input, output)? {
                    let name = network.name(member).unwrap_or_default();
                    writeln!(
                        output,
                        "Member {} has {} friends",
                        name,
                        network.degree(member)
                    )?;
                }
            }
            "4" => {
                for line in least_lines(network, &network.least_connected()) {
                    writeln!(output, "{}", line)?;
                }
            }
            "5" => {
                if let Some(member) = ask_member(network, input, output)? {
                    for info in network.graph().one_hop_friends(member) {
                        writeln!(output, "{}", info)?;
                    }
                }
            }
            "6" => return Ok(MenuExit::ChangeFile),
            "7" => return Ok(MenuExit::Quit),
            _ => writeln!(output, "Invalid choice, try again!")?,
        }
    }
}

/// Prompts for a member name. Unknown names are reported and give `None`.
fn ask_member<R: BufRead, W: Write>(
    network: &Network,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<MemberId>> {
    let Some(name) = prompt(input, output, "Enter a member name: ")? else {
        return Ok(None);
    };

    let member = network.lookup(&name);
    if member.is_none() {
        writeln!(output, "Member {} not found", name)?;
    }
    Ok(member)
}

/// Writes `message` and reads one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
