use std::io::{self, BufRead, Write};
use std::sync::Arc;

use colored::Colorize;
use tracing::debug;

use crate::cli::BrowseArgs;
use crate::client::Transport;
use crate::commands::star::star_message;
use crate::error::Result;
use crate::output;
use crate::pagination::PaginationController;
use crate::star::StarStrategy;
use crate::types::{ClientState, RepoPath};

#[derive(Debug, PartialEq, Eq)]
enum Action {
    More,
    Star,
    Open(String),
    Refresh,
    Help,
    Quit,
}

fn parse_action(input: &str) -> Option<Action> {
    let input = input.trim();
    let (command, rest) = input
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((input, ""));

    match command {
        "m" | "more" => Some(Action::More),
        "s" | "star" => Some(Action::Star),
        "p" | "path" if !rest.is_empty() => Some(Action::Open(rest.to_string())),
        "r" | "refresh" => Some(Action::Refresh),
        "h" | "help" | "?" => Some(Action::Help),
        "q" | "quit" | "exit" => Some(Action::Quit),
        _ => None,
    }
}

fn prompt_line(has_next_page: bool) -> String {
    let mut actions = Vec::new();
    if has_next_page {
        actions.push("[m]ore");
    }
    actions.extend(["[s]tar", "[p]ath <org/repo>", "[r]efresh", "[q]uit"]);
    format!("{} > ", actions.join("  "))
}

pub async fn run<T: Transport>(
    controller: &mut PaginationController<T>,
    path: RepoPath,
    args: &BrowseArgs,
) -> Result<()> {
    let strategy = if args.optimistic {
        StarStrategy::Optimistic
    } else {
        StarStrategy::Deferred
    };

    let mut current_path = path;
    show(controller.fetch(current_path.clone()).await);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", prompt_line(controller.has_next_page()).cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some(action) = parse_action(&line) else {
            println!("Unknown command '{}'. Type 'h' for help.", line.trim());
            continue;
        };
        debug!(?action, "Browse action");

        match action {
            Action::More => {
                if !controller.has_next_page() {
                    println!("No more issues.");
                    continue;
                }
                show(controller.fetch_more().await);
            }
            Action::Star => match controller.toggle_star(strategy).await {
                Ok(starred) => {
                    println!("{}", star_message(&current_path, starred));
                    if let Some(state) = controller.snapshot() {
                        output::print_state(&state);
                    }
                }
                Err(e) => eprintln!("{} {e}", "Error:".red()),
            },
            Action::Open(raw) => match raw.parse::<RepoPath>() {
                Ok(path) => {
                    let result = controller.fetch(path.clone()).await;
                    if result.is_ok() {
                        current_path = path;
                    }
                    show(result);
                }
                Err(e) => eprintln!("{} {e}", "Error:".red()),
            },
            Action::Refresh => show(controller.fetch(current_path.clone()).await),
            Action::Help => print_help(),
            Action::Quit => break,
        }
    }

    Ok(())
}

fn show(result: Result<Arc<ClientState>>) {
    match result {
        Ok(state) => output::print_state(&state),
        Err(e) => eprintln!("{} {e}", "Error:".red()),
    }
}

fn print_help() {
    println!("m, more            load the next page of issues");
    println!("s, star            star or unstar the repository");
    println!("p, path ORG/REPO   show issues of another repository");
    println!("r, refresh         reload the first page");
    println!("q, quit            leave");
}
