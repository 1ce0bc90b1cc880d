use std::io::{self, Write};

use crate::config::{Config, DEFAULT_PATH};
use crate::error::{GhIssuesError, Result};
use crate::types::RepoPath;

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("gh-issues Configuration");
    println!("=======================\n");

    let token = prompt(
        "Enter a GitHub personal access token (create one at https://github.com/settings/tokens): ",
    )?;
    if token.is_empty() {
        return Err(GhIssuesError::MissingToken);
    }

    let default_path = prompt(&format!("Enter default repository [{DEFAULT_PATH}]: "))?;
    let default_path = if default_path.is_empty() {
        None
    } else {
        default_path.parse::<RepoPath>()?;
        Some(default_path)
    };

    let config = Config {
        token: Some(token),
        default_path,
        ..Default::default()
    };
    let saved_to = config.save()?;

    println!("\nConfig saved to {}", saved_to.display());
    println!("You can now use 'gh-issues' commands!");

    Ok(())
}
