use crate::config::Config;
use crate::error::CliError;
use clap::{Parser, Subcommand};
use lexi_scanner::{Scanner, Token};
use std::fs;
use std::path::PathBuf;

mod config;
mod error;

#[derive(Parser)]
#[command(author, version, about = "Lexical scanner for the Lexi teaching language")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a source file and print the token table
    Scan {
        /// Path to the source file
        file: PathBuf,
        /// Emit the token sequence as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Include comment tokens even when the config hides them
        #[arg(long)]
        show_comments: bool,
    },
    /// Tokenize a source file and report only errors; exits 1 if any exist
    Check {
        /// Path to the source file
        file: PathBuf,
    },
    /// Manage scanner configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Edit the config file in $EDITOR
    Edit,
    /// Show the current config file contents
    Show,
    /// Initialize a new config file with defaults
    Init,
}

fn read_source(path: &PathBuf) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::FileNotFound(format!(
            "Source file not found: {}",
            path.display()
        )));
    }
    Ok(fs::read_to_string(path)?)
}

fn print_table(tokens: &[Token], hide_comments: bool) {
    println!(
        "{:<6} {:<20} {:<12} {:<24} {}",
        "LINE", "TOKEN", "CLASS", "LEXEME", "MESSAGE"
    );
    for token in tokens {
        if hide_comments && token.kind.category() == "comment" {
            continue;
        }
        println!(
            "{:<6} {:<20} {:<12} {:<24} {}",
            token.line,
            token.kind.label(),
            token.kind.category(),
            token.lexeme,
            token.message.as_deref().unwrap_or("")
        );
    }
}

fn scan_file(file: &PathBuf, json: bool, show_comments: bool, config: &Config) -> Result<(), CliError> {
    let source = read_source(file)?;
    let tokens = Scanner::new(&source).tokenize();

    if json || config.output == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&tokens).map_err(std::io::Error::from)?
        );
    } else {
        let hide_comments = config.hide_comments && !show_comments;
        print_table(&tokens, hide_comments);
        println!("\n{} tokens", tokens.len());
    }
    Ok(())
}

fn check_file(file: &PathBuf) -> Result<bool, CliError> {
    let source = read_source(file)?;
    let tokens = Scanner::new(&source).tokenize();

    let diagnostics: Vec<&Token> = tokens.iter().filter(|t| t.is_diagnostic()).collect();
    for token in &diagnostics {
        println!(
            "{}:{}: {} ({})",
            file.display(),
            token.line,
            token.message.as_deref().unwrap_or(""),
            token.lexeme
        );
    }

    if diagnostics.is_empty() {
        println!("{}: no lexical errors, {} tokens", file.display(), tokens.len());
        Ok(true)
    } else {
        println!(
            "{}: {} lexical error(s) in {} tokens",
            file.display(),
            diagnostics.len(),
            tokens.len()
        );
        Ok(false)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Scan {
            file,
            json,
            show_comments,
        } => {
            scan_file(&file, json, show_comments, &config)?;
        }
        Commands::Check { file } => {
            let clean = check_file(&file)?;
            if !clean {
                std::process::exit(1);
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Edit => {
                let editor = std::env::var("EDITOR").unwrap_or_else(|_| {
                    if cfg!(windows) {
                        String::from("notepad")
                    } else {
                        String::from("nano")
                    }
                });

                let config_path = Config::get_config_path();
                if !config_path.exists() {
                    Config::default().save()?;
                }

                std::process::Command::new(editor).arg(config_path).status()?;
            }
            ConfigCommands::Show => {
                let config_path = Config::get_config_path();
                if config_path.exists() {
                    println!("{}", fs::read_to_string(config_path)?);
                } else {
                    println!("No config file at: {}", config_path.display());
                    println!("Run 'lexi config init' to create one.");
                }
            }
            ConfigCommands::Init => {
                let config_path = Config::get_config_path();
                if config_path.exists() {
                    println!("Config file already exists at: {}", config_path.display());
                    println!("Use 'lexi config edit' to modify it.");
                } else {
                    Config::default().save()?;
                    println!("Initialized new config file at: {}", config_path.display());
                }
            }
        },
    }

    Ok(())
}
