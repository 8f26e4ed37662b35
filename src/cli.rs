// CLI module - command-line argument parsing and handlers
//
// Provides subcommands for scripted access to the comment blob and for
// configuration management:
// - comments list / add / export / clear
// - config --show, --reset, --path

use crate::board::{markup, store::CommentStore, CommentBoard};
use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// dnboard - hero banner preview and local comment board for the Discover New site
#[derive(Parser)]
#[command(name = "dnboard")]
#[command(version = VERSION)]
#[command(about = "Hero banner preview and local comment board", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Work with the stored comments
    Comments {
        #[command(subcommand)]
        command: CommentsCommand,
    },
}

#[derive(Subcommand)]
pub enum CommentsCommand {
    /// Print the stored comments, newest first
    List,

    /// Submit a new comment
    Add {
        /// Commenter email
        #[arg(long)]
        email: String,

        /// Comment text
        #[arg(long)]
        text: String,
    },

    /// Render the comment list as an HTML fragment
    Export {
        /// Write the fragment to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Delete all stored comments
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else {
                // No flag provided, show help
                println!("Usage: dnboard config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        Some(Commands::Comments { command }) => {
            let config = Config::from_env();
            let store = CommentStore::in_dir(&config.data_dir);
            match command {
                CommentsCommand::List => handle_comments_list(store),
                CommentsCommand::Add { email, text } => handle_comments_add(store, &email, &text),
                CommentsCommand::Export { out } => handle_comments_export(store, out),
                CommentsCommand::Clear { yes } => handle_comments_clear(store, yes),
            }
            true
        }
        None => false, // No subcommand, run the TUI
    }
}

fn handle_comments_list(store: CommentStore) {
    let comments = store.load();
    if comments.is_empty() {
        println!("{}", markup::EMPTY_PLACEHOLDER);
        return;
    }
    for comment in comments {
        println!(
            "{}  {}\n  {}",
            comment.email,
            markup::format_time(comment.time),
            comment.text
        );
    }
}

fn handle_comments_add(store: CommentStore, email: &str, text: &str) {
    let mut board = CommentBoard::new(store);
    let posted = board.submit(email, text);

    // Same inline messages the form shows
    if let Some(note) = board.note() {
        println!("{}", note.text);
    }
    if !posted {
        std::process::exit(1);
    }
}

fn handle_comments_export(store: CommentStore, out: Option<PathBuf>) {
    let items = markup::comment_list(&store.load());
    let fragment = format!("<ul class=\"comment-list\">\n{}</ul>\n", items);

    match out {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, fragment) {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
            println!("Wrote comment fragment: {}", path.display());
        }
        None => print!("{}", fragment),
    }
}

fn handle_comments_clear(store: CommentStore, yes: bool) {
    if !yes {
        eprint!(
            "Delete all comments in {}? [y/N] ",
            store.path().display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    let mut board = CommentBoard::new(store);
    board.clear_all();
    println!("Comments cleared.");
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("data_dir = {:?}", config.data_dir.display().to_string());
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    // Create parent directory
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}
