//! CLI driver for the recipe book core.
//!
//! # Responsibility
//! - Provide a small executable to exercise `recipebook_core` against the
//!   live endpoint without the mobile shell.
//! - Keep output plain and line-oriented for quick local checks.

use clap::{Parser, Subcommand};
use recipebook_core::{
    Alert, Category, CredentialStore, HttpRecipeSource, ListingSession, RecipeBookConfig,
};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "recipebook", version, about = "Recipe book core driver")]
struct Cli {
    /// Absolute directory for rolling log files.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print core linkage info.
    Ping,
    /// List category ids, labels and icons.
    Categories,
    /// Fetch and print one page of recipes.
    Browse {
        #[arg(long, default_value = "lunch")]
        category: Category,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Check a username/password pair against the demo allow-list.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = recipebook_core::LogLevel::build_default();
        if let Err(err) = recipebook_core::init_logging(level.as_str(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match cli.command {
        Command::Ping => {
            println!("recipebook_core ping={}", recipebook_core::ping());
            println!("recipebook_core version={}", recipebook_core::core_version());
            ExitCode::SUCCESS
        }
        Command::Categories => {
            for category in Category::ALL {
                println!("{}\t{}\t{}", category.id(), category.label(), category.icon());
            }
            ExitCode::SUCCESS
        }
        Command::Browse {
            category,
            search,
            page,
        } => browse(category, &search, page),
        Command::Login { username, password } => {
            match CredentialStore::demo().login(&username, &password) {
                Ok(username) => {
                    println!("Hello, {username}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn browse(category: Category, search: &str, page: u32) -> ExitCode {
    let config = match RecipeBookConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let source = match HttpRecipeSource::from_config(&config) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = ListingSession::from_config(source, &config);
    let mut alerts = session.select_category(category);
    if !search.is_empty() {
        // Push and release the query in one go; there is no typist to wait for.
        let typed_at = Instant::now();
        alerts.extend(session.search_input(search, typed_at));
        alerts.extend(session.poll(typed_at + config.debounce));
    }
    if page > 1 {
        alerts.extend(session.go_to_page(page));
    }

    if report_alerts(&alerts) {
        return ExitCode::FAILURE;
    }

    let view = session.view("cli");
    for card in &view.cards {
        println!(
            "{}\t{}\t{}\t{}",
            card.id, card.name, card.price_label, card.quantity_label
        );
    }
    if let Some(message) = &view.empty_message {
        println!("{message}");
    }
    println!("{}", view.pagination.label);
    ExitCode::SUCCESS
}

fn report_alerts(alerts: &[Alert]) -> bool {
    for alert in alerts {
        eprintln!("{}: {}", alert.title, alert.message);
    }
    !alerts.is_empty()
}
