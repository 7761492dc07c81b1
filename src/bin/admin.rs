//! CLI administration tool for notes-app.
//!
//! Provides commands for managing user accounts, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a user account
//! cargo run --bin admin -- user add
//!
//! # List all accounts
//! cargo run --bin admin -- user list
//!
//! # Show user/note/category counts
//! cargo run --bin admin -- stats
//!
//! # Verify the database is reachable
//! cargo run --bin admin -- db check
//!
//! # Generate a token signing secret
//! cargo run --bin admin -- secret
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for all commands except `secret`): SQLite URL
//! - `TOKEN_SIGNING_SECRET` (required for `user add`): key for password hashing
//!
//! # Features
//!
//! - Create and list user accounts with interactive prompts
//! - User, note, and category counts
//! - Database connection check and version info
//! - Colored terminal output

use notes_app::application::services::UserService;
use notes_app::domain::repositories::UserRepository;
use notes_app::infrastructure::persistence::SqliteUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing notes-app.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Generate a token signing secret
    Secret,
}

/// User account subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user account
    Add {
        /// Username (prompted for interactively if not provided)
        #[arg(short, long)]
        username: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::User { action } => handle_user_action(action, &connect_pool().await?).await?,
        Commands::Stats => handle_stats(&connect_pool().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect_pool().await?).await?,
        Commands::Secret => handle_secret(),
    }

    Ok(())
}

/// Opens the database named by `DATABASE_URL`.
///
/// Does not create the file: the server owns schema creation, and a typo'd
/// URL should fail loudly instead of producing an empty database.
async fn connect_pool() -> Result<SqlitePool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    SqlitePool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Add { username, yes } => {
            add_user(repo, username, yes).await?;
        }
        UserAction::List => {
            list_users(repo).await?;
        }
    }

    Ok(())
}

/// Creates a user account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for username (or use provided)
/// 2. Prompt for password with confirmation
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash the password and store the account
///
/// # Security
///
/// - Only the keyed password hash is stored in the database
/// - The password is read without echo and never printed
async fn add_user(
    repo: Arc<SqliteUserRepository>,
    username: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    // Same key the server uses, so hashes verify at login
    let signing_secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;

    let username = match username {
        Some(name) => name,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password: String = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    if password.len() < 8 {
        anyhow::bail!("Password must be at least 8 characters");
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create user '{username}'?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = UserService::new(repo, signing_secret);
    let user = service
        .register(&username, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!();
    println!("  ID:       {}", user.id.to_string().bright_black());
    println!("  Username: {}", user.username.cyan());
    println!();
    println!("{}", "Request a token with:".bright_white());
    println!(
        "  curl -d \"username={}&password=...\" http://localhost:3000/token",
        user.username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all user accounts.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username                       Created
///   ─────────────────────────────────────────────────────
///   1   alice                          2025-01-15 10:30
///   2   bob                            2025-01-16 14:20
/// ```
async fn list_users(repo: Arc<SqliteUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(55).bright_black());

    for user in &users {
        println!(
            "  {:<3} {:<30} {:<20}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of users
/// - Total number of notes
/// - Total number of categories
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let notes_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
        .fetch_one(pool)
        .await?;

    let categories_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    println!(
        "  Users:      {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Notes:      {}",
        notes_count.to_string().bright_green().bold()
    );
    println!(
        "  Categories: {}",
        categories_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Generates and prints a token signing secret.
fn handle_secret() {
    println!("{}", "🔑 Generate Signing Secret".bright_blue().bold());
    println!();

    let secret = generate_secret();

    println!("  {}", secret.bright_yellow().bold());
    println!();
    println!("{}", "Add this to your environment:".bright_white());
    println!("  export TOKEN_SIGNING_SECRET=\"{}\"", secret.bright_yellow());
    println!();
}

/// Generates a cryptographically random signing secret.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
/// - Entropy: ~286 bits
fn generate_secret() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const SECRET_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..SECRET_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
