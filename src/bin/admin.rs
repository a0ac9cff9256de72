//! CLI administration tool for todos-api.
//!
//! Provides commands for issuing access tokens, viewing statistics, and
//! checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue an access token (prompts for missing values)
//! cargo run --bin admin -- token issue --id 1 --username jayhus --role admin
//!
//! # Verify a token and show whom it names
//! cargo run --bin admin -- token inspect <token>
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `JWT_SECRET` (required for `token`): must match the server's secret
//! - `DATABASE_URL` (required for `stats` and `db`): PostgreSQL connection string

use todos_api::application::services::AuthService;
use todos_api::domain::identity::Identity;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;

/// CLI tool for managing todos-api.
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
    /// Issue and inspect access tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Sign an access token for a user
    Issue {
        /// User id the token resolves to
        #[arg(long)]
        id: Option<i64>,

        /// Username carried in the `sub` claim
        #[arg(short, long)]
        username: Option<String>,

        /// Role carried in the token
        #[arg(short, long)]
        role: Option<String>,

        /// Token lifetime in minutes
        #[arg(short, long, default_value_t = 60)]
        ttl_minutes: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Verify a token and print its identity
    Inspect {
        /// Raw token value
        token: String,
    },
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
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => handle_token_action(action)?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

fn jwt_secret() -> Result<String> {
    let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
    if secret.is_empty() {
        anyhow::bail!("JWT_SECRET must not be empty");
    }
    Ok(secret)
}

/// Dispatches token commands.
fn handle_token_action(action: TokenAction) -> Result<()> {
    match action {
        TokenAction::Issue {
            id,
            username,
            role,
            ttl_minutes,
            yes,
        } => issue_token(id, username, role, ttl_minutes, yes),
        TokenAction::Inspect { token } => inspect_token(&token),
    }
}

/// Signs a new access token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for id, username and role (or use provided)
/// 2. Display identity details
/// 3. Confirm (unless `--yes` flag)
/// 4. Sign with `JWT_SECRET` and print usage instructions
fn issue_token(
    id: Option<i64>,
    username: Option<String>,
    role: Option<String>,
    ttl_minutes: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Issue Access Token".bright_blue().bold());
    println!();

    if ttl_minutes <= 0 {
        anyhow::bail!("--ttl-minutes must be greater than 0");
    }

    let id = match id {
        Some(id) => id,
        None => Input::new().with_prompt("User id").interact_text()?,
    };
    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let role = match role {
        Some(r) => r,
        None => Input::new()
            .with_prompt("Role")
            .with_initial_text("user")
            .interact_text()?,
    };

    let identity = Identity::new(id, username, role);

    println!();
    println!("{}", "Identity:".bright_white().bold());
    println!("  Id:       {}", identity.id.to_string().cyan());
    println!("  Username: {}", identity.username.cyan());
    println!("  Role:     {}", identity.role.cyan());
    println!("  Expires:  in {} min", ttl_minutes.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Issue this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = AuthService::new(&jwt_secret()?);
    let token = service
        .issue_token(&identity, ttl_minutes)
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

    println!();
    println!("{}", "✅ Token issued".green().bold());
    println!();
    println!("  {}", token.bright_yellow());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/",
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Verifies a token against `JWT_SECRET` and prints the identity it carries.
fn inspect_token(token: &str) -> Result<()> {
    println!("{}", "🔍 Inspect Access Token".bright_blue().bold());
    println!();

    let service = AuthService::new(&jwt_secret()?);

    match service.authenticate(token) {
        Ok(identity) => {
            println!("  Status:   {}", "VALID".green().bold());
            println!("  Id:       {}", identity.id.to_string().cyan());
            println!("  Username: {}", identity.username.cyan());
            println!("  Role:     {}", identity.role.cyan());
        }
        Err(e) => {
            println!("  Status:   {}", "INVALID".red().bold());
            println!("  Reason:   {}", e.to_string().bright_black());
        }
    }
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of to-do items
/// - Number of completed items
/// - Number of distinct owners
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let todos_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
        .fetch_one(pool)
        .await?;

    let completed_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos WHERE complete")
        .fetch_one(pool)
        .await?;

    let owners_count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT owner_id) FROM todos")
        .fetch_one(pool)
        .await?;

    println!(
        "  Todos:     {}",
        todos_count.to_string().bright_green().bold()
    );
    println!(
        "  Completed: {}",
        completed_count.to_string().bright_green().bold()
    );
    println!(
        "  Owners:    {}",
        owners_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
