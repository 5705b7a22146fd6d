//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// SkillX Accounts - user registration service
#[derive(Parser, Debug)]
#[command(name = "skillx-accounts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage user accounts
    Accounts(AccountsArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (defaults to SERVER_HOST)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to SERVER_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Keep accounts in memory instead of PostgreSQL
    #[arg(long, env = "IN_MEMORY_STORE")]
    pub in_memory: bool,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the accounts command
#[derive(Parser, Debug)]
pub struct AccountsArgs {
    #[command(subcommand)]
    pub action: AccountsAction,
}

/// Account actions
#[derive(Subcommand, Debug)]
pub enum AccountsAction {
    /// Register an account directly against the database
    Create {
        /// Username for the new account
        #[arg(short, long)]
        username: String,
        /// Optional email address
        #[arg(short, long)]
        email: Option<String>,
        /// Password (prefer the environment variable over the flag)
        #[arg(long, env = "ACCOUNT_PASSWORD", hide_env_values = true)]
        password: String,
    },
}
