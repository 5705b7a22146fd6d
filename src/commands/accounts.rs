//! Accounts command - administrative account creation.
//!
//! Goes through the same registration service as the HTTP endpoint,
//! so validation and uniqueness rules are identical.

use std::sync::Arc;

use crate::cli::args::{AccountsAction, AccountsArgs};
use crate::config::Config;
use crate::domain::RegistrationRequest;
use crate::errors::AppResult;
use crate::infra::{Database, UserStore};
use crate::services::{Registrar, RegistrationService};

/// Execute the accounts command
pub async fn execute(args: AccountsArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let registrar = Registrar::new(Arc::new(UserStore::new(db.get_connection())));

    match args.action {
        AccountsAction::Create {
            username,
            email,
            password,
        } => {
            let info = registrar
                .register(RegistrationRequest::new(username, email, password))
                .await?;
            println!("{} (id {})", info.message, info.account.id);
        }
    }

    Ok(())
}
