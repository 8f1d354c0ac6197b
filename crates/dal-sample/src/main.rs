//! # Data Access Layer Demo
//!
//! Starts a [`DalSystem`] over the reference users, lists and fetches them, shows a lookup
//! that fails, inserts one more user, and shuts down.
//!
//! ```bash
//! RUST_LOG=info cargo run -p dal-sample
//! DAL_STORE_BUFFER=4 RUST_LOG=debug cargo run -p dal-sample
//! ```

use dal_sample::clients::log_user;
use dal_sample::fixtures;
use dal_sample::lifecycle::DalSystem;
use dal_sample::model::{User, UserRole};
use schema_framework::tracing::setup_tracing;
use schema_framework::ClientConfig;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ClientConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting data access layer");

    let system = DalSystem::start(&config, fixtures::users());

    let span = tracing::info_span!("listing");
    let users = async {
        system
            .user_client
            .fetch_all_users()
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    users.iter().for_each(log_user);

    let admin = system
        .user_client
        .fetch_user("2")
        .await
        .map_err(|e| e.to_string())?;
    info!(id = %admin.id(), role = %admin.role(), "Fetched user");

    match system.user_client.fetch_user("99").await {
        Ok(user) => log_user(&user),
        Err(e) => error!(error = %e, "Lookup failed"),
    }

    system
        .store
        .insert(User::new("4", "Alice Doe", "alice.doe@example.com", UserRole::User))
        .await
        .map_err(|e| e.to_string())?;
    let count = system
        .user_client
        .fetch_all_users()
        .await
        .map_err(|e| e.to_string())?
        .len();
    info!(count, "Users after insert");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
