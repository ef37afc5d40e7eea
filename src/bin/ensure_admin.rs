//! Seeds the default administrator account if it does not exist yet.
//!
//! Run once per deployment. Exits with status 1 on any failure; re-run after
//! fixing the cause.

use dotenvy::dotenv;

use clientdesk::models::config::{BootstrapConfig, load_settings};
use clientdesk::services::bootstrap::{BootstrapOutcome, bootstrap_admin};

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match load_settings::<BootstrapConfig>() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading bootstrap config: {err}");
            std::process::exit(1);
        }
    };

    log::info!("Ensuring administrator `{}` exists", config.admin.username);

    match bootstrap_admin(&config.database_url, &config.admin) {
        Ok(BootstrapOutcome::Created(id)) => {
            log::info!("Administrator created with id {id}");
            if config.admin.force_password_change {
                log::warn!("The default password must be changed on first login");
            }
        }
        Ok(BootstrapOutcome::AlreadyExists) => {
            log::info!("Administrator already exists");
        }
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
