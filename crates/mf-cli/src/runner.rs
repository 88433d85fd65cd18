use crate::{Cli, CliResult, Commands, logger};

use mf_auth::FixedCredentialTable;
use mf_config::{Config, StorageBackend};
use mf_core::{AccessRequirement, Identity, SignUpRequest};
use mf_session::{FileStorage, MemoryStorage, SessionStorage, SessionStore, StoreOptions};

use std::sync::Arc;

use log::{info, warn};
use serde_json::{Value, json};

/// Load config, start logging, open the store and run one command.
///
/// Returns the rendered JSON output.
pub async fn run(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting mefit v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut store = build_store(&config)?;
    let value = execute(cli.command, &mut store).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(output)
}

/// Open the session store described by `config`, restoring any saved session.
pub fn build_store(config: &Config) -> CliResult<SessionStore> {
    let storage: Arc<dyn SessionStorage> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileStorage::new(config.storage_dir()?)),
        StorageBackend::Memory => {
            warn!("Using memory storage: the session ends with this process");
            Arc::new(MemoryStorage::new())
        }
    };

    let options = StoreOptions {
        storage_key: config.session.storage_key.clone(),
        latency: config.latency(),
    };

    Ok(SessionStore::open(
        Arc::new(FixedCredentialTable::mefit()),
        storage,
        options,
    ))
}

pub async fn execute(command: Commands, store: &mut SessionStore) -> CliResult<Value> {
    match command {
        Commands::SignIn { email, password } => {
            let identity = store.sign_in(&email, &password).await?;
            Ok(serde_json::to_value(identity)?)
        }

        Commands::SignUp {
            email,
            first_name,
            last_name,
            contributor,
            admin,
        } => {
            let request = SignUpRequest::new(email, first_name, last_name)
                .with_contributor(contributor)
                .with_admin(admin);
            let identity = store.sign_up(request).await;
            Ok(serde_json::to_value(identity)?)
        }

        Commands::SignOut => {
            store.sign_out();
            Ok(json!({ "signedOut": true }))
        }

        Commands::Whoami => Ok(whoami(store.current())),

        Commands::Access { requirement } => {
            let requirement: AccessRequirement = requirement.parse()?;
            let mode = store.subscribe().access(requirement);
            Ok(json!({
                "requirement": requirement,
                "mode": mode,
                "notice": requirement.notice(mode),
            }))
        }
    }
}

fn whoami(identity: Option<Identity>) -> Value {
    let Some(identity) = identity else {
        return json!({
            "fullName": null,
            "initials": null,
            "role": null,
            "identity": null,
        });
    };

    let role = identity.role();
    json!({
        "fullName": identity.full_name(),
        "initials": identity.initials(),
        "role": role,
        "roleLabel": role.label(),
        "elevated": role.is_elevated(),
        "canRequestContributorAccess": identity.can_request_contributor_access(),
        "identity": identity,
    })
}
