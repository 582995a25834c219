use crate::{CliResult, Commands};

use std::path::Path;
use std::sync::Arc;

use serde_json::{Value, json};
use vv_config::Config;
use vv_core::RegisterProfile;
use vv_session::{
    FileSessionStorage, GuardDecision, Route, SessionContext, SessionSnapshot,
    StaticCredentialDirectory, guard, home_route,
};

/// JSON printed for a command, and whether the command achieved its goal.
#[derive(Debug)]
pub struct CommandOutcome {
    pub value: Value,
    pub success: bool,
}

impl CommandOutcome {
    fn ok(value: Value) -> Self {
        Self {
            value,
            success: true,
        }
    }
}

/// Session context over the demo directory and the configured record.
pub fn build_context(config: &Config, config_dir: &Path) -> SessionContext {
    SessionContext::new(
        Arc::new(StaticCredentialDirectory::fixture()),
        Arc::new(FileSessionStorage::from_config(config, config_dir)),
    )
}

/// Runs one command against an initialized context.
pub async fn execute(command: Commands, context: &SessionContext) -> CliResult<CommandOutcome> {
    match command {
        Commands::Login { email, password } => {
            let authenticated = context.login(&email, &password).await?;
            Ok(CommandOutcome {
                value: sign_in_report(authenticated, &context.snapshot()),
                success: authenticated,
            })
        }

        Commands::Register {
            name,
            email,
            password,
            role,
            specialization,
            license_number,
            patient_relation,
        } => {
            let mut profile = RegisterProfile::new(name, email, password, role.into());
            profile.specialization = specialization;
            profile.license_number = license_number;
            profile.patient_relation = patient_relation;

            let registered = context.register(profile).await?;
            Ok(CommandOutcome {
                value: sign_in_report(registered, &context.snapshot()),
                success: registered,
            })
        }

        Commands::Logout => {
            context.logout().await?;
            Ok(CommandOutcome::ok(json!({
                "session": context.snapshot(),
                "redirect": Route::Landing.path(),
            })))
        }

        Commands::Whoami => Ok(CommandOutcome::ok(serde_json::to_value(
            context.snapshot(),
        )?)),

        Commands::Route { path } => {
            let route = Route::parse(&path);
            let report = match guard(&route, &context.snapshot()) {
                GuardDecision::Allow => json!({ "path": route.path(), "decision": "allow" }),
                GuardDecision::Pending => json!({ "path": route.path(), "decision": "pending" }),
                GuardDecision::Redirect(target) => json!({
                    "path": route.path(),
                    "decision": "redirect",
                    "redirect": target.path(),
                }),
            };
            Ok(CommandOutcome::ok(report))
        }
    }
}

fn sign_in_report(authenticated: bool, snapshot: &SessionSnapshot) -> Value {
    let redirect = snapshot
        .role()
        .filter(|_| authenticated)
        .map(|role| home_route(role).path());

    json!({
        "authenticated": authenticated,
        "session": snapshot,
        "redirect": redirect,
    })
}
