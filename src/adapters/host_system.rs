use std::io;
use std::process::Command;

use crate::adapters::account_database;
use crate::domain::{AppError, Identity, VhostConfig};
use crate::ports::SystemPort;

/// `SystemPort` backed by the local host: the account database for identity, PATH helpers for the rest.
#[derive(Debug, Clone)]
pub struct HostSystem {
    site_enable_command: String,
    reload_command: Vec<String>,
    acme_client: String,
}

impl HostSystem {
    pub fn new(config: &VhostConfig) -> Self {
        Self {
            site_enable_command: config.site_enable_command.clone(),
            reload_command: config.reload_command.clone(),
            acme_client: config.acme_client.clone(),
        }
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<(), AppError> {
        let command_line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!(command = %command_line, "Running external command");

        let output = Command::new(program).args(args).output().map_err(|e| {
            AppError::ExternalCommand {
                command: command_line.clone(),
                details: if e.kind() == io::ErrorKind::NotFound {
                    format!("{} not found on PATH", program)
                } else {
                    e.to_string()
                },
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ExternalCommand {
                command: command_line,
                details: if stderr.is_empty() { output.status.to_string() } else { stderr },
            });
        }

        Ok(())
    }
}

impl SystemPort for HostSystem {
    fn is_privileged(&self) -> bool {
        account_database::is_root()
    }

    fn resolve_account(&self, user: &str, group: &str) -> Result<Identity, AppError> {
        let uid = account_database::user_id(user)
            .map_err(|source| AppError::AccountLookup { kind: "user", name: user.into(), source })?
            .ok_or_else(|| AppError::AccountNotFound { kind: "user", name: user.into() })?;
        let gid = account_database::group_id(group)
            .map_err(|source| AppError::AccountLookup {
                kind: "group",
                name: group.into(),
                source,
            })?
            .ok_or_else(|| AppError::AccountNotFound { kind: "group", name: group.into() })?;

        Ok(Identity::new(uid, gid))
    }

    fn enable_site(&self, domain: &str) -> Result<(), AppError> {
        self.run(&self.site_enable_command, &[domain])
    }

    fn reload_service(&self) -> Result<(), AppError> {
        let (program, args) = self
            .reload_command
            .split_first()
            .ok_or_else(|| AppError::config_error("'reload_command' must name a program"))?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(program, &args)
    }

    fn request_certificate(&self, domain: &str) -> Result<(), AppError> {
        self.run(&self.acme_client, &["want", domain])
    }
}
