use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{AppError, Identity};
use crate::ports::SystemPort;

/// In-memory `SystemPort` that records every call.
pub struct FakeSystem {
    pub privileged: bool,
    pub identity: Option<Identity>,
    pub calls: Mutex<Vec<String>>,
    pub failing_operation: Option<&'static str>,
    /// Written when a certificate is requested, standing in for the ACME client.
    pub issue_certificate_at: Option<PathBuf>,
}

#[allow(dead_code)]
impl FakeSystem {
    /// A privileged host whose web-server account is the current process identity.
    pub fn new() -> Self {
        let identity =
            Identity::new(nix::unistd::geteuid().as_raw(), nix::unistd::getegid().as_raw());
        Self {
            privileged: true,
            identity: Some(identity),
            calls: Mutex::new(Vec::new()),
            failing_operation: None,
            issue_certificate_at: None,
        }
    }

    pub fn unprivileged(mut self) -> Self {
        self.privileged = false;
        self
    }

    pub fn without_account(mut self) -> Self {
        self.identity = None;
        self
    }

    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing_operation = Some(operation);
        self
    }

    pub fn issuing_certificate(mut self, path: PathBuf) -> Self {
        self.issue_certificate_at = Some(path);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, call: String) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing_operation == Some(operation) {
            return Err(AppError::ExternalCommand { command: call, details: "exit status: 1".into() });
        }
        Ok(())
    }
}

impl SystemPort for FakeSystem {
    fn is_privileged(&self) -> bool {
        self.privileged
    }

    fn resolve_account(&self, user: &str, group: &str) -> Result<Identity, AppError> {
        self.calls.lock().unwrap().push(format!("resolve_account {}:{}", user, group));
        self.identity.ok_or_else(|| AppError::AccountNotFound { kind: "user", name: user.into() })
    }

    fn enable_site(&self, domain: &str) -> Result<(), AppError> {
        self.record("enable_site", format!("enable_site {}", domain))
    }

    fn reload_service(&self) -> Result<(), AppError> {
        self.record("reload_service", "reload_service".to_string())
    }

    fn request_certificate(&self, domain: &str) -> Result<(), AppError> {
        self.record("request_certificate", format!("request_certificate {}", domain))?;
        if let Some(path) = &self.issue_certificate_at {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "-----BEGIN CERTIFICATE-----\n").unwrap();
        }
        Ok(())
    }
}
