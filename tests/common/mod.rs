//! Shared testing utilities for create-new-vhost CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const PRIMARY_TEMPLATE: &str = "<VirtualHost *:80>\n  ServerName %DOMAIN%\n</VirtualHost>\n";
pub const TLS_TEMPLATE: &str = "<VirtualHost *:443>\n  ServerName %DOMAIN%\n</VirtualHost>\n";

/// Isolated template, destination, sites-available and ACME directories.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with a ready template.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        root.child("template/http.conf").write_str(PRIMARY_TEMPLATE).unwrap();
        root.child("template/http-ssl.conf").write_str(TLS_TEMPLATE).unwrap();
        root.child("template/htdocs/index.html").write_str("<h1>%DOMAIN%</h1>\n").unwrap();
        root.child("srv").create_dir_all().unwrap();
        root.child("sites-available").create_dir_all().unwrap();
        root.child("acme/live").create_dir_all().unwrap();
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn destination_root(&self) -> PathBuf {
        self.path().join("srv")
    }

    pub fn sites_available(&self) -> PathBuf {
        self.path().join("sites-available")
    }

    /// Write a config file whose external helpers are harmless shell builtins.
    pub fn write_config(&self, extra: &str) -> PathBuf {
        let path = self.path().join("config.toml");
        let content = format!(
            r#"template_dir = "{template}"
destination_dir = "{destination}"
sites_available = "{sites}"
acme_live_dir = "{acme}"
www_user = "root"
www_group = "root"
site_enable_command = "true"
reload_command = ["true"]
acme_client = "true"
{extra}"#,
            template = self.path().join("template").display(),
            destination = self.destination_root().display(),
            sites = self.sites_available().display(),
            acme = self.path().join("acme/live").display(),
        );
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Build a command for invoking the compiled binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("create-new-vhost").expect("Failed to locate binary");
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        cmd
    }

    /// Whether the test process itself runs as root.
    pub fn is_root(&self) -> bool {
        nix::unistd::geteuid().is_root()
    }

    pub fn assert_nothing_provisioned(&self, domain: &str) {
        assert!(
            !self.destination_root().join(domain).exists(),
            "vhost directory should not exist"
        );
        assert_eq!(
            fs::read_dir(self.sites_available()).unwrap().count(),
            0,
            "sites-available should be empty"
        );
    }
}
