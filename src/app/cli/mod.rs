//! CLI Adapter.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::app::config::{Overrides, load_config};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "create-new-vhost")]
#[command(version)]
#[command(
    about = "Provision a web-server virtual host from a template directory",
    long_about = None
)]
struct Cli {
    /// Domain name for the vhost
    #[arg(long)]
    domain: Option<String>,
    /// Template directory copied for every new vhost
    #[arg(long, value_name = "DIR")]
    template_dir: Option<PathBuf>,
    /// Directory the vhost directory is created in
    #[arg(long, value_name = "DIR")]
    destination_dir: Option<PathBuf>,
    /// Path to the htaccess file to be used
    #[arg(long, value_name = "FILE")]
    htaccess_file: Option<PathBuf>,
    /// Web-server user
    #[arg(long, value_name = "USER")]
    www_user: Option<String>,
    /// Web-server group
    #[arg(long, value_name = "GROUP")]
    www_group: Option<String>,
    /// Directory to symlink the vhost configuration into
    #[arg(long, value_name = "DIR")]
    sites_available: Option<PathBuf>,
    /// Config file (defaults to /etc/create-new-vhost/config.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Action to run instead of provisioning
    #[arg(value_enum)]
    action: Option<Action>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Action {
    /// Re-run certificate provisioning for an existing vhost
    RedoSsl,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        if matches!(e, AppError::MissingDomain) {
            eprintln!("{}", Cli::command().render_usage());
        }
        std::process::exit(e.exit_code());
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let domain = cli.domain.filter(|d| !d.is_empty()).ok_or(AppError::MissingDomain)?;
    let overrides = Overrides {
        template_dir: cli.template_dir,
        destination_dir: cli.destination_dir,
        htaccess_file: cli.htaccess_file,
        sites_available: cli.sites_available,
        www_user: cli.www_user,
        www_group: cli.www_group,
    };
    let config = load_config(&domain, cli.config.as_deref(), overrides)?;

    match cli.action {
        Some(Action::RedoSsl) => api::redo_ssl(&config),
        None => {
            let outcome = api::provision(&config)?;
            println!(
                "✅ Created virtualhost {} at {}",
                config.domain,
                outcome.destination.display()
            );
            if outcome.certificate_merged {
                println!(
                    "✅ TLS configuration merged into {}",
                    config.primary_config().display()
                );
            } else {
                println!(
                    "⚠️  No certificate at {} yet; {} was not merged",
                    config.certificate_path().display(),
                    config.tls_fragment().display()
                );
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
