//! Layered configuration: built-in defaults, an optional TOML file, then command-line flags.

mod load_config;

pub use load_config::{
    DEFAULT_CONFIG_PATH, FileSettings, Overrides, build_config, load_config, parse_settings,
    read_settings,
};
