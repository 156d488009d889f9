pub mod account_database;
pub mod host_system;
pub mod terminal_confirmation;

pub use host_system::HostSystem;
pub use terminal_confirmation::TerminalConfirmation;
