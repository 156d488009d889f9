pub mod provision;
pub mod redo_ssl;
