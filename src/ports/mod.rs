mod confirmation;
mod system;

pub use confirmation::ConfirmationPort;
pub use system::SystemPort;
