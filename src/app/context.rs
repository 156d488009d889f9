use crate::ports::{ConfirmationPort, SystemPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SystemPort, C: ConfirmationPort> {
    system: S,
    confirmation: C,
}

impl<S: SystemPort, C: ConfirmationPort> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(system: S, confirmation: C) -> Self {
        Self { system, confirmation }
    }

    /// Get a reference to the system operations.
    pub fn system(&self) -> &S {
        &self.system
    }

    /// Get a reference to the operator confirmation.
    pub fn confirmation(&self) -> &C {
        &self.confirmation
    }
}
