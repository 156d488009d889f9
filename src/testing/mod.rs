mod fake_system;
mod scripted_confirmation;

pub use fake_system::FakeSystem;
pub use scripted_confirmation::ScriptedConfirmation;
