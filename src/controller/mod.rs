pub mod command_handler;

pub use command_handler::{CommandOutcome, describe_state, handle_command};
