//! Application layer: session routing and the terminal generate-and-send
//! action.

pub mod dispatcher;
pub mod messenger;

pub use dispatcher::SessionDispatcher;
pub use messenger::Messenger;
