pub mod core;
pub mod dispatcher;

pub use self::core::{Command, EventSender};
pub use dispatcher::start_dispatcher;
