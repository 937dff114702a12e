mod provider;

pub use provider::{FileSessionProvider, SessionProvider};

#[cfg(test)]
pub use provider::MockSessionProvider;
