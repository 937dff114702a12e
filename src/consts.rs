pub mod cli_consts {
    //! Dashboard configuration constants, organized by functional area.

    use std::time::Duration;

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum buffer size for the worker event channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum buffer size for the UI command channel.
    pub const COMMAND_QUEUE_SIZE: usize = 32;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Connect timeout for API requests.
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout for API requests.
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;

    pub const fn connect_timeout() -> Duration {
        Duration::from_secs(CONNECT_TIMEOUT_SECS)
    }

    pub const fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the splash screen is shown before the dashboard appears.
    pub const SPLASH_DURATION_SECS: u64 = 2;

    /// Input polling budget per UI frame (milliseconds).
    pub const INPUT_POLL_MS: u64 = 100;

    pub const fn splash_duration() -> Duration {
        Duration::from_secs(SPLASH_DURATION_SECS)
    }

    pub const fn input_poll_interval() -> Duration {
        Duration::from_millis(INPUT_POLL_MS)
    }
}
