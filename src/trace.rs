//! Structured logging hooks.
//!
//! `trace_event!(level, fields..., "message")` forwards to the `tracing`
//! macro of the same level when the `tracing` feature is enabled and expands
//! to nothing otherwise.

macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    };
}
