//! Shared types for the `sift` workspace.
//!
//! * [`lottery`]: the ball model, the static attribute catalog and draw records.
//! * [`utils`]: free-text helpers used by the manual number list.
//! * [`config`]: runtime settings assembled by the command line.
//!
//! The status macros below are the only way the library crates talk to the user.
//! They emit plain `tracing` events; installing a subscriber is left to the binary.

pub mod config;
pub mod lottery;
pub mod utils;

#[doc(hidden)]
pub use tracing as __tracing;

/// Neutral progress message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

/// Something finished the way the user wanted.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(status = "success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}
