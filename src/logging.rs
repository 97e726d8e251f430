// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Logging macros.
//!
//! - `defmt` feature: forwarded to `defmt` (the binary links `defmt-rtt` as transport).
//! - Unit tests: printed to stdout.
//! - Otherwise: arguments are type-checked and nothing is emitted.
//!
//! Format strings must stick to plain `{}` placeholders so they are valid for both `defmt` and
//! `core::fmt`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($defmt:ident, $tag:literal, $($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::$defmt!($($arg)*);

        #[cfg(all(not(feature = "defmt"), test))]
        println!("[{}] {}", $tag, format_args!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log an error message.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::__log!(error, "ERROR", $($arg)*) };
}

/// Log a warning message.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::__log!(warn, "WARN", $($arg)*) };
}

/// Log an informational message.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::__log!(info, "INFO", $($arg)*) };
}

/// Log a debug message.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::__log!(debug, "DEBUG", $($arg)*) };
}

/// Log a trace message.
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => { $crate::__log!(trace, "TRACE", $($arg)*) };
}
