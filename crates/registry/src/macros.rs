// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logging macros for convenient usage
//!
//! Each macro takes a logger handle first and formats the message only
//! when this node or one of its delegates can still emit it.

/// Main logging macro with an explicit level
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.is_enabled($level) || logger.chain_count() > 1 {
            let record = $crate::Record::new(
                $level,
                logger.name(),
                format!($($arg)+),
            )
            .with_location(file!(), line!());
            logger.dispatch(&record);
        }
    }};
}

/// Trace level logging
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Debug level logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Info level logging
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Warning level logging
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Error level logging
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Fatal level logging
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Structured logging macro with fields
#[macro_export]
macro_rules! log_with_fields {
    ($logger:expr, $level:expr, $msg:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let logger = &$logger;
        if logger.is_enabled($level) || logger.chain_count() > 1 {
            let mut record = $crate::Record::new(
                $level,
                logger.name(),
                $msg,
            )
            .with_location(file!(), line!());
            $(
                record = record.with_field($key, $value);
            )+
            logger.dispatch(&record);
        }
    }};
}
