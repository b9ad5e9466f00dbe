// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for Lau Trie.
//!
//! The trie itself never fails: a missing word is a `false` or an empty
//! result, not an error. The types here cover the surfaces around it,
//! configuration, dictionary files and the command session. Malformed
//! session lines are reported back to the session's output as
//! [`SessionError`]s and never abort it, so they have no [`LauError`]
//! variant.

use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use thiserror::Error;

pub mod config;
pub mod dictionary;
pub mod session;

pub use config::ConfigError;
pub use dictionary::DictionaryError;
pub use session::SessionError;

/// Result type alias used throughout Lau Trie.
pub type LauResult<T> = Result<T, LauError>;

/// Core error enum for Lau Trie.
#[derive(Error, Debug)]
pub enum LauError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors occurring while loading word lists.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// IO errors that may occur while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors from JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: LauError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: LauError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Holder for the process-wide error reporter.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Set the error reporter.
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Report an error with context.
    pub fn report(&self, context: ErrorContext) {
        if let Some(reporter) = &self.reporter {
            reporter.report(context);
        } else {
            // Fallback to standard error output if no reporter is configured
            eprintln!("Error: {context}");
        }
    }
}

static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> =
    Lazy::new(|| RwLock::new(ErrorReporting::default()));

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    let mut reporting = ERROR_REPORTING.write().unwrap_or_else(|poisoned| {
        tracing::error!("Error reporting lock was poisoned, recovering");
        poisoned.into_inner()
    });
    reporting.set_reporter(reporter);
}

/// Report an error through the global error reporter.
pub fn report_error(context: ErrorContext) {
    let reporting = ERROR_REPORTING.read().unwrap_or_else(|poisoned| {
        tracing::error!("Error reporting lock was poisoned, recovering");
        poisoned.into_inner()
    });
    reporting.report(context);
}
