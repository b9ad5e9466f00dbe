// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Session error module.
//!
//! Errors produced while parsing lines of the command session.

use thiserror::Error;

/// Errors that can occur while parsing a session command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The command word is not recognised.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The command requires an argument but none was given.
    #[error("Command '{command}' requires an argument")]
    MissingArgument {
        /// The command missing its argument
        command: &'static str,
    },

    /// The command takes no argument but one was given.
    #[error("Command '{command}' takes no argument, got '{argument}'")]
    UnexpectedArgument {
        /// The command that was given an argument
        command: &'static str,
        /// The extra argument
        argument: String,
    },
}
