// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, converting or saving models
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("External library error: {0}")]
    Library(String),

    #[error("Could not read file: {0}")]
    FileRead(String),

    #[error("Could not save file: {0}")]
    Save(String),

    #[error("Invalid viewer configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
