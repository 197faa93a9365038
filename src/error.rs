//! Error types for data lookup and input validation.

use thiserror::Error;

/// Errors produced while generating attribute values.
///
/// All errors are synchronous and deterministic for a given bad input; no
/// operation retries or returns a partial result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A string was parsed into a closed enum (`Gender`, `TitleType`,
    /// `SocialNetwork`, `Locale`) but is not one of its members.
    #[error("'{value}' is not a member of {kind}")]
    NonEnumerable {
        /// The enum the value was checked against
        kind: &'static str,
        /// The offending input
        value: String,
    },

    /// An unsupported username template key.
    #[error("unsupported username template '{template}'")]
    InvalidTemplate { template: String },

    /// A category the provider needs is missing from the locale table.
    #[error("category '{category}' not found in locale data for '{locale}'")]
    DataLookup {
        category: String,
        locale: &'static str,
    },

    /// The embedded locale file could not be parsed. Only possible at
    /// provider construction time.
    #[error("failed to load locale data for '{locale}': {message}")]
    Data {
        locale: &'static str,
        message: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
