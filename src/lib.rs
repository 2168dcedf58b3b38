//! NWM Resolver Library
//!
//! A Rust library for resolving National Water Model (NWM) publisher file
//! identifiers from a requested domain, run configuration, model software
//! version, and valid-time window.
//!
//! The NWM publishes output under a versioned, domain-dependent naming and
//! scheduling scheme. Mapping "a moment in time, for a given domain and
//! configuration" onto "the file the publisher stored it in" is a branching,
//! date-sensitive computation with real edge cases: version-dependent
//! schedule changes, domain-dependent run cadence, analysis cycles that
//! straddle midnight, and latest-available queries racing wall-clock data
//! latency. This library provides:
//! - A table-driven registry of per-(configuration, domain, version, member)
//!   scheduling parameters with declarative version overrides
//! - A pure reference-time to software-version resolver over fixed cutovers
//! - A cycle resolver that walks a valid-time window and yields the exact
//!   date-directory, issuance, and offset tokens for every timestep
//! - Object-key assembly against the fixed publisher path template
//! - A CLI for resolving file lists and inspecting the schedule tables

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod config_registry;
        pub mod cycle_resolver;
        pub mod key_builder;
        pub mod version_resolver;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    ConfigRecord, ConfigRequest, Configuration, Domain, FilePartRecord, NwmVersion,
};
pub use app::services::config_registry::ConfigRegistry;
pub use app::services::cycle_resolver::{CycleRequest, CycleResolver};
pub use app::services::version_resolver::resolve_version;

/// Result type alias for the NWM resolver
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for NWM file-identifier resolution
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration has no defined schedule for the given domain
    #[error("Configuration '{configuration}' does not exist for domain '{domain}'")]
    ConfigurationNotSupported {
        configuration: Configuration,
        domain: Domain,
    },

    /// Domain did not exist at the resolved software version
    #[error("Domain '{domain}' does not exist for version {version}")]
    DomainNotSupportedForVersion { domain: Domain, version: NwmVersion },

    /// Latest-available mode requested for a configuration where it is undefined
    #[error("Latest-available mode is undefined for forecast configuration '{configuration}'")]
    InvalidLatestQuery { configuration: Configuration },

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Error {
    /// Create a configuration-not-supported error
    pub fn configuration_not_supported(configuration: Configuration, domain: Domain) -> Self {
        Self::ConfigurationNotSupported {
            configuration,
            domain,
        }
    }

    /// Create a domain-not-supported-for-version error
    pub fn domain_not_supported(domain: Domain, version: NwmVersion) -> Self {
        Self::DomainNotSupportedForVersion { domain, version }
    }

    /// Create an invalid-latest-query error
    pub fn invalid_latest_query(configuration: Configuration) -> Self {
        Self::InvalidLatestQuery { configuration }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}
