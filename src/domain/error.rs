//! Error types for the portfolio page runtime.
//!
//! This module defines the centralized error type [`PortfolioError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only loading configuration and themes can fail. User input problems are
//! reported as [`ValidationResult`](crate::domain::ValidationResult) values and
//! missing DOM elements are silent no-ops, so neither shows up here.

use thiserror::Error;

/// The main error type for portfolio page operations.
///
/// # Examples
///
/// ```
/// use portfolio_ui::PortfolioError;
///
/// fn check_threshold(threshold: f64) -> Result<(), PortfolioError> {
///     if !(0.0..=1.0).contains(&threshold) {
///         return Err(PortfolioError::Config(format!("threshold {threshold} out of range")));
///     }
///     Ok(())
/// }
///
/// assert!(check_threshold(1.5).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Configuration is invalid.
    ///
    /// Occurs when a configuration value is present but outside its legal range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a configuration or theme file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration or theme file is not valid TOML for its schema.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme name is unknown or a theme value is malformed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for portfolio page operations.
pub type Result<T> = std::result::Result<T, PortfolioError>;
