//! Core library for the `wu` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Records decoded from Weather Underground responses
//! - Pure report formatters and the helpers they derive values with
//! - The provider that fetches one record per request
//!
//! It is used by `wu-cli`, but the formatters can be reused on their own.

pub mod category;
pub mod config;
pub mod derive;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;
pub mod station;

pub use category::Category;
pub use config::{Config, Settings};
pub use error::FormatError;
pub use model::{Record, WeatherRequest};
pub use provider::{WeatherProvider, provider_from_settings};
pub use report::{RenderContext, Report, Units};
