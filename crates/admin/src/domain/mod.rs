//! Admin domain services.

use serde::{Deserialize, Serialize};

pub mod analytics;
pub mod contacts;
pub mod orders;
pub mod reviews;
pub mod settings;

/// Where a read came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// The backend API answered.
    Live,

    /// The backend was unreachable; this is the bundled sample view.
    Fallback,
}

/// A read result tagged with its origin, so the console can show "displaying
/// cached data" instead of failing when the backend is down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sourced<T> {
    /// The data itself.
    pub data: T,

    /// Where it came from.
    pub source: DataSource,
}

impl<T> Sourced<T> {
    /// Wrap data fetched from the backend.
    pub fn live(data: T) -> Self {
        Self {
            data,
            source: DataSource::Live,
        }
    }

    /// Wrap bundled sample data standing in for an unreachable backend.
    pub fn fallback(data: T) -> Self {
        Self {
            data,
            source: DataSource::Fallback,
        }
    }

    /// Whether this is sample data rather than a live read.
    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}
