//! Admin REST namespace.
//!
//! Everything under `/admin` sits behind the shared-secret middleware in
//! [`crate::auth`]. Handlers translate between the wire shapes here and the
//! domain services from `utsav-admin`.

use utsav_admin::domain::DataSource;

pub(crate) mod analytics;
pub(crate) mod contacts;
pub(crate) mod orders;
pub(crate) mod reviews;
pub(crate) mod settings;

/// Wire label for where a read came from.
pub(crate) fn source_label(source: DataSource) -> String {
    match source {
        DataSource::Live => "live".to_owned(),
        DataSource::Fallback => "fallback".to_owned(),
    }
}
