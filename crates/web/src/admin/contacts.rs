//! Admin contact endpoints.

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utsav_admin::domain::contacts::{
    ContactsServiceError,
    models::{Contact, NewContact},
};
use uuid::Uuid;

use crate::{admin::source_label, extensions::*, state::State};

/// One contact on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactResponse {
    /// Contact UUID.
    pub id: Uuid,

    /// Name.
    pub name: String,

    /// Phone number.
    pub phone: String,

    /// Email, when known.
    pub email: Option<String>,

    /// Relationship bucket.
    pub relationship: String,

    /// Free-form notes.
    pub notes: Option<String>,

    /// When the contact was added (RFC 3339).
    pub created_at: String,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            phone: contact.phone,
            email: contact.email,
            relationship: contact.relationship,
            notes: contact.notes,
            created_at: contact.created_at.to_string(),
        }
    }
}

/// Contact list on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactsResponse {
    /// `live` or `fallback`.
    pub source: String,

    /// The contacts.
    pub contacts: Vec<ContactResponse>,
}

/// New contact request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateContactRequest {
    /// Name.
    pub name: String,

    /// Phone number.
    pub phone: String,

    /// Email, when known.
    pub email: Option<String>,

    /// Relationship bucket; defaults to `customer`.
    pub relationship: Option<String>,

    /// Free-form notes.
    pub notes: Option<String>,
}

impl From<CreateContactRequest> for NewContact {
    fn from(request: CreateContactRequest) -> Self {
        Self {
            name: request.name,
            phone: request.phone,
            email: request.email,
            relationship: request.relationship.unwrap_or_else(|| "customer".to_owned()),
            notes: request.notes,
        }
    }
}

fn into_status_error(error: &ContactsServiceError) -> StatusError {
    match error {
        ContactsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Contact name and phone are required")
        }
        ContactsServiceError::Api(source) => {
            error!("contacts backend error: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Contact Index Handler
///
/// Returns all contacts.
#[endpoint(tags("admin-contacts"), summary = "List Contacts")]
pub(crate) async fn index_handler(
    depot: &mut Depot,
) -> Result<Json<ContactsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let contacts = state
        .admin
        .contacts
        .list_contacts()
        .await
        .map_err(|error| into_status_error(&error))?;

    Ok(Json(ContactsResponse {
        source: source_label(contacts.source),
        contacts: contacts.data.into_iter().map(Into::into).collect(),
    }))
}

/// Create Contact Handler
#[endpoint(tags("admin-contacts"), summary = "Create Contact")]
pub(crate) async fn create_handler(
    json: JsonBody<CreateContactRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ContactResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let contact = state
        .admin
        .contacts
        .add_contact(json.into_inner().into())
        .await
        .map_err(|error| into_status_error(&error))?;

    res.add_header(LOCATION, format!("/admin/contacts/{}", contact.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(contact.into()))
}
