//! HTTP handlers for the contact endpoints.
//!
//! Handlers map requests onto [`ContactService`] calls and pick status codes:
//! 200 for success, 204 for an empty listing or search, 400 for rejected input.

use crate::error::{ApiError, ApiResult};
use crate::models::Contact;
use crate::services::ContactService;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Shared handler state.
pub type ContactState = Arc<dyn ContactService>;

/// Body of `POST /contacts`.
///
/// Missing and `null` fields both become empty strings, so the repository
/// rejects them as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl From<CreateContactRequest> for Contact {
    fn from(request: CreateContactRequest) -> Self {
        Contact::new(
            request.name.unwrap_or_default(),
            request.email.unwrap_or_default(),
            request.phone_number.unwrap_or_default(),
        )
    }
}

/// Query parameters for `POST /contacts/remove`.
#[derive(Debug, Deserialize)]
pub struct RemoveParams {
    pub num: String,
}

/// Query parameters for `GET /contacts/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "type")]
    pub search_type: String,
    pub key: String,
}

/// Field a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Phone,
    Name,
}

impl FromStr for SearchType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone" => Ok(SearchType::Phone),
            "name" => Ok(SearchType::Name),
            other => Err(ApiError::InvalidSearchType(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Routes for the contact endpoints.
pub fn contact_routes(service: ContactState) -> Router {
    Router::new()
        .route("/contacts", get(list_contacts).post(add_contact))
        .route("/contacts/remove", post(remove_contact))
        .route("/contacts/search", get(search_contacts))
        .with_state(service)
}

/// Liveness probe.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn add_contact(
    State(service): State<ContactState>,
    payload: Result<Json<CreateContactRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = payload?;
    let contact = Contact::from(request);
    debug!(%contact, "Add contact request");
    service
        .add_contact(contact.name, contact.email, contact.phone_number)
        .await?;
    Ok(StatusCode::OK)
}

// Always 200 once the number is well formed, whether or not anything matched.
async fn remove_contact(
    State(service): State<ContactState>,
    params: Result<Query<RemoveParams>, QueryRejection>,
) -> ApiResult<StatusCode> {
    let Query(params) = params?;
    debug!(phone_number = %params.num, "Remove contact request");
    service.remove_contact_by_phone_number(&params.num).await?;
    Ok(StatusCode::OK)
}

async fn list_contacts(State(service): State<ContactState>) -> Response {
    debug!("List contacts request");
    contacts_response(service.get_contacts().await)
}

async fn search_contacts(
    State(service): State<ContactState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    debug!(search_type = %params.search_type, key = %params.key, "Search contacts request");

    let contacts = match params.search_type.parse::<SearchType>()? {
        SearchType::Phone => service.get_contacts_by_phone_number(&params.key).await?,
        SearchType::Name => service.get_contacts_by_name(&params.key).await?,
    };

    if contacts.is_empty() {
        debug!(search_type = %params.search_type, key = %params.key, "No contacts found");
    }
    Ok(contacts_response(contacts))
}

fn contacts_response(contacts: Vec<Contact>) -> Response {
    if contacts.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::OK, Json(contacts)).into_response()
    }
}
