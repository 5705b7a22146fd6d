//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::registration_handler;
use crate::domain::RegistrationRequest;
use crate::errors::ErrorResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for SkillX Accounts
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SkillX Accounts",
        version = "0.1.0",
        description = "User account registration",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(registration_handler::register),
    components(schemas(RegistrationRequest, MessageResponse, ErrorResponse)),
    tags(
        (name = "Registration", description = "User account registration")
    )
)]
pub struct ApiDoc;
