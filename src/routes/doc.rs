use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        accounts::{LoginRequest, RegisterRequest},
        catalog::CatalogUploadForm,
    },
    models::{AccountSummary, CatalogEntry, ShowcaseEntry},
    response::{ErrorBody, LoginResponse, MessageResponse},
    routes::{accounts, admin, catalog, health},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::list_fabrics,
        catalog::list_showcase,
        admin::create_fabric,
        accounts::register,
        accounts::login
    ),
    components(
        schemas(
            CatalogEntry,
            ShowcaseEntry,
            AccountSummary,
            CatalogUploadForm,
            RegisterRequest,
            LoginRequest,
            MessageResponse,
            LoginResponse,
            ErrorBody,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Public fabric listings"),
        (name = "Admin", description = "Fabric ingestion"),
        (name = "Accounts", description = "Registration and login"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
