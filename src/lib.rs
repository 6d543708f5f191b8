use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Logger, NormalizePath, from_fn};
use actix_web::web::Data;
use actix_web::{App, Error};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod api;
pub mod config;
pub mod docs;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
pub mod utils;

use crate::api::admission::size_guard;
use crate::config::Config;
use crate::docs::ApiDoc;
use crate::store::EmployeeStore;

/// Assemble the application: admission guard, shared state and routes.
pub fn build_app(
    store: Data<dyn EmployeeStore>,
    config: Data<Config>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(from_fn(size_guard))
        .wrap(NormalizePath::trim())
        .wrap(Logger::default())
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard so JS/CSS assets resolve
                .url("/api-doc/openapi.json", ApiDoc::openapi()),
        )
        .app_data(store)
        .app_data(config)
        .configure(routes::configure)
}
