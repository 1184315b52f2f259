//! HTTP server setup module.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{api, middleware::auth::Authentication, model::common::AppState};

/// Creates and binds the HTTP/JSON server.
///
/// All routes live under `/v1` and mirror the gRPC surface.
pub fn http_server(
    app_state: Arc<AppState>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Authentication)
            .app_data(web::Data::from(app_state.clone()))
            .service(api::v1::routes())
    })
    .bind((address, port))?
    .run())
}
