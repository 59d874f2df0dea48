use std::sync::Arc;

use tracing::{debug, info};

use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web::Data};
use tracing_actix_web::TracingLogger;

use services::connection::SeaOrmConnector;

use sandbox_server::app_state::AppState;
use sandbox_server::error::Error;
use sandbox_server::middleware::open_connection;
use sandbox_server::routes;
use sandbox_server::settings::Settings;
use sandbox_server::utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = Settings::new()
        .map_err(|e| std::io::Error::other(Error::Configuration(e)))?;

    utils::init_tracing(&settings.server.log_level);

    debug!("{:?}", settings);

    let app_state = AppState::new(&settings.database, Arc::new(SeaOrmConnector));

    info!(
        host = %settings.server.host,
        port = settings.server.port,
        dialect = ?settings.database.dialect,
        "starting server"
    );

    HttpServer::new(move || {
        App::new()
            .configure(routes::configure)
            .app_data(Data::new(app_state.clone()))
            .wrap(from_fn(open_connection))
            .wrap(TracingLogger::default())
    })
    .bind((settings.server.host.as_str(), settings.server.port))?
    .run()
    .await
}
