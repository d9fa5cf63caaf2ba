//! Main entry point for the shelter registry service.
//! Configures logging, the SQLite pool, CSRF keys, and the REST routes.
#![recursion_limit = "256"]

use csrf::AesGcmCsrfProtection;
use ntex::web;
use ntex_cors::Cors;
use openssl::ssl::{SslAcceptor, SslFiletype, SslMethod};

use shelter_registry::{config::APP_CONFIG, logger, repo, rest, utils};

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    // Initialize the database connection pool and make sure the schema exists
    let sqlite_repo = repo::sqlite::SqlxShelterRepo {
        db_pool: utils::setup_sqlite_db_pool(APP_CONFIG.is_prod()).await?,
    };
    sqlite_repo.apply_schema().await?;

    // CSRF key is derived from the configured password and salt using Argon2
    let csrf_key = utils::build_csrf_key(&APP_CONFIG.csrf_pass, &APP_CONFIG.csrf_salt)?;

    configure_and_run_server(csrf_key, sqlite_repo).await
}

/// Configures SSL acceptor for production environments
fn setup_ssl_acceptor() -> anyhow::Result<openssl::ssl::SslAcceptorBuilder> {
    let mut ssl_acceptor = SslAcceptor::mozilla_intermediate(SslMethod::tls_server())
        .map_err(|e| anyhow::anyhow!("Failed to create SSL acceptor: {}", e))?;

    ssl_acceptor
        .set_private_key_file(&APP_CONFIG.private_key_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load private key from {}: {}",
                APP_CONFIG.private_key_path,
                e
            )
        })?;

    ssl_acceptor
        .set_certificate_file(&APP_CONFIG.certificate_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load certificate from {}: {}",
                APP_CONFIG.certificate_path,
                e
            )
        })?;

    Ok(ssl_acceptor)
}

/// Creates application state from the provided services
fn create_app_state(
    csrf_key: [u8; 32],
    sqlite_repo: repo::sqlite::SqlxShelterRepo,
) -> rest::AppState {
    rest::AppState {
        csrf_protec: AesGcmCsrfProtection::from_key(csrf_key),
        repo: Box::new(sqlite_repo),
    }
}

/// Configures and starts the web server with appropriate SSL settings
async fn configure_and_run_server(
    csrf_key: [u8; 32],
    sqlite_repo: repo::sqlite::SqlxShelterRepo,
) -> anyhow::Result<()> {
    let server_addr = (
        "0.0.0.0",
        u16::try_from(APP_CONFIG.web_server_port).unwrap_or(443),
    );

    let server = web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec![
                        "GET", "HEAD", "POST", "OPTIONS", "PUT", "PATCH", "DELETE",
                    ])
                    .allowed_origin("http://localhost:8080")
                    .allowed_origin(&APP_CONFIG.base_url())
                    .finish(),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(csrf_key, sqlite_repo.clone()))
            .configure(rest::routes::session)
            .configure(rest::routes::core)
            .configure(rest::routes::catalog)
            .configure(rest::routes::schedules)
    });

    let bound_server = if APP_CONFIG.is_prod() {
        let ssl_acceptor = setup_ssl_acceptor()?;
        server.bind_openssl(server_addr, ssl_acceptor)?
    } else {
        server.bind(server_addr)?
    };

    bound_server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
