// src/main.rs
use actix_web::{middleware, App, HttpServer};
use env_logger::Env;
use log::info;

use crystal_site::config::Config;
use crystal_site::handlers;
use crystal_site::tls;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger only once at the start
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::from_env();

    // TLS is mandatory; refusing to serve plaintext is the whole point.
    let rustls_config = match tls::load_rustls_config(&config.tls_cert_path, &config.tls_key_path)
    {
        Ok(c) => c,
        Err(e) => {
            log::error!("HTTPS server cannot start: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("TLS setup failed: {}", e),
            ));
        }
    };

    let bind = format!("{}:{}", config.bind_address, config.port);
    info!("Starting HTTPS server on {}", bind);

    let app_config = config.clone();
    HttpServer::new(move || {
        let app_config = app_config.clone();
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(handlers::security_headers())
            .wrap(handlers::error_pages())
            .configure(|cfg| handlers::routes(cfg, &app_config))
    })
    .bind_rustls_0_23(&bind, rustls_config)?
    .run()
    .await
}
