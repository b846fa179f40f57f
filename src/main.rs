use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostledger::config::Config;
use hostledger::modules::bookings::controllers::booking_controller;
use hostledger::modules::bookings::repositories::BookingRepository;
use hostledger::modules::health::controllers::health_controller;
use hostledger::modules::settings::controllers::settings_controller;
use hostledger::modules::settings::repositories::SettingsRepository;
use hostledger::modules::stats::controllers::stats_controller;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hostledger=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting HostLedger");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // In-memory stores shared across workers
    let bookings = BookingRepository::new();
    let settings = SettingsRepository::new(config.initial_settings());

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            // The dashboard is a browser SPA served elsewhere
            .wrap(Cors::permissive())
            .app_data(web::Data::new(bookings.clone()))
            .app_data(web::Data::new(settings.clone()))
            .configure(booking_controller::configure)
            .configure(stats_controller::configure)
            .configure(settings_controller::configure)
            .configure(health_controller::configure)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
