use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use si_api::{create_app, AppState};
use si_core::repositories::{BookingRepository, CommentRepository, ItemRepository, MemoryRepositories, UserRepository};
use si_infra::{DatabasePool, MySqlRepositories};
use si_shared::{AppConfig, Environment, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Environment-specific file first; dotenvy never overrides a variable
    // that is already set
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config);

    info!(
        "Starting ShareIt API Server ({:?}, storage: {})",
        config.environment, config.storage.backend
    );

    match config.storage.backend {
        StorageBackend::MySql => {
            let pool = DatabasePool::new(config.database.clone()).await?;
            if config.database.run_migrations {
                pool.run_migrations().await?;
            }

            let repos = MySqlRepositories::new(pool.get_pool().clone());
            let state = AppState::new(repos.users, repos.items, repos.bookings, repos.comments, "mysql");
            serve(state, &config).await?;

            pool.close().await;
        }
        StorageBackend::Memory => {
            let repos = MemoryRepositories::new();
            let state = AppState::new(repos.users, repos.items, repos.bookings, repos.comments, "memory");
            serve(state, &config).await?;
        }
    }

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured level, with SQL statement
/// logging muted unless enabled
fn init_logging(config: &AppConfig) {
    let default_filter = if config.logging.log_statements {
        config.logging.level.clone()
    } else {
        format!("{},sqlx=warn", config.logging.level)
    };

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));
}

async fn serve<U, I, B, C>(state: AppState<U, I, B, C>, config: &AppConfig) -> std::io::Result<()>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let state = web::Data::new(state);
    let app_config = Arc::new(config.clone());

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
