use actix_web::HttpServer;
use actix_web::web::Data;
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_appender::rolling;

use flamecraft::build_app;
use flamecraft::config::Config;
use flamecraft::store::{EmployeeStore, InMemoryStore, seed};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(
        addr = %config.server_addr,
        max_body_bytes = config.max_body_bytes,
        "Server starting..."
    );

    let memory_store = Arc::new(match &config.seed_file {
        Some(_) => InMemoryStore::pending(),
        None => InMemoryStore::new(),
    });

    if let Some(seed_file) = config.seed_file.clone() {
        seed::spawn_warmup(Arc::clone(&memory_store), seed_file);
    }

    let store: Data<dyn EmployeeStore> = Data::from(memory_store as Arc<dyn EmployeeStore>);
    let config_data = Data::new(config.clone());

    let mut server = HttpServer::new(move || build_app(store.clone(), config_data.clone()));
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind(&config.server_addr)
        .with_context(|| format!("failed to bind {}", config.server_addr))?
        .run()
        .await
        .context("HTTP server terminated with an error")
}
