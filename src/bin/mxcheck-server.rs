use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mxcheck::http;
use mxcheck::mx::{self, LookupMx};

#[derive(Parser)]
#[command(name = "mxcheck-server")]
struct Cli {
    /// address to bind, host:port
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// worker threads
    #[arg(long, default_value_t = 2)]
    workers: usize,
}

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let resolver: Arc<dyn LookupMx> =
        Arc::new(mx::system_resolver().context("initialize system resolver")?);

    info!(bind = %cli.bind, "mxcheck listening");

    HttpServer::new(move || {
        App::new()
            .wrap(http::cors())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::from(resolver.clone()))
            .configure(http::configure_routes)
    })
    .bind(&cli.bind)
    .with_context(|| format!("bind {}", cli.bind))?
    .workers(cli.workers)
    .run()
    .await
    .context("server run")
}
