use std::sync::Arc;

use clap::Parser;
use nutriplan_api::{
    application::http::server::http_server::{router, state},
    args::Args,
    telemetry::init_tracing,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_tracing(&args.log)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let app = router(state(args))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
