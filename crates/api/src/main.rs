use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tiendaops_observability::init();

    let base_url = std::env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
    let service_key = std::env::var("SUPABASE_SERVICE_ROLE_KEY")
        .context("SUPABASE_SERVICE_ROLE_KEY must be set")?;
    let config = tiendaops_db::DbConfig::new(base_url, service_key);

    let app = tiendaops_api::app::build_app(config);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
