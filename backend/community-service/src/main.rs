use actix_web::{web, App, HttpServer};
use anyhow::Context;
use community_service::{handlers, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Community Service
///
/// Serves the community feed over HTTP from in-memory state seeded with
/// mock data.
///
/// # Routes
///
/// - `/api/v1/feed` - Stateless feed pages; `/api/v1/feed/session/*` per-viewer sessions
/// - `/api/v1/posts/*` - Create, read and delete posts; comments and votes per post
/// - `/api/v1/comments/*` - Read comments and vote on them
/// - `/api/v1/communities`, `/api/v1/hashtags` - Reference data
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Starting community-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        vote_latency_ms = config.latency.vote_ms,
        submit_latency_ms = config.latency.submit_ms,
        today_window_start = %config.feed.reference_window.start,
        track_hashtag_searches = config.feed.track_hashtag_searches,
        id_strategy = ?config.feed.id_strategy,
        "Feed configuration loaded"
    );

    let state = web::Data::new(AppState::from_config(&config));
    let bind_address = config.bind_address();
    tracing::info!("Starting HTTP server at {}", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    tokio::select! {
        result = &mut server_task => {
            result
                .context("HTTP server task failed")?
                .context("HTTP server error")?;
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            server_task
                .await
                .context("HTTP server task failed")?
                .context("HTTP server error")?;
        }
    }

    tracing::info!("community-service stopped");
    Ok(())
}
