use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::routes::main_router::build_router;

use super::config::ServerConfig;
use super::state::ServerState;

pub async fn server_init_proc(start: tokio::time::Instant) -> anyhow::Result<()> {
    // .env is optional; deployed environments configure through real env vars
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    let state = Arc::new(
        ServerState::builder()
            .app_name_version(format!(
                "{} v{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .server_start_time(start)
            .build()?,
    );

    let listener = tokio::net::TcpListener::bind(config.to_socket_addr()).await?;

    info!(
        app = state.get_app_name_version(),
        environment = state.get_deployment_environment().as_str(),
        addr = %config.to_socket_addr(),
        startup = ?start.elapsed(),
        "Backend server starting..."
    );

    axum::serve(
        listener,
        build_router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
