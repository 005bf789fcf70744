use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderValue, Request, Response},
    middleware::Next,
};
use tokio::time::Instant;
use tracing::{error, info};

use crate::{
    build_info::{AXUM_VERSION, BUILD_TIME, RUST_VERSION},
    init::state::ServerState,
};

pub async fn log_middleware(
    State(state): State<Arc<ServerState>>,
    ConnectInfo(info): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();

    state.add_responses_handled();

    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let client_ip: String = match request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        Some(val) => val.to_owned(),
        None => info.ip().to_string(),
    };

    let client_ip: Option<IpAddr> = match client_ip.parse() {
        Ok(ip) => Some(ip),
        Err(e) => {
            error!(error = ?e, client_ip, "Could not parse IP address into IpAddr");
            None
        }
    };

    info!(kind = %"RECV", method = %method, path = %path, client_ip = ?client_ip);

    let mut response = next.run(request).await;

    let duration = start.elapsed();
    let headers = response.headers_mut();
    headers.insert("x-server-built-time", HeaderValue::from_static(BUILD_TIME));
    headers.insert("x-server-name", HeaderValue::from_static(AXUM_VERSION));
    headers.insert(
        "x-server-rust-version",
        HeaderValue::from_static(RUST_VERSION),
    );

    if response.status().is_success() {
        info!(kind = %"RESP", method = %method, path = %path, client_ip = ?client_ip, duration = ?duration);
    } else {
        error!(kind = %"ERSP", method = %method, path = %path, client_ip = ?client_ip, status = %response.status(), duration = ?duration);
    }

    response
}
