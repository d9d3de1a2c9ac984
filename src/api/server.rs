//! Server lifecycle.
//!
//! Binds the listener, mounts [`api_router`], and runs until the
//! process receives Ctrl+C or SIGTERM. In-flight requests finish
//! before the server exits.

use tokio::net::TcpListener;
use tokio::signal;

use crate::api::router::api_router;
use crate::api::types::ApiContext;

/// Serve the API on `0.0.0.0:{port}` until shutdown.
pub async fn serve(ctx: ApiContext, port: u16) -> Result<(), String> {
    let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| format!("Failed to bind port {port}: {e}"))?;

    serve_on(ctx, listener).await
}

/// Serve on an already-bound listener.
///
/// Factored out of [`serve`] so tests can bind an ephemeral port and
/// learn the address before the server starts.
async fn serve_on(ctx: ApiContext, listener: TcpListener) -> Result<(), String> {
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to read server address: {e}"))?;

    tracing::info!(%addr, "Server listening");

    axum::serve(listener, api_router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {e}"))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    async fn spawn_server() -> (u16, tokio::task::JoinHandle<()>, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::open(tmp.path().join("test.db")).unwrap();
        let ctx = ApiContext::new(store, tmp.path().join("uploads"));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = tokio::spawn(async move {
            let _ = serve_on(ctx, listener).await;
        });

        (port, handle, tmp)
    }

    #[tokio::test]
    async fn health_answers_over_http() {
        let (port, server, _tmp) = spawn_server().await;

        let resp = reqwest::get(format!("http://127.0.0.1:{port}/health"))
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["status"], "ok");

        // Unknown routes fall through to axum's 404
        let resp = reqwest::get(format!("http://127.0.0.1:{port}/nonexistent"))
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.abort();
    }

    #[tokio::test]
    async fn booking_round_trip_over_http() {
        let (port, server, _tmp) = spawn_server().await;
        let client = reqwest::Client::new();

        let body = serde_json::json!({
            "userEmail": "a@x.com",
            "selectedDoctor": "Dr. Lee",
            "appointmentDate": "2024-05-01",
            "appointmentTime": "10:00",
            "meetLink": "https://meet.example/abc"
        });

        let resp = client
            .post(format!("http://127.0.0.1:{port}/appointments"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

        let resp = client
            .post(format!("http://127.0.0.1:{port}/appointments"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["error"]["code"], "CONFLICT");

        server.abort();
    }
}
