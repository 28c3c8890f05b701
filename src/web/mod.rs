mod webhook;

use axum::{
    body::Body,
    extract::MatchedPath,
    routing::{get, post},
    Router,
};
use hyper::Request;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use self::webhook::{health_check, receive_update};
use crate::{bot::dispatcher::Dispatcher, configuration::AppSettings};

#[derive(Clone)]
struct AppState {
    dispatcher: Arc<Dispatcher>,
}

pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    let tracing_layer = TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        let method = req.method();
        let uri = req.uri();
        let matched_path = req.extensions().get::<MatchedPath>().map(|p| p.as_str());

        tracing::debug_span!("http-request", %method, %uri, matched_path, request_id = %Uuid::new_v4())
    });

    Router::new()
        .route("/webhook", post(receive_update))
        .route("/healthcheck", get(health_check))
        .route("/", get(health_check))
        .layer(ServiceBuilder::new().layer(tracing_layer))
        .with_state(AppState { dispatcher })
}

pub struct Application {
    listening_addr: SocketAddr,
    server: Server,
}

impl Application {
    pub async fn build(
        settings: &AppSettings,
        dispatcher: Arc<Dispatcher>,
    ) -> Result<Application, anyhow::Error> {
        let listener = TcpListener::bind(settings.socket_addr()).await?;
        Ok(Self {
            listening_addr: listener.local_addr()?,
            server: Server::new(listener, router(dispatcher)),
        })
    }
    pub async fn serve_forever(self) -> Result<(), std::io::Error> {
        info!("Web server is listening on {}", self.listening_addr);
        self.server.serve().await
    }
    pub fn listening_addr(&self) -> SocketAddr {
        self.listening_addr
    }
}

struct Server {
    listener: TcpListener,
    app: Router,
}
impl Server {
    pub fn new(listener: TcpListener, app: Router) -> Self {
        Self { listener, app }
    }

    pub async fn serve(self) -> Result<(), std::io::Error> {
        axum::serve(self.listener, self.app).await
    }
}
