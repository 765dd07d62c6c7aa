//! Liveness endpoint for the hosting environment.
//!
//! `GET` on any path answers `200 OK` with `Content-Type: text/html` and body `OK`; any other
//! method answers `501 Not Implemented`.

use std::convert::Infallible;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::server::conn::AddrIncoming;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::lifecycle::Service;

pub const HEALTH_BODY: &str = "OK";

/// Health server with its socket already bound.
pub struct HealthServer {
    incoming: AddrIncoming,
    local_addr: SocketAddr,
}

impl HealthServer {
    /// Binds the listener. Fails when the port is taken.
    pub fn bind(addr: SocketAddr) -> Result<Self> {
        let incoming = AddrIncoming::bind(&addr)
            .with_context(|| format!("Failed to bind health server on {}", addr))?;
        let local_addr = incoming.local_addr();
        Ok(Self {
            incoming,
            local_addr,
        })
    }

    /// Binds `0.0.0.0:<port>`.
    pub fn bind_port(port: u16) -> Result<Self> {
        Self::bind(SocketAddr::from(([0, 0, 0, 0], port)))
    }

    /// Bound address; the real port when bound to port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

async fn handle_request(req: Request<Body>) -> std::result::Result<Response<Body>, Infallible> {
    debug!(method = %req.method(), path = %req.uri().path(), "Health request");
    if *req.method() == Method::GET {
        let mut response = Response::new(Body::from(HEALTH_BODY));
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        Ok(response)
    } else {
        let mut response = Response::new(Body::from("Not Implemented"));
        *response.status_mut() = StatusCode::NOT_IMPLEMENTED;
        Ok(response)
    }
}

#[async_trait]
impl Service for HealthServer {
    fn name(&self) -> &'static str {
        "health"
    }

    async fn run(self: Box<Self>, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        let make_svc =
            make_service_fn(|_conn| async { Ok::<_, Infallible>(service_fn(handle_request)) });

        info!(addr = %self.local_addr, "Health check server listening");

        Server::builder(self.incoming)
            .serve(make_svc)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await
            .context("Health server failed")?;

        info!("Health check server stopped");
        Ok(())
    }
}
