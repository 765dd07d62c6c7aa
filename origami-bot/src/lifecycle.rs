//! Long-running services under one shutdown broadcast.
//!
//! [`ServiceLifecycle::run`] spawns every [`Service`], waits for the first of: the external signal
//! future, a [`ShutdownHandle::shutdown`] call, or any service exiting. It then broadcasts shutdown
//! and gives services the grace period to return before aborting the rest.

use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::task::{JoinError, JoinSet};
use tracing::{error, info, warn};

/// A task owned by the lifecycle. `run` must return once `shutdown` fires.
#[async_trait]
pub trait Service: Send + 'static {
    fn name(&self) -> &'static str;
    async fn run(self: Box<Self>, shutdown: broadcast::Receiver<()>) -> Result<()>;
}

/// Requests shutdown from anywhere (tests, admin paths).
#[derive(Clone)]
pub struct ShutdownHandle {
    tx: broadcast::Sender<()>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        let _ = self.tx.send(());
    }
}

pub struct ServiceLifecycle {
    grace: Duration,
    services: Vec<Box<dyn Service>>,
    shutdown_tx: broadcast::Sender<()>,
    shutdown_rx: broadcast::Receiver<()>,
}

type ServiceExit = (&'static str, Result<()>);

impl ServiceLifecycle {
    pub fn new(grace: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = broadcast::channel(4);
        Self {
            grace,
            services: Vec::new(),
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn with_service(mut self, service: impl Service) -> Self {
        self.services.push(Box::new(service));
        self
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            tx: self.shutdown_tx.clone(),
        }
    }

    /// Runs until shutdown; returns the first service error, if any.
    pub async fn run<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let ServiceLifecycle {
            grace,
            services,
            shutdown_tx,
            mut shutdown_rx,
        } = self;

        let mut tasks: JoinSet<ServiceExit> = JoinSet::new();
        for service in services {
            let name = service.name();
            let rx = shutdown_tx.subscribe();
            info!(service = name, "Starting service");
            tasks.spawn(async move { (name, service.run(rx).await) });
        }

        let mut first_error: Option<anyhow::Error> = None;

        tokio::select! {
            _ = signal => info!("Shutdown signal received"),
            _ = shutdown_rx.recv() => info!("Shutdown requested"),
            Some(exit) = tasks.join_next() => {
                warn!("Service exited before shutdown");
                record_exit(exit, &mut first_error);
            }
        }

        let _ = shutdown_tx.send(());

        let drained = tokio::time::timeout(grace, async {
            while let Some(exit) = tasks.join_next().await {
                record_exit(exit, &mut first_error);
            }
        })
        .await;

        if drained.is_err() {
            warn!(
                grace_secs = grace.as_secs_f64(),
                remaining = tasks.len(),
                "Grace period elapsed, aborting services"
            );
            tasks.abort_all();
            while let Some(exit) = tasks.join_next().await {
                record_exit(exit, &mut first_error);
            }
        }

        info!("All services stopped");
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn record_exit(
    exit: std::result::Result<ServiceExit, JoinError>,
    first_error: &mut Option<anyhow::Error>,
) {
    match exit {
        Ok((name, Ok(()))) => info!(service = name, "Service stopped"),
        Ok((name, Err(e))) => {
            error!(service = name, error = %e, "Service failed");
            first_error.get_or_insert(e.context(format!("service {} failed", name)));
        }
        Err(e) if e.is_cancelled() => warn!("Service aborted"),
        Err(e) => {
            error!(error = %e, "Service panicked");
            first_error.get_or_insert(anyhow!("service task panicked: {}", e));
        }
    }
}

/// Resolves on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
