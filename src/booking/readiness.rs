//! Readiness signal of the embedded scheduling widget.
//!
//! The widget reports that it has loaded through a cross-origin message.
//! `ReadinessPort` abstracts that signal so the flow can race it against its
//! fallback timer without depending on where the message comes from.

use crate::booking::SchedulingWidget;
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tokio::sync::watch;
use tracing::debug;

/// Source of the "widget is ready" signal.
pub trait ReadinessPort {
    /// Resolves once the widget is ready. May never resolve.
    fn wait_ready(&mut self) -> impl Future<Output = ()> + Send;
}

/// A cross-origin message as received by the embedding page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetMessage {
    pub origin: String,
    pub event: String,
}

/// Readiness from a stream of window messages.
///
/// Messages from other origins or with other event names are ignored. If the
/// stream ends without the readiness event, the port never resolves.
pub struct MessageListener<S> {
    messages: S,
    origin: String,
    ready_event: String,
}

impl<S> MessageListener<S>
where
    S: Stream<Item = WidgetMessage> + Unpin + Send,
{
    pub fn new(messages: S, widget: &SchedulingWidget) -> Self {
        Self {
            messages,
            origin: widget.origin.clone(),
            ready_event: widget.ready_event.clone(),
        }
    }
}

impl<S> ReadinessPort for MessageListener<S>
where
    S: Stream<Item = WidgetMessage> + Unpin + Send,
{
    async fn wait_ready(&mut self) {
        while let Some(message) = self.messages.next().await {
            if message.origin == self.origin && message.event == self.ready_event {
                debug!("Scheduling widget reported ready");
                return;
            }
            debug!(
                "Ignoring message '{}' from {}",
                message.event, message.origin
            );
        }

        debug!("Widget message stream closed before readiness");
        std::future::pending::<()>().await
    }
}

/// Readiness triggered by hand, for tests and for hosts that learn about
/// readiness some other way.
pub struct ManualReadiness {
    ready: watch::Receiver<bool>,
}

/// Trigger half of [`ManualReadiness`].
#[derive(Clone)]
pub struct ManualTrigger {
    ready: watch::Sender<bool>,
}

impl ManualReadiness {
    pub fn new() -> (ManualReadiness, ManualTrigger) {
        let (sender, receiver) = watch::channel(false);
        (
            ManualReadiness { ready: receiver },
            ManualTrigger { ready: sender },
        )
    }
}

impl ManualTrigger {
    /// Signal readiness. Takes effect immediately, before any await point.
    pub fn fire(&self) {
        self.ready.send_replace(true);
    }
}

impl ReadinessPort for ManualReadiness {
    async fn wait_ready(&mut self) {
        let fired = self.ready.wait_for(|ready| *ready).await.is_ok();
        if !fired {
            // Trigger dropped without firing.
            std::future::pending::<()>().await
        }
    }
}
