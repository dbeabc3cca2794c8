//! Tracing layer that feeds the GUI status bar
//!
//! Sends INFO-and-above log messages to a channel; the GUI drains it on each
//! update and shows the latest line at the bottom of the window.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Global sender for status messages
static STATUS_SENDER: OnceLock<Sender<String>> = OnceLock::new();

/// Global receiver for status messages (taken once by the GUI)
static STATUS_RECEIVER: OnceLock<std::sync::Mutex<Option<Receiver<String>>>> = OnceLock::new();

/// Initialize the status channel and return the Layer
///
/// Call once during application startup and add the Layer to the tracing
/// subscriber stack.
pub fn init_status_layer() -> StatusLayer {
    let (sender, receiver) = mpsc::channel();

    STATUS_SENDER
        .set(sender)
        .expect("status layer already initialized");
    STATUS_RECEIVER
        .set(std::sync::Mutex::new(Some(receiver)))
        .expect("status receiver already set");

    StatusLayer
}

/// Take the status receiver (can only be called once)
///
/// Returns None if already taken or not initialized.
pub fn take_status_receiver() -> Option<Receiver<String>> {
    STATUS_RECEIVER.get()?.lock().ok()?.take()
}

/// Tracing layer that captures log messages for the status bar
pub struct StatusLayer;

impl<S: Subscriber> Layer<S> for StatusLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // DEBUG and below stay in the log file only
        let level = *event.metadata().level();
        if level > Level::INFO {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if let Some(message) = visitor.message {
            let line = if level == Level::INFO {
                message
            } else {
                format!("{}: {}", level.as_str().to_lowercase(), message)
            };
            // Ignore a full/disconnected channel; the status bar is best-effort
            if let Some(sender) = STATUS_SENDER.get() {
                let _ = sender.send(line);
            }
        }
    }
}

/// Visitor to extract the message field from a tracing event
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }
}
