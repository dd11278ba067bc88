//! Test helper: record which events a subscriber lets through.

use std::sync::{Arc, Mutex};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(Level, String)>>>);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        self.0
            .lock()
            .unwrap()
            .push((*meta.level(), meta.target().to_string()));
    }
}

/// Run `f` under `filter` and return (level, target) of every event that passed.
pub(crate) fn capture<F: FnOnce()>(filter: EnvFilter, f: F) -> Vec<(Level, String)> {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(recorder.clone());
    tracing::subscriber::with_default(subscriber, f);
    let seen = recorder.0.lock().unwrap().clone();
    seen
}

pub(crate) fn saw(events: &[(Level, String)], target: &str) -> bool {
    events.iter().any(|(_, t)| t == target)
}
