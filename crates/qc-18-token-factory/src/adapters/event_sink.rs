use crate::domain::TokenFactoryEvent;
use crate::ports::outbound::EventSink;
use tracing::info;

/// Keeps every published event in order and logs it.
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Vec<TokenFactoryEvent>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TokenFactoryEvent] {
        &self.events
    }
}

impl EventSink for RecordingEventSink {
    fn publish(&mut self, event: TokenFactoryEvent) {
        info!(kind = event.kind(), "[qc-18] event emitted");
        self.events.push(event);
    }
}
