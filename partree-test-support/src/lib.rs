//! Shared test utilities used across partree crates.

pub mod proptest_profile;

pub mod tracing {
    //! Capture tracing events and spans so tests can assert on diagnostics.

    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::{Layer, Registry};

    /// A tracing layer that stores every event and every span opened while it
    /// is installed.
    ///
    /// Clones share storage, so keep one handle for assertions and hand the
    /// other to the subscriber.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        events: Arc<Mutex<Vec<RecordedEvent>>>,
        spans: Arc<Mutex<Vec<RecordedSpan>>>,
    }

    /// A captured event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedEvent {
        /// Event level.
        pub level: Level,
        /// Event target, normally the emitting module path.
        pub target: String,
        /// Fields rendered to strings; the text is stored under `message`.
        pub fields: HashMap<String, String>,
    }

    impl RecordedEvent {
        /// Returns the event message, if any.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }

        /// Returns a field rendered as a string.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    /// A span captured when it was opened.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedSpan {
        /// Span name.
        pub name: String,
        /// Fields present at creation, rendered to strings.
        pub fields: HashMap<String, String>,
    }

    impl RecordingLayer {
        /// Returns a snapshot of the recorded events in emission order.
        ///
        /// # Examples
        /// ```
        /// use partree_test_support::tracing::RecordingLayer;
        ///
        /// assert!(RecordingLayer::default().events().is_empty());
        /// ```
        #[must_use]
        pub fn events(&self) -> Vec<RecordedEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns a snapshot of the recorded spans in creation order.
        #[must_use]
        pub fn spans(&self) -> Vec<RecordedSpan> {
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns the recorded events whose message equals `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<RecordedEvent> {
            self.events()
                .into_iter()
                .filter(|event| event.message() == Some(message))
                .collect()
        }
    }

    /// Runs `f` with a thread-local subscriber that records into a fresh
    /// layer, returning the closure's output alongside the layer.
    ///
    /// # Examples
    /// ```
    /// use partree_test_support::tracing::with_recording;
    ///
    /// let ((), layer) = with_recording(|| tracing::info!(answer = 42, "hello"));
    /// let events = layer.events_with_message("hello");
    /// assert_eq!(events.len(), 1);
    /// assert_eq!(events[0].field("answer"), Some("42"));
    /// ```
    pub fn with_recording<T>(f: impl FnOnce() -> T) -> (T, RecordingLayer) {
        let layer = RecordingLayer::default();
        let subscriber = Registry::default().with(layer.clone());
        let output = tracing::subscriber::with_default(subscriber, f);
        (output, layer)
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            attrs.record(&mut FieldCollector(&mut fields));
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(RecordedSpan {
                    name: attrs.metadata().name().to_owned(),
                    fields,
                });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldCollector(&mut fields));
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(RecordedEvent {
                    level: *event.metadata().level(),
                    target: event.metadata().target().to_owned(),
                    fields,
                });
        }
    }

    struct FieldCollector<'a>(&'a mut HashMap<String, String>);

    impl Visit for FieldCollector<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }
    }
}
