use std::sync::Arc;
use parking_lot::Mutex;
use ahash::AHashMap;

/// Explorer-wide event bus
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<std::any::TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Selection and loading events
pub mod events {
    use super::Event;

    /// All datasets finished loading
    #[derive(Debug, Clone)]
    pub struct DatasetsLoaded {
        pub grid_points: usize,
        pub temperature_rows: usize,
        pub calcite_rows: usize,
    }

    /// A dataset failed to load
    #[derive(Debug, Clone)]
    pub struct LoadFailed {
        pub error: String,
    }

    /// A region was clicked on the map
    #[derive(Debug, Clone)]
    pub struct RegionSelected {
        pub region: String,
        pub year: Option<i32>,
    }

    /// The level selector changed
    #[derive(Debug, Clone)]
    pub struct LevelChanged {
        pub level: u32,
        pub year: Option<i32>,
    }

    /// The year slider moved
    #[derive(Debug, Clone)]
    pub struct YearChanged {
        pub year: Option<i32>,
    }

    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(
        DatasetsLoaded,
        LoadFailed,
        RegionSelected,
        LevelChanged,
        YearChanged
    );
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_insert_with(Vec::new).push(handler);
    }

    /// Publish an event. Handlers must not publish from inside `handle`.
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}
