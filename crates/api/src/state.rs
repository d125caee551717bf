use std::sync::Arc;

use stayhub_core::events::EventBus;
use stayhub_core::service::BookingService;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: AppConfig,
    bookings: BookingService,
}

impl AppState {
    pub fn new(config: AppConfig, bookings: BookingService) -> Self {
        Self {
            inner: Arc::new(InnerState { config, bookings }),
        }
    }

    /// State over empty in-memory repositories.
    pub fn in_memory(config: AppConfig) -> Self {
        let bookings = BookingService::in_memory(EventBus::new(config.event_bus_capacity));
        Self::new(config, bookings)
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn bookings(&self) -> &BookingService {
        &self.inner.bookings
    }

    pub fn event_bus(&self) -> &EventBus {
        self.inner.bookings.events()
    }
}
