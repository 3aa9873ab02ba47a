use crate::services::greeting::GreetingService;

/// Application state containing shared resources.
///
/// This is the composition point of the app: handlers receive providers
/// through `web::Data<AppState>` rather than constructing them, so tests
/// can substitute providers the same way production wires them.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Greeting provider backing the root route
    pub greeting: GreetingService,
}

impl AppState {
    /// Create a new AppState with the given greeting service
    pub fn new(greeting: GreetingService) -> Self {
        Self { greeting }
    }
}
