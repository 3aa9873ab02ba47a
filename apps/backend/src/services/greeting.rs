//! Greeting provider behind the root endpoint.
//!
//! Handlers never build response strings themselves; they go through this
//! service so tests can swap the greeting out without touching the routes
//! (see `with_greeting`).

use tracing::debug;

const DEFAULT_GREETING: &str = "Hello World!";

#[derive(Debug, Clone)]
pub struct GreetingService {
    greeting: String,
}

impl GreetingService {
    /// Service with a custom greeting. Production uses `Default`; this
    /// constructor exists so tests can verify the route layer in isolation
    /// from the canned literal.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }

    /// The greeting served from the root route. Always the configured
    /// literal; no inputs, no failure modes.
    pub fn hello(&self) -> &str {
        debug!(message = "serving greeting");
        &self.greeting
    }

    /// Arithmetic sum of the two operands. Pure; overflow is outside the
    /// documented input domain and is not handled specially.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }
}

impl Default for GreetingService {
    fn default() -> Self {
        Self::with_greeting(DEFAULT_GREETING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_returns_the_fixed_literal() {
        let service = GreetingService::default();
        assert_eq!(service.hello(), "Hello World!");
    }

    #[test]
    fn hello_returns_an_injected_greeting() {
        let service = GreetingService::with_greeting("Hello from mock");
        assert_eq!(service.hello(), "Hello from mock");
    }

    #[test]
    fn add_two_positive_numbers() {
        let service = GreetingService::default();
        assert_eq!(service.add(2, 3), 5);
    }

    #[test]
    fn add_zero_and_a_number() {
        let service = GreetingService::default();
        assert_eq!(service.add(0, 7), 7);
    }

    #[test]
    fn add_negative_numbers() {
        let service = GreetingService::default();
        assert_eq!(service.add(-1, -2), -3);
    }

    #[test]
    fn add_positive_and_negative_number() {
        let service = GreetingService::default();
        assert_eq!(service.add(10, -4), 6);
    }

    #[test]
    fn add_is_commutative() {
        let service = GreetingService::default();
        assert_eq!(service.add(17, -42), service.add(-42, 17));
    }
}
