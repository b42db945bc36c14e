//! HTTP API handlers.

/// Greeting returned by the root route.
pub const GREETING: &str = "Bem-vindo ao projeto de publicação no Google!";

/// Root handler - always returns 200 with the static greeting.
pub async fn root() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_returns_greeting() {
        assert_eq!(root().await, GREETING);
    }
}
