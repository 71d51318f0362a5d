use crate::domain::navigation::Destination;
use crate::domain::ports::{Navigator, Notifier};
use crate::error::Result;
use async_trait::async_trait;

/// Prints navigations for a terminal user, optionally as absolute URLs on
/// the storefront's front-end origin.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNavigator {
    origin: Option<String>,
}

impl ConsoleNavigator {
    pub fn new(origin: Option<String>) -> Self {
        Self { origin }
    }

    pub fn url(&self, destination: &Destination) -> String {
        match &self.origin {
            Some(origin) => format!("{}{}", origin.trim_end_matches('/'), destination.path()),
            None => destination.path(),
        }
    }
}

#[async_trait]
impl Navigator for ConsoleNavigator {
    async fn navigate(&self, destination: Destination) -> Result<()> {
        println!("navigate: {}", self.url(&destination));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn alert(&self, message: &str) {
        eprintln!("ALERT: {}", message);
    }
}
