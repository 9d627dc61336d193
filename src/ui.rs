//! Seams to the user interface
//!
//! Routing and toast rendering belong to the embedding application. The flows
//! only need to request a navigation and show a success message.

use log::info;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait Navigator {
    fn navigate(&self, route: &str);
}

#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait Notifier {
    fn success(&self, message: &str);
}

/// Navigator for headless use, only logs the requested route
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        info!("navigate to {route}");
    }
}

/// Notifier for headless use, logs the message
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{message}");
    }
}
