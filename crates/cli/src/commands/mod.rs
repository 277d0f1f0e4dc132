//! Subcommand implementations.

pub mod cart;
pub mod catalog;
pub mod forms;

use shophub_core::{Notice, Notifier};
use tracing::{info, warn};

/// Surfaces storefront notices as log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notice: Notice) {
        if notice.is_error() {
            warn!(title = %notice.title, "{notice}");
        } else {
            info!(title = %notice.title, "{notice}");
        }
    }
}
