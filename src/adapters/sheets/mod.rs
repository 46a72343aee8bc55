//! Session sink adapters for the results spreadsheet.

mod disabled_sink;
mod webhook_sink;

pub use disabled_sink::DisabledSessionSink;
pub use webhook_sink::WebhookSessionSink;
