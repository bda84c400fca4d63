use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shoplist", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shoplist", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shoplist", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shoplist", "{}", message);
    }
}
