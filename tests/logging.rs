#![cfg(debug_assertions)]

use std::sync::{Arc, Mutex};

use addon_meta_wasm::domain::addon::{Addon, ImageSize, Preview};
use addon_meta_wasm::domain::images::{AllowedOrigins, PreviewOptions, get_preview_image};
use addon_meta_wasm::domain::logging::{LogEntry, LogLevel, Logger, init_logger};

/// Captures entries; clones share the same buffer.
#[derive(Clone, Default)]
struct MemoryLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryLogger {
    fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, entry: LogEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}

#[test]
fn rejected_preview_is_logged_at_debug() {
    let logger = MemoryLogger::default();
    assert!(init_logger(Box::new(logger.clone())));

    let addon = Addon::new(1, "a").with_previews(vec![Preview::new("https://xyz.com/a.png", ImageSize::new(720, 520))]);
    let policy = AllowedOrigins::new(["https://addons.cdn.mozilla.net"]).unwrap();
    assert_eq!(get_preview_image(Some(&addon), PreviewOptions::default(), &policy).unwrap(), None);

    let entries = logger.entries();
    let entry = entries
        .iter()
        .find(|e| e.message.contains("rejected by origin policy"))
        .expect("rejection logged");
    assert_eq!(entry.level, LogLevel::Debug);
    assert_eq!(entry.component.to_string(), "DOM:PreviewImage");
}
