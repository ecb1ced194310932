use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to defaults if `init_config` was never called, so library
/// users that never touch configuration still get sensible display values.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads configuration from `path` (optional) and `AFL__*` environment
/// variables. A broken config file is reported on stderr and defaults are
/// used instead.
pub fn init_config(path: &str) -> Arc<StaticConfig> {
    let loaded = match StaticConfig::load(path) {
        Ok(config) => {
            if std::path::Path::new(path).exists() {
                eprintln!("[INFO] Configuration loaded from: {}", path);
            }
            config
        }
        Err(e) => {
            eprintln!("[ERROR] Failed to load config: {}", e);
            StaticConfig::default()
        }
    };

    let slot = CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()));
    slot.store(Arc::new(loaded));
    slot.load_full()
}
