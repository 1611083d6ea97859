//! Hotspot portal headless host.
//!
//! Wires the portal config, the file-backed store, and the two application
//! stores together the way a UI host does at startup, then prints the
//! settings the login screen would render.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()              -- config.toml, defaults if absent
//!  └─ tracing subscriber         -- RUST_LOG, else config log_level
//!  └─ FileStore::new(data_dir)
//!       ├─ ConfigStore           -- settings tree
//!       └─ RecentIdentifiers     -- login quick picks
//!  └─ AdminGate                  -- control panel passphrase
//! ```

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hotspot_core::rotating_texts;
use hotspot_portal::application::admin_gate::AdminGate;
use hotspot_portal::application::config_store::{ConfigStore, LoadOutcome};
use hotspot_portal::application::recent_identifiers::RecentIdentifiers;
use hotspot_portal::infrastructure::storage::config::{load_config, PortalConfig};
use hotspot_portal::infrastructure::storage::FileStore;

fn main() -> anyhow::Result<()> {
    // Config is read before logging is up, so a failure is reported after init.
    let (config, config_error) = match load_config() {
        Ok(cfg) => (cfg, None),
        Err(e) => (PortalConfig::default(), Some(e)),
    };

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.portal.log_level)),
        )
        .init();

    if let Some(e) = config_error {
        warn!("portal config unusable, using defaults: {e}");
    }

    let data_dir = config.data_dir().context("resolving data directory")?;
    info!(data_dir = %data_dir.display(), "hotspot portal starting");

    let store = FileStore::new(&data_dir);
    let settings_store = ConfigStore::new(&store);
    let recent_store = RecentIdentifiers::new(&store);

    let (settings, outcome) = settings_store.load_with_outcome();
    match &outcome {
        LoadOutcome::Persisted => info!("using stored settings"),
        LoadOutcome::FirstRun => info!("no stored settings yet, using defaults"),
        LoadOutcome::Recovered(reason) => {
            warn!(%reason, "stored settings were discarded; the control panel shows defaults")
        }
    }

    let recent = recent_store.load();
    let gate = AdminGate::new(config.admin.passphrase.as_str());
    info!(?gate, "control panel gate ready");

    info!(
        site = settings.site_name(),
        packages = settings.packages().len(),
        sales_points = settings.sales_points().len(),
        recent = recent.len(),
        "portal state loaded"
    );
    for text in rotating_texts(&settings) {
        info!(text = %text, "welcome text");
    }

    let rendered =
        serde_json::to_string_pretty(&settings).context("rendering settings as JSON")?;
    println!("{rendered}");

    Ok(())
}
