// SPDX-License-Identifier: MPL-2.0
use chrono::{TimeZone, Utc};
use iced_inbox::config::{self, Config};
use iced_inbox::i18n::fluent::I18n;
use iced_inbox::store::{Notification, NotificationStore};
use tempfile::tempdir;

fn notification(id: u64, is_read: bool) -> Notification {
    Notification {
        id,
        summary: format!("notification {id}"),
        body: None,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        is_read,
    }
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    // Load i18n with french config
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_toast_messages_are_localized() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    let i18n = I18n::new(None, &config);

    assert_eq!(
        i18n.tr("toast-mark-read-failed"),
        "Failed to mark notification as read"
    );
    assert_eq!(i18n.tr("toast-fetch-failed"), "Failed to fetch notifications");
}

#[test]
fn test_store_lifecycle_across_fetches() {
    let mut store = NotificationStore::new();

    // First fetch populates the store
    store.replace_all(vec![notification(1, false), notification(2, false)]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.unread_count(), 2);

    // Reading one entry flips it in place
    assert!(store.mark_read("1"));
    assert!(store.get("1").unwrap().is_read);
    assert!(!store.get("2").unwrap().is_read);
    assert_eq!(store.unread_count(), 1);

    // A later fetch fully replaces the contents; the purged key is gone
    store.replace_all(vec![notification(2, false)]);
    assert_eq!(store.len(), 1);
    assert!(store.get("1").is_none());

    // A confirmation arriving for the purged key is a no-op
    assert!(!store.mark_read("1"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_server_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.server.base_url = "https://notify.example.org/".to_string();
    config.server.token = Some("abc123".to_string());
    config.inbox.refresh_interval_secs = 0;

    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");

    assert_eq!(loaded.server.base_url, "https://notify.example.org/");
    assert_eq!(loaded.server.token.as_deref(), Some("abc123"));
    assert_eq!(loaded.inbox.refresh_interval_secs, 0);
}
