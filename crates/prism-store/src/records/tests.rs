use super::*;
use prism_config::Target;
use tempfile::TempDir;

fn record_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// =============================================================================
// LOAD OR HEAL
// =============================================================================

#[test]
fn missing_record_is_created_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = record_path(&dir, "preferences.json");

    let (prefs, healed): (Preferences, _) = load_or_heal(&path).unwrap();
    assert_eq!(healed, Healed::Created);
    assert_eq!(prefs, Preferences::default());

    let on_disk: Preferences =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, prefs);
}

#[test]
fn intact_record_is_not_rewritten() {
    let dir = TempDir::new().unwrap();
    let path = record_path(&dir, "state.json");
    fs::write(&path, r#"{"currentTheme":"nord","lastSwitched":5}"#).unwrap();

    let (state, healed): (ActivationState, _) = load_or_heal(&path).unwrap();
    assert_eq!(healed, Healed::Intact);
    assert_eq!(state.current_name(), Some("nord"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"currentTheme":"nord","lastSwitched":5}"#
    );
}

#[test]
fn corrupted_record_is_backed_up_and_replaced() {
    let dir = TempDir::new().unwrap();
    let path = record_path(&dir, "preferences.json");
    fs::write(&path, "{ this is not json").unwrap();

    let (prefs, healed): (Preferences, _) = load_or_heal(&path).unwrap();
    assert_eq!(healed, Healed::Replaced);
    assert_eq!(prefs, Preferences::default());

    let backup = backup_path(&path);
    assert!(backup.ends_with("preferences.json.corrupted.backup"));
    assert_eq!(fs::read_to_string(&backup).unwrap(), "{ this is not json");

    let (_, healed): (Preferences, _) = load_or_heal(&path).unwrap();
    assert_eq!(healed, Healed::Intact);
}

#[test]
fn wrongly_typed_record_counts_as_corrupted() {
    let dir = TempDir::new().unwrap();
    let path = record_path(&dir, "state.json");
    fs::write(&path, r#"{"currentTheme": 42}"#).unwrap();

    let (state, healed): (ActivationState, _) = load_or_heal(&path).unwrap();
    assert_eq!(healed, Healed::Replaced);
    assert_eq!(state, ActivationState::default());
}

#[test]
fn atomic_write_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = record_path(&dir, "state.json");

    write_json_atomic(&path, &ActivationState::default()).unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn atomic_write_into_missing_dir_is_classified() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("state.json");

    let err = write_json_atomic(&path, &ActivationState::default()).unwrap_err();
    assert_eq!(err.code(), prism_common::ErrorCode::IoError);
}

// =============================================================================
// ACTIVATION STATE
// =============================================================================

#[test]
fn state_uses_camel_case_keys() {
    let mut state = ActivationState::default();
    state.record_switch("dracula", 1_700_000_000_000);
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["currentTheme"], "dracula");
    assert_eq!(json["lastSwitched"], 1_700_000_000_000_i64);
    assert!(json["currentWallpaper"].is_null());
}

#[test]
fn empty_state_has_no_current_theme() {
    let state: ActivationState = serde_json::from_str("{}").unwrap();
    assert_eq!(state.current_name(), None);
    assert_eq!(state.last_switched, 0);
}

// =============================================================================
// PREFERENCES
// =============================================================================

#[test]
fn default_preferences_enable_every_target() {
    let prefs = Preferences::default();
    assert_eq!(prefs.enabled_apps.len(), Target::ALL.len());
    for target in Target::ALL {
        assert!(prefs.is_app_enabled(target));
    }
    assert!(prefs.show_notifications);
    assert!(!prefs.auto_apply_on_startup);
}

#[test]
fn preferences_fill_missing_fields_and_keep_unknown_ones() {
    let dir = TempDir::new().unwrap();
    let path = record_path(&dir, "preferences.json");
    fs::write(
        &path,
        r#"{"favorites":["nord"],"windowBounds":{"x":10,"y":20},"legacyFlag":true}"#,
    )
    .unwrap();

    let (mut prefs, healed): (Preferences, _) = load_or_heal(&path).unwrap();
    assert_eq!(healed, Healed::Intact);
    assert_eq!(prefs.favorites, vec!["nord"]);
    assert!(prefs.show_notifications);
    assert!(prefs.is_app_enabled(Target::Kitty));

    prefs.push_recent("nord");
    write_json_atomic(&path, &prefs).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["windowBounds"]["x"], 10);
    assert_eq!(raw["legacyFlag"], true);
    assert_eq!(raw["recentThemes"][0], "nord");
    assert_eq!(raw["showNotifications"], true);
}

#[test]
fn recents_move_to_front_without_duplicates() {
    let mut prefs = Preferences::default();
    prefs.push_recent("a");
    prefs.push_recent("b");
    prefs.push_recent("a");
    assert_eq!(prefs.recent_themes, vec!["a", "b"]);
}

#[test]
fn recents_are_capped() {
    let mut prefs = Preferences::default();
    for i in 0..25 {
        prefs.push_recent(&format!("theme-{i}"));
    }
    assert_eq!(prefs.recent_themes.len(), MAX_RECENTS);
    assert_eq!(prefs.recent_themes[0], "theme-24");
    assert_eq!(prefs.recent_themes[MAX_RECENTS - 1], "theme-15");
}

#[test]
fn toggle_favorite_flips_membership() {
    let mut prefs = Preferences::default();
    assert!(prefs.toggle_favorite("nord"));
    assert_eq!(prefs.favorites, vec!["nord"]);
    assert!(!prefs.toggle_favorite("nord"));
    assert!(prefs.favorites.is_empty());
}

#[test]
fn disabled_app_is_reported() {
    let mut prefs = Preferences::default();
    prefs.set_app_enabled(Target::Btop, false);
    assert!(!prefs.is_app_enabled(Target::Btop));

    prefs.enabled_apps.remove("kitty");
    assert!(prefs.is_app_enabled(Target::Kitty));
}

#[test]
fn forget_removes_favorites_and_recents() {
    let mut prefs = Preferences::default();
    prefs.toggle_favorite("ocean");
    prefs.push_recent("ocean");
    prefs.push_recent("nord");

    prefs.forget("ocean");
    assert!(prefs.favorites.is_empty());
    assert_eq!(prefs.recent_themes, vec!["nord"]);
}
