use super::*;
use prism_common::ErrorCode;
use prism_config::presets::load_preset;
use prism_config::Target;
use tempfile::TempDir;

fn setup() -> (TempDir, ThemePaths) {
    let tmp = TempDir::new().unwrap();
    let paths = ThemePaths::at(tmp.path());
    prism_platform::ensure_dirs(&paths).unwrap();
    (tmp, paths)
}

fn preset(name: &str) -> ThemeMetadata {
    load_preset(name).unwrap().unwrap()
}

#[test]
fn materialize_writes_every_target_and_metadata() {
    let (_tmp, paths) = setup();
    let dir = materialize(&paths, Scope::Custom, "ocean", &preset("nord")).unwrap();

    assert_eq!(dir, paths.theme_dir(Scope::Custom, "ocean"));
    assert!(dir.join(THEME_FILE).is_file());
    for target in Target::ALL {
        assert!(dir.join(target.file_name()).is_file(), "{}", target.id());
    }
    assert!(!paths.staging_dir(Scope::Custom, "ocean").exists());
}

#[test]
fn stored_metadata_is_normalized_hex() {
    let (_tmp, paths) = setup();
    let mut meta = preset("nord");
    meta.colors.background = "rgb(46, 52, 64)".into();
    meta.colors.red = "#F00".into();

    let dir = materialize(&paths, Scope::Custom, "ocean", &meta).unwrap();
    let theme = read_theme(&dir, "ocean", Scope::Custom).unwrap();
    assert_eq!(theme.metadata.colors.background, "#2e3440");
    assert_eq!(theme.metadata.colors.red, "#ff0000");
    assert!(theme.is_custom);
}

#[test]
fn light_marker_follows_background_luminance() {
    let (_tmp, paths) = setup();
    let light = materialize(&paths, Scope::Bundled, "latte", &preset("catppuccin-latte")).unwrap();
    let dark = materialize(&paths, Scope::Bundled, "night", &preset("tokyo-night")).unwrap();

    assert!(light.join(LIGHT_MARKER).is_file());
    assert_eq!(fs::metadata(light.join(LIGHT_MARKER)).unwrap().len(), 0);
    assert!(!dark.join(LIGHT_MARKER).exists());
    assert!(read_theme(&light, "latte", Scope::Bundled).unwrap().is_light);
}

#[test]
fn rematerialize_replaces_the_whole_directory() {
    let (_tmp, paths) = setup();
    let dir = materialize(&paths, Scope::Custom, "ocean", &preset("catppuccin-latte")).unwrap();
    fs::write(dir.join("stale.conf"), "old").unwrap();
    assert!(dir.join(LIGHT_MARKER).exists());

    materialize(&paths, Scope::Custom, "ocean", &preset("dracula")).unwrap();

    assert!(!dir.join("stale.conf").exists());
    assert!(!dir.join(LIGHT_MARKER).exists());
    assert!(!paths.custom_dir().join(".ocean.old").exists());
    let theme = read_theme(&dir, "ocean", Scope::Custom).unwrap();
    assert_eq!(theme.metadata.name, "dracula");
}

#[test]
fn invalid_palette_writes_nothing() {
    let (_tmp, paths) = setup();
    let mut meta = preset("nord");
    meta.colors.cursor = "not-a-color".into();

    let err = materialize(&paths, Scope::Custom, "broken", &meta).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert!(!paths.theme_dir(Scope::Custom, "broken").exists());
    assert!(!paths.staging_dir(Scope::Custom, "broken").exists());
}

#[test]
fn leftover_staging_is_cleared() {
    let (_tmp, paths) = setup();
    let staging = paths.staging_dir(Scope::Custom, "ocean");
    fs::create_dir_all(&staging).unwrap();
    fs::write(staging.join("junk"), "x").unwrap();

    let dir = materialize(&paths, Scope::Custom, "ocean", &preset("nord")).unwrap();
    assert!(!dir.join("junk").exists());
}

#[test]
fn locate_prefers_custom_scope() {
    let (_tmp, paths) = setup();
    materialize(&paths, Scope::Bundled, "nord", &preset("nord")).unwrap();
    assert_eq!(locate(&paths, "nord").unwrap().0, Scope::Bundled);

    materialize(&paths, Scope::Custom, "nord", &preset("dracula")).unwrap();
    let (scope, dir) = locate(&paths, "nord").unwrap();
    assert_eq!(scope, Scope::Custom);
    assert_eq!(dir, paths.theme_dir(Scope::Custom, "nord"));

    assert!(locate(&paths, "missing").is_none());
}

#[test]
fn locate_never_leaves_its_scope() {
    let (_tmp, paths) = setup();
    materialize(&paths, Scope::Bundled, "nord", &preset("nord")).unwrap();

    for name in ["../themes/nord", "./nord", "nord/", "/nord", "", ".."] {
        assert!(locate(&paths, name).is_none(), "{name:?} resolved");
    }
    assert!(locate(&paths, "nord").is_some());
}

#[test]
fn list_orders_bundled_then_custom_with_shadowing() {
    let (_tmp, paths) = setup();
    materialize(&paths, Scope::Bundled, "nord", &preset("nord")).unwrap();
    materialize(&paths, Scope::Bundled, "dracula", &preset("dracula")).unwrap();
    materialize(&paths, Scope::Custom, "nord", &preset("gruvbox-dark")).unwrap();
    materialize(&paths, Scope::Custom, "aurora", &preset("tokyo-night")).unwrap();
    fs::create_dir_all(paths.staging_dir(Scope::Custom, "half")).unwrap();
    fs::create_dir_all(paths.custom_dir().join("empty")).unwrap();

    let listed: Vec<(String, bool)> = list_themes(&paths)
        .unwrap()
        .into_iter()
        .map(|t| (t.name, t.is_custom))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("dracula".to_string(), false),
            ("aurora".to_string(), true),
            ("nord".to_string(), true),
        ]
    );
}

#[test]
fn list_skips_unreadable_theme() {
    let (_tmp, paths) = setup();
    materialize(&paths, Scope::Custom, "good", &preset("nord")).unwrap();
    let bad = paths.theme_dir(Scope::Custom, "bad");
    fs::create_dir_all(&bad).unwrap();
    fs::write(bad.join(THEME_FILE), "{}").unwrap();

    let names: Vec<String> = list_themes(&paths).unwrap().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["good"]);
}
