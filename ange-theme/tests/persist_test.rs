//! Tests for theme files, configuration files and the manager working on them

use ange_theme::config::{ThemeConfig, ThemeSource};
use ange_theme::error::ThemeError;
use ange_theme::font::FontId;
use ange_theme::geometry::{CornerRadii, Dimension};
use ange_theme::manager::ThemeManager;
use ange_theme::registry::ThemeRegistry;
use ange_theme::theme::{Theme, DEF_THEME};
use std::fs;

#[test]
fn test_toml_round_trip() {
    let theme = DEF_THEME.with_font(Some(FontId::new(3)));
    let toml = theme.to_toml_string().unwrap();
    assert_eq!(Theme::from_toml_str(&toml).unwrap(), theme);
}

#[test]
fn test_json_round_trip() {
    let json = DEF_THEME.to_json_string().unwrap();
    assert_eq!(Theme::from_json_str(&json).unwrap(), DEF_THEME);
}

#[test]
fn test_save_and_load_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let mut theme = DEF_THEME;
    theme.context_menu.row_height = 24;

    for name in ["theme.toml", "theme.json"] {
        let path = dir.path().join(name);
        theme.save(&path).unwrap();
        assert_eq!(Theme::load(&path).unwrap(), theme);
    }

    let yaml = dir.path().join("theme.yaml");
    assert!(matches!(
        theme.save(&yaml),
        Err(ThemeError::UnsupportedFormat { .. })
    ));
    assert!(!yaml.exists());
}

#[test]
fn test_non_finite_radii_survive_save_and_load() {
    let odd_nan = f32::from_bits(0x7fc0_0001);
    let radii = [f32::INFINITY, f32::NEG_INFINITY, f32::NAN, odd_nan];

    let mut theme = DEF_THEME;
    theme.background.radii = CornerRadii(radii);
    theme.simple_button_img.radii = CornerRadii::uniform(f32::NAN);

    let dir = tempfile::tempdir().unwrap();
    for name in ["radii.toml", "radii.json"] {
        let path = dir.path().join(name);
        theme.save(&path).unwrap();
        let loaded = Theme::load(&path).unwrap();

        assert_eq!(
            loaded.background.radii.0.map(f32::to_bits),
            radii.map(f32::to_bits)
        );
        assert_eq!(
            loaded.simple_button_img.radii.0.map(f32::to_bits),
            [f32::NAN.to_bits(); 4]
        );
        assert_eq!(loaded.simple_button_bg.radii, DEF_THEME.simple_button_bg.radii);
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_oversized_margins_only_fit_json() {
    let mut theme = DEF_THEME;
    theme.checkbox.margins = Dimension::new(usize::MAX, 2);
    let dir = tempfile::tempdir().unwrap();

    let toml = dir.path().join("wide.toml");
    assert!(matches!(
        theme.save(&toml),
        Err(ThemeError::Serialization(_))
    ));
    assert!(!toml.exists());

    let json = dir.path().join("wide.json");
    theme.save(&json).unwrap();
    assert_eq!(Theme::load(&json).unwrap(), theme);
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        Theme::load(&missing),
        Err(ThemeError::FileNotFound { .. })
    ));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        Theme::load(&broken),
        Err(ThemeError::Parse { .. })
    ));
}

#[test]
fn test_config_file_paths_are_relative_to_it() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("themes")).unwrap();

    let mut night = DEF_THEME;
    night.background.base.tint = "#101418".parse().unwrap();
    night.save(dir.path().join("themes/night.toml")).unwrap();

    let config_path = dir.path().join("ange.toml");
    fs::write(
        &config_path,
        "[theme]\ndefault = \"file:themes/night.toml\"\nfallback = \"ange\"\n",
    )
    .unwrap();

    let config = ThemeConfig::from_file(&config_path).unwrap();
    assert_eq!(
        config.default_theme,
        ThemeSource::File(dir.path().join("themes/night.toml"))
    );
    assert_eq!(config.fallback_theme, Some(ThemeSource::builtin("ange")));

    let registry = ThemeRegistry::with_builtins();
    assert_eq!(config.resolve_theme(&registry).unwrap(), night);
}

#[test]
fn test_manager_load_file_keeps_font() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.json");
    fs::write(&path, r#"{ "v_scroller": { "width": 32 } }"#).unwrap();

    let mut manager = ThemeManager::new();
    manager.assign_font(Some(FontId::new(5)));
    manager.load_file(&path).unwrap();

    let current = manager.snapshot();
    assert_eq!(current.v_scroller.width, 32);
    assert_eq!(current.progress_bar.text.used_font, Some(FontId::new(5)));
    assert!(manager.current_name().starts_with("file:"));
}

#[test]
fn test_manager_with_custom_registry() {
    let mut registry = ThemeRegistry::new();
    let mut compact = Theme::default();
    compact.context_menu.row_height = 16;
    registry.register("compact", compact);

    let manager = ThemeManager::with_registry(registry, "Compact").unwrap();
    assert_eq!(manager.current_name(), "compact");
    assert_eq!(manager.snapshot().context_menu.row_height, 16);

    assert!(matches!(
        ThemeManager::with_registry(ThemeRegistry::new(), "compact"),
        Err(ThemeError::NotFound { .. })
    ));
}
