use folio::config::{
    ConfigFlags, ThemeMode, load_config_flags, parse_flag_tokens, save_theme, stored_theme,
};
use folio::ui::style::ThemeKind;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".foliorc");
    let content = r#"
# comment
--no-nav

--theme light

--section projects
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.no_nav);
    assert_eq!(flags.theme, Some(ThemeMode::Light));
    assert_eq!(flags.section, Some("projects".to_string()));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".foliorc");
    let content = "--no-nav\n--theme light\n--section about\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "folio".to_string(),
        "--theme".to_string(),
        "dark".to_string(),
        "--nav".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.no_nav, "file flags should remain enabled");
    assert!(effective.nav, "cli flags should be applied");
    assert_eq!(effective.theme, Some(ThemeMode::Dark), "cli should override theme");
    assert_eq!(
        effective.section,
        Some("about".to_string()),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "folio".to_string(),
        "--theme=dark".to_string(),
        "--section=contact".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.theme, Some(ThemeMode::Dark));
    assert_eq!(flags.section, Some("contact".to_string()));
}

#[test]
fn test_config_union_merges_booleans() {
    let file = ConfigFlags {
        no_nav: true,
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        nav: true,
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.no_nav);
    assert!(merged.nav);
}

#[test]
fn test_theme_choice_survives_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config");

    // First session: user toggles to dark.
    save_theme(&path, ThemeKind::Dark).unwrap();

    // Next session reads the stored choice back.
    assert_eq!(stored_theme(&path), Some(ThemeKind::Dark));
    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.theme, Some(ThemeMode::Dark));

    // A later toggle overwrites it.
    save_theme(&path, ThemeKind::Light).unwrap();
    assert_eq!(stored_theme(&path), Some(ThemeKind::Light));
}
