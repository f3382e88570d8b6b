use std::path::PathBuf;

use proptest::prelude::*;
use tempfile::tempdir;

use crate::config::stored_theme;
use crate::portfolio::Portfolio;
use crate::ui::style::ThemeKind;

use super::update::fragment_or_default;
use super::{App, DEFAULT_SECTION, Message, Model, update};

const SAMPLE: &str = "\
# About

Hello there, this is the about section.

# Projects

- alpha
- beta

# Contact

Write to hi@example.com
";

fn sample_portfolio() -> Portfolio {
    Portfolio::parse(SAMPLE).unwrap()
}

fn create_test_model() -> Model {
    Model::new(PathBuf::from("portfolio.md"), sample_portfolio(), (80, 24), "")
}

fn create_long_model() -> Model {
    // A section tall enough to scroll in a 10-row terminal
    let mut md = String::from("# About\n\n");
    for i in 1..=60 {
        md.push_str(&format!("Paragraph {i} body text.\n\n"));
    }
    md.push_str("# Contact\n\nhi\n");
    Model::new(
        PathBuf::from("portfolio.md"),
        Portfolio::parse(&md).unwrap(),
        (80, 10),
        "",
    )
}

#[test]
fn test_show_section_activates_exactly_one() {
    let model = update(create_test_model(), Message::ShowSection("projects".into()));
    assert_eq!(model.active_section, Some(1));
    assert_eq!(model.active_id(), Some("projects"));
}

#[test]
fn test_show_section_activates_matching_nav_entry() {
    let model = update(create_test_model(), Message::ShowSection("contact".into()));
    assert_eq!(model.nav_active, Some(2));
    assert_eq!(model.nav_cursor, 2);
}

#[test]
fn test_unknown_section_clears_previous_active() {
    let model = update(create_test_model(), Message::ShowSection("projects".into()));
    assert!(model.active_section.is_some());

    let model = update(model, Message::ShowSection("no-such-id".into()));
    assert_eq!(model.active_section, None);
    assert_eq!(model.nav_active, None);
    assert!(model.content_lines.is_empty());
}

#[test]
fn test_show_section_resets_scroll_to_top() {
    let model = update(create_long_model(), Message::ShowSection("about".into()));
    let model = update(model, Message::ScrollDown(20));
    assert_eq!(model.viewport.offset(), 20);

    let model = update(model, Message::ShowSection("about".into()));
    assert_eq!(model.viewport.offset(), 0);
}

#[test]
fn test_activate_pushes_history_entry() {
    let model = update(create_test_model(), Message::Activate(2));
    assert_eq!(model.history.current(), "contact");
    assert_eq!(model.history.len(), 2);
    assert_eq!(model.active_id(), Some("contact"));
}

#[test]
fn test_activate_out_of_range_is_noop() {
    let model = update(create_test_model(), Message::Activate(99));
    assert_eq!(model.history.len(), 1);
    assert_eq!(model.active_section, None);
}

#[test]
fn test_history_back_reactivates_previous_section() {
    let model = update(create_test_model(), Message::Activate(1));
    let model = update(model, Message::Activate(2));
    assert_eq!(model.active_id(), Some("contact"));

    let model = update(model, Message::HistoryBack);
    assert_eq!(model.active_id(), Some("projects"));
    assert_eq!(model.nav_active, Some(1));
}

#[test]
fn test_history_back_to_empty_fragment_falls_back_to_default() {
    let model = update(create_test_model(), Message::Activate(2));
    let model = update(model, Message::HistoryBack);
    assert_eq!(model.active_id(), Some(DEFAULT_SECTION));
}

#[test]
fn test_history_forward_after_back() {
    let model = update(create_test_model(), Message::Activate(1));
    let model = update(model, Message::HistoryBack);
    let model = update(model, Message::HistoryForward);
    assert_eq!(model.active_id(), Some("projects"));
}

#[test]
fn test_history_back_at_start_is_noop() {
    let model = update(create_test_model(), Message::ShowSection("projects".into()));
    let model = update(model, Message::HistoryBack);
    assert_eq!(model.active_id(), Some("projects"));
    assert_eq!(model.history.len(), 1);
}

#[test]
fn test_empty_fragment_falls_back_to_about() {
    assert_eq!(fragment_or_default(""), "about");
    assert_eq!(fragment_or_default("projects"), "projects");
}

#[test]
fn test_startup_fragment_routes_to_named_section() {
    // The startup path: seed the history with the fragment, then route
    // it once through the same transition every later activation uses.
    let mut model = Model::new(
        PathBuf::from("portfolio.md"),
        sample_portfolio(),
        (80, 24),
        "projects",
    );
    let initial = fragment_or_default(model.history.current()).to_string();
    model = update(model, Message::ShowSection(initial));
    assert_eq!(model.active_id(), Some("projects"));
    assert_eq!(model.viewport.offset(), 0);
}

#[test]
fn test_startup_without_fragment_activates_about() {
    let mut model = create_test_model();
    let initial = fragment_or_default(model.history.current()).to_string();
    model = update(model, Message::ShowSection(initial));
    assert_eq!(model.active_id(), Some("about"));
}

#[test]
fn test_nav_select_activates_cursor_entry() {
    let mut model = create_test_model();
    model = update(model, Message::NavDown);
    model = update(model, Message::NavSelect);
    assert_eq!(model.active_id(), Some("projects"));
    assert_eq!(model.history.current(), "projects");
}

#[test]
fn test_nav_cursor_clamps_at_both_ends() {
    let model = update(create_test_model(), Message::NavUp);
    assert_eq!(model.nav_cursor, 0);

    let mut model = model;
    for _ in 0..10 {
        model = update(model, Message::NavDown);
    }
    assert_eq!(model.nav_cursor, 2);
}

#[test]
fn test_set_theme_is_idempotent() {
    let model = update(create_test_model(), Message::SetTheme(ThemeKind::Dark));
    let first = model.theme;
    let model = update(model, Message::SetTheme(ThemeKind::Dark));
    assert_eq!(model.theme, first);
    assert_eq!(model.theme, ThemeKind::Dark);
}

#[test]
fn test_toggle_theme_is_involution() {
    for start in [ThemeKind::Light, ThemeKind::Dark] {
        let model = update(create_test_model(), Message::SetTheme(start));
        let model = update(model, Message::ToggleTheme);
        assert_ne!(model.theme, start);
        let model = update(model, Message::ToggleTheme);
        assert_eq!(model.theme, start);
    }
}

#[test]
fn test_toggle_reads_applied_state_not_storage() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config");
    crate::config::save_theme(&config, ThemeKind::Light).unwrap();

    // Applied state says dark even though storage says light; the
    // toggle must flip the applied state.
    let mut model = create_test_model();
    model.config_global_path = Some(config);
    let model = update(model, Message::SetTheme(ThemeKind::Dark));
    let model = update(model, Message::ToggleTheme);
    assert_eq!(model.theme, ThemeKind::Light);
}

#[test]
fn test_theme_change_persists_to_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config");
    let app = App::new(PathBuf::from("portfolio.md"))
        .with_config_paths(Some(config.clone()), None);

    let mut model = create_test_model();
    model.config_global_path = Some(config.clone());

    let msg = Message::SetTheme(ThemeKind::Dark);
    model = update(model, msg.clone());
    app.handle_message_side_effects(&mut model, &msg);
    assert_eq!(stored_theme(&config), Some(ThemeKind::Dark));

    model = update(model, Message::ToggleTheme);
    app.handle_message_side_effects(&mut model, &Message::ToggleTheme);
    assert_eq!(stored_theme(&config), Some(ThemeKind::Light));
}

#[test]
fn test_startup_with_dark_detection_persists_dark() {
    // Storage empty, detection reports dark: the resolved theme is
    // applied and written back, like the very first page load.
    let dir = tempdir().unwrap();
    let config = dir.path().join("config");
    assert_eq!(stored_theme(&config), None);

    let resolved =
        crate::ui::style::preferred_theme(stored_theme(&config), Some(ThemeKind::Dark));
    let app = App::new(PathBuf::from("portfolio.md"))
        .with_config_paths(Some(config.clone()), None);
    let mut model = create_test_model();
    model.config_global_path = Some(config.clone());

    let msg = Message::SetTheme(resolved);
    model = update(model, msg.clone());
    app.handle_message_side_effects(&mut model, &msg);

    assert_eq!(model.theme, ThemeKind::Dark);
    assert_eq!(stored_theme(&config), Some(ThemeKind::Dark));
}

#[test]
fn test_toggle_nav_reflows_content() {
    let model = update(create_test_model(), Message::ShowSection("about".into()));
    assert!(model.nav_visible);
    let with_nav = model.content_lines.len();

    let model = update(model, Message::ToggleNav);
    assert!(!model.nav_visible);
    // Wider pane never needs more wrapped lines.
    assert!(model.content_lines.len() <= with_nav);
}

#[test]
fn test_resize_updates_viewport_and_reflows() {
    let model = update(create_test_model(), Message::ShowSection("about".into()));
    let model = update(model, Message::Resize(40, 12));
    assert_eq!(model.viewport.width(), 40);
    assert_eq!(model.viewport.height(), 11);
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_help_overlay_toggles() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
}

#[test]
fn test_render_smoke_with_active_section() {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let model = update(create_test_model(), Message::ShowSection("about".into()));
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| crate::ui::render(&model, frame))
        .unwrap();
}

#[test]
fn test_render_smoke_with_nothing_active_and_help() {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let model = update(create_test_model(), Message::ShowSection("missing".into()));
    let model = update(model, Message::ToggleHelp);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| crate::ui::render(&model, frame))
        .unwrap();
}

fn arb_theme() -> impl Strategy<Value = ThemeKind> {
    prop_oneof![Just(ThemeKind::Light), Just(ThemeKind::Dark)]
}

fn arb_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("about".to_string()),
        Just("projects".to_string()),
        Just("contact".to_string()),
        Just("missing".to_string()),
        Just(String::new()),
    ]
}

proptest! {
    #[test]
    fn prop_toggle_twice_restores_applied_state(start in arb_theme()) {
        let model = update(create_test_model(), Message::SetTheme(start));
        let model = update(model, Message::ToggleTheme);
        let model = update(model, Message::ToggleTheme);
        prop_assert_eq!(model.theme, start);
    }

    #[test]
    fn prop_at_most_one_section_active(ids in prop::collection::vec(arb_fragment(), 1..12)) {
        let mut model = create_test_model();
        for id in ids {
            model = update(model, Message::ShowSection(id));
            // Both markers agree: either the same section is active on
            // each side, or nothing is active anywhere.
            match (model.active_section, model.nav_active) {
                (Some(section), Some(nav)) => {
                    prop_assert_eq!(section, nav);
                }
                (None, None) => {}
                other => prop_assert!(false, "markers diverged: {:?}", other),
            }
        }
    }
}
