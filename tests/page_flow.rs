//! Page-level flows: navigation, theme, filtering and reveal together.

use portfolio_ui::nav::{ScrollMetrics, SectionBounds};
use portfolio_ui::{AppCommand, AppEvent, PageModel, Theme, Timer, UiConfig, UiState};

fn page() -> PageModel {
    PageModel {
        section_ids: vec![
            "home".into(),
            "about".into(),
            "skills".into(),
            "projects".into(),
            "contact".into(),
        ],
        initial_filter: "all".into(),
        card_categories: vec!["web".into(), "mobile".into(), "web".into(), "ml".into()],
        skill_targets: vec![95.0, 80.0, 60.0],
        has_hero: true,
        ..PageModel::default()
    }
}

fn layout() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 800.0),
        SectionBounds::new("about", 800.0, 600.0),
        SectionBounds::new("skills", 1400.0, 700.0),
        SectionBounds::new("projects", 2100.0, 900.0),
        SectionBounds::new("contact", 3000.0, 700.0),
    ]
}

fn scroll(ui: &mut UiState, y: f64) {
    ui.handle_event(AppEvent::Scrolled(ScrollMetrics {
        scroll_y: y,
        viewport_height: 900.0,
        sections: layout(),
    }));
}

#[test]
fn test_scroll_marks_exactly_one_link() {
    let mut ui = UiState::new(UiConfig::default(), page(), Theme::Light);

    // skills range is [1300, 2000)
    for y in [1300.0, 1650.0, 1999.0] {
        scroll(&mut ui, y);
        assert_eq!(ui.nav.active_link.as_deref(), Some("skills"), "at {}", y);
        for other in ["home", "about", "projects", "contact"] {
            assert!(!ui.nav.is_active(other));
        }
    }

    scroll(&mut ui, 2000.0);
    assert_eq!(ui.nav.active_link.as_deref(), Some("projects"));
}

#[test]
fn test_menu_navigation_round_trip() {
    let mut ui = UiState::new(UiConfig::default(), page(), Theme::Light);

    ui.handle_event(AppEvent::MenuOpened);
    assert!(ui.is_scroll_locked());

    let commands = ui.handle_event(AppEvent::NavLinkClicked {
        target_top: Some(2100.0),
    });
    assert!(!ui.is_scroll_locked());
    assert_eq!(commands, vec![AppCommand::ScrollTo { top: 2030.0 }]);

    ui.handle_event(AppEvent::MenuOpened);
    ui.handle_event(AppEvent::KeyPressed("Escape".into()));
    assert!(!ui.is_scroll_locked());
}

#[test]
fn test_theme_double_toggle_restores_icon() {
    let start = Theme::resolve(None, true);
    let mut ui = UiState::new(UiConfig::default(), page(), start);
    let icon = ui.theme.icon();

    ui.handle_event(AppEvent::ThemeToggled);
    assert_eq!(ui.theme, Theme::Light);
    assert_ne!(ui.theme.icon(), icon);

    ui.handle_event(AppEvent::ThemeToggled);
    assert_eq!(ui.theme, start);
    assert_eq!(ui.theme.icon(), icon);
}

#[test]
fn test_filter_selection_is_exclusive() {
    let mut ui = UiState::new(UiConfig::default(), page(), Theme::Light);
    ui.handle_event(AppEvent::FilterSelected("web".into()));

    assert!(ui.filter.is_active("web"));
    assert!(!ui.filter.is_active("all"));
    let hidden: Vec<bool> = ui.filter.cards.iter().map(|c| c.hidden).collect();
    assert_eq!(hidden, vec![false, true, false, true]);

    ui.handle_event(AppEvent::FilterSelected("all".into()));
    assert!(ui.filter.cards.iter().all(|c| !c.hidden));
}

#[test]
fn test_initial_filter_from_markup_shows_all_until_clicked() {
    let mut model = page();
    model.initial_filter = "ml".into();
    let mut ui = UiState::new(UiConfig::default(), model, Theme::Light);
    assert!(ui.filter.is_active("ml"));
    assert_eq!(ui.filter.visible_count(), 4);

    ui.handle_event(AppEvent::FilterSelected("ml".into()));
    assert_eq!(ui.filter.visible_count(), 1);
}

#[test]
fn test_reveal_and_skill_fill_sequence() {
    let mut ui = UiState::new(UiConfig::default(), page(), Theme::Light);

    assert!(ui.handle_event(AppEvent::SectionIntersected(1)).is_empty());
    assert!(ui.reveal.is_revealed("about"));

    let commands = ui.handle_event(AppEvent::SectionIntersected(2));
    assert_eq!(
        commands,
        vec![AppCommand::Schedule {
            timer: Timer::FillSkills,
            delay_ms: 300
        }]
    );

    ui.handle_event(AppEvent::TimerFired(Timer::FillSkills));
    let widths: Vec<String> = ui.reveal.skill_bars.iter().map(|b| b.width_css()).collect();
    assert_eq!(widths, vec!["95%", "80%", "60%"]);
    assert!(ui.reveal.is_revealed("about"), "reveal never reverses");
}
