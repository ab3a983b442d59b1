//! Application State
//!
//! Same split as an egui app, without the immediate-mode loop:
//!
//! - **UiState**: everything the page shows, as explicit flags
//! - **AppEvent**: what the user (or the browser) did
//! - **AppCommand**: imperative work for the adapter (scrolling, focus, storage, timers)
//!
//! `UiState::handle_event` is the only mutator. The adapter renders the state
//! onto the document after every event and then runs the returned commands.

use super::PageModel;
use crate::config::UiConfig;
use crate::effects::EffectsState;
use crate::filter::{FilterState, ProjectCard};
use crate::form::{ContactForm, Field, SubmitOutcome};
use crate::nav::{scroll_target, NavState, ScrollMetrics};
use crate::reveal::{RevealState, SkillBar};
use crate::theme::Theme;

// =============================================================================
// TIMERS
// =============================================================================

/// Deferred callbacks. None of them can be cancelled once scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Skill bars animate to their target widths.
    FillSkills,
    /// Simulated submission round-trip finished.
    SubmitComplete,
    /// Hero section fades in after page load.
    RevealHero,
}

// =============================================================================
// APP EVENT - User Intent
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------
    /// Menu toggle control clicked
    MenuOpened,

    /// Menu close control clicked
    MenuClosed,

    /// Key pressed anywhere on the document
    KeyPressed(String),

    /// Navigation link clicked; `target_top` is the target section's offsetTop,
    /// `None` when the fragment resolves to nothing
    NavLinkClicked { target_top: Option<f64> },

    /// Any other in-page anchor clicked
    AnchorClicked { target_top: Option<f64> },

    /// Window scrolled
    Scrolled(ScrollMetrics),

    // -------------------------------------------------------------------------
    // Theme & Projects
    // -------------------------------------------------------------------------
    ThemeToggled,

    /// Filter button with this tag clicked
    FilterSelected(String),

    /// Pointer entered or left the project card at `index`
    CardHovered { index: usize, hovered: bool },

    // -------------------------------------------------------------------------
    // Reveal
    // -------------------------------------------------------------------------
    /// Observed section (index in document order) crossed the visibility threshold
    SectionIntersected(usize),

    // -------------------------------------------------------------------------
    // Contact Form
    // -------------------------------------------------------------------------
    FieldInput { field: Field, value: String },

    /// Focus left a field; `value` is its text at that moment
    FieldBlurred { field: Field, value: String },

    /// Current text of every field present on the page
    FormSubmitted { values: Vec<(Field, String)> },

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------
    /// Window `load` fired
    PageLoaded,

    TimerFired(Timer),
}

// =============================================================================
// APP COMMAND - Side Effects
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Smooth-scroll the window to `top`
    ScrollTo { top: f64 },

    /// Write the theme preference to persistent storage
    PersistTheme(Theme),

    /// Start a one-shot timer
    Schedule { timer: Timer, delay_ms: u32 },

    /// Move keyboard focus to a form field
    FocusField(Field),

    /// Smooth-scroll so the field sits in the middle of the viewport
    CenterField(Field),

    /// Show a blocking notice to the user
    ShowNotice(String),

    /// Clear the form's inputs in the document
    ResetForm,
}

// =============================================================================
// UI STATE
// =============================================================================

#[derive(Debug, Clone)]
pub struct UiState {
    pub config: UiConfig,
    pub nav: NavState,
    pub theme: Theme,
    pub filter: FilterState,
    pub reveal: RevealState,
    pub form: ContactForm,
    pub effects: EffectsState,
    has_hero: bool,
}

impl UiState {
    pub fn new(config: UiConfig, page: PageModel, theme: Theme) -> Self {
        let cards = page
            .card_categories
            .into_iter()
            .map(ProjectCard::new)
            .collect();
        let skill_bars = page
            .skill_targets
            .into_iter()
            .map(|target_percent| SkillBar { target_percent })
            .collect();

        Self {
            config,
            nav: NavState::default(),
            theme,
            filter: FilterState::new(page.initial_filter, cards),
            reveal: RevealState::new(page.section_ids, skill_bars),
            form: ContactForm::new(page.form_fields),
            effects: EffectsState::default(),
            has_hero: page.has_hero,
        }
    }

    /// Apply one event and return the side effects it calls for.
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<AppCommand> {
        let mut commands = Vec::new();

        match event {
            AppEvent::MenuOpened => self.nav.open_menu(),
            AppEvent::MenuClosed => self.nav.close_menu(),
            AppEvent::KeyPressed(key) => {
                self.nav.handle_key(&key);
            }
            AppEvent::NavLinkClicked { target_top } => {
                self.nav.close_menu();
                commands.extend(self.scroll_to_section(target_top));
            }
            AppEvent::AnchorClicked { target_top } => {
                commands.extend(self.scroll_to_section(target_top));
            }
            AppEvent::Scrolled(metrics) => {
                self.nav.update_scroll(
                    &metrics,
                    self.config.scrolled_threshold,
                    self.config.active_link_offset,
                );
                if self.has_hero {
                    self.effects.update_parallax(
                        metrics.scroll_y,
                        metrics.viewport_height,
                        self.config.parallax_rate,
                    );
                }
            }

            AppEvent::ThemeToggled => {
                self.theme = self.theme.toggled();
                tracing::info!(theme = %self.theme, "theme toggled");
                commands.push(AppCommand::PersistTheme(self.theme));
            }
            AppEvent::FilterSelected(tag) => self.filter.select(tag),
            AppEvent::CardHovered { index, hovered } => {
                if let Some(card) = self.filter.cards.get_mut(index) {
                    card.lifted = hovered;
                }
            }

            AppEvent::SectionIntersected(index) => {
                if self.reveal.intersect(index) {
                    commands.push(AppCommand::Schedule {
                        timer: Timer::FillSkills,
                        delay_ms: self.config.skill_fill_delay_ms,
                    });
                }
            }

            AppEvent::FieldInput { field, value } => self.form.input(field, value),
            AppEvent::FieldBlurred { field, value } => self.form.blur(field, value),
            AppEvent::FormSubmitted { values } => match self.form.submit(values) {
                SubmitOutcome::Started => commands.push(AppCommand::Schedule {
                    timer: Timer::SubmitComplete,
                    delay_ms: self.config.submit_delay_ms,
                }),
                SubmitOutcome::Rejected { first_invalid } => {
                    commands.push(AppCommand::FocusField(first_invalid));
                    commands.push(AppCommand::CenterField(first_invalid));
                }
                SubmitOutcome::Ignored => {}
            },

            AppEvent::PageLoaded => {
                self.effects.page_loaded = true;
                commands.push(AppCommand::Schedule {
                    timer: Timer::RevealHero,
                    delay_ms: self.config.hero_reveal_delay_ms,
                });
            }
            AppEvent::TimerFired(timer) => commands.extend(self.fire_timer(timer)),
        }

        commands
    }

    fn scroll_to_section(&self, target_top: Option<f64>) -> Option<AppCommand> {
        target_top.map(|top| AppCommand::ScrollTo {
            top: scroll_target(top, self.config.header_offset),
        })
    }

    fn fire_timer(&mut self, timer: Timer) -> Vec<AppCommand> {
        tracing::debug!(?timer, "timer fired");
        match timer {
            Timer::FillSkills => {
                self.reveal.fill_skills();
                Vec::new()
            }
            Timer::SubmitComplete => {
                self.form.complete();
                vec![
                    AppCommand::ShowNotice(self.config.confirmation_notice.clone()),
                    AppCommand::ResetForm,
                ]
            }
            Timer::RevealHero => {
                self.effects.hero_visible = self.has_hero;
                Vec::new()
            }
        }
    }

    /// Page scroll is locked while the overlay menu is open.
    pub fn is_scroll_locked(&self) -> bool {
        self.nav.menu_open
    }

    /// Body `overflow` to write after a menu open/close since `last`.
    /// Nothing on the first render, so the page's own stylesheet stands.
    pub fn body_overflow_change(&self, last: Option<&UiState>) -> Option<&'static str> {
        let prev = last?;
        if prev.nav.menu_open == self.nav.menu_open {
            return None;
        }
        Some(if self.is_scroll_locked() { "hidden" } else { "auto" })
    }

    pub fn submit_disabled(&self) -> bool {
        self.form.is_pending()
    }
}
