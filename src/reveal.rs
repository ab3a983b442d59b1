//! Scroll-triggered section reveal and the skill-bar fill.

/// Section that triggers the skill-bar fill once revealed.
pub const SKILLS_SECTION_ID: &str = "skills";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReveal {
    /// Empty for sections without an id attribute.
    pub id: String,
    /// One-way: set on first intersection, never cleared.
    pub revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillBar {
    /// Declared `data-width`, in percent.
    pub target_percent: f64,
}

impl SkillBar {
    pub fn width_css(&self) -> String {
        format!("{}%", self.target_percent)
    }
}

/// Reveal markers for observed sections plus the skill-bar fill flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealState {
    pub sections: Vec<SectionReveal>,
    pub skill_bars: Vec<SkillBar>,
    /// Fill timer already started.
    pub skills_scheduled: bool,
    /// Bars show their target widths.
    pub skills_filled: bool,
}

impl RevealState {
    pub fn new(section_ids: Vec<String>, skill_bars: Vec<SkillBar>) -> Self {
        Self {
            sections: section_ids
                .into_iter()
                .map(|id| SectionReveal {
                    id,
                    revealed: false,
                })
                .collect(),
            skill_bars,
            skills_scheduled: false,
            skills_filled: false,
        }
    }

    /// Mark the section at `index` revealed. Returns true when the skill fill
    /// should be scheduled.
    pub fn intersect(&mut self, index: usize) -> bool {
        let Some(section) = self.sections.get_mut(index) else {
            return false;
        };
        if !section.revealed {
            tracing::debug!(index, section = %section.id, "section revealed");
            section.revealed = true;
        }

        if section.id == SKILLS_SECTION_ID && !self.skills_scheduled {
            self.skills_scheduled = true;
            return true;
        }
        false
    }

    pub fn fill_skills(&mut self) {
        self.skills_filled = true;
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id && s.revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> RevealState {
        RevealState::new(
            vec!["about".into(), "skills".into()],
            vec![SkillBar {
                target_percent: 85.0,
            }],
        )
    }

    #[test]
    fn reveal_is_one_way() {
        let mut reveal = state();
        assert!(!reveal.is_revealed("about"));
        reveal.intersect(0);
        reveal.intersect(0);
        assert!(!reveal.intersect(7));
        assert!(reveal.is_revealed("about"));
        assert!(!reveal.is_revealed("skills"));
    }

    #[test]
    fn skills_fill_is_scheduled_once() {
        let mut reveal = state();
        assert!(reveal.intersect(1));
        assert!(!reveal.intersect(1));
        assert!(!reveal.skills_filled);
        reveal.fill_skills();
        assert!(reveal.skills_filled);
        assert_eq!(reveal.skill_bars[0].width_css(), "85%");
    }
}
