//! Cosmetic effects: card hover lift, hero parallax and the page-load reveal.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectsState {
    /// Body carries `loaded`.
    pub page_loaded: bool,
    /// Hero carries `visible`.
    pub hero_visible: bool,
    /// Last parallax offset applied to the hero (px). `None` until the first scroll.
    pub hero_offset: Option<f64>,
}

impl EffectsState {
    /// Parallax only tracks scrolling within the first viewport; past that the
    /// last offset stays in place.
    pub fn update_parallax(&mut self, scroll_y: f64, viewport_height: f64, rate: f64) {
        if scroll_y < viewport_height {
            self.hero_offset = Some(scroll_y * rate);
        }
    }
}

pub fn hero_transform(offset: f64) -> String {
    format!("translate3d(0, {}px, 0)", offset)
}

pub fn card_transform(lifted: bool, lift: f64) -> String {
    if lifted {
        format!("translateY(-{}px)", lift)
    } else {
        "translateY(0)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_stops_past_first_viewport() {
        let mut fx = EffectsState::default();
        fx.update_parallax(100.0, 800.0, -0.2);
        assert_eq!(fx.hero_offset, Some(-20.0));

        fx.update_parallax(900.0, 800.0, -0.2);
        assert_eq!(fx.hero_offset, Some(-20.0));

        fx.update_parallax(0.0, 800.0, -0.2);
        assert_eq!(fx.hero_offset, Some(-0.0));
    }

    #[test]
    fn transforms() {
        assert_eq!(hero_transform(-20.0), "translate3d(0, -20px, 0)");
        assert_eq!(card_transform(true, 8.0), "translateY(-8px)");
        assert_eq!(card_transform(false, 8.0), "translateY(0)");
    }
}
