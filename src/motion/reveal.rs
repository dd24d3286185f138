use std::fmt;

/// Vertical offset applied to elements that have not revealed yet.
pub const HIDDEN_OFFSET_PX: u32 = 8;

/// Inline style for one element of a reveal group.
///
/// The transition itself (duration, easing) comes from the element's CSS
/// classes; this only carries the animated endpoints and the stagger delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub offset_y_px: u32,
    pub opacity: u8,
    pub delay_ms: u32,
}

impl fmt::Display for RevealStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform:translateY({}px);opacity:{};transition-delay:{}ms",
            self.offset_y_px, self.opacity, self.delay_ms
        )
    }
}

impl RevealStyle {
    pub fn inline(&self) -> String {
        self.to_string()
    }
}

/// Map a reveal group member's visibility and position to its style.
///
/// Hidden elements sit slightly below their resting place at zero opacity
/// with no delay, so that un-revealing (which never happens, the trigger is
/// one-shot) would not look delayed. Visible elements rest at the origin
/// with a delay that grows linearly with their index in the group; whole
/// sections use index 0.
pub fn reveal_style(visible: bool, index: usize, base_delay_ms: u32, step_ms: u32) -> RevealStyle {
    if visible {
        RevealStyle {
            offset_y_px: 0,
            opacity: 1,
            delay_ms: base_delay_ms + index as u32 * step_ms,
        }
    } else {
        RevealStyle {
            offset_y_px: HIDDEN_OFFSET_PX,
            opacity: 0,
            delay_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_output_is_constant() {
        let expected = RevealStyle {
            offset_y_px: HIDDEN_OFFSET_PX,
            opacity: 0,
            delay_ms: 0,
        };
        assert_eq!(reveal_style(false, 0, 0, 0), expected);
        assert_eq!(reveal_style(false, 7, 400, 50), expected);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        assert_eq!(reveal_style(true, 3, 400, 50), reveal_style(true, 3, 400, 50));
        assert_eq!(reveal_style(false, 3, 400, 50), reveal_style(false, 3, 400, 50));
    }

    #[test]
    fn delay_increases_by_step_per_index() {
        let base = 400;
        let step = 50;
        for i in 0..10 {
            let a = reveal_style(true, i, base, step);
            let b = reveal_style(true, i + 1, base, step);
            assert_eq!(b.delay_ms - a.delay_ms, step);
        }
    }

    #[test]
    fn section_reveal_uses_base_delay_only() {
        let style = reveal_style(true, 0, 200, 100);
        assert_eq!(style.offset_y_px, 0);
        assert_eq!(style.opacity, 1);
        assert_eq!(style.delay_ms, 200);
    }

    #[test]
    fn renders_as_inline_css() {
        let style = reveal_style(true, 2, 400, 50);
        assert_eq!(
            style.inline(),
            "transform:translateY(0px);opacity:1;transition-delay:500ms"
        );
        assert_eq!(
            reveal_style(false, 2, 400, 50).inline(),
            "transform:translateY(8px);opacity:0;transition-delay:0ms"
        );
    }
}
