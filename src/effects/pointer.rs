use crate::config::GLOW_SIZE;

/// Last known cursor position in viewport px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        PointerPosition { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPlacement {
    pub left: f64,
    pub top: f64,
}

impl GlowPlacement {
    pub fn to_css(&self) -> String {
        format!("left: {}px; top: {}px;", self.left, self.top)
    }
}

/// Top-left corner that centres the glow on the cursor.
pub fn glow_placement(pointer: PointerPosition) -> GlowPlacement {
    let half = GLOW_SIZE / 2.0;
    GlowPlacement {
        left: pointer.x - half,
        top: pointer.y - half,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_centres_on_cursor() {
        let placement = glow_placement(PointerPosition::new(500.0, 300.0));
        assert_eq!(placement, GlowPlacement { left: 308.0, top: 108.0 });
    }

    #[test]
    fn initial_pointer_puts_glow_off_the_top_left() {
        let placement = glow_placement(PointerPosition::default());
        assert_eq!(placement.left, -192.0);
        assert_eq!(placement.top, -192.0);
    }

    #[test]
    fn placement_is_exact_for_fractional_coordinates() {
        for &(x, y) in &[(0.5, 0.25), (1919.75, 1079.5), (-3.0, 7.125)] {
            let placement = glow_placement(PointerPosition::new(x, y));
            assert_eq!(placement.left, x - 192.0);
            assert_eq!(placement.top, y - 192.0);
        }
    }

    #[test]
    fn css_uses_pixels() {
        let css = glow_placement(PointerPosition::new(500.0, 300.0)).to_css();
        assert_eq!(css, "left: 308px; top: 108px;");
    }
}
