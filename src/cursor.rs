/// Elements that make the cursor grow while hovered.
pub const INTERACTIVE_SELECTOR: &str = "button, a, input, textarea, [role=\"button\"]";

const DOT_RADIUS: f64 = 8.0;
const RING_RADIUS: f64 = 16.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
}

impl CursorState {
    pub fn dot_transform(&self) -> String {
        translate(self.x - DOT_RADIUS, self.y - DOT_RADIUS)
    }

    pub fn ring_transform(&self) -> String {
        translate(self.x - RING_RADIUS, self.y - RING_RADIUS)
    }

    pub fn dot_scale_class(&self) -> &'static str {
        if self.hovering {
            "scale-150"
        } else {
            "scale-100"
        }
    }

    pub fn ring_scale_class(&self) -> &'static str {
        if self.hovering {
            "scale-200 border-opacity-100"
        } else {
            "scale-100 border-opacity-50"
        }
    }
}

fn translate(x: f64, y: f64) -> String {
    format!("transform: translate({x}px, {y}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transforms_center_on_pointer() {
        let cursor = CursorState {
            x: 100.0,
            y: 40.0,
            hovering: false,
        };
        assert_eq!(cursor.dot_transform(), "transform: translate(92px, 32px)");
        assert_eq!(cursor.ring_transform(), "transform: translate(84px, 24px)");
        assert_eq!(cursor.dot_scale_class(), "scale-100");
    }

    #[test]
    fn test_hover_scales() {
        let cursor = CursorState {
            hovering: true,
            ..Default::default()
        };
        assert_eq!(cursor.dot_scale_class(), "scale-150");
        assert!(cursor.ring_scale_class().starts_with("scale-200"));
    }
}
