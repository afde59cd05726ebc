use crate::content::Glyph;

/// Vertical scroll past which the nav bar gets its backdrop.
pub const SCROLLED_OFFSET: f64 = 50.0;
/// A section is active while it spans this line (px from the viewport top).
pub const SECTION_PROBE_LINE: f64 = 100.0;

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Glyph,
}

pub static NAV_ITEMS: [NavItem; 7] = [
    NavItem { id: "home", label: "Home", icon: Glyph::Home },
    NavItem { id: "about", label: "About", icon: Glyph::User },
    NavItem { id: "skills", label: "Skills", icon: Glyph::Code },
    NavItem { id: "certifications", label: "Certificates", icon: Glyph::Award },
    NavItem { id: "projects", label: "Projects", icon: Glyph::Code },
    NavItem { id: "education", label: "Education", icon: Glyph::Book },
    NavItem { id: "contact", label: "Contact", icon: Glyph::Mail },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET
}

/// Bounding box of a section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

/// First section (in page order) spanning the probe line. `None` keeps
/// whatever was active before, e.g. while over the footer.
pub fn active_section<'a, I>(sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, Option<SectionRect>)>,
{
    sections.into_iter().find_map(|(id, rect)| {
        let rect = rect?;
        (rect.top <= SECTION_PROBE_LINE && rect.bottom >= SECTION_PROBE_LINE).then_some(id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_active_section_spans_probe() {
        let sections = vec![
            ("home", Some(SectionRect { top: -900.0, bottom: -20.0 })),
            ("about", Some(SectionRect { top: -20.0, bottom: 700.0 })),
            ("skills", Some(SectionRect { top: 700.0, bottom: 1500.0 })),
        ];
        assert_eq!(active_section(sections), Some("about"));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let sections = vec![
            ("home", None),
            ("about", Some(SectionRect { top: 100.0, bottom: 100.0 })),
        ];
        assert_eq!(active_section(sections), Some("about"));
        assert_eq!(active_section(vec![("home", None)]), None);
    }

    #[test]
    fn test_nav_items_are_page_order() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(|i| i.id).collect();
        assert_eq!(
            ids,
            ["home", "about", "skills", "certifications", "projects", "education", "contact"]
        );
    }
}
