//! Theme-dependent class table.
//!
//! Every themed element in the page names a [`Tone`]; the dark/light class
//! strings live here rather than in each view.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Page,
    /// Hero/about/certifications/education backdrop.
    SectionPrimary,
    /// Skills/projects/contact backdrop.
    SectionAlternate,
    Heading,
    Body,
    Muted,
    Accent,
    Success,
    Card,
    CardHover,
    Panel,
    Pill,
    Chip,
    Input,
    InputIcon,
    InputIconFocused,
    Label,
    PrimaryButton,
    SecondaryButton,
    OutlineButton,
    IconBadge,
    NavBar,
    NavLink,
    NavLinkActive,
    MobileMenu,
    Modal,
    DropZone,
    DropZoneActive,
    Danger,
    Tooltip,
    Footer,
    SkillTrack,
}

pub fn style_for(is_dark: bool, tone: Tone) -> &'static str {
    let (dark, light) = match tone {
        Tone::Page => ("bg-black text-white", "bg-white text-gray-900"),
        Tone::SectionPrimary => (
            "bg-gradient-to-br from-gray-900 via-black to-gray-900",
            "bg-gradient-to-br from-white via-gray-50 to-white",
        ),
        Tone::SectionAlternate => (
            "bg-gradient-to-br from-black via-gray-900 to-black",
            "bg-gradient-to-br from-gray-50 via-white to-gray-100",
        ),
        Tone::Heading => ("text-white", "text-gray-900"),
        Tone::Body => ("text-gray-300", "text-gray-600"),
        Tone::Muted => ("text-gray-400", "text-gray-500"),
        Tone::Accent => ("text-cyan-400", "text-blue-600"),
        Tone::Success => ("text-green-400", "text-green-600"),
        Tone::Card => (
            "bg-gray-800/50 backdrop-blur-sm border-gray-700",
            "bg-white/50 backdrop-blur-sm border-gray-200",
        ),
        Tone::CardHover => (
            "hover:border-cyan-400/50 hover:shadow-xl hover:shadow-cyan-500/20",
            "hover:border-blue-400/50 hover:shadow-xl hover:shadow-blue-500/20",
        ),
        Tone::Panel => ("bg-gray-700/80 text-gray-300", "bg-gray-100/80 text-gray-600"),
        Tone::Pill => (
            "bg-gray-800/50 backdrop-blur-sm border-gray-700",
            "bg-white/50 backdrop-blur-sm border-gray-200",
        ),
        Tone::Chip => (
            "bg-gray-700 text-gray-300 border-gray-600 hover:border-cyan-400/50",
            "bg-gray-100 text-gray-600 border-gray-300 hover:border-blue-400/50",
        ),
        Tone::Input => (
            "bg-gray-700/50 border-gray-600 text-white placeholder-gray-400 focus:border-cyan-400 focus:ring-2 focus:ring-cyan-400/20",
            "bg-white border-gray-300 text-gray-900 placeholder-gray-500 focus:border-blue-400 focus:ring-2 focus:ring-blue-400/20",
        ),
        Tone::InputIcon => ("text-gray-400", "text-gray-400"),
        Tone::InputIconFocused => ("text-cyan-400", "text-blue-500"),
        Tone::Label => ("text-gray-300", "text-gray-700"),
        Tone::PrimaryButton => (
            "bg-gradient-to-r from-cyan-500 to-blue-500 text-white hover:from-cyan-600 hover:to-blue-600 hover:shadow-cyan-500/50",
            "bg-gradient-to-r from-blue-500 to-purple-500 text-white hover:from-blue-600 hover:to-purple-600 hover:shadow-blue-500/50",
        ),
        Tone::SecondaryButton => (
            "border-gray-600 text-gray-300 hover:border-gray-500 hover:bg-gray-800/50",
            "border-gray-300 text-gray-600 hover:border-gray-400 hover:bg-gray-50",
        ),
        Tone::OutlineButton => (
            "bg-transparent border-2 border-green-400 text-green-400 hover:bg-green-400 hover:text-black hover:shadow-green-400/50",
            "bg-transparent border-2 border-green-500 text-green-500 hover:bg-green-500 hover:text-white hover:shadow-green-500/50",
        ),
        Tone::IconBadge => (
            "bg-gradient-to-br from-cyan-500 to-blue-500",
            "bg-gradient-to-br from-blue-500 to-purple-500",
        ),
        Tone::NavBar => (
            "bg-black/80 backdrop-blur-md border-b border-gray-800",
            "bg-white/80 backdrop-blur-md border-b border-gray-200",
        ),
        Tone::NavLink => (
            "text-gray-300 hover:text-white hover:bg-gray-800/50",
            "text-gray-600 hover:text-gray-900 hover:bg-gray-100/50",
        ),
        Tone::NavLinkActive => (
            "bg-gradient-to-r from-cyan-500 to-blue-500 text-white shadow-lg shadow-cyan-500/50",
            "bg-gradient-to-r from-blue-500 to-purple-500 text-white shadow-lg shadow-blue-500/50",
        ),
        Tone::MobileMenu => (
            "bg-black/90 backdrop-blur-md border-gray-800",
            "bg-white/90 backdrop-blur-md border-gray-200",
        ),
        Tone::Modal => (
            "bg-gray-800/90 backdrop-blur-md border-gray-700",
            "bg-white/90 backdrop-blur-md border-gray-200",
        ),
        Tone::DropZone => (
            "border-gray-600 hover:border-cyan-400/50",
            "border-gray-300 hover:border-blue-400/50",
        ),
        Tone::DropZoneActive => (
            "border-cyan-400 bg-cyan-400/10",
            "border-blue-400 bg-blue-400/10",
        ),
        Tone::Danger => (
            "bg-red-500/20 border border-red-500/30 text-red-400 hover:bg-red-500/30",
            "bg-red-500/20 border border-red-500/30 text-red-600 hover:bg-red-500/30",
        ),
        Tone::Tooltip => (
            "bg-gray-700 text-gray-200 border border-gray-600",
            "bg-white text-gray-700 border border-gray-200 shadow-lg",
        ),
        Tone::Footer => ("bg-gray-900 border-gray-800", "bg-gray-50 border-gray-200"),
        Tone::SkillTrack => ("bg-gray-700", "bg-gray-200"),
    };
    if is_dark {
        dark
    } else {
        light
    }
}

/// Gradient used for section titles, given as `(dark, light)` stops.
pub fn title_gradient(is_dark: bool, stops: (&'static str, &'static str)) -> String {
    let stops = if is_dark { stops.0 } else { stops.1 };
    format!("bg-gradient-to-r bg-clip-text text-transparent {stops}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_tone() {
        assert_eq!(style_for(true, Tone::Page), "bg-black text-white");
        assert_eq!(style_for(false, Tone::Page), "bg-white text-gray-900");
    }

    #[test]
    fn test_dark_and_light_differ() {
        // input icons are gray in both themes
        let tones = [
            Tone::Heading,
            Tone::Body,
            Tone::Card,
            Tone::PrimaryButton,
            Tone::NavBar,
            Tone::Modal,
            Tone::Footer,
        ];
        for tone in tones {
            assert_ne!(style_for(true, tone), style_for(false, tone), "{tone:?}");
        }
        assert_eq!(style_for(true, Tone::InputIcon), style_for(false, Tone::InputIcon));
    }

    #[test]
    fn test_title_gradient() {
        let stops = ("from-cyan-400 to-blue-500", "from-blue-600 to-purple-600");
        assert_eq!(
            title_gradient(false, stops),
            "bg-gradient-to-r bg-clip-text text-transparent from-blue-600 to-purple-600"
        );
    }
}
