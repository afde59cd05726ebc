use chrono::{DateTime, Datelike};

pub const OWNER_NAME: &str = "Yash Kumawat";
pub const OWNER_INITIALS: &str = "YK";
pub const TAGLINE: &str = "B.Tech CSE Student | DevOps & Data Science Enthusiast";
pub const RESUME_HREF: &str = "/resume.pdf";

/// Labels cycled by the hero ticker.
pub const HERO_SKILLS: [&str; 8] = [
    "JavaScript",
    "Python",
    "Docker",
    "Jenkins",
    "Kubernetes",
    "AWS",
    "Flask",
    "Linux",
];

/// Icons used across the page, rendered from the lucide icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    GraduationCap,
    Code,
    Server,
    Chart,
    Wrench,
    Database,
    Cloud,
    Phone,
    Mail,
    Chat,
    Smartphone,
    LinkedIn,
    GitHub,
    Instagram,
    Home,
    User,
    Award,
    Book,
    Calendar,
    MapPin,
    ExternalLink,
    Send,
    ChevronDown,
    Download,
    Heart,
    Plus,
    Sun,
    Moon,
    Menu,
    Close,
    Upload,
    Camera,
}

impl Glyph {
    pub fn class_name(self) -> &'static str {
        match self {
            Glyph::GraduationCap => "icon-graduation-cap",
            Glyph::Code => "icon-code",
            Glyph::Server => "icon-server",
            Glyph::Chart => "icon-bar-chart-3",
            Glyph::Wrench => "icon-wrench",
            Glyph::Database => "icon-database",
            Glyph::Cloud => "icon-cloud",
            Glyph::Phone => "icon-phone",
            Glyph::Mail => "icon-mail",
            Glyph::Chat => "icon-message-circle",
            Glyph::Smartphone => "icon-smartphone",
            Glyph::LinkedIn => "icon-linkedin",
            Glyph::GitHub => "icon-github",
            Glyph::Instagram => "icon-instagram",
            Glyph::Home => "icon-home",
            Glyph::User => "icon-user",
            Glyph::Award => "icon-award",
            Glyph::Book => "icon-book-open",
            Glyph::Calendar => "icon-calendar",
            Glyph::MapPin => "icon-map-pin",
            Glyph::ExternalLink => "icon-external-link",
            Glyph::Send => "icon-send",
            Glyph::ChevronDown => "icon-chevron-down",
            Glyph::Download => "icon-download",
            Glyph::Heart => "icon-heart",
            Glyph::Plus => "icon-plus",
            Glyph::Sun => "icon-sun",
            Glyph::Moon => "icon-moon",
            Glyph::Menu => "icon-menu",
            Glyph::Close => "icon-x",
            Glyph::Upload => "icon-upload",
            Glyph::Camera => "icon-camera",
        }
    }
}

pub struct Milestone {
    pub title: &'static str,
    pub achievement: &'static str,
    pub glyph: Glyph,
    pub description: &'static str,
}

pub static JOURNEY: [Milestone; 4] = [
    Milestone {
        title: "Class X",
        achievement: "57%",
        glyph: Glyph::GraduationCap,
        description: "Foundation years building academic discipline",
    },
    Milestone {
        title: "Class XII",
        achievement: "56%",
        glyph: Glyph::GraduationCap,
        description: "Science stream with focus on mathematics and computer science",
    },
    Milestone {
        title: "B.Tech CSE",
        achievement: "Pursuing",
        glyph: Glyph::Code,
        description: "Computer Science Engineering at Arya College, Jaipur",
    },
    Milestone {
        title: "DevOps Journey",
        achievement: "Ongoing",
        glyph: Glyph::Server,
        description: "Passionate about automation, Linux, and cloud technologies",
    },
];

pub struct QuickStat {
    pub value: &'static str,
    pub caption: &'static str,
    /// Fixed accent, or `None` to follow the theme accent.
    pub color: Option<&'static str>,
}

pub static QUICK_STATS: [QuickStat; 3] = [
    QuickStat { value: "B.Tech CSE", caption: "Pursuing", color: None },
    QuickStat { value: "DevOps", caption: "Enthusiast", color: Some("text-green-400") },
    QuickStat { value: "Data Science", caption: "Explorer", color: Some("text-purple-400") },
];

pub struct Passion {
    pub title: &'static str,
    pub glyph: Glyph,
    pub glyph_color: &'static str,
    pub hover_border: &'static str,
    pub body: &'static str,
}

pub static PASSIONS: [Passion; 3] = [
    Passion {
        title: "DevOps & Automation",
        glyph: Glyph::Server,
        glyph_color: "text-cyan-400",
        hover_border: "hover:border-green-400/50",
        body: "Building efficient CI/CD pipelines and automating infrastructure with tools like Docker, Jenkins, and Kubernetes. Passionate about Linux systems and cloud technologies.",
    },
    Passion {
        title: "Data Science & ML",
        glyph: Glyph::Chart,
        glyph_color: "text-blue-400",
        hover_border: "hover:border-blue-400/50",
        body: "Exploring machine learning algorithms and data visualization tools to extract meaningful insights from complex datasets using Python and Jupyter.",
    },
    Passion {
        title: "Hands-on Learning",
        glyph: Glyph::Code,
        glyph_color: "text-purple-400",
        hover_border: "hover:border-purple-400/50",
        body: "Believer in practical learning through building projects, experimenting with new technologies, and contributing to open-source communities.",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub description: &'static str,
}

pub struct SkillCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: Glyph,
    /// `(dark, light)` gradient stops.
    pub color: (&'static str, &'static str),
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        id: "languages",
        name: "Languages",
        glyph: Glyph::Code,
        color: ("from-cyan-500 to-blue-500", "from-blue-500 to-purple-500"),
        skills: &[
            Skill { name: "JavaScript", level: 85, description: "Modern ES6+ features, async/await, DOM manipulation" },
            Skill { name: "Python", level: 80, description: "Data analysis, automation scripts, web development" },
        ],
    },
    SkillCategory {
        id: "tools",
        name: "DevOps Tools",
        glyph: Glyph::Wrench,
        color: ("from-green-500 to-emerald-500", "from-green-500 to-teal-500"),
        skills: &[
            Skill { name: "Linux", level: 85, description: "System administration, shell scripting, server management" },
            Skill { name: "Docker", level: 75, description: "Containerization, multi-stage builds, orchestration" },
            Skill { name: "Jenkins", level: 70, description: "CI/CD pipelines, automated testing, deployment" },
            Skill { name: "Kubernetes", level: 65, description: "Container orchestration, scaling, service mesh" },
        ],
    },
    SkillCategory {
        id: "data",
        name: "Data Science",
        glyph: Glyph::Database,
        color: ("from-purple-500 to-pink-500", "from-purple-500 to-pink-500"),
        skills: &[
            Skill { name: "Python", level: 80, description: "NumPy, Pandas, Matplotlib for data analysis" },
            Skill { name: "Jupyter", level: 85, description: "Interactive notebooks, data visualization" },
            Skill { name: "ML Basics", level: 70, description: "Scikit-learn, basic algorithms, model evaluation" },
        ],
    },
    SkillCategory {
        id: "cloud",
        name: "Cloud & Web",
        glyph: Glyph::Cloud,
        color: ("from-orange-500 to-red-500", "from-orange-500 to-red-500"),
        skills: &[
            Skill { name: "AWS", level: 70, description: "EC2, S3, Lambda, CloudFormation basics" },
            Skill { name: "Flask", level: 75, description: "RESTful APIs, templating, database integration" },
            Skill { name: "REST APIs", level: 80, description: "API design, authentication, documentation" },
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub timeline: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub color: &'static str,
    pub glyph: Glyph,
}

pub static PROJECTS: [Project; 1] = [Project {
    title: "E.Hospital",
    category: "Healthcare App",
    timeline: "Current Project",
    description: "A comprehensive hospital management application providing seamless bed booking and doctor appointment scheduling for patients and healthcare providers.",
    features: &[
        "Hospital bed booking system",
        "Doctor appointment scheduling",
        "Patient management dashboard",
        "Real-time availability tracking",
    ],
    tech_stack: &["React", "Node.js", "MongoDB", "Express"],
    color: "from-green-500 to-teal-500",
    glyph: Glyph::Smartphone,
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Current,
    Completed,
}

pub struct EducationEntry {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub progress: Progress,
    pub grade: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub color: &'static str,
}

/// Only this many highlights are shown per card.
pub const SHOWN_HIGHLIGHTS: usize = 3;

impl EducationEntry {
    pub fn shown_highlights(&self) -> &'static [&'static str] {
        &self.highlights[..self.highlights.len().min(SHOWN_HIGHLIGHTS)]
    }
}

pub static EDUCATION: [EducationEntry; 3] = [
    EducationEntry {
        degree: "Bachelor of Technology",
        field: "Computer Science Engineering",
        institution: "Arya College of Engineering",
        location: "Jaipur, Rajasthan",
        period: "Pursuing",
        progress: Progress::Current,
        grade: "In Progress",
        description: "Focusing on computer science fundamentals, software engineering, and modern technologies including DevOps and data science.",
        highlights: &[
            "Object-Oriented Programming",
            "Data Structures & Algorithms",
            "Database Management",
            "Software Engineering",
            "Web Development",
        ],
        color: "from-blue-500 to-purple-500",
    },
    EducationEntry {
        degree: "Higher Secondary Certificate",
        field: "Science Stream",
        institution: "Senior Secondary School",
        location: "Jaipur, Rajasthan",
        period: "Completed",
        progress: Progress::Completed,
        grade: "56%",
        description: "Completed higher secondary education with focus on Physics, Chemistry, and Mathematics.",
        highlights: &["Physics", "Chemistry", "Mathematics", "Computer Science", "English"],
        color: "from-green-500 to-teal-500",
    },
    EducationEntry {
        degree: "Secondary School Certificate",
        field: "General Education",
        institution: "Secondary School",
        location: "Jaipur, Rajasthan",
        period: "Completed",
        progress: Progress::Completed,
        grade: "57%",
        description: "Completed secondary education with solid academic performance across all subjects.",
        highlights: &["Mathematics", "Science", "English", "Social Studies", "Hindi"],
        color: "from-cyan-500 to-blue-500",
    },
];

pub struct Achievement {
    pub value: &'static str,
    pub caption: &'static str,
    /// `(dark, light)` text colors.
    pub color: (&'static str, &'static str),
}

pub static ACHIEVEMENTS: [Achievement; 3] = [
    Achievement { value: "57%", caption: "Class X Score", color: ("text-cyan-400", "text-blue-600") },
    Achievement { value: "56%", caption: "Class XII Score", color: ("text-green-400", "text-green-600") },
    Achievement { value: "B.Tech", caption: "Currently Pursuing", color: ("text-purple-400", "text-purple-600") },
];

pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub glyph: Glyph,
    pub color: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "Phone",
        value: "+91-8000057147",
        href: "tel:+918000057147",
        glyph: Glyph::Phone,
        color: "from-green-500 to-emerald-500",
    },
    ContactChannel {
        label: "Email",
        value: "yashkanderiya@gmail.com",
        href: "mailto:yashkanderiya@gmail.com",
        glyph: Glyph::Mail,
        color: "from-blue-500 to-cyan-500",
    },
    ContactChannel {
        label: "WhatsApp",
        value: "Chat with me",
        href: "https://wa.me/918000057147",
        glyph: Glyph::Chat,
        color: "from-green-500 to-emerald-500",
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub glyph: Glyph,
    /// `(dark, light)` hover color.
    pub hover: (&'static str, &'static str),
}

pub static SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/yash-kumawat-547821339/",
        glyph: Glyph::LinkedIn,
        hover: ("hover:text-blue-400", "hover:text-blue-400"),
    },
    SocialLink {
        name: "GitHub",
        href: "https://github.com/Yashkumawat98/Testing-github",
        glyph: Glyph::GitHub,
        hover: ("hover:text-gray-300", "hover:text-gray-600"),
    },
    SocialLink {
        name: "WhatsApp",
        href: "https://wa.me/918000057147",
        glyph: Glyph::Chat,
        hover: ("hover:text-green-400", "hover:text-green-400"),
    },
    SocialLink {
        name: "Instagram",
        href: "#",
        glyph: Glyph::Instagram,
        hover: ("hover:text-pink-400", "hover:text-pink-400"),
    },
    SocialLink {
        name: "Gmail",
        href: "mailto:yashkanderiya@gmail.com",
        glyph: Glyph::Mail,
        hover: ("hover:text-red-400", "hover:text-red-400"),
    },
];

const FALLBACK_YEAR: i32 = 2024;

/// Year stamped into the footer, taken from the build time.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME"))
}

fn year_of(rfc3339: &str) -> i32 {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|d| d.year())
        .unwrap_or(FALLBACK_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in &SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{}", category.id);
            for skill in category.skills {
                assert!(skill.level <= 100, "{}", skill.name);
            }
        }
    }

    #[test]
    fn test_highlights_are_capped() {
        for entry in &EDUCATION {
            assert!(entry.shown_highlights().len() <= SHOWN_HIGHLIGHTS);
        }
        assert_eq!(
            EDUCATION[1].shown_highlights(),
            &["Physics", "Chemistry", "Mathematics"]
        );
    }

    #[test]
    fn test_one_current_education_entry() {
        let current = EDUCATION
            .iter()
            .filter(|e| e.progress == Progress::Current)
            .count();
        assert_eq!(current, 1);
    }

    #[test]
    fn test_linked_glyphs_use_lucide_classes() {
        let glyphs = SOCIAL_LINKS
            .iter()
            .map(|s| s.glyph)
            .chain(CONTACT_CHANNELS.iter().map(|c| c.glyph))
            .chain(PROJECTS.iter().map(|p| p.glyph));
        for glyph in glyphs {
            assert!(glyph.class_name().starts_with("icon-"), "{glyph:?}");
        }
    }

    #[test]
    fn test_year_of_build_time() {
        assert_eq!(year_of("2025-06-01T12:00:00+00:00"), 2025);
        assert_eq!(year_of("garbage"), FALLBACK_YEAR);
        assert!(copyright_year() >= FALLBACK_YEAR);
    }
}
