mod about;
mod background;
mod certifications;
mod contact;
mod cursor;
mod education;
mod footer;
mod hero;
mod icon;
mod local_storage;
mod navigation;
mod profile_picture;
mod projects;
mod reveal;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER_NAME;
use crate::style::Tone;

use about::About;
use background::Background;
use certifications::Certifications;
use contact::Contact;
use cursor::AnimatedCursor;
use education::Education;
use footer::Footer;
use hero::Hero;
use navigation::Navigation;
use projects::Projects;
use skills::Skills;
use theme::{ThemeContext, ThemeToggle};

pub use profile_picture::{PictureSize, ProfilePicture};
pub use reveal::Reveal;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/lucide-static@0.263.1/font/lucide.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    ThemeContext::provide();

    view! {
        <Title text=format!("{OWNER_NAME} | Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio: every section stacked on one page.
#[component]
fn HomePage() -> impl IntoView {
    let theme = theme::use_theme();

    view! {
        <div class=move || {
            format!(
                "min-h-screen transition-colors duration-500 overflow-x-hidden cursor-none {}",
                theme.tone(Tone::Page),
            )
        }>
            <AnimatedCursor />
            <Background />
            <Navigation />
            <ThemeToggle />
            <main class="relative z-10">
                <section id="home">
                    <Hero />
                </section>
                <section id="about">
                    <About />
                </section>
                <section id="skills">
                    <Skills />
                </section>
                <section id="certifications">
                    <Certifications />
                </section>
                <section id="projects">
                    <Projects />
                </section>
                <section id="education">
                    <Education />
                </section>
                <section id="contact">
                    <Contact />
                </section>
            </main>
            <Footer />
        </div>
    }
}
