mod about;
mod certifications;
mod contact;
mod footer;
mod hero;
mod hooks;
mod icons;
mod nav;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{SITE_DESCRIPTION, SITE_NAME, SITE_TITLE};

use about::AboutSection;
use certifications::CertificationsSection;
use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use nav::Navigation;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="author" content=SITE_NAME />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=SITE_TITLE />
        <Meta property="og:description" content=SITE_DESCRIPTION />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The single page: every section stacked into one scroll, each owning its
/// own reveal trigger.
#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Navigation />
        <main>
            <HeroSection />
            <AboutSection />
            <ProjectsSection />
            <SkillsSection />
            <CertificationsSection />
            <ContactSection />
        </main>
        <Footer />
    }
}
