use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content::{EMAIL, GITHUB_URL, LINKEDIN_URL};

use super::icons::Icon;

// Stamped by build.rs; close enough to "now" for a copyright line.
fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .expect("BUILD_TIME should be RFC 3339")
        .year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border py-8">
            <div class="mx-auto flex max-w-6xl flex-col items-center gap-4 px-6 sm:flex-row sm:justify-between">
                <p class="font-mono text-xs text-muted-foreground">
                    "Designed & Built by Keiner Arias · " {build_year()}
                </p>
                <div class="flex items-center gap-4">
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-muted-foreground transition-colors hover:text-primary"
                        aria-label="GitHub"
                    >
                        <Icon name="github" size=16 />
                    </a>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-muted-foreground transition-colors hover:text-primary"
                        aria-label="LinkedIn"
                    >
                        <Icon name="linkedin" size=16 />
                    </a>
                    <a
                        href=format!("mailto:{EMAIL}")
                        class="text-muted-foreground transition-colors hover:text-primary"
                        aria-label="Email"
                    >
                        <Icon name="mail" size=16 />
                    </a>
                </div>
            </div>
        </footer>
    }
}
