use leptos::prelude::*;

use crate::content::{GITHUB_URL, ROLES};
use crate::motion::{reveal_style, TypewriterTiming};

use super::hooks::{use_mounted, use_typewriter};
use super::icons::Icon;

#[component]
pub fn HeroSection() -> impl IntoView {
    let mounted = use_mounted();
    let role_text = use_typewriter(ROLES, TypewriterTiming::default());

    view! {
        <section
            id="hero"
            class="relative flex min-h-screen items-center justify-center overflow-hidden"
        >
            // Grid background + radial overlay
            <div class="grid-pattern absolute inset-0 opacity-30"></div>
            <div class="absolute inset-0 bg-[radial-gradient(ellipse_at_center,oklch(0.78_0.15_200_/_0.08)_0%,transparent_70%)]"></div>

            <div
                class="relative z-10 mx-auto max-w-4xl px-6 text-center transition-all duration-1000"
                style=move || reveal_style(mounted.get(), 0, 0, 0).inline()
            >
                // Status badge
                <div class="mb-8 inline-flex items-center gap-2 rounded-full border border-border bg-secondary/50 px-4 py-1.5 text-xs text-muted-foreground backdrop-blur-sm">
                    <span class="relative flex h-2 w-2">
                        <span class="absolute inline-flex h-full w-full animate-ping rounded-full bg-primary opacity-75"></span>
                        <span class="relative inline-flex h-2 w-2 rounded-full bg-primary"></span>
                    </span>
                    "Available for new opportunities"
                </div>

                <h1 class="mb-4 text-4xl font-bold tracking-tight text-foreground sm:text-5xl md:text-7xl">
                    <span class="text-balance">"Keiner David"</span>
                    <br />
                    <span class="text-primary">"Arias Morales"</span>
                </h1>

                // Typewriter role line
                <div class="mb-6 flex h-8 items-center justify-center font-mono text-base text-muted-foreground sm:text-lg">
                    <span class="text-primary/60">">"</span>
                    <span class="ml-2">{move || role_text.get()}</span>
                    <span class="typewriter-cursor ml-0.5">"\u{a0}"</span>
                </div>

                <p class="mx-auto mb-10 max-w-2xl text-balance text-sm leading-relaxed text-muted-foreground sm:text-base">
                    "Architecting enterprise applications with "
                    <span class="font-medium text-foreground">"ASP.NET Core"</span> ", "
                    <span class="font-medium text-foreground">"React/Angular"</span> ", and "
                    <span class="font-medium text-foreground">"AWS"</span>
                    ". Pioneering secure AI integration through "
                    <span class="font-medium text-foreground">"MCP protocol"</span> "."
                </p>

                // CTA buttons
                <div class="flex flex-col items-center justify-center gap-4 sm:flex-row">
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="glow-cyan inline-flex items-center gap-2 rounded-lg bg-primary px-6 py-3 text-sm font-medium text-primary-foreground transition-all hover:opacity-90"
                    >
                        <Icon name="github" size=16 />
                        "View GitHub"
                    </a>
                    <a
                        href="#projects"
                        class="inline-flex items-center gap-2 rounded-lg border border-border bg-secondary/50 px-6 py-3 text-sm font-medium text-foreground transition-all hover:bg-secondary"
                    >
                        <Icon name="file-text" size=16 />
                        "View Projects"
                    </a>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                <a href="#about" aria-label="Scroll down">
                    <Icon name="arrow-down" size=20 class="text-muted-foreground" />
                </a>
            </div>
        </section>
    }
}
