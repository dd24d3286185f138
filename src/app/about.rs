use leptos::{html, prelude::*};

use crate::content::{CERTIFICATIONS, PROJECTS, TECH_BADGES};
use crate::motion::reveal_style;

use super::hooks::use_reveal;
use super::icons::Icon;

const BADGE_BASE_DELAY_MS: u32 = 400;
const BADGE_STEP_MS: u32 = 50;

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, 0.15);

    view! {
        <section id="about" node_ref=section_ref class="relative py-24 sm:py-32">
            <div class="mx-auto max-w-6xl px-6">
                // Section header
                <div
                    class="mb-16 transition-all duration-700"
                    style=move || reveal_style(visible.get(), 0, 0, 0).inline()
                >
                    <p class="mb-2 font-mono text-sm text-primary">"01. About"</p>
                    <h2 class="text-3xl font-bold text-foreground sm:text-4xl">"About Me"</h2>
                    <div class="mt-4 h-px w-16 bg-primary"></div>
                </div>

                <div class="grid gap-12 lg:grid-cols-5">
                    // Left column - quick info cards
                    <div
                        class="lg:col-span-2 transition-all duration-700"
                        style=move || reveal_style(visible.get(), 0, 200, 0).inline()
                    >
                        <div class="flex flex-col gap-3">
                            <InfoCard icon="map-pin" text="Valledupar, Colombia" />
                            <InfoCard icon="graduation-cap" text="Systems Engineering - UPC" />
                            <InfoCard icon="briefcase" text="Full Stack Developer" />
                        </div>
                    </div>

                    // Right column - bio + badges + stats
                    <div
                        class="lg:col-span-3 transition-all duration-700"
                        style=move || reveal_style(visible.get(), 0, 300, 0).inline()
                    >
                        <div class="space-y-4 text-sm leading-relaxed text-muted-foreground sm:text-base">
                            <p>
                                "Full Stack Developer specializing in enterprise-grade applications with "
                                <span class="text-foreground font-medium">"ASP.NET Core"</span> " and "
                                <span class="text-foreground font-medium">"React/Angular"</span>
                                ". I apply "
                                <span class="text-foreground font-medium">"hexagonal architecture"</span> ", "
                                <span class="text-foreground font-medium">"Domain-Driven Design (DDD)"</span>
                                ", and "
                                <span class="text-foreground font-medium">"SOLID principles"</span>
                                " to build scalable, maintainable systems."
                            </p>
                            <p>
                                "Currently pioneering secure AI integration through the "
                                <span class="text-foreground font-medium">
                                    "Model Context Protocol (MCP)"
                                </span>
                                ", enabling safe connections between Large Language Models and production APIs. My recent work with "
                                <span class="text-foreground font-medium">"AWS S3"</span>
                                " has expanded my cloud architecture capabilities."
                            </p>
                            <p>
                                "Pursuing my Systems Engineering degree at "
                                <span class="text-foreground font-medium">
                                    "Universidad Popular del Cesar"
                                </span>
                                " (2022-2027), where I complement academic foundations with real-world project delivery using agile methodologies."
                            </p>
                        </div>

                        // Tech badges, staggered behind the column reveal
                        <div class="mt-8">
                            <p class="mb-4 font-mono text-xs uppercase tracking-widest text-muted-foreground">
                                "Tech Stack"
                            </p>
                            <div class="flex flex-wrap gap-2">
                                {TECH_BADGES
                                    .iter()
                                    .enumerate()
                                    .map(|(index, badge)| {
                                        view! {
                                            <span
                                                class="inline-flex items-center rounded-md border border-border bg-secondary/50 px-3 py-1 font-mono text-xs text-foreground transition-all duration-300 hover:border-primary/50 hover:text-primary"
                                                style=move || {
                                                    reveal_style(
                                                            visible.get(),
                                                            index,
                                                            BADGE_BASE_DELAY_MS,
                                                            BADGE_STEP_MS,
                                                        )
                                                        .inline()
                                                }
                                            >
                                                {*badge}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        // Stats row
                        <div class="mt-10 grid grid-cols-3 gap-4">
                            <StatCard value=format!("{}+", PROJECTS.len()) label="Projects" />
                            <StatCard
                                value=CERTIFICATIONS.len().to_string()
                                label="Certifications"
                            />
                            <StatCard value="10+".to_string() label="Technologies" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(icon: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 rounded-lg border border-border bg-card p-3">
            <Icon name=icon size=16 class="text-primary" />
            <span class="text-sm text-foreground">{text}</span>
        </div>
    }
}

#[component]
fn StatCard(value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-card p-4 text-center">
            <p class="text-2xl font-bold text-primary">{value}</p>
            <p class="mt-1 text-xs text-muted-foreground">{label}</p>
        </div>
    }
}
