use leptos::{html, prelude::*};

use crate::content::{Project, PROJECTS};
use crate::motion::reveal_style;

use super::hooks::use_reveal;
use super::icons::Icon;

const CARD_STEP_MS: u32 = 100;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, 0.05);

    view! {
        <section id="projects" node_ref=section_ref class="relative py-24 sm:py-32">
            <div class="mx-auto max-w-6xl px-6">
                // Section header
                <div
                    class="mb-20 transition-all duration-700"
                    style=move || reveal_style(visible.get(), 0, 0, 0).inline()
                >
                    <p class="mb-2 font-mono text-sm text-primary">"02. Projects"</p>
                    <h2 class="text-3xl font-bold text-foreground sm:text-4xl">"Featured Work"</h2>
                    <div class="mt-4 h-px w-16 bg-primary"></div>
                </div>

                <div class="flex flex-col gap-24">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One project entry. Each card carries its own one-shot trigger so cards
/// deep down the page reveal when they are reached, not when the section is.
#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(card_ref, 0.1);
    let is_even = index % 2 == 0;

    view! {
        <div
            node_ref=card_ref
            class="grid gap-8 lg:grid-cols-2 lg:gap-12 transition-all duration-700"
            style=move || reveal_style(visible.get(), index, 0, CARD_STEP_MS).inline()
        >
            // Mockup - alternates left/right
            <div class=if is_even { "" } else { "lg:order-2" }>
                <MockupFrame image=project.image title=project.title />
            </div>

            // Content
            <div class=if is_even {
                "flex flex-col justify-center"
            } else {
                "flex flex-col justify-center lg:order-1"
            }>
                // Year tag
                <div class="mb-3 inline-flex w-fit items-center gap-2">
                    <span class="font-mono text-xs text-primary">{project.year}</span>
                    <span class="h-px w-8 bg-border"></span>
                </div>

                <h3 class="mb-1 text-2xl font-bold text-foreground">{project.title}</h3>
                <p class="mb-4 text-sm text-primary">{project.subtitle}</p>
                <p class="mb-6 text-sm leading-relaxed text-muted-foreground">
                    {project.description}
                </p>

                // Metrics
                <div class="mb-6 flex gap-4">
                    {project
                        .metrics
                        .iter()
                        .map(|metric| {
                            view! {
                                <div class="flex items-center gap-2 rounded-lg border border-border bg-card px-3 py-2">
                                    <Icon name=metric.icon size=14 class="text-primary" />
                                    <div>
                                        <p class="font-mono text-sm font-bold text-foreground">
                                            {metric.value}
                                        </p>
                                        <p class="text-[10px] text-muted-foreground">
                                            {metric.label}
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Highlights
                <ul class="mb-6 space-y-2">
                    {project
                        .highlights
                        .iter()
                        .map(|highlight| {
                            view! {
                                <li class="flex items-start gap-2 text-xs text-muted-foreground">
                                    <span class="mt-1.5 h-1 w-1 flex-shrink-0 rounded-full bg-primary"></span>
                                    {*highlight}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                // Tech stack
                <div class="flex flex-wrap gap-1.5">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-md border border-border bg-secondary/30 px-2 py-0.5 font-mono text-[10px] text-muted-foreground">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                {project
                    .github
                    .map(|url| {
                        view! {
                            <div class="mt-6 flex gap-3">
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center gap-1.5 text-xs text-muted-foreground transition-colors hover:text-primary"
                                >
                                    <Icon name="github" size=14 />
                                    "Source"
                                </a>
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn MockupFrame(image: &'static str, title: &'static str) -> impl IntoView {
    let address = format!("{}.app", title.to_lowercase().replace(' ', "-"));
    view! {
        <div class="mockup-frame group relative overflow-hidden rounded-xl border border-border bg-card">
            // Browser chrome
            <div class="flex items-center gap-2 border-b border-border bg-secondary/50 px-4 py-2.5">
                <div class="flex gap-1.5">
                    <div class="h-2.5 w-2.5 rounded-full bg-destructive/40"></div>
                    <div class="h-2.5 w-2.5 rounded-full bg-chart-4/40"></div>
                    <div class="h-2.5 w-2.5 rounded-full bg-primary/40"></div>
                </div>
                <div class="flex-1 rounded-md bg-background/50 px-3 py-1 text-center">
                    <span class="font-mono text-[10px] text-muted-foreground">{address}</span>
                </div>
            </div>
            // Screenshot
            <div class="relative aspect-video overflow-hidden">
                <img
                    src=image
                    alt=format!("{title} mockup screenshot")
                    class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
                    loading="lazy"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-card/20 to-transparent"></div>
            </div>
        </div>
    }
}
