use leptos::{html, prelude::*};

use crate::content::{SKILL_CATEGORIES, TOOLS};
use crate::motion::{reveal_style, SECTION_THRESHOLD};

use super::hooks::use_reveal;

const CATEGORY_STEP_MS: u32 = 150;
const SKILL_STEP_MS: u32 = 80;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, SECTION_THRESHOLD);

    view! {
        <section id="skills" node_ref=section_ref class="relative py-24 sm:py-32">
            <div class="absolute inset-0 bg-secondary/20"></div>

            <div class="relative mx-auto max-w-6xl px-6">
                // Section header
                <div
                    class="mb-16 transition-all duration-700"
                    style=move || reveal_style(visible.get(), 0, 0, 0).inline()
                >
                    <p class="mb-2 font-mono text-sm text-primary">"03. Skills"</p>
                    <h2 class="text-3xl font-bold text-foreground sm:text-4xl">
                        "Technical Arsenal"
                    </h2>
                    <div class="mt-4 h-px w-16 bg-primary"></div>
                </div>

                // Skills grid
                <div class="grid gap-8 sm:grid-cols-2">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(cat_index, category)| {
                            view! {
                                <div
                                    class="rounded-xl border border-border bg-card p-6 transition-all duration-700 hover:border-primary/30"
                                    style=move || {
                                        reveal_style(visible.get(), cat_index, 0, CATEGORY_STEP_MS)
                                            .inline()
                                    }
                                >
                                    <h3 class="mb-6 flex items-center gap-2 text-sm font-semibold text-foreground">
                                        <span class="h-2 w-2 rounded-full bg-primary"></span>
                                        {category.title}
                                    </h3>
                                    <div class="flex flex-col gap-4">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(skill_index, skill)| {
                                                let delay = (cat_index as u32) * CATEGORY_STEP_MS
                                                    + (skill_index as u32) * SKILL_STEP_MS;
                                                view! {
                                                    <SkillBar
                                                        name=skill.name
                                                        level=skill.level
                                                        visible
                                                        delay_ms=delay
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Tools row
                <div
                    class="mt-12 transition-all duration-700"
                    style=move || reveal_style(visible.get(), 0, 500, 0).inline()
                >
                    <p class="mb-4 text-center font-mono text-xs uppercase tracking-widest text-muted-foreground">
                        "Tools & Platforms"
                    </p>
                    <div class="flex flex-wrap items-center justify-center gap-6">
                        {TOOLS
                            .iter()
                            .map(|tool| {
                                view! {
                                    <span class="font-mono text-xs text-muted-foreground transition-colors hover:text-primary">
                                        {*tool}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// A labelled bar that sweeps from 0 to `level`% once the section reveals.
#[component]
fn SkillBar(
    name: &'static str,
    level: u8,
    visible: Signal<bool>,
    delay_ms: u32,
) -> impl IntoView {
    view! {
        <div class="group">
            <div class="mb-1.5 flex items-center justify-between">
                <span class="font-mono text-xs text-foreground transition-colors group-hover:text-primary">
                    {name}
                </span>
                <span class="font-mono text-[10px] text-muted-foreground">{level}"%"</span>
            </div>
            <div class="h-1.5 w-full overflow-hidden rounded-full bg-secondary">
                <div
                    class="h-full rounded-full bg-primary transition-all duration-1000 ease-out"
                    style=move || {
                        let width = if visible.get() { level } else { 0 };
                        format!("width:{width}%;transition-delay:{delay_ms}ms")
                    }
                ></div>
            </div>
        </div>
    }
}
