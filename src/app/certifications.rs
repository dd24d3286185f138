use leptos::{html, prelude::*};

use crate::content::CERTIFICATIONS;
use crate::motion::{reveal_style, SECTION_THRESHOLD};

use super::hooks::use_reveal;
use super::icons::Icon;

const CARD_STEP_MS: u32 = 100;
// min-w-[300px] card plus the gap-6 between cards
const CARD_STRIDE_PX: f64 = 324.0;

#[component]
pub fn CertificationsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, SECTION_THRESHOLD);

    let (active, set_active) = signal(0usize);
    let scroll_ref = NodeRef::<html::Div>::new();

    let scroll_to = move |index: isize| {
        let clamped = clamp_index(index, CERTIFICATIONS.len());
        set_active.set(clamped);
        if let Some(container) = scroll_ref.get_untracked() {
            container.scroll_to_with_x_and_y(clamped as f64 * CARD_STRIDE_PX, 0.0);
        }
    };

    view! {
        <section id="certifications" node_ref=section_ref class="relative py-24 sm:py-32">
            <div class="mx-auto max-w-6xl px-6">
                // Section header + carousel arrows
                <div
                    class="mb-16 flex items-end justify-between transition-all duration-700"
                    style=move || reveal_style(visible.get(), 0, 0, 0).inline()
                >
                    <div>
                        <p class="mb-2 font-mono text-sm text-primary">"04. Certifications"</p>
                        <h2 class="text-3xl font-bold text-foreground sm:text-4xl">"Credentials"</h2>
                        <div class="mt-4 h-px w-16 bg-primary"></div>
                    </div>
                    <div class="hidden gap-2 sm:flex">
                        <button
                            on:click=move |_| scroll_to(active.get_untracked() as isize - 1)
                            disabled=move || active.get() == 0
                            class="flex h-10 w-10 items-center justify-center rounded-lg border border-border bg-card text-muted-foreground transition-colors hover:border-primary/50 hover:text-primary disabled:opacity-30"
                            aria-label="Previous certification"
                        >
                            <Icon name="chevron-left" size=16 />
                        </button>
                        <button
                            on:click=move |_| scroll_to(active.get_untracked() as isize + 1)
                            disabled=move || active.get() == CERTIFICATIONS.len() - 1
                            class="flex h-10 w-10 items-center justify-center rounded-lg border border-border bg-card text-muted-foreground transition-colors hover:border-primary/50 hover:text-primary disabled:opacity-30"
                            aria-label="Next certification"
                        >
                            <Icon name="chevron-right" size=16 />
                        </button>
                    </div>
                </div>

                // Horizontal carousel
                <div
                    node_ref=scroll_ref
                    class="flex gap-6 overflow-x-auto pb-4 scrollbar-none scroll-smooth snap-x snap-mandatory"
                >
                    {CERTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(index, cert)| {
                            let border = if cert.featured {
                                "border-primary/20"
                            } else {
                                "border-border"
                            };
                            view! {
                                <div
                                    class=format!(
                                        "group min-w-[300px] max-w-[340px] flex-shrink-0 snap-start rounded-xl border bg-card p-6 transition-all duration-500 hover:border-primary/30 {border}",
                                    )
                                    style=move || {
                                        reveal_style(visible.get(), index, 0, CARD_STEP_MS).inline()
                                    }
                                >
                                    <div class="mb-4 flex items-center justify-between">
                                        <div class=format!(
                                            "flex h-10 w-10 items-center justify-center rounded-lg border bg-gradient-to-br {}",
                                            badge_classes(cert.badge),
                                        )>
                                            <Icon name="award" size=18 />
                                        </div>
                                        {cert
                                            .featured
                                            .then(|| {
                                                view! {
                                                    <span class="rounded-full bg-primary/10 px-2.5 py-0.5 font-mono text-[10px] font-medium text-primary">
                                                        "Featured"
                                                    </span>
                                                }
                                            })}
                                    </div>

                                    <h3 class="mb-1 text-sm font-semibold text-foreground group-hover:text-primary transition-colors">
                                        {cert.title}
                                    </h3>
                                    <div class="mb-3 flex items-center gap-2">
                                        <span class="text-xs text-muted-foreground">
                                            {cert.issuer}
                                        </span>
                                        <span class="h-1 w-1 rounded-full bg-border"></span>
                                        <span class="font-mono text-xs text-muted-foreground">
                                            {cert.year}
                                        </span>
                                    </div>
                                    <p class="mb-4 text-xs leading-relaxed text-muted-foreground">
                                        {cert.description}
                                    </p>

                                    <a
                                        href=cert.file_url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center gap-1.5 text-xs text-muted-foreground transition-colors hover:text-primary"
                                    >
                                        <Icon name="external-link" size=12 />
                                        "Ver credencial"
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Dot indicators
                <div class="mt-6 flex justify-center gap-2">
                    {(0..CERTIFICATIONS.len())
                        .map(|index| {
                            view! {
                                <button
                                    on:click=move |_| scroll_to(index as isize)
                                    class=move || {
                                        if active.get() == index {
                                            "h-1.5 rounded-full transition-all w-6 bg-primary"
                                        } else {
                                            "h-1.5 rounded-full transition-all w-1.5 bg-border hover:bg-muted-foreground"
                                        }
                                    }
                                    aria-label=format!("Go to certification {}", index + 1)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn badge_classes(badge: &str) -> &'static str {
    match badge {
        "aws" => "from-[#ff9900]/20 to-[#ff9900]/5 text-[#ff9900] border-[#ff9900]/20",
        "oracle" => "from-[#f80000]/20 to-[#f80000]/5 text-[#f80000] border-[#f80000]/20",
        "platzi" => "from-[#00bfd6]/20 to-[#00bfd6]/5 text-[#00bfd6] border-[#00bfd6]/20",
        "bigschool" => "from-[#8b5cf6]/20 to-[#8b5cf6]/5 text-[#8b5cf6] border-[#8b5cf6]/20",
        "google" => "from-[#4285F4]/20 to-[#4285F4]/5 text-[#4285F4] border-[#4285F4]/20",
        "docker" => "from-[#2496ED]/20 to-[#2496ED]/5 text-[#2496ED] border-[#2496ED]/20",
        "react" => "from-[#61DAFB]/20 to-[#61DAFB]/5 text-[#61DAFB] border-[#61DAFB]/20",
        "node" => "from-[#339933]/20 to-[#339933]/5 text-[#339933] border-[#339933]/20",
        "python" => "from-[#3776AB]/20 to-[#3776AB]/5 text-[#3776AB] border-[#3776AB]/20",
        "css" => "from-[#1572B6]/20 to-[#1572B6]/5 text-[#1572B6] border-[#1572B6]/20",
        "freecodecamp" => "from-[#0a0a23]/20 to-[#0a0a23]/5 text-[#0a0a23] border-[#0a0a23]/20",
        _ => "from-primary/20 to-primary/5 text-primary border-primary/20",
    }
}

fn clamp_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_carousel_bounds() {
        assert_eq!(clamp_index(-1, 11), 0);
        assert_eq!(clamp_index(0, 11), 0);
        assert_eq!(clamp_index(5, 11), 5);
        assert_eq!(clamp_index(11, 11), 10);
        assert_eq!(clamp_index(isize::MAX, 11), 10);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        assert_eq!(clamp_index(3, 0), 0);
    }

    #[test]
    fn every_badge_kind_has_colors() {
        for cert in CERTIFICATIONS {
            assert!(!badge_classes(cert.badge).is_empty());
        }
    }
}
