use leptos::prelude::*;
use leptos_use::{use_color_mode, use_window_scroll, ColorMode, UseColorModeReturn};

use crate::content::NAV_LINKS;

use super::hooks::use_mounted;
use super::icons::Icon;

/// Fixed top navigation: anchor links, theme toggle, mobile menu.
/// Condenses (backdrop blur + border) once the page is scrolled.
#[component]
pub fn Navigation() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > 20.0);
    let (mobile_open, set_mobile_open) = signal(false);
    let mounted = use_mounted();

    view! {
        <header class=move || {
            let skin = if scrolled.get() {
                "bg-background/80 backdrop-blur-xl border-b border-border"
            } else {
                "bg-transparent"
            };
            format!("fixed top-0 left-0 right-0 z-50 transition-all duration-300 {skin}")
        }>
            <nav class="mx-auto flex max-w-6xl items-center justify-between px-6 py-4">
                <a
                    href="#"
                    class="font-mono text-sm font-semibold tracking-wider text-foreground transition-colors hover:text-primary"
                >
                    "<KA />"
                </a>

                // Desktop nav
                <div class="hidden items-center gap-8 md:flex">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="relative text-sm text-muted-foreground transition-colors hover:text-foreground after:absolute after:-bottom-1 after:left-0 after:h-px after:w-0 after:bg-primary after:transition-all after:duration-300 hover:after:w-full"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    {move || mounted.get().then(|| view! { <ThemeToggle /> })}
                </div>

                // Mobile nav toggle
                <div class="flex items-center gap-3 md:hidden">
                    {move || mounted.get().then(|| view! { <ThemeToggle /> })}
                    <button
                        on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        class="flex h-8 w-8 items-center justify-center rounded-md text-muted-foreground transition-colors hover:bg-secondary hover:text-foreground"
                        aria-label="Toggle menu"
                    >
                        {move || {
                            if mobile_open.get() {
                                view! { <Icon name="x" size=18 /> }.into_any()
                            } else {
                                view! { <Icon name="menu" size=18 /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </nav>

            // Mobile menu
            {move || {
                mobile_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="fixed inset-0 top-[60px] z-40 bg-background/95 backdrop-blur-xl md:hidden">
                                <div class="flex flex-col items-center gap-8 pt-20">
                                    {NAV_LINKS
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <a
                                                    href=link.href
                                                    on:click=move |_| set_mobile_open.set(false)
                                                    class="text-lg text-muted-foreground transition-colors hover:text-foreground"
                                                >
                                                    {link.label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let UseColorModeReturn { mode, set_mode, .. } = use_color_mode();

    view! {
        <button
            on:click=move |_| {
                let next = if mode.get_untracked() == ColorMode::Dark {
                    ColorMode::Light
                } else {
                    ColorMode::Dark
                };
                set_mode.set(next);
            }
            class="flex h-8 w-8 items-center justify-center rounded-md text-muted-foreground transition-colors hover:bg-secondary hover:text-foreground"
            aria-label="Toggle theme"
        >
            {move || {
                if mode.get() == ColorMode::Dark {
                    view! { <Icon name="sun" size=16 /> }.into_any()
                } else {
                    view! { <Icon name="moon" size=16 /> }.into_any()
                }
            }}
        </button>
    }
}
