use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::{html, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::contact::{ContactMessage, SendPhase};
use crate::content::{EMAIL, GITHUB_URL, LINKEDIN_URL, WHATSAPP_DISPLAY, WHATSAPP_URL};
use crate::motion::{reveal_style, SECTION_THRESHOLD};

use super::hooks::use_reveal;
use super::icons::Icon;

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, SECTION_THRESHOLD);

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (phase, set_phase) = signal(SendPhase::Idle);
    let (error, set_error) = signal(None::<String>);
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    let read_fields = move || ContactMessage {
        name: name_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default(),
        email: email_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default(),
        subject: subject_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default(),
        message: message_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default(),
    };

    let clear_fields = move || {
        if let Some(el) = name_ref.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = email_ref.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = subject_ref.get_untracked() {
            el.set_value("");
        }
        if let Some(el) = message_ref.get_untracked() {
            el.set_value("");
        }
    };

    #[cfg(feature = "hydrate")]
    let (draft, set_draft, clear_draft) =
        use_local_storage::<ContactMessage, JsonSerdeWasmCodec>("contact_draft");

    // Restore an in-progress draft once the inputs exist
    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let draft = draft.get_untracked();
            if draft.is_empty() {
                return;
            }
            if let Some(el) = name_ref.get_untracked() {
                el.set_value(&draft.name);
            }
            if let Some(el) = email_ref.get_untracked() {
                el.set_value(&draft.email);
            }
            if let Some(el) = subject_ref.get_untracked() {
                el.set_value(&draft.subject);
            }
            if let Some(el) = message_ref.get_untracked() {
                el.set_value(&draft.message);
            }
        },
        true,
    );

    let persist_draft = move || {
        #[cfg(feature = "hydrate")]
        set_draft.set(read_fields());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() != SendPhase::Idle {
            return;
        }
        let message = read_fields();
        if let Err(err) = message.validate() {
            set_error.set(Some(err.to_string()));
            return;
        }
        set_error.set(None);

        // No transport behind this - log what a real integration would send.
        match serde_json::to_string(&message) {
            Ok(payload) => log::info!("simulated contact submission: {payload}"),
            Err(err) => log::warn!("could not serialize contact message: {err}"),
        }

        clear_fields();
        #[cfg(feature = "hydrate")]
        clear_draft();

        set_phase.set(SendPhase::Sending);
        advance_after(set_phase, pending, SendPhase::Sending);
    };

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <section id="contact" node_ref=section_ref class="relative py-24 sm:py-32">
            <div class="absolute inset-0 bg-secondary/20"></div>

            <div class="relative mx-auto max-w-6xl px-6">
                // Section header
                <div
                    class="mb-16 transition-all duration-700"
                    style=move || reveal_style(visible.get(), 0, 0, 0).inline()
                >
                    <p class="mb-2 font-mono text-sm text-primary">"05. Contact"</p>
                    <h2 class="text-3xl font-bold text-foreground sm:text-4xl">"Get In Touch"</h2>
                    <div class="mt-4 h-px w-16 bg-primary"></div>
                    <p class="mt-4 max-w-lg text-sm leading-relaxed text-muted-foreground">
                        "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your team. Let's build something great together."
                    </p>
                </div>

                <div class="grid gap-12 lg:grid-cols-5">
                    // Contact form
                    <div
                        class="lg:col-span-3 transition-all duration-700"
                        style=move || reveal_style(visible.get(), 0, 200, 0).inline()
                    >
                        <form on:submit=on_submit class="space-y-5" novalidate=true>
                            <div class="grid gap-5 sm:grid-cols-2">
                                <FormField label="Name" id="name">
                                    <input
                                        node_ref=name_ref
                                        on:input=move |_| persist_draft()
                                        id="name"
                                        name="name"
                                        type="text"
                                        placeholder="Your name"
                                        class=FIELD_CLASS
                                    />
                                </FormField>
                                <FormField label="Email" id="email">
                                    <input
                                        node_ref=email_ref
                                        on:input=move |_| persist_draft()
                                        id="email"
                                        name="email"
                                        type="email"
                                        placeholder="your@email.com"
                                        class=FIELD_CLASS
                                    />
                                </FormField>
                            </div>

                            <FormField label="Subject" id="subject">
                                <input
                                    node_ref=subject_ref
                                    on:input=move |_| persist_draft()
                                    id="subject"
                                    name="subject"
                                    type="text"
                                    placeholder="Project inquiry"
                                    class=FIELD_CLASS
                                />
                            </FormField>

                            <FormField label="Message" id="message">
                                <textarea
                                    node_ref=message_ref
                                    on:input=move |_| persist_draft()
                                    id="message"
                                    name="message"
                                    rows=5
                                    placeholder="Tell me about your project..."
                                    class=format!("{} resize-none", FIELD_CLASS)
                                ></textarea>
                            </FormField>

                            {move || {
                                error
                                    .get()
                                    .map(|message| {
                                        view! {
                                            <p class="text-sm text-destructive" role="alert">
                                                {message}
                                            </p>
                                        }
                                    })
                            }}

                            <button
                                type="submit"
                                disabled=move || phase.get() != SendPhase::Idle
                                class="glow-cyan inline-flex items-center gap-2 rounded-lg bg-primary px-6 py-3 text-sm font-medium text-primary-foreground transition-all hover:opacity-90 disabled:opacity-50"
                            >
                                {move || match phase.get() {
                                    SendPhase::Sending => {
                                        view! {
                                            <Icon name="loader" size=16 class="animate-spin" />
                                            "Sending..."
                                        }
                                            .into_any()
                                    }
                                    SendPhase::Sent => view! { "Message Sent!" }.into_any(),
                                    SendPhase::Idle => {
                                        view! {
                                            <Icon name="send" size=16 />
                                            "Send Message"
                                        }
                                            .into_any()
                                    }
                                }}
                            </button>
                        </form>
                    </div>

                    // Direct contact links
                    <div
                        class="lg:col-span-2 transition-all duration-700"
                        style=move || reveal_style(visible.get(), 0, 300, 0).inline()
                    >
                        <div class="space-y-4">
                            <p class="mb-6 font-mono text-xs uppercase tracking-widest text-muted-foreground">
                                "Direct Contact"
                            </p>
                            <ContactCard
                                icon="mail"
                                label="Email"
                                value=EMAIL
                                href=format!("mailto:{EMAIL}")
                                external=false
                            />
                            <ContactCard
                                icon="phone"
                                label="WhatsApp"
                                value=WHATSAPP_DISPLAY
                                href=WHATSAPP_URL.to_string()
                                external=true
                            />
                            <ContactCard
                                icon="github"
                                label="GitHub"
                                value="github.com/Keiner2006"
                                href=GITHUB_URL.to_string()
                                external=true
                            />
                            <ContactCard
                                icon="linkedin"
                                label="LinkedIn"
                                value="linkedin.com/in/keiner-arias"
                                href=LINKEDIN_URL.to_string()
                                external=true
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

const FIELD_CLASS: &str = "w-full rounded-lg border border-border bg-card px-4 py-2.5 text-sm text-foreground placeholder:text-muted-foreground/50 transition-colors focus:border-primary focus:outline-none focus:ring-1 focus:ring-primary";

/// Schedule the next phase transition; each scheduled transition chains the
/// one after it, and the stored handle lets unmount cancel whichever is
/// pending.
fn advance_after(
    set_phase: WriteSignal<SendPhase>,
    pending: StoredValue<Option<TimeoutHandle>, LocalStorage>,
    current: SendPhase,
) {
    let Some(dwell) = current.dwell_ms() else {
        return;
    };
    let next = current.advance();
    let handle = set_timeout_with_handle(
        move || {
            if set_phase.try_set(next).is_none() {
                advance_after(set_phase, pending, next);
            }
        },
        Duration::from_millis(dwell),
    );
    match handle {
        Ok(handle) => pending.set_value(Some(handle)),
        Err(_) => log::warn!("could not schedule send-state transition"),
    }
}

#[component]
fn FormField(label: &'static str, id: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <label for=id class="mb-1.5 block font-mono text-xs text-muted-foreground">
                {label}
            </label>
            {children()}
        </div>
    }
}

#[component]
fn ContactCard(
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: String,
    external: bool,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="group flex items-center gap-4 rounded-lg border border-border bg-card p-4 transition-all hover:border-primary/30"
        >
            <div class="flex h-10 w-10 items-center justify-center rounded-lg bg-primary/10 text-primary">
                <Icon name=icon size=18 />
            </div>
            <div class="flex-1">
                <p class="text-xs text-muted-foreground">{label}</p>
                <p class="text-sm text-foreground group-hover:text-primary transition-colors">
                    {value}
                </p>
            </div>
            <Icon
                name="arrow-up-right"
                size=14
                class="text-muted-foreground transition-transform group-hover:text-primary group-hover:-translate-y-0.5 group-hover:translate-x-0.5"
            />
        </a>
    }
}
