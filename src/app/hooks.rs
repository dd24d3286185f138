use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos_use::core::IntoElementsMaybeSignal;
use leptos_use::{
    use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use wasm_bindgen::JsValue;

use crate::motion::{Typewriter, TypewriterTiming, VisibilityLatch};

static OBSERVER_WARNING: AtomicBool = AtomicBool::new(false);

/// One-shot scroll reveal for a rendered container.
///
/// The returned signal starts `false` and flips to `true` the first time the
/// target's intersection ratio reaches `threshold`; the underlying observer
/// is released right after that transition. If the target is never attached,
/// or the host has no IntersectionObserver, the signal simply stays `false`.
pub fn use_reveal<El, M: 'static>(target: El, threshold: f64) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M> + 'static,
{
    let (visible, set_visible) = signal(false);
    let latch = StoredValue::new(VisibilityLatch::new(threshold));

    let is_supported = use_supported(|| JsValue::from("IntersectionObserver").js_in(&window()));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let fired = latch
                .try_update_value(|latch| {
                    entries
                        .iter()
                        .any(|entry| latch.observe(entry.intersection_ratio()))
                })
                .unwrap_or(false);
            if fired {
                set_visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        // release the subscription once the one-shot transition is published
        if visible.get() {
            stop();
        } else if !is_supported.get() && !OBSERVER_WARNING.swap(true, Ordering::Relaxed) {
            log::warn!("IntersectionObserver unavailable; scroll reveals will not fire");
        }
    });

    visible.into()
}

/// `true` once the component has hydrated on the client.
///
/// Used by the hero, which reveals on mount rather than on intersection.
pub fn use_mounted() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted.into()
}

/// Drive a [`Typewriter`] with browser timers and publish its display text.
///
/// Exactly one timeout is pending at any moment; its handle is stored so the
/// owner's cleanup can cancel it, and a fired tick that finds its signals
/// disposed stops rescheduling instead of mutating stale state.
pub fn use_typewriter(roles: &[&str], timing: TypewriterTiming) -> ReadSignal<String> {
    let (text, set_text) = signal(String::new());
    let machine = StoredValue::new(Typewriter::new(
        roles.iter().map(|s| s.to_string()).collect(),
        timing,
    ));
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    Effect::new(move |_| {
        schedule_tick(machine, set_text, pending);
    });
    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    text
}

fn schedule_tick(
    machine: StoredValue<Typewriter>,
    set_text: WriteSignal<String>,
    pending: StoredValue<Option<TimeoutHandle>, LocalStorage>,
) {
    let Some(delay) = machine.try_with_value(|m| m.delay()) else {
        return;
    };
    let handle = set_timeout_with_handle(
        move || {
            let display = machine.try_update_value(|m| {
                m.tick();
                m.display().to_string()
            });
            let Some(display) = display else {
                return;
            };
            if set_text.try_set(display).is_none() {
                schedule_tick(machine, set_text, pending);
            }
        },
        Duration::from_millis(u64::from(delay)),
    );
    match handle {
        Ok(handle) => pending.set_value(Some(handle)),
        Err(_) => log::warn!("could not schedule typewriter tick"),
    }
}
