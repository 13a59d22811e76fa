use leptos::prelude::*;

use crate::cycler::{TextCycler, CURSOR};

#[cfg(feature = "hydrate")]
use crate::cycler::{CyclerDriver, Scheduler};
#[cfg(feature = "hydrate")]
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
#[cfg(feature = "hydrate")]
use std::time::Duration;

/// `window.setTimeout` as a [`Scheduler`].
#[cfg(feature = "hydrate")]
struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(callback, delay)
            .inspect_err(|e| log::error!("setTimeout failed: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Types, holds, and deletes each word of `cycler` in turn, forever.
///
/// The server renders only the cursor. The animation starts once the page
/// hydrates and its timer is cleared when the component is unmounted.
/// Screen readers get the whole word list instead of the animation.
#[component]
pub fn TypewriterName(cycler: TextCycler, #[prop(optional, into)] class: String) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let label = cycler.words().iter().collect::<Vec<_>>().join(", ");

    #[cfg(feature = "hydrate")]
    {
        let driver = CyclerDriver::new(cycler, BrowserScheduler, move |c: &TextCycler| {
            set_text.set(c.displayed_text().to_string());
        });
        driver.start();
        on_cleanup(move || driver.stop());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (cycler, set_text);

    view! {
        <span class=format!("{class} relative font-bold") aria-label=label>
            <span aria-hidden="true">{move || text.get()}</span>
            <span class="animate-pulse" aria-hidden="true">{CURSOR}</span>
        </span>
    }
}
