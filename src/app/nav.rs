use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::NavItem;

// Always shown this close to the top of the page
const TOP_THRESHOLD: f64 = 50.0;

fn nav_visible(y: f64, prev_y: f64) -> bool {
    y < TOP_THRESHOLD || y < prev_y
}

/// Section links pinned to the top of the viewport. Slides away while the
/// reader scrolls down and comes back as soon as they scroll up.
#[component]
pub fn FloatingNav(items: Vec<NavItem>) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (visible, set_visible) = signal(true);

    Effect::watch(
        move || scroll_y.get(),
        move |y, prev_y, _| {
            set_visible.set(nav_visible(*y, prev_y.copied().unwrap_or_default()));
        },
        false,
    );

    view! {
        <nav class=move || {
            let shown = if visible.get() {
                "translate-y-0 opacity-100"
            } else {
                "-translate-y-24 opacity-0"
            };
            format!(
                "flex max-w-fit md:min-w-[70vw] lg:min-w-fit fixed z-[5000] top-10 inset-x-0 mx-auto px-10 py-5 rounded-lg border border-black/10 shadow-md items-center justify-center space-x-4 bg-[rgba(17,25,40,0.75)] backdrop-blur-md transition-all duration-200 {shown}",
            )
        }>
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <a
                            href=item.link
                            class="relative text-neutral-50 items-center flex space-x-1 hover:text-neutral-300"
                        >
                            <span class="text-sm !cursor-pointer">{item.name}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_visibility() {
        // near the top it always shows
        assert!(nav_visible(0.0, 0.0));
        assert!(nav_visible(30.0, 10.0));
        // scrolling down hides
        assert!(!nav_visible(400.0, 300.0));
        // scrolling up reveals
        assert!(nav_visible(300.0, 400.0));
    }
}
