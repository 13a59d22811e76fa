use leptos::prelude::*;

use crate::content::ApproachPhase;

#[component]
pub fn Approach(phases: &'static [ApproachPhase]) -> impl IntoView {
    view! {
        <section class="w-full pt-10 pb-20" id="approach">
            <h1 class="heading">"My" <span class="text-purple">" approach"</span></h1>
            <div class="my-12 flex flex-col lg:flex-row items-center justify-center gap-4">
                {phases.iter().map(|phase| view! { <PhaseCard phase /> }).collect_view()}
            </div>
        </section>
    }
}

/// Shows the phase label at rest and swaps in the title and description on hover.
#[component]
fn PhaseCard(phase: &'static ApproachPhase) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    view! {
        <div
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            class="border group/canvas-card flex items-center justify-center border-white/[0.2] max-w-sm w-full mx-auto p-4 relative lg:h-[35rem] rounded-3xl"
        >
            <CornerIcon class="-top-3 -left-3" />
            <CornerIcon class="-bottom-3 -left-3" />
            <CornerIcon class="-top-3 -right-3" />
            <CornerIcon class="-bottom-3 -right-3" />
            <div class=move || {
                format!(
                    "absolute inset-0 rounded-3xl overflow-hidden transition-opacity duration-500 {} {}",
                    phase.accent,
                    if hovered.get() { "opacity-100" } else { "opacity-0" },
                )
            } />
            <div class="relative z-20 px-10">
                <div class=move || {
                    format!(
                        "text-center absolute top-[50%] -translate-y-1/2 w-full min-w-40 mx-auto flex items-center justify-center transition duration-200 {}",
                        if hovered.get() { "-translate-y-4 opacity-0" } else { "" },
                    )
                }>
                    <button class="relative inline-flex overflow-hidden rounded-full p-[1px]">
                        <span class="inline-flex h-full w-full cursor-pointer items-center justify-center rounded-full bg-slate-950 px-5 py-2 text-purple backdrop-blur-3xl font-bold text-2xl">
                            {phase.order.clone()}
                        </span>
                    </button>
                </div>
                <h2 class=move || {
                    format!(
                        "text-3xl relative z-10 mt-4 font-bold text-center transition duration-200 {}",
                        if hovered.get() { "opacity-100 -translate-y-2 text-white" } else { "opacity-0" },
                    )
                }>{phase.title.clone()}</h2>
                <p
                    class=move || {
                        format!(
                            "text-sm relative z-10 mt-4 text-center transition duration-200 text-[#E4ECFF] {}",
                            if hovered.get() { "opacity-100 -translate-y-2" } else { "opacity-0" },
                        )
                    }
                >
                    {phase.description.clone()}
                </p>
            </div>
        </div>
    }
}

#[component]
fn CornerIcon(class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
            class=format!("absolute h-6 w-6 text-white {class}")
        >
            <path stroke-linecap="round" stroke-linejoin="round" d="M12 6v12m6-6H6" />
        </svg>
    }
}
