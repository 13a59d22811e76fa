use leptos::prelude::*;

use crate::content::{Company, Testimonial};

#[component]
pub fn Clients(
    testimonials: &'static [Testimonial],
    companies: &'static [Company],
) -> impl IntoView {
    view! {
        <div class="pb-20" id="testimonials">
            <h1 class="heading">
                "Kind words from " <span class="text-purple">"my colleagues and mentors"</span>
            </h1>
            <div class="flex flex-col items-center mt-8 max-lg:mt-10">
                <MovingCards items=testimonials />
                <div class="flex flex-wrap items-center justify-center gap-4 md:gap-16 mt-4 md:mt-8">
                    {companies
                        .iter()
                        .map(|company| {
                            view! {
                                <div class="flex md:max-w-60 max-w-32 gap-2">
                                    <img
                                        src=company.img.clone()
                                        alt=company.name.clone()
                                        class="md:w-10 w-5"
                                    />
                                    <img
                                        src=company.name_img.clone()
                                        alt=company.name.clone()
                                        class="md:w-24 w-20"
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Horizontally scrolling strip of quotes. The list is rendered twice so the
/// CSS scroll can wrap around without a gap; the copy is hidden from readers.
#[component]
fn MovingCards(items: &'static [Testimonial]) -> impl IntoView {
    let card = |t: &'static Testimonial, hidden: bool| {
        view! {
            <li
                class="w-[90vw] max-w-full relative rounded-2xl border border-b-0 flex-shrink-0 border-slate-800 p-5 md:p-16 md:w-[60vw] bg-[linear-gradient(90deg,rgba(4,7,29,1)_0%,rgba(12,14,35,1)_100%)]"
                aria-hidden=hidden.then_some("true")
            >
                <blockquote>
                    <span class="relative z-20 text-sm md:text-lg leading-[1.6] text-white font-normal">
                        {t.quote.clone()}
                    </span>
                    <div class="relative z-20 mt-6 flex flex-row items-center">
                        <img
                            src=t.profile_img.clone()
                            alt=t.name.clone()
                            class="me-3 w-12 h-12 rounded-full object-cover"
                        />
                        <span class="flex flex-col gap-1">
                            <span class="text-xl font-bold leading-[1.6] text-white">
                                {t.name.clone()}
                            </span>
                            <span class="text-sm leading-[1.6] text-white-200 font-normal">
                                {t.title.clone()}
                            </span>
                        </span>
                    </div>
                </blockquote>
            </li>
        }
    };
    view! {
        <div class="scroller relative z-20 w-screen overflow-hidden [mask-image:linear-gradient(to_right,transparent,white_20%,white_80%,transparent)]">
            <ul class="flex min-w-full shrink-0 gap-16 py-4 w-max flex-nowrap animate-scroll-reverse hover:[animation-play-state:paused]">
                {items.iter().map(|t| card(t, false)).collect_view()}
                {items.iter().map(|t| card(t, true)).collect_view()}
            </ul>
        </div>
    }
}
