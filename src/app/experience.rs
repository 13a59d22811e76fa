use leptos::prelude::*;

use crate::content::Experience;

#[component]
pub fn ExperienceSection(experience: &'static [Experience]) -> impl IntoView {
    view! {
        <div class="pb-20" id="experience">
            <h1 class="heading">"My " <span class="text-purple">"work experience"</span></h1>
            <div class="w-full mt-12 grid lg:grid-cols-4 grid-cols-1 gap-10">
                {experience
                    .iter()
                    .enumerate()
                    .map(|(i, card)| {
                        // staggered so the borders don't move in lockstep
                        let duration = 10 + (i * 3) % 10;
                        view! {
                            <div
                                class="md:col-span-2 relative overflow-hidden rounded-[1.75rem] p-[1px] bg-transparent"
                                style=format!("--border-duration: {duration}s")
                            >
                                <div class="absolute inset-0 animate-border-orbit bg-[radial-gradient(#CBACF9_40%,transparent_60%)] opacity-80" />
                                <div class="relative flex lg:flex-row flex-col lg:items-center p-3 py-6 md:p-5 lg:p-10 gap-2 rounded-[calc(1.75rem*0.96)] bg-[rgb(4,7,29)] border border-slate-800">
                                    <img
                                        src=card.thumbnail.clone()
                                        alt=card.organisation.clone()
                                        class="lg:w-32 md:w-20 w-16 object-contain"
                                    />
                                    <div class="lg:ms-5">
                                        <h1 class="text-start text-xl md:text-2xl font-bold">
                                            {card.title.clone()}
                                        </h1>
                                        <p class="text-start text-white-100 mt-2 font-semibold text-lg md:text-xl">
                                            {card.organisation.clone()}
                                        </p>
                                        <p class="text-start text-white-100 mt-1 font-medium text-sm md:text-base">
                                            {card.date.clone()}
                                        </p>
                                        <p class="text-start text-white-100 mt-1 font-semibold">
                                            {card.description.clone()}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
