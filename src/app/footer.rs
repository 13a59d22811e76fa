use chrono::{DateTime, Utc};
use leptos::prelude::*;

use super::hero::MagicButton;
use crate::content::{Owner, SocialLink};

fn build_date() -> Option<String> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc).format("%b %e, %Y").to_string())
}

#[component]
pub fn Footer(owner: &'static Owner, socials: &'static [SocialLink]) -> impl IntoView {
    view! {
        <footer class="w-full pb-10 mb-[100px] md:mb-[50px] relative" id="contact">
            <div class="absolute inset-0 w-full h-full bg-black-100 bg-grid-white/[0.03]">
                <div class="absolute pointer-events-none inset-0 bg-black-100 [mask-image:radial-gradient(ellipse_at_center,transparent_20%,black)]" />
            </div>
            <div class="relative z-10">
                <div class="flex flex-col items-center">
                    <h1 class="heading lg:max-w-[45vw]">
                        "Got a " <span class="text-purple">"cool"</span> " idea or something "
                        <span class="text-purple">"exciting"</span> " in mind?"
                    </h1>
                    <p class="text-white-200 md:mt-10 my-2 text-center">
                        "Always up to build something cool so reach out today and let's turn ideas into working code!"
                    </p>
                    <a href=format!("mailto:{}", owner.email)>
                        <MagicButton title="Let's get in touch" icon="✉" />
                    </a>
                </div>
                <div class="flex mt-16 md:flex-row flex-col justify-between items-center">
                    <p class="md:text-base text-sm md:font-normal font-light">
                        "Made with ❤️ by " {owner.full_name.clone()}
                        {build_date()
                            .map(|date| view! { <span class="text-white-200">" · built " {date}</span> })}
                    </p>
                    <div class="flex items-center md:gap-3 gap-6">
                        {socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.label.clone()
                                        class="w-10 h-10 cursor-pointer flex justify-center items-center backdrop-blur-lg bg-black-200 bg-opacity-75 rounded-lg border border-black-300 hover:bg-opacity-90 transition-all duration-300"
                                    >
                                        <img src=social.img.clone() alt=social.label.clone() width="20" height="20" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
