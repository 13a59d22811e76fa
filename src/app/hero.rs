use leptos::{either::Either, prelude::*};

use super::typewriter::TypewriterName;
use crate::content::Owner;
use crate::cycler::TextCycler;

/// Landing section. Falls back to the plain name when there is no cycler.
#[component]
pub fn Hero(owner: &'static Owner, typewriter: Option<TextCycler>) -> impl IntoView {
    let name = match typewriter {
        Some(cycler) => Either::Left(view! { <TypewriterName class="text-purple" cycler /> }),
        None => Either::Right(view! { <span class="text-purple font-bold">{owner.name.clone()}</span> }),
    };
    view! {
        <div class="pb-20 pt-36">
            <div>
                <Spotlight class="-top-40 -left-0 md:-left-32 md:-top-20 h-screen" fill="white" />
                <Spotlight class="top-10 left-full h-[80vh] w-[50vw]" fill="purple" />
                <Spotlight class="top-28 left-80 h-[80vh] w-[50vw]" fill="blue" />
            </div>
            <div class="h-screen w-full bg-black-100 bg-grid-white/[0.03] absolute top-0 left-0 flex items-center justify-center">
                <div class="absolute pointer-events-none inset-0 flex items-center justify-center bg-black-100 [mask-image:radial-gradient(ellipse_at_center,transparent_20%,black)]" />
            </div>
            <div class="flex justify-center relative my-20 z-10">
                <div class="max-w-[89vw] md:max-w-2xl lg:max-w-[60vw] flex flex-col items-center justify-center">
                    <h2 class="uppercase tracking-widest text-xs text-center text-blue-100 max-w-80">
                        {owner.tagline.clone()}
                    </h2>
                    <TextGenerate
                        class="text-center text-[40px] md:text-5xl lg:text-6xl"
                        words=owner.headline.clone()
                    />
                    <p class="text-center md:tracking-wider md:mt-4 text-sm md:text-lg lg:text-2xl">
                        "Hi, I'm "
                        {name}
                        " "
                        {owner.intro.clone()}
                    </p>
                    <a href=owner.github.clone() target="_blank" rel="noopener noreferrer">
                        <MagicButton title="Show my work" icon="➚" />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Spotlight(#[prop(into)] class: String, fill: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!(
                "animate-spotlight pointer-events-none absolute z-[1] h-[169%] w-[138%] lg:w-[84%] opacity-0 {class}",
            )
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 3787 2842"
            fill="none"
        >
            <ellipse
                cx="1924.71"
                cy="273.501"
                rx="1924.71"
                ry="273.501"
                transform="matrix(-0.822377 -0.568943 -0.568943 0.822377 3631.88 2291.09)"
                fill=fill
                fill-opacity="0.21"
            />
        </svg>
    }
}

/// Fades the headline in word by word; the second half of the words is accented.
#[component]
fn TextGenerate(#[prop(into)] class: String, words: String) -> impl IntoView {
    let words = words.split_whitespace().map(str::to_owned).collect::<Vec<_>>();
    let accent_from = words.len() / 2;
    view! {
        <div class=format!("font-bold my-4 {class}")>
            <div class="leading-snug tracking-wide">
                {words
                    .into_iter()
                    .enumerate()
                    .map(|(i, word)| {
                        let color = if i >= accent_from { "text-purple" } else { "text-white" };
                        view! {
                            <span
                                class=format!("{color} animate-fade-in opacity-0")
                                style=format!("animation-delay: {}ms", i * 200)
                            >
                                {word}
                                " "
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Shimmering call-to-action button, shared by the hero and the footer.
#[component]
pub fn MagicButton(title: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <button class="relative inline-flex h-12 w-full md:w-60 md:mt-10 overflow-hidden rounded-lg p-[1px] focus:outline-none">
            <span class="absolute inset-[-1000%] animate-[spin_2s_linear_infinite] bg-[conic-gradient(from_90deg_at_50%_50%,#E2CBFF_0%,#393BB2_50%,#E2CBFF_100%)]" />
            <span class="inline-flex h-full w-full cursor-pointer items-center justify-center rounded-lg bg-slate-950 px-7 text-sm font-medium text-white backdrop-blur-3xl gap-2">
                {title}
                <span>{icon}</span>
            </span>
        </button>
    }
}
