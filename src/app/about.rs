use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

use crate::content::{GridItem, Owner, TechItem};

const TECH_STACK_CARD: u32 = 3;
const RESUME_CARD: u32 = 6;
const DOWNLOAD_NOTICE: Duration = Duration::from_secs(3);

#[component]
pub fn About(
    grid: &'static [GridItem],
    tech_stack: &'static [TechItem],
    owner: &'static Owner,
) -> impl IntoView {
    view! {
        <section id="about" class="pt-20">
            <div class="grid grid-cols-1 md:grid-cols-6 lg:grid-cols-5 md:grid-row-7 gap-4 lg:gap-8 mx-auto">
                {grid
                    .iter()
                    .map(|item| view! { <BentoItem item tech_stack owner /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn BentoItem(
    item: &'static GridItem,
    tech_stack: &'static [TechItem],
    owner: &'static Owner,
) -> impl IntoView {
    let extra = match item.id {
        TECH_STACK_CARD => Some(view! { <TechStack items=tech_stack /> }.into_any()),
        RESUME_CARD => Some(view! { <ResumeDownload owner /> }.into_any()),
        _ => None,
    };
    view! {
        <div class=format!(
            "row-span-1 relative overflow-hidden rounded-3xl border border-white/[0.1] group/bento hover:shadow-xl transition duration-200 shadow-input justify-between flex flex-col space-y-4 bg-[linear-gradient(90deg,rgba(4,7,29,1)_0%,rgba(12,14,35,1)_100%)] {}",
            item.class,
        )>
            <div class="h-full">
                {(!item.img.is_empty())
                    .then(|| {
                        view! {
                            <div class="w-full h-full absolute">
                                <img
                                    src=item.img.clone()
                                    alt=item.img.clone()
                                    class=format!("object-cover object-center {}", item.img_class)
                                />
                            </div>
                        }
                    })}
                {(!item.spare_img.is_empty())
                    .then(|| {
                        view! {
                            <div class="absolute right-0 -bottom-5 opacity-80">
                                <img
                                    src=item.spare_img.clone()
                                    alt=item.spare_img.clone()
                                    class="object-cover object-center w-full h-full"
                                />
                            </div>
                        }
                    })}
                <div class=format!(
                    "group-hover/bento:translate-x-2 transition duration-200 relative md:h-full min-h-40 flex flex-col px-5 p-5 lg:p-10 {}",
                    item.title_class,
                )>
                    <div class="font-sans font-extralight md:max-w-32 md:text-xs lg:text-base text-sm text-[#C1C2D3] z-10">
                        {item.description.clone()}
                    </div>
                    <div class="font-sans text-lg lg:text-3xl max-w-96 font-bold z-10">
                        {item.title.clone()}
                    </div>
                    {extra}
                </div>
            </div>
        </div>
    }
}

#[component]
fn TechStack(items: &'static [TechItem]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mt-4 lg:max-w-sm">
            {items
                .iter()
                .map(|tech| {
                    view! {
                        <span class="flex items-center gap-1 py-1 px-3 text-xs lg:text-sm rounded-lg bg-[#10132E]">
                            <img src=tech.icon.clone() alt="" class="w-4 h-4" />
                            {tech.name.clone()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Résumé link; shows a confirmation for a few seconds after each click.
#[component]
fn ResumeDownload(owner: &'static Owner) -> impl IntoView {
    let (downloaded, set_downloaded) = signal(false);
    let reset_handle = StoredValue::new(None::<TimeoutHandle>);

    let on_click = move |_| {
        set_downloaded.set(true);
        if let Some(handle) = reset_handle.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(move || set_downloaded.set(false), DOWNLOAD_NOTICE)
            .inspect_err(|e| log::warn!("couldn't schedule download notice reset: {e:?}"))
            .ok();
        reset_handle.set_value(handle);
    };
    on_cleanup(move || {
        if let Some(handle) = reset_handle.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <a
            href=owner.resume_path.clone()
            download=owner.resume_file_name.clone()
            on:click=on_click
            class="mt-5 inline-flex items-center gap-2 rounded-lg border border-white/[0.2] px-5 py-3 text-sm"
        >
            {move || if downloaded.get() { "✓ Resume downloaded!" } else { "Download my resume" }}
        </a>
    }
}
