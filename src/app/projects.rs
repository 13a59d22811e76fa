use leptos::prelude::*;

use crate::content::Project;

// Horizontal overlap between consecutive technology icons, in px
const ICON_OVERLAP: usize = 10;

#[component]
pub fn RecentProjects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="pt-28 pb-20" id="projects">
            <h1 class="heading">"A small selection of " <span class="text-purple">"recent projects"</span></h1>
            <div class="flex flex-wrap items-center justify-center p-4 gap-x-24 gap-y-8 mt-10">
                {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <a
            href=project.link.clone()
            target="_blank"
            rel="noopener noreferrer"
            class="group sm:w-[570px] w-[80vw] flex flex-col rounded-2xl border border-white/[0.1] bg-black-200 p-4 transition duration-700 hover:[transform:perspective(1000px)_rotateX(20deg)]"
        >
            <div class="relative flex items-center justify-center sm:h-[40vh] h-[30vh] overflow-hidden mb-10">
                <div class="relative w-full h-full overflow-hidden lg:rounded-3xl bg-[#13162d]">
                    <img src="/bg.png" alt="background pattern" />
                </div>
                <img
                    src=project.img.clone()
                    alt=project.title.clone()
                    class="z-10 absolute bottom-0 w-10/12 h-10/12 object-contain"
                />
            </div>
            <h1 class="font-bold lg:text-2xl md:text-xl text-base line-clamp-1">
                {project.title.clone()}
            </h1>
            <p class="lg:text-xl lg:font-normal font-light text-sm line-clamp-2">
                {project.description.clone()}
            </p>
            <div class="flex items-center justify-between mt-7 mb-3">
                <div class="flex items-center">
                    {project
                        .icons
                        .iter()
                        .enumerate()
                        .map(|(i, icon)| {
                            view! {
                                <div
                                    class="border border-white/[0.2] rounded-full bg-black lg:w-10 lg:h-10 w-8 h-8 flex items-center justify-center"
                                    style=format!("transform: translateX(-{}px)", ICON_OVERLAP * i)
                                >
                                    <img src=icon.clone() alt="technology icon" class="p-2" />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="flex items-center lg:text-xl md:text-xs text-sm text-purple">
                    "Check Live Site" <span class="ms-3">"🌐"</span>
                </p>
            </div>
        </a>
    }
}
