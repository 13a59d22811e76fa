use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::approach::Approach;
use super::experience::ExperienceSection;
use super::footer::Footer;
use super::hero::Hero;
use super::projects::RecentProjects;
use super::testimonials::Clients;
use crate::content::SiteContent;

/// The whole portfolio, one section after another.
#[component]
pub fn HomePage(content: &'static SiteContent) -> impl IntoView {
    let typewriter = content
        .typewriter_cycler()
        .inspect_err(|e| log::error!("typewriter disabled: {e}"))
        .ok();
    view! {
        <Title text="Home" />
        <Hero owner=&content.owner typewriter />
        <About grid=content.grid.as_slice() tech_stack=content.tech_stack.as_slice() owner=&content.owner />
        <RecentProjects projects=content.projects.as_slice() />
        <Clients testimonials=content.testimonials.as_slice() companies=content.companies.as_slice() />
        <ExperienceSection experience=content.experience.as_slice() />
        <Approach phases=content.approach.as_slice() />
        <Footer owner=&content.owner socials=content.socials.as_slice() />
    }
}
