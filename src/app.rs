mod about;
mod approach;
mod experience;
mod footer;
mod hero;
mod homepage;
mod nav;
mod projects;
mod testimonials;
mod typewriter;

pub use typewriter::TypewriterName;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site, SiteContent};
use homepage::HomePage;
use nav::FloatingNav;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black-100 text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    match site() {
        Ok(content) => Either::Left(view! { <Site content /> }),
        Err(e) => {
            log::error!("failed to load site content: {e}");
            Either::Right(view! {
                <main class="flex h-screen items-center justify-center">
                    <p class="text-white-100">"This page is temporarily unavailable."</p>
                </main>
            })
        }
    }
}

#[component]
fn Site(content: &'static SiteContent) -> impl IntoView {
    let owner = &content.owner;
    let description = format!("{} - {}", owner.headline, owner.tagline);
    let name = owner.name.clone();
    view! {
        // sets the document title
        <Title formatter=move |title| format!("{name}'s Portfolio - {title}") />
        <Meta name="description" content=description />
        <Meta name="author" content=owner.full_name.clone() />
        <Meta
            name="keywords"
            content="portfolio, web developer, full stack developer, rust, leptos"
        />
        <Router>
            <main class="relative bg-black-100 flex justify-center items-center flex-col overflow-hidden mx-auto sm:px-10 px-5">
                <div class="max-w-7xl w-full">
                    <FloatingNav items=content.nav.clone() />
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=move || view! { <HomePage content /> } />
                    </Routes>
                </div>
            </main>
        </Router>
    }
}
