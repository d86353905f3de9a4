mod achievements;
mod avatar;
mod homepage;
mod motion;
mod projects;
mod resume;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{build_info, portfolio::Portfolio};

use achievements::AchievementPage;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
            <body class="font-sans bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

/// The portfolio injected at the entry point. Only pages call this; the route
/// list is generated without it.
pub fn use_portfolio() -> Arc<Portfolio> {
    expect_context::<Arc<Portfolio>>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <main class="relative flex flex-col mx-auto w-full max-w-4xl px-6 min-h-[100dvh]">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/achievements/:slug") view=AchievementPage />
                </Routes>
            </main>
            <footer class="py-8 text-center text-xs text-muted">{build_info::updated_label()}</footer>
        </Router>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text="Page not found" />
        <section class="flex flex-col items-center justify-center gap-4 py-32 text-center">
            <h1 class="text-6xl font-extrabold tracking-tight">"404"</h1>
            <p class="text-muted">"This page doesn't exist."</p>
            <A href="/" attr:class="text-sm underline underline-offset-4 hover:text-amber">
                "Back home"
            </A>
        </section>
    }
}
