mod greeting;
mod hero;
mod landing;
mod nav;

pub use greeting::{on_click, DisplayName, Greeting, GreetingPage};
pub use hero::Hero;
pub use landing::LandingPage;
pub use nav::{NavPanel, NAV_SECTIONS, PROMPT};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

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
                <link rel="stylesheet" id="leptos" href="/pkg/codeterminal-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | codeterminal") />

        <Router>
            <main>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/hello") view=GreetingPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    // only the initial server render has a response to set the status on
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <section class="flex flex-col justify-center items-center min-h-screen gap-4">
            <p>
                <span class="text-red">"➜"</span>
                " "
                <span class="text-cyan">"codeterminal"</span>
                " no such file or directory"
            </p>
            <a href="/" class="text-blue">"cd ~"</a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "ssr")]
    #[test]
    fn test_not_found_without_response() {
        use super::*;

        let owner = Owner::new();
        owner.set();
        provide_meta_context();

        let html = view! { <NotFound /> }.to_html();
        assert!(html.contains("no such file or directory"));
    }
}
