use leptos::prelude::*;
use leptos_meta::Title;

use super::{hero::Hero, nav::NavPanel};

/// Terminal-styled landing page: fixed prompt navigation over a full-height hero.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <NavPanel />
        <Hero />
    }
}
