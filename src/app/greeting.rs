use leptos::prelude::*;
use leptos_meta::Title;

use crate::notify::{use_notifier, Notifier};

pub const GUEST: &str = "Guest";
pub const CHANGED_NAME: &str = "John";
pub const CLICK_NOTICE: &str = "Button Clicked!";

/// The name shown by a [`Greeting`]. Starts as "Guest"; the only transition
/// is to "John", and it is one-way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl Default for DisplayName {
    fn default() -> Self {
        Self(GUEST.to_string())
    }
}

impl DisplayName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn change(&mut self) {
        self.0 = CHANGED_NAME.to_string();
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.0)
    }
}

/// What a click does: show the notice, wait for it to be dismissed, rename.
/// The signal is not borrowed while the notice is open.
pub fn on_click(name: RwSignal<DisplayName>, notifier: &Notifier) {
    if let Err(e) = notifier.notify(CLICK_NOTICE) {
        log::warn!("{e}");
    }
    name.update(DisplayName::change);
}

#[component]
pub fn Greeting() -> impl IntoView {
    let name = RwSignal::new(DisplayName::default());
    view! { <GreetingView name /> }
}

#[component]
fn GreetingView(name: RwSignal<DisplayName>) -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div>
            <p>{move || name.with(DisplayName::greeting)}</p>
            <button on:click=move |_| on_click(name, &notifier)>"Change Name"</button>
        </div>
    }
}

#[component]
pub fn GreetingPage() -> impl IntoView {
    view! {
        <Title text="Hello" />
        <section class="flex justify-center items-center min-h-screen">
            <Greeting />
        </section>
    }
}
