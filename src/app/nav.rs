use leptos::prelude::*;

const PROMPT_USER: &str = "user@codeterminal";
const PROMPT_PATH: &str = "~";
/// `user@codeterminal:~$ `, the text every entry starts with.
pub const PROMPT: &str = "user@codeterminal:~$ ";

pub const NAV_SECTIONS: [&str; 6] = ["Home", "About", "Skills", "Experience", "Projects", "Contact"];

/// Empty fragment: activating the link leaves the location alone.
pub const NAV_HREF: &str = "#";

#[component]
fn Prompt() -> impl IntoView {
    view! {
        <span class="text-green">{PROMPT_USER}</span>
        ":"
        <span class="text-blue">{PROMPT_PATH}</span>
        <span class="text-yellow">"$"</span>
        " "
    }
}

#[component]
pub fn NavPanel() -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 z-10 h-screen w-72 p-6 shadow-lg bg-background/90">
            <ul class="flex flex-col gap-3">
                {NAV_SECTIONS
                    .iter()
                    .map(|label| {
                        view! {
                            <li>
                                <a href=NAV_HREF class="hover:text-brightWhite">
                                    <Prompt />
                                    <span>{*label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_entry_text(label: &str) -> String {
        format!("{PROMPT}{label}")
    }

    #[test]
    fn test_prompt_parts_match_prefix() {
        assert_eq!(format!("{PROMPT_USER}:{PROMPT_PATH}$ "), PROMPT);
    }

    #[test]
    fn test_entry_text() {
        let entries = NAV_SECTIONS.map(nav_entry_text);
        assert_eq!(
            entries,
            [
                "user@codeterminal:~$ Home",
                "user@codeterminal:~$ About",
                "user@codeterminal:~$ Skills",
                "user@codeterminal:~$ Experience",
                "user@codeterminal:~$ Projects",
                "user@codeterminal:~$ Contact",
            ]
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_render_entries_in_order() {
        let owner = Owner::new();
        owner.set();

        let html = view! { <NavPanel /> }.to_html();
        assert_eq!(html.matches("<li>").count(), 6);
        assert_eq!(html.matches("user@codeterminal").count(), 6);
        assert_eq!(html.matches(r##"href="#""##).count(), 6);

        let positions = NAV_SECTIONS
            .iter()
            .map(|label| {
                html.find(&format!("<span>{label}</span>"))
                    .expect("every section should be rendered")
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
