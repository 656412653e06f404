use leptos::prelude::*;

/// Served from `public/`.
pub const HERO_IMAGE: &str = "/images/hero-bg.svg";

pub const HERO_LINES: [&str; 2] = ["Lorem ipsum dolor sit amet", "consectetur adipiscing elit"];

#[component]
pub fn Hero() -> impl IntoView {
    let [headline, subline] = HERO_LINES;
    view! {
        <section
            class="flex flex-col justify-center items-center h-screen w-full bg-cover bg-center"
            style:background-image=format!("url('{HERO_IMAGE}')")
        >
            <h1 class="text-4xl font-bold">{headline}</h1>
            <h2 class="text-2xl text-cyan">{subline}</h2>
        </section>
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "ssr")]
    #[test]
    fn test_render_image_and_lines() {
        use super::*;

        let owner = Owner::new();
        owner.set();

        let html = view! { <Hero /> }.to_html();
        assert!(html.contains("background-image"));
        assert!(html.contains(HERO_IMAGE));
        for line in HERO_LINES {
            assert!(html.contains(line), "missing {line}");
        }
    }
}
