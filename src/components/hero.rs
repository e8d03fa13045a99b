use yew::prelude::*;

use crate::profile::PROFILE;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hgroup">
                <h1>{ PROFILE.greeting() }</h1>
                <p>{ PROFILE.headline }</p>
                <div class="links">
                    { for PROFILE.links.iter().map(|l| html! {
                        <a class="pill" href={l.href} target="_blank" rel="noopener noreferrer">{ l.label }</a>
                    }) }
                </div>
            </div>
            <img
                class="avatar"
                src={PROFILE.avatar.src}
                alt={PROFILE.avatar.alt}
                width="220"
                height="220"
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn profile_links_open_in_new_tab() {
        let html = ServerRenderer::<Hero>::new().hydratable(false).render().await;

        assert!(html.contains("James Thuranira</h1>"));
        assert_eq!(html.matches("class=\"pill\"").count(), PROFILE.links.len());
        assert_eq!(html.matches("target=\"_blank\"").count(), PROFILE.links.len());
        assert!(html.contains("href=\"https://github.com/james1478\""));
    }
}
