use yew::prelude::*;

use crate::profile::PROFILE;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub year: i32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <p>{ PROFILE.copyright_line(props.year) }</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn shows_given_year() {
        let html = ServerRenderer::<Footer>::with_props(|| FooterProps { year: 2031 })
            .hydratable(false)
            .render()
            .await;
        assert!(html.contains("© 2031 James Thuranira. All rights reserved."));
    }
}
