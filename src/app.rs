use yew::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::documents::DocumentsSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::project_list::{CardAction, ProjectList};
use crate::profile::PROFILE;
use crate::projects::{COMPLETED_PROJECTS, ONGOING_PROJECTS};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Shown in the footer.
    pub year: i32,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <div class="page">
            <Hero />

            <section class="section">
                <h2>{ "Projects" }</h2>
                <ProjectList projects={COMPLETED_PROJECTS} action={CardAction::Link} />
            </section>

            <section class="section alt ongoing">
                <h2>{ "Ongoing Projects" }</h2>
                <ProjectList projects={ONGOING_PROJECTS} action={CardAction::Button} />
            </section>

            <DocumentsSection />

            <ContactSection recipient={PROFILE.contact_email} />

            <Footer year={props.year} />
        </div>
    }
}
