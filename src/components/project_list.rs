use yew::prelude::*;

use crate::projects::Project;

/// How a card's outbound action looks. Both open `link` in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardAction {
    #[default]
    Link,
    Button,
}

impl CardAction {
    fn class(self) -> &'static str {
        match self {
            CardAction::Link => "action-link",
            CardAction::Button => "action-button",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CardAction::Link => "View Project On GitHub →",
            CardAction::Button => "View Live Website →",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectListProps {
    pub projects: &'static [Project],
    #[prop_or_default]
    pub action: CardAction,
}

#[function_component(ProjectList)]
pub fn project_list(props: &ProjectListProps) -> Html {
    let action = props.action;

    html! {
        <div class="grid">
            { for props.projects.iter().map(|project| html! {
                <ProjectCard key={project.id.to_string()} project={*project} {action} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub action: CardAction,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    html! {
        <article class="card">
            <h3>{ project.title }</h3>
            <p>{ project.description }</p>
            <div class="chips">
                { for project.tech.iter().map(|t| html! { <span class="chip">{ *t }</span> }) }
            </div>
            if let Some(link) = project.link {
                <a class={props.action.class()} href={link} target="_blank" rel="noopener noreferrer">
                    { props.action.label() }
                </a>
            }
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use yew::ServerRenderer;

    const MIXED: &[Project] = &[
        Project {
            id: 10,
            title: "Alpha",
            description: "first",
            tech: &["Rust", "Yew"],
            link: Some("https://example.com/alpha"),
        },
        Project {
            id: 11,
            title: "Beta",
            description: "",
            tech: &[],
            link: None,
        },
        Project {
            id: 12,
            title: "Gamma",
            description: "third",
            tech: &["WASM"],
            link: Some("https://example.com/gamma"),
        },
    ];

    async fn render(projects: &'static [Project], action: CardAction) -> String {
        ServerRenderer::<ProjectList>::with_props(move || ProjectListProps { projects, action })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn one_card_per_project_in_order() {
        let html = render(MIXED, CardAction::Link).await;

        assert_eq!(html.matches("<article class=\"card\">").count(), MIXED.len());
        let positions: Vec<usize> = MIXED
            .iter()
            .map(|p| html.find(&format!("<h3>{}</h3>", p.title)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn empty_list_renders_no_cards() {
        let html = render(&[], CardAction::Button).await;
        assert!(!html.contains("class=\"card\""));
        assert!(html.contains("class=\"grid\""));
    }

    #[tokio::test]
    async fn action_only_when_link_present() {
        let html = render(MIXED, CardAction::Link).await;

        assert_eq!(html.matches("<a ").count(), 2);
        assert_eq!(html.matches("href=\"https://example.com/alpha\"").count(), 1);
        assert_eq!(html.matches("href=\"https://example.com/gamma\"").count(), 1);
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);

        let beta_at = html.find("<h3>Beta</h3>").unwrap();
        let gamma_at = html.find("<h3>Gamma</h3>").unwrap();
        assert!(!html[beta_at..gamma_at].contains("<a "));
    }

    #[tokio::test]
    async fn chips_follow_tech_order() {
        let html = render(MIXED, CardAction::Link).await;
        let rust = html.find("<span class=\"chip\">Rust</span>").unwrap();
        let yew = html.find("<span class=\"chip\">Yew</span>").unwrap();
        assert!(rust < yew);
        assert_eq!(html.matches("class=\"chip\"").count(), 3);
    }

    #[tokio::test]
    async fn action_style_is_presentational() {
        let link = render(MIXED, CardAction::Link).await;
        let button = render(MIXED, CardAction::Button).await;

        assert!(link.contains("class=\"action-link\""));
        assert!(button.contains("class=\"action-button\""));
        assert_eq!(link.matches("href=").count(), button.matches("href=").count());
    }

    #[tokio::test]
    async fn rendering_is_repeatable() {
        let first = render(crate::projects::ONGOING_PROJECTS, CardAction::Button).await;
        let second = render(crate::projects::ONGOING_PROJECTS, CardAction::Button).await;
        assert_eq!(first, second);
    }
}
