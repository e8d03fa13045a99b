use yew::prelude::*;

use crate::profile::{Document, PROFILE};

#[derive(Properties, PartialEq)]
pub struct DocumentViewerProps {
    pub document: Document,
}

#[function_component(DocumentViewer)]
pub fn document_viewer(props: &DocumentViewerProps) -> Html {
    let doc = props.document;
    html! {
        <div class="card doc">
            <h3>{ doc.title }</h3>
            <embed src={doc.src} type="application/pdf" width="100%" height="500px" />
        </div>
    }
}

#[function_component(DocumentsSection)]
pub fn documents_section() -> Html {
    html! {
        <section class="section alt">
            <h2>{ "Recommendation Letter & CV" }</h2>
            <div class="docs">
                { for PROFILE.documents.iter().map(|d| html! {
                    <DocumentViewer key={d.src} document={*d} />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn one_fixed_size_viewer_per_document() {
        let html = ServerRenderer::<DocumentsSection>::new()
            .hydratable(false)
            .render()
            .await;

        assert_eq!(html.matches("<embed").count(), PROFILE.documents.len());
        assert_eq!(html.matches("width=\"100%\"").count(), PROFILE.documents.len());
        assert_eq!(html.matches("height=\"500px\"").count(), PROFILE.documents.len());
        for d in PROFILE.documents {
            assert!(html.contains(&format!("<h3>{}</h3>", d.title)));
        }
    }
}
