use gloo::console::{error, log};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser::{copy_to_clipboard, open_mail_client};
use crate::contact::{ContactForm, ContactMsg, Field};

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    /// mailto recipient
    pub recipient: &'static str,
    /// Page load starts from an empty form.
    #[prop_or_default]
    pub initial: ContactForm,
}

fn input_value(e: &InputEvent) -> String {
    match e.target_dyn_into::<HtmlInputElement>() {
        Some(input) => input.value(),
        None => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
    }
}

fn copy_status_text(result: Result<(), String>) -> String {
    match result {
        Ok(_) => "Copied ✅".into(),
        Err(e) => format!("Copy failed: {}", e),
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let initial = props.initial.clone();
    let form = use_reducer(move || initial);
    let copy_status = use_state(String::new);

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.dispatch(ContactMsg::FieldChanged {
                field,
                value: input_value(&e),
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let recipient = props.recipient;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_submitted() {
                return;
            }
            // `required` normally stops us before this point.
            let draft = match form.draft() {
                Ok(d) => d,
                Err(field) => {
                    log!(format!("Contact form not sent: {} is empty", field.as_str()));
                    return;
                }
            };
            form.dispatch(ContactMsg::Submitted);

            log!(format!("Opening mail client for {recipient}"));
            if let Err(e) = open_mail_client(&draft.mailto(recipient)) {
                error!(e);
            }
        })
    };

    let on_copy = {
        let form = form.clone();
        let copy_status = copy_status.clone();
        Callback::from(move |_e: MouseEvent| {
            let Ok(draft) = form.draft() else {
                copy_status.set("Nothing to copy yet.".into());
                return;
            };
            copy_status.set("Copying…".into());
            let copy_status = copy_status.clone();
            spawn_local(async move {
                copy_status.set(copy_status_text(copy_to_clipboard(draft.body).await));
            });
        })
    };

    let submitted = form.is_submitted();

    html! {
        <section class="section">
            <h2>{ "Contact Me" }</h2>
            <form class="contact" {onsubmit}>
                <input
                    type="text"
                    name={Field::Name.as_str()}
                    placeholder={Field::Name.placeholder()}
                    value={form.name.clone()}
                    oninput={on_field(Field::Name)}
                    required={true}
                    disabled={submitted}
                />
                <input
                    type="email"
                    name={Field::Email.as_str()}
                    placeholder={Field::Email.placeholder()}
                    value={form.email.clone()}
                    oninput={on_field(Field::Email)}
                    required={true}
                    disabled={submitted}
                />
                <textarea
                    name={Field::Message.as_str()}
                    placeholder={Field::Message.placeholder()}
                    rows="5"
                    value={form.message.clone()}
                    oninput={on_field(Field::Message)}
                    required={true}
                    disabled={submitted}
                />
                <button type="submit" class="primary" disabled={submitted}>{ "Send Message" }</button>

                if submitted {
                    <div class="small">
                        { "No mail app opened? " }
                        <button type="button" onclick={on_copy}>{ "Copy message" }</button>
                        { " and send it to " }{ props.recipient }
                    </div>
                    <div class="small">{ (*copy_status).clone() }</div>
                }
            </form>
        </section>
    }
}
