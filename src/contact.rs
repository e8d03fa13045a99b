// Contact form state machine and the mailto handoff. Nothing in here touches
// the browser, so it runs the same under `cargo test`.

use std::rc::Rc;

use urlencoding::encode;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Display (and validation) order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The HTML `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactMsg {
    FieldChanged { field: Field, value: String },
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phase: Phase,
}

/// What gets handed to the mail client.
#[derive(Debug, Clone, PartialEq)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode(&self.subject),
            encode(&self.body)
        )
    }
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// First required field that is still empty. Mirrors the browser's
    /// `required` check, so whitespace counts as a value.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.field(*f).is_empty())
    }

    pub fn draft(&self) -> Result<MailDraft, Field> {
        if let Some(missing) = self.missing_field() {
            return Err(missing);
        }
        Ok(MailDraft {
            subject: format!("Portfolio Contact from {}", self.name),
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                self.name, self.email, self.message
            ),
        })
    }

    /// The only way the form changes. Never fails: messages that do not apply
    /// to the current phase leave the form as it was.
    pub fn apply(&mut self, msg: ContactMsg) -> Option<MailDraft> {
        if self.is_submitted() {
            return None;
        }
        match msg {
            ContactMsg::FieldChanged { field, value } => {
                *self.field_mut(field) = value;
                None
            }
            ContactMsg::Submitted => {
                let draft = self.draft().ok()?;
                self.phase = Phase::Submitted;
                Some(draft)
            }
        }
    }
}

impl Reducible for ContactForm {
    type Action = ContactMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
