pub mod contact_form;
pub mod documents;
pub mod footer;
pub mod hero;
pub mod project_list;
