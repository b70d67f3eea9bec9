mod fake_form_generator;

pub use fake_form_generator::{FakeFormGenerator, contact_form};
