pub mod fake_text_generator;

pub use fake_text_generator::FakeTextGenerator;
