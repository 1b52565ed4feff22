//! Formatter adapters implementing `pakgen_core::application::ports::Formatter`.

pub mod prettier;
pub mod recording;

pub use prettier::PrettierFormatter;
pub use recording::RecordingFormatter;
