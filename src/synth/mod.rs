//! This namespace contains all the parts converting from note data to wave data.

pub mod envelope;
pub mod tone;

pub use tone::{generate_tone, Tone};
