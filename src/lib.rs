pub mod cli;
pub mod melody;
pub mod note;
pub mod output;
pub mod pattern;
pub mod synth;
pub mod wave;
