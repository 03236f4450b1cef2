pub mod config;
pub mod core;
pub mod playback;
pub mod translation;

pub use self::core::steps::{generate_steps, step_count, AnimationSteps};
pub use self::core::unicode::{
    compose, decompose, decompose_str, is_syllable, CodecError, JamoTriple,
};
pub use playback::{Playback, PlaybackState, Player};
