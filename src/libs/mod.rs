//! QV scoring models for quiver-style consensus.
//!
//! # Core Components
//!
//! * [`params`] - The 14-term parameter vector and the free-to-full projection.
//! * [`model`] - The three model variants and their fitted presets.
//! * [`features`] - Per-read feature bundles and window-local mapped reads.
//! * [`parameter_set`] - Preset lookup by name and best-model selection.
//! * [`engine`] - Value types consumed by the scoring engine.

pub mod channel;
pub mod engine;
pub mod error;
pub mod features;
pub mod model;
pub mod parameter_set;
pub mod params;

pub use channel::{ChannelSet, QvChannel};
pub use engine::{BandingOptions, MappedRead, MoveSet, QuiverConfig, QvModelParams, QvSequenceFeatures, Strand};
pub use error::ModelError;
pub use features::{AlignmentRecord, AlnRecord, PulseSource};
pub use model::Model;
pub use parameter_set::{ParameterSet, PresetName};
pub use params::{ParamIndex, NUM_PARAMS};
