//! Sampling options for generation requests.

use serde::{Deserialize, Serialize};

/// Tunable sampling parameters for a generation request.
///
/// All fields are optional; unset fields fall back to whatever the model
/// client has configured as defaults, and ultimately to the upstream
/// model's own defaults. No range validation happens here — out-of-range
/// values pass through and the upstream error semantics govern the outcome.
///
/// # Examples
///
/// ```
/// use dashgate_core::GenerationOptions;
///
/// let options = GenerationOptions::builder()
///     .top_p(0.7)
///     .top_k(50u32)
///     .temperature(0.8)
///     .build()
///     .expect("Valid GenerationOptions");
///
/// assert_eq!(*options.top_p(), Some(0.7));
/// assert_eq!(*options.top_k(), Some(50));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerationOptions {
    /// Nucleus sampling probability mass
    #[builder(default)]
    top_p: Option<f32>,
    /// Candidate pool size for sampling
    #[builder(default)]
    top_k: Option<u32>,
    /// Sampling randomness
    #[builder(default)]
    temperature: Option<f32>,
}

impl GenerationOptions {
    /// Returns a builder for constructing GenerationOptions.
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }

    /// Merge these options over a set of defaults.
    ///
    /// Fields set on `self` win; unset fields are filled from `defaults`.
    /// This is the per-request precedence rule: explicit options always
    /// override externally configured defaults for the same parameter.
    pub fn overlay(&self, defaults: &GenerationOptions) -> GenerationOptions {
        GenerationOptions {
            top_p: self.top_p.or(defaults.top_p),
            top_k: self.top_k.or(defaults.top_k),
            temperature: self.temperature.or(defaults.temperature),
        }
    }

    /// Returns true if no tunable is set.
    pub fn is_empty(&self) -> bool {
        self.top_p.is_none() && self.top_k.is_none() && self.temperature.is_none()
    }
}
