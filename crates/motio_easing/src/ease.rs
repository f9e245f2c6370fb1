//! Name-keyed easing catalogue
//!
//! [`Ease`] is the closed set of catalogue identifiers. Each variant maps to
//! exactly one function in [`crate::penner`], so config-driven callers can
//! select a curve by name while frame loops dispatch through a plain
//! function pointer. The mapping is total and fixed at compile time; there
//! is no runtime registration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::penner;

/// Signature shared by every catalogue entry.
pub type EaseFn = fn(f32, f32, f32, f32) -> f32;

/// A name that matches no catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown easing `{0}`")]
pub struct ParseEaseError(pub String);

/// Identifier for one easing function in the catalogue.
///
/// The four linear names evaluate identically; they are kept as distinct
/// identifiers so that stored animation definitions keep addressing whichever
/// one they were written with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    LinearNone,
    LinearIn,
    LinearOut,
    LinearInOut,
    SineIn,
    SineOut,
    SineInOut,
    CircIn,
    CircOut,
    CircInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuadIn,
    QuadOut,
    QuadInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
}

impl Ease {
    /// Every catalogue entry, in declaration order.
    pub const ALL: [Ease; 28] = [
        Ease::LinearNone,
        Ease::LinearIn,
        Ease::LinearOut,
        Ease::LinearInOut,
        Ease::SineIn,
        Ease::SineOut,
        Ease::SineInOut,
        Ease::CircIn,
        Ease::CircOut,
        Ease::CircInOut,
        Ease::CubicIn,
        Ease::CubicOut,
        Ease::CubicInOut,
        Ease::QuadIn,
        Ease::QuadOut,
        Ease::QuadInOut,
        Ease::ExpoIn,
        Ease::ExpoOut,
        Ease::ExpoInOut,
        Ease::BackIn,
        Ease::BackOut,
        Ease::BackInOut,
        Ease::BounceIn,
        Ease::BounceOut,
        Ease::BounceInOut,
        Ease::ElasticIn,
        Ease::ElasticOut,
        Ease::ElasticInOut,
    ];

    /// The function this identifier names.
    pub fn function(self) -> EaseFn {
        match self {
            Ease::LinearNone => penner::linear_none,
            Ease::LinearIn => penner::linear_in,
            Ease::LinearOut => penner::linear_out,
            Ease::LinearInOut => penner::linear_in_out,
            Ease::SineIn => penner::sine_in,
            Ease::SineOut => penner::sine_out,
            Ease::SineInOut => penner::sine_in_out,
            Ease::CircIn => penner::circ_in,
            Ease::CircOut => penner::circ_out,
            Ease::CircInOut => penner::circ_in_out,
            Ease::CubicIn => penner::cubic_in,
            Ease::CubicOut => penner::cubic_out,
            Ease::CubicInOut => penner::cubic_in_out,
            Ease::QuadIn => penner::quad_in,
            Ease::QuadOut => penner::quad_out,
            Ease::QuadInOut => penner::quad_in_out,
            Ease::ExpoIn => penner::expo_in,
            Ease::ExpoOut => penner::expo_out,
            Ease::ExpoInOut => penner::expo_in_out,
            Ease::BackIn => penner::back_in,
            Ease::BackOut => penner::back_out,
            Ease::BackInOut => penner::back_in_out,
            Ease::BounceIn => penner::bounce_in,
            Ease::BounceOut => penner::bounce_out,
            Ease::BounceInOut => penner::bounce_in_out,
            Ease::ElasticIn => penner::elastic_in,
            Ease::ElasticOut => penner::elastic_out,
            Ease::ElasticInOut => penner::elastic_in_out,
        }
    }

    /// Evaluate at elapsed time `t`, starting from `b`, changing by `c`
    /// over duration `d`.
    pub fn apply(self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        (self.function())(t, b, c, d)
    }

    /// Evaluate over unit progress: `t` in `[0, 1]` easing `0.0` to `1.0`.
    pub fn unit(self, t: f32) -> f32 {
        self.apply(t, 0.0, 1.0, 1.0)
    }

    /// Canonical identifier, as used in serialized animation definitions.
    pub fn name(self) -> &'static str {
        match self {
            Ease::LinearNone => "linear_none",
            Ease::LinearIn => "linear_in",
            Ease::LinearOut => "linear_out",
            Ease::LinearInOut => "linear_in_out",
            Ease::SineIn => "sine_in",
            Ease::SineOut => "sine_out",
            Ease::SineInOut => "sine_in_out",
            Ease::CircIn => "circ_in",
            Ease::CircOut => "circ_out",
            Ease::CircInOut => "circ_in_out",
            Ease::CubicIn => "cubic_in",
            Ease::CubicOut => "cubic_out",
            Ease::CubicInOut => "cubic_in_out",
            Ease::QuadIn => "quad_in",
            Ease::QuadOut => "quad_out",
            Ease::QuadInOut => "quad_in_out",
            Ease::ExpoIn => "expo_in",
            Ease::ExpoOut => "expo_out",
            Ease::ExpoInOut => "expo_in_out",
            Ease::BackIn => "back_in",
            Ease::BackOut => "back_out",
            Ease::BackInOut => "back_in_out",
            Ease::BounceIn => "bounce_in",
            Ease::BounceOut => "bounce_out",
            Ease::BounceInOut => "bounce_in_out",
            Ease::ElasticIn => "elastic_in",
            Ease::ElasticOut => "elastic_out",
            Ease::ElasticInOut => "elastic_in_out",
        }
    }

    /// Look up a curve by name, falling back when the name is unknown.
    ///
    /// Meant for config-driven callers where a typo should degrade the
    /// animation rather than abort loading.
    pub fn from_name_or(name: &str, fallback: Ease) -> Ease {
        match name.parse() {
            Ok(ease) => ease,
            Err(err) => {
                tracing::warn!("{err}, using {fallback}");
                fallback
            }
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = ParseEaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ease::ALL
            .iter()
            .copied()
            .find(|ease| ease.name() == s)
            .ok_or_else(|| ParseEaseError(s.to_string()))
    }
}
