//! Core types for the persona system.
//!
//! Each coach persona carries a base color and an initial; each expression
//! carries a color transform (see `render::color`) and, for the non-default
//! variants, an indicator dot color.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────
// Persona
// ─────────────────────────────────────────────────────────────────

/// The four coach personas shipped with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    /// Drill sergeant coach. Dark gray.
    Sterling,
    /// Nurturing coach. Forest green.
    Willow,
    /// Analytical coach. Steel blue.
    Kai,
    /// Energetic coach. Orange.
    Sparky,
}

impl Persona {
    /// Slug used in file names and CLI output.
    pub fn slug(&self) -> &'static str {
        match self {
            Persona::Sterling => "sterling",
            Persona::Willow => "willow",
            Persona::Kai => "kai",
            Persona::Sparky => "sparky",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::Sterling => "Sterling",
            Persona::Willow => "Willow",
            Persona::Kai => "Kai",
            Persona::Sparky => "Sparky",
        }
    }

    /// The single letter drawn in the center of the portrait.
    pub fn initial(&self) -> char {
        match self {
            Persona::Sterling => 'S',
            Persona::Willow => 'W',
            Persona::Kai => 'K',
            Persona::Sparky => 'S',
        }
    }

    /// Base portrait color before any expression transform is applied.
    pub fn base_color(&self) -> [u8; 3] {
        match self {
            Persona::Sterling => [70, 70, 70],
            Persona::Willow => [34, 139, 34],
            Persona::Kai => [70, 130, 180],
            Persona::Sparky => [255, 165, 0],
        }
    }

    /// All personas in declaration order.
    pub fn all() -> &'static [Persona] {
        &[
            Persona::Sterling,
            Persona::Willow,
            Persona::Kai,
            Persona::Sparky,
        ]
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sterling" => Ok(Persona::Sterling),
            "willow" => Ok(Persona::Willow),
            "kai" => Ok(Persona::Kai),
            "sparky" => Ok(Persona::Sparky),
            _ => Err(format!(
                "Unknown persona '{}'. Valid: sterling, willow, kai, sparky",
                s
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Expression
// ─────────────────────────────────────────────────────────────────

/// Mood variants a portrait can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Expression {
    /// Neutral portrait, base color unchanged, no indicator dot.
    Default,
    /// Brightened portrait, green indicator.
    Happy,
    /// Darkened portrait, red indicator.
    Disappointed,
    /// Yellow-tinted portrait, yellow indicator.
    Surprised,
}

impl Expression {
    /// Slug used in file names and CLI output.
    pub fn slug(&self) -> &'static str {
        match self {
            Expression::Default => "default",
            Expression::Happy => "happy",
            Expression::Disappointed => "disappointed",
            Expression::Surprised => "surprised",
        }
    }

    /// All expressions in declaration order.
    pub fn all() -> &'static [Expression] {
        &[
            Expression::Default,
            Expression::Happy,
            Expression::Disappointed,
            Expression::Surprised,
        ]
    }

    /// Color of the corner indicator dot, `None` when no dot is drawn.
    pub fn indicator_color(&self) -> Option<Rgba<u8>> {
        match self {
            Expression::Default => None,
            Expression::Happy => Some(Rgba([0, 255, 0, 255])),
            Expression::Disappointed => Some(Rgba([255, 0, 0, 255])),
            Expression::Surprised => Some(Rgba([255, 255, 0, 255])),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Expression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Expression::Default),
            "happy" => Ok(Expression::Happy),
            "disappointed" => Ok(Expression::Disappointed),
            "surprised" => Ok(Expression::Surprised),
            _ => Err(format!(
                "Unknown expression '{}'. Valid: default, happy, disappointed, surprised",
                s
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
