use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// Horizontal tile coordinate.
    pub x: f32,
    /// Vertical tile coordinate.
    pub y: f32,
}

impl Vector {
    /// Create a vector from its components.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub red: f32,
    /// Green component.
    pub green: f32,
    /// Blue component.
    pub blue: f32,
    /// Alpha component.
    pub alpha: f32,
}

impl Color {
    /// Opaque white, the neutral ambient light.
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Create an opaque color.
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Build a color from a component list.
    ///
    /// The first three values are red, green and blue; a fourth value, if
    /// present, is alpha. Any further values are ignored. Returns `None` when
    /// fewer than three components are given.
    pub fn from_components(components: &[f32]) -> Option<Self> {
        match components {
            [red, green, blue, alpha, ..] => Some(Self {
                red: *red,
                green: *green,
                blue: *blue,
                alpha: *alpha,
            }),
            [red, green, blue] => Some(Self::rgb(*red, *green, *blue)),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// A walking direction on the worldmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Standing still.
    #[default]
    None,
    /// Towards negative x.
    West,
    /// Towards positive x.
    East,
    /// Towards negative y.
    North,
    /// Towards positive y.
    South,
}

impl Direction {
    /// Parse a direction name as written in worldmap files.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "west" => Some(Self::West),
            "east" => Some(Self::East),
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            _ => None,
        }
    }

    /// The opposite direction. `None` stays `None`.
    pub fn reverse(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::West => Self::East,
            Self::East => Self::West,
            Self::North => Self::South,
            Self::South => Self::North,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::West => write!(f, "west"),
            Self::East => write!(f, "east"),
            Self::North => write!(f, "north"),
            Self::South => write!(f, "south"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn color_from_three_components_is_opaque() {
        let c = Color::from_components(&[0.2, 0.4, 0.6]).unwrap();
        assert_eq!(c, Color::rgb(0.2, 0.4, 0.6));
        assert!((c.alpha - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn color_fourth_component_is_alpha() {
        let c = Color::from_components(&[0.1, 0.2, 0.3, 0.5]).unwrap();
        assert!((c.alpha - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn color_default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
    }

    #[test]
    fn direction_parse_and_display_agree() {
        for name in ["none", "west", "east", "north", "south"] {
            let dir = Direction::parse(name).unwrap();
            assert_eq!(dir.to_string(), name);
        }
        assert_eq!(Direction::parse("up"), None);
    }

    #[test]
    fn direction_reverse() {
        assert_eq!(Direction::West.reverse(), Direction::East);
        assert_eq!(Direction::North.reverse(), Direction::South);
        assert_eq!(Direction::None.reverse(), Direction::None);
    }

    proptest! {
        #[test]
        fn short_component_lists_are_rejected(v in prop::collection::vec(0.0f32..=1.0, 0..3)) {
            prop_assert!(Color::from_components(&v).is_none());
        }

        #[test]
        fn long_component_lists_keep_rgb(v in prop::collection::vec(0.0f32..=1.0, 3..8)) {
            let c = Color::from_components(&v).unwrap();
            prop_assert_eq!(c.red, v[0]);
            prop_assert_eq!(c.green, v[1]);
            prop_assert_eq!(c.blue, v[2]);
        }
    }
}
