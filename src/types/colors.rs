use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe color enum instead of strings.
///
/// The serialized form is the exact wire value the Notion API expects,
/// so background variants carry the `_background` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    GrayBackground,
    BrownBackground,
    RedBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Color::Default),
            "gray" => Ok(Color::Gray),
            "brown" => Ok(Color::Brown),
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "purple" => Ok(Color::Purple),
            "pink" => Ok(Color::Pink),
            "gray_background" => Ok(Color::GrayBackground),
            "brown_background" => Ok(Color::BrownBackground),
            "red_background" => Ok(Color::RedBackground),
            "orange_background" => Ok(Color::OrangeBackground),
            "yellow_background" => Ok(Color::YellowBackground),
            "green_background" => Ok(Color::GreenBackground),
            "blue_background" => Ok(Color::BlueBackground),
            "purple_background" => Ok(Color::PurpleBackground),
            "pink_background" => Ok(Color::PinkBackground),
            _ => Err(ValidationError::InvalidColor(s.to_string())),
        }
    }
}

impl Color {
    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::RedBackground => "red_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
        }
    }

    /// Check if this is a background color
    pub fn is_background(&self) -> bool {
        matches!(
            self,
            Color::GrayBackground
                | Color::BrownBackground
                | Color::RedBackground
                | Color::OrangeBackground
                | Color::YellowBackground
                | Color::GreenBackground
                | Color::BlueBackground
                | Color::PurpleBackground
                | Color::PinkBackground
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_color_parsing() {
        assert_eq!(Color::from_str("red").unwrap(), Color::Red);
        assert_eq!(
            Color::from_str("gray_background").unwrap(),
            Color::GrayBackground
        );
        assert!(Color::from_str("light_gray").is_err());
        assert!(Color::from_str("invalid").is_err());
    }

    #[test]
    fn test_wire_values_round_trip() {
        let serialized = serde_json::to_string(&Color::BlueBackground).unwrap();
        assert_eq!(serialized, "\"blue_background\"");
        let parsed: Color = serde_json::from_str("\"blue_background\"").unwrap();
        assert_eq!(parsed, Color::BlueBackground);
    }

    #[test]
    fn test_background_colors() {
        assert!(!Color::Red.is_background());
        assert!(Color::RedBackground.is_background());
    }
}
