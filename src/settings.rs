//! Game settings and preferences
//!
//! Difficulty is the only field the simulation reads; everything else is
//! cosmetic and consumed by the front-end.

use serde::{Deserialize, Serialize};

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Heroic,
}

impl Difficulty {
    /// Map a 1-based selector level to a preset
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Normal),
            3 => Some(Difficulty::Heroic),
            _ => None,
        }
    }

    /// Map a selector level, falling back to Normal for anything unlisted
    pub fn from_level_or_default(level: i64) -> Self {
        Self::from_level(level).unwrap_or_else(|| {
            log::warn!("Unknown difficulty level {}, using Normal", level);
            Difficulty::default()
        })
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "1" => Some(Difficulty::Easy),
            "normal" | "2" => Some(Difficulty::Normal),
            "heroic" | "3" => Some(Difficulty::Heroic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Heroic => "Heroic",
        }
    }

    /// 1-based level index
    pub fn level(&self) -> i64 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Heroic => 3,
        }
    }

    /// Player jump per keypress; drops by 5 per level
    pub fn player_speed(&self) -> f32 {
        (35 - (self.level() - 1) * 5) as f32
    }

    /// Adversary step per frame (lookup, not linear)
    pub fn adversary_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Normal => 2.0,
            Difficulty::Heroic => 5.0,
        }
    }
}

/// How a sprite is drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterSkin {
    /// Background image URL
    Image(String),
    /// Flat CSS color
    Color(String),
}

impl CharacterSkin {
    /// Selector values ending in an image extension are images, anything else a color
    pub fn from_value(value: &str) -> Self {
        let lower = value.to_lowercase();
        if lower.ends_with(".jpg") || lower.ends_with(".png") {
            CharacterSkin::Image(value.to_string())
        } else {
            CharacterSkin::Color(value.to_string())
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Applied on the next Start
    pub difficulty: Difficulty,

    // === Cosmetics ===
    /// Play area background (CSS color)
    pub background_color: String,
    pub player_skin: CharacterSkin,
    /// Adversary is always an image
    pub adversary_image: String,
    /// Audio source URL
    pub music_track: String,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            background_color: "#ffffff".to_string(),
            player_skin: CharacterSkin::Color("#1e90ff".to_string()),
            adversary_image: "assets/adversary.png".to_string(),
            music_track: "assets/track1.mp3".to_string(),
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Apply a raw selector level
    pub fn select_difficulty(&mut self, level: i64) {
        self.difficulty = Difficulty::from_level_or_default(level);
    }

    /// Body class matching the theme toggle
    pub fn theme_class(&self) -> Option<&'static str> {
        self.dark_mode.then_some("dark-mode")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_mapping() {
        assert_eq!(Difficulty::Easy.player_speed(), 35.0);
        assert_eq!(Difficulty::Easy.adversary_speed(), 1.0);
        assert_eq!(Difficulty::Normal.player_speed(), 30.0);
        assert_eq!(Difficulty::Normal.adversary_speed(), 2.0);
        assert_eq!(Difficulty::Heroic.player_speed(), 25.0);
        assert_eq!(Difficulty::Heroic.adversary_speed(), 5.0);
    }

    #[test]
    fn test_unknown_level_falls_back_to_normal() {
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(4), None);
        assert_eq!(Difficulty::from_level_or_default(7), Difficulty::Normal);
        assert_eq!(Difficulty::from_level_or_default(3), Difficulty::Heroic);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Difficulty::from_str("HEROIC"), Some(Difficulty::Heroic));
        assert_eq!(Difficulty::from_str(" 1 "), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_character_skin() {
        assert_eq!(
            CharacterSkin::from_value("img/hero.PNG"),
            CharacterSkin::Image("img/hero.PNG".to_string())
        );
        assert_eq!(
            CharacterSkin::from_value("red"),
            CharacterSkin::Color("red".to_string())
        );
    }

    #[test]
    fn test_theme_class() {
        let mut settings = Settings::default();
        assert_eq!(settings.theme_class(), None);
        settings.dark_mode = true;
        assert_eq!(settings.theme_class(), Some("dark-mode"));
    }
}
