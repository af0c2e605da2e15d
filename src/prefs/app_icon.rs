use serde::{Deserialize, Serialize};
use std::fmt;

/// App icon chosen by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AppIcon {
    /// The stock hedgehog.
    #[default]
    Default,
    /// Angry hedgehog.
    Angry,
    /// Hedgehog with glasses.
    Nerd,
    /// Happy hedgehog, blue background.
    HappyBlue,
    /// Happy hedgehog, orange background.
    HappyOrange,
    /// Hedgehog in space.
    Space,
    /// Hedgehog with a cowboy hat.
    Cowboy,
    /// Hedgehog in a hard hat.
    Construction,
}

impl fmt::Display for AppIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppIcon::Default => write!(f, "default"),
            AppIcon::Angry => write!(f, "angry"),
            AppIcon::Nerd => write!(f, "nerd"),
            AppIcon::HappyBlue => write!(f, "happy-blue"),
            AppIcon::HappyOrange => write!(f, "happy-orange"),
            AppIcon::Space => write!(f, "space"),
            AppIcon::Cowboy => write!(f, "cowboy"),
            AppIcon::Construction => write!(f, "construction"),
        }
    }
}
