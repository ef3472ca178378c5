//! Editor tools.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The active tool decides what a pointer-down on the stage does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Wall,
    Door,
    Window,
    Closet,
}

impl Tool {
    /// All tools in tool-panel order.
    pub const ALL: [Tool; 5] = [
        Tool::Select,
        Tool::Wall,
        Tool::Door,
        Tool::Window,
        Tool::Closet,
    ];

    /// Maps a tool-panel index to a tool, falling back to `Select`.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Tool::Select,
            1 => Tool::Wall,
            2 => Tool::Door,
            3 => Tool::Window,
            4 => Tool::Closet,
            unknown => {
                tracing::warn!("Unknown tool index {}, defaulting to Select", unknown);
                Tool::Select
            }
        }
    }

    /// Panel label.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Wall => "Wall",
            Tool::Door => "Door",
            Tool::Window => "Window",
            Tool::Closet => "Closet",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Select => write!(f, "select"),
            Tool::Wall => write!(f, "wall"),
            Tool::Door => write!(f, "door"),
            Tool::Window => write!(f, "window"),
            Tool::Closet => write!(f, "closet"),
        }
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "select" => Ok(Tool::Select),
            "wall" => Ok(Tool::Wall),
            "door" => Ok(Tool::Door),
            "window" => Ok(Tool::Window),
            "closet" => Ok(Tool::Closet),
            _ => Err(format!("Unknown tool: {}", s)),
        }
    }
}
