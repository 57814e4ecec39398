use crate::error::CreatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    YouTube,
    LinkedIn,
    Resume,
    Presentation,
}

impl ToolId {
    pub fn key(&self) -> &'static str {
        match self {
            ToolId::YouTube => "youtube",
            ToolId::LinkedIn => "linkedin",
            ToolId::Resume => "resume",
            ToolId::Presentation => "presentation",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ToolId {
    type Err = CreatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_key(s)
            .map(|tool| tool.id)
            .ok_or_else(|| CreatorError::UnknownTool(s.to_string()))
    }
}

/// Display metadata for one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Colour name understood by `colored::Color::from`.
    pub accent: &'static str,
}

const TOOLS: [ToolDescriptor; 4] = [
    ToolDescriptor {
        id: ToolId::YouTube,
        name: "YouTube Script Generator",
        description: "Craft high-converting hooks and scripts for shorts or long-form videos.",
        icon: "🎥",
        accent: "red",
    },
    ToolDescriptor {
        id: ToolId::LinkedIn,
        name: "LinkedIn Post Writer",
        description: "Create professional, high-engagement posts tailored to your audience.",
        icon: "💼",
        accent: "blue",
    },
    ToolDescriptor {
        id: ToolId::Resume,
        name: "AI Resume Reviewer",
        description: "Evaluate your resume for ATS optimization and skill gaps.",
        icon: "📄",
        accent: "green",
    },
    ToolDescriptor {
        id: ToolId::Presentation,
        name: "Presentation Builder",
        description: "Structure slide-by-slide outlines with key talking points.",
        icon: "📊",
        accent: "magenta",
    },
];

/// All tools in display order.
pub fn all() -> &'static [ToolDescriptor] {
    &TOOLS
}

pub fn find(id: ToolId) -> &'static ToolDescriptor {
    match id {
        ToolId::YouTube => &TOOLS[0],
        ToolId::LinkedIn => &TOOLS[1],
        ToolId::Resume => &TOOLS[2],
        ToolId::Presentation => &TOOLS[3],
    }
}

/// Look a tool up by its exact string identifier, e.g. `"linkedin"`.
pub fn find_by_key(key: &str) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|t| t.id.key() == key)
}
