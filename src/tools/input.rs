use super::registry::ToolId;
use crate::error::{CreatorError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_SLIDES: u8 = 3;
pub const MAX_SLIDES: u8 = 20;
pub const DEFAULT_SLIDES: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    #[default]
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VideoTone {
    #[default]
    Educational,
    Motivational,
    Casual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PostAudience {
    #[default]
    Students,
    Professionals,
    Founders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PostTone {
    #[default]
    Formal,
    Friendly,
    Authoritative,
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VideoFormat::Short => "Short",
            VideoFormat::Long => "Long",
        })
    }
}

impl fmt::Display for VideoTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VideoTone::Educational => "Educational",
            VideoTone::Motivational => "Motivational",
            VideoTone::Casual => "Casual",
        })
    }
}

impl fmt::Display for PostAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PostAudience::Students => "Students",
            PostAudience::Professionals => "Professionals",
            PostAudience::Founders => "Founders",
        })
    }
}

impl fmt::Display for PostTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PostTone::Formal => "Formal",
            PostTone::Friendly => "Friendly",
            PostTone::Authoritative => "Authoritative",
        })
    }
}

/// Number of slides in a presentation outline, always within
/// `MIN_SLIDES..=MAX_SLIDES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlideCount(u8);

impl SlideCount {
    pub fn new(count: u8) -> Result<Self> {
        if (MIN_SLIDES..=MAX_SLIDES).contains(&count) {
            Ok(Self(count))
        } else {
            Err(CreatorError::InvalidInput(format!(
                "slide count must be between {} and {}, got {}",
                MIN_SLIDES, MAX_SLIDES, count
            )))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for SlideCount {
    fn default() -> Self {
        Self(DEFAULT_SLIDES)
    }
}

impl TryFrom<u8> for SlideCount {
    type Error = CreatorError;

    fn try_from(value: u8) -> Result<Self> {
        SlideCount::new(value)
    }
}

impl From<SlideCount> for u8 {
    fn from(count: SlideCount) -> Self {
        count.0
    }
}

impl fmt::Display for SlideCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YouTubeInput {
    pub topic: String,
    #[serde(default)]
    pub format: VideoFormat,
    #[serde(default)]
    pub tone: VideoTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkedInInput {
    pub idea: String,
    #[serde(default)]
    pub audience: PostAudience,
    #[serde(default)]
    pub tone: PostTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResumeInput {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresentationInput {
    pub topic: String,
    #[serde(default)]
    pub slides: SlideCount,
    pub audience: String,
}

/// User input for one generation, shaped by the tool it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "input", rename_all = "lowercase")]
pub enum ToolInput {
    YouTube(YouTubeInput),
    LinkedIn(LinkedInInput),
    Resume(ResumeInput),
    Presentation(PresentationInput),
}

impl ToolInput {
    pub fn tool_id(&self) -> ToolId {
        match self {
            ToolInput::YouTube(_) => ToolId::YouTube,
            ToolInput::LinkedIn(_) => ToolId::LinkedIn,
            ToolInput::Resume(_) => ToolId::Resume,
            ToolInput::Presentation(_) => ToolId::Presentation,
        }
    }

    /// Fails with `ToolMismatch` unless this input was shaped for `tool`.
    pub fn ensure_tool(&self, tool: ToolId) -> Result<()> {
        let actual = self.tool_id();
        if actual == tool {
            Ok(())
        } else {
            Err(CreatorError::ToolMismatch {
                expected: tool,
                actual,
            })
        }
    }

    /// Parse a `{"tool": ..., "input": {...}}` request. Fields belonging to a
    /// different tool are rejected rather than ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CreatorError::InvalidInput(e.to_string()))
    }
}
