use crate::error::Result;
use crate::prompt::build_instruction;
use crate::tools::{
    LinkedInInput, PostAudience, PostTone, PresentationInput, ResumeInput, SlideCount, ToolInput,
    VideoFormat, VideoTone, YouTubeInput, DEFAULT_SLIDES, MAX_SLIDES, MIN_SLIDES,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "creator")]
#[command(
    about = "Generate video scripts, LinkedIn posts, resume reviews and slide outlines with an AI model",
    long_about = None
)]
pub struct Args {
    #[arg(long, global = true, help = "Model identifier to generate with")]
    pub model: Option<String>,

    #[arg(
        long = "api-endpoint",
        global = true,
        help = "Custom API base URL (e.g., http://localhost:11434/v1)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(short, long, global = true, help = "Print request diagnostics to stderr")]
    pub verbose: bool,

    #[arg(
        long = "dry-run",
        global = true,
        help = "Print the instruction that would be sent and exit"
    )]
    pub dry_run: bool,

    #[arg(long, global = true, help = "Print the generated text without colouring")]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available tools
    List,

    /// Write a hook, script and call to action for a video
    #[command(name = "youtube")]
    YouTube {
        #[arg(long, help = "Video topic")]
        topic: String,
        #[arg(long, value_enum, default_value_t = VideoFormat::Short)]
        format: VideoFormat,
        #[arg(long, value_enum, default_value_t = VideoTone::Educational)]
        tone: VideoTone,
    },

    /// Turn an experience into a LinkedIn post
    #[command(name = "linkedin")]
    LinkedIn {
        #[arg(long, help = "What happened and what the takeaway is")]
        idea: String,
        #[arg(long, value_enum, default_value_t = PostAudience::Students)]
        audience: PostAudience,
        #[arg(long, value_enum, default_value_t = PostTone::Formal)]
        tone: PostTone,
    },

    /// Review a plain-text resume (read from stdin when no source is given)
    Resume {
        #[arg(long, conflicts_with = "file", help = "Resume text")]
        content: Option<String>,
        #[arg(long, help = "Read the resume from a text file")]
        file: Option<PathBuf>,
    },

    /// Outline a slide deck
    Presentation {
        #[arg(long, help = "Presentation topic")]
        topic: String,
        #[arg(
            long,
            default_value_t = DEFAULT_SLIDES,
            value_parser = clap::value_parser!(u8).range(MIN_SLIDES as i64..=MAX_SLIDES as i64)
        )]
        slides: u8,
        #[arg(long, help = "Target audience, e.g. Investors")]
        audience: String,
    },

    /// Run a request saved as JSON: {"tool": "...", "input": {...}}
    Run {
        #[arg(long, help = "Path to the request file")]
        request: PathBuf,
    },
}

impl Command {
    /// Build the tool input this command describes. `List` has none.
    pub fn tool_input(&self) -> Result<Option<ToolInput>> {
        let input = match self {
            Command::List => return Ok(None),
            Command::YouTube {
                topic,
                format,
                tone,
            } => ToolInput::YouTube(YouTubeInput {
                topic: topic.clone(),
                format: *format,
                tone: *tone,
            }),
            Command::LinkedIn {
                idea,
                audience,
                tone,
            } => ToolInput::LinkedIn(LinkedInInput {
                idea: idea.clone(),
                audience: *audience,
                tone: *tone,
            }),
            Command::Resume { content, file } => ToolInput::Resume(ResumeInput {
                content: resolve_resume_content(content.as_deref(), file.as_deref(), io::stdin())?,
            }),
            Command::Presentation {
                topic,
                slides,
                audience,
            } => ToolInput::Presentation(PresentationInput {
                topic: topic.clone(),
                slides: SlideCount::new(*slides)?,
                audience: audience.clone(),
            }),
            Command::Run { request } => {
                let json = fs::read_to_string(request)?;
                ToolInput::from_json(&json)?
            }
        };

        Ok(Some(input))
    }
}

impl Args {
    /// The instruction `--dry-run` prints. Reads no config and needs no API
    /// key; `None` when not a dry run or the command has no tool input.
    pub fn dry_run_instruction(&self) -> Result<Option<String>> {
        if !self.dry_run {
            return Ok(None);
        }
        Ok(self
            .command
            .tool_input()?
            .map(|input| build_instruction(&input)))
    }
}

/// Inline text wins, then the file, then whatever `reader` yields.
pub fn resolve_resume_content<R: Read>(
    content: Option<&str>,
    file: Option<&Path>,
    mut reader: R,
) -> Result<String> {
    if let Some(content) = content {
        return Ok(content.to_string());
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(buffer)
}
