//! Instruction text sent to the generation service.
//!
//! Every instruction is the baseline rules, the selected tool's behaviour
//! block, a task line and the user's values, joined by blank lines.

use crate::tools::{
    LinkedInInput, PresentationInput, ResumeInput, ToolInput, YouTubeInput,
};

pub const BASELINE_RULES: &str = "You are a professional AI assistant designed to help creators, students, and professionals.
You must generate structured, clean, and practical outputs.

RULES:
- Be concise but complete
- Use headings and bullet points
- Do NOT include emojis
- Do NOT include explanations unless asked
- Tailor output strictly to the selected tool";

pub const YOUTUBE_RULES: &str = "TOOL: YouTube Script Generator
Output format:
HOOK:
SCRIPT:
CTA:";

pub const LINKEDIN_RULES: &str = "TOOL: LinkedIn Post Writer
- Professional tone
- Short paragraphs
- End with hashtags";

pub const RESUME_RULES: &str = "TOOL: Resume Reviewer
Sections:
STRENGTHS
GAPS
ATS IMPROVEMENTS
SUGGESTIONS";

pub const PRESENTATION_RULES: &str = "TOOL: Presentation Outline Builder
- Slide 1, Slide 2, etc.
- Talking points under each slide";

/// Assemble the full instruction for one generation. Same input, same bytes.
pub fn build_instruction(input: &ToolInput) -> String {
    let (rules, task, fields) = match input {
        ToolInput::YouTube(input) => youtube(input),
        ToolInput::LinkedIn(input) => linkedin(input),
        ToolInput::Resume(input) => resume(input),
        ToolInput::Presentation(input) => presentation(input),
    };

    format!(
        "{}\n\n{}\n\n{}\n\nINPUT:\n{}",
        BASELINE_RULES, rules, task, fields
    )
}

fn youtube(input: &YouTubeInput) -> (&'static str, String, String) {
    let task = format!(
        "Write a {} YouTube video script with a {} tone.",
        input.format.to_string().to_lowercase(),
        input.tone.to_string().to_lowercase()
    );
    let fields = format!(
        "- Topic: {}\n- Format: {}\n- Tone: {}",
        input.topic, input.format, input.tone
    );
    (YOUTUBE_RULES, task, fields)
}

fn linkedin(input: &LinkedInInput) -> (&'static str, String, String) {
    let task = format!(
        "Write a LinkedIn post for {} in a {} tone based on the experience below.",
        input.audience.to_string().to_lowercase(),
        input.tone.to_string().to_lowercase()
    );
    let fields = format!(
        "- Experience: {}\n- Audience: {}\n- Tone: {}",
        input.idea, input.audience, input.tone
    );
    (LINKEDIN_RULES, task, fields)
}

fn resume(input: &ResumeInput) -> (&'static str, String, String) {
    let task = "Review the resume below for strengths, skill gaps and ATS optimization.".to_string();
    // Fenced so an empty or multi-line resume still reads as one block.
    let fields = format!("Resume content:\n\"\"\"\n{}\n\"\"\"", input.content);
    (RESUME_RULES, task, fields)
}

fn presentation(input: &PresentationInput) -> (&'static str, String, String) {
    let task = format!(
        "Build a presentation outline with exactly {} slides, labelled Slide 1, Slide 2, and so on.",
        input.slides
    );
    let fields = format!(
        "- Topic: {}\n- Slides: {}\n- Audience: {}",
        input.topic, input.slides, input.audience
    );
    (PRESENTATION_RULES, task, fields)
}
