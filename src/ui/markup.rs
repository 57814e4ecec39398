use colored::*;
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#{1,6}\s+\S").expect("heading pattern is valid"));

static SLIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*\*{0,2}slide\s+\d+\b").expect("slide pattern is valid")
});

// A whole line in capitals, e.g. "STRENGTHS" or "**CTA:**".
static SECTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\*{0,2}[A-Z][A-Z0-9 &/-]*[A-Z0-9]\*{0,2}:?\*{0,2}\s*$")
        .expect("section pattern is valid")
});

// A capitalised label followed by text on the same line, e.g. "HOOK: Did you know...".
static SECTION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\*{0,2}[A-Z][A-Z0-9 &/-]*[A-Z0-9]:\*{0,2}\s+\S")
        .expect("section prefix pattern is valid")
});

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([-*•]|\d+[.)])\s+").expect("bullet pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Heading,
    Section,
    Slide,
    Bullet,
    Text,
}

pub fn classify_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Blank
    } else if HEADING.is_match(line) {
        LineKind::Heading
    } else if SLIDE.is_match(line) {
        LineKind::Slide
    } else if SECTION_LINE.is_match(line) || SECTION_PREFIX.is_match(line) {
        LineKind::Section
    } else if BULLET.is_match(line) {
        LineKind::Bullet
    } else {
        LineKind::Text
    }
}

/// Colour one line of generated text. The characters themselves are kept.
pub fn render_line(line: &str, accent: Color) -> String {
    match classify_line(line) {
        LineKind::Blank | LineKind::Text => line.to_string(),
        LineKind::Heading | LineKind::Slide => line.color(accent).bold().to_string(),
        LineKind::Section => line.bold().to_string(),
        LineKind::Bullet => match BULLET.find(line) {
            Some(marker) => format!(
                "{}{}",
                line[..marker.end()].color(accent),
                &line[marker.end()..]
            ),
            None => line.to_string(),
        },
    }
}

pub fn render(text: &str, accent: Color) -> String {
    text.lines()
        .map(|line| render_line(line, accent))
        .collect::<Vec<_>>()
        .join("\n")
}
