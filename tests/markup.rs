use colored::Color;
use creatorai::ui::{classify_line, render, render_line, LineKind};

#[test]
fn test_classify_section_labels() {
    assert_eq!(classify_line("HOOK:"), LineKind::Section);
    assert_eq!(classify_line("CTA:"), LineKind::Section);
    assert_eq!(classify_line("ATS IMPROVEMENTS"), LineKind::Section);
    assert_eq!(classify_line("**STRENGTHS**"), LineKind::Section);
    assert_eq!(classify_line("HOOK: Did you know 90% of people quit?"), LineKind::Section);
}

#[test]
fn test_classify_slides_and_headings() {
    assert_eq!(classify_line("Slide 1: The Problem"), LineKind::Slide);
    assert_eq!(classify_line("**Slide 12** - Closing"), LineKind::Slide);
    assert_eq!(classify_line("## Slide 2"), LineKind::Heading);
    assert_eq!(classify_line("# Overview"), LineKind::Heading);
}

#[test]
fn test_classify_bullets_and_text() {
    assert_eq!(classify_line("- Strong Rust background"), LineKind::Bullet);
    assert_eq!(classify_line("  * nested point"), LineKind::Bullet);
    assert_eq!(classify_line("3. Third step"), LineKind::Bullet);
    assert_eq!(classify_line("AI is changing hospitals."), LineKind::Text);
    assert_eq!(classify_line("#hiring #rust"), LineKind::Text);
    assert_eq!(classify_line("   "), LineKind::Blank);
}

#[test]
fn test_render_without_colour_keeps_text() {
    colored::control::set_override(false);

    let text = "HOOK:\nStop.\n\n- one\nSlide 1: Intro";
    assert_eq!(render(text, Color::Red), text);
    assert_eq!(render_line("- one", Color::Blue), "- one");
}
