use clap::Parser;
use creatorai::cli::{resolve_resume_content, Args, Command};
use creatorai::tools::{
    PostAudience, PostTone, SlideCount, ToolId, ToolInput, VideoFormat, VideoTone,
};
use creatorai::prompt::build_instruction;
use creatorai::CreatorError;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_youtube_defaults_follow_form() {
    let args = parse(&["creator", "youtube", "--topic", "Rust ownership"]);
    let input = args.command.tool_input().unwrap().unwrap();

    match input {
        ToolInput::YouTube(yt) => {
            assert_eq!(yt.topic, "Rust ownership");
            assert_eq!(yt.format, VideoFormat::Short);
            assert_eq!(yt.tone, VideoTone::Educational);
        }
        other => panic!("unexpected input: {:?}", other),
    }
}

#[test]
fn test_linkedin_with_options() {
    let args = parse(&[
        "creator",
        "linkedin",
        "--idea",
        "Got promoted",
        "--audience",
        "professionals",
        "--tone",
        "authoritative",
    ]);
    let input = args.command.tool_input().unwrap().unwrap();

    match input {
        ToolInput::LinkedIn(li) => {
            assert_eq!(li.idea, "Got promoted");
            assert_eq!(li.audience, PostAudience::Professionals);
            assert_eq!(li.tone, PostTone::Authoritative);
        }
        other => panic!("unexpected input: {:?}", other),
    }
}

#[test]
fn test_unknown_enum_value_rejected() {
    let result = Args::try_parse_from(["creator", "youtube", "--topic", "x", "--tone", "angry"]);
    assert!(result.is_err());
}

#[test]
fn test_presentation_slides_default_and_bounds() {
    let args = parse(&[
        "creator",
        "presentation",
        "--topic",
        "AI in Modern Healthcare",
        "--audience",
        "Investors",
    ]);
    match args.command.tool_input().unwrap().unwrap() {
        ToolInput::Presentation(p) => {
            assert_eq!(p.slides, SlideCount::default());
            assert_eq!(p.audience, "Investors");
        }
        other => panic!("unexpected input: {:?}", other),
    }

    for bad in ["2", "21", "-1"] {
        let result = Args::try_parse_from([
            "creator",
            "presentation",
            "--topic",
            "t",
            "--audience",
            "a",
            "--slides",
            bad,
        ]);
        assert!(result.is_err(), "slides={} should be rejected", bad);
    }
}

#[test]
fn test_list_has_no_input() {
    let args = parse(&["creator", "list"]);
    assert!(matches!(args.command, Command::List));
    assert!(args.command.tool_input().unwrap().is_none());
}

#[test]
fn test_global_flags_after_subcommand() {
    let args = parse(&["creator", "resume", "--content", "cv", "--dry-run", "--plain"]);
    assert!(args.dry_run);
    assert!(args.plain);
}

#[test]
fn test_resume_content_and_file_conflict() {
    let result = Args::try_parse_from([
        "creator", "resume", "--content", "a", "--file", "cv.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_resolve_resume_content_sources() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cv.txt");
    fs::write(&path, "From file").unwrap();

    let inline = resolve_resume_content(Some("Inline"), Some(&path), Cursor::new("stdin")).unwrap();
    assert_eq!(inline, "Inline");

    let from_file = resolve_resume_content(None, Some(&path), Cursor::new("stdin")).unwrap();
    assert_eq!(from_file, "From file");

    let from_reader = resolve_resume_content(None, None, Cursor::new("From stdin")).unwrap();
    assert_eq!(from_reader, "From stdin");

    let empty = resolve_resume_content(None, None, Cursor::new("")).unwrap();
    assert_eq!(empty, "");
}

#[test]
fn test_resolve_resume_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.txt");

    let err = resolve_resume_content(None, Some(&missing), Cursor::new("")).unwrap_err();
    assert!(matches!(err, CreatorError::Io(_)));
}

#[test]
fn test_run_reads_request_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("request.json");
    fs::write(
        &path,
        r#"{"tool": "presentation", "input": {"topic": "Q3 results", "slides": 8, "audience": "Board"}}"#,
    )
    .unwrap();

    let args = parse(&["creator", "run", "--request", path.to_str().unwrap()]);
    let input = args.command.tool_input().unwrap().unwrap();
    assert_eq!(input.tool_id(), ToolId::Presentation);
}

#[test]
fn test_dry_run_builds_instruction_without_config() {
    let args = parse(&[
        "creator",
        "--dry-run",
        "presentation",
        "--topic",
        "AI in Modern Healthcare",
        "--audience",
        "Investors",
    ]);

    let instruction = args.dry_run_instruction().unwrap().unwrap();
    let input = args.command.tool_input().unwrap().unwrap();
    assert_eq!(instruction, build_instruction(&input));
    assert!(instruction.contains("- Audience: Investors"));
}

#[test]
fn test_dry_run_instruction_absent_without_flag_or_input() {
    let args = parse(&["creator", "youtube", "--topic", "x"]);
    assert!(args.dry_run_instruction().unwrap().is_none());

    let args = parse(&["creator", "--dry-run", "list"]);
    assert!(args.dry_run_instruction().unwrap().is_none());
}
