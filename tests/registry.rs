use creatorai::tools::{self, ToolId};
use creatorai::CreatorError;

#[test]
fn test_all_tools_in_display_order() {
    let ids: Vec<ToolId> = tools::all().iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        vec![
            ToolId::YouTube,
            ToolId::LinkedIn,
            ToolId::Resume,
            ToolId::Presentation
        ]
    );
}

#[test]
fn test_find_returns_matching_descriptor() {
    for tool in tools::all() {
        assert_eq!(tools::find(tool.id), tool);
    }
    assert_eq!(tools::find(ToolId::Resume).name, "AI Resume Reviewer");
    assert_eq!(tools::find(ToolId::YouTube).icon, "🎥");
}

#[test]
fn test_find_by_key_known() {
    let tool = tools::find_by_key("presentation").unwrap();
    assert_eq!(tool.id, ToolId::Presentation);
    assert_eq!(tool.name, "Presentation Builder");
    assert_eq!(tools::find_by_key("linkedin").unwrap().id, ToolId::LinkedIn);
}

#[test]
fn test_find_by_key_requires_exact_identifier() {
    assert!(tools::find_by_key("LinkedIn").is_none());
    assert!(tools::find_by_key(" linkedin ").is_none());
    assert!(" linkedin ".parse::<ToolId>().is_err());
    assert!("YOUTUBE".parse::<ToolId>().is_err());
}

#[test]
fn test_key_parsing_agrees_with_serde() {
    for tool in tools::all() {
        let parsed: ToolId = tool.id.key().parse().unwrap();
        let from_json: ToolId = serde_json::from_value(serde_json::json!(tool.id.key())).unwrap();
        assert_eq!(parsed, from_json);
    }
    assert!(serde_json::from_value::<ToolId>(serde_json::json!("LinkedIn")).is_err());
}

#[test]
fn test_find_by_key_unknown_is_absent() {
    assert!(tools::find_by_key("tiktok").is_none());
    assert!(tools::find_by_key("").is_none());
}

#[test]
fn test_tool_id_parse_and_display() {
    let id: ToolId = "youtube".parse().unwrap();
    assert_eq!(id, ToolId::YouTube);
    assert_eq!(id.to_string(), "youtube");

    let err = "podcast".parse::<ToolId>().unwrap_err();
    assert!(matches!(err, CreatorError::UnknownTool(ref s) if s == "podcast"));
}

#[test]
fn test_descriptors_have_metadata() {
    for tool in tools::all() {
        assert!(!tool.name.is_empty());
        assert!(!tool.description.is_empty());
        assert!(!tool.icon.is_empty());
        assert!(!tool.accent.is_empty());
    }
}
