use crate::{AnalysisReport, BasicReport, ExtendedReport, SchemaVersion};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to parse analysis: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of interpreting the endpoint's `content` field.
#[derive(Clone, Debug, PartialEq)]
pub enum Analysis {
    /// The model answered in prose; the string is shown verbatim.
    NotSnake(String),
    Report(AnalysisReport),
}

/// Whether the raw model reply looks like a structured snake report.
/// A brace-presence check, not a parse.
pub fn looks_like_snake_report(content: &str) -> bool {
    content.contains('{') && content.contains('}')
}

/// Drops a leading ```json / trailing ``` fence pair, if present.
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    match trimmed.strip_prefix("```json") {
        Some(body) => body.strip_suffix("```").unwrap_or(body).trim(),
        None => trimmed,
    }
}

/// Drops the `data:...;base64,` header from a data URI. Bare base64 input
/// passes through untouched.
pub fn strip_data_uri_prefix(image: &str) -> &str {
    image.split_once(',').map(|(_, data)| data).unwrap_or(image)
}

/// Interprets the endpoint's reply. Prose replies pass through verbatim;
/// structured replies are decoded into the deployment's schema. No field
/// validation happens beyond JSON syntax — absent fields come back as
/// defaults and the UI renders them defensively.
pub fn parse_analysis(
    content: &str,
    is_snake_image: bool,
    schema: SchemaVersion,
) -> Result<Analysis, ParseError> {
    if !is_snake_image {
        return Ok(Analysis::NotSnake(content.to_string()));
    }

    let body = strip_code_fence(content);
    let report = match schema {
        SchemaVersion::Basic => AnalysisReport::Basic(serde_json::from_str::<BasicReport>(body)?),
        SchemaVersion::Extended => {
            AnalysisReport::Extended(serde_json::from_str::<ExtendedReport>(body)?)
        }
    };
    Ok(Analysis::Report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;

    #[test]
    fn heuristic_rejects_prose() {
        assert!(!looks_like_snake_report("This does not appear to contain a snake."));
    }

    #[test]
    fn heuristic_accepts_braced_reply() {
        assert!(looks_like_snake_report(r#"{"species":"Boa constrictor"}"#));
    }

    #[test]
    fn strips_data_uri_header() {
        assert_eq!(strip_data_uri_prefix("data:image/png;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_uri_prefix("AAAA"), "AAAA");
    }

    #[test]
    fn prose_reply_passes_through_verbatim() {
        let message = "This does not appear to contain a snake.";
        let analysis = parse_analysis(message, false, SchemaVersion::Extended).unwrap();
        assert_eq!(analysis, Analysis::NotSnake(message.to_string()));
    }

    #[test]
    fn fenced_report_round_trips() {
        let content = "```json\n{\"species\": \"Vipera berus\", \"confidence\": 88, \"venomous\": true, \"features\": \"zigzag dorsal pattern\", \"safety_concerns\": \"medically significant bite\", \"habitat\": \"heathland\", \"first_aid_steps\": [\"keep calm\", \"immobilize the limb\"], \"interesting_facts\": [\"a\", \"b\", \"c\", \"d\", \"e\"], \"sources\": [{\"name\": \"WHO\", \"url\": \"https://example.org\"}]}\n```";

        let analysis = parse_analysis(content, true, SchemaVersion::Extended).unwrap();
        let Analysis::Report(AnalysisReport::Extended(report)) = analysis else {
            panic!("expected an extended report");
        };

        assert_eq!(report.species, "Vipera berus");
        assert_eq!(report.confidence, Some(88.0));
        assert!(report.venomous);
        assert_eq!(report.first_aid_steps, vec!["keep calm", "immobilize the limb"]);
        assert_eq!(report.interesting_facts.len(), 5);
        assert_eq!(
            report.sources,
            vec![Source {
                name: "WHO".into(),
                url: "https://example.org".into(),
            }]
        );
    }

    #[test]
    fn unfenced_report_parses_too() {
        let content = r#"{"species": "Pantherophis guttatus", "venomous": false, "features": "orange blotches", "safety_concerns": "none"}"#;
        let analysis = parse_analysis(content, true, SchemaVersion::Basic).unwrap();
        let Analysis::Report(AnalysisReport::Basic(report)) = analysis else {
            panic!("expected a basic report");
        };
        assert_eq!(report.species, "Pantherophis guttatus");
        assert!(!report.venomous);
        assert_eq!(report.confidence, None);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = parse_analysis("{oops", true, SchemaVersion::Extended);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn absent_fields_decode_to_defaults() {
        let analysis = parse_analysis(r#"{"species": "Naja naja"}"#, true, SchemaVersion::Extended).unwrap();
        let Analysis::Report(AnalysisReport::Extended(report)) = analysis else {
            panic!("expected an extended report");
        };
        assert_eq!(report.species, "Naja naja");
        assert_eq!(report.confidence, None);
        assert!(report.habitat.is_empty());
        assert!(report.first_aid_steps.is_empty());
        assert!(report.sources.is_empty());
    }

    #[test]
    fn parser_keeps_whatever_cardinality_arrives() {
        // The prompt asks for 5 facts and 3 sources but nothing enforces it.
        let content = r#"{"species": "x", "interesting_facts": ["only one"], "sources": []}"#;
        let analysis = parse_analysis(content, true, SchemaVersion::Extended).unwrap();
        let Analysis::Report(AnalysisReport::Extended(report)) = analysis else {
            panic!("expected an extended report");
        };
        assert_eq!(report.interesting_facts, vec!["only one"]);
        assert!(report.sources.is_empty());
    }

    #[test]
    fn fence_stripping_tolerates_missing_closer() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("{\"a\": 1}"), "{\"a\": 1}");
    }
}
