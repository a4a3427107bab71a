// src/analysis/prompt.rs
use crate::profile::ProfileData;
use crate::utils::or_placeholder;

pub const SYSTEM_PROMPT: &str = "You are an AI assistant that analyzes social media profiles and provides networking insights. Always respond with valid JSON in the exact format requested.";

const PLACEHOLDER: &str = "Not available";

const RESPONSE_SCHEMA: &str = r#"{
  "connections": [
    {"title": "Connection suggestion title", "subtitle": "Why this connection makes sense", "link": ""},
    {"title": "Another connection idea", "subtitle": "Reasoning for this connection", "link": ""},
    {"title": "Third connection suggestion", "subtitle": "Why they should connect", "link": ""}
  ],
  "communication_starters": [
    {"prompt": "Personalized conversation starter based on their profile"},
    {"prompt": "Another engaging way to start a conversation"},
    {"prompt": "Third conversation starter idea"}
  ],
  "interest_expansions": [
    {"topic": "Related interest or opportunity", "why": "Why this would be valuable for them"},
    {"topic": "Another expansion opportunity", "why": "How this connects to their current interests"},
    {"topic": "Third interest expansion", "why": "Why this would benefit their growth"}
  ]
}"#;

/// Render the user turn for a profile analysis request.
pub fn build_prompt(profile: &ProfileData) -> String {
    format!(
        r#"
Analyze this {platform} profile and provide networking insights:

Profile Data:
- Name: {name}
- Headline/Bio: {headline}
- Job Title: {job_title}
- Company: {company}
- Location: {location}
- Interests/Skills: {interests}
- Recent Activity: {recent_activity}

Please respond with ONLY valid JSON in this exact format:
{schema}
"#,
        platform = profile.platform,
        name = or_placeholder(&profile.name, PLACEHOLDER),
        headline = or_placeholder(&profile.headline, PLACEHOLDER),
        job_title = or_placeholder(&profile.job_title, PLACEHOLDER),
        company = or_placeholder(&profile.company, PLACEHOLDER),
        location = or_placeholder(&profile.location, PLACEHOLDER),
        interests = or_placeholder(&profile.interests, PLACEHOLDER),
        recent_activity = or_placeholder(&profile.recent_activity, PLACEHOLDER),
        schema = RESPONSE_SCHEMA,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisResult;
    use crate::profile::Platform;

    #[test]
    fn test_empty_fields_render_placeholder() {
        let prompt = build_prompt(&ProfileData::new(Platform::Instagram));

        assert!(prompt.contains("Analyze this instagram profile"));
        assert!(prompt.contains("- Name: Not available\n"));
        assert!(prompt.contains("- Recent Activity: Not available\n"));
        assert_eq!(prompt.matches("Not available").count(), 7);
    }

    #[test]
    fn test_filled_fields_render_verbatim() {
        let profile = ProfileData {
            platform: Platform::Linkedin,
            name: "Ada Lovelace".to_string(),
            job_title: "Engineer".to_string(),
            company: "Analytical Engines".to_string(),
            ..ProfileData::default()
        };
        let prompt = build_prompt(&profile);

        assert!(prompt.contains("- Name: Ada Lovelace\n"));
        assert!(prompt.contains("- Job Title: Engineer\n"));
        assert!(prompt.contains("- Company: Analytical Engines\n"));
        assert!(prompt.contains("- Location: Not available\n"));
    }

    #[test]
    fn test_is_deterministic() {
        let profile = ProfileData::new(Platform::Linkedin);
        assert_eq!(build_prompt(&profile), build_prompt(&profile));
    }

    #[test]
    fn test_embedded_schema_is_a_valid_result() {
        let parsed: AnalysisResult = serde_json::from_str(RESPONSE_SCHEMA).unwrap();
        assert_eq!(parsed.connections.len(), 3);
        assert_eq!(parsed.communication_starters.len(), 3);
        assert_eq!(parsed.interest_expansions.len(), 3);
    }
}
