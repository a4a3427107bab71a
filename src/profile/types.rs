// src/profile/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Instagram,
    #[default]
    Unknown,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Unknown => "unknown",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Unknown)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields scraped from a single profile page.
///
/// Every field is always present; a field the page did not yield is an empty
/// string. Missing keys deserialize to empty strings as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub platform: Platform,
    pub name: String,
    pub headline: String,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub interests: String,
    pub recent_activity: String,
}

impl ProfileData {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// The record returned for pages on unsupported sites.
    pub fn unknown() -> Self {
        Self::new(Platform::Unknown)
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Headline => &self.headline,
            ProfileField::JobTitle => &self.job_title,
            ProfileField::Company => &self.company,
            ProfileField::Location => &self.location,
            ProfileField::Interests => &self.interests,
            ProfileField::RecentActivity => &self.recent_activity,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Headline => &mut self.headline,
            ProfileField::JobTitle => &mut self.job_title,
            ProfileField::Company => &mut self.company,
            ProfileField::Location => &mut self.location,
            ProfileField::Interests => &mut self.interests,
            ProfileField::RecentActivity => &mut self.recent_activity,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Headline,
    JobTitle,
    Company,
    Location,
    Interests,
    RecentActivity,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::Headline,
        ProfileField::JobTitle,
        ProfileField::Company,
        ProfileField::Location,
        ProfileField::Interests,
        ProfileField::RecentActivity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Headline => "headline",
            ProfileField::JobTitle => "jobTitle",
            ProfileField::Company => "company",
            ProfileField::Location => "location",
            ProfileField::Interests => "interests",
            ProfileField::RecentActivity => "recentActivity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_all_fields_in_camel_case() {
        let value = serde_json::to_value(ProfileData::unknown()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 8);
        assert_eq!(object["platform"], "unknown");
        for field in ProfileField::ALL {
            assert_eq!(object[field.label()], "");
        }
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let profile: ProfileData =
            serde_json::from_str(r#"{"platform": "instagram", "name": "ada"}"#).unwrap();

        assert_eq!(profile.platform, Platform::Instagram);
        assert_eq!(profile.name, "ada");
        assert_eq!(profile.job_title, "");
        assert_eq!(profile.recent_activity, "");
    }

    #[test]
    fn test_set_field_targets_matching_slot() {
        let mut profile = ProfileData::new(Platform::Linkedin);
        profile.set_field(ProfileField::Company, "Acme".to_string());

        assert_eq!(profile.company, "Acme");
        assert_eq!(profile.field(ProfileField::Company), "Acme");
        assert_eq!(profile.field(ProfileField::Name), "");
    }
}
