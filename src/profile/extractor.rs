// src/profile/extractor.rs
use super::bio::extract_job;
use super::types::{Platform, ProfileData, ProfileField};
use crate::utils::{dedupe_preserving_order, truncate_chars};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Where a matched element's text comes from.
#[derive(Debug, Clone, Copy)]
pub enum TextSource {
    Text,
    Attr(&'static str),
}

/// One ranked candidate for a field.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    pub selector: &'static str,
    pub source: TextSource,
}

impl Matcher {
    pub const fn text(selector: &'static str) -> Self {
        Self {
            selector,
            source: TextSource::Text,
        }
    }

    pub const fn attr(selector: &'static str, name: &'static str) -> Self {
        Self {
            selector,
            source: TextSource::Attr(name),
        }
    }

    fn selector(&self) -> Result<Selector, ExtractError> {
        Selector::parse(self.selector).map_err(|e| ExtractError::InvalidSelector {
            selector: self.selector.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn read(&self, element: ElementRef<'_>) -> String {
        match self.source {
            TextSource::Text => element.text().collect::<String>().trim().to_string(),
            TextSource::Attr(name) => element
                .value()
                .attr(name)
                .map(|value| value.trim().to_string())
                .unwrap_or_default(),
        }
    }

    /// Text of the first element this matcher selects.
    fn first(&self, document: &Html) -> Result<String, ExtractError> {
        let selector = self.selector()?;
        Ok(document
            .select(&selector)
            .next()
            .map(|element| self.read(element))
            .unwrap_or_default())
    }

    /// Non-empty text of every element this matcher selects.
    fn all(&self, document: &Html) -> Result<Vec<String>, ExtractError> {
        let selector = self.selector()?;
        Ok(document
            .select(&selector)
            .map(|element| self.read(element))
            .filter(|text| !text.is_empty())
            .collect())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Collect {
    /// First matcher with non-empty text wins.
    First,
    /// Text from every match across all matchers.
    All {
        cap: usize,
        truncate: Option<usize>,
        delimiter: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Found(String),
    Empty,
}

impl FieldOutcome {
    fn from_text(text: String) -> Self {
        if text.is_empty() {
            FieldOutcome::Empty
        } else {
            FieldOutcome::Found(text)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: ProfileField,
    pub matchers: &'static [Matcher],
    pub collect: Collect,
}

impl FieldRule {
    pub fn apply(&self, document: &Html) -> Result<FieldOutcome, ExtractError> {
        match self.collect {
            Collect::First => {
                for matcher in self.matchers {
                    let text = matcher.first(document)?;
                    if !text.is_empty() {
                        return Ok(FieldOutcome::Found(text));
                    }
                }
                Ok(FieldOutcome::Empty)
            }
            Collect::All {
                cap,
                truncate,
                delimiter,
            } => {
                let mut collected = Vec::new();
                for matcher in self.matchers {
                    collected.extend(matcher.all(document)?);
                }

                let collected = collected.into_iter().map(|text| match truncate {
                    Some(max) => truncate_chars(&text, max),
                    None => text,
                });

                let mut items = dedupe_preserving_order(collected);
                items.truncate(cap);

                Ok(FieldOutcome::from_text(items.join(delimiter)))
            }
        }
    }
}

const SKILLS_CAP: usize = 5;
const POSTS_CAP: usize = 3;
const POST_TEXT_MAX_CHARS: usize = 80;

pub const LINKEDIN_RULES: &[FieldRule] = &[
    FieldRule {
        field: ProfileField::Name,
        matchers: &[
            Matcher::text("h1.text-heading-xlarge"),
            Matcher::text(".pv-text-details__left-panel h1"),
            Matcher::text(".ph5 h1"),
            Matcher::text("[data-anonymize='person-name']"),
        ],
        collect: Collect::First,
    },
    FieldRule {
        field: ProfileField::Headline,
        matchers: &[
            Matcher::text(".text-body-medium.break-words"),
            Matcher::text(".pv-text-details__left-panel .text-body-medium"),
            Matcher::text(".ph5 .text-body-medium"),
        ],
        collect: Collect::First,
    },
    FieldRule {
        field: ProfileField::JobTitle,
        matchers: &[
            Matcher::text(".pv-text-details__left-panel .pvs-list__item--line-separated .mr1.t-bold span[aria-hidden='true']"),
            Matcher::text(".experience-section .pv-entity__summary-info h3"),
            Matcher::text(".pv-top-card .pv-top-card__list-bullet-entity"),
        ],
        collect: Collect::First,
    },
    FieldRule {
        field: ProfileField::Company,
        matchers: &[
            Matcher::text(".pv-text-details__left-panel .pvs-list__item--line-separated .t-14.t-normal span[aria-hidden='true']"),
            Matcher::text(".experience-section .pv-entity__secondary-title"),
            Matcher::text(".pv-top-card .pv-top-card__list-bullet-entity-item"),
        ],
        collect: Collect::First,
    },
    FieldRule {
        field: ProfileField::Location,
        matchers: &[
            Matcher::text(".pv-text-details__left-panel .text-body-small.inline.t-black--light.break-words"),
            Matcher::text(".pv-top-card__list-bullet-entity .t-16.t-black.t-normal"),
        ],
        collect: Collect::First,
    },
    FieldRule {
        field: ProfileField::Interests,
        matchers: &[Matcher::text(
            ".pvs-list__item--line-separated .mr1.hoverable-link-text.t-bold span[aria-hidden='true']",
        )],
        collect: Collect::All {
            cap: SKILLS_CAP,
            truncate: None,
            delimiter: ", ",
        },
    },
    FieldRule {
        field: ProfileField::RecentActivity,
        matchers: &[
            Matcher::text(".pv-recent-activity-section .pv-entity__summary-info p"),
            Matcher::text(".feed-shared-text .break-words span[dir='ltr']"),
        ],
        collect: Collect::First,
    },
];

/// Job title and company are derived from the bio after these run.
pub const INSTAGRAM_RULES: &[FieldRule] = &[
    FieldRule {
        field: ProfileField::Name,
        matchers: &[
            Matcher::text("header section h2"),
            Matcher::text("h1._7UhW9"),
            Matcher::text("h2._7UhW9"),
        ],
        collect: Collect::First,
    },
    FieldRule {
        field: ProfileField::Headline,
        matchers: &[
            Matcher::text("header section div.-vDIg span"),
            Matcher::text("div._aacl._aaco._aacw._aacx._aad7._aade"),
        ],
        collect: Collect::First,
    },
    FieldRule {
        field: ProfileField::Interests,
        matchers: &[
            Matcher::text("header section ul li span"),
            Matcher::text("header section ul li a span"),
        ],
        collect: Collect::All {
            cap: SKILLS_CAP,
            truncate: None,
            delimiter: " • ",
        },
    },
    FieldRule {
        field: ProfileField::RecentActivity,
        matchers: &[
            Matcher::attr("article div img[alt]", "alt"),
            Matcher::attr("div._aagu img[alt]", "alt"),
        ],
        collect: Collect::All {
            cap: POSTS_CAP,
            truncate: Some(POST_TEXT_MAX_CHARS),
            delimiter: ", ",
        },
    },
];

/// Turns a parsed profile page into [`ProfileData`].
pub struct ProfileExtractor {
    linkedin: &'static [FieldRule],
    instagram: &'static [FieldRule],
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileExtractor {
    pub fn new() -> Self {
        Self {
            linkedin: LINKEDIN_RULES,
            instagram: INSTAGRAM_RULES,
        }
    }

    pub fn with_rules(linkedin: &'static [FieldRule], instagram: &'static [FieldRule]) -> Self {
        Self {
            linkedin,
            instagram,
        }
    }

    pub fn extract_html(&self, html: &str, platform: Platform) -> ProfileData {
        let document = Html::parse_document(html);
        self.extract(&document, platform)
    }

    pub fn extract(&self, document: &Html, platform: Platform) -> ProfileData {
        let rules = match platform {
            Platform::Linkedin => self.linkedin,
            Platform::Instagram => self.instagram,
            Platform::Unknown => {
                info!("Skipping extraction for unsupported platform");
                return ProfileData::unknown();
            }
        };

        let mut profile = ProfileData::new(platform);

        for rule in rules {
            match rule.apply(document) {
                Ok(FieldOutcome::Found(text)) => profile.set_field(rule.field, text),
                Ok(FieldOutcome::Empty) => {
                    debug!("No match for {} on {}", rule.field.label(), platform)
                }
                Err(e) => warn!(
                    "Failed to extract {} on {}: {}",
                    rule.field.label(),
                    platform,
                    e
                ),
            }
        }

        if platform == Platform::Instagram && !profile.headline.is_empty() {
            if let Some(job) = extract_job(&profile.headline) {
                profile.job_title = job.job_title;
                profile.company = job.company;
            }
        }

        info!(
            "Extracted {} profile: name='{}', job='{}' at '{}'",
            platform, profile.name, profile.job_title, profile.company
        );

        profile
    }
}
