// src/profile/bio.rs
//! Job title / company heuristic for free-text bios.
//!
//! Only a closed set of English title words is recognised, joined to the
//! company by `at` or `@`. Bios phrased any other way yield nothing.

use regex::Regex;
use std::sync::LazyLock;

const TITLE_KEYWORDS: &str = "CEO|CTO|Manager|Engineer|Designer|Developer|Director|Founder|\
Co-founder|VP|President|Analyst|Consultant|Specialist|Coordinator|Lead|Senior|Junior|Associate";

static JOB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)((?:(?:{kw})\s+)*(?:{kw}))\s+(?:at|@)\s+([^|\n]+)",
        kw = TITLE_KEYWORDS
    );
    Regex::new(&pattern).expect("valid job title regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobMatch {
    pub job_title: String,
    pub company: String,
}

/// Find the first "<title> at <company>" phrase in `bio`.
pub fn extract_job(bio: &str) -> Option<JobMatch> {
    let captures = JOB_PATTERN.captures(bio)?;
    let job_title = captures.get(1)?.as_str().trim().to_string();
    let company = captures.get(2)?.as_str().trim().to_string();

    if company.is_empty() {
        return None;
    }

    Some(JobMatch { job_title, company })
}
