use findn::profile::{Platform, ProfileData};
use findn::relay::{PageScraper, RelayMessage};

const LINKEDIN_HTML: &str = include_str!("fixtures/linkedin_profile.html");
const INSTAGRAM_HTML: &str = include_str!("fixtures/instagram_profile.html");

#[test]
fn test_scrapes_linkedin_profile() {
    let page = PageScraper::new("https://www.linkedin.com/in/ada-lovelace/", LINKEDIN_HTML);
    assert!(page.is_profile_page());

    let profile = page.scrape();
    assert_eq!(
        profile,
        ProfileData {
            platform: Platform::Linkedin,
            name: "Ada Lovelace".to_string(),
            headline: "Principal Engineer building analytical engines".to_string(),
            job_title: "Principal Engineer".to_string(),
            company: "Analytical Engines Ltd".to_string(),
            location: "London, United Kingdom".to_string(),
            interests: "Mathematics, Algorithms, Poetry, Mechanics, Translation".to_string(),
            recent_activity: "Published notes on the Analytical Engine".to_string(),
        }
    );
}

#[test]
fn test_scrapes_instagram_profile() {
    let page = PageScraper::new("https://www.instagram.com/grace.hopper/", INSTAGRAM_HTML);
    assert!(page.is_profile_page());

    let profile = page.scrape();
    assert_eq!(profile.platform, Platform::Instagram);
    assert_eq!(profile.name, "grace.hopper");
    assert_eq!(
        profile.headline,
        "Senior Engineer at Navy Labs | compilers and coffee"
    );
    assert_eq!(profile.job_title, "Senior Engineer");
    assert_eq!(profile.company, "Navy Labs");
    assert_eq!(profile.location, "");
    assert_eq!(
        profile.interests,
        "120 posts • 4,500 followers • 300 following"
    );
    assert_eq!(
        profile.recent_activity,
        "Photo shared by Grace: a moth taped into the logbook, the first actual case of a, \
         Nanosecond wires, COBOL reunion"
    );
}

#[test]
fn test_scraped_profile_serializes_every_field() {
    let page = PageScraper::new("https://www.linkedin.com/in/nobody/", "<html></html>");
    let value = serde_json::to_value(page.scrape()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "platform": "linkedin",
            "name": "",
            "headline": "",
            "jobTitle": "",
            "company": "",
            "location": "",
            "interests": "",
            "recentActivity": ""
        })
    );
}

#[test]
fn test_unsupported_site_yields_empty_profile() {
    let page = PageScraper::new("https://example.org/in/ada", LINKEDIN_HTML);

    assert!(!page.is_profile_page());
    assert_eq!(page.page_loaded_message(), None);
    assert_eq!(page.scrape(), ProfileData::unknown());
}

#[test]
fn test_profile_page_announces_itself() {
    let page = PageScraper::new("https://www.linkedin.com/in/ada-lovelace/", LINKEDIN_HTML);
    let message = page.page_loaded_message().unwrap();

    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        serde_json::json!({"action": "pageLoaded", "platform": "linkedin", "isProfile": true})
    );
    assert!(matches!(message, RelayMessage::PageLoaded { .. }));
}
