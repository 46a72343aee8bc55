//! LinkedIn share message for a completed quiz.

use reqwest::Url;
use serde::Serialize;

use crate::domain::foundation::ValidationError;
use crate::domain::profiling::Profile;

const LINKEDIN_SHARE_URL: &str = "https://www.linkedin.com/feed/?shareActive=true";

/// Pre-filled post text and the LinkedIn URL that opens it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    pub text: String,
    pub url: String,
}

impl ShareMessage {
    /// Builds the share post for `profile`, inviting readers to `site_url`.
    pub fn linkedin(profile: Profile, site_url: &str) -> Result<Self, ValidationError> {
        let text = format!(
            "I just completed an AI Sense Check — a quick reflection on how I interpret AI decisions in real work situations.\n\
             \n\
             My result: {}\n\
             \n\
             It's a good reminder that AI success depends on people and context, not just features.\n\
             \n\
             Curious about yours? Try it here: {}\n\
             \n\
             Drop your profile below.",
            profile.display_name(),
            site_url
        );

        let url = Url::parse_with_params(LINKEDIN_SHARE_URL, &[("text", text.as_str())])
            .map_err(|e| ValidationError::invalid_format("share_url", e.to_string()))?;

        Ok(Self {
            text,
            url: url.to_string(),
        })
    }
}
