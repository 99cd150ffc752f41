//! Member domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A singer featured in the members showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub voice_part: String,
    pub image_url: String,
    pub years_with_group: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimony: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Colour key for the member's voice part badge.
    pub fn voice_part_key(&self) -> VoicePart {
        VoicePart::from_label(&self.voice_part)
    }

    /// Avatar to render, given whether the portrait failed to load.
    pub fn avatar(&self, image_failed: bool) -> MemberAvatar {
        if image_failed || self.image_url.trim().is_empty() {
            MemberAvatar::Initials(initials(&self.name))
        } else {
            MemberAvatar::Image(self.image_url.clone())
        }
    }
}

/// Voice parts with a dedicated badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoicePart {
    Lead,
    Soprano,
    Tenor,
    Baritone,
    Bass,
    Other,
}

impl VoicePart {
    /// Maps a free-text voice part to its colour key. Not enforced on input.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "lead" => VoicePart::Lead,
            "soprano" => VoicePart::Soprano,
            "tenor" => VoicePart::Tenor,
            "baritone" => VoicePart::Baritone,
            "bass" => VoicePart::Bass,
            _ => VoicePart::Other,
        }
    }
}

/// What the showcase card renders in the portrait slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberAvatar {
    Image(String),
    Initials(String),
}

/// First letter of each word in a name: `"Ken Ogetii"` -> `"KO"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Request payload for adding a member.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    pub voice_part: String,
    pub image_url: String,
    #[validate(range(min = 0, message = "Years with group cannot be negative"))]
    pub years_with_group: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimony: Option<String>,
}

/// Response for listing members.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembersResponse {
    pub members: Vec<Member>,
    pub total: usize,
}
