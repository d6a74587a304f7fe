use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{VoteDirection, VoteTally};

/// Tags shown on a card before collapsing into a "+N more" overflow badge.
pub const VISIBLE_TAG_LIMIT: usize = 3;

/// Submission-time cap on the number of tags per idea.
pub const MAX_TAGS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaAuthor {
    pub name: String,
    pub initials: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author: IdeaAuthor,
    pub tags: Vec<String>,
    pub votes: VoteTally,
    pub comments: u32,
    pub views: u32,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    pub fn visible_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(VISIBLE_TAG_LIMIT)]
    }

    pub fn hidden_tag_count(&self) -> usize {
        self.tags.len().saturating_sub(VISIBLE_TAG_LIMIT)
    }
}

// Create idea request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIdeaRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = validate_tags))]
    pub tags: Vec<String>,
}

fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS {
        return Err(tag_error("too_many_tags", "At most 5 tags are allowed"));
    }
    for (i, tag) in tags.iter().enumerate() {
        if tag.trim().is_empty() || tag.len() > 30 {
            return Err(tag_error("invalid_tag", "Tags must be 1-30 non-blank characters"));
        }
        if tags[..i].contains(tag) {
            return Err(tag_error("duplicate_tag", "Tags must be unique"));
        }
    }
    Ok(())
}

fn tag_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

// Idea response with display-ready vote and tag info
#[derive(Debug, Serialize)]
pub struct IdeaResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author: IdeaAuthor,
    pub tags: Vec<String>,
    pub visible_tags: Vec<String>,
    pub hidden_tag_count: usize,
    pub upvotes: u32,
    pub downvotes: u32,
    pub user_vote: Option<VoteDirection>,
    pub net_votes: i64,
    pub comments: u32,
    pub views: u32,
    pub created_at: DateTime<Utc>,
}

impl From<Idea> for IdeaResponse {
    fn from(idea: Idea) -> Self {
        let visible_tags = idea.visible_tags().to_vec();
        let hidden_tag_count = idea.hidden_tag_count();
        Self {
            id: idea.id,
            title: idea.title,
            description: idea.description,
            author: idea.author,
            visible_tags,
            hidden_tag_count,
            tags: idea.tags,
            upvotes: idea.votes.upvotes,
            downvotes: idea.votes.downvotes,
            user_vote: idea.votes.user_vote,
            net_votes: idea.votes.net(),
            comments: idea.comments,
            views: idea.views,
            created_at: idea.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea_with_tags(tags: &[&str]) -> Idea {
        Idea {
            id: Uuid::new_v4(),
            title: "Test".to_string(),
            description: "Test".to_string(),
            author: IdeaAuthor {
                name: "Test User".to_string(),
                initials: "TU".to_string(),
                avatar_url: None,
            },
            tags: tags.iter().map(|t| t.to_string()).collect(),
            votes: VoteTally::default(),
            comments: 0,
            views: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn tags_collapse_past_the_visible_limit() {
        let idea = idea_with_tags(&["AI", "Education", "Web3", "IoT", "Energy"]);
        assert_eq!(idea.visible_tags(), ["AI", "Education", "Web3"]);
        assert_eq!(idea.hidden_tag_count(), 2);
    }

    #[test]
    fn short_tag_lists_have_no_overflow() {
        let idea = idea_with_tags(&["AI"]);
        assert_eq!(idea.visible_tags(), ["AI"]);
        assert_eq!(idea.hidden_tag_count(), 0);
    }

    #[test]
    fn create_request_rejects_more_than_five_tags() {
        let request = CreateIdeaRequest {
            title: "A title".to_string(),
            description: "A description".to_string(),
            tags: ["a", "b", "c", "d", "e", "f"].map(String::from).to_vec(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_request_rejects_duplicate_and_blank_tags() {
        let duplicate = CreateIdeaRequest {
            title: "A title".to_string(),
            description: "A description".to_string(),
            tags: vec!["AI".to_string(), "AI".to_string()],
        };
        assert!(duplicate.validate().is_err());

        let blank = CreateIdeaRequest {
            title: "A title".to_string(),
            description: "A description".to_string(),
            tags: vec!["   ".to_string()],
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn create_request_accepts_a_full_valid_form() {
        let request = CreateIdeaRequest {
            title: "Smart Compost Router".to_string(),
            description: "Routes food waste to the nearest community compost hub.".to_string(),
            tags: vec!["Sustainability".to_string(), "IoT".to_string()],
        };
        assert!(request.validate().is_ok());
    }
}
