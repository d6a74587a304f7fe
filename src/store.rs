use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Idea, IdeaAuthor, VoteDirection, VoteTally};

/// In-memory idea collection. Stands in for a durable backend: ideas live
/// for the lifetime of the process, in insertion order, and are never
/// removed. Vote and view mutations update one entry in place.
pub struct IdeaStore {
    ideas: RwLock<Vec<Idea>>,
}

impl IdeaStore {
    pub fn new() -> Self {
        Self {
            ideas: RwLock::new(Vec::new()),
        }
    }

    pub fn with_seed_data() -> Self {
        Self {
            ideas: RwLock::new(seed_ideas()),
        }
    }

    pub async fn len(&self) -> usize {
        self.ideas.read().await.len()
    }

    /// Snapshot of the full collection, in insertion order.
    pub async fn list(&self) -> Vec<Idea> {
        self.ideas.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Idea> {
        self.ideas.read().await.iter().find(|idea| idea.id == id).cloned()
    }

    pub async fn insert(&self, idea: Idea) {
        self.ideas.write().await.push(idea);
    }

    /// Increments the view counter and returns the updated idea.
    pub async fn record_view(&self, id: Uuid) -> Option<Idea> {
        let mut ideas = self.ideas.write().await;
        let idea = ideas.iter_mut().find(|idea| idea.id == id)?;
        idea.views += 1;
        Some(idea.clone())
    }

    pub async fn tally(&self, id: Uuid) -> Option<VoteTally> {
        self.ideas
            .read()
            .await
            .iter()
            .find(|idea| idea.id == id)
            .map(|idea| idea.votes)
    }

    /// Replaces one idea's tally in place. Returns false if the idea is gone.
    pub async fn set_tally(&self, id: Uuid, tally: VoteTally) -> bool {
        let mut ideas = self.ideas.write().await;
        match ideas.iter_mut().find(|idea| idea.id == id) {
            Some(idea) => {
                idea.votes = tally;
                true
            }
            None => false,
        }
    }
}

impl Default for IdeaStore {
    fn default() -> Self {
        Self::new()
    }
}

struct Seed {
    title: &'static str,
    description: &'static str,
    author: (&'static str, &'static str),
    tags: &'static [&'static str],
    votes: VoteTally,
    comments: u32,
    views: u32,
    hours_ago: i64,
}

/// The six ideas the dashboard ships with before a real backend exists.
fn seed_ideas() -> Vec<Idea> {
    let seeds = [
        Seed {
            title: "AI-Powered Code Review Assistant",
            description: "A smart assistant that analyzes code commits and provides intelligent feedback, suggestions for improvements, and identifies potential bugs before they reach production. Uses machine learning to understand coding patterns and best practices.",
            author: ("Sarah Johnson", "SJ"),
            tags: &["AI", "Development", "Automation"],
            votes: VoteTally::new(47, 3, None),
            comments: 12,
            views: 234,
            hours_ago: 2,
        },
        Seed {
            title: "Sustainable Food Delivery Network",
            description: "A platform connecting local farmers directly with consumers, reducing food waste and carbon footprint. Features real-time inventory tracking, route optimization for deliveries, and community-supported agriculture subscriptions.",
            author: ("Mike Chen", "MC"),
            tags: &["Sustainability", "Food", "Logistics"],
            votes: VoteTally::new(38, 5, Some(VoteDirection::Up)),
            comments: 8,
            views: 189,
            hours_ago: 5,
        },
        Seed {
            title: "Virtual Reality Meditation Spaces",
            description: "Immersive VR environments designed for meditation and mindfulness practices. Users can join guided sessions in beautiful virtual locations like forests, beaches, or mountains, with biometric feedback for personalized experiences.",
            author: ("Emma Rodriguez", "ER"),
            tags: &["VR", "Wellness", "Mental Health"],
            votes: VoteTally::new(62, 2, None),
            comments: 15,
            views: 412,
            hours_ago: 8,
        },
        Seed {
            title: "Blockchain-Based Academic Credentials",
            description: "A decentralized system for issuing and verifying educational certificates and achievements. Eliminates fraud, provides instant verification, and gives students complete ownership of their academic records.",
            author: ("David Park", "DP"),
            tags: &["Blockchain", "Education", "Web3"],
            votes: VoteTally::new(29, 8, None),
            comments: 6,
            views: 156,
            hours_ago: 12,
        },
        Seed {
            title: "Smart Home Energy Optimization",
            description: "An IoT system that learns household energy usage patterns and automatically optimizes consumption. Integrates with smart appliances, solar panels, and battery storage to minimize costs and environmental impact.",
            author: ("Lisa Wang", "LW"),
            tags: &["IoT", "Energy", "Smart Home"],
            votes: VoteTally::new(41, 4, None),
            comments: 9,
            views: 201,
            hours_ago: 18,
        },
        Seed {
            title: "Personalized Learning Path Generator",
            description: "An AI-driven platform that creates customized learning experiences based on individual learning styles, pace, and goals. Adapts content difficulty and presentation methods in real-time to maximize knowledge retention.",
            author: ("Alex Thompson", "AT"),
            tags: &["AI", "Education", "Personalization"],
            votes: VoteTally::new(55, 1, None),
            comments: 18,
            views: 298,
            hours_ago: 24,
        },
    ];

    let now = Utc::now();
    seeds
        .into_iter()
        .map(|seed| Idea {
            id: Uuid::new_v4(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            author: IdeaAuthor {
                name: seed.author.0.to_string(),
                initials: seed.author.1.to_string(),
                avatar_url: None,
            },
            tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
            votes: seed.votes,
            comments: seed.comments,
            views: seed.views,
            created_at: now - Duration::hours(seed.hours_ago),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_data_has_six_ideas_in_dashboard_order() {
        let store = IdeaStore::with_seed_data();
        let ideas = store.list().await;
        assert_eq!(ideas.len(), 6);
        assert_eq!(ideas[0].title, "AI-Powered Code Review Assistant");
        assert_eq!(ideas[5].title, "Personalized Learning Path Generator");
    }

    #[tokio::test]
    async fn set_tally_updates_in_place_without_reordering() {
        let store = IdeaStore::with_seed_data();
        let before = store.list().await;
        let target = before[2].id;

        let updated = before[2].votes.apply(VoteDirection::Up);
        assert!(store.set_tally(target, updated).await);

        let after = store.list().await;
        assert_eq!(after.len(), before.len());
        let order_before: Vec<Uuid> = before.iter().map(|idea| idea.id).collect();
        let order_after: Vec<Uuid> = after.iter().map(|idea| idea.id).collect();
        assert_eq!(order_before, order_after);
        assert_eq!(after[2].votes, updated);
    }

    #[tokio::test]
    async fn set_tally_on_unknown_idea_is_a_noop() {
        let store = IdeaStore::with_seed_data();
        assert!(!store.set_tally(Uuid::new_v4(), VoteTally::default()).await);
        assert_eq!(store.len().await, 6);
    }

    #[tokio::test]
    async fn record_view_increments_the_counter() {
        let store = IdeaStore::with_seed_data();
        let first = store.list().await[0].clone();

        let viewed = store.record_view(first.id).await.unwrap();
        assert_eq!(viewed.views, first.views + 1);
        assert!(store.record_view(Uuid::new_v4()).await.is_none());
    }
}
