use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

/// Up/down counters plus the current user's own choice for one idea.
/// At most one of the two counters is "owned" by the user at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub upvotes: u32,
    pub downvotes: u32,
    pub user_vote: Option<VoteDirection>,
}

impl VoteTally {
    pub fn new(upvotes: u32, downvotes: u32, user_vote: Option<VoteDirection>) -> Self {
        Self {
            upvotes,
            downvotes,
            user_vote,
        }
    }

    /// Computes the next tally for a requested direction.
    ///
    /// Re-clicking the held direction removes the vote; requesting the
    /// opposite direction moves it. Every (state, direction) pair is
    /// covered by exactly one arm.
    pub fn apply(self, direction: VoteDirection) -> VoteTally {
        use VoteDirection::{Down, Up};

        match (self.user_vote, direction) {
            (None, Up) => VoteTally {
                upvotes: self.upvotes + 1,
                user_vote: Some(Up),
                ..self
            },
            (None, Down) => VoteTally {
                downvotes: self.downvotes + 1,
                user_vote: Some(Down),
                ..self
            },
            // Re-click removes the held vote
            (Some(Up), Up) => VoteTally {
                upvotes: self.upvotes.saturating_sub(1),
                user_vote: None,
                ..self
            },
            (Some(Down), Down) => VoteTally {
                downvotes: self.downvotes.saturating_sub(1),
                user_vote: None,
                ..self
            },
            // Switching sides moves the vote across both counters
            (Some(Up), Down) => VoteTally {
                upvotes: self.upvotes.saturating_sub(1),
                downvotes: self.downvotes + 1,
                user_vote: Some(Down),
            },
            (Some(Down), Up) => VoteTally {
                upvotes: self.upvotes + 1,
                downvotes: self.downvotes.saturating_sub(1),
                user_vote: Some(Up),
            },
        }
    }

    pub fn net(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }

    pub fn sign(&self) -> VoteSign {
        match self.net() {
            n if n > 0 => VoteSign::Positive,
            n if n < 0 => VoteSign::Negative,
            _ => VoteSign::Neutral,
        }
    }

    /// Label for the net score: positive scores carry an explicit "+".
    pub fn signed_label(&self) -> String {
        let net = self.net();
        if net > 0 {
            format!("+{}", net)
        } else {
            net.to_string()
        }
    }
}

impl Default for VoteTally {
    fn default() -> Self {
        Self::new(0, 0, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteSign {
    Positive,
    Negative,
    Neutral,
}

// Vote request
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub direction: VoteDirection,
}

// Vote response
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub user_vote: Option<VoteDirection>,
    pub upvotes: u32,
    pub downvotes: u32,
    pub net_votes: i64,
}

impl From<VoteTally> for VoteResponse {
    fn from(tally: VoteTally) -> Self {
        Self {
            user_vote: tally.user_vote,
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            net_votes: tally.net(),
        }
    }
}
