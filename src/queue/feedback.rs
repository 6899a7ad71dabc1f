use crate::documents::GameStatus;

/// Like/dislike selection for the game currently in view.
///
/// The cell is scoped to a single (user, game view) pair. Entering a new game
/// view means constructing a fresh cell; nothing carries over between views.
/// At most one of liked/disliked is ever active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    status: Option<GameStatus>,
}

impl Feedback {
    pub fn new() -> Self {
        Feedback::default()
    }

    pub fn from_status(status: Option<GameStatus>) -> Self {
        Feedback { status }
    }

    /// Toggles the liked selection. Selecting it clears a dislike.
    pub fn like(&mut self) {
        self.status = match self.status {
            Some(GameStatus::Liked) => None,
            _ => Some(GameStatus::Liked),
        };
    }

    /// Toggles the disliked selection. Selecting it clears a like.
    pub fn dislike(&mut self) {
        self.status = match self.status {
            Some(GameStatus::Disliked) => None,
            _ => Some(GameStatus::Disliked),
        };
    }

    pub fn current(&self) -> Option<GameStatus> {
        self.status
    }
}
