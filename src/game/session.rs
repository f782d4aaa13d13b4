use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::{
    game::{
        geometry::BoardGeometry,
        scorer::{ScoringConfig, WordScorer},
    },
    models::{Board, FoundWord, Position},
};

/// Result of submitting a traced path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Found(FoundWord),
    NotLinear,
    OutOfBounds,
    NotATarget { letters: String },
    AlreadyFound { word: String },
}

/// Found-word bookkeeping for one level
#[derive(Debug, Clone)]
pub struct LevelSession {
    board: Board,
    scoring: Arc<ScoringConfig>,
    found: Vec<FoundWord>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl LevelSession {
    pub fn new(board: Board, scoring: Arc<ScoringConfig>) -> Self {
        Self {
            board,
            scoring,
            found: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn found(&self) -> &[FoundWord] {
        &self.found
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Match a traced path against the level's words.
    /// Paths traced end-to-start are accepted as the word they spell backwards.
    pub fn submit(&mut self, path: &[Position]) -> SubmitOutcome {
        if !BoardGeometry::is_valid_linear_selection(path) {
            return SubmitOutcome::NotLinear;
        }

        let Some(letters) = BoardGeometry::letters_at(&self.board.grid, path) else {
            return SubmitOutcome::OutOfBounds;
        };
        let reversed: String = letters.chars().rev().collect();

        // Forward reading wins; a found word never blocks its unfound reverse
        let matches: Vec<String> = [&letters, &reversed]
            .into_iter()
            .filter(|candidate| self.board.target_words().any(|target| target == candidate.as_str()))
            .cloned()
            .collect();

        let Some(word) = matches
            .iter()
            .find(|candidate| !self.is_found(candidate))
            .cloned()
        else {
            return match matches.into_iter().next() {
                Some(word) => SubmitOutcome::AlreadyFound { word },
                None => SubmitOutcome::NotATarget { letters },
            };
        };

        let found = FoundWord {
            points: WordScorer::points_for_word(&word, &self.scoring),
            word,
            positions: path.to_vec(),
        };
        tracing::debug!("Found {} for {} points", found.word, found.points);
        self.found.push(found.clone());

        if self.is_complete() && self.finished_at.is_none() {
            self.finished_at = Some(Utc::now());
            tracing::info!(
                "Level complete: {} words, {} points in {}s",
                self.found.len(),
                self.score(),
                self.elapsed().num_seconds()
            );
        }

        SubmitOutcome::Found(found)
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.iter().any(|f| f.word == word)
    }

    pub fn score(&self) -> u32 {
        WordScorer::level_score(&self.found, &self.scoring)
    }

    pub fn is_complete(&self) -> bool {
        self.board.target_words().all(|target| self.is_found(target))
    }

    pub fn remaining_words(&self) -> Vec<&str> {
        self.board
            .target_words()
            .filter(|target| !self.is_found(target))
            .collect()
    }

    /// Time spent on the level, frozen once it completes
    pub fn elapsed(&self) -> Duration {
        self.finished_at.unwrap_or_else(Utc::now) - self.started_at
    }

    /// Clear found words and restart the clock
    pub fn reset(&mut self) {
        self.found.clear();
        self.started_at = Utc::now();
        self.finished_at = None;
    }
}

/// Live sessions for a multi-user host
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<Uuid, LevelSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, board: Board, scoring: Arc<ScoringConfig>) -> Uuid {
        let session_id = Uuid::new_v4();
        self.sessions
            .insert(session_id, LevelSession::new(board, scoring));
        tracing::info!("Created level session {}", session_id);
        session_id
    }

    pub fn submit(&self, session_id: &Uuid, path: &[Position]) -> Option<SubmitOutcome> {
        self.sessions
            .get_mut(session_id)
            .map(|mut session| session.submit(path))
    }

    pub fn score(&self, session_id: &Uuid) -> Option<u32> {
        self.sessions.get(session_id).map(|session| session.score())
    }

    pub fn is_complete(&self, session_id: &Uuid) -> Option<bool> {
        self.sessions
            .get(session_id)
            .map(|session| session.is_complete())
    }

    pub fn reset(&self, session_id: &Uuid) -> bool {
        match self.sessions.get_mut(session_id) {
            Some(mut session) => {
                session.reset();
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, session_id: &Uuid) -> Option<LevelSession> {
        self.sessions
            .remove(session_id)
            .map(|(_, session)| session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
