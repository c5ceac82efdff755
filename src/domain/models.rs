use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub type TeamName = String;
pub type Score = i64;
pub type Points = u32;

/// One side of a played match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamScore {
    pub team: TeamName,
    pub score: Score,
}

impl TeamScore {
    pub fn new(team: impl Into<TeamName>, score: Score) -> Self {
        Self {
            team: team.into(),
            score,
        }
    }
}

/// Parsed match line, consumed as soon as it is applied to a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub home: TeamScore,
    pub away: TeamScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchResult {
    pub fn new(home: TeamScore, away: TeamScore) -> Self {
        Self { home, away }
    }

    pub fn outcome(&self) -> Outcome {
        match self.home.score.cmp(&self.away.score) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Row of a standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub team: TeamName,
    pub points: Points,
}

impl RankingEntry {
    pub fn new(rank: usize, team: impl Into<TeamName>, points: Points) -> Self {
        Self {
            rank,
            team: team.into(),
            points,
        }
    }
}
