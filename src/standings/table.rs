use std::collections::HashMap;

use log::debug;

use super::ranking::assign_ranks;
use crate::domain::{MatchResult, Outcome, Points, RankingEntry, TeamName};

pub const WIN_POINTS: Points = 3;
pub const DRAW_POINTS: Points = 1;
pub const LOSS_POINTS: Points = 0;

pub type PointsMap = HashMap<TeamName, Points>;

/// Accumulated league points per team
#[derive(Debug, Default)]
pub struct StandingsTable {
    points: PointsMap,
    matches_applied: usize,
}

impl StandingsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one match; both teams get an entry even when they score nothing
    pub fn apply(&mut self, result: MatchResult) {
        let (home_points, away_points) = points_for(result.outcome());
        debug!(
            "{} {} - {} {} ({:+} / {:+})",
            result.home.team,
            result.home.score,
            result.away.score,
            result.away.team,
            home_points,
            away_points
        );

        self.credit(result.home.team, home_points);
        self.credit(result.away.team, away_points);
        self.matches_applied += 1;
    }

    /// Current standings, points descending then name ascending
    pub fn rankings(&self) -> Vec<RankingEntry> {
        let mut sorted: Vec<(&TeamName, Points)> = self
            .points
            .iter()
            .map(|(team, &points)| (team, points))
            .collect();

        sorted.sort_by(|(a_team, a_points), (b_team, b_points)| {
            b_points.cmp(a_points).then_with(|| a_team.cmp(b_team))
        });
        debug!("Ranking {} teams", sorted.len());

        assign_ranks(sorted)
    }

    pub fn points(&self, team: &str) -> Option<Points> {
        self.points.get(team).copied()
    }

    pub fn total_points(&self) -> Points {
        self.points.values().sum()
    }

    pub fn matches_applied(&self) -> usize {
        self.matches_applied
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn credit(&mut self, team: TeamName, delta: Points) {
        *self.points.entry(team).or_insert(0) += delta;
    }
}

fn points_for(outcome: Outcome) -> (Points, Points) {
    match outcome {
        Outcome::HomeWin => (WIN_POINTS, LOSS_POINTS),
        Outcome::AwayWin => (LOSS_POINTS, WIN_POINTS),
        Outcome::Draw => (DRAW_POINTS, DRAW_POINTS),
    }
}
