use crate::domain::{Points, RankingEntry, TeamName};

/// Assign ranks to teams already sorted by points descending.
///
/// Tied teams share a rank, and the next team with fewer points is ranked
/// by its 1-based position, so a tie of two at rank 1 is followed by rank 3.
pub fn assign_ranks<'a, I>(sorted: I) -> Vec<RankingEntry>
where
    I: IntoIterator<Item = (&'a TeamName, Points)>,
{
    let mut entries: Vec<RankingEntry> = Vec::new();

    for (position, (team, points)) in sorted.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.points == points => prev.rank,
            _ => position + 1,
        };
        entries.push(RankingEntry::new(rank, team.as_str(), points));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks_for(points: &[(&str, Points)]) -> Vec<usize> {
        let teams: Vec<(TeamName, Points)> = points
            .iter()
            .map(|(team, p)| (team.to_string(), *p))
            .collect();

        assign_ranks(teams.iter().map(|(team, p)| (team, *p)))
            .into_iter()
            .map(|e| e.rank)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(ranks_for(&[]).is_empty());
    }

    #[test]
    fn test_ties_consume_rank_slots() {
        let ranks = ranks_for(&[
            ("Tarantulas", 6),
            ("Lions", 5),
            ("FC Awesome", 1),
            ("Snakes", 1),
            ("Grouches", 0),
        ]);
        assert_eq!(ranks, vec![1, 2, 3, 3, 5]);
    }

    #[test]
    fn test_shared_first_place_skips_second() {
        let ranks = ranks_for(&[("Arsenal", 4), ("Liverpool", 4), ("Chelsea", 3)]);
        assert_eq!(ranks, vec![1, 1, 3]);
    }

    #[test]
    fn test_all_equal() {
        let ranks = ranks_for(&[("A", 1), ("B", 1), ("C", 1), ("D", 1)]);
        assert_eq!(ranks, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_rank_never_exceeds_position() {
        let points = [("A", 9), ("B", 9), ("C", 7), ("D", 7), ("E", 7), ("F", 2), ("G", 0)];
        let ranks = ranks_for(&points);

        for (i, rank) in ranks.iter().enumerate() {
            assert!(*rank <= i + 1);
            if i > 0 {
                let tied = points[i].1 == points[i - 1].1;
                assert_eq!(*rank == ranks[i - 1], tied);
                if !tied {
                    assert_eq!(*rank, i + 1);
                }
            }
        }
    }
}
