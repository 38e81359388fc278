//! Selector - picks one cover point out of the classified candidates.

use cover_world::{CoverIntent, CoverPoint, TieBreak, Vec3};

/// Pick the winner among `candidates` by distance from `requester`.
///
/// A single candidate wins outright. Otherwise the rule decides, and exact
/// ties go to the earliest candidate. Returns `None` for no candidates.
pub fn select<'a>(
    candidates: &[&'a CoverPoint],
    requester: &Vec3,
    rule: TieBreak,
) -> Option<&'a CoverPoint> {
    let (first, rest) = candidates.split_first()?;
    let mut best = *first;
    let mut best_distance = best.distance_to(requester);
    for candidate in rest {
        let d = candidate.distance_to(requester);
        if rule.prefers(d, best_distance) {
            best = *candidate;
            best_distance = d;
        }
    }
    Some(best)
}

/// [`select`] with the rule for `intent`.
pub fn select_for_intent<'a>(
    candidates: &[&'a CoverPoint],
    requester: &Vec3,
    intent: CoverIntent,
) -> Option<&'a CoverPoint> {
    select(candidates, requester, intent.tie_break())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cover_world::ObstacleId;

    fn point(x: f32) -> CoverPoint {
        CoverPoint::new(ObstacleId::nil(), Vec3::new(x, 0.0, 0.0), Vec3::zeros(), Vec3::zeros())
    }

    #[test]
    fn test_empty_candidates() {
        assert!(select(&[], &Vec3::zeros(), TieBreak::Nearest).is_none());
    }

    #[test]
    fn test_single_candidate_wins() {
        let only = point(5000.0);
        let chosen = select_for_intent(&[&only], &Vec3::zeros(), CoverIntent::Normal);
        assert_eq!(chosen.map(|p| p.id), Some(only.id));
    }

    #[test]
    fn test_flanking_picks_farthest() {
        let near = point(300.0);
        let far = point(700.0);
        let chosen = select_for_intent(&[&near, &far], &Vec3::zeros(), CoverIntent::Flanking);
        assert_eq!(chosen.map(|p| p.id), Some(far.id));
    }

    #[test]
    fn test_other_intents_pick_nearest() {
        let far = point(700.0);
        let near = point(-300.0);
        for intent in [CoverIntent::Normal, CoverIntent::Advancing, CoverIntent::Retreating] {
            let chosen = select_for_intent(&[&far, &near], &Vec3::zeros(), intent);
            assert_eq!(chosen.map(|p| p.id), Some(near.id), "intent {}", intent);
        }
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let a = point(100.0);
        let b = point(-100.0);

        let nearest = select(&[&a, &b], &Vec3::zeros(), TieBreak::Nearest);
        let farthest = select(&[&a, &b], &Vec3::zeros(), TieBreak::Farthest);

        assert_eq!(nearest.map(|p| p.id), Some(a.id));
        assert_eq!(farthest.map(|p| p.id), Some(a.id));
    }
}
