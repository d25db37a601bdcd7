use crate::league;
use crate::schedule::{Game, Location, Schedule};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Deterministic generator for reproducible schedules in tests
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Test helpers for inspecting generated schedules
pub struct ScheduleInspector<'a> {
    schedule: &'a Schedule,
}

impl<'a> ScheduleInspector<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Self { schedule }
    }

    /// Number of slots tagged with the bye placeholder
    pub fn bye_count(&self) -> usize {
        self.schedule
            .weeks()
            .iter()
            .flatten()
            .filter(|g| g.is_bye())
            .count()
    }

    /// Divisional games in weeks 1-17, i.e. everything except the rematch
    pub fn divisional_games(&self) -> Vec<&'a Game> {
        let schedule = self.schedule;
        let Ok(division) = league::find_division(schedule.team()) else {
            return Vec::new();
        };
        schedule.weeks()[..schedule.weeks().len().saturating_sub(1)]
            .iter()
            .flatten()
            .filter(|g| !g.is_bye() && division.contains(&g.opponent))
            .collect()
    }

    /// Games outside the subject team's division
    pub fn non_divisional_games(&self) -> Vec<&'a Game> {
        let schedule = self.schedule;
        let Ok(division) = league::find_division(schedule.team()) else {
            return Vec::new();
        };
        schedule
            .weeks()
            .iter()
            .flatten()
            .filter(|g| !g.is_bye() && !division.contains(&g.opponent))
            .collect()
    }

    pub fn count_at(games: &[&Game], location: Location) -> usize {
        games.iter().filter(|g| g.location == location).count()
    }
}
