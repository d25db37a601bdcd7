//! Schedule data model and rendering.

pub mod allocator;
pub mod generator;

pub use allocator::assign_home_away;
pub use generator::{generate_schedule, generate_schedule_with_entropy};

use crate::constants::season::BYE_LABEL;
use crate::error::AppError;
use serde::Serialize;
use std::fmt;

/// Where a game is played from the subject team's point of view.
/// `None` only ever tags the bye placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Home,
    Away,
    None,
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Location::Home => "home",
            Location::Away => "away",
            Location::None => "none",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub opponent: String,
    pub location: Location,
}

impl Game {
    pub fn new(opponent: impl Into<String>, location: Location) -> Self {
        Self {
            opponent: opponent.into(),
            location,
        }
    }

    /// Placeholder entry occupying the bye week
    pub fn bye() -> Self {
        Self::new(BYE_LABEL, Location::None)
    }

    pub fn is_bye(&self) -> bool {
        self.location == Location::None
    }
}

/// One team's 18-week season.
///
/// `weeks[0]` is week 1. A slot is `None` when the game pool ran dry before
/// the slot was reached.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    team: String,
    division: &'static str,
    weeks: Vec<Option<Game>>,
    bye_week: u8,
    home_target: u8,
}

impl Schedule {
    pub(crate) fn new(
        team: impl Into<String>,
        division: &'static str,
        weeks: Vec<Option<Game>>,
        bye_week: u8,
        home_target: u8,
    ) -> Self {
        Self {
            team: team.into(),
            division,
            weeks,
            bye_week,
            home_target,
        }
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn division(&self) -> &'static str {
        self.division
    }

    pub fn weeks(&self) -> &[Option<Game>] {
        &self.weeks
    }

    /// Entry for a 1-indexed week
    pub fn week(&self, week: u8) -> Option<&Game> {
        let index = usize::from(week).checked_sub(1)?;
        self.weeks.get(index)?.as_ref()
    }

    pub fn bye_week(&self) -> u8 {
        self.bye_week
    }

    /// Home-game total drawn for this schedule (8 or 9)
    pub fn home_target(&self) -> u8 {
        self.home_target
    }

    /// The final week's divisional rematch
    pub fn rematch(&self) -> Option<&Game> {
        self.weeks.last()?.as_ref()
    }

    /// Scheduled games, bye placeholder excluded
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.weeks.iter().flatten().filter(|g| !g.is_bye())
    }

    pub fn home_game_count(&self) -> usize {
        self.games()
            .filter(|g| g.location == Location::Home)
            .count()
    }

    /// 1-indexed weeks that ended up with neither a game nor the bye
    pub fn open_weeks(&self) -> Vec<u8> {
        self.weeks
            .iter()
            .zip(1u8..)
            .filter(|(slot, _)| slot.is_none())
            .map(|(_, week)| week)
            .collect()
    }

    /// Header line plus one line per week.
    pub fn render_text(&self) -> String {
        let mut out = format!("Schedule for {}:\n", self.team);
        for (slot, week) in self.weeks.iter().zip(1u8..) {
            let line = match slot {
                Some(game) if game.is_bye() => format!("Week {week}: Bye Week"),
                Some(game) => format!("Week {week}: {} ({})", game.opponent, game.location),
                // Slot the 15-game pool never reaches (always week 17). Kept visible
                // on purpose; see "Unfilled week" in DESIGN.md.
                None => format!("Week {week}: No Game"),
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}
