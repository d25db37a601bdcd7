//! Static NFL league table and division lookup.
//!
//! The table is fixed for the lifetime of the process: 2 conferences,
//! 8 divisions, 4 teams per division, every team in exactly one division.

use crate::constants::season::TEAMS_PER_DIVISION;
use crate::error::AppError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Conference {
    #[serde(rename = "AFC")]
    Afc,
    #[serde(rename = "NFC")]
    Nfc,
}

impl Conference {
    /// Short label used as the division name prefix
    pub fn label(self) -> &'static str {
        match self {
            Conference::Afc => "AFC",
            Conference::Nfc => "NFC",
        }
    }

    /// The opposing conference
    pub fn other(self) -> Self {
        match self {
            Conference::Afc => Conference::Nfc,
            Conference::Nfc => Conference::Afc,
        }
    }

    /// Reads the conference from the first word of a division name, e.g. `"AFC East"`.
    pub fn from_division_name(name: &str) -> Option<Self> {
        match name.split_whitespace().next()? {
            "AFC" => Some(Conference::Afc),
            "NFC" => Some(Conference::Nfc),
            _ => None,
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Division {
    pub name: &'static str,
    pub conference: Conference,
    pub teams: [&'static str; TEAMS_PER_DIVISION],
}

impl Division {
    pub fn contains(&self, team: &str) -> bool {
        self.teams.contains(&team)
    }

    /// Division members other than `team`, in table order
    pub fn opponents_of<'a>(&'a self, team: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.teams.iter().copied().filter(move |t| *t != team)
    }
}

static LEAGUE: [Division; 8] = [
    Division {
        name: "AFC East",
        conference: Conference::Afc,
        teams: [
            "Buffalo Bills",
            "Miami Dolphins",
            "New England Patriots",
            "New York Jets",
        ],
    },
    Division {
        name: "AFC North",
        conference: Conference::Afc,
        teams: [
            "Baltimore Ravens",
            "Cincinnati Bengals",
            "Cleveland Browns",
            "Pittsburgh Steelers",
        ],
    },
    Division {
        name: "AFC South",
        conference: Conference::Afc,
        teams: [
            "Houston Texans",
            "Indianapolis Colts",
            "Jacksonville Jaguars",
            "Tennessee Titans",
        ],
    },
    Division {
        name: "AFC West",
        conference: Conference::Afc,
        teams: [
            "Denver Broncos",
            "Kansas City Chiefs",
            "Las Vegas Raiders",
            "Los Angeles Chargers",
        ],
    },
    Division {
        name: "NFC East",
        conference: Conference::Nfc,
        teams: [
            "Dallas Cowboys",
            "New York Giants",
            "Philadelphia Eagles",
            "Washington Commanders",
        ],
    },
    Division {
        name: "NFC North",
        conference: Conference::Nfc,
        teams: [
            "Chicago Bears",
            "Detroit Lions",
            "Green Bay Packers",
            "Minnesota Vikings",
        ],
    },
    Division {
        name: "NFC South",
        conference: Conference::Nfc,
        teams: [
            "Atlanta Falcons",
            "Carolina Panthers",
            "New Orleans Saints",
            "Tampa Bay Buccaneers",
        ],
    },
    Division {
        name: "NFC West",
        conference: Conference::Nfc,
        teams: [
            "Arizona Cardinals",
            "Los Angeles Rams",
            "San Francisco 49ers",
            "Seattle Seahawks",
        ],
    },
];

/// All divisions in table order
pub fn divisions() -> &'static [Division] {
    &LEAGUE
}

/// Divisions belonging to `conference`, in table order
pub fn divisions_in(conference: Conference) -> impl Iterator<Item = &'static Division> {
    LEAGUE.iter().filter(move |d| d.conference == conference)
}

/// Every team in the league, grouped by division in table order
pub fn all_teams() -> impl Iterator<Item = &'static str> {
    LEAGUE.iter().flat_map(|d| d.teams.iter().copied())
}

/// Finds the division of `team`.
///
/// Matching is exact: city and mascot, case and spelling must all agree
/// with the table.
///
/// # Errors
/// * `AppError::TeamNotFound` - no division lists this name
pub fn find_division(team: &str) -> Result<&'static Division, AppError> {
    LEAGUE
        .iter()
        .find(|d| d.contains(team))
        .ok_or_else(|| AppError::team_not_found(team))
}
