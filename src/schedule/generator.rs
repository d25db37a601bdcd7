use super::{Game, Location, Schedule, assign_home_away};
use crate::constants::season::{
    BYE_WEEK_FIRST, BYE_WEEK_LAST, DIVISIONAL_HOME_GAMES, EXTRA_CONFERENCE_GAMES,
    HOME_TARGET_CHOICES, WEEKS,
};
use crate::error::AppError;
use crate::league::{self, Division};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::{debug, instrument};

/// Builds an 18-week schedule for `team`.
///
/// Layout of the result:
/// - a home-and-away double round-robin against the three division rivals,
///   with one rival's two legs replaced by a single Week 18 rematch
/// - every team of one other same-conference division
/// - every team of one opposite-conference division
/// - three more same-conference opponents from the remaining divisions
/// - a bye somewhere in weeks 5 through 14
///
/// The 15 regular games are shuffled into weeks 1-17 around the bye. That is
/// one game short of the 16 slots, so the last slot before Week 18 stays empty.
///
/// # Errors
/// * `AppError::TeamNotFound` - `team` is not in the league table
pub fn generate_schedule<R>(team: &str, rng: &mut R) -> Result<Schedule, AppError>
where
    R: Rng + ?Sized,
{
    let division = league::find_division(team)?;
    debug!("{team} plays in {}", division.name);

    let rivals: Vec<&'static str> = division.opponents_of(team).collect();
    let mut divisional_games: Vec<Game> = rivals
        .iter()
        .map(|rival| Game::new(*rival, Location::Home))
        .chain(rivals.iter().map(|rival| Game::new(*rival, Location::Away)))
        .collect();

    let rematch = pick_rematch(&rivals, rng)?;
    divisional_games.retain(|game| game.opponent != rematch.opponent);
    debug!(
        "Week {WEEKS} rematch: {} ({})",
        rematch.opponent, rematch.location
    );

    let non_divisional = pick_non_divisional_opponents(division, rng)?;

    let home_target = *HOME_TARGET_CHOICES
        .choose(rng)
        .ok_or_else(|| AppError::config_error("No home-game target choices configured"))?;
    let non_divisional_home = usize::from(home_target - DIVISIONAL_HOME_GAMES);
    debug!("Home target {home_target}, {non_divisional_home} non-divisional home games");

    let mut pool = divisional_games;
    pool.extend(assign_home_away(rng, &non_divisional, non_divisional_home)?);
    pool.shuffle(rng);

    let bye_week = rng.random_range(BYE_WEEK_FIRST..=BYE_WEEK_LAST);
    let weeks = fill_weeks(pool, bye_week, rematch);

    Ok(Schedule::new(team, division.name, weeks, bye_week, home_target))
}

/// Same as [`generate_schedule`] with the thread-local generator.
///
/// # Returns
/// * `Ok(Schedule)` - A fresh schedule; repeated calls differ
/// * `Err(AppError)` - `AppError::TeamNotFound` for an unknown team
///
/// # Notes
/// - Seeded from the ambient entropy source; use [`generate_schedule`] with a
///   seeded generator for reproducible output
#[instrument]
pub fn generate_schedule_with_entropy(team: &str) -> Result<Schedule, AppError> {
    generate_schedule(team, &mut rand::rng())
}

fn pick_rematch<R>(rivals: &[&'static str], rng: &mut R) -> Result<Game, AppError>
where
    R: Rng + ?Sized,
{
    let opponent = rivals
        .choose(rng)
        .ok_or_else(|| AppError::config_error("Division has no rivals for a rematch"))?;
    let location = if rng.random_bool(0.5) {
        Location::Home
    } else {
        Location::Away
    };
    Ok(Game::new(*opponent, location))
}

/// Opponents outside the division: a full same-conference division, a full
/// opposite-conference division, then a few picks from what is left of the
/// conference.
fn pick_non_divisional_opponents<R>(
    division: &Division,
    rng: &mut R,
) -> Result<Vec<&'static str>, AppError>
where
    R: Rng + ?Sized,
{
    let conference = division.conference;
    let same_conference: Vec<&'static Division> = league::divisions_in(conference)
        .filter(|d| d.name != division.name)
        .collect();
    let other_conference: Vec<&'static Division> =
        league::divisions_in(conference.other()).collect();

    let paired = *same_conference
        .choose(rng)
        .ok_or_else(|| AppError::config_error(format!("No sibling divisions in {conference}")))?;
    let crossover = *other_conference.choose(rng).ok_or_else(|| {
        AppError::config_error(format!("No divisions in {}", conference.other()))
    })?;
    debug!("Paired with {} and {}", paired.name, crossover.name);

    let mut leftovers: Vec<&'static str> = same_conference
        .iter()
        .filter(|d| d.name != paired.name)
        .flat_map(|d| d.teams.iter().copied())
        .collect();
    leftovers.shuffle(rng);
    leftovers.truncate(EXTRA_CONFERENCE_GAMES);

    let mut opponents: Vec<&'static str> = paired.teams.to_vec();
    opponents.extend(crossover.teams.iter().copied());
    opponents.extend(leftovers);
    Ok(opponents)
}

/// Lays the pool out over the season. The bye and Week 18 slots are fixed;
/// every other week takes the next pooled game, if any remain.
fn fill_weeks(pool: Vec<Game>, bye_week: u8, rematch: Game) -> Vec<Option<Game>> {
    let mut pool = pool.into_iter();
    let mut rematch = Some(rematch);

    (1..=WEEKS)
        .map(|week| {
            if week == bye_week {
                Some(Game::bye())
            } else if week == WEEKS {
                rematch.take()
            } else {
                pool.next()
            }
        })
        .collect()
}
