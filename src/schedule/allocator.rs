use super::{Game, Location};
use crate::error::AppError;
use rand::Rng;
use rand::seq::index;

/// Splits `opponents` into `home_count` home games and the rest away.
///
/// The home subset is sampled uniformly without replacement and listed first,
/// in sampled order. Away games follow in input order. Every opponent ends up
/// in exactly one of the two subsets.
///
/// # Errors
/// * `AppError::InvalidHomeCount` - `home_count` exceeds the number of opponents
pub fn assign_home_away<R, S>(
    rng: &mut R,
    opponents: &[S],
    home_count: usize,
) -> Result<Vec<Game>, AppError>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    if home_count > opponents.len() {
        return Err(AppError::invalid_home_count(home_count, opponents.len()));
    }

    let picked = index::sample(rng, opponents.len(), home_count);
    let mut is_home = vec![false; opponents.len()];
    let mut games = Vec::with_capacity(opponents.len());

    for i in picked.iter() {
        is_home[i] = true;
        let name: &str = opponents[i].as_ref();
        games.push(Game::new(name, Location::Home));
    }
    games.extend(
        opponents
            .iter()
            .zip(&is_home)
            .filter(|(_, home)| !**home)
            .map(|(opponent, _)| {
                let name: &str = opponent.as_ref();
                Game::new(name, Location::Away)
            }),
    );

    Ok(games)
}
