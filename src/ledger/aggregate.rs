use crate::game::Rank;
use crate::player::PlayerAggregate;

/// Folds one validated result into a player's running statistics.
///
/// Pure and total: inputs are already validated, so there is no failure
/// mode. The running mean degenerates to `rank` on a player's first game
/// because an empty aggregate carries `average_rank == 0.0`.
pub fn apply(prior: &PlayerAggregate, rank: Rank, score: i64) -> PlayerAggregate {
    let game_count = prior.game_count + 1;
    let average_rank =
        (prior.average_rank * f64::from(prior.game_count) + f64::from(rank.get())) / f64::from(game_count);

    PlayerAggregate {
        total_score: prior.total_score + score,
        game_count,
        average_rank,
        rank_counts: prior.rank_counts.incremented(rank),
    }
}
