use std::collections::HashSet;

use super::errors::ValidationError;
use crate::game::{GameDraft, Rank, SeatDraft, SeatResult, ValidatedGame};

/// Checks a draft submission for structural and rule correctness.
///
/// Pure and deterministic; checks run in a fixed order and the first
/// failure wins. `roster_size` is the total number of players in the
/// system, used to require an explicit observing mark for every
/// non-seated roster member.
///
/// On success returns the normalized seated subset, observers stripped.
pub fn validate(draft: &GameDraft, roster_size: usize) -> Result<ValidatedGame, ValidationError> {
    if draft.title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let period = draft.period.ok_or(ValidationError::MissingPeriod)?;

    // One entry per player: a repeated id would fold two seats into a
    // single aggregate document and break the zero-sum accounting
    let mut seen_players = HashSet::with_capacity(draft.entries.len());
    for entry in &draft.entries {
        if !seen_players.insert(&entry.player_id) {
            return Err(ValidationError::DuplicatePlayer {
                player_id: entry.player_id.clone(),
            });
        }
    }

    let seats = draft.mode.seats();
    let seated: Vec<_> = draft
        .entries
        .iter()
        .filter_map(|entry| match entry.seat {
            SeatDraft::Ranked { rank, score } => Some((entry, rank, score)),
            _ => None,
        })
        .collect();
    if seated.len() != seats {
        return Err(ValidationError::SeatedCountMismatch {
            expected: seats,
            found: seated.len(),
        });
    }

    // Pending slots count toward neither side, so they surface here
    let observers = draft
        .entries
        .iter()
        .filter(|entry| entry.seat == SeatDraft::Observing)
        .count();
    let expected_observers = roster_size.saturating_sub(seats);
    if observers != expected_observers {
        return Err(ValidationError::ObserverCountMismatch {
            expected: expected_observers,
            found: observers,
        });
    }

    // Range before uniqueness: a value outside 1..=seats must not be able
    // to mask a duplicate elsewhere in the set. Together with the seated
    // count this guarantees ranks are exactly {1..seats}.
    let mut ranks = Vec::with_capacity(seated.len());
    let mut seen = [false; Rank::MAX as usize];
    for (_, rank, _) in &seated {
        let parsed = Rank::new(*rank).filter(|r| r.get() <= draft.mode.max_rank());
        let Some(parsed) = parsed else {
            return Err(ValidationError::RankOutOfRange { rank: *rank, seats });
        };
        let slot = &mut seen[(parsed.get() - 1) as usize];
        if *slot {
            return Err(ValidationError::DuplicateRank { rank: parsed.get() });
        }
        *slot = true;
        ranks.push(parsed);
    }

    let mut results = Vec::with_capacity(seats);
    for ((entry, _, score), rank) in seated.iter().zip(ranks) {
        let score = score.ok_or_else(|| ValidationError::MissingScore {
            player_id: entry.player_id.clone(),
        })?;
        results.push(SeatResult {
            player_id: entry.player_id.clone(),
            rank,
            score,
        });
    }

    let sum: i64 = results.iter().map(|r| r.score).sum();
    if sum != 0 {
        return Err(ValidationError::NonZeroScoreSum { sum });
    }

    Ok(ValidatedGame {
        title: draft.title.clone(),
        period,
        mode: draft.mode,
        results,
    })
}
