use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::models::{HistoryPage, RosterEntry, StandingsRow, TrendPoint, TrendSeries};
use crate::player::PlayerId;
use crate::store::{GameOrder, LedgerStore, StoreError};

/// Read-only derived projections over the ledger store.
///
/// Everything here is a pull-based read of committed state; callers
/// wanting liveness subscribe to the event bus and re-pull.
pub struct ViewService {
    store: Arc<dyn LedgerStore>,
}

impl ViewService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Players ordered by total score descending; ties broken by name
    /// ascending so the table is stable across reloads
    #[instrument(skip(self))]
    pub async fn standings(&self) -> Result<Vec<StandingsRow>, StoreError> {
        let mut players = self.store.list_players().await?;
        players.sort_by(|a, b| {
            b.aggregate
                .total_score
                .cmp(&a.aggregate.total_score)
                .then_with(|| a.name.cmp(&b.name))
        });

        debug!(row_count = players.len(), "Standings derived");
        Ok(players
            .into_iter()
            .enumerate()
            .map(|(index, player)| StandingsRow {
                position: index + 1,
                player,
            })
            .collect())
    }

    /// The game log, newest period first, newest recording first within
    /// a period, plus the roster for column resolution
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<HistoryPage, StoreError> {
        let roster = self.store.list_players().await?;
        let games = self.store.list_games(GameOrder::PeriodDesc).await?;

        debug!(game_count = games.len(), "History derived");
        Ok(HistoryPage {
            roster: roster.into_iter().map(RosterEntry::from).collect(),
            games,
        })
    }

    /// Cumulative score series over games in recording order, seeded
    /// with a zero baseline; absent players carry their previous value
    #[instrument(skip(self))]
    pub async fn trend(&self) -> Result<TrendSeries, StoreError> {
        let roster: Vec<RosterEntry> = self
            .store
            .list_players()
            .await?
            .into_iter()
            .map(RosterEntry::from)
            .collect();
        let games = self.store.list_games(GameOrder::Chronological).await?;

        let mut cumulative: HashMap<PlayerId, i64> =
            roster.iter().map(|entry| (entry.id.clone(), 0)).collect();

        let mut points = Vec::with_capacity(games.len() + 1);
        points.push(TrendPoint {
            game_id: None,
            title: None,
            scores: cumulative.clone(),
        });

        for game in games {
            for result in &game.results {
                // Players recorded before this roster snapshot always
                // resolve; anything else would be an integrity bug
                if let Some(total) = cumulative.get_mut(&result.player_id) {
                    *total += result.score;
                }
            }
            points.push(TrendPoint {
                game_id: Some(game.id),
                title: Some(game.title),
                scores: cumulative.clone(),
            });
        }

        debug!(point_count = points.len(), "Trend derived");
        Ok(TrendSeries { roster, points })
    }
}
