// Shared helpers for integration tests

use std::sync::Arc;

use janlog::{
    DraftEntry, EventBus, GameDraft, GameMode, GameRecorder, InMemoryLedgerStore, LedgerStore,
    Period, PlayerId, SeatDraft, ViewService,
};

/// Everything a workflow test needs, wired the same way `main` does it
pub struct TestSetup {
    pub store: Arc<InMemoryLedgerStore>,
    pub recorder: Arc<GameRecorder>,
    pub views: Arc<ViewService>,
    pub event_bus: EventBus,
    pub player_ids: Vec<PlayerId>,
}

impl TestSetup {
    pub fn player_id(&self, index: usize) -> PlayerId {
        self.player_ids[index].clone()
    }
}

/// Builder for creating a seeded ledger environment
pub struct TestSetupBuilder {
    player_names: Vec<&'static str>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            player_names: Vec::new(),
        }
    }

    pub fn with_players(mut self, names: &[&'static str]) -> Self {
        self.player_names.extend_from_slice(names);
        self
    }

    pub async fn build(self) -> TestSetup {
        let store = Arc::new(InMemoryLedgerStore::new());
        let mut player_ids = Vec::new();
        for name in &self.player_names {
            let player = store
                .create_player(name)
                .await
                .expect("seeding player should succeed");
            player_ids.push(player.id);
        }

        let event_bus = EventBus::new(64);
        let recorder = Arc::new(GameRecorder::new(store.clone(), event_bus.clone()));
        let views = Arc::new(ViewService::new(store.clone()));

        TestSetup {
            store,
            recorder,
            views,
            event_bus,
            player_ids,
        }
    }
}

/// Builder assembling a full-roster draft submission
pub struct DraftBuilder {
    title: String,
    period: Option<Period>,
    mode: GameMode,
    entries: Vec<DraftEntry>,
}

impl DraftBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            period: Some("2024-05".parse().unwrap()),
            mode: GameMode::Four,
            entries: Vec::new(),
        }
    }

    pub fn period(mut self, period: &str) -> Self {
        self.period = Some(period.parse().unwrap());
        self
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn seated(mut self, player_id: PlayerId, rank: u8, score: i64) -> Self {
        self.entries.push(DraftEntry {
            player_id,
            seat: SeatDraft::Ranked {
                rank,
                score: Some(score),
            },
        });
        self
    }

    pub fn observing(mut self, player_id: PlayerId) -> Self {
        self.entries.push(DraftEntry {
            player_id,
            seat: SeatDraft::Observing,
        });
        self
    }

    pub fn build(self) -> GameDraft {
        GameDraft {
            title: self.title,
            period: self.period,
            mode: self.mode,
            entries: self.entries,
        }
    }
}
