mod utils;

use futures::future::join_all;
use janlog::{GameMode, LedgerEvent, RecordError, ValidationError};
use utils::{DraftBuilder, TestSetupBuilder};

#[tokio::test]
async fn recording_a_game_updates_every_participant_aggregate() {
    let setup = TestSetupBuilder::new()
        .with_players(&["A", "B", "C", "D"])
        .build()
        .await;

    let draft = DraftBuilder::new("Round 1")
        .period("2024-05")
        .seated(setup.player_id(0), 1, 30)
        .seated(setup.player_id(1), 2, 10)
        .seated(setup.player_id(2), 3, -10)
        .seated(setup.player_id(3), 4, -30)
        .build();

    let record = setup
        .recorder
        .record(&draft)
        .await
        .expect("valid submission should be accepted");
    assert_eq!(record.title, "Round 1");
    assert_eq!(record.game_date.to_string(), "2024-05");
    assert_eq!(record.results.len(), 4);

    let standings = setup.views.standings().await.unwrap();
    let winner = &standings[0];
    assert_eq!(winner.player.name, "A");
    assert_eq!(winner.player.aggregate.total_score, 30);
    assert_eq!(winner.player.aggregate.game_count, 1);
    assert_eq!(winner.player.aggregate.average_rank, 1.0);
    assert_eq!(winner.player.aggregate.rank_counts.first, 1);
    assert_eq!(winner.player.aggregate.rank_counts.total(), 1);
}

#[tokio::test]
async fn nonzero_score_sum_is_rejected_without_any_store_mutation() {
    let setup = TestSetupBuilder::new()
        .with_players(&["A", "B", "C", "D"])
        .build()
        .await;

    let draft = DraftBuilder::new("Round 1")
        .seated(setup.player_id(0), 1, 30)
        .seated(setup.player_id(1), 2, 10)
        .seated(setup.player_id(2), 3, -10)
        .seated(setup.player_id(3), 4, -25)
        .build();

    let err = setup.recorder.record(&draft).await.unwrap_err();
    assert_eq!(
        err,
        RecordError::Rejected(ValidationError::NonZeroScoreSum { sum: 5 })
    );

    let history = setup.views.history().await.unwrap();
    assert!(history.games.is_empty());
    let standings = setup.views.standings().await.unwrap();
    assert!(standings
        .iter()
        .all(|row| row.player.aggregate.game_count == 0));
}

#[tokio::test]
async fn observers_are_stripped_and_left_untouched() {
    let setup = TestSetupBuilder::new()
        .with_players(&["A", "B", "C", "D", "E"])
        .build()
        .await;

    let draft = DraftBuilder::new("Round 1")
        .seated(setup.player_id(0), 1, 30)
        .seated(setup.player_id(1), 2, 10)
        .seated(setup.player_id(2), 3, -10)
        .seated(setup.player_id(3), 4, -30)
        .observing(setup.player_id(4))
        .build();

    let record = setup.recorder.record(&draft).await.unwrap();
    assert_eq!(record.results.len(), 4);
    assert!(record.result_for(&setup.player_id(4)).is_none());

    let standings = setup.views.standings().await.unwrap();
    let observer = standings
        .iter()
        .find(|row| row.player.id == setup.player_id(4))
        .unwrap();
    assert_eq!(observer.player.aggregate.game_count, 0);
    assert_eq!(observer.player.aggregate.total_score, 0);
}

#[tokio::test]
async fn five_player_sessions_fill_all_rank_buckets() {
    let setup = TestSetupBuilder::new()
        .with_players(&["A", "B", "C", "D", "E"])
        .build()
        .await;

    let draft = DraftBuilder::new("Big table")
        .mode(GameMode::Five)
        .seated(setup.player_id(0), 1, 40)
        .seated(setup.player_id(1), 2, 20)
        .seated(setup.player_id(2), 3, 0)
        .seated(setup.player_id(3), 4, -20)
        .seated(setup.player_id(4), 5, -40)
        .build();

    setup.recorder.record(&draft).await.unwrap();

    let standings = setup.views.standings().await.unwrap();
    let last = standings
        .iter()
        .find(|row| row.player.id == setup.player_id(4))
        .unwrap();
    assert_eq!(last.player.aggregate.rank_counts.fifth, 1);
    assert_eq!(last.player.aggregate.average_rank, 5.0);
}

#[tokio::test]
async fn aggregates_fold_correctly_over_consecutive_games() {
    let setup = TestSetupBuilder::new()
        .with_players(&["A", "B", "C", "D"])
        .build()
        .await;

    // A finishes 1st, 3rd, 2nd with scores +30, -10, +10
    let rounds = [
        [(0usize, 1u8, 30i64), (1, 2, 10), (2, 3, -10), (3, 4, -30)],
        [(1, 1, 30), (2, 2, 10), (0, 3, -10), (3, 4, -30)],
        [(3, 1, 30), (0, 2, 10), (1, 3, -10), (2, 4, -30)],
    ];
    for (index, seats) in rounds.iter().enumerate() {
        let mut draft = DraftBuilder::new(&format!("Round {}", index + 1));
        for (player, rank, score) in seats {
            draft = draft.seated(setup.player_id(*player), *rank, *score);
        }
        setup.recorder.record(&draft.build()).await.unwrap();
    }

    let standings = setup.views.standings().await.unwrap();
    let a = standings
        .iter()
        .find(|row| row.player.name == "A")
        .unwrap();
    assert_eq!(a.player.aggregate.total_score, 30);
    assert_eq!(a.player.aggregate.game_count, 3);
    assert!((a.player.aggregate.average_rank - 2.0).abs() < 1e-9);
    assert_eq!(a.player.aggregate.rank_counts.first, 1);
    assert_eq!(a.player.aggregate.rank_counts.second, 1);
    assert_eq!(a.player.aggregate.rank_counts.third, 1);
    assert_eq!(
        a.player.aggregate.rank_counts.total(),
        a.player.aggregate.game_count
    );
}

#[tokio::test]
async fn trend_view_builds_the_cumulative_series_with_zero_baseline() {
    let setup = TestSetupBuilder::new()
        .with_players(&["A", "B", "C", "D", "E"])
        .build()
        .await;

    let first = DraftBuilder::new("Round 1")
        .period("2024-04")
        .seated(setup.player_id(0), 1, 30)
        .seated(setup.player_id(1), 2, 10)
        .seated(setup.player_id(2), 3, -10)
        .seated(setup.player_id(3), 4, -30)
        .observing(setup.player_id(4))
        .build();
    let second = DraftBuilder::new("Round 2")
        .period("2024-05")
        .seated(setup.player_id(4), 1, 20)
        .seated(setup.player_id(0), 2, 10)
        .seated(setup.player_id(1), 3, -10)
        .seated(setup.player_id(2), 4, -20)
        .observing(setup.player_id(3))
        .build();
    setup.recorder.record(&first).await.unwrap();
    setup.recorder.record(&second).await.unwrap();

    let series = setup.views.trend().await.unwrap();
    assert_eq!(series.points.len(), 3);
    assert!(series.points[0].game_id.is_none());
    assert!(series.points[0].scores.values().all(|&s| s == 0));

    let a = setup.player_id(0);
    let e = setup.player_id(4);
    let d = setup.player_id(3);
    assert_eq!(series.points[1].scores[&a], 30);
    assert_eq!(series.points[1].scores[&e], 0);
    assert_eq!(series.points[2].scores[&a], 40);
    assert_eq!(series.points[2].scores[&e], 20);
    // D observed round two: previous cumulative value carried forward
    assert_eq!(series.points[2].scores[&d], -30);
}

#[tokio::test]
async fn history_orders_games_newest_period_first() {
    let setup = TestSetupBuilder::new()
        .with_players(&["A", "B", "C", "D"])
        .build()
        .await;

    for (title, period) in [("March", "2024-03"), ("May", "2024-05"), ("April", "2024-04")] {
        let draft = DraftBuilder::new(title)
            .period(period)
            .seated(setup.player_id(0), 1, 30)
            .seated(setup.player_id(1), 2, 10)
            .seated(setup.player_id(2), 3, -10)
            .seated(setup.player_id(3), 4, -30)
            .build();
        setup.recorder.record(&draft).await.unwrap();
    }

    let page = setup.views.history().await.unwrap();
    let titles: Vec<&str> = page.games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["May", "April", "March"]);
}

#[tokio::test]
async fn concurrent_submissions_over_the_same_players_all_land() {
    let setup = TestSetupBuilder::new()
        .with_players(&["A", "B", "C", "D"])
        .build()
        .await;

    let submissions: Vec<_> = (0..4)
        .map(|round| {
            let recorder = setup.recorder.clone();
            let draft = DraftBuilder::new(&format!("Round {}", round + 1))
                .seated(setup.player_id(0), 1, 30)
                .seated(setup.player_id(1), 2, 10)
                .seated(setup.player_id(2), 3, -10)
                .seated(setup.player_id(3), 4, -30)
                .build();
            tokio::spawn(async move { recorder.record(&draft).await })
        })
        .collect();

    for outcome in join_all(submissions).await {
        outcome.unwrap().expect("every submission should commit");
    }

    let standings = setup.views.standings().await.unwrap();
    let a = standings
        .iter()
        .find(|row| row.player.name == "A")
        .unwrap();
    // Four games counted exactly once each
    assert_eq!(a.player.aggregate.game_count, 4);
    assert_eq!(a.player.aggregate.total_score, 120);
    assert_eq!(setup.views.history().await.unwrap().games.len(), 4);
}

#[tokio::test]
async fn subscribers_learn_about_recorded_games() {
    let setup = TestSetupBuilder::new()
        .with_players(&["A", "B", "C", "D"])
        .build()
        .await;
    let mut receiver = setup.event_bus.subscribe();

    let draft = DraftBuilder::new("Round 1")
        .seated(setup.player_id(0), 1, 30)
        .seated(setup.player_id(1), 2, 10)
        .seated(setup.player_id(2), 3, -10)
        .seated(setup.player_id(3), 4, -30)
        .build();
    let record = setup.recorder.record(&draft).await.unwrap();

    match receiver.recv().await.unwrap() {
        LedgerEvent::GameRecorded { game_id, period, .. } => {
            assert_eq!(game_id, record.id);
            assert_eq!(period, record.game_date);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}
