use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use feed::{FailingFeedClient, FeedClient, FeedError, FeedResult, FixtureFeedClient, StatusCode};
use model::{ExampleData, Trip, Trips};
use rides::{DisplaySettings, IndexPath, LoadOutcome, LoadState, RidesLoader};

/// Answers the first fetch slowly with the example trips and every later one
/// right away with an invalid response.
struct SlowThenFailing {
    calls: AtomicUsize,
}

#[async_trait]
impl FeedClient for SlowThenFailing {
    async fn fetch_trips(&self) -> FeedResult<Vec<Trip>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::time::sleep(Duration::from_millis(150)).await;
            Ok(Trips::example_data().trips)
        } else {
            Err(FeedError::InvalidResponse {
                status_code: StatusCode::INTERNAL_SERVER_ERROR,
                url: "http://localhost/Trip.json".to_owned(),
                response: None,
            })
        }
    }
}

#[tokio::test]
async fn fixture_feed_renders_three_days() {
    let loader = RidesLoader::new(FixtureFeedClient::new(), DisplaySettings::default());
    assert_eq!(loader.load().await, LoadOutcome::Applied);
    let schedule = loader.schedule().await.expect("schedule");

    assert_eq!(schedule.number_of_sections(), 3);
    let keys = schedule
        .groups()
        .iter()
        .map(|group| group.date_key.as_str())
        .collect::<Vec<_>>();
    assert_eq!(keys, ["2023-11-16", "2023-11-17", "2023-11-18"]);

    let totals = (0..3)
        .map(|section| schedule.total_estimated_earnings(section).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(totals, ["$20.00", "$25.00", "$18.00"]);

    for section in 0..3 {
        assert_eq!(schedule.number_of_rows(section), Ok(1));
    }

    let index = IndexPath::new(0, 0);
    assert_eq!(schedule.trip(index).unwrap().slug.raw(), "trip1");
    assert_eq!(schedule.trip_time(index).unwrap(), "1:15p - 1:40p");
    assert_eq!(schedule.trip_riders(index).unwrap(), "(3 riders - 1 booster)");
    assert_eq!(schedule.estimated_earnings(index).unwrap(), "$20.00");
    assert_eq!(
        schedule.trip_addresses(index).unwrap(),
        [
            "1. 101 Main St, Huntington Beach 92648",
            "2. 981 CA-1, Seal Beach 90740",
            "3. 6255 2nd St, Long Beach 90803",
            "4. 102 Main St, Huntington Beach 92648",
            "5. 982 CA-1, Seal Beach 90740",
        ]
    );
    assert_eq!(schedule.trip_date(0).unwrap(), "Thu 11/16");
}

#[tokio::test]
async fn failing_feed_reports_server_error() {
    let client = FailingFeedClient::new(FeedError::InvalidResponse {
        status_code: StatusCode::NOT_FOUND,
        url: feed::TRIPS_FEED_URL.to_owned(),
        response: None,
    });
    let loader = RidesLoader::new(client, DisplaySettings::default());

    assert_eq!(loader.load().await, LoadOutcome::Applied);
    assert_eq!(
        loader.state().await,
        LoadState::Failed("Server error: Received an invalid response.".to_owned())
    );
}

#[tokio::test]
async fn second_load_supersedes_the_first() {
    let loader = Arc::new(RidesLoader::new(
        SlowThenFailing {
            calls: AtomicUsize::new(0),
        },
        DisplaySettings::default(),
    ));

    let first = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load().await }
    });
    tokio::time::sleep(Duration::from_millis(30)).await;
    let second = loader.load().await;

    assert_eq!(second, LoadOutcome::Applied);
    assert_eq!(first.await.expect("first load"), LoadOutcome::Superseded);
    assert_eq!(
        loader.state().await,
        LoadState::Failed("Server error: Received an invalid response.".to_owned())
    );

    // the slow fetch would have finished by now, it must not show up
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(matches!(loader.state().await, LoadState::Failed(_)));
    assert_eq!(loader.client().calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn reload_replaces_the_schedule() {
    let loader = RidesLoader::new(FixtureFeedClient::new(), DisplaySettings::default());

    loader.load().await;
    let first = loader.schedule().await.expect("first");
    loader.load().await;
    let second = loader.schedule().await.expect("second");

    assert_eq!(first, second);
    assert_eq!(second.number_of_sections(), 3);
}

#[tokio::test]
async fn boxed_clients_are_interchangeable() {
    let clients: Vec<Box<dyn FeedClient>> = vec![
        Box::new(FixtureFeedClient::new()),
        Box::new(FailingFeedClient::new(FeedError::Unexpected("gone".to_owned()))),
    ];

    let mut states = Vec::new();
    for client in clients {
        let loader = RidesLoader::new(client, DisplaySettings::default());
        loader.load().await;
        states.push(loader.state().await);
    }

    assert!(matches!(states[0], LoadState::Loaded(_)));
    assert_eq!(
        states[1],
        LoadState::Failed("Unexpected error: Please try again later.".to_owned())
    );
}
