use std::fmt::Write;

use feed::{FeedClient, FixtureFeedClient, LiveFeedClient};
use rides::{DisplaySettings, IndexPath, LoadState, RideSchedule, RidesLoader, ScheduleResult};

/// Loads the trip feed and prints the ride list the way the app lays it out.
/// Set `RIDES_FEED=fixture` to use the example trips instead of the live feed.
#[tokio::main]
async fn main() {
    env_logger::init();

    let client: Box<dyn FeedClient> = match std::env::var("RIDES_FEED").as_deref() {
        Ok("fixture") => Box::new(FixtureFeedClient::new()),
        _ => match LiveFeedClient::env() {
            Ok(client) => Box::new(client),
            Err(why) => {
                log::error!("could not set up the feed client: {why}");
                std::process::exit(1);
            }
        },
    };

    let loader = RidesLoader::new(client, DisplaySettings::env());
    loader.load().await;

    match report(loader.state().await) {
        Ok(text) => print!("{text}"),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

/// The text to print for a settled loader, or the message to fail with.
fn report(state: LoadState) -> Result<String, String> {
    match state {
        LoadState::Loaded(schedule) => render_schedule(&schedule).map_err(|why| {
            log::error!("rendering the schedule failed: {why}");
            why.to_string()
        }),
        LoadState::Failed(message) => Err(message),
        LoadState::Idle | LoadState::Loading => Ok(String::new()),
    }
}

fn render_schedule(schedule: &RideSchedule) -> ScheduleResult<String> {
    let mut out = String::new();
    for section in 0..schedule.number_of_sections() {
        let _ = writeln!(
            out,
            "{} • {}    {}",
            schedule.trip_date(section)?,
            schedule.section_time(section)?,
            schedule.total_estimated_earnings(section)?
        );

        for row in 0..schedule.number_of_rows(section)? {
            let index = IndexPath::new(section, row);
            let _ = writeln!(
                out,
                "  {} {}    {}",
                schedule.trip_time(index)?,
                schedule.trip_riders(index)?,
                schedule.estimated_earnings(index)?
            );
            for address in schedule.trip_addresses(index)? {
                let _ = writeln!(out, "    {address}");
            }
        }
    }
    Ok(out)
}
