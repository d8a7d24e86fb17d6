// Command handlers
use crate::presentation::cli::Command;
use anyhow::Context;
use screenboard_client::application::screenboard_repository::ScreenboardRepository;
use screenboard_client::domain::board::Board;
use screenboard_client::domain::query::{Aggregator, Query, Request};
use screenboard_client::domain::widget::{BackgroundColor, Edge, Note, Timeframe, Timeseries};
use screenboard_client::infrastructure::json_mapper::{board_from_json, board_to_json};
use std::path::Path;

/// Run a command that talks to the remote service.
pub async fn run(command: Command, repository: &dyn ScreenboardRepository) -> anyhow::Result<()> {
    match command {
        Command::Sample => print_sample()?,
        Command::Create { file } => {
            let board = read_board(&file).await?;
            let id = repository.create(&board).await?;
            println!("{}", id);
        }
        Command::Update { id, file } => {
            let board = read_board(&file).await?;
            repository.update(id, &board).await?;
        }
        Command::Delete { id } => repository.delete(id).await?,
        Command::Get { id } => {
            let board = repository.get(id).await?;
            println!("{}", board_to_json(&board)?);
        }
        Command::Share { id } => println!("{}", repository.public_url(id).await?),
    }
    Ok(())
}

pub fn print_sample() -> anyhow::Result<()> {
    println!("{}", board_to_json(&sample_board()?)?);
    Ok(())
}

async fn read_board(path: &Path) -> anyhow::Result<Board> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    board_from_json(&json).with_context(|| format!("Invalid board document in {}", path.display()))
}

/// A note pointing at a latency chart, the shape most boards start from.
pub fn sample_board() -> screenboard_client::Result<Board> {
    let mut note = Note::at(0, 0, 20, 13)?;
    note.frame_mut().set_title("Read me");
    note.set_text("Latency per host, stacked. Deploys are overlaid as events.");
    note.set_background_color(BackgroundColor::Blue);
    note.set_tick_edge(Edge::Right);

    let mut chart = Timeseries::at(21, 0, 47, 13)?;
    chart.frame_mut().set_title("Request latency");
    chart.set_timeframe(Timeframe::OneDay);
    let tile = chart.tile_definition_mut();
    tile.add_request(Request::grouped(Aggregator::Average, "web.request.latency", "host")?);
    tile.add_request(Request::scoped(
        Aggregator::Maximum,
        "web.request.latency",
        "env:prod",
        None,
        false,
    )?);
    tile.add_event(Query::new("tags:deploy"));

    Ok(Board::new("Web service").with_widget(note).with_widget(chart))
}
