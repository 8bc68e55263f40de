// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::{summarize, Credentials, FetchState, NoteBoard, SessionGate};
use crate::cli::args::{Args, Command, ConfigCommand, NoteCommand};
use crate::constants::CONFIG_FILE;
use crate::domain::DomainError;
use crate::infrastructure::{
    Config, DirectoryClient, FileSessionStore, JsonNoteStore, WeatherClient,
};
use crate::ports::{
    render_fetch, AnalyticsPresenter, BoardPresenter, DirectoryPresenter, WeatherPresenter,
};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting dashpad with arguments");

    let data_dir = resolve_data_dir(args.data_dir)?;
    debug!(?data_dir, "Using data directory");
    let config = Config::load_or_default(data_dir.join(CONFIG_FILE))?;

    let sessions = FileSessionStore::new(&data_dir);
    let gate = SessionGate::new(&sessions);

    // Client-side route guard: dashboard commands need an active session.
    if args.command.requires_login() {
        gate.require_login()?;
    }

    match args.command {
        Command::Login { username, password } => {
            let session = gate.login(&Credentials { username, password })?;
            println!("Logged in as {}", session.username);
        }
        Command::Logout => {
            gate.logout()?;
            println!("Logged out");
        }
        Command::Config(ConfigCommand::Init) => {
            std::fs::create_dir_all(&data_dir).with_context(|| {
                format!("Failed to create data directory {}", data_dir.display())
            })?;
            let path = data_dir.join(CONFIG_FILE);
            Config::create_default(&path)?;
            println!("Wrote {}", path.display());
        }
        Command::Board => {
            let board = NoteBoard::new(JsonNoteStore::new(&data_dir));
            print!("{}", BoardPresenter.render(&board.partition_by_priority()));
        }
        Command::Note(note_command) => run_note_command(note_command, &data_dir)?,
        Command::Users => {
            let client = DirectoryClient::new(&config.directory.base_url);
            let users = FetchState::from_result(client.fetch_users().await);
            print!(
                "{}",
                render_fetch(&users, "Loading users...", |users| {
                    DirectoryPresenter.render_users(users)
                })
            );
        }
        Command::User { user_id, done } => {
            let client = DirectoryClient::new(&config.directory.base_url);
            show_user(&client, user_id, &done).await;
        }
        Command::Analytics => {
            let client = DirectoryClient::new(&config.directory.base_url);
            show_analytics(&client).await;
        }
        Command::Weather { city, lat, lon } => {
            let client = WeatherClient::new(&config.weather.base_url, &config.weather_api_key());
            show_weather(&client, city, lat, lon).await;
        }
        Command::Dashboard => show_dashboard(&data_dir, &config).await,
    }

    Ok(())
}

fn run_note_command(command: NoteCommand, data_dir: &Path) -> Result<()> {
    let mut board = NoteBoard::new(JsonNoteStore::new(data_dir));
    match command {
        NoteCommand::Add { text, priority } => {
            if let Some(id) = board.add_note(&text, priority)? {
                info!(note_id = id, %priority, "Added note");
                println!("Added note {id}");
            }
        }
        NoteCommand::Delete { note_id } => {
            if board.delete_note(note_id)? {
                info!(note_id, "Deleted note");
                println!("Deleted note {note_id}");
            }
        }
        NoteCommand::Move { note_id, priority } => {
            if board.set_priority(note_id, priority)? {
                info!(note_id, %priority, "Moved note");
                println!("Moved note {note_id} to {priority}");
            }
        }
    }
    Ok(())
}

/// One user's panel: posts and todos fetched independently, with no
/// ordering between the two requests. Failures stay inside their section.
async fn show_user(client: &DirectoryClient, user_id: i64, done: &[i64]) {
    let users = match client.fetch_users().await {
        Ok(users) => users,
        Err(e) => {
            println!("{e}");
            return;
        }
    };
    let Some(user) = users.iter().find(|user| user.id == user_id) else {
        println!("{}", DomainError::UserNotFound(user_id));
        return;
    };

    let (posts, todos) = tokio::join!(client.fetch_posts(user_id), client.fetch_todos(user_id));
    let done: HashSet<i64> = done.iter().copied().collect();
    print!(
        "{}",
        DirectoryPresenter.render_user_panel(
            user,
            &FetchState::from_result(posts),
            &FetchState::from_result(todos),
            &done,
        )
    );
}

async fn show_analytics(client: &DirectoryClient) {
    let (users, posts, todos) = tokio::join!(
        client.fetch_users(),
        client.fetch_all_posts(),
        client.fetch_all_todos()
    );
    match (users, posts, todos) {
        (Ok(users), Ok(posts), Ok(todos)) => {
            print!(
                "{}",
                AnalyticsPresenter.render(&summarize(&users, &posts, &todos))
            );
        }
        _ => println!("Failed to load data"),
    }
}

async fn show_weather(
    client: &WeatherClient,
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
) {
    let state = match (city, lat, lon) {
        (Some(city), _, _) => {
            // An all-whitespace city is ignored, like an empty search box.
            if city.trim().is_empty() {
                return;
            }
            FetchState::from_result(client.by_city(&city).await)
        }
        (None, Some(lat), Some(lon)) => FetchState::from_result(client.by_coords(lat, lon).await),
        _ => FetchState::Failed(DomainError::LocationUnavailable.to_string()),
    };
    print!(
        "{}",
        render_fetch(&state, "Fetching weather...", |report| {
            WeatherPresenter.render(report)
        })
    );
}

/// All widgets in one screen. Remote fetches are issued independently and
/// joined without ordering guarantees; one widget failing never hides the
/// data of another.
async fn show_dashboard(data_dir: &Path, config: &Config) {
    let directory = DirectoryClient::new(&config.directory.base_url);
    let weather = WeatherClient::new(&config.weather.base_url, &config.weather_api_key());
    let default_city = config.weather.default_city.trim();

    let (users, posts, todos, report) = tokio::join!(
        directory.fetch_users(),
        directory.fetch_all_posts(),
        directory.fetch_all_todos(),
        async {
            if default_city.is_empty() {
                None
            } else {
                Some(weather.by_city(default_city).await)
            }
        }
    );

    println!("=== Note Board ===");
    let board = NoteBoard::new(JsonNoteStore::new(data_dir));
    print!("{}", BoardPresenter.render(&board.partition_by_priority()));

    println!("\n=== Users ===");
    let users = FetchState::from_result(users);
    print!(
        "{}",
        render_fetch(&users, "Loading users...", |users| {
            DirectoryPresenter.render_users(users)
        })
    );

    println!("\n=== Analytics ===");
    match (users.data(), posts, todos) {
        (Some(users), Ok(posts), Ok(todos)) => print!(
            "{}",
            AnalyticsPresenter.render(&summarize(users, &posts, &todos))
        ),
        _ => println!("Failed to load data"),
    }

    println!("\n=== Weather ===");
    match report {
        None => println!("No default city configured"),
        Some(result) => {
            let state = FetchState::from_result(result);
            print!(
                "{}",
                render_fetch(&state, "Fetching weather...", |report| {
                    WeatherPresenter.render(report)
                })
            );
        }
    }
}

pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        debug!(?dir, "Using provided data directory");
        return Ok(dir);
    }
    let base = dirs::data_dir().context("Could not find user data directory")?;
    Ok(base.join("dashpad"))
}
