mod helpers;

use anyhow::Result;
use dashpad::cli::args::{Args, Command, ConfigCommand, NoteCommand};
use dashpad::domain::Priority;
use helpers::TestDataDir;

fn args(data_dir: &TestDataDir, command: Command) -> Args {
    Args {
        data_dir: Some(data_dir.path.clone()),
        verbose: 0,
        command,
    }
}

fn login_command() -> Command {
    Command::Login {
        username: "alice".to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn given_logged_out_user_when_running_board_then_guard_rejects() -> Result<()> {
    // Arrange
    let data_dir = TestDataDir::new()?;

    // Act
    let result = dashpad::run(args(&data_dir, Command::Board)).await;

    // Assert
    let err = result.expect_err("board must be gated");
    assert!(err.to_string().contains("Not logged in"));
    Ok(())
}

#[tokio::test]
async fn given_login_when_adding_note_then_slot_is_written() -> Result<()> {
    // Arrange
    let data_dir = TestDataDir::new()?;
    dashpad::run(args(&data_dir, login_command())).await?;

    // Act
    dashpad::run(args(
        &data_dir,
        Command::Note(NoteCommand::Add {
            text: "Buy milk".to_string(),
            priority: Priority::Normal,
        }),
    ))
    .await?;

    // Assert
    let raw = std::fs::read_to_string(data_dir.notes_path())?;
    assert!(raw.contains("Buy milk"));
    assert!(raw.contains(r#""priority":"normal""#));

    // Board renders without error from the same slot
    dashpad::run(args(&data_dir, Command::Board)).await?;
    Ok(())
}

#[tokio::test]
async fn given_logout_when_running_board_then_guard_rejects_again() -> Result<()> {
    // Arrange
    let data_dir = TestDataDir::new()?;
    dashpad::run(args(&data_dir, login_command())).await?;
    dashpad::run(args(&data_dir, Command::Board)).await?;

    // Act
    dashpad::run(args(&data_dir, Command::Logout)).await?;

    // Assert
    assert!(dashpad::run(args(&data_dir, Command::Board)).await.is_err());
    Ok(())
}

#[tokio::test]
async fn given_empty_credentials_when_logging_in_then_run_fails() -> Result<()> {
    let data_dir = TestDataDir::new()?;

    let result = dashpad::run(args(
        &data_dir,
        Command::Login {
            username: " ".to_string(),
            password: "".to_string(),
        },
    ))
    .await;

    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn given_config_init_when_running_then_config_file_exists() -> Result<()> {
    // Arrange: config management is not gated
    let data_dir = TestDataDir::new()?;

    // Act
    dashpad::run(args(&data_dir, Command::Config(ConfigCommand::Init))).await?;

    // Assert
    let raw = std::fs::read_to_string(data_dir.path.join("config.toml"))?;
    assert!(raw.contains("[directory]"));
    assert!(raw.contains("jsonplaceholder.typicode.com"));
    Ok(())
}

#[tokio::test]
async fn given_blank_note_text_when_adding_then_slot_stays_absent() -> Result<()> {
    // Arrange
    let data_dir = TestDataDir::new()?;
    dashpad::run(args(&data_dir, login_command())).await?;

    // Act
    dashpad::run(args(
        &data_dir,
        Command::Note(NoteCommand::Add {
            text: "   ".to_string(),
            priority: Priority::Important,
        }),
    ))
    .await?;

    // Assert
    assert!(!data_dir.notes_path().exists());
    Ok(())
}
