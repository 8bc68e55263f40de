// src/util/testing.rs

use std::cell::RefCell;
use std::env;

use anyhow::{anyhow, Result};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteStore, Session, SessionStore};
use crate::domain::Note;

// Common test environment variables
pub const TEST_ENV_VARS: &[&str] = &["RUST_LOG", "NO_CLEANUP"];

/// Shared in-memory note store for testing the board without real storage.
///
/// Records every saved snapshot so tests can assert that each mutation
/// triggered a full-list rewrite.
///
/// # Examples
///
/// ```
/// use dashpad::util::testing::MockNoteStore;
/// use dashpad::domain::{Note, Priority};
///
/// let store = MockNoteStore::builder()
///     .with_note(Note {
///         id: 1,
///         text: "Buy milk".to_string(),
///         priority: Priority::Normal,
///     })
///     .build();
/// ```
pub struct MockNoteStore {
    initial: Vec<Note>,
    fail_saves: bool,
    saves: RefCell<Vec<Vec<Note>>>,
}

impl MockNoteStore {
    pub fn builder() -> MockNoteStoreBuilder {
        MockNoteStoreBuilder::new()
    }

    /// Number of times `save` was called.
    pub fn save_count(&self) -> usize {
        self.saves.borrow().len()
    }

    /// The most recently saved list, if any save happened.
    pub fn last_saved(&self) -> Option<Vec<Note>> {
        self.saves.borrow().last().cloned()
    }
}

impl NoteStore for MockNoteStore {
    fn load(&self) -> Vec<Note> {
        self.initial.clone()
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if self.fail_saves {
            return Err(anyhow!("save failed"));
        }
        self.saves.borrow_mut().push(notes.to_vec());
        Ok(())
    }
}

/// Builder for MockNoteStore
pub struct MockNoteStoreBuilder {
    initial: Vec<Note>,
    fail_saves: bool,
}

impl MockNoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            initial: vec![],
            fail_saves: false,
        }
    }

    /// Seed the store with a note returned by `load`
    pub fn with_note(mut self, note: Note) -> Self {
        self.initial.push(note);
        self
    }

    /// Seed the store with a full list returned by `load`
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.initial = notes;
        self
    }

    /// Make every `save` call fail
    pub fn with_failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn build(self) -> MockNoteStore {
        MockNoteStore {
            initial: self.initial,
            fail_saves: self.fail_saves,
            saves: RefCell::new(vec![]),
        }
    }
}

impl Default for MockNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory session store for testing the login gate.
pub struct MockSessionStore {
    session: RefCell<Option<Session>>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self {
            session: RefCell::new(None),
        }
    }

    pub fn with_session(username: &str) -> Self {
        Self {
            session: RefCell::new(Some(Session {
                username: username.to_string(),
            })),
        }
    }
}

impl Default for MockSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MockSessionStore {
    fn load(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.session.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.borrow_mut() = None;
        Ok(())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "want"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

pub fn print_active_env_vars() {
    for var in TEST_ENV_VARS {
        if let Ok(value) = env::var(var) {
            println!("{var}={value}");
        } else {
            println!("{var} is not set");
        }
    }
}
