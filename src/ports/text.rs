// src/ports/text.rs
//
// Pure text presenters: domain values in, terminal text out. No IO here so
// every format is unit-testable.
use std::collections::{HashMap, HashSet};

use crate::application::{AnalyticsSummary, FetchState, UserStat};
use crate::domain::{Note, Post, Priority, Todo, User, WeatherReport};

/// Render a widget's fetch lifecycle: nothing while idle, a placeholder
/// while pending, the widget-local message on failure.
pub fn render_fetch<T>(
    state: &FetchState<T>,
    pending: &str,
    render: impl Fn(&T) -> String,
) -> String {
    match state {
        FetchState::Idle => String::new(),
        FetchState::Pending => format!("{pending}\n"),
        FetchState::Success(value) => render(value),
        FetchState::Failed(message) => format!("{message}\n"),
    }
}

#[derive(Debug)]
pub struct BoardPresenter;

impl BoardPresenter {
    pub fn render(&self, partition: &HashMap<Priority, Vec<&Note>>) -> String {
        let mut out = String::new();
        for priority in Priority::ALL {
            out.push_str(&format!("== {} ==\n", heading(priority)));
            match partition.get(&priority) {
                Some(notes) if !notes.is_empty() => {
                    for note in notes {
                        out.push_str(&format!("  [{}] {}\n", note.id, note.text));
                    }
                }
                _ => out.push_str(&format!("  No {priority} notes\n")),
            }
        }
        out
    }
}

fn heading(priority: Priority) -> &'static str {
    match priority {
        Priority::Important => "Important",
        Priority::Normal => "Normal",
        Priority::Delayed => "Delayed",
    }
}

#[derive(Debug)]
pub struct DirectoryPresenter;

impl DirectoryPresenter {
    pub fn render_users(&self, users: &[User]) -> String {
        let mut out = String::from("Select a user:\n");
        for user in users {
            out.push_str(&format!("  [{}] {} <{}>\n", user.id, user.name, user.email));
        }
        out
    }

    /// One user's posts and todos. `done` is the transient set of todo ids
    /// toggled completed for this render only; it overrides the server flag
    /// and is never persisted.
    pub fn render_user_panel(
        &self,
        user: &User,
        posts: &FetchState<Vec<Post>>,
        todos: &FetchState<Vec<Todo>>,
        done: &HashSet<i64>,
    ) -> String {
        let mut out = format!("User: {}\n\n", user.name);

        out.push_str(&render_fetch(posts, "Loading posts...", |posts| {
            let mut section = format!("Posts ({})\n", posts.len());
            for post in posts {
                section.push_str(&format!("  {}\n", post.title));
            }
            section
        }));

        out.push('\n');
        out.push_str(&render_fetch(todos, "Loading todos...", |todos| {
            let mut section = format!("Todos ({})\n", todos.len());
            for todo in todos {
                let completed = todo.completed || done.contains(&todo.id);
                let marker = if completed { "x" } else { " " };
                let status = if completed { "Completed" } else { "Pending" };
                section.push_str(&format!("  [{marker}] {} ({status})\n", todo.title));
            }
            section
        }));

        out
    }
}

#[derive(Debug)]
pub struct AnalyticsPresenter;

impl AnalyticsPresenter {
    pub fn render(&self, summary: &AnalyticsSummary) -> String {
        let mut out = format!("Total users: {}\n", summary.total_users);
        out.push_str(&self.stat_line("Most posts", summary.most_posts.as_ref(), "posts"));
        out.push_str(&self.stat_line("Fewest posts", summary.fewest_posts.as_ref(), "posts"));
        out.push_str(&self.stat_line(
            "Most completed",
            summary.most_completed.as_ref(),
            "completed",
        ));
        out.push_str(&self.stat_line(
            "Fewest completed",
            summary.fewest_completed.as_ref(),
            "completed",
        ));
        out
    }

    fn stat_line(&self, label: &str, stat: Option<&UserStat>, unit: &str) -> String {
        match stat {
            Some(stat) => format!("{label}: {} ({} {unit})\n", stat.username, stat.count),
            None => format!("{label}: n/a\n"),
        }
    }
}

#[derive(Debug)]
pub struct WeatherPresenter;

impl WeatherPresenter {
    pub fn render(&self, report: &WeatherReport) -> String {
        let mut out = format!("{}\n", report.name);
        out.push_str(&format!("  {}°C", report.main.temp.round() as i64));
        if let Some(condition) = report.weather.first() {
            out.push_str(&format!("  {}", condition.description));
        }
        out.push('\n');
        out.push_str(&format!("  Humidity: {}%\n", report.main.humidity));
        if let Some(condition) = report.weather.first() {
            if !condition.icon.is_empty() {
                out.push_str(&format!("  Icon: {}\n", condition.icon));
            }
        }
        out
    }
}
