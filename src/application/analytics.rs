// src/application/analytics.rs
use crate::domain::{Post, Todo, User};

/// Cross-entity statistics, computed in a single pass over already fetched
/// arrays. Ties resolve to the user appearing first in the user list, the
/// same winner a strict-comparison reduce produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub total_users: usize,
    pub most_posts: Option<UserStat>,
    pub fewest_posts: Option<UserStat>,
    pub most_completed: Option<UserStat>,
    pub fewest_completed: Option<UserStat>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStat {
    pub username: String,
    pub count: usize,
}

pub fn summarize(users: &[User], posts: &[Post], todos: &[Todo]) -> AnalyticsSummary {
    let post_counts: Vec<(usize, &User)> = users
        .iter()
        .map(|user| {
            let count = posts.iter().filter(|post| post.user_id == user.id).count();
            (count, user)
        })
        .collect();

    let completed_counts: Vec<(usize, &User)> = users
        .iter()
        .map(|user| {
            let count = todos
                .iter()
                .filter(|todo| todo.user_id == user.id && todo.completed)
                .count();
            (count, user)
        })
        .collect();

    AnalyticsSummary {
        total_users: users.len(),
        most_posts: pick(&post_counts, |candidate, best| candidate > best),
        fewest_posts: pick(&post_counts, |candidate, best| candidate < best),
        most_completed: pick(&completed_counts, |candidate, best| candidate > best),
        fewest_completed: pick(&completed_counts, |candidate, best| candidate < best),
    }
}

fn pick(counts: &[(usize, &User)], better: impl Fn(usize, usize) -> bool) -> Option<UserStat> {
    let mut best: Option<(usize, &User)> = None;
    for &(count, user) in counts {
        match best {
            Some((best_count, _)) if !better(count, best_count) => {}
            _ => best = Some((count, user)),
        }
    }
    best.map(|(count, user)| UserStat {
        username: user.username.clone(),
        count,
    })
}
