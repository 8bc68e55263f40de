// src/domain/remote.rs
//
// Read-only DTOs mirroring the remote API shapes. They carry no local
// invariants beyond matching the wire schema.
use serde::Deserialize;

/// Account record from the directory service.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Todo {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

/// Current conditions as returned by the weather endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    pub main: WeatherMain,
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub humidity: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
    pub icon: String,
}
