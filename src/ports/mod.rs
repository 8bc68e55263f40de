// src/ports/mod.rs
pub mod text;

pub use text::{
    render_fetch, AnalyticsPresenter, BoardPresenter, DirectoryPresenter, WeatherPresenter,
};
