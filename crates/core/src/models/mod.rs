pub mod asset;
pub mod chart;
pub mod detail;
pub mod favorites;
pub mod history;
pub mod holding;
pub mod news;
pub mod selection;
pub mod snapshot;
pub mod view;
