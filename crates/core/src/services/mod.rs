pub mod chart_service;
pub mod detail_service;
pub mod portfolio_service;
pub mod view_service;
