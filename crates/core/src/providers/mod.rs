pub mod traits;

// API provider implementations
pub mod coingecko;
pub mod coinstats;
