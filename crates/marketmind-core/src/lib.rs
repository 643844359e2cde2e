// Shared configuration and wire types for the MarketMind service.

pub mod config;
pub mod protocol;
