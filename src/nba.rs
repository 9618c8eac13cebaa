pub mod client;
pub mod commands;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod live_data;
pub mod output;
pub mod params;
pub mod players;
pub mod reshape;
pub mod resultsets;
