pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod ranking;
pub mod resolver;
pub mod uploads;
pub mod youtube;

#[cfg(test)]
mod test_support;
