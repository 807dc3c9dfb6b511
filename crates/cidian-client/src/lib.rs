mod client;
mod error;

pub use client::YoudaoClient;
pub use error::FetchError;

#[cfg(test)]
mod tests;
