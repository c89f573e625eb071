pub mod client;
pub mod extract;

pub use client::ArchiveClient;
