pub mod cached;
pub mod crawler;
pub mod pipeline;
pub mod web;

pub use cached::CachedSource;
pub use crawler::PageSource;
pub use web::LiveSource;
