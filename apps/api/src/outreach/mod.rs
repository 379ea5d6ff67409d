// Outreach: listing → profile metadata → prompt → three message variants.
// All text generation goes through llm_client::TextGenerator.

pub mod demo;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod profile_parser;
pub mod prompts;
