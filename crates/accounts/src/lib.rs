//! `tiendaops-accounts` — demo-account fixtures and seed outcomes.

pub mod seed;

pub use seed::{DemoAccount, ProfileMirror, SeedResult, SeedStatus, DEMO_ACCOUNTS};
