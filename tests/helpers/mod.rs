pub mod environment_fixtures;
pub mod store_helpers;
