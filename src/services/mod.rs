// Service exports
pub mod profiles;
pub mod recommendations;
pub mod store;
pub mod teams;

pub use profiles::{load_profiles, parse_profiles, find_profile, ProfileError};
pub use recommendations::{RecommendationService, RecommendError};
pub use store::{KeyValueStore, MemoryStore, FileStore, StoreKey, StoreError};
pub use teams::{TeamService, TeamError};
