use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;
use crate::models::UserProfile;

/// Errors that can occur when loading the candidate pool
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profiles from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid profile at index {index} ({id}): {errors}")]
    Invalid {
        index: usize,
        id: String,
        errors: validator::ValidationErrors,
    },

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),

    #[error("Profile not found: {0}")]
    NotFound(String),
}

/// Load and validate a JSON array of profiles from disk
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<UserProfile>, ProfileError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let profiles = parse_profiles(&contents)?;
    tracing::info!("Loaded {} profiles from {}", profiles.len(), path.display());

    Ok(profiles)
}

/// Parse and validate profiles, failing on the first invalid entry
pub fn parse_profiles(json: &str) -> Result<Vec<UserProfile>, ProfileError> {
    let profiles: Vec<UserProfile> = serde_json::from_str(json)?;

    {
        let mut seen = HashSet::with_capacity(profiles.len());
        for (index, profile) in profiles.iter().enumerate() {
            profile.validate().map_err(|errors| ProfileError::Invalid {
                index,
                id: profile.id.clone(),
                errors,
            })?;

            if !seen.insert(profile.id.as_str()) {
                return Err(ProfileError::DuplicateId(profile.id.clone()));
            }
        }
    }

    Ok(profiles)
}

/// Look up a profile by id
pub fn find_profile<'a>(pool: &'a [UserProfile], id: &str) -> Result<&'a UserProfile, ProfileError> {
    pool.iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ProfileError::NotFound(id.to_string()))
}
