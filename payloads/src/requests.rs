use serde::{Deserialize, Serialize};

pub const COMMUNITY_NAME_MAX_LEN: usize = 255;
pub const COMMUNITY_DESCRIPTION_MAX_LEN: usize = 1024;

/// Validation result for community names.
///
/// An empty name is valid: the create form permits description-only
/// submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunityNameValidation {
    Valid,
    TooLong,
}

impl CommunityNameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooLong => {
                Some("Community name must be at most 255 characters")
            }
        }
    }
}

/// Validate a community name.
pub fn validate_community_name(name: &str) -> CommunityNameValidation {
    if name.len() > COMMUNITY_NAME_MAX_LEN {
        return CommunityNameValidation::TooLong;
    }
    CommunityNameValidation::Valid
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommunity {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_name_is_valid() {
        assert!(validate_community_name("Engineering").is_valid());
    }

    #[test]
    fn empty_name_is_valid() {
        // Description-only submissions reach the server with an empty name
        assert!(validate_community_name("").is_valid());
    }

    #[test]
    fn over_long_name_is_rejected() {
        let name = "X".repeat(COMMUNITY_NAME_MAX_LEN + 1);
        let validation = validate_community_name(&name);
        assert_eq!(validation, CommunityNameValidation::TooLong);
        assert!(validation.error_message().is_some());
    }

    #[test]
    fn name_at_limit_is_valid() {
        let name = "X".repeat(COMMUNITY_NAME_MAX_LEN);
        assert!(validate_community_name(&name).is_valid());
    }
}
