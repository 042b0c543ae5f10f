pub mod community_card;
pub mod modal;
pub mod no_communities;

pub use community_card::CommunityCard;
pub use modal::Modal;
pub use no_communities::NoCommunities;
