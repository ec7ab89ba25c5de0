pub mod meeting_rooms;
pub mod merge;
pub mod min_arrows;
pub mod non_overlapping;
