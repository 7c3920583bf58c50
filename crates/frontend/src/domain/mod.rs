pub mod contact;
pub mod listings;
