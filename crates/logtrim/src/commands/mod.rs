pub mod compact;
pub mod status;
pub mod version;
