// Data models for TPG

pub mod layout;
pub mod seeded_file;

pub use layout::ProjectLayout;
pub use seeded_file::SeededFile;
