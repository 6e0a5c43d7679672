// Services module for the scaffolding pipeline
pub mod file_seeder;
pub mod rename_prompter;
pub mod structure_builder;

pub use file_seeder::FileSeeder;
pub use rename_prompter::RenamePrompter;
pub use structure_builder::StructureBuilder;
