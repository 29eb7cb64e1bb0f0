// mod.rs - Data structures module

pub mod library;
pub mod loaders;
pub mod store;

// Re-export main types for convenience
pub use library::{BarcodeLibrary, LoaderOptions};
pub use store::SequenceStore;
