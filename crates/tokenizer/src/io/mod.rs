//! Model persistence.
//!
//! Models are stored as a single human-readable JSON document holding the
//! vocabulary, the ordered merge log and each training word's final segmentation.

pub mod format;
pub mod load;
pub mod save;

pub use format::{SerializedMerge, SerializedModel};
pub use load::ModelLoader;
pub use save::ModelSaver;
