//! Enum variant snippet rendering

pub mod snippet;

pub use snippet::{render_trait, render_type, write_blocks, RenderOptions};
