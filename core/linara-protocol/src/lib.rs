#![no_std] // Shared by the WASM build and the tools

#[macro_use]
extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod archive;
pub mod builtin;
pub mod lexicon;
pub mod model;
pub mod morphology;

// Re-export core types for convenience
pub use archive::load_pack;
pub use lexicon::{Lexicon, LexiconError};
pub use model::*;
pub use morphology::*;
