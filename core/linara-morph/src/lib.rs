#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod affix;
pub mod english;

pub use affix::{analyze_noun, analyze_verb, generate_noun, generate_verb, Analysis};
pub use english::Inflection;
