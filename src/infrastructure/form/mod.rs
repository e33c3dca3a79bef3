//! Form infrastructure - assembling forms from server-delivered definitions

mod assembler;

pub use assembler::{AssembledForm, FormAssembler, SkippedItem};
