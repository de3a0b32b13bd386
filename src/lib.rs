//! Constrained random password generation.
//!
//! [`pass::generate`] turns a [`pass::GenerationConfig`] and an injected
//! [`entropy::RandomSource`] into a password or a [`pass::GenerateError`].
//! The remaining modules make up the command-line caller.

pub mod cli;
pub mod entropy;
pub mod pass;
pub mod settings;
pub mod terminal;
