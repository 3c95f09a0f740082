//! Procedural city generation for skylane.
//!
//! The city is generated once at startup and never changes: every building
//! and streetlight becomes a static collision obstacle plus a mesh
//! description for the render collaborator. Generation is fully
//! deterministic per seed.

pub mod city;

pub use city::*;
