//! Integration tests for nebula-shape, compiled as a single binary.

mod collections;
mod errors;
mod objects;
mod scenarios;
mod wrappers;
