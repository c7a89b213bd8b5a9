//! FFI crate exposing the rotation board to the Flutter shell.

pub mod api;
