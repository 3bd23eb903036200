// Shared low-level helpers

pub mod io;
