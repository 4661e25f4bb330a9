//! Game implementations.

pub mod bondtolva;
