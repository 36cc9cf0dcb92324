//! Run reporting helpers shared by the library and the binary.

pub mod statistics;

pub use statistics::print_line_statistics;
