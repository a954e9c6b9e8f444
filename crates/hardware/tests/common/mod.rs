
/// Program runner built on `Simulator`.
pub mod harness;
