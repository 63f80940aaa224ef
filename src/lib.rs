/// lib.rs — massdecomp library surface
///
/// The decomposer core (`decomposer`) never depends on `alphabet` or
/// `cli` — it consumes only the `Weights` view, per spec.md §6. Both
/// ambient modules are layered on top for the binary and for tests.
pub mod alphabet;
pub mod cli;
pub mod decomposer;
pub mod error;
pub mod weights;
