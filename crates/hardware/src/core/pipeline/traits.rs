//! Pipeline Latch Interface.
//!
//! Common operations on the inter-stage buffers: squashing the instruction a
//! latch holds and testing whether it holds one.

/// Represents a pipeline latch (inter-stage buffer).
///
/// A latch holds at most one in-flight instruction. An empty latch is a
/// bubble and produces no side effect downstream.
pub trait PipelineLatch {
    /// Replaces the contents with a bubble.
    ///
    /// Called when a stage stalls, on a misprediction, and on halt.
    fn flush(&mut self);

    /// Checks if the latch holds a bubble.
    ///
    /// # Returns
    ///
    /// `true` if there is no valid instruction in the latch, `false` otherwise.
    fn is_empty(&self) -> bool;
}
