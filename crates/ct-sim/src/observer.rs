//! Generator observer trait for progress reporting and streaming output.

use crate::{RunSummary, UserTrace};

/// Callbacks invoked by [`TraceGenerator::run`][crate::TraceGenerator::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Users are always reported in ascending id
/// order, also when the `parallel` feature is on.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { every: u32 }
///
/// impl TraceObserver for ProgressPrinter {
///     fn on_user_complete(&mut self, trace: &UserTrace) {
///         if trace.user.0 % self.every == 0 {
///             println!("{} done: {} records", trace.user, trace.records.len());
///         }
///     }
/// }
/// ```
pub trait TraceObserver {
    /// Called once before the first user is simulated.
    fn on_run_start(&mut self, _user_count: u32, _schedule_len: usize) {}

    /// Called after each user's records are complete.
    fn on_user_complete(&mut self, _trace: &UserTrace) {}

    /// Called once after the last user (or after cancellation).
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`TraceObserver`] that does nothing.
pub struct NoopObserver;

impl TraceObserver for NoopObserver {}
