use eulerlab::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Drives one indicatif bar from engine progress events.
///
/// A single problem shows a spinner that turns into a bar while a long task runs.
/// A batch solved in parallel shows one bar counting finished problems.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new(0).with_style(Self::spinner_style());
        pb.set_draw_target(target);
        pb.finish_and_clear();
        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    /// Per-problem detail: spinner per problem, bar per task.
    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::ProblemStart { id, title } => {
                    pb_guard.reset();
                    pb_guard.set_length(0);
                    pb_guard.set_style(Self::spinner_style());
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb_guard.set_message(format!("Problem {}: {}", id, title));
                }
                Progress::ProblemFinish { .. } => {
                    pb_guard.disable_steady_tick();
                    pb_guard.finish_and_clear();
                }
                Progress::TaskStart { total_steps } => {
                    pb_guard.disable_steady_tick();
                    pb_guard.set_length(total_steps);
                    pb_guard.set_position(0);
                    pb_guard.set_style(Self::bar_style());
                }
                Progress::TaskIncrement => pb_guard.inc(1),
                Progress::TaskFinish => {
                    let length = pb_guard.length().unwrap_or(0);
                    pb_guard.set_position(length);
                    pb_guard.set_style(Self::spinner_style());
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                }
                Progress::Message(msg) => pb_guard.println(format!("  {}", msg)),
            }
        })
    }

    /// Batch view: one step per finished problem; task events are ignored since
    /// several problems interleave them.
    pub fn get_batch_callback(&self, total: u64) -> ProgressCallback<'static> {
        if let Ok(pb_guard) = self.pb.lock() {
            pb_guard.reset();
            pb_guard.set_length(total);
            pb_guard.set_position(0);
            pb_guard.set_style(Self::bar_style());
            pb_guard.set_message("Solving");
        }
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };
            match progress {
                Progress::ProblemStart { id, .. } => {
                    pb_guard.set_message(format!("Problem {}", id));
                }
                Progress::ProblemFinish { .. } => {
                    pb_guard.inc(1);
                    if pb_guard.length().is_some_and(|len| pb_guard.position() >= len) {
                        pb_guard.finish_and_clear();
                    }
                }
                Progress::Message(msg) => pb_guard.println(format!("  {}", msg)),
                Progress::TaskStart { .. } | Progress::TaskIncrement | Progress::TaskFinish => {}
            }
        })
    }

    /// Clears the bar, e.g. when a run stops early.
    pub fn finish(&self) {
        if let Ok(pb_guard) = self.pb.lock() {
            pb_guard.disable_steady_tick();
            pb_guard.finish_and_clear();
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<30} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
