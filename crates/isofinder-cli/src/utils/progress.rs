use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use isofinder::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Running totals of an isotope sweep, shown next to the element bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepTotals {
    pub elements: usize,
    pub accepted: usize,
    pub known: usize,
}

impl SweepTotals {
    fn message(&self) -> String {
        format!("{} accepted, {} known", self.accepted, self.known)
    }
}

struct SweepDisplay {
    bar: Option<ProgressBar>,
    totals: SweepTotals,
}

/// Renders search progress as one bar over the element table.
///
/// Only the sweep is drawn; phase boundaries and messages go to the log.
#[derive(Clone)]
pub struct CliProgressHandler {
    display: Arc<Mutex<SweepDisplay>>,
    draw_target: fn() -> ProgressDrawTarget,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr)
    }

    fn with_draw_target(draw_target: fn() -> ProgressDrawTarget) -> Self {
        Self {
            display: Arc::new(Mutex::new(SweepDisplay {
                bar: None,
                totals: SweepTotals::default(),
            })),
            draw_target,
        }
    }

    /// Totals accumulated since the last sweep started.
    pub fn totals(&self) -> SweepTotals {
        self.display
            .lock()
            .map(|display| display.totals)
            .unwrap_or_default()
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let display = self.display.clone();
        let draw_target = self.draw_target;

        Box::new(move |progress: Progress| {
            let Ok(mut display) = display.lock() else {
                warn!("Sweep display mutex was poisoned; dropping progress event.");
                return;
            };

            match progress {
                Progress::TaskStart { total_steps } => {
                    let bar = ProgressBar::with_draw_target(Some(total_steps), draw_target())
                        .with_style(Self::element_style())
                        .with_message(SweepTotals::default().message());
                    display.bar = Some(bar);
                    display.totals = SweepTotals::default();
                }
                Progress::ElementSwept {
                    symbol,
                    accepted,
                    known,
                } => {
                    display.totals.elements += 1;
                    display.totals.accepted += accepted;
                    display.totals.known += known;
                    let message = display.totals.message();
                    if let Some(bar) = &display.bar {
                        bar.set_prefix(symbol);
                        bar.set_message(message);
                    }
                }
                Progress::TaskIncrement => {
                    if let Some(bar) = &display.bar {
                        bar.inc(1);
                    }
                }
                Progress::TaskFinish => {
                    let message = display.totals.message();
                    if let Some(bar) = display.bar.take() {
                        bar.set_prefix("done");
                        bar.finish_with_message(message);
                    }
                }
                Progress::PhaseStart { name } => debug!(phase = name, "Search phase started."),
                Progress::PhaseFinish => {}
                Progress::Message(msg) => debug!("{}", msg),
            }
        })
    }

    fn element_style() -> ProgressStyle {
        ProgressStyle::with_template("{prefix:>4.bold} [{bar:30.cyan/blue}] {pos}/{len} elements, {msg}")
            .expect("Failed to create sweep bar template")
            .progress_chars("=> ")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn hidden_handler() -> CliProgressHandler {
        CliProgressHandler::with_draw_target(ProgressDrawTarget::hidden)
    }

    fn swept(symbol: &str, accepted: usize, known: usize) -> Progress {
        Progress::ElementSwept {
            symbol: symbol.to_string(),
            accepted,
            known,
        }
    }

    #[test]
    fn handler_starts_without_a_bar() {
        let handler = hidden_handler();
        assert!(handler.display.lock().unwrap().bar.is_none());
        assert_eq!(handler.totals(), SweepTotals::default());
    }

    #[test]
    fn element_bar_tracks_symbol_and_running_totals() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        callback(Progress::TaskStart { total_steps: 10 });
        {
            let display = handler.display.lock().unwrap();
            let bar = display.bar.as_ref().unwrap();
            assert_eq!(bar.length(), Some(10));
            assert_eq!(bar.message(), "0 accepted, 0 known");
        }

        callback(swept("F", 12, 1));
        callback(Progress::TaskIncrement);
        callback(swept("Tc", 5, 1));
        callback(Progress::TaskIncrement);
        {
            let display = handler.display.lock().unwrap();
            let bar = display.bar.as_ref().unwrap();
            assert_eq!(bar.prefix(), "Tc");
            assert_eq!(bar.position(), 2);
            assert_eq!(bar.message(), "17 accepted, 2 known");
        }
        assert_eq!(
            handler.totals(),
            SweepTotals {
                elements: 2,
                accepted: 17,
                known: 2,
            }
        );

        callback(Progress::TaskFinish);
        assert!(handler.display.lock().unwrap().bar.is_none());
        assert_eq!(handler.totals().accepted, 17);
    }

    #[test]
    fn new_sweep_resets_totals() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        callback(Progress::TaskStart { total_steps: 1 });
        callback(swept("Co", 3, 1));
        callback(Progress::TaskFinish);
        callback(Progress::TaskStart { total_steps: 1 });

        assert_eq!(handler.totals(), SweepTotals::default());
    }

    #[test]
    fn phase_and_message_events_leave_the_display_alone() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart { name: "Ranking" });
        callback(Progress::Message("Identified 4/6 known medical isotopes".to_string()));
        callback(Progress::PhaseFinish);

        assert!(handler.display.lock().unwrap().bar.is_none());
        assert_eq!(handler.totals(), SweepTotals::default());
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = hidden_handler();
        let callback = handler.get_callback();
        callback(Progress::TaskStart { total_steps: 2 });

        thread::spawn(move || {
            callback(swept("Y", 4, 1));
            callback(Progress::TaskIncrement);
        })
        .join()
        .unwrap();

        assert_eq!(handler.totals().known, 1);
        let display = handler.display.lock().unwrap();
        assert_eq!(display.bar.as_ref().unwrap().position(), 1);
    }
}
