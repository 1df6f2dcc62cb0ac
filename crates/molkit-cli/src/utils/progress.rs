use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use molkit::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::bar_style())
            .with_message("Relaxing");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::RelaxationStart { iterations } => {
                    pb_guard.reset();
                    pb_guard.set_length(iterations);
                    pb_guard.set_position(0);
                    pb_guard.set_message("Relaxing");
                }
                Progress::IterationFinish { index, max_force } => {
                    pb_guard.set_position(index + 1);
                    pb_guard.set_message(format!("max |F| {max_force:.2e}"));
                }
                Progress::RelaxationFinish => {
                    let len = pb_guard.length().unwrap_or(0);
                    pb_guard.set_position(len);
                    pb_guard.finish_with_message("✓ Done");
                }
                Progress::Message(msg) => {
                    if !pb_guard.is_finished() {
                        pb_guard.println(format!("  {}", msg));
                    } else {
                        pb_guard.set_message(msg);
                    }
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Failed to create bar style template")
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_tracks_relaxation_steps() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::RelaxationStart { iterations: 30 });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.length(), Some(30));
            assert_eq!(pb.position(), 0);
            assert!(!pb.is_finished());
        }

        callback(Progress::IterationFinish {
            index: 4,
            max_force: 0.125,
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.position(), 5);
            assert_eq!(pb.message(), "max |F| 1.25e-1");
        }

        callback(Progress::RelaxationFinish);
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.position(), 30);
            assert_eq!(pb.message(), "✓ Done");
        }

        callback(Progress::Message("Max bond deviation".to_string()));
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Max bond deviation");
        }
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::RelaxationStart { iterations: 2 });
            callback(Progress::IterationFinish {
                index: 0,
                max_force: 1.0,
            });
            callback(Progress::RelaxationFinish);
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✓ Done");
    }
}
