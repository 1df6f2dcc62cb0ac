/// Events emitted while the layout engine works on a molecule.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    RelaxationStart { iterations: u64 },
    /// One integration step finished; `max_force` is the largest per-atom force magnitude
    /// seen during that step.
    IterationFinish { index: u64, max_force: f64 },
    RelaxationFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback; silent when none is set.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    pub fn is_silent(&self) -> bool {
        self.callback.is_none()
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn silent_reporter_ignores_events() {
        let reporter = ProgressReporter::new();
        assert!(reporter.is_silent());
        reporter.report(Progress::RelaxationFinish);
    }

    #[test]
    fn callback_receives_events_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        reporter.report(Progress::RelaxationStart { iterations: 2 });
        reporter.report(Progress::Message("hello".into()));

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                Progress::RelaxationStart { iterations: 2 },
                Progress::Message("hello".into())
            ]
        );
    }
}
