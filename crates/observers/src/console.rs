use std::fmt::Display;

use descent_core::Observer;

/// Appends every observed event to a caller-owned text log.
///
/// Each event is rendered through its [`Display`] impl, one line per event,
/// so a front end can show the log as a console. The observer never requests
/// an action.
///
/// ```
/// use descent_core::Scalar;
/// use descent_observers::ConsoleLog;
/// use descent_solvers::optimization::golden_section;
///
/// let mut lines = Vec::new();
/// let objective = Scalar(|x: f64| (x - 1.0).powi(2));
///
/// golden_section::minimize(
///     &objective,
///     [0.0, 3.0],
///     &golden_section::Config::default(),
///     ConsoleLog::new(&mut lines),
/// )
/// .unwrap();
///
/// assert!(lines[0].starts_with("iteration 1:"));
/// assert!(lines.last().unwrap().starts_with("converged"));
/// ```
#[derive(Debug)]
pub struct ConsoleLog<'a> {
    lines: &'a mut Vec<String>,
}

impl<'a> ConsoleLog<'a> {
    /// Creates an observer that appends to `lines`.
    pub fn new(lines: &'a mut Vec<String>) -> Self {
        Self { lines }
    }

    /// Appends a free-form line, such as a heading between runs.
    pub fn note(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl<E: Display, A> Observer<E, A> for ConsoleLog<'_> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.lines.push(event.to_string());
        None
    }
}
