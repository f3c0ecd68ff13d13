/// Actions an observer can take while a solver is running.
///
/// Actions returned in response to a solver's final event are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the best estimate found so far.
    StopEarly,
}
