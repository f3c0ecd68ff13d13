use descent_core::{Objective, Observer};

use crate::optimization::{Action, Point};

use super::{Config, Error, Event, Solution, Status, bracket::Bracket};

/// Core golden section search implementation.
pub(super) fn search<P, Obs>(
    objective: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: Objective<1>,
    Obs: Observer<Event, Action>,
{
    let [a, b] = bracket;
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(Error::InvalidRange { a, b });
    }

    let mut bracket = Bracket::new(a, b, config.split());
    let mut left = eval(objective, bracket.inner_left)?;
    let mut right = eval(objective, bracket.inner_right)?;
    let mut trace = Vec::new();
    let mut iters = 0;

    let status = loop {
        if let Some(status) = config.check(bracket.width(), iters) {
            break status;
        }

        let event = Event::Iteration {
            iter: iters + 1,
            bracket: bracket.bounds(),
            left,
            right,
        };
        log::trace!("golden section: {event}");
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }
        iters += 1;

        // Exactly one new evaluation per iteration: the surviving interior
        // point keeps its objective.
        if config.shrinks_left(left.objective, right.objective) {
            let x = bracket.shrink_left();
            left = right;
            right = eval(objective, x)?;
            trace.push(x);
        } else {
            let x = bracket.shrink_right();
            right = left;
            left = eval(objective, x)?;
            trace.push(x);
        }
    };

    let estimate = eval(objective, bracket.midpoint())?;
    let event = Event::Finished {
        status,
        iters,
        bracket: bracket.bounds(),
        estimate,
    };
    log::debug!("golden section: {event}");
    observer.observe(&event);

    Ok(Solution {
        status,
        x: estimate.x,
        objective: estimate.objective,
        bracket: bracket.bounds(),
        iters,
        trace,
    })
}

/// Evaluates the objective at `x`, rejecting NaN.
fn eval<P: Objective<1>>(objective: &P, x: f64) -> Result<Point, Error> {
    let value = objective.value(&[x]);
    if value.is_nan() {
        return Err(Error::NotANumber { x });
    }
    Ok(Point::new(x, value))
}
