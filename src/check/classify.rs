// Unit state classification

use crate::check::problem::Problem;

/// Exit status substituted when the last exit status of a unit cannot be read.
/// It is non-zero so an unreadable auto-restarting unit is still reported.
pub const EXIT_STATUS_UNAVAILABLE: i32 = -1;

const LOADED: &str = "loaded";
const INACTIVE: &str = "inactive";
const FAILED: &str = "failed";
const DEAD: &str = "dead";
const AUTO_RESTART: &str = "auto-restart";

/// Detect the problem of a single unit, if any.
///
/// `exit_code_lookup` is only called when the unit is loaded, not failed and
/// in the `auto-restart` sub-state: a scheduled restart after a clean exit is
/// healthy, one after a non-zero exit is a crash loop.
pub fn classify<F>(
    unit_name: &str,
    load_state: &str,
    active_state: &str,
    sub_state: &str,
    mut exit_code_lookup: F,
) -> Option<Problem>
where
    F: FnMut(&str) -> i32,
{
    if load_state != LOADED {
        if active_state != INACTIVE {
            return Some(Problem::NotLoadedButNotInactive);
        }
        if sub_state != DEAD {
            return Some(Problem::NotLoadedButNotDead);
        }
        return Some(Problem::NotLoaded);
    }

    if active_state == FAILED {
        return Some(Problem::Failed);
    }

    match sub_state {
        AUTO_RESTART => {
            let exit_code = exit_code_lookup(unit_name);
            tracing::debug!("{} is in auto-restart, last exit status {}", unit_name, exit_code);
            (exit_code != 0).then_some(Problem::ActivatingAutoRestart)
        }
        DEAD => Some(Problem::Dead),
        FAILED => Some(Problem::Failed),
        _ => None,
    }
}
