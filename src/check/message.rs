// Check message formatting

use crate::check::aggregate::Finding;
use crate::check::problem::Problem;

/// Render findings as `"<label>: unit unit <label>: unit "`.
///
/// The label is written whenever the problem differs from the previous
/// finding, so only adjacent findings share a label.
pub fn format_findings<'a, I>(findings: I) -> String
where
    I: IntoIterator<Item = &'a Finding>,
{
    let mut message = String::new();
    let mut last_problem: Option<Problem> = None;

    for finding in findings {
        if last_problem != Some(finding.problem) {
            message.push_str(finding.problem.label());
            message.push_str(": ");
            last_problem = Some(finding.problem);
        }
        message.push_str(&finding.unit);
        message.push(' ');
    }

    message
}
