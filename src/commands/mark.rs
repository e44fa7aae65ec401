//! Mark and unmark commands - record or remove finds

use crate::{FlashrError, world::World};

type Result<T> = std::result::Result<T, FlashrError>;

/// Which way the mutation goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkAction {
    Mark,
    Unmark,
}

/// Execute the mark/unmark command over a batch of codes
///
/// Returns the number of codes whose state actually changed; duplicates and
/// no-op removals count as unchanged, not as errors.
pub fn execute(
    world: &mut World,
    codes: &[String],
    action: MarkAction,
    quiet: bool,
) -> Result<usize> {
    let mut changed = 0;

    for code in codes {
        let did_change = match action {
            MarkAction::Mark => world.mark(code)?,
            MarkAction::Unmark => world.unmark(code)?,
        };

        if did_change {
            changed += 1;
        }

        if !quiet {
            match (action, did_change) {
                (MarkAction::Mark, true) => println!("Marked: {code}"),
                (MarkAction::Mark, false) => println!("Already found: {code}"),
                (MarkAction::Unmark, true) => println!("Unmarked: {code}"),
                (MarkAction::Unmark, false) => println!("Not found, skipped: {code}"),
            }
        }
    }

    Ok(changed)
}
