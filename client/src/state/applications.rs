//! Application-list state for the dashboard board.
//!
//! DESIGN
//! ======
//! Board operations work on indices into the original list, so grouping into
//! columns never reorders or copies the records the page handed in.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use crate::net::types::{Application, ApplicationStatus};

/// Dashboard application list backed by `/api/applications`.
#[derive(Clone, Debug, Default)]
pub struct ApplicationsState {
    pub items: Vec<Application>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Horizontal move on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

/// One board column: its status and the indices of its records, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnIndices {
    pub status: ApplicationStatus,
    pub indices: Vec<usize>,
}

/// Split records into one column per status, in board order.
#[must_use]
pub fn group_by_status(applications: &[Application]) -> Vec<ColumnIndices> {
    let mut columns: Vec<ColumnIndices> = ApplicationStatus::ALL
        .into_iter()
        .map(|status| ColumnIndices { status, indices: Vec::new() })
        .collect();
    for (i, app) in applications.iter().enumerate() {
        columns[app.status().index()].indices.push(i);
    }
    columns
}

/// Applications still waiting to be sent: the "actions à traiter" count.
#[must_use]
pub fn pending_action_count(applications: &[Application]) -> usize {
    applications
        .iter()
        .filter(|app| app.status() == ApplicationStatus::ToApply)
        .count()
}

/// Move the record at `index` one column over.
///
/// Returns `(from, to)` when the record moved; `None` when the index is out
/// of range or the record already sits in the edge column.
pub fn move_application(
    applications: &mut [Application],
    index: usize,
    direction: MoveDirection,
) -> Option<(ApplicationStatus, ApplicationStatus)> {
    let app = applications.get_mut(index)?;
    let from = app.status();
    let to = match direction {
        MoveDirection::Left => from.previous()?,
        MoveDirection::Right => from.next()?,
    };
    app.set_status(to);
    Some((from, to))
}

/// Undo a move of the record with `id` from `from` to `to`.
///
/// Only applies while the record still sits in `to`; a later move wins.
/// Returns whether the record was put back.
pub fn restore_status(
    applications: &mut [Application],
    id: &str,
    to: ApplicationStatus,
    from: ApplicationStatus,
) -> bool {
    let Some(app) = applications.iter_mut().find(|app| app.id().as_deref() == Some(id)) else {
        return false;
    };
    if app.status() != to {
        return false;
    }
    app.set_status(from);
    true
}
