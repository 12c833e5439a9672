use log::debug;

use crate::data::model::{Selection, Trip, TripTable};

// ---------------------------------------------------------------------------
// Session state machine
// ---------------------------------------------------------------------------

/// Where an interactive session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Asking for city, month and day.
    Prompting,
    /// Reading and filtering the chosen dataset.
    Loading(Selection),
    /// Printing the four reports.
    Reporting,
    /// Offering raw rows, one page at a time.
    RawDataPaging,
    /// Asking whether to start over.
    RestartDecision,
    Terminated,
}

/// State of one interactive session. Each iteration owns its filtered table
/// and drops it on restart.
#[derive(Debug)]
pub struct Session {
    pub state: SessionState,
    /// Filtered table of the current iteration (None until loaded).
    pub table: Option<TripTable>,
    /// Next raw row to show.
    pub offset: usize,
    pub page_size: usize,
}

impl Session {
    pub fn new(page_size: usize) -> Self {
        Session {
            state: SessionState::Prompting,
            table: None,
            offset: 0,
            page_size,
        }
    }

    fn transition(&mut self, next: SessionState) {
        debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn selected(&mut self, selection: Selection) {
        self.transition(SessionState::Loading(selection));
    }

    /// Ingest the filtered table for this iteration.
    pub fn loaded(&mut self, table: TripTable) {
        self.table = Some(table);
        self.transition(SessionState::Reporting);
    }

    /// Loading failed; nothing to report or page through.
    pub fn load_failed(&mut self) {
        self.table = None;
        self.transition(SessionState::RestartDecision);
    }

    /// Reports are done. An empty selection skips raw paging.
    pub fn reported(&mut self) {
        self.offset = 0;
        let has_rows = self.table.as_ref().is_some_and(|t| !t.is_empty());
        if has_rows {
            self.transition(SessionState::RawDataPaging);
        } else {
            self.transition(SessionState::RestartDecision);
        }
    }

    /// True until the first page has been shown.
    pub fn at_first_page(&self) -> bool {
        self.offset == 0
    }

    /// Rows `[offset, offset + page_size)` and advance the offset. Past the
    /// end of the table this is an empty slice.
    pub fn next_page(&mut self) -> &[Trip] {
        let offset = self.offset;
        self.offset = offset.saturating_add(self.page_size);
        match &self.table {
            Some(table) => table.page(offset, self.page_size),
            None => &[],
        }
    }

    pub fn paging_done(&mut self) {
        self.transition(SessionState::RestartDecision);
    }

    pub fn restart(&mut self) {
        self.table = None;
        self.offset = 0;
        self.transition(SessionState::Prompting);
    }

    pub fn terminate(&mut self) {
        self.table = None;
        self.transition(SessionState::Terminated);
    }
}
