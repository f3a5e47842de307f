use crate::modules::time_entries::core::collection::TimeEntryCollection;
use crate::modules::time_entries::core::evolve::evolve;
use crate::modules::time_entries::core::fields::TimeEntryField;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::errors::TimecardError;
use crate::modules::time_entries::use_cases::add_time_entry::command::AddTimeEntry;
use crate::modules::time_entries::use_cases::add_time_entry::decide::decide_add_time_entry;
use crate::modules::time_entries::use_cases::add_time_entry::decision::Decision;
use crate::shared::core::draft::DraftBuffer;
use crate::shared::core::modal::ModalState;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shared::core::selection::Selection;
use tracing::{debug, info, warn};

/// State behind the time card screen.
///
/// Owns the committed entries, the add-entry modal with its draft, and the
/// week selection with its picker. One instance per mounted screen.
#[derive(Debug, Clone)]
pub struct TimecardController {
    entries: TimeEntryCollection,
    modal: ModalState<DraftBuffer<TimeEntryField>>,
    weeks: Selection,
    week_picker_open: bool,
}

impl TimecardController {
    pub fn new<I, S>(entries: Vec<TimeEntry>, week_options: I) -> Result<Self, TimecardError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            entries: TimeEntryCollection::with_entries(entries),
            modal: ModalState::Idle,
            weeks: Selection::new(week_options)?,
            week_picker_open: false,
        })
    }

    /// Opens the add-entry modal with an empty draft.
    pub fn open_create(&mut self) {
        debug!("opening time entry draft");
        self.modal = ModalState::Composing(DraftBuffer::new());
    }

    pub fn update_field(
        &mut self,
        field: TimeEntryField,
        value: impl Into<String>,
    ) -> Result<(), TimecardError> {
        let draft = self.modal.draft_mut().ok_or(TimecardError::NotComposing)?;
        draft.set(field, value);
        debug!(%field, "time entry draft updated");
        Ok(())
    }

    /// Commits the draft. On rejection the modal stays open with the draft intact.
    pub fn submit(&mut self) -> Result<(), TimecardError> {
        let draft = self.modal.draft().ok_or(TimecardError::NotComposing)?;
        let command = AddTimeEntry {
            time_entry_id: new_id(),
            draft: draft.snapshot(),
            recorded_at: now_millis(),
        };

        match decide_add_time_entry(&command) {
            Decision::Accepted { events } => {
                let entries = std::mem::take(&mut self.entries);
                self.entries = events.into_iter().fold(entries, evolve);
                self.modal.close();
                info!(
                    time_entry_id = %command.time_entry_id,
                    total_hours = self.entries.total_hours(),
                    "time entry added"
                );
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(%reason, "time entry rejected");
                Err(reason.into())
            }
        }
    }

    /// Closes the add-entry modal, discarding any draft.
    pub fn cancel(&mut self) {
        if self.modal.close().is_some() {
            debug!("time entry draft discarded");
        }
    }

    pub fn is_composing(&self) -> bool {
        self.modal.is_open()
    }

    pub fn draft_value(&self, field: TimeEntryField) -> Option<&str> {
        self.modal.draft().and_then(|draft| draft.get(&field))
    }

    pub fn entries(&self) -> &[TimeEntry] {
        self.entries.all()
    }

    pub fn total_hours(&self) -> f64 {
        self.entries.total_hours()
    }

    pub fn week_options(&self) -> &[String] {
        self.weeks.options()
    }

    pub fn current_week(&self) -> &str {
        self.weeks.current()
    }

    pub fn open_week_picker(&mut self) {
        self.week_picker_open = true;
    }

    pub fn close_week_picker(&mut self) {
        self.week_picker_open = false;
    }

    pub fn is_week_picker_open(&self) -> bool {
        self.week_picker_open
    }

    /// Makes `label` the active week and closes the picker.
    pub fn select_week(&mut self, label: &str) -> Result<(), TimecardError> {
        let changed = self.weeks.select(label)?;
        self.week_picker_open = false;
        info!(previous = %changed.previous, current = %changed.current, "week selected");
        Ok(())
    }
}
