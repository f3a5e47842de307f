/// Visibility of a creation or edit modal.
///
/// The draft only exists while the modal is open, so a closed modal can never
/// hold stale input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState<D> {
    Idle,
    Composing(D),
}

impl<D> Default for ModalState<D> {
    fn default() -> Self {
        ModalState::Idle
    }
}

impl<D> ModalState<D> {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Composing(_))
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            ModalState::Composing(draft) => Some(draft),
            ModalState::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            ModalState::Composing(draft) => Some(draft),
            ModalState::Idle => None,
        }
    }

    /// Closes the modal and hands back whatever draft it held.
    pub fn close(&mut self) -> Option<D> {
        match std::mem::replace(self, ModalState::Idle) {
            ModalState::Composing(draft) => Some(draft),
            ModalState::Idle => None,
        }
    }
}
