use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown option: {label}")]
    UnknownOption { label: String },

    #[error("a selection needs at least one option")]
    NoOptions,
}

/// Emitted once per successful `select`, so the caller can close its picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub previous: String,
    pub current: String,
}

/// Exactly one active label among a fixed, ordered option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    options: Vec<String>,
    current: usize,
}

impl Selection {
    /// Builds a selection whose active option is the first one.
    pub fn new<I, S>(options: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(SelectionError::NoOptions);
        }
        Ok(Self {
            options,
            current: 0,
        })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn current(&self) -> &str {
        &self.options[self.current]
    }

    pub fn is_current(&self, label: &str) -> bool {
        self.current() == label
    }

    pub fn select(&mut self, label: &str) -> Result<SelectionChanged, SelectionError> {
        let index = self
            .options
            .iter()
            .position(|option| option == label)
            .ok_or_else(|| SelectionError::UnknownOption {
                label: label.to_string(),
            })?;
        let previous = self.current().to_string();
        self.current = index;
        Ok(SelectionChanged {
            previous,
            current: self.current().to_string(),
        })
    }
}

#[cfg(test)]
mod selection_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> Selection {
        Selection::new(["Current Week", "Last Week", "Week of Jan 6-12"]).unwrap()
    }

    #[rstest]
    fn it_should_default_to_the_first_option(before_each: Selection) {
        assert_eq!(before_each.current(), "Current Week");
        assert_eq!(before_each.options().len(), 3);
    }

    #[rstest]
    fn it_should_select_a_known_option(mut before_each: Selection) {
        let changed = before_each.select("Last Week").unwrap();
        assert_eq!(before_each.current(), "Last Week");
        assert_eq!(
            changed,
            SelectionChanged {
                previous: "Current Week".to_string(),
                current: "Last Week".to_string(),
            }
        );
    }

    #[rstest]
    fn it_should_reject_an_unknown_option(mut before_each: Selection) {
        let result = before_each.select("Next Week");
        assert_eq!(
            result,
            Err(SelectionError::UnknownOption {
                label: "Next Week".to_string()
            })
        );
        assert_eq!(before_each.current(), "Current Week");
    }

    #[rstest]
    fn it_should_signal_reselecting_the_active_option(mut before_each: Selection) {
        let changed = before_each.select("Current Week").unwrap();
        assert_eq!(changed.previous, changed.current);
        assert!(before_each.is_current("Current Week"));
    }

    #[rstest]
    fn it_should_refuse_an_empty_option_list() {
        let result = Selection::new(Vec::<String>::new());
        assert_eq!(result, Err(SelectionError::NoOptions));
    }
}
