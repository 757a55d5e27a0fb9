//! Interactive menu state machine.
//!
//! The organizer walks these states, printing on entry to each one and reading
//! a line of input in the states that prompt:
//!
//! ```text
//! Empty
//! Summary -> Prompt -> Execute(MoveByDate) -> Done
//!                   -> ConfirmDelete -> Execute(Delete) -> Done
//!                                    -> Cancelled
//!                   -> Execute(List) -> Done
//!                   -> Cancelled
//! ```
//!
//! Transitions are pure so every edge can be checked without touching the
//! filesystem.

/// The choice read at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    /// Move screenshots into `YYYY-MM` folders.
    MoveByDate,
    /// Delete screenshots after confirmation.
    Delete,
    /// List screenshots with their sizes.
    List,
    /// Do nothing.
    Cancel,
}

impl ActionChoice {
    /// Parses a menu line. Anything other than `1`, `2` or `3` cancels.
    ///
    /// # Examples
    ///
    /// ```
    /// use shotsort::menu::ActionChoice;
    ///
    /// assert_eq!(ActionChoice::parse("1\n"), ActionChoice::MoveByDate);
    /// assert_eq!(ActionChoice::parse("4"), ActionChoice::Cancel);
    /// assert_eq!(ActionChoice::parse("move"), ActionChoice::Cancel);
    /// ```
    pub fn parse(line: &str) -> Self {
        match line.trim_end_matches(['\r', '\n']) {
            "1" => ActionChoice::MoveByDate,
            "2" => ActionChoice::Delete,
            "3" => ActionChoice::List,
            _ => ActionChoice::Cancel,
        }
    }
}

/// Answer to the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Only `yes` confirms, ignoring case and surrounding whitespace.
    pub fn parse(line: &str) -> Self {
        if line.trim().eq_ignore_ascii_case("yes") {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// An action that runs against the screenshot set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveByDate,
    Delete,
    List,
}

/// States of the organizer menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Nothing was found.
    Empty,
    /// Print count, total size and file types.
    Summary,
    /// Show the action menu and read a choice.
    Prompt,
    /// Ask before deleting.
    ConfirmDelete,
    /// Run an action.
    Execute(Action),
    /// The user backed out.
    Cancelled,
    /// An action ran to completion.
    Done,
}

impl MenuState {
    /// Returns the starting state for a set of `file_count` screenshots.
    pub fn initial(file_count: usize) -> Self {
        if file_count == 0 {
            MenuState::Empty
        } else {
            MenuState::Summary
        }
    }

    /// Returns true for states that read a line of input.
    pub fn needs_input(&self) -> bool {
        matches!(self, MenuState::Prompt | MenuState::ConfirmDelete)
    }

    /// Returns true for states with no outgoing transition.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MenuState::Empty | MenuState::Cancelled | MenuState::Done
        )
    }

    /// Advances the machine. `input` is only consulted by prompting states;
    /// missing input in those states is treated as an empty line.
    pub fn next(self, input: Option<&str>) -> Self {
        let line = input.unwrap_or("");
        match self {
            MenuState::Summary => MenuState::Prompt,
            MenuState::Prompt => match ActionChoice::parse(line) {
                ActionChoice::MoveByDate => MenuState::Execute(Action::MoveByDate),
                ActionChoice::Delete => MenuState::ConfirmDelete,
                ActionChoice::List => MenuState::Execute(Action::List),
                ActionChoice::Cancel => MenuState::Cancelled,
            },
            MenuState::ConfirmDelete => match Confirmation::parse(line) {
                Confirmation::Confirmed => MenuState::Execute(Action::Delete),
                Confirmation::Declined => MenuState::Cancelled,
            },
            MenuState::Execute(_) => MenuState::Done,
            terminal => terminal,
        }
    }
}
