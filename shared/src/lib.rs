/// Text given to a task created with the "Add Task" button
pub const NEW_TASK_TEXT: &str = "New task";

/// Text given to a reward created with the "Add Reward" button
pub const NEW_REWARD_TEXT: &str = "New Reward";

/// Common behaviour of every entry shown in a scrolling list
pub trait Record {
    /// Create a fresh, incomplete record with the given text
    fn from_text(text: &str) -> Self
    where
        Self: Sized;

    fn text(&self) -> &str;

    fn set_text(&mut self, text: String);

    fn is_complete(&self) -> bool;

    /// Flip the completion flag
    fn toggle_complete(&mut self);
}

/// A to-do item
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Description shown in the list and on the bingo board
    pub text: String,
    /// Set by double-clicking the task in the to-do list
    pub complete: bool,
    /// Mirrors the marked state of the bingo cell bound to this task
    pub bingo_marked: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            complete: false,
            bingo_marked: false,
        }
    }
}

impl Record for Task {
    fn from_text(text: &str) -> Self {
        Task::new(text)
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn toggle_complete(&mut self) {
        self.complete = !self.complete;
    }
}

/// Something nice to look forward to once tasks are done
#[derive(Debug, Clone, PartialEq)]
pub struct Reward {
    pub text: String,
    /// True once the reward has been redeemed
    pub complete: bool,
}

impl Reward {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            complete: false,
        }
    }
}

impl Record for Reward {
    fn from_text(text: &str) -> Self {
        Reward::new(text)
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn toggle_complete(&mut self) {
        self.complete = !self.complete;
    }
}

/// Tasks the app starts with
pub fn default_tasks() -> Vec<Task> {
    [
        "Go Shopping",
        "Clean my Room",
        "Finish Coursework",
        "Call mom",
        "Go on a walk",
        "Read a book",
        "Write some code",
        "Pay bills",
        "Plan weekend trip",
        "Check emails",
        "Walk the dog",
        "Organize workspace",
        "Fix bugs in the project",
        "Check trains",
    ]
    .into_iter()
    .map(Task::new)
    .collect()
}

/// Rewards the app starts with
pub fn default_rewards() -> Vec<Reward> {
    [
        "Have a Hot Chocolate",
        "Takeaway tonight",
        "Movie night",
        "Weekend trip",
        "Spa evening",
        "Gift card",
        "Chocolate",
        "Watch YouTube",
    ]
    .into_iter()
    .map(Reward::new)
    .collect()
}

/// Put every word on its own line, collapsing runs of whitespace.
///
/// Used to fit task descriptions into the small bingo cells.
pub fn wrap_words(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join("\n")
}
