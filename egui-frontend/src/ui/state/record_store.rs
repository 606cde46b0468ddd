//! # Record Store Module
//!
//! This module owns the two record lists of the app: tasks and rewards.
//!
//! ## Purpose:
//! The store is the single owner of every record. It is passed by reference to
//! whatever needs the records (list views, the bingo board, the wheel and the
//! command dispatcher) instead of living in shared global state.

use shared::{default_rewards, default_tasks, Reward, Task};

use crate::config::ListConfig;
use super::list_state::RecordList;

/// Owner of the task and reward lists
#[derive(Debug, Clone)]
pub struct RecordStore {
    pub tasks: RecordList<Task>,
    pub rewards: RecordList<Reward>,
}

impl RecordStore {
    /// Store seeded with the starter tasks and rewards
    pub fn new(settings: &ListConfig) -> Self {
        Self::with_records(default_tasks(), default_rewards(), settings)
    }

    pub fn with_records(tasks: Vec<Task>, rewards: Vec<Reward>, settings: &ListConfig) -> Self {
        Self {
            tasks: RecordList::new(tasks, settings.clone()),
            rewards: RecordList::new(rewards, settings.clone()),
        }
    }
}
