//! # Bingo Board Logic
//!
//! Layout and state of the board. Cell `k` (row-major) stands for `tasks[k]`
//! when that task exists and is a marked "-" placeholder otherwise.

use eframe::egui;
use log::debug;
use shared::{wrap_words, Task};

use crate::ui::commands::Command;
use crate::ui::components::widgets::{pressed_inside, RenderContext, Widget};
use crate::ui::input::InputEvent;
use crate::ui::state::RecordStore;

use super::renderer::draw_square;

/// Squares per row and per column
pub const GRID_SIZE: usize = 4;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Top-left corner of the first square
pub const BOARD_ORIGIN: egui::Pos2 = egui::pos2(130.0, 30.0);
pub const CELL_SIZE: f32 = 80.0;
pub const CELL_GAP: f32 = 10.0;

/// Text of squares with no task behind them
pub const PLACEHOLDER_TEXT: &str = "-";

/// What a square stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellBinding {
    /// Index into the task list
    Task(usize),
    /// Filler for boards with fewer than sixteen tasks
    Placeholder,
}

/// One cell of the board
#[derive(Debug, Clone, PartialEq)]
pub struct BingoSquare {
    pub rect: egui::Rect,
    /// Task text with one word per line
    pub text: String,
    pub marked: bool,
    pub binding: CellBinding,
}

impl BingoSquare {
    fn for_task(rect: egui::Rect, index: usize, task: &Task) -> Self {
        Self {
            rect,
            text: wrap_words(&task.text),
            marked: task.bingo_marked,
            binding: CellBinding::Task(index),
        }
    }

    fn placeholder(rect: egui::Rect) -> Self {
        Self {
            rect,
            text: PLACEHOLDER_TEXT.to_string(),
            marked: true,
            binding: CellBinding::Placeholder,
        }
    }
}

impl Widget for BingoSquare {
    fn render(&mut self, ctx: &RenderContext<'_>) {
        draw_square(ctx.painter, self);
    }

    fn handle_input(&mut self, event: &InputEvent, store: &mut RecordStore) -> Option<Command> {
        if !pressed_inside(event, self.rect) {
            return None;
        }

        // Placeholders stay marked
        if let CellBinding::Task(index) = self.binding {
            if let Some(task) = store.tasks.records_mut().get_mut(index) {
                self.marked = !self.marked;
                task.bingo_marked = self.marked;
                debug!("🎯 Bingo square for '{}' marked: {}", task.text, self.marked);
            }
        }
        None
    }
}

/// The 4×4 board
#[derive(Debug, Clone)]
pub struct BingoBoard {
    squares: Vec<BingoSquare>,
}

impl Default for BingoBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl BingoBoard {
    /// An all-placeholder board; the first refresh fills it
    pub fn new() -> Self {
        let mut board = Self { squares: Vec::with_capacity(CELL_COUNT) };
        board.refresh(&[]);
        board
    }

    /// Screen rectangle of cell `k`
    pub fn cell_rect(k: usize) -> egui::Rect {
        let row = (k / GRID_SIZE) as f32;
        let col = (k % GRID_SIZE) as f32;
        let step = CELL_SIZE + CELL_GAP;
        egui::Rect::from_min_size(
            BOARD_ORIGIN + egui::vec2(col * step, row * step),
            egui::vec2(CELL_SIZE, CELL_SIZE),
        )
    }

    /// Rebuild every square from the current tasks
    pub fn refresh(&mut self, tasks: &[Task]) {
        self.squares = (0..CELL_COUNT)
            .map(|k| match tasks.get(k) {
                Some(task) => BingoSquare::for_task(Self::cell_rect(k), k, task),
                None => BingoSquare::placeholder(Self::cell_rect(k)),
            })
            .collect();
    }

    pub fn squares(&self) -> &[BingoSquare] {
        &self.squares
    }

    /// The square standing for `tasks[index]`, if that task is on the board
    pub fn cell_for_task(&self, index: usize) -> Option<&BingoSquare> {
        self.squares
            .iter()
            .find(|square| square.binding == CellBinding::Task(index))
    }
}

impl Widget for BingoBoard {
    fn render(&mut self, ctx: &RenderContext<'_>) {
        self.refresh(ctx.store.tasks.records());
        for square in &mut self.squares {
            square.render(ctx);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, store: &mut RecordStore) -> Option<Command> {
        // Tasks may have changed since the last frame
        self.refresh(store.tasks.records());
        self.squares
            .iter_mut()
            .find_map(|square| square.handle_input(event, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListConfig;

    fn tasks(count: usize) -> Vec<Task> {
        (0..count).map(|i| Task::new(format!("Task number {}", i))).collect()
    }

    fn press_cell(k: usize) -> InputEvent {
        InputEvent::PointerPressed {
            pos: BingoBoard::cell_rect(k).center(),
            time_ms: 0,
        }
    }

    #[test]
    fn test_cell_layout() {
        assert_eq!(BingoBoard::cell_rect(0).min, egui::pos2(130.0, 30.0));
        assert_eq!(BingoBoard::cell_rect(5).min, egui::pos2(220.0, 120.0));
        assert_eq!(BingoBoard::cell_rect(15).max, egui::pos2(480.0, 380.0));
    }

    #[test]
    fn test_refresh_with_many_tasks_binds_first_sixteen() {
        let mut list = tasks(20);
        list[3].bingo_marked = true;

        let mut board = BingoBoard::new();
        board.refresh(&list);

        assert_eq!(board.squares().len(), CELL_COUNT);
        for (k, square) in board.squares().iter().enumerate() {
            assert_eq!(square.binding, CellBinding::Task(k));
            assert_eq!(square.marked, list[k].bingo_marked);
        }
        assert_eq!(board.squares()[2].text, "Task\nnumber\n2");
        assert!(board.cell_for_task(16).is_none());
    }

    #[test]
    fn test_refresh_with_few_tasks_adds_placeholders() {
        let mut board = BingoBoard::new();
        board.refresh(&shared::default_tasks());

        for square in &board.squares()[14..] {
            assert_eq!(square.binding, CellBinding::Placeholder);
            assert_eq!(square.text, PLACEHOLDER_TEXT);
            assert!(square.marked);
        }
        assert_eq!(board.squares()[13].text, "Check\ntrains");
    }

    #[test]
    fn test_toggle_writes_back_to_task() {
        let mut store = RecordStore::new(&ListConfig::default());
        let mut board = BingoBoard::new();

        board.handle_input(&press_cell(4), &mut store);
        assert!(store.tasks.records()[4].bingo_marked);
        assert_eq!(board.cell_for_task(4).map(|s| s.marked), Some(true));

        board.handle_input(&press_cell(4), &mut store);
        assert!(!store.tasks.records()[4].bingo_marked);
    }

    #[test]
    fn test_marks_mirror_tasks_after_refresh() {
        let mut store = RecordStore::new(&ListConfig::default());
        let mut board = BingoBoard::new();
        board.handle_input(&press_cell(1), &mut store);

        // A task edited elsewhere shows up on the next refresh
        store.tasks.records_mut()[7].bingo_marked = true;
        board.refresh(store.tasks.records());

        for (i, task) in store.tasks.records().iter().enumerate() {
            assert_eq!(board.cell_for_task(i).map(|s| s.marked), Some(task.bingo_marked));
        }
    }

    #[test]
    fn test_placeholder_press_ignored() {
        let mut store = RecordStore::new(&ListConfig::default());
        let mut board = BingoBoard::new();

        board.handle_input(&press_cell(15), &mut store);
        assert!(board.squares()[15].marked);
        assert!(store.tasks.records().iter().all(|t| !t.bingo_marked));
    }

    #[test]
    fn test_press_in_gap_ignored() {
        let mut store = RecordStore::new(&ListConfig::default());
        let mut board = BingoBoard::new();

        let gap = InputEvent::PointerPressed { pos: egui::pos2(215.0, 60.0), time_ms: 0 };
        board.handle_input(&gap, &mut store);
        assert!(store.tasks.records().iter().all(|t| !t.bingo_marked));
    }
}
