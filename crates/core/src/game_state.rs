//! Game state module - the placement and scoring engine
//!
//! This module ties together all core components: grid, blocks, generator,
//! validator, and scoring. It owns the tray, commits placements, clears lines,
//! keeps the single undo slot, and decides when the game is over.
//!
//! The engine has two macro-states: active and game over. Once over, every
//! mutating operation except [`GameState::reset`] (and undo of the move that
//! ended the game) is rejected; read accessors keep answering.

use thiserror::Error;

use crate::block::{all_used, Block, BlockSet};
use crate::config::{ConfigError, Rules};
use crate::grid::Grid;
use crate::rng::{BlockGenerator, RandomSource, SimpleRng};
use crate::scoring::{calculate_level, calculate_line_score};
use crate::snapshot::{BlockSnapshot, GameSnapshot, StatsSnapshot};
use crate::types::{Anchor, GameAction, PlacementReport, MAX_BLOCKS_PER_SET};
use crate::undo::UndoSnapshot;
use crate::validator;

/// Why an operation was rejected. A rejected operation changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("block index {0} is out of range")]
    InvalidIndex(usize),
    #[error("no block is selected")]
    NothingSelected,
    #[error("block {0} has already been placed")]
    BlockAlreadyUsed(usize),
    #[error("block does not fit at ({}, {})", .0.x, .0.y)]
    PlacementBlocked(Anchor),
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("game is over")]
    GameAlreadyOver,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::InvalidIndex(_) => "invalid_index",
            MoveError::NothingSelected => "nothing_selected",
            MoveError::BlockAlreadyUsed(_) => "block_already_used",
            MoveError::PlacementBlocked(_) => "placement_blocked",
            MoveError::NothingToUndo => "nothing_to_undo",
            MoveError::GameAlreadyOver => "game_already_over",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    rules: Rules,
    grid: Grid,
    blocks: BlockSet,
    generator: BlockGenerator<R>,
    selected: Option<usize>,
    undo: Option<UndoSnapshot>,
    /// Last placement event (consumed by observers).
    last_event: Option<PlacementReport>,
    /// Seed the generator was created from (0 for injected sources).
    seed: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    blocks_placed: u32,
    perfect_clears: u32,
    best_clear: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with default rules and the given RNG seed
    pub fn new(seed: u32) -> Self {
        let rules = Rules::default();
        Self::build(rules, Grid::new(rules.grid_size), BlockGenerator::seeded(seed), seed)
    }

    /// Create a new game with custom rules and the given RNG seed
    pub fn with_rules(rules: Rules, seed: u32) -> Result<Self, ConfigError> {
        rules.validate()?;
        let generator = BlockGenerator::new(SimpleRng::new(seed), rules.palette_size);
        Ok(Self::build(rules, Grid::new(rules.grid_size), generator, seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing blocks from an injected random source
    pub fn with_rng(rules: Rules, rng: R) -> Result<Self, ConfigError> {
        rules.validate()?;
        let generator = BlockGenerator::new(rng, rules.palette_size);
        Ok(Self::build(rules, Grid::new(rules.grid_size), generator, 0))
    }

    /// Start from a prepared grid instead of an empty one.
    ///
    /// The grid must match the configured size, hold only palette colors and
    /// contain no full row or column.
    pub fn with_grid(rules: Rules, grid: Grid, rng: R) -> Result<Self, ConfigError> {
        rules.validate()?;
        if grid.size() != rules.grid_size {
            return Err(ConfigError::GridSize(grid.size()));
        }
        if let Some(&bad) = grid.cells().iter().find(|&&c| c > rules.palette_size) {
            return Err(ConfigError::CellColor(bad));
        }
        if !grid.full_rows().is_empty() || !grid.full_cols().is_empty() {
            return Err(ConfigError::FullLine);
        }
        let generator = BlockGenerator::new(rng, rules.palette_size);
        Ok(Self::build(rules, grid, generator, 0))
    }

    fn build(rules: Rules, grid: Grid, mut generator: BlockGenerator<R>, seed: u32) -> Self {
        let blocks = generator.next_set(rules.blocks_per_set);
        let game_over = !validator::has_any_valid_move(&grid, &blocks);
        Self {
            rules,
            grid,
            blocks,
            generator,
            selected: None,
            undo: None,
            last_event: None,
            seed,
            episode_id: 0,
            score: 0,
            level: calculate_level(&rules, 0),
            lines: 0,
            game_over,
            blocks_placed: 0,
            perfect_clears: 0,
            best_clear: 0,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.and_then(|i| self.blocks.get(i))
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn undo_available(&self) -> bool {
        self.undo.is_some()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn blocks_placed(&self) -> u32 {
        self.blocks_placed
    }

    pub fn perfect_clears(&self) -> u32 {
        self.perfect_clears
    }

    /// Most lines cleared by a single placement this game
    pub fn best_clear(&self) -> u32 {
        self.best_clear
    }

    pub fn last_event(&self) -> Option<PlacementReport> {
        self.last_event
    }

    /// Take and clear the last placement event.
    pub fn take_last_event(&mut self) -> Option<PlacementReport> {
        self.last_event.take()
    }

    /// Whether any unused block in the tray fits anywhere
    pub fn has_any_valid_move(&self) -> bool {
        validator::has_any_valid_move(&self.grid, &self.blocks)
    }

    /// Whether tray slot `index` holds an unused block that fits at `anchor`
    pub fn can_place(&self, index: usize, anchor: Anchor) -> bool {
        self.blocks
            .get(index)
            .is_some_and(|b| !b.used() && validator::can_place(&self.grid, b, anchor))
    }

    /// Every anchor where tray slot `index` fits (empty if used or out of range)
    pub fn valid_anchors(&self, index: usize) -> impl Iterator<Item = Anchor> + '_ {
        self.blocks
            .get(index)
            .filter(|b| !b.used())
            .into_iter()
            .flat_map(move |b| validator::valid_anchors(&self.grid, b.shape()))
    }

    fn check_available(&self, index: usize) -> Result<&Block, MoveError> {
        if self.game_over {
            return Err(MoveError::GameAlreadyOver);
        }
        let block = self.blocks.get(index).ok_or(MoveError::InvalidIndex(index))?;
        if block.used() {
            return Err(MoveError::BlockAlreadyUsed(index));
        }
        Ok(block)
    }

    /// Mark tray slot `index` as the active block for the next placement
    pub fn select_block(&mut self, index: usize) -> Result<(), MoveError> {
        self.check_available(index)?;
        self.selected = Some(index);
        Ok(())
    }

    /// Place the selected block at `anchor`
    pub fn place_selected(&mut self, anchor: Anchor) -> Result<PlacementReport, MoveError> {
        if self.game_over {
            return Err(MoveError::GameAlreadyOver);
        }
        let index = self.selected.ok_or(MoveError::NothingSelected)?;
        self.commit_placement(index, anchor)
    }

    /// Commit tray slot `index` to the grid at `anchor`.
    ///
    /// Clears every full row and column (detected together), scores the clear,
    /// refills an exhausted tray, and re-evaluates game over.
    pub fn commit_placement(
        &mut self,
        index: usize,
        anchor: Anchor,
    ) -> Result<PlacementReport, MoveError> {
        let block = *self.check_available(index)?;
        if !validator::can_place(&self.grid, &block, anchor) {
            return Err(MoveError::PlacementBlocked(anchor));
        }

        self.undo = Some(UndoSnapshot {
            grid: self.grid.clone(),
            blocks: self.blocks.clone(),
            score: self.score,
            lines: self.lines,
            blocks_placed: self.blocks_placed,
            perfect_clears: self.perfect_clears,
            best_clear: self.best_clear,
        });

        // Fit was checked above, so the commit always writes.
        self.grid.commit(block.shape(), anchor.x, anchor.y, block.color());
        self.blocks[index].mark_used();
        self.selected = None;
        self.blocks_placed = self.blocks_placed.saturating_add(1);

        let cleared = self.grid.clear_full_lines();
        let lines_cleared = cleared.count();

        let mut score_delta = 0;
        let mut perfect_clear = false;
        if lines_cleared > 0 {
            let result = calculate_line_score(&self.rules, lines_cleared, self.level);
            score_delta = result.total;
            self.score = self.score.saturating_add(score_delta);
            self.lines = self.lines.saturating_add(lines_cleared as u32);
            self.level = calculate_level(&self.rules, self.lines);

            self.best_clear = self.best_clear.max(lines_cleared as u32);
            perfect_clear = self.grid.is_empty();
            if perfect_clear {
                self.perfect_clears += 1;
            }
        }

        let refilled = all_used(&self.blocks);
        if refilled {
            self.blocks = self.generator.next_set(self.rules.blocks_per_set);
        }

        self.game_over = !validator::has_any_valid_move(&self.grid, &self.blocks);

        let report = PlacementReport {
            block_index: index as u8,
            anchor,
            rows_cleared: cleared.rows.len() as u8,
            cols_cleared: cleared.cols.len() as u8,
            lines_cleared: lines_cleared as u32,
            score_delta,
            refilled,
            perfect_clear,
            game_over: self.game_over,
        };
        self.last_event = Some(report);
        Ok(report)
    }

    /// Roll back the last placement.
    ///
    /// Allowed once per placement, including the placement that ended the
    /// game; the restored state predates that evaluation so the game resumes.
    pub fn undo(&mut self) -> Result<(), MoveError> {
        let snap = self.undo.take().ok_or(MoveError::NothingToUndo)?;

        self.grid = snap.grid;
        self.blocks = snap.blocks;
        self.score = snap.score;
        self.lines = snap.lines;
        self.level = calculate_level(&self.rules, self.lines);
        self.blocks_placed = snap.blocks_placed;
        self.perfect_clears = snap.perfect_clears;
        self.best_clear = snap.best_clear;
        self.selected = None;
        self.last_event = None;
        self.game_over = !validator::has_any_valid_move(&self.grid, &self.blocks);

        Ok(())
    }

    /// Discard the current game and start over on an empty grid.
    ///
    /// The generator keeps running, so the new tray differs from the old one.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.rules.grid_size);
        self.blocks = self.generator.next_set(self.rules.blocks_per_set);
        self.selected = None;
        self.undo = None;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.score = 0;
        self.lines = 0;
        self.level = calculate_level(&self.rules, 0);
        self.blocks_placed = 0;
        self.perfect_clears = 0;
        self.best_clear = 0;
        self.game_over = !validator::has_any_valid_move(&self.grid, &self.blocks);
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::SelectBlock(index) => self.select_block(index as usize).is_ok(),
            GameAction::Place(anchor) => self.place_selected(anchor).is_ok(),
            GameAction::Undo => self.undo().is_ok(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.grid);
        out.grid_size = self.grid.size();

        out.blocks = [None; MAX_BLOCKS_PER_SET];
        for (slot, block) in out.blocks.iter_mut().zip(self.blocks.iter()) {
            *slot = Some(BlockSnapshot::from(*block));
        }

        out.selected = self.selected.map(|i| i as u8);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.undo_available = self.undo.is_some();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.stats = StatsSnapshot {
            blocks_placed: self.blocks_placed,
            perfect_clears: self.perfect_clears,
            best_clear: self.best_clear,
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn blocks_mut(&mut self) -> &mut BlockSet {
        &mut self.blocks
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;
    use crate::types::EMPTY;

    fn single() -> Block {
        Block::new(Shape::parse(&["#"]), 3)
    }

    fn tray(state: &mut GameState, blocks: &[Block]) {
        let set = state.blocks_mut();
        set.clear();
        set.extend(blocks.iter().copied());
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.episode_id, 0);
        assert_eq!(state.blocks.len(), 3);
        assert!(state.blocks.iter().all(|b| !b.used()));
        assert!(!state.undo_available());
        assert!(state.grid.is_empty());
    }

    #[test]
    fn test_same_seed_same_tray() {
        let a = GameState::new(77);
        let b = GameState::new(77);
        assert_eq!(a.blocks(), b.blocks());
    }

    #[test]
    fn test_select_block() {
        let mut state = GameState::new(1);
        assert!(state.select_block(2).is_ok());
        assert_eq!(state.selected(), Some(2));
        assert_eq!(state.select_block(3), Err(MoveError::InvalidIndex(3)));
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_select_used_block_rejected() {
        let mut state = GameState::new(1);
        tray(&mut state, &[single(), single(), single()]);
        state.commit_placement(0, Anchor::new(0, 0)).unwrap();
        assert_eq!(state.select_block(0), Err(MoveError::BlockAlreadyUsed(0)));
    }

    #[test]
    fn test_commit_clears_selection() {
        let mut state = GameState::new(1);
        tray(&mut state, &[single(), single(), single()]);
        state.select_block(1).unwrap();
        state.place_selected(Anchor::new(4, 4)).unwrap();
        assert_eq!(state.selected(), None);
        assert!(state.blocks[1].used());
        assert_eq!(state.grid.get(4, 4), Some(3));
    }

    #[test]
    fn test_place_without_selection() {
        let mut state = GameState::new(1);
        assert_eq!(
            state.place_selected(Anchor::new(0, 0)),
            Err(MoveError::NothingSelected)
        );
    }

    #[test]
    fn test_blocked_placement_changes_nothing() {
        let mut state = GameState::new(1);
        tray(&mut state, &[single(), single(), single()]);
        state.grid_mut().set(2, 2, 1);
        let before = state.snapshot();

        assert_eq!(
            state.commit_placement(0, Anchor::new(2, 2)),
            Err(MoveError::PlacementBlocked(Anchor::new(2, 2)))
        );
        assert_eq!(state.snapshot(), before);
        assert!(!state.undo_available());
    }

    #[test]
    fn test_row_clear_scores_and_counts() {
        let mut state = GameState::new(1);
        for x in 0..7 {
            state.grid_mut().set(x, 5, 2);
        }
        tray(&mut state, &[single(), single(), single()]);

        let report = state.commit_placement(0, Anchor::new(7, 5)).unwrap();
        assert_eq!(report.lines_cleared, 1);
        assert_eq!(report.rows_cleared, 1);
        assert_eq!(report.cols_cleared, 0);
        assert_eq!(report.score_delta, 100);
        assert!(report.perfect_clear);
        assert_eq!(state.score, 100);
        assert_eq!(state.lines, 1);
        assert_eq!(state.perfect_clears, 1);
        assert_eq!(state.best_clear, 1);
        assert!(state.grid.is_empty());
    }

    #[test]
    fn test_score_uses_level_before_clear() {
        let mut state = GameState::new(1);
        state.lines = 9;
        state.level = 1;
        for x in 0..7 {
            state.grid_mut().set(x, 0, 1);
        }
        for y in 1..8 {
            state.grid_mut().set(7, y, 1);
        }
        tray(&mut state, &[single(), single(), single()]);

        let report = state.commit_placement(0, Anchor::new(7, 0)).unwrap();
        assert_eq!(report.lines_cleared, 2);
        assert_eq!(report.score_delta, 100 * 3);
        assert_eq!(state.lines, 11);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_refill_after_last_block() {
        let mut state = GameState::new(1);
        tray(&mut state, &[single(), single(), single()]);
        state.commit_placement(0, Anchor::new(0, 0)).unwrap();
        state.commit_placement(2, Anchor::new(1, 0)).unwrap();
        assert!(state.blocks[0].used() && state.blocks[2].used());

        let report = state.commit_placement(1, Anchor::new(2, 0)).unwrap();
        assert!(report.refilled);
        assert_eq!(state.blocks.len(), 3);
        assert!(state.blocks.iter().all(|b| !b.used()));
    }

    #[test]
    fn test_undo_restores_and_is_single_shot() {
        let mut state = GameState::new(1);
        for x in 0..7 {
            state.grid_mut().set(x, 3, 4);
        }
        tray(&mut state, &[single(), single(), single()]);
        let before = state.snapshot();

        state.commit_placement(0, Anchor::new(7, 3)).unwrap();
        assert!(state.undo_available());
        assert_eq!(state.score, 100);

        assert!(state.undo().is_ok());
        let after = state.snapshot();
        assert_eq!(after.grid, before.grid);
        assert_eq!(after.score, before.score);
        assert_eq!(after.lines, before.lines);
        assert_eq!(after.blocks, before.blocks);
        assert!(!state.blocks[0].used());

        assert_eq!(state.undo(), Err(MoveError::NothingToUndo));
        assert_eq!(state.snapshot(), after);
    }

    #[test]
    fn test_undo_after_refill_restores_original_tray() {
        let mut state = GameState::new(1);
        let original = [single(), Block::new(Shape::parse(&["##"]), 5), single()];
        tray(&mut state, &original);
        state.commit_placement(0, Anchor::new(0, 0)).unwrap();
        state.commit_placement(1, Anchor::new(0, 1)).unwrap();
        let report = state.commit_placement(2, Anchor::new(0, 2)).unwrap();
        assert!(report.refilled);

        state.undo().unwrap();
        assert_eq!(state.blocks.len(), 3);
        assert!(state.blocks[0].used());
        assert!(state.blocks[1].used());
        assert!(!state.blocks[2].used());
        assert_eq!(state.blocks[1], {
            let mut b = original[1];
            b.mark_used();
            b
        });
        assert_eq!(state.grid.get(0, 2), Some(EMPTY));
    }

    #[test]
    fn test_game_over_rejects_moves_and_undo_revives() {
        let mut state = GameState::new(1);
        // Lone holes on the diagonal and at (5,0), (0,4); the only domino
        // gap is (0,0)-(1,0), and filling it completes no line.
        let holes = [(1, 0), (5, 0), (0, 4)];
        for y in 0..8 {
            for x in 0..8 {
                let filled = x != y && !holes.contains(&(x, y));
                state.grid_mut().set(x, y, if filled { 1 } else { 0 });
            }
        }
        assert!(state.grid.full_rows().is_empty() && state.grid.full_cols().is_empty());
        let domino = Block::new(Shape::parse(&["##"]), 2);
        tray(&mut state, &[domino, domino, domino]);
        assert!(state.has_any_valid_move());

        let report = state.commit_placement(0, Anchor::new(0, 0)).unwrap();
        assert_eq!(report.lines_cleared, 0);
        assert!(report.game_over);
        assert!(state.game_over());

        assert_eq!(state.select_block(1), Err(MoveError::GameAlreadyOver));
        assert_eq!(
            state.commit_placement(1, Anchor::new(6, 7)),
            Err(MoveError::GameAlreadyOver)
        );
        assert!(!state.apply_action(GameAction::Place(Anchor::new(7, 7))));

        state.undo().unwrap();
        assert!(!state.game_over());
        assert!(state.has_any_valid_move());
        assert_eq!(state.grid.get(0, 0), Some(EMPTY));
    }

    #[test]
    fn test_reset_starts_fresh_episode() {
        let mut state = GameState::new(9);
        tray(&mut state, &[single(), single(), single()]);
        state.commit_placement(0, Anchor::new(0, 0)).unwrap();
        state.select_block(1).unwrap();

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
        assert!(!state.game_over);
        assert!(state.grid.is_empty());
        assert!(!state.undo_available());
        assert_eq!(state.selected(), None);
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.blocks_placed(), 0);
        assert!(state.blocks.iter().all(|b| !b.used()));
    }

    #[test]
    fn test_apply_action() {
        let mut state = GameState::new(1);
        tray(&mut state, &[single(), single(), single()]);
        assert!(state.apply_action(GameAction::SelectBlock(0)));
        assert!(state.apply_action(GameAction::Place(Anchor::new(1, 1))));
        assert!(state.apply_action(GameAction::Undo));
        assert!(!state.apply_action(GameAction::Undo));
        assert!(!state.apply_action(GameAction::SelectBlock(7)));
        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.episode_id(), 1);
    }

    #[test]
    fn test_last_event_is_taken_once() {
        let mut state = GameState::new(1);
        tray(&mut state, &[single(), single(), single()]);
        let report = state.commit_placement(2, Anchor::new(3, 3)).unwrap();
        assert_eq!(state.take_last_event(), Some(report));
        assert_eq!(state.take_last_event(), None);
    }

    #[test]
    fn test_valid_anchors_for_slot() {
        let mut state = GameState::new(1);
        tray(&mut state, &[single(), single(), single()]);
        assert_eq!(state.valid_anchors(0).count(), 64);
        state.commit_placement(0, Anchor::new(0, 0)).unwrap();
        assert_eq!(state.valid_anchors(0).count(), 0);
        assert_eq!(state.valid_anchors(1).count(), 63);
        assert_eq!(state.valid_anchors(9).count(), 0);
    }

    #[test]
    fn test_with_grid_validation() {
        let grid = Grid::new(6);
        assert_eq!(
            GameState::with_grid(Rules::default(), grid, SimpleRng::new(1)).unwrap_err(),
            ConfigError::GridSize(6)
        );

        let mut grid = Grid::new(8);
        grid.set(0, 0, 9);
        assert_eq!(
            GameState::with_grid(Rules::default(), grid, SimpleRng::new(1)).unwrap_err(),
            ConfigError::CellColor(9)
        );
    }

    #[test]
    fn test_with_grid_rejects_full_lines() {
        let mut grid = Grid::new(8);
        for x in 0..8 {
            grid.set(x, 3, 1);
        }
        assert_eq!(
            GameState::with_grid(Rules::default(), grid.clone(), SimpleRng::new(1)).unwrap_err(),
            ConfigError::FullLine
        );

        grid.set(5, 3, EMPTY);
        for y in 0..8 {
            grid.set(2, y, 4);
        }
        assert_eq!(
            GameState::with_grid(Rules::default(), grid.clone(), SimpleRng::new(1)).unwrap_err(),
            ConfigError::FullLine
        );

        grid.set(2, 6, EMPTY);
        let state = GameState::with_grid(Rules::default(), grid, SimpleRng::new(1)).unwrap();
        assert_eq!(state.grid.filled_count(), 7 + 6);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(MoveError::InvalidIndex(4).code(), "invalid_index");
        assert_eq!(MoveError::GameAlreadyOver.code(), "game_already_over");
        assert_eq!(
            MoveError::PlacementBlocked(Anchor::new(1, 2)).to_string(),
            "block does not fit at (1, 2)"
        );
    }
}
