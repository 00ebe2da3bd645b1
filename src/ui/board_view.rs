//! Board rendering for the Chain Reaction window

use std::f32::consts::TAU;

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Player, Pos, COLS, ROWS};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks are only reported when `accept_clicks` is set; clicks that
    /// miss the grid are dropped.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        accept_clicks: bool,
    ) -> Option<Pos> {
        let available = ui.available_size() - Vec2::splat(2.0 * BOARD_PADDING);
        self.cell_size = (available.x / COLS as f32)
            .min(available.y / ROWS as f32)
            .clamp(24.0, CELL_SIZE);

        let size = Vec2::new(self.cell_size * COLS as f32, self.cell_size * ROWS as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        for pos in Pos::all() {
            self.draw_cell(&painter, pos, board.get(pos));
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if accept_clicks && response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|pointer| self.screen_to_board(pointer));
        }
        None
    }

    /// Draw one cell with its orbs arranged on a ring
    fn draw_cell(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let rect = self.cell_rect(pos);
        painter.rect_filled(
            rect.shrink(CELL_GAP / 2.0),
            CornerRadius::same(CELL_ROUNDING),
            CELL_BG,
        );

        let Some(owner) = cell.owner() else {
            return;
        };
        let color = match owner {
            Player::Red => RED_ORB,
            Player::Blue => BLUE_ORB,
        };

        let scale = self.cell_size / CELL_SIZE;
        let ring = self.cell_size * ORB_RING_RATIO;
        let step = TAU / f32::from(pos.critical_mass());
        for k in 0..cell.count() {
            let angle = f32::from(k) * step;
            let center = rect.center() + Vec2::new(angle.cos(), angle.sin()) * ring;
            painter.circle_filled(center, ORB_RADIUS * scale, color);
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(CELL_GAP / 2.0);
        painter.rect_stroke(
            rect,
            CornerRadius::same(CELL_ROUNDING),
            Stroke::new(2.0, LAST_MOVE_MARKER),
            egui::StrokeKind::Inside,
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                f32::from(pos.col) * self.cell_size,
                f32::from(pos.row) * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(row, col).ok()
    }
}
