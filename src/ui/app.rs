//! Main application for the Chain Reaction window

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Player;
use crate::config::GameConfig;
use crate::engine::MoveSource;
use crate::harness::POLL_INTERVAL;
use crate::results::ResultLog;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Main Chain Reaction application
pub struct ChainReactionApp {
    state: GameState,
    board_view: BoardView,
}

impl ChainReactionApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: GameConfig,
        results: Option<ResultLog>,
    ) -> Self {
        Self {
            state: GameState::new(config, results),
            board_view: BoardView::default(),
        }
    }

    /// Render the side panel with scores and AI statistics
    fn render_side_panel(&self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(200.0)
            .max_width(240.0)
            .frame(Frame::new().fill(BACKGROUND).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("CHAIN REACTION").size(20.0).strong().color(TEXT_PRIMARY));
                let games = self.state.config().games;
                if games > 1 {
                    let shown = (self.state.game_number + 1).min(games);
                    ui.label(RichText::new(format!("Game {shown} of {games}")).size(11.0).color(TEXT_MUTED));
                }
                ui.add_space(12.0);

                self.render_score_card(ui);
                ui.add_space(10.0);
                self.render_ai_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CELL_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        let board = self.state.game.board();
        let turn = self.state.game.turn();

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ORBS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for (player, color) in [(Player::Red, RED_ORB), (Player::Blue, BLUE_ORB)] {
                ui.horizontal(|ui| {
                    let marker = if player == turn { "▶" } else { " " };
                    ui.label(RichText::new(marker).size(12.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(player.name()).size(14.0).strong().color(color));
                    let who = if self.state.is_ai(player) { "AI" } else { "You" };
                    ui.label(RichText::new(who).size(10.0).color(TEXT_MUTED));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(board.score(player).to_string()).size(14.0).color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let engine = self.state.config().engine;
            ui.label(
                RichText::new(format!("depth {} / {}", engine.depth, engine.heuristic))
                    .size(11.0)
                    .color(TEXT_PRIMARY),
            );

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("thinking {:.2}s", elapsed.as_secs_f32()))
                        .size(12.0)
                        .color(TEXT_WARNING),
                );
            }

            if let Some(result) = &self.state.last_ai_result {
                ui.add_space(4.0);
                if let Some(pos) = result.best_move {
                    ui.label(RichText::new(format!("last move {pos}")).size(11.0).color(TEXT_PRIMARY));
                }
                let detail = match result.source {
                    MoveSource::Search => format!(
                        "score {}  {} nodes  {}ms",
                        result.score, result.nodes, result.time_ms
                    ),
                    MoveSource::Indecision => "random move (no decision)".to_string(),
                    MoveSource::Overrun => "random move (out of time)".to_string(),
                };
                ui.label(RichText::new(detail).size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render the status line
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(BACKGROUND).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.state.status()).size(14.0).color(TEXT_PRIMARY));
                    if let Some(msg) = &self.state.message {
                        ui.add_space(12.0);
                        ui.label(RichText::new(msg).size(12.0).color(TEXT_WARNING));
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BACKGROUND).inner_margin(BOARD_PADDING))
            .show(ctx, |ui| {
                let accept_clicks = self.state.is_human_turn();
                let clicked = self.board_view.show(
                    ui,
                    self.state.game.board(),
                    self.state.game.last_move(),
                    accept_clicks,
                );

                if let Some(pos) = clicked {
                    if let Err(msg) = self.state.try_play(pos) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }
}

impl eframe::App for ChainReactionApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.state.tick();
        if self.state.all_done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.render_side_panel(ctx);
        self.render_status_bar(ctx);
        self.render_board(ctx);

        // Keep polling the worker and the end-of-game pause
        if self.state.is_ai_thinking() || self.state.is_ai_turn() || self.state.finished_at.is_some() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}
