//! Main application for the puzzle GUI

use eframe::egui;
use egui::{CentralPanel, Color32, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::board::notation;

/// Main puzzle application
pub struct PuzzleApp {
    state: GameState,
    board_view: BoardView,
    show_rules: bool,
}

impl Default for PuzzleApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            show_rules: true,
        }
    }
}

impl PuzzleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Round (N)").clicked() {
                        self.state.new_round();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_rules, "Movement Rules");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "Goal: {}",
                        notation::cell_name(self.state.board.goal())
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_goal_card(ui);
                ui.add_space(10.0);

                self.render_round_card(ui);
                ui.add_space(10.0);

                self.render_move_card(ui);

                if self.show_rules {
                    ui.add_space(10.0);
                    self.render_rules_card(ui);
                }

                if self.state.round_won {
                    ui.add_space(10.0);
                    self.render_victory_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Q").size(22.0).strong().color(TARGET_PIECE));
            ui.add_space(4.0);
            ui.label(
                RichText::new("QUEEN'S ESCAPE")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("a chess sliding puzzle")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render goal card
    fn render_goal_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("🎯 GOAL").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Slide the red queen to {}",
                    notation::cell_name(self.state.board.goal())
                ))
                .size(14.0)
                .strong()
                .color(TEXT_PRIMARY),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new("The goal square is shown in blue. A piece may slide only into the free cell.")
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render round progress card
    fn render_round_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("⏱ ROUND").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let elapsed = self.state.round_timer.elapsed();
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let status = if self.state.round_won {
                        RichText::new("solved").size(12.0).color(WIN_HIGHLIGHT)
                    } else {
                        RichText::new(format!("{} moves", self.state.moves))
                            .size(12.0)
                            .color(STATUS_OK)
                    };
                    ui.label(status);
                });
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Rounds won: {}", self.state.rounds_won))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render move entry card
    fn render_move_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("⌨ MOVE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.state.move_input)
                        .hint_text("c2")
                        .desired_width(64.0)
                        .font(egui::TextStyle::Monospace),
                );

                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Play").clicked() || submitted {
                    self.state.submit_move_input();
                    response.request_focus();
                }
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new("column letter + row digit, or click a piece")
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render movement rules card
    fn render_rules_card(&self, ui: &mut egui::Ui) {
        const RULES: [(&str, &str); 4] = [
            ("Q", "any adjacent cell"),
            ("K R", "orthogonal step"),
            ("B", "diagonal step"),
            ("N", "knight hop"),
        ];

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("♟ MOVEMENT").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            for (symbols, rule) in RULES {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(symbols)
                            .size(12.0)
                            .strong()
                            .monospace()
                            .color(TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(rule).size(11.0).color(TEXT_SECONDARY));
                    });
                });
            }
        });
    }

    /// Render victory card
    fn render_victory_card(&mut self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(WIN_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("🎉 VICTORY")
                            .size(12.0)
                            .color(Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);

                    ui.label(
                        RichText::new(format!(
                            "Queen home on {}",
                            notation::cell_name(self.state.board.goal())
                        ))
                        .size(15.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{} moves in {:.1}s",
                            self.state.moves,
                            self.state.round_timer.elapsed().as_secs_f32()
                        ))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::Label::new(
                                        RichText::new("🔄 New Round")
                                            .size(14.0)
                                            .strong()
                                            .color(TEXT_PRIMARY),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .clicked()
                            {
                                self.state.new_round();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0).color(STATUS_WARNING));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = BOARD_PANEL_BG;

            let clicked = self
                .board_view
                .show(ui, &self.state.board, self.state.round_won);

            if let Some(pos) = clicked {
                self.state.play(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // Leave keys alone while the move entry box is being typed into
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            // N - New round
            if i.key_pressed(egui::Key::N) {
                self.state.new_round();
            }

            // R - Toggle rules card
            if i.key_pressed(egui::Key::R) {
                self.show_rules = !self.show_rules;
            }
        });
    }
}

impl eframe::App for PuzzleApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the round timer ticking on screen
        if !self.state.round_won {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
