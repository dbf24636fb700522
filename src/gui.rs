//! Native window frontend built on egui.

use egui::{Rect, RichText, Vec2};
use tictactoe_board::{ActivationEvent, Position};
use tracing::{info, instrument};

use crate::{Session, Settings};

const LABEL_SIZE: f32 = 20.0;
const MARK_SIZE: f32 = 30.0;
const CELL_GAP: f32 = 5.0;

/// egui application showing the current-player label over a 3x3 grid.
pub struct BoardApp {
    session: Session,
    cell_size: f32,
    cell_rects: [Rect; 9],
}

impl BoardApp {
    /// Creates the application with a fresh session.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            session: Session::new(),
            cell_size: *settings.window().cell_size(),
            cell_rects: [Rect::NOTHING; 9],
        }
    }

    /// Returns the session backing this window.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Screen rectangle of a cell button as laid out in the last frame.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        self.cell_rects[pos.to_index()]
    }

    /// Lays out one frame and applies the click it produced, if any.
    pub fn show(&mut self, ctx: &egui::Context) {
        let mut activated = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(self.session.turn_label()).size(LABEL_SIZE).strong());
                ui.add_space(CELL_GAP * 2.0);
                activated = board_grid(ui, &self.session, self.cell_size, &mut self.cell_rects);
            });
        });

        if let Some(event) = activated {
            self.session.dispatch(event);
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

/// Draws the nine cell buttons and reports which one was clicked this frame.
fn board_grid(
    ui: &mut egui::Ui,
    session: &Session,
    cell_size: f32,
    cell_rects: &mut [Rect; 9],
) -> Option<ActivationEvent> {
    let mut clicked = None;

    egui::Grid::new("board")
        .spacing(Vec2::splat(CELL_GAP))
        .show(ui, |ui| {
            for row in 0..3 {
                for col in 0..3 {
                    let text = RichText::new(session.cell_text(row, col))
                        .size(MARK_SIZE)
                        .strong();
                    let button = egui::Button::new(text).min_size(Vec2::splat(cell_size));
                    let response = ui.add(button);
                    cell_rects[row * 3 + col] = response.rect;
                    if response.clicked() {
                        clicked = ActivationEvent::at(row, col).ok();
                    }
                }
                ui.end_row();
            }
        });

    clicked
}

/// Opens the window and runs until it is closed.
#[instrument(skip(settings))]
pub fn run_gui(settings: &Settings) -> anyhow::Result<()> {
    let window = settings.window();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title().as_str())
            .with_inner_size([*window.width(), *window.height()])
            .with_resizable(*window.resizable()),
        ..Default::default()
    };

    info!(title = %window.title(), "Opening window");
    let app = BoardApp::new(settings);
    eframe::run_native(
        window.title(),
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Window failed: {}", e))?;

    info!("Window closed");
    Ok(())
}
