use eframe::egui;
use eframe::egui::{Color32, Stroke, Ui};
use eframe::run_native;
use elimination::grid::GRID_LINE_RGB;
use elimination::{CellLayout, Grid, ToggleEngine};

const GRID_SIZE: usize = 3;
const WINDOW_WIDTH: u32 = 600;
const HEADER_HEIGHT: f32 = 80.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH as f32 + 16.0, WINDOW_WIDTH as f32 + HEADER_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    run_native(
        "Elimination game",
        options,
        Box::new(|_cc| Ok(Box::new(EliminationGui::new()?))),
    )
    .map_err(|err| anyhow::anyhow!("running window: {err}"))
}

struct EliminationGui {
    engine: ToggleEngine,
    layout: CellLayout,
    games_played: u32,
}

impl EliminationGui {
    fn new() -> elimination::Result<Self> {
        Ok(Self {
            engine: fresh_engine()?,
            layout: CellLayout::new(GRID_SIZE, WINDOW_WIDTH),
            games_played: 0,
        })
    }

    fn new_game(&mut self) {
        match fresh_engine() {
            Ok(engine) => {
                self.engine = engine;
                self.games_played += 1;
                log::debug!("started game {}", self.games_played + 1);
            }
            Err(err) => log::error!("could not start a new game: {err}"),
        }
    }

    fn handle_click(&mut self, row: usize, col: usize) {
        if self.engine.is_terminated() {
            return;
        }
        match self.engine.select(row, col) {
            Ok(outcome) if self.engine.is_terminated() => {
                log::info!("Number of hits: {}", outcome.selections);
            }
            Ok(_) => {}
            Err(err) => log::warn!("ignoring click on ({row}, {col}): {err}"),
        }
    }

    fn create_grid(&mut self, ui: &mut Ui) {
        let extent = self.layout.cell_extent() as f32;
        let board = extent * GRID_SIZE as f32;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board, board), egui::Sense::click());

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let local = pointer - rect.min;
                if let Some((row, col)) = self.layout.position_to_cell(local.x, local.y) {
                    self.handle_click(row, col);
                }
            }
        }

        let painter = ui.painter();
        for cell in self.engine.grid().cells() {
            let (x, y) = self.layout.cell_origin(cell.row(), cell.col());
            let pos = rect.min + egui::vec2(x as f32, y as f32);
            let [r, g, b] = cell.color().rgb();
            painter.rect_filled(
                egui::Rect::from_min_size(pos, egui::vec2(extent, extent)),
                0.0,
                Color32::from_rgb(r, g, b),
            );
        }

        let [r, g, b] = GRID_LINE_RGB;
        let stroke = Stroke::new(1.0, Color32::from_rgb(r, g, b));
        for i in 0..=GRID_SIZE {
            let offset = i as f32 * extent;
            painter.line_segment(
                [rect.min + egui::vec2(0.0, offset), rect.min + egui::vec2(board, offset)],
                stroke,
            );
            painter.line_segment(
                [rect.min + egui::vec2(offset, 0.0), rect.min + egui::vec2(offset, board)],
                stroke,
            );
        }
    }
}

fn fresh_engine() -> elimination::Result<ToggleEngine> {
    let grid = Grid::new(GRID_SIZE, &mut rand::rng())?;
    Ok(ToggleEngine::new(grid))
}

impl eframe::App for EliminationGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Elimination game");
            ui.horizontal(|ui| {
                ui.label(format!("Hits: {}", self.engine.selections()));
                ui.label(format!("Lit: {}", self.engine.grid().on_count()));
                if self.engine.is_terminated() {
                    ui.strong(format!("Solved in {} hits", self.engine.selections()));
                }
                if ui.button("New game").clicked() {
                    self.new_game();
                }
            });

            self.create_grid(ui);
        });
    }
}
