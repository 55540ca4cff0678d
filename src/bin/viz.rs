use std::env;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use bz_oscillator::config::AppConfig;
use bz_oscillator::sim::{self, RunConfig, RunResult};

/// Usage: `bz-viz [sweep | <config.json>]`
fn main() -> eframe::Result {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = match env::args().nth(1).as_deref() {
        None => AppConfig::default(),
        Some("sweep") => AppConfig {
            run: RunConfig::default_sweep(),
            ..AppConfig::default()
        },
        Some(path) => AppConfig::load(path).unwrap_or_else(|err| {
            tracing::error!("cannot load {}: {}", path, err);
            std::process::exit(2);
        }),
    };

    let runs = sim::run(&config.run, &config.sim).unwrap_or_else(|err| {
        tracing::error!("integration failed: {}", err);
        std::process::exit(1);
    });

    let app = BzViz { runs };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1500.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native("BZ Oscillator", options, Box::new(|_| Ok(Box::new(app))))
}

struct BzViz {
    runs: Vec<RunResult>,
}

impl eframe::App for BzViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Belousov-Zhabotinsky oscillator (RK4)");
            if let Some(first) = self.runs.first() {
                ui.label(format!(
                    "Runs: {}  |  h = {}  |  samples per run: {}",
                    self.runs.len(),
                    first.trajectory.step_size(),
                    first.trajectory.len(),
                ));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let plot_w = available.x / 3.0 - 12.0;
            let plot_h = if self.runs.len() == 1 {
                available.y - 40.0
            } else {
                available.y / 2.0 - 40.0
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                // Figures of two parameter settings each.
                for (fig, pair) in self.runs.chunks(2).enumerate() {
                    if self.runs.len() > 1 {
                        ui.separator();
                        ui.strong(format!("Figure {}", fig + 1));
                    }
                    for run in pair {
                        run_row(ui, run, plot_w, plot_h);
                    }
                }
            });
        });
    }
}

/// Phase portrait, x vs t and y vs t for one parameter pair.
fn run_row(ui: &mut egui::Ui, run: &RunResult, width: f32, height: f32) {
    let traj = &run.trajectory;
    let step = (traj.len() / 2000).max(1);
    let tag = format!("a={:.1}, b={:.1}", run.params.a, run.params.b);

    let series = |f: fn(f64, f64, f64) -> [f64; 2]| -> PlotPoints {
        traj.samples()
            .step_by(step)
            .map(|(t, x, y)| f(t, x, y))
            .collect()
    };

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(format!("Phase Portrait ({tag})"));
            Plot::new(("phase", run.index))
                .width(width)
                .height(height)
                .x_axis_label("x(t)")
                .y_axis_label("y(t)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("y vs x", series(|_, x, y| [x, y])));
                });
        });

        ui.vertical(|ui| {
            ui.label(format!("x vs t ({tag})"));
            Plot::new(("x_t", run.index))
                .width(width)
                .height(height)
                .x_axis_label("t")
                .y_axis_label("x(t)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("x", series(|t, x, _| [t, x])));
                });
        });

        ui.vertical(|ui| {
            ui.label(format!("y vs t ({tag})"));
            Plot::new(("y_t", run.index))
                .width(width)
                .height(height)
                .x_axis_label("t")
                .y_axis_label("y(t)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("y", series(|t, _, y| [t, y])));
                });
        });
    });
}
