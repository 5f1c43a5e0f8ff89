use chrono::Local;
use eframe::{App, Frame, egui};
use egui::{Align2, Color32, FontId, Pos2, Rect};
use std::time::Duration;

use crate::clock::{REFERENCE_HEIGHT, format_date, format_time, gradient_bands, scaled_font_size};
use crate::settings::{AppSettings, ClockSettings};

const TICK: Duration = Duration::from_millis(200);
const GRADIENT_BANDS: usize = 96;
const TIME_FONT: f32 = 64.0;
const DATE_FONT: f32 = 20.0;
const MIN_FONT: f32 = 10.0;

/// Digital clock window
pub struct ClockApp {
    pub clock: ClockSettings,
}

impl Default for ClockApp {
    fn default() -> Self {
        Self::new(AppSettings::load().clock)
    }
}

impl ClockApp {
    pub fn new(clock: ClockSettings) -> Self {
        Self { clock }
    }

    fn paint_background(&self, painter: &egui::Painter, rect: Rect) {
        for (y0, y1, [r, g, b]) in gradient_bands(
            self.clock.top_color,
            self.clock.bottom_color,
            rect.height(),
            GRADIENT_BANDS,
        ) {
            let band = Rect::from_min_max(
                Pos2::new(rect.left(), rect.top() + y0),
                Pos2::new(rect.right(), rect.top() + y1),
            );
            painter.rect_filled(band, 0.0, Color32::from_rgb(r, g, b));
        }
    }
}

impl App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = Local::now();
        let time = format_time(&now, self.clock.show_seconds, self.clock.use_24h);
        let date = format_date(&now);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();
                self.paint_background(painter, rect);

                let height = rect.height();
                let time_size = scaled_font_size(TIME_FONT, REFERENCE_HEIGHT, height, MIN_FONT);
                let date_size = scaled_font_size(DATE_FONT, REFERENCE_HEIGHT, height, MIN_FONT);

                let center = rect.center();
                painter.text(
                    center - egui::vec2(0.0, date_size * 0.6),
                    Align2::CENTER_CENTER,
                    time,
                    FontId::monospace(time_size),
                    Color32::WHITE,
                );
                painter.text(
                    center + egui::vec2(0.0, time_size * 0.6),
                    Align2::CENTER_CENTER,
                    date,
                    FontId::proportional(date_size),
                    Color32::from_rgb(0xe0, 0xe0, 0xe0),
                );
            });

        ctx.request_repaint_after(TICK);
    }
}
