use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use zeroize::Zeroize;

use crate::error::InvalidRequest;
use crate::manager::settings_file_path;
use crate::password::{GenerationRequest, MIN_LENGTH, estimate_entropy, generate_password};
use crate::settings::{AppSettings, GeneratorDefaults, MAX_LENGTH};

const ACCENT: Color32 = Color32::from_rgb(0x88, 0xEE, 0x88);

/// Generator window state
pub struct PassClockApp {
    pub settings: AppSettings,
    pub settings_path: PathBuf,

    // Password generation options
    pub length: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_digits: bool,
    pub use_symbols: bool,

    // Result of the last generation; empty after an error
    pub generated_password: String,
    pub generated_with: Option<GenerationRequest>,
    pub error_msg: String,
    pub copy_enabled: bool,

    // Clipboard auto-clear
    pub clipboard_copy_time: Option<Instant>,
    pub copy_warning: Option<String>,
}

impl Default for PassClockApp {
    fn default() -> Self {
        let path = settings_file_path();
        Self::new(AppSettings::load_from(&path), path)
    }
}

impl PassClockApp {
    pub fn new(settings: AppSettings, settings_path: PathBuf) -> Self {
        let defaults = settings.generator;
        Self {
            settings,
            settings_path,
            length: defaults.length,
            use_uppercase: defaults.upper,
            use_lowercase: defaults.lower,
            use_digits: defaults.digits,
            use_symbols: defaults.symbols,
            generated_password: String::new(),
            generated_with: None,
            error_msg: String::new(),
            copy_enabled: false,
            clipboard_copy_time: None,
            copy_warning: None,
        }
    }

    /// Options as currently set in the panel.
    pub fn options(&self) -> GeneratorDefaults {
        GeneratorDefaults {
            length: self.length,
            upper: self.use_uppercase,
            lower: self.use_lowercase,
            digits: self.use_digits,
            symbols: self.use_symbols,
        }
    }

    pub fn request(&self) -> GenerationRequest {
        self.options().to_request()
    }

    /// Runs the composer with the current options. On failure the previous
    /// password is wiped and copying is disabled.
    pub fn generate(&mut self) -> Result<(), InvalidRequest> {
        self.generated_password.zeroize();
        self.generated_with = None;
        self.copy_warning = None;

        let request = self.request();
        match generate_password(
            request.length,
            request.include_upper,
            request.include_lower,
            request.include_digits,
            request.include_symbols,
        ) {
            Ok(pwd) => {
                self.generated_password = pwd;
                self.generated_with = Some(request);
                self.error_msg.clear();
                self.copy_enabled = true;
                self.remember_options();
                Ok(())
            }
            Err(e) => {
                warn!("generation rejected: {}", e);
                self.error_msg = e.to_string();
                self.copy_enabled = false;
                Err(e)
            }
        }
    }

    /// Button and shortcut handler; failures are already in `error_msg`.
    fn generate_from_ui(&mut self) {
        self.generate().ok();
    }

    /// Strength of the password on screen, not of the current options.
    pub fn strength_bits(&self) -> Option<f64> {
        self.generated_with.as_ref().map(estimate_entropy)
    }

    /// Wipe the displayed password.
    pub fn clear(&mut self) {
        self.generated_password.zeroize();
        self.generated_with = None;
        self.copy_enabled = false;
        self.copy_warning = None;
    }

    /// Text to put on the clipboard, or `None` (with a warning set) when
    /// there is nothing to copy.
    pub fn prepare_copy(&mut self) -> Option<String> {
        if self.generated_password.is_empty() {
            self.copy_warning = Some("Nothing to copy - generate a password first.".into());
            return None;
        }
        self.copy_warning = None;
        self.clipboard_copy_time = Some(Instant::now());
        Some(self.generated_password.clone())
    }

    fn copy_to_clipboard(&mut self, ctx: &egui::Context) {
        if let Some(mut text) = self.prepare_copy() {
            ctx.copy_text(text.clone());
            text.zeroize();
        }
    }

    /// Persist the options as next launch's defaults when they changed.
    fn remember_options(&mut self) {
        let current = self.options();
        if current == self.settings.generator {
            return;
        }
        self.settings.generator = current;
        if let Err(e) = self.settings.save_to(&self.settings_path) {
            warn!("could not save settings: {}", e);
        }
    }

    fn show_main_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Secure Password Generator").color(ACCENT).strong());
        });
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Length:");
            ui.add(egui::Slider::new(&mut self.length, MIN_LENGTH..=MAX_LENGTH).text("characters"));
        });

        ui.group(|ui| {
            ui.label(RichText::new("Character types").strong());
            ui.checkbox(&mut self.use_uppercase, "Uppercase (A-Z)");
            ui.checkbox(&mut self.use_lowercase, "Lowercase (a-z)");
            ui.checkbox(&mut self.use_digits, "Digits (0-9)");
            ui.checkbox(&mut self.use_symbols, "Symbols (!@#$%)");
        });

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            if ui.button(RichText::new("Generate (Ctrl+G)").strong()).clicked() {
                self.generate_from_ui();
            }
        });

        if !self.error_msg.is_empty() {
            ui.colored_label(Color32::RED, &self.error_msg);
        }

        ui.separator();
        ui.label("Generated password:");
        let mut shown = self.generated_password.as_str();
        ui.add(
            egui::TextEdit::singleline(&mut shown)
                .font(egui::TextStyle::Monospace)
                .text_color(ACCENT)
                .horizontal_align(egui::Align::Center)
                .desired_width(f32::INFINITY),
        );

        if let Some(bits) = self.strength_bits() {
            let (label, color) = if bits < 60.0 {
                ("Weak", Color32::RED)
            } else if bits <= 100.0 {
                ("Okay", Color32::YELLOW)
            } else {
                ("Strong", Color32::GREEN)
            };
            ui.colored_label(color, format!("Entropy: ~{:.1} bits ({})", bits, label));
        }

        ui.horizontal(|ui| {
            if ui.add_enabled(self.copy_enabled, egui::Button::new("Copy")).clicked() {
                self.copy_to_clipboard(ui.ctx());
            }
            if ui.button("Clear").clicked() {
                self.clear();
            }
        });

        if let Some(ref warning) = self.copy_warning {
            ui.colored_label(Color32::YELLOW, warning);
        }
    }
}

impl App for PassClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Clipboard auto-clear
        if let Some(copy_time) = self.clipboard_copy_time {
            if copy_time.elapsed().as_secs() >= self.settings.clipboard_timeout_u64() {
                ctx.copy_text(String::new());
                self.clipboard_copy_time = None;
                info!("clipboard cleared");
            } else {
                ctx.request_repaint_after(Duration::from_secs(1));
            }
        }

        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::G)) {
            self.generate_from_ui();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(copy_time) = self.clipboard_copy_time {
                let remaining = self
                    .settings
                    .clipboard_timeout_u64()
                    .saturating_sub(copy_time.elapsed().as_secs());
                ui.colored_label(
                    Color32::YELLOW,
                    format!("Password copied - clipboard clears in {}s", remaining),
                );
            }

            self.show_main_ui(ui);
        });
    }
}
