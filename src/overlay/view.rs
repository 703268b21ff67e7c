//! The overlay window itself, run inside the `--overlay` child process

use std::io::Read;

use anyhow::{anyhow, Context, Result};
use eframe::egui::{self, Color32, RichText};

use super::OverlayPayload;
use crate::shortcuts::{ShortcutEntry, SYSTEM_CATEGORY};

/// Entries per column before wrapping to the next one
const ROWS_PER_COLUMN: usize = 12;

const ACCENT: Color32 = Color32::from_rgb(0x8a, 0xb4, 0xf8);

/// Read the payload from stdin and show it until dismissed
pub fn run() -> Result<()> {
    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("failed to read overlay payload")?;
    let payload = OverlayPayload::from_json(&input).context("malformed overlay payload")?;

    let viewport = egui::ViewportBuilder::default()
        .with_title(format!("{} shortcuts", payload.title()))
        .with_decorations(false)
        .with_window_level(egui::WindowLevel::AlwaysOnTop)
        .with_inner_size([960.0, 560.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Quickeys",
        native_options,
        Box::new(move |_cc| Ok(Box::new(OverlayApp::new(payload)))),
    )
    .map_err(|e| anyhow!("overlay window failed: {e}"))
}

struct OverlayApp {
    payload: OverlayPayload,
    focus: FocusTracker,
}

impl OverlayApp {
    fn new(payload: OverlayPayload) -> Self {
        Self {
            payload,
            focus: FocusTracker::default(),
        }
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (escape, focused) =
            ctx.input(|i| (i.key_pressed(egui::Key::Escape), i.viewport().focused));
        if escape || self.focus.lost(focused) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.payload {
                OverlayPayload::Shortcuts {
                    application,
                    shortcuts,
                    system,
                } => {
                    ui.heading(RichText::new("Keyboard shortcuts").strong());
                    ui.separator();
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        render_section(ui, application, shortcuts);
                        ui.add_space(16.0);
                        render_section(ui, SYSTEM_CATEGORY, system);
                    });
                }
                OverlayPayload::Message { title, message } => {
                    ui.heading(RichText::new(title).strong());
                    ui.separator();
                    ui.label(message);
                }
            }
            ui.add_space(8.0);
            ui.weak("Press Esc to close");
        });
    }
}

fn render_section(ui: &mut egui::Ui, title: &str, entries: &[ShortcutEntry]) {
    ui.label(RichText::new(title).strong().color(ACCENT));
    if entries.is_empty() {
        ui.label("No shortcuts defined");
        return;
    }
    ui.horizontal_top(|ui| {
        for (index, column) in columns(entries, ROWS_PER_COLUMN).into_iter().enumerate() {
            egui::Grid::new((title, index))
                .num_columns(2)
                .spacing([16.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for entry in column {
                        ui.label(RichText::new(&entry.keys).monospace().strong());
                        ui.label(&entry.description);
                        ui.end_row();
                    }
                });
            ui.add_space(24.0);
        }
    });
}

/// Split entries into columns of at most `rows` entries
fn columns(entries: &[ShortcutEntry], rows: usize) -> Vec<&[ShortcutEntry]> {
    entries.chunks(rows.max(1)).collect()
}

/// Detects the window losing focus after it had it.
///
/// Some window managers report "unfocused" for the first frames, so a
/// loss only counts once focus has been seen.
#[derive(Debug, Default)]
struct FocusTracker {
    seen: bool,
}

impl FocusTracker {
    fn lost(&mut self, focused: Option<bool>) -> bool {
        match focused {
            Some(true) => {
                self.seen = true;
                false
            }
            Some(false) => self.seen,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<ShortcutEntry> {
        (0..n)
            .map(|i| ShortcutEntry::new(format!("F{i}"), "key"))
            .collect()
    }

    #[test]
    fn test_columns_wrap() {
        let entries = entries(25);
        let lens: Vec<_> = columns(&entries, 12).iter().map(|c| c.len()).collect();
        assert_eq!(lens, [12, 12, 1]);
    }

    #[test]
    fn test_columns_empty() {
        assert!(columns(&[], 12).is_empty());
    }

    #[test]
    fn test_focus_loss_needs_prior_focus() {
        let mut focus = FocusTracker::default();
        assert!(!focus.lost(Some(false)));
        assert!(!focus.lost(None));
        assert!(!focus.lost(Some(true)));
        assert!(focus.lost(Some(false)));
    }
}
