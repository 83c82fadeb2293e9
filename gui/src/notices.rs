//! Transient, dismissible notifications.

use crate::theme;
use eframe::egui::{self, RichText};
use std::time::{Duration, Instant};

const NOTICE_TTL: Duration = Duration::from_secs(6);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Success,
    Error,
}

#[derive(Debug)]
struct Notice {
    kind: Kind,
    title: String,
    body: String,
    created: Instant,
}

/// Bottom-right toast stack. Entries expire on their own or on click.
#[derive(Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.items.push(Notice {
            kind: Kind::Success,
            title: title.into(),
            body: body.into(),
            created: Instant::now(),
        });
    }

    pub fn error(&mut self, title: impl Into<String>) {
        self.items.push(Notice {
            kind: Kind::Error,
            title: title.into(),
            body: String::new(),
            created: Instant::now(),
        });
    }

    fn prune(&mut self) {
        self.items.retain(|notice| notice.created.elapsed() < NOTICE_TTL);
    }

    /// Draws the stack and prunes expired entries. Keeps the frame loop
    /// ticking while anything is visible so expiry is not stuck waiting
    /// for input.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune();
        if self.items.is_empty() {
            return;
        }
        ctx.request_repaint_after(Duration::from_millis(250));

        egui::Area::new(egui::Id::new("notices"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
            .show(ctx, |ui| {
                let mut dismissed = None;
                for (index, notice) in self.items.iter().enumerate() {
                    let color = match notice.kind {
                        Kind::Success => theme::SUCCESS_TEXT,
                        Kind::Error => theme::ERROR_TEXT,
                    };
                    let response = egui::Frame::popup(ui.style())
                        .show(ui, |ui| {
                            ui.set_max_width(theme::NOTICE_MAX_WIDTH);
                            ui.label(RichText::new(&notice.title).strong().color(color));
                            if !notice.body.is_empty() {
                                ui.label(RichText::new(&notice.body).monospace().small());
                            }
                        })
                        .response
                        .interact(egui::Sense::click());
                    if response.clicked() {
                        dismissed = Some(index);
                    }
                }
                if let Some(index) = dismissed {
                    self.items.remove(index);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_removes_expired_notices_only() {
        let mut notices = Notices::new();
        notices.success("saved", "{}");
        notices.error("failed");
        notices.items[0].created = Instant::now() - (NOTICE_TTL + Duration::from_secs(1));

        notices.prune();

        assert_eq!(notices.items.len(), 1);
        assert_eq!(notices.items[0].title, "failed");
    }
}
