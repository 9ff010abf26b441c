//! HanoiView: maps a `PuzzleSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::PuzzleSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PlaybackState, Speed, MAX_DISKS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colour-blind-friendly disk palette, index = disk size - 1.
const DISK_COLORS: [Rgb; MAX_DISKS as usize] = [
    Rgb::new(232, 244, 253), // light blue
    Rgb::new(74, 144, 226),  // blue
    Rgb::new(126, 211, 33),  // green
    Rgb::new(245, 166, 35),  // orange
    Rgb::new(208, 2, 27),    // red
    Rgb::new(144, 19, 254),  // purple
    Rgb::new(80, 227, 194),  // teal
    Rgb::new(184, 233, 134), // light green
    Rgb::new(248, 231, 28),  // yellow
    Rgb::new(189, 16, 224),  // magenta
];

const HELP_LINES: [&str; 11] = [
    "Tower of Hanoi",
    "",
    "enter   start solving",
    "space   pause / resume",
    "r       reset puzzle",
    "up/+    more disks (while idle)",
    "down/-  fewer disks (while idle)",
    "1/2/3   slow / normal / fast",
    "s       cycle speed",
    "h/?     toggle this help",
    "q/esc   quit",
];

/// A lightweight terminal view of the puzzle.
pub struct HanoiView {
    background: CellStyle,
}

impl Default for HanoiView {
    fn default() -> Self {
        Self {
            background: CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(20, 20, 28)),
        }
    }
}

impl HanoiView {
    /// Render the snapshot into a framebuffer.
    pub fn render(
        &self,
        snapshot: &PuzzleSnapshot,
        speed: Speed,
        show_help: bool,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(self.background.into_cell(' '));

        self.draw_status(&mut fb, snapshot, speed);
        self.draw_pegs(&mut fb, snapshot, viewport);
        self.draw_hints(&mut fb, viewport);

        match snapshot.state {
            PlaybackState::Paused => self.draw_banner(&mut fb, viewport, "PAUSED"),
            PlaybackState::Completed => {
                let banner = format!("SOLVED in {} moves!", snapshot.moves_made);
                self.draw_banner(&mut fb, viewport, &banner);
            }
            _ => {}
        }

        if show_help {
            self.draw_help(&mut fb, viewport);
        }

        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snapshot: &PuzzleSnapshot, speed: Speed) {
        let status = format!(
            " {} disks | speed {} | {} | move {}/{} ({} remaining)",
            snapshot.disk_count,
            speed.as_str(),
            snapshot.state.as_str(),
            snapshot.moves_made,
            snapshot.total_moves,
            snapshot.moves_remaining(),
        );
        let style = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(50, 50, 70)).bold();
        fb.fill_rect(0, 0, fb.width(), 1, ' ', style);
        fb.put_str(0, 0, &status, style);
    }

    fn draw_hints(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        if viewport.height < 2 {
            return;
        }
        let hints = " enter start | space pause | r reset | +/- disks | s speed | h help | q quit";
        let style = CellStyle::new(Rgb::new(140, 140, 150), Rgb::new(20, 20, 28));
        fb.put_str(0, viewport.height - 1, hints, style);
    }

    fn draw_pegs(&self, fb: &mut FrameBuffer, snapshot: &PuzzleSnapshot, viewport: Viewport) {
        // Rows 0 and height-1 hold the status and hint lines; the base sits
        // two rows above the hints so the labels fit between them.
        if viewport.height < 8 || viewport.width < 24 {
            return;
        }
        let base_y = viewport.height - 3;
        let label_y = viewport.height - 2;
        let col_w = viewport.width / 3;

        let base_style = CellStyle::new(Rgb::new(139, 69, 19), Rgb::new(20, 20, 28));
        let post_style = CellStyle::new(Rgb::new(160, 82, 45), Rgb::new(20, 20, 28));
        let label_style = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(20, 20, 28)).bold();

        let post_h = (snapshot.disk_count as u16 + 2).min(base_y.saturating_sub(1));

        for (i, peg) in snapshot.pegs.iter().enumerate() {
            let center_x = (i as u16) * col_w + col_w / 2;

            // Base and post.
            let base_w = col_w.saturating_sub(4) | 1;
            fb.fill_rect(center_x - base_w / 2, base_y, base_w, 1, '─', base_style);
            for dy in 1..=post_h {
                fb.set(center_x, base_y - dy, post_style.into_cell('│'));
            }

            // Peg label.
            fb.set(center_x, label_y, label_style.into_cell(peg.id.label()));

            // Disks, bottom-to-top. Stacks taller than the area above the
            // base are clipped; row 0 is reserved for the status line.
            for (level, &disk) in peg.disks.iter().enumerate() {
                let Some(y) = base_y.checked_sub(1 + level as u16) else {
                    break;
                };
                if y == 0 {
                    break;
                }
                let highlighted = snapshot
                    .last_move
                    .map(|mv| mv.disk == disk && mv.to == peg.id)
                    .unwrap_or(false)
                    && level == peg.disks.len() - 1;
                self.draw_disk(fb, center_x, y, disk, col_w, highlighted);
            }
        }
    }

    fn draw_disk(
        &self,
        fb: &mut FrameBuffer,
        center_x: u16,
        y: u16,
        disk: u8,
        col_w: u16,
        highlighted: bool,
    ) {
        let color = DISK_COLORS[(disk - 1) as usize];
        // Width proportional to size, always odd so the label centres.
        let w = ((2 * disk as u16 + 3) | 1).min(col_w.saturating_sub(2) | 1);
        let x = center_x - w / 2;

        let mut style = CellStyle::new(Rgb::new(0, 0, 0), color);
        if highlighted {
            style = style.bold();
        }
        fb.fill_rect(x, y, w, 1, ' ', style);

        let label = disk.to_string();
        fb.put_str(center_x - label.len() as u16 / 2, y, &label, style);

        if highlighted {
            let edge = CellStyle::new(Rgb::new(255, 107, 107), color).bold();
            fb.set(x, y, edge.into_cell('▌'));
            fb.set(x + w - 1, y, edge.into_cell('▐'));
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
        let w = text.len() as u16 + 4;
        if viewport.width < w || viewport.height < 7 {
            return;
        }
        let x = (viewport.width - w) / 2;
        let y = viewport.height / 2 - 1;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(60, 60, 90)).bold();
        fb.fill_rect(x, y, w, 3, ' ', style);
        fb.put_str(x + 2, y + 1, text, style);
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let w = (HELP_LINES.iter().map(|l| l.len()).max().unwrap_or(0) as u16) + 6;
        let h = HELP_LINES.len() as u16 + 2;
        if viewport.width < w || viewport.height < h {
            return;
        }
        let x = (viewport.width - w) / 2;
        let y = (viewport.height - h) / 2;
        let style = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(40, 40, 60));
        fb.fill_rect(x, y, w, h, ' ', style);
        for (i, line) in HELP_LINES.iter().enumerate() {
            let line_style = if i == 0 { style.bold() } else { style };
            fb.put_str(x + 3, y + 1 + i as u16, line, line_style);
        }
    }
}
