//! Terminal rendering
//!
//! Translates a `FlowView` into terminal cells. The viewport is scaled to
//! fill the terminal below a two-row HUD. No game logic lives here.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};

use skydive::FlowView;
use skydive::sim::{Snapshot, SpriteKind};

const HUD_ROWS: u16 = 2;
/// Background stripes across one viewport width
const STRIPE_COUNT: u32 = 15;

const C_SKY: Color = Color::Rgb { r: 0x00, g: 0x56, b: 0xaf };
const C_STRIPE: Color = Color::Rgb { r: 0x00, g: 0x56, b: 0xa0 };
const C_CLOUD: Color = Color::White;
const C_COIN: Color = Color::Rgb { r: 0xfb, g: 0xb9, b: 0x17 };
const C_DIVER: Color = Color::Blue;
const C_HUD: Color = Color::White;
const C_WAVE: Color = Color::Magenta;

const TITLE: &str = "S K Y   D I V E   D A N";

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
}

/// Fixed-size character grid for one frame
struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell { ch: ' ', fg: C_SKY }; cols * rows],
        }
    }

    fn put(&mut self, col: i64, row: i64, ch: char, fg: Color) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = Cell { ch, fg };
    }

    fn text(&mut self, col: i64, row: i64, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i64, row, ch, fg);
        }
    }

    fn flush<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row as u16))?;
            let mut current = None;
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                if current != Some(cell.fg) {
                    out.queue(style::SetForegroundColor(cell.fg))?;
                    current = Some(cell.fg);
                }
                out.queue(Print(cell.ch))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.flush()
    }
}

/// Render one complete frame
pub fn render<W: Write>(out: &mut W, view: &FlowView) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut grid = Grid::new(cols as usize, rows as usize);

    match view {
        FlowView::Intro { opacity, .. } => draw_intro(&mut grid, *opacity),
        FlowView::Game(snapshot) => {
            draw_field(&mut grid, snapshot);
            draw_hud(&mut grid, snapshot);
        }
    }

    grid.flush(out)
}

fn draw_intro(grid: &mut Grid, opacity: f64) {
    let level = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    let fg = Color::Rgb {
        r: level,
        g: level,
        b: 0xff,
    };
    let col = (grid.cols as i64 - TITLE.chars().count() as i64) / 2;
    let row = grid.rows as i64 / 2;
    grid.text(col, row, TITLE, fg);
    if opacity >= 1.0 {
        let hint = "press any key";
        let col = (grid.cols as i64 - hint.len() as i64) / 2;
        grid.text(col, row + 2, hint, Color::DarkGrey);
    }
}

fn draw_field(grid: &mut Grid, snap: &Snapshot) {
    let field_rows = grid.rows.saturating_sub(HUD_ROWS as usize);
    let viewport = snap.viewport;
    let sx = grid.cols as f64 / viewport.width as f64;
    let sy = field_rows as f64 / viewport.height as f64;
    let top = HUD_ROWS as i64;

    let spacing = (viewport.width / STRIPE_COUNT).max(1);
    let mut x = snap.background_stripe_offset(spacing) as i64;
    while x < viewport.width as i64 {
        let col = (x as f64 * sx) as i64;
        for row in 0..field_rows as i64 {
            grid.put(col, top + row, '|', C_STRIPE);
        }
        x += spacing as i64;
    }

    for sprite in snap.drawable() {
        let (ch, fg) = match sprite.kind {
            SpriteKind::Coin => ('o', C_COIN),
            SpriteKind::Cloud => ('=', C_CLOUD),
            SpriteKind::Diver => ('@', C_DIVER),
        };
        let rect = snap.to_screen(&sprite.rect);
        let col0 = (rect.left() as f64 * sx).floor() as i64;
        let col1 = ((rect.right() as f64 * sx).ceil() as i64).max(col0 + 1);
        let row0 = (rect.top() as f64 * sy).floor() as i64;
        let row1 = ((rect.bottom() as f64 * sy).ceil() as i64).max(row0 + 1);
        for row in row0.max(0)..row1.min(field_rows as i64) {
            for col in col0..col1 {
                grid.put(col, top + row, ch, fg);
            }
        }
    }

    if let Some(x) = snap.diver_offscreen_marker() {
        grid.put((x as f64 * sx) as i64, top, 'v', C_HUD);
    }
}

fn draw_hud(grid: &mut Grid, snap: &Snapshot) {
    grid.text(1, 0, &format!("{} points", snap.score), C_HUD);

    if snap.multiplier_blink_visible() {
        // One block per 10 pixels of bar
        let blocks = (snap.multiplier_bar_width() / 10) as usize;
        let red = ((snap.multiplier / 10.0) * 255.0) as u8;
        let fg = Color::Rgb {
            r: red,
            g: 255 - red,
            b: 0,
        };
        grid.text(1, 1, &format!("x{:<5.1}{}", snap.multiplier, "#".repeat(blocks)), fg);
    }

    let wave_blocks = (snap.wave_progress() * 10.0).round() as usize;
    let wave = format!("wave {:>3} {:<10}", snap.wave, "=".repeat(wave_blocks));
    let col = grid.cols as i64 - wave.len() as i64 - 1;
    grid.text(col, 0, &wave, C_WAVE);
}
