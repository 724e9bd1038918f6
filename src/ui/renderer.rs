/// Presentation layer: double-buffered, diff-based terminal renderer.
///
/// How it works:
///   1. Build the next frame into the `front` buffer (array of Cell)
///   2. Compare each cell with the `back` buffer (previous frame)
///   3. Only emit terminal commands for cells that changed
///   4. All commands are batched with `queue!`, flushed once at the end
///   5. Swap front/back
///
/// This eliminates flicker caused by full-screen redraws. The renderer
/// reads the world; it never mutates the grid.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::domain::grid::Coord;
use crate::domain::tile::Tile;
use crate::sim::select::Selection;
use crate::sim::world::WorldState;
use crate::ui::board::BoardGeometry;

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    /// Explicit dark background for every cell, and for Clear, so the
    /// inter-cell gap color matches exactly on VTE-based terminals.
    const BASE_BG: Color = Color::Rgb { r: 18, g: 18, b: 28 };

    const BLANK: Cell = Cell {
        ch: ' ',
        fg: Color::White,
        bg: Cell::BASE_BG,
    };

    /// Sentinel used to invalidate the back buffer: differs from any
    /// real cell, so every position gets diff'd on the next frame.
    const INVALID: Cell = Cell {
        ch: '\0',
        fg: Color::Magenta,
        bg: Color::Magenta,
    };
}

// ── FrameBuffer: a 2D grid of Cells ──

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer {
            width: w,
            height: h,
            cells: vec![Cell::BLANK; w * h],
        }
    }

    fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.cells = vec![Cell::BLANK; w * h];
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    /// Write a string at (x, y) with the given colors.
    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell { ch, fg, bg });
            cx += 1;
        }
    }
}

// ── Palette mapping ──

/// Terminal color for a palette color name. Names outside this table
/// are rejected at config load.
pub fn palette_color(name: &str) -> Option<Color> {
    match name {
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "orange" => Some(Color::Rgb { r: 255, g: 140, b: 0 }),
        "teal" => Some(Color::Rgb { r: 0, g: 150, b: 136 }),
        "yellow" => Some(Color::Yellow),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

// ── Renderer ──

pub struct Renderer {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    term_w: usize,
    term_h: usize,
    /// Palette indices resolved to terminal colors, once, at startup.
    palette: Vec<Color>,
}

impl Renderer {
    pub fn new(palette_names: &[String]) -> Self {
        let palette = palette_names
            .iter()
            .map(|name| palette_color(name).unwrap_or(Color::White))
            .collect();
        Renderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
            term_w: 0,
            term_h: 0,
            palette,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            SetBackgroundColor(Cell::BASE_BG),
            Clear(ClearType::All)
        )?;

        let (tw, th) = terminal::size().unwrap_or((80, 24));
        self.term_w = tw as usize;
        self.term_h = th as usize;
        self.front.resize(self.term_w, self.term_h);
        self.back.resize(self.term_w, self.term_h);
        // Force full repaint on first frame: back ≠ front everywhere.
        self.back.cells.fill(Cell::INVALID);

        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    pub fn render(&mut self, world: &WorldState, geometry: &BoardGeometry) -> io::Result<()> {
        // Detect terminal resize
        let (tw, th) = terminal::size().unwrap_or((80, 24));
        if tw as usize != self.term_w || th as usize != self.term_h {
            self.term_w = tw as usize;
            self.term_h = th as usize;
            self.front.resize(self.term_w, self.term_h);
            self.back.resize(self.term_w, self.term_h);
            self.back.cells.fill(Cell::INVALID);
            queue!(
                self.writer,
                SetBackgroundColor(Cell::BASE_BG),
                Clear(ClearType::All)
            )?;
        }

        self.front.clear();
        self.compose_hud(world, geometry);
        self.compose_board(world, geometry);
        self.compose_footer(world, geometry);
        if world.paused {
            self.compose_pause_overlay(geometry);
        }

        self.flush_diff()?;
        std::mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }

    // ── Composition ──

    fn compose_hud(&mut self, world: &WorldState, geometry: &BoardGeometry) {
        let hud = format!(
            " TILE CRUSH   {}x{}, {} colors   tick {}",
            geometry.cols,
            geometry.rows,
            self.palette.len(),
            world.tick
        );
        self.front
            .put_str(0, 0, &hud, Color::White, Cell::BASE_BG);
    }

    fn compose_board(&mut self, world: &WorldState, geometry: &BoardGeometry) {
        for row in 0..world.grid.rows() {
            for col in 0..world.grid.cols() {
                let coord = Coord::new(col, row);
                let (ox, oy) = geometry.tile_origin(coord);
                match world.grid.get(coord) {
                    Tile::Color(index) => {
                        let color = self
                            .palette
                            .get(index as usize)
                            .copied()
                            .unwrap_or(Color::White);
                        self.fill_tile(geometry, ox, oy, ' ', Color::White, color);
                    }
                    Tile::Empty => {
                        // A faint dot marks a hole (visible in the
                        // bottom row, which refill never touches).
                        self.fill_tile(geometry, ox, oy, ' ', Color::DarkGrey, Cell::BASE_BG);
                        self.front.set(
                            ox as usize + geometry.tile_width as usize / 2,
                            oy as usize + geometry.tile_height as usize / 2,
                            Cell {
                                ch: '·',
                                fg: Color::DarkGrey,
                                bg: Cell::BASE_BG,
                            },
                        );
                    }
                }
            }
        }

        if let Selection::Selected(coord) = world.selection {
            self.compose_selection_frame(geometry, coord);
        }
    }

    fn fill_tile(&mut self, geometry: &BoardGeometry, ox: u16, oy: u16, ch: char, fg: Color, bg: Color) {
        for dy in 0..geometry.tile_height {
            for dx in 0..geometry.tile_width {
                self.front.set(
                    (ox + dx) as usize,
                    (oy + dy) as usize,
                    Cell { ch, fg, bg },
                );
            }
        }
    }

    /// White frame drawn in the spacing gap around the selected tile.
    fn compose_selection_frame(&mut self, geometry: &BoardGeometry, coord: Coord) {
        let (ox, oy) = geometry.tile_origin(coord);
        if ox == 0 || oy == 0 {
            return;
        }
        let left = ox as usize - 1;
        let top = oy as usize - 1;
        let right = (ox + geometry.tile_width) as usize;
        let bottom = (oy + geometry.tile_height) as usize;

        let frame = |ch| Cell {
            ch,
            fg: Color::White,
            bg: Cell::BASE_BG,
        };
        for x in left..=right {
            self.front.set(x, top, frame('─'));
            self.front.set(x, bottom, frame('─'));
        }
        for y in top..=bottom {
            self.front.set(left, y, frame('│'));
            self.front.set(right, y, frame('│'));
        }
        self.front.set(left, top, frame('┌'));
        self.front.set(right, top, frame('┐'));
        self.front.set(left, bottom, frame('└'));
        self.front.set(right, bottom, frame('┘'));
    }

    fn compose_footer(&mut self, world: &WorldState, geometry: &BoardGeometry) {
        let (_, board_h) = geometry.board_size();
        let status_y = (geometry.origin_y + board_h + 1) as usize;

        let status = match (world.message.is_empty(), world.selection) {
            (false, _) => world.message.clone(),
            (true, Selection::Selected(c)) => {
                format!("selected ({}, {}), press an adjacent tile to swap", c.col, c.row)
            }
            (true, Selection::Idle) => String::new(),
        };
        self.front
            .put_str(1, status_y, &status, Color::Yellow, Cell::BASE_BG);

        let help = "click: select/swap   esc: cancel   p: pause   r: restart   q: quit";
        self.front
            .put_str(1, status_y + 1, help, Color::DarkGrey, Cell::BASE_BG);
    }

    fn compose_pause_overlay(&mut self, geometry: &BoardGeometry) {
        let (board_w, board_h) = geometry.board_size();
        let label = " PAUSED ";
        let x = geometry.origin_x as usize
            + (board_w as usize).saturating_sub(label.len()) / 2;
        let y = geometry.origin_y as usize + board_h as usize / 2;
        self.front.put_str(x, y, label, Color::Black, Color::White);
    }

    // ── Diff flush: only write changed cells ──

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Color::White;
        let mut last_bg = Cell::BASE_BG;
        let mut need_move = true;
        let mut last_x: usize = 0;
        let mut last_y: usize = 0;

        queue!(
            self.writer,
            SetForegroundColor(Color::White),
            SetBackgroundColor(Cell::BASE_BG),
        )?;

        for y in 0..self.front.height {
            for x in 0..self.front.width {
                let cell = self.front.get(x, y);
                if cell == self.back.get(x, y) {
                    need_move = true;
                    continue;
                }

                if need_move || x != last_x + 1 || y != last_y {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }
                if cell.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(cell.fg))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(self.writer, SetBackgroundColor(cell.bg))?;
                    last_bg = cell.bg;
                }

                queue!(self.writer, Print(cell.ch))?;
                last_x = x;
                last_y = y;
            }
        }

        self.writer.flush()
    }
}
