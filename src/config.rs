/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or
/// incomplete. Every option is fixed for the session; there is no
/// runtime reconfiguration.

use serde::Deserialize;
use std::path::PathBuf;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub grid: GridConfig,
    pub board: BoardConfig,
    pub speed: SpeedConfig,
    pub palette: PaletteConfig,
    pub general: GeneralConfig,
}

#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
}

/// Tile geometry in terminal cells; the input adapter and the
/// renderer share these numbers.
#[derive(Clone, Copy, Debug)]
pub struct BoardConfig {
    pub tile_width: u16,
    pub tile_height: u16,
    pub spacing: u16,
}

#[derive(Clone, Copy, Debug)]
pub struct SpeedConfig {
    pub tick_rate_ms: u64,
}

/// The ordered color palette tiles are drawn from.
#[derive(Clone, Debug)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
}

#[derive(Clone, Copy, Debug)]
pub struct GeneralConfig {
    /// Pin the RNG seed for a reproducible session; absent means the
    /// seed is derived from the system clock at startup.
    pub seed: Option<u64>,
}

/// Color names the renderer understands.
pub const KNOWN_COLORS: &[&str] = &[
    "red", "green", "blue", "orange", "teal", "yellow", "magenta", "cyan", "white",
];

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    grid: TomlGrid,
    #[serde(default)]
    board: TomlBoard,
    #[serde(default)]
    speed: TomlSpeed,
    #[serde(default)]
    palette: TomlPalette,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlGrid {
    #[serde(default = "default_cols")]
    cols: usize,
    #[serde(default = "default_rows")]
    rows: usize,
}

#[derive(Deserialize, Debug)]
struct TomlBoard {
    #[serde(default = "default_tile_width")]
    tile_width: u16,
    #[serde(default = "default_tile_height")]
    tile_height: u16,
    #[serde(default = "default_spacing")]
    spacing: u16,
}

#[derive(Deserialize, Debug)]
struct TomlSpeed {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
}

#[derive(Deserialize, Debug)]
struct TomlPalette {
    #[serde(default = "default_palette")]
    colors: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
struct TomlGeneral {
    seed: Option<u64>,
}

// ── Defaults ──

fn default_cols() -> usize { 8 }
fn default_rows() -> usize { 8 }
fn default_tile_width() -> u16 { 4 }
fn default_tile_height() -> u16 { 2 }
fn default_spacing() -> u16 { 1 }
fn default_tick_rate() -> u64 { 200 } // 5 Hz simulation cadence

fn default_palette() -> Vec<String> {
    ["red", "green", "blue", "orange", "teal"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for TomlGrid {
    fn default() -> Self {
        TomlGrid {
            cols: default_cols(),
            rows: default_rows(),
        }
    }
}

impl Default for TomlBoard {
    fn default() -> Self {
        TomlBoard {
            tile_width: default_tile_width(),
            tile_height: default_tile_height(),
            spacing: default_spacing(),
        }
    }
}

impl Default for TomlSpeed {
    fn default() -> Self {
        TomlSpeed {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Default for TomlPalette {
    fn default() -> Self {
        TomlPalette {
            colors: default_palette(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let toml_cfg = load_toml(&candidate_dirs());
        Self::from_toml(toml_cfg)
    }

    fn from_toml(toml_cfg: TomlConfig) -> Self {
        GameConfig {
            grid: GridConfig {
                cols: toml_cfg.grid.cols.max(1),
                rows: toml_cfg.grid.rows.max(1),
            },
            board: BoardConfig {
                tile_width: toml_cfg.board.tile_width.max(1),
                tile_height: toml_cfg.board.tile_height.max(1),
                spacing: toml_cfg.board.spacing,
            },
            speed: SpeedConfig {
                tick_rate_ms: toml_cfg.speed.tick_rate_ms.max(1),
            },
            palette: PaletteConfig {
                colors: validated_palette(toml_cfg.palette.colors),
            },
            general: GeneralConfig {
                seed: toml_cfg.general.seed,
            },
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default())
    }
}

/// Keep only recognized color names; an unusable palette (fewer than
/// two colors left) falls back to the default set.
fn validated_palette(colors: Vec<String>) -> Vec<String> {
    let kept: Vec<String> = colors
        .into_iter()
        .filter(|name| {
            let known = KNOWN_COLORS.contains(&name.as_str());
            if !known {
                eprintln!("Warning: unknown palette color {name:?}, skipping");
            }
            known
        })
        .collect();

    if kept.len() < 2 {
        eprintln!("Warning: palette needs at least 2 colors, using defaults");
        return default_palette();
    }
    kept
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Directory of the running executable
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    // 3. Fallback
    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}
