//! Command-line options
//!
//! `--fen` / `--pgn-file` open a position at start-up, `--orientation`
//! overrides the saved default. The parsed options are inserted as
//! [`LaunchOptions`] and applied once the settings are loaded.

use crate::core::error::{CoreError, CoreResult};
use crate::core::BoardSettings;
use crate::game::resources::{BoardView, ChessEngine};
use crate::game::types::Orientation;
use bevy::prelude::*;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "ddchess", version, about = "Chessboard with move history and FEN/PGN import")]
pub struct LaunchArgs {
    /// Position to open, in FEN
    #[arg(long, conflicts_with = "pgn_file")]
    pub fen: Option<String>,

    /// PGN file whose game should be loaded
    #[arg(long, value_name = "PATH")]
    pub pgn_file: Option<PathBuf>,

    /// Side drawn at the bottom (white or black)
    #[arg(long)]
    pub orientation: Option<Orientation>,
}

impl LaunchArgs {
    /// Resolve files named on the command line
    pub fn into_options(self) -> CoreResult<LaunchOptions> {
        let initial_import = match (self.fen, self.pgn_file) {
            (Some(fen), _) => Some(fen),
            (None, Some(path)) => Some(fs::read_to_string(&path).map_err(|source| {
                CoreError::LaunchFile {
                    path: path.display().to_string(),
                    source,
                }
            })?),
            (None, None) => None,
        };
        Ok(LaunchOptions {
            initial_import,
            orientation: self.orientation,
        })
    }
}

/// Start-up options after files have been read
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// FEN or PGN text to import before the first frame
    pub initial_import: Option<String>,
    pub orientation: Option<Orientation>,
}

/// Apply orientation and the initial import to the board
///
/// A bad import is logged and the standard position is kept.
pub fn apply_launch_options(
    settings: Res<BoardSettings>,
    options: Option<Res<LaunchOptions>>,
    mut view: ResMut<BoardView>,
    mut engine: ResMut<ChessEngine>,
) {
    let options = options.map(|o| o.clone()).unwrap_or_default();

    view.set_orientation(options.orientation.unwrap_or(settings.default_orientation));
    view.set_highlight_options(&*engine, settings.highlight_options());

    if let Some(text) = options.initial_import.as_deref() {
        match view.import_position(&mut *engine, text) {
            Ok(kind) => info!("[LAUNCH] Opened {:?} from the command line", kind),
            Err(e) => warn!("[LAUNCH] Ignoring start-up position: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fen_and_orientation() {
        let args = LaunchArgs::try_parse_from([
            "ddchess",
            "--fen",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
            "--orientation",
            "black",
        ])
        .unwrap();

        let options = args.into_options().unwrap();

        assert_eq!(
            options.initial_import.as_deref(),
            Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
        );
        assert_eq!(options.orientation, Some(Orientation::Black));
    }

    #[test]
    fn test_fen_and_pgn_file_conflict() {
        let parsed = LaunchArgs::try_parse_from([
            "ddchess",
            "--fen",
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "--pgn-file",
            "game.pgn",
        ]);

        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_pgn_file_is_reported() {
        let args = LaunchArgs {
            pgn_file: Some(PathBuf::from("/nonexistent/ddchess/game.pgn")),
            ..LaunchArgs::default()
        };

        assert!(matches!(
            args.into_options(),
            Err(CoreError::LaunchFile { .. })
        ));
    }

    #[test]
    fn test_bad_orientation_is_rejected() {
        assert!(LaunchArgs::try_parse_from(["ddchess", "--orientation", "sideways"]).is_err());
    }
}
