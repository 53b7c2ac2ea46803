//! Asset-tree locations for a From the Depths install
//!
//! The block database is assembled from the game's built-in structural pack
//! plus optional user content packs. Both roots default to the conventional
//! Steam locations but can be overridden explicitly (the CLI exposes
//! `--game-mods` / `--user-mods`).

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Game mods folder relative to the home directory, Linux Steam layout.
pub const GAME_MODS_DIR_LINUX: &str =
    ".steam/steam/steamapps/common/From The Depths/From_The_Depths_Data/StreamingAssets/Mods";

/// Game mods folder relative to the home directory, macOS Steam layout.
pub const GAME_MODS_DIR_MACOS: &str = "Library/Application Support/Steam/steamapps/common/From The Depths/From_The_Depths_Data/StreamingAssets/Mods";

/// User content folder relative to the home directory.
pub const USER_MODS_DIR: &str = "From The Depths/Mods";

/// The built-in pack holding the structural base blocks and their variants.
pub const CORE_STRUCTURAL_PACK: &str = "Core_Structural";

/// Fallback slope content pack.
pub const MEGA_SLOPES_PACK: &str = "MegaSlopesPack";

/// Preferred slope content pack (common block materials). When present, it
/// is loaded instead of [`MEGA_SLOPES_PACK`], never merged with it.
pub const MEGA_SLOPES_2_COMMON_PACK: &str = "MegaSlopesPack2CommonBlockMateri";

/// Companion to the preferred slope pack (other block materials).
pub const MEGA_SLOPES_2_OTHER_PACK: &str = "MegaSlopesPack2OtherBlockMateria";

/// Resolved locations of the game's asset packs.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    /// The game install's `StreamingAssets/Mods` folder.
    pub game_mods_dir: PathBuf,
    /// The user's `From The Depths/Mods` folder.
    pub user_mods_dir: PathBuf,
}

impl AssetPaths {
    /// Resolve asset locations, preferring explicit overrides over the
    /// platform defaults.
    ///
    /// # Errors
    /// Fails only when a default is needed and the home directory cannot be
    /// determined.
    pub fn detect(game_mods: Option<PathBuf>, user_mods: Option<PathBuf>) -> Result<Self> {
        let (game_mods_dir, user_mods_dir) = match (game_mods, user_mods) {
            (Some(game), Some(user)) => (game, user),
            (game, user) => {
                let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
                (
                    game.unwrap_or_else(|| home.join(default_game_mods_dir())),
                    user.unwrap_or_else(|| home.join(USER_MODS_DIR)),
                )
            }
        };
        Ok(Self {
            game_mods_dir,
            user_mods_dir,
        })
    }

    /// Root of the built-in structural pack.
    #[must_use]
    pub fn core_structural(&self) -> PathBuf {
        self.game_mods_dir.join(CORE_STRUCTURAL_PACK)
    }

    /// Root of a user content pack by directory name.
    #[must_use]
    pub fn user_pack(&self, name: &str) -> PathBuf {
        self.user_mods_dir.join(name)
    }
}

/// The game mods folder for the current platform, relative to home.
fn default_game_mods_dir() -> &'static str {
    #[cfg(target_os = "macos")]
    {
        GAME_MODS_DIR_MACOS
    }

    #[cfg(not(target_os = "macos"))]
    {
        GAME_MODS_DIR_LINUX
    }
}
