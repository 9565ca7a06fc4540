//! Per-title launch strategies
//!
//! Steam app ids map to a strategy; anything not in the table launches
//! through the plain Steam URI.

use super::operations::{Launcher, find_app_dir};
use super::pure::steam_uri;
use crate::config::SystemConfig;
use crate::error::LaunchError;

use std::collections::HashMap;
use std::path::PathBuf;

pub const SLAY_THE_SPIRE_APP_ID: &str = "646570";
pub const MTS_LAUNCHER_JAR: &str = "mts-launcher.jar";

/// What a strategy may touch while launching
pub struct LaunchContext<'a> {
    pub config: &'a SystemConfig,
    pub launcher: &'a dyn Launcher,
}

pub trait LaunchStrategy {
    fn name(&self) -> &'static str;

    fn launch(
        &self,
        app_id: &str,
        launch_option: Option<&str>,
        ctx: &LaunchContext,
    ) -> Result<(), LaunchError>;
}

pub struct StandardSteam;

impl LaunchStrategy for StandardSteam {
    fn name(&self) -> &'static str {
        "steam"
    }

    fn launch(
        &self,
        app_id: &str,
        launch_option: Option<&str>,
        ctx: &LaunchContext,
    ) -> Result<(), LaunchError> {
        ctx.launcher.launch(&steam_uri(app_id, launch_option))
    }
}

/// Slay the Spire through the Mod the Spire jar.
///
/// Any problem along the way (jar missing, no Java, launcher failing) falls
/// back to the standard Steam launch.
#[derive(Default)]
pub struct ModTheSpire {
    game_dir: Option<PathBuf>,
}

impl ModTheSpire {
    #[cfg(test)]
    pub fn with_game_dir(game_dir: PathBuf) -> Self {
        Self {
            game_dir: Some(game_dir),
        }
    }

    fn game_dir(&self, app_id: &str, config: &SystemConfig) -> PathBuf {
        if let Some(dir) = &self.game_dir {
            return dir.clone();
        }
        app_id
            .parse::<u32>()
            .ok()
            .and_then(find_app_dir)
            .unwrap_or_else(|| config.steam_root.join("steamapps/common/SlayTheSpire"))
    }

    fn try_modded(&self, app_id: &str, ctx: &LaunchContext) -> Result<(), String> {
        let game_dir = self.game_dir(app_id, ctx.config);
        let jar = game_dir.join(MTS_LAUNCHER_JAR);
        if !jar.exists() {
            return Err(format!("Mod the Spire launcher not found at: {}", jar.display()));
        }

        let Some(java) = &ctx.config.java_path else {
            return Err(
                "Java not found. Please make sure Java is installed and added to your PATH."
                    .to_string(),
            );
        };

        println!("Launching Slay the Spire with Mod the Spire...");
        log::debug!("{} -jar {}", java.display(), jar.display());
        ctx.launcher
            .run(java, &["-jar", MTS_LAUNCHER_JAR], &game_dir)
            .map_err(|e| format!("Error occurred while launching Mod the Spire: {e}"))
    }
}

impl LaunchStrategy for ModTheSpire {
    fn name(&self) -> &'static str {
        "mod-the-spire"
    }

    fn launch(
        &self,
        app_id: &str,
        launch_option: Option<&str>,
        ctx: &LaunchContext,
    ) -> Result<(), LaunchError> {
        match self.try_modded(app_id, ctx) {
            Ok(()) => Ok(()),
            Err(reason) => {
                println!("{reason}");
                println!("Launching Slay the Spire normally...");
                StandardSteam.launch(app_id, launch_option, ctx)
            }
        }
    }
}

pub struct StrategyTable {
    overrides: HashMap<String, Box<dyn LaunchStrategy>>,
    standard: StandardSteam,
}

impl StrategyTable {
    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
            standard: StandardSteam,
        }
    }

    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.insert(SLAY_THE_SPIRE_APP_ID, Box::new(ModTheSpire::default()));
        table
    }

    pub fn insert(&mut self, app_id: &str, strategy: Box<dyn LaunchStrategy>) {
        self.overrides.insert(app_id.to_string(), strategy);
    }

    pub fn for_app(&self, app_id: &str) -> &dyn LaunchStrategy {
        self.overrides
            .get(app_id)
            .map(|s| s.as_ref())
            .unwrap_or(&self.standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Opener;
    use crate::launch::RecordingLauncher;

    fn config(java_path: Option<PathBuf>) -> SystemConfig {
        SystemConfig {
            opener: Opener::XdgOpen,
            steam_root: PathBuf::from("/nonexistent/steam"),
            java_path,
            data_dir: PathBuf::from("/nonexistent/data"),
        }
    }

    fn spire_dir(with_jar: bool) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        if with_jar {
            std::fs::write(dir.path().join(MTS_LAUNCHER_JAR), "").unwrap();
        }
        dir
    }

    // ── table ───────────────────────────────────────────────────────

    #[test]
    fn table_defaults_to_standard() {
        let table = StrategyTable::builtin();
        assert_eq!(table.for_app("1145360").name(), "steam");
        assert_eq!(table.for_app(SLAY_THE_SPIRE_APP_ID).name(), "mod-the-spire");
        assert_eq!(StrategyTable::empty().for_app(SLAY_THE_SPIRE_APP_ID).name(), "steam");
    }

    #[test]
    fn standard_uses_launch_option() {
        let launcher = RecordingLauncher::default();
        let cfg = config(None);
        let ctx = LaunchContext {
            config: &cfg,
            launcher: &launcher,
        };
        StandardSteam.launch("1145360", Some("-novid"), &ctx).unwrap();
        assert_eq!(*launcher.uris.borrow(), vec!["steam://rungameid/1145360//-novid"]);
    }

    // ── mod the spire ───────────────────────────────────────────────

    #[test]
    fn modded_launch_runs_java_in_game_dir() {
        let dir = spire_dir(true);
        let launcher = RecordingLauncher::default();
        let cfg = config(Some(PathBuf::from("/usr/bin/java")));
        let ctx = LaunchContext {
            config: &cfg,
            launcher: &launcher,
        };

        ModTheSpire::with_game_dir(dir.path().to_path_buf())
            .launch(SLAY_THE_SPIRE_APP_ID, None, &ctx)
            .unwrap();

        let runs = launcher.runs.borrow();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].0, PathBuf::from("/usr/bin/java"));
        assert_eq!(runs[0].1, vec!["-jar", MTS_LAUNCHER_JAR]);
        assert_eq!(runs[0].2, dir.path());
        assert!(launcher.uris.borrow().is_empty());
    }

    #[test]
    fn missing_jar_falls_back_to_steam() {
        let dir = spire_dir(false);
        let launcher = RecordingLauncher::default();
        let cfg = config(Some(PathBuf::from("/usr/bin/java")));
        let ctx = LaunchContext {
            config: &cfg,
            launcher: &launcher,
        };

        ModTheSpire::with_game_dir(dir.path().to_path_buf())
            .launch(SLAY_THE_SPIRE_APP_ID, None, &ctx)
            .unwrap();

        assert!(launcher.runs.borrow().is_empty());
        assert_eq!(*launcher.uris.borrow(), vec!["steam://rungameid/646570"]);
    }

    #[test]
    fn missing_java_falls_back_to_steam() {
        let dir = spire_dir(true);
        let launcher = RecordingLauncher::default();
        let cfg = config(None);
        let ctx = LaunchContext {
            config: &cfg,
            launcher: &launcher,
        };

        ModTheSpire::with_game_dir(dir.path().to_path_buf())
            .launch(SLAY_THE_SPIRE_APP_ID, None, &ctx)
            .unwrap();

        assert!(launcher.runs.borrow().is_empty());
        assert_eq!(*launcher.uris.borrow(), vec!["steam://rungameid/646570"]);
    }

    #[test]
    fn failing_launcher_falls_back_to_steam() {
        let dir = spire_dir(true);
        let launcher = RecordingLauncher {
            fail_runs: true,
            ..Default::default()
        };
        let cfg = config(Some(PathBuf::from("/usr/bin/java")));
        let ctx = LaunchContext {
            config: &cfg,
            launcher: &launcher,
        };

        ModTheSpire::with_game_dir(dir.path().to_path_buf())
            .launch(SLAY_THE_SPIRE_APP_ID, Some("-debug"), &ctx)
            .unwrap();

        assert_eq!(launcher.runs.borrow().len(), 1);
        assert_eq!(*launcher.uris.borrow(), vec!["steam://rungameid/646570//-debug"]);
    }
}
