//! Wiring between the data directory and the core components.

use std::path::PathBuf;

use mobroom_core::storage::data_dir;
use mobroom_core::{
    Config, JsonFileStorage, Notice, RotationEngine, SessionFiles, SessionLink, StatStore,
};

pub type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub struct Session {
    pub dir: PathBuf,
    pub config: Config,
    pub files: SessionFiles,
}

impl Session {
    pub fn open() -> CliResult<Self> {
        let dir = data_dir()?;
        let config = Config::load_from(&dir)?;
        let files = SessionFiles::new(&dir);
        Ok(Self { dir, config, files })
    }

    pub fn link(&self) -> CliResult<SessionLink> {
        Ok(self.files.load_link(self.config.settings()?)?)
    }

    pub fn save_link(&self, link: &SessionLink) -> CliResult {
        self.files.save_link(link)?;
        Ok(())
    }

    pub fn stats(&self) -> StatStore<JsonFileStorage> {
        StatStore::open(JsonFileStorage::new(self.config.stats_path(&self.dir)))
    }

    /// Engine built from the saved link and stat log. With `resume`, a
    /// saved checkpoint is restored on top.
    pub fn engine(&self, resume: bool) -> CliResult<RotationEngine<JsonFileStorage>> {
        let link = self.link()?;
        let mut engine = RotationEngine::new(link.settings, link.roster, self.stats());
        if resume {
            if let Some(checkpoint) = self.files.load_checkpoint()? {
                engine.restore(checkpoint);
            }
        }
        Ok(engine)
    }

    /// The checkpoint is stored paused: a `run` that dies never resumes
    /// counting on its own.
    pub fn save_engine(&self, engine: &RotationEngine<JsonFileStorage>) -> CliResult {
        self.save_link(&SessionLink::new(engine.roster().clone(), *engine.settings()))?;
        self.files.save_checkpoint(&engine.checkpoint().paused())?;
        Ok(())
    }
}

pub fn print_notice(notice: &Notice) {
    eprintln!("{notice}");
}
