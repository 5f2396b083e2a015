use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// config for one batch of xpas_algs runs.
// the defaults reproduce the revision benchmark (fig. 8), a toml file can override
// any of the fields
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BenchmarkSuiteConfig {
    pub output_folder: PathBuf,
    pub time_binary: PathBuf,
    pub xpas_algs_binary: PathBuf,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub ar_file: PathBuf,
    pub ghost_file: PathBuf,
}

impl Dataset {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(name: &str, ar_file: P, ghost_file: Q) -> Self {
        Self {
            name: name.to_owned(),
            ar_file: ar_file.into(),
            ghost_file: ghost_file.into(),
        }
    }
}

impl Default for BenchmarkSuiteConfig {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from("revision-fig8"),
            time_binary: PathBuf::from("/usr/bin/time"),
            xpas_algs_binary: PathBuf::from("cmake-build-release/bin/xpas_algs"),
            datasets: vec![
                Dataset::new(
                    "neotrop",
                    "/ngs/rappas/neotrop/temp/AR/extended_align.phylip.raxml.ancestralProbs",
                    "data/neotrop.ghost_ids.txt",
                ),
                Dataset::new(
                    "D155",
                    "/ngs/rappas/D155/temp/AR/extended_align.phylip.raxml.ancestralProbs",
                    "data/d155.ghost_ids.txt",
                ),
            ],
        }
    }
}

impl BenchmarkSuiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_file_str = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        let config = toml::from_str(&config_file_str)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn setup(&self) -> std::io::Result<()> {
        if !self.output_folder.exists() {
            fs::create_dir_all(&self.output_folder)?;
        }

        Ok(())
    }
}
