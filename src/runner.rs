use std::{
    ffi::OsString,
    fs::File,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::{debug, error, info, warn};
use strum::IntoEnumIterator;

use crate::{
    algorithms::Algorithm,
    config::{BenchmarkSuiteConfig, Dataset},
    error::RunnerError,
};

type Result<T> = std::result::Result<T, RunnerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Execute,
    DryRun,
}

// one xpas_algs invocation and the two files it leaves behind
#[derive(Debug)]
pub struct RunDescriptor<'a> {
    pub dataset: &'a Dataset,
    pub algorithm: Algorithm,
    pub csv_path: PathBuf,
    pub time_path: PathBuf,
}

impl<'a> RunDescriptor<'a> {
    pub fn new(dataset: &'a Dataset, algorithm: Algorithm, output_folder: &Path) -> Self {
        let stem = format!("{}-{}", dataset.name, algorithm);

        Self {
            dataset,
            algorithm,
            csv_path: output_folder.join(format!("{stem}.csv")),
            time_path: output_folder.join(format!("{stem}.time")),
        }
    }

    // time tool first, the rest are its arguments
    pub fn command_line(&self, suite_config: &BenchmarkSuiteConfig) -> Vec<OsString> {
        let mut command_line: Vec<OsString> = vec![
            suite_config.time_binary.clone().into(),
            "-v".into(),
            suite_config.xpas_algs_binary.clone().into(),
            self.dataset.ar_file.clone().into(),
            self.dataset.ghost_file.clone().into(),
        ];

        command_line.extend(
            self.algorithm
                .flags()
                .iter()
                .map(|flag| OsString::from(flag.to_string())),
        );
        command_line.push(self.csv_path.clone().into());

        command_line
    }
}

fn command_string(command_line: &[OsString]) -> String {
    command_line
        .iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

fn announcement(command_line: &[OsString]) -> String {
    format!("Running: {}...", command_string(command_line))
}

/// Every path that has to exist before the first run, in the order they are checked.
pub fn necessary_files(suite_config: &BenchmarkSuiteConfig) -> Vec<&Path> {
    let mut files = vec![
        suite_config.time_binary.as_path(),
        suite_config.xpas_algs_binary.as_path(),
    ];
    files.extend(suite_config.datasets.iter().map(|d| d.ar_file.as_path()));
    files.extend(suite_config.datasets.iter().map(|d| d.ghost_file.as_path()));
    files
}

pub fn missing_files(suite_config: &BenchmarkSuiteConfig) -> Vec<&Path> {
    necessary_files(suite_config)
        .into_iter()
        .filter(|path| !path.exists())
        .collect()
}

pub struct Runner<'a> {
    suite_config: &'a BenchmarkSuiteConfig,
    mode: RunMode,
}

impl<'a> Runner<'a> {
    pub fn new(suite_config: &'a BenchmarkSuiteConfig, mode: RunMode) -> Self {
        Self { suite_config, mode }
    }

    pub fn validate_inputs(&self) -> Result<()> {
        for path in necessary_files(self.suite_config) {
            debug!("checking {}", path.display());
        }

        let missing = missing_files(self.suite_config);
        for path in missing.iter().skip(1) {
            warn!("also missing: {}", path.display());
        }

        match missing.first() {
            Some(path) => Err(RunnerError::MissingFile(path.to_path_buf())),
            None => Ok(()),
        }
    }

    fn dataset_runs<'d>(&self, dataset: &'d Dataset) -> Vec<RunDescriptor<'d>> {
        Algorithm::iter()
            .map(|algorithm| {
                RunDescriptor::new(dataset, algorithm, &self.suite_config.output_folder)
            })
            .collect()
    }

    /// What `run` prints before each invocation, in execution order.
    pub fn announcements(&self) -> Vec<String> {
        self.suite_config
            .datasets
            .iter()
            .flat_map(|dataset| self.dataset_runs(dataset))
            .map(|descriptor| announcement(&descriptor.command_line(self.suite_config)))
            .collect()
    }

    pub fn run_dataset(&self, dataset: &Dataset) -> Result<()> {
        info!("dataset {}", dataset.name);

        for descriptor in self.dataset_runs(dataset) {
            let algorithm = descriptor.algorithm;
            let command_line = descriptor.command_line(self.suite_config);

            println!("\n{}\n", announcement(&command_line));

            if self.mode == RunMode::DryRun {
                continue;
            }

            let time_file = File::create(&descriptor.time_path)?;

            let status = Command::new(&command_line[0])
                .args(&command_line[1..])
                .stdout(Stdio::inherit())
                .stderr(time_file)
                .status()?;

            if !status.success() {
                error!(
                    "{} with {} failed, see {}",
                    dataset.name,
                    algorithm,
                    descriptor.time_path.display()
                );
                return Err(RunnerError::SubprocessFailure {
                    code: status.code(),
                });
            }
        }

        Ok(())
    }

    pub fn run(&self) -> Result<()> {
        self.validate_inputs()?;

        if self.mode == RunMode::DryRun {
            for line in self.announcements() {
                println!("\n{line}\n");
            }
            return Ok(());
        }

        self.suite_config.setup()?;

        info!(
            "running {} dataset(s) into {}",
            self.suite_config.datasets.len(),
            self.suite_config.output_folder.display()
        );

        for dataset in &self.suite_config.datasets {
            self.run_dataset(dataset)?;
        }

        info!("all runs finished");

        Ok(())
    }
}
