use std::fmt::{self, Debug, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;

use crate::configuration::Configuration;
use crate::harness::{self, Finding, Verdict};
use crate::utils;

static BANNER: OnceLock<()> = OnceLock::new();

/// Logs the startup banner. Only the first call in a process does anything.
pub fn announce(corpus_dir: &Path) {
    BANNER.get_or_init(|| {
        tracing::info!("== fuzz harness starting ==");
        tracing::info!("Using corpus folder: {}", corpus_dir.display());
    });
}

#[derive(thiserror::Error)]
pub enum ReplayError {
    #[error("Test case {} produced a finding.", .path.display())]
    Finding {
        path: PathBuf,
        #[source]
        finding: Finding,
    },
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ReplayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

/// Counts per verdict. `executed` covers every non-empty test case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub executed: usize,
    pub skipped: usize,
    pub granted: usize,
    pub rejected: usize,
}

impl ReplaySummary {
    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Skipped => self.skipped += 1,
            Verdict::Granted => {
                self.executed += 1;
                self.granted += 1;
            }
            Verdict::Rejected => {
                self.executed += 1;
                self.rejected += 1;
            }
        }
    }
}

/// Feeds every file of a corpus folder through the harness, in path order.
#[derive(Debug)]
pub struct CorpusReplay {
    corpus_dir: PathBuf,
    test_cases: Vec<PathBuf>,
}

impl CorpusReplay {
    pub fn build(config: &Configuration) -> Result<Self, anyhow::Error> {
        Self::from_dir(&config.harness.corpus_dir)
    }

    pub fn from_dir(corpus_dir: &Path) -> Result<Self, anyhow::Error> {
        let entries = fs::read_dir(corpus_dir)
            .with_context(|| format!("Failed to read corpus folder {}", corpus_dir.display()))?;

        let mut test_cases = Vec::new();
        for entry in entries {
            let path = entry.context("Failed to read corpus folder entry")?.path();
            if path.is_file() {
                test_cases.push(path);
            }
        }
        test_cases.sort();

        Ok(Self {
            corpus_dir: corpus_dir.to_path_buf(),
            test_cases,
        })
    }

    pub fn test_cases(&self) -> &[PathBuf] {
        &self.test_cases
    }

    /// Stops at the first finding and reports which file caused it.
    #[tracing::instrument(
        name = "Replay corpus",
        skip_all,
        fields(corpus_dir = %self.corpus_dir.display(), test_cases = self.test_cases.len())
    )]
    pub fn run_until_complete(self) -> Result<ReplaySummary, ReplayError> {
        let mut summary = ReplaySummary::default();

        for path in &self.test_cases {
            let data = fs::read(path)
                .with_context(|| format!("Failed to read test case {}", path.display()))?;

            let verdict =
                harness::run_test_case(&data).map_err(|finding| ReplayError::Finding {
                    path: path.clone(),
                    finding,
                })?;
            summary.record(verdict);
        }

        Ok(summary)
    }
}
