use std::fmt;

use log::{error, info};

/// Logs one step of a search's life. `label` is the search generation,
/// or `"sample"` for the start-up sample fetch.
pub fn update(label: impl fmt::Display, stage: Stage) {
    match stage {
        Stage::Failed(err) => error!("{}: {:#?}", line(&label, &stage), err),
        other => info!("{}", line(&label, &other)),
    }
}

fn line(label: &dyn fmt::Display, stage: &Stage) -> String {
    format!("{}: {}", label, stage)
}

pub enum Stage<'a> {
    SampleIssued,
    SampleLoaded(usize),
    Edited,
    Issued(&'a str),
    Loaded(usize),
    /// Carries the generation that is current when the stale result lands.
    Discarded(u64),
    Failed(&'a anyhow::Error),
}

impl<'a> fmt::Display for Stage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleIssued => f.write_str("Sample Issued"),
            Self::SampleLoaded(count) => write!(f, "Sample Loaded ({} books)", count),
            Self::Edited => f.write_str("Edited"),
            Self::Issued(query) => write!(f, "Issued {:?}", query),
            Self::Loaded(count) => write!(f, "Loaded ({} books)", count),
            Self::Discarded(current) => write!(f, "Discarded (current is {})", current),
            Self::Failed(_) => f.write_str("Fail"),
        }
    }
}
