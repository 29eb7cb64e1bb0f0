// registry.rs - Selectable strategy variants

use std::fmt;
use std::str::FromStr;
use super::traits::DistanceStrategy;
use super::{BatchedStrategy, MapReduceStrategy, SequentialStrategy, SharedCounterStrategy};

/// Strategy selector used by the CLI, configuration files and the executor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Sequential,
    #[default]
    Batched,
    SharedCounter,
    MapReduce,
}

impl StrategyKind {
    /// Every variant, baseline first.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Sequential,
        StrategyKind::Batched,
        StrategyKind::SharedCounter,
        StrategyKind::MapReduce,
    ];

    pub fn build(self) -> Box<dyn DistanceStrategy> {
        match self {
            StrategyKind::Sequential => Box::new(SequentialStrategy),
            StrategyKind::Batched => Box::new(BatchedStrategy),
            StrategyKind::SharedCounter => Box::new(SharedCounterStrategy),
            StrategyKind::MapReduce => Box::new(MapReduceStrategy),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Sequential => "sequential",
            StrategyKind::Batched => "batched",
            StrategyKind::SharedCounter => "shared-counter",
            StrategyKind::MapReduce => "map-reduce",
        }
    }

    /// Names accepted by `from_str`, for error messages and help text.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.as_str()).collect()
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "serial" => Ok(StrategyKind::Sequential),
            "batched" | "pool" => Ok(StrategyKind::Batched),
            "shared-counter" | "shared" | "atomic" => Ok(StrategyKind::SharedCounter),
            "map-reduce" | "mapreduce" => Ok(StrategyKind::MapReduce),
            _ => Err(format!(
                "Invalid strategy: {}. Use: {}",
                s,
                Self::names().join(", ")
            )),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
