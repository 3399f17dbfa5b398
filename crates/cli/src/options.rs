// crates/cli/src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// 集計演算
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Max,
    Min,
    Sum,
    /// 算術平均
    Avg,
    Count,
}

/// 実行モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Sequential,
    Parallel,
    /// 逐次と並列の両方を実行して比較
    #[default]
    Both,
}

impl Mode {
    pub const fn runs_sequential(self) -> bool {
        matches!(self, Self::Sequential | Self::Both)
    }

    pub const fn runs_parallel(self) -> bool {
        matches!(self, Self::Parallel | Self::Both)
    }
}
