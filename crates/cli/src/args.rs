// crates/cli/src/args.rs
use std::ops::Range;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::options::{Mode, Operation, OutputFormat};
use crate::parsers;

#[derive(Parser, Debug)]
#[command(name = "lazyq", version, about = "遅延クエリと並列集計の計測ツール")]
pub struct Args {
    /// ログの詳細度 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", global = true, help_heading = "出力")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// シード付き乱数列に対して集計を実行する
    Aggregate(AggregateArgs),
    /// 試し割りで素数を列挙する
    Primes(PrimesArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ParallelArgs {
    /// ワーカー数（既定: 論理コア数）
    #[arg(short, long, value_parser = parsers::parse_usize_1_to_512, help_heading = "並列実行")]
    pub jobs: Option<usize>,

    /// 1パーティションあたりの最小要素数
    #[arg(long, default_value = "1", value_parser = parsers::parse_positive_usize, help_heading = "並列実行")]
    pub min_partition: usize,

    /// 指定ミリ秒後に並列実行をキャンセルする
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "並列実行")]
    pub timeout_ms: Option<usize>,

    /// 実行モード
    #[arg(long, value_enum, default_value = "both", help_heading = "並列実行")]
    pub mode: Mode,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AggregateArgs {
    /// 集計演算（複数可）
    #[arg(long = "op", value_enum, value_delimiter = ',', default_value = "max,avg")]
    pub operations: Vec<Operation>,

    /// 要素数
    #[arg(long, default_value = "1_000_000", value_parser = parsers::parse_positive_usize)]
    pub len: usize,

    /// 乱数シード
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// 値の範囲 (LOW..HIGH, 半開区間)
    #[arg(long, default_value = "1..100_000_000", value_parser = parsers::parse_value_range)]
    pub range: Range<i64>,

    #[command(flatten)]
    pub parallel: ParallelArgs,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct PrimesArgs {
    /// 上限（この値未満の素数を対象とする）
    #[arg(long, default_value = "1_000_000", value_parser = parsers::parse_positive_usize)]
    pub limit: usize,

    #[command(flatten)]
    pub parallel: ParallelArgs,
}
