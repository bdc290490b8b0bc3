use kinesis_battle::BattleError;
use kinesis_protocol::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("Line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: BattleError,
    },

    #[error("Invalid battle: {0}")]
    Battle(#[from] BattleError),

    #[error("Invalid extractor config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("Failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to write feature table: {0}")]
    Csv(#[from] csv::Error),
}
