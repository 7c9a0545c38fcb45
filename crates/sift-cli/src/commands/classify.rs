//! Classify command

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::output::{to_json, OutputFormat};
use crate::AppContext;
use sift_core::{ErrorKind, FailureTranslator};
use sift_search::{
    ErrorCode, Failure, ParseFailure, RuntimeFailure, SearchFailure, SearchFailureTranslator,
    ServerFailure,
};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Status code reported by the search engine
    #[arg(long, allow_hyphen_values = true)]
    pub code: i32,

    /// Message reported by the search engine
    #[arg(short, long)]
    pub message: String,

    /// Attach a query parse failure with this message
    #[arg(long)]
    pub parse: Option<String>,

    /// Shape of the failure chain
    #[arg(long, value_enum, default_value = "full")]
    pub shape: Shape,

    /// Message of the outer runtime failure (default from config)
    #[arg(long)]
    pub outer: Option<String>,

    /// Message of the server failure wrapper
    #[arg(long, default_value = "Error executing query")]
    pub server_message: String,
}

/// Nesting of the generated failure chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// runtime -> server -> search
    Full,
    /// server -> search
    Server,
    /// search only
    Bare,
}

/// Outcome of a classification
#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub handled: bool,
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    pub message: String,
    pub cause_chain: Vec<String>,
}

/// Build the failure chain described by `args`
pub fn build_failure(args: &ClassifyArgs, outer_message: &str) -> Failure {
    let mut search = SearchFailure::new(args.code, args.message.clone());
    if let Some(ref parse) = args.parse {
        search = search.caused_by(ParseFailure::new(parse.clone()));
    }

    match args.shape {
        Shape::Bare => search.into(),
        Shape::Server => ServerFailure::new(args.server_message.clone())
            .caused_by(search)
            .into(),
        Shape::Full => RuntimeFailure::new(outer_message)
            .caused_by(ServerFailure::new(args.server_message.clone()).caused_by(search))
            .into(),
    }
}

pub fn classify(args: &ClassifyArgs, outer_message: &str) -> ClassifyReport {
    let failure = build_failure(args, outer_message);
    let code = ErrorCode::from_code(args.code);

    match SearchFailureTranslator::new().translate(&failure) {
        Some(err) => ClassifyReport {
            handled: true,
            code,
            kind: Some(err.kind()),
            message: err.message().to_string(),
            cause_chain: err.cause_chain(),
        },
        None => ClassifyReport {
            handled: false,
            code,
            kind: None,
            message: failure.message().to_string(),
            cause_chain: std::iter::successors(failure.cause(), |f| f.cause())
                .map(|f| f.message().to_string())
                .collect(),
        },
    }
}

pub fn run(args: &ClassifyArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let outer = args.outer.as_deref().unwrap_or(&ctx.config.outer_message);
    let report = classify(args, outer);

    tracing::info!(handled = report.handled, code = %report.code, "Classified failure");

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&report)?),
        OutputFormat::Table => {
            match report.kind {
                Some(kind) => println!("{}: {}", kind, report.message),
                None => println!("unhandled: {}", report.message),
            }
            println!("  code: {}", report.code);
            for cause in &report.cause_chain {
                println!("  caused by: {}", cause);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(code: i32, shape: Shape, parse: Option<&str>) -> ClassifyArgs {
        ClassifyArgs {
            code,
            message: "engine says no".to_string(),
            parse: parse.map(String::from),
            shape,
            outer: None,
            server_message: "Error executing query".to_string(),
        }
    }

    #[test]
    fn test_build_full_shape() {
        let failure = build_failure(&args(404, Shape::Full, None), "outer");
        assert_eq!(failure.depth(), 3);
        assert_eq!(failure.message(), "outer");
    }

    #[test]
    fn test_build_with_parse_failure() {
        let failure = build_failure(&args(400, Shape::Bare, Some("bad query")), "outer");
        assert_eq!(failure.depth(), 2);
        assert!(matches!(failure.cause(), Some(Failure::Parse(_))));
    }

    #[test]
    fn test_report_handled() {
        let report = classify(&args(503, Shape::Full, None), "outer");
        assert!(report.handled);
        assert_eq!(report.kind, Some(ErrorKind::ResourceFailure));
        assert_eq!(report.message, "engine says no");
        assert_eq!(report.cause_chain, vec!["engine says no"]);
    }

    #[test]
    fn test_report_parse_failure() {
        let report = classify(&args(500, Shape::Full, Some("Cannot parse")), "outer");
        assert_eq!(report.kind, Some(ErrorKind::InvalidApiUsage));
        assert_eq!(report.message, "Cannot parse");
    }

    #[test]
    fn test_report_unhandled_keeps_original_chain() {
        let report = classify(&args(404, Shape::Server, None), "outer");
        assert!(!report.handled);
        assert_eq!(report.kind, None);
        assert_eq!(report.message, "Error executing query");
        assert_eq!(report.cause_chain, vec!["engine says no"]);
    }
}
