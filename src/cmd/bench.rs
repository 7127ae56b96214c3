use crate::reports::{self, Metrics};
use clap::Args;
use once_cell::sync::Lazy;
use regex::Regex;
use slop_detector::error::SdResult;
use std::fs;
use tracing::{info, warn};

// One labeled row: text (possibly quoted), model prediction, library
// prediction, human ground truth.
static ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(".*?"|[^,]*),([^,]*),([^,]*),([^,]*)$"#).unwrap());

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// CSV file with columns: text, modelPrediction, libraryPrediction, humanLabel
    #[arg(short, long)]
    pub file: String,
}

pub fn run(args: BenchArgs) -> SdResult<()> {
    let content = fs::read_to_string(&args.file)?;

    let mut model = Vec::new();
    let mut library = Vec::new();
    let mut human = Vec::new();

    // Skip the header row; malformed rows are skipped, not fatal.
    for (idx, line) in content.trim().lines().skip(1).enumerate() {
        let Some(caps) = ROW_RE.captures(line) else {
            warn!(row = idx + 2, "skipping malformed CSV row");
            continue;
        };
        let flag = |i: usize| caps[i].trim().eq_ignore_ascii_case("true");
        model.push(flag(2));
        library.push(flag(3));
        human.push(flag(4));
    }

    info!(file = %args.file, rows = human.len(), "loaded benchmark rows");

    let model_metrics = Metrics::from_predictions(&model, &human);
    let library_metrics = Metrics::from_predictions(&library, &human);

    reports::print_benchmark_report(human.len(), &model_metrics, &library_metrics);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_row_regex_plain() {
        let caps = ROW_RE.captures("asdfghjkl,true,false,true").unwrap();
        assert_eq!(&caps[1], "asdfghjkl");
        assert_eq!(&caps[2], "true");
        assert_eq!(&caps[3], "false");
        assert_eq!(&caps[4], "true");
    }

    #[test]
    fn test_row_regex_quoted_text() {
        // quoted field may contain commas
        let caps = ROW_RE.captures(r#""hello, world",false,false,false"#).unwrap();
        assert_eq!(&caps[1], r#""hello, world""#);
        assert_eq!(&caps[4], "false");
    }

    #[test]
    fn test_row_regex_rejects_short_rows() {
        assert!(ROW_RE.captures("only,three,fields").is_none());
    }

    #[test]
    fn test_run_on_labeled_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "text,modelPrediction,libraryPrediction,humanLabel").unwrap();
        writeln!(file, "asdfghjkl,true,true,true").unwrap();
        writeln!(file, "hello there,false,false,false").unwrap();
        writeln!(file, "this row is malformed").unwrap();
        writeln!(file, "qwertyuiop,TRUE,false,true").unwrap();

        let args = BenchArgs {
            file: file.path().to_string_lossy().into_owned(),
        };
        run(args).unwrap();
    }

    #[test]
    fn test_run_missing_file_errors() {
        let args = BenchArgs {
            file: "/nonexistent/bench.csv".into(),
        };
        assert!(run(args).is_err());
    }
}
