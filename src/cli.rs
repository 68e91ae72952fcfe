// src/cli.rs

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{QvError, Result};
use crate::io::element_table_or_default;
use crate::physics::Analysis;
use crate::rendering::{export_plot, export_target};
use crate::utils::report;

pub const USAGE: &str = "\
Usage: qview [SYMBOL] [--table PATH] [--export PATH] [--latex] [--json]

Without arguments the graphical interface starts.

  SYMBOL          element symbol, e.g. C, fe, NE
  --table PATH    element table (.csv, .xlsx, .ods) instead of the built-in one
  --export PATH   write the 3-D plot (.png or .pdf)
  --latex         also print the orbital notation as a LaTeX align* block
  --json          print the per-electron table as JSON instead of text";

/// Parsed command line of a headless run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub symbol: String,
    pub table: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub latex: bool,
    pub json: bool,
    pub help: bool,
}

pub fn parse_args<I, S>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = CliArgs::default();
    let mut symbol = None;
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => parsed.help = true,
            "--latex" => parsed.latex = true,
            "--json" => parsed.json = true,
            "--table" | "--export" => {
                let value = iter
                    .next()
                    .ok_or_else(|| QvError::Parse(format!("{} needs a path", arg)))?;
                let path = PathBuf::from(value.as_ref());
                if arg == "--table" {
                    parsed.table = Some(path);
                } else {
                    parsed.export = Some(path);
                }
            }
            flag if flag.starts_with("--") => {
                return Err(QvError::Parse(format!("unknown option {}", flag)));
            }
            value => {
                if symbol.replace(value.to_string()).is_some() {
                    return Err(QvError::Parse("only one element symbol can be given".to_string()));
                }
            }
        }
    }

    match symbol {
        Some(s) => parsed.symbol = s,
        None if parsed.help => {}
        None => return Err(QvError::Parse("missing element symbol".to_string())),
    }
    Ok(parsed)
}

/// One headless analysis. Returns the text printed to stdout.
pub fn run(args: &CliArgs, config: &Config) -> Result<String> {
    if args.help {
        return Ok(USAGE.to_string());
    }

    let table_path = args.table.as_deref().or(config.element_table.as_deref());
    let table = element_table_or_default(table_path);

    let analysis = Analysis::run(&args.symbol, &table)?;

    let mut out = if args.json {
        serde_json::to_string_pretty(&analysis.rows())
            .map_err(|e| QvError::Render(e.to_string()))?
    } else {
        report::analysis_summary(&analysis)
    };

    if args.latex {
        out.push('\n');
        out.push_str(&analysis.latex);
        out.push('\n');
    }

    if let Some(path) = &args.export {
        let (target, format) = export_target(path, config.default_export_format);
        export_plot(
            &target,
            &analysis.title(),
            &analysis.points(),
            &config.plot_style,
            config.export_size,
            format,
        )?;
        log::info!("Plot written to {:?}", target);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol_only() {
        let args = parse_args(["Fe"]).unwrap();
        assert_eq!(args.symbol, "Fe");
        assert!(args.export.is_none());
        assert!(!args.latex);
    }

    #[test]
    fn test_parse_all_options() {
        let args = parse_args(["--table", "pt.csv", "c", "--export", "c.pdf", "--latex", "--json"]).unwrap();
        assert_eq!(args.symbol, "c");
        assert_eq!(args.table, Some(PathBuf::from("pt.csv")));
        assert_eq!(args.export, Some(PathBuf::from("c.pdf")));
        assert!(args.latex && args.json);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(["--export"]).is_err());
        assert!(parse_args(["--bogus", "C"]).is_err());
        assert!(parse_args(["C", "O"]).is_err());
        assert!(parse_args(Vec::<String>::new()).is_err());
        assert!(parse_args(["--help"]).unwrap().help);
    }

    #[test]
    fn test_run_prints_report() {
        let args = parse_args(["c", "--latex"]).unwrap();
        let out = run(&args, &Config::default()).unwrap();
        assert!(out.contains("Element: C (Carbon)"));
        assert!(out.contains("1s^(2) 2s^(2) 2p^(2)"));
        assert!(out.contains(r"\begin{align*}"));
    }

    #[test]
    fn test_run_json_rows() {
        let args = parse_args(["He", "--json"]).unwrap();
        let out = run(&args, &Config::default()).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(rows.as_array().map(Vec::len), Some(2));
        assert_eq!(rows[1]["s"], -0.5);
        assert_eq!(rows[1]["orbital"], "1s");
    }

    #[test]
    fn test_run_unknown_symbol() {
        let args = parse_args(["Xq"]).unwrap();
        let err = run(&args, &Config::default()).unwrap_err();
        assert!(matches!(err, QvError::NotFound(_)));
    }

    #[test]
    fn test_run_exports_plot() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("oxygen");
        let args = CliArgs {
            symbol: "O".into(),
            export: Some(target.clone()),
            ..CliArgs::default()
        };
        run(&args, &Config::default()).unwrap();
        assert!(target.with_extension("png").exists());
    }
}
