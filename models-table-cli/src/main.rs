use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use models_table::model::{Record, TableRecord, records_from_json, stringify};
use models_table::{Action, ActionResult, ColumnSpec, ModelsTable, TableConfig};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

#[derive(Parser)]
#[command(name = "models-table")]
#[command(about = "Filter, sort and page a JSON record set", long_about = None)]
struct Cli {
    /// JSON array of record objects
    #[arg(long, short = 'd')]
    data: PathBuf,

    /// JSON table configuration (columns, page size, messages)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Global filter text
    #[arg(long, short = 'f')]
    filter: Option<String>,

    /// Per-column filter as INDEX=TEXT, repeatable
    #[arg(long, value_parser = parse_column_filter)]
    column_filter: Vec<(usize, String)>,

    /// Click a column header by index, repeatable (twice flips direction)
    #[arg(long, short = 's')]
    sort: Vec<usize>,

    /// Page to show, 1-based
    #[arg(long, short = 'p', conflicts_with = "last")]
    page: Option<usize>,

    /// Show the last page
    #[arg(long)]
    last: bool,

    /// Pick a page size by its position in the configured page sizes
    #[arg(long)]
    page_size_index: Option<usize>,

    /// Filter without regard to case
    #[arg(long, short = 'i')]
    ignore_case: bool,

    /// Write debug logs to this file instead of warnings to stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_column_filter(arg: &str) -> Result<(usize, String)> {
    let Some((index, text)) = arg.split_once('=') else {
        bail!("expected INDEX=TEXT, got '{}'", arg);
    };
    let index = index
        .trim()
        .parse()
        .with_context(|| format!("invalid column index '{}'", index))?;
    Ok((index, text.to_string()))
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            WriteLogger::init(LevelFilter::Debug, Config::default(), file)
                .context("Failed to initialize logger")?;
        }
        None => {
            TermLogger::init(
                LevelFilter::Warn,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )
            .context("Failed to initialize logger")?;
        }
    }
    Ok(())
}

fn load_table(cli: &Cli) -> Result<ModelsTable> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            TableConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => TableConfig::default(),
    };

    let json = fs::read_to_string(&cli.data)
        .with_context(|| format!("Failed to read data {}", cli.data.display()))?;
    let records = records_from_json(&json)
        .with_context(|| format!("Invalid data {}", cli.data.display()))?;

    if config.columns.is_empty() {
        log::debug!("no columns configured, using the keys of the first record");
        config.columns = default_columns(&records);
    }

    Ok(ModelsTable::new(records, config))
}

/// One column per key of the first record, in key order.
fn default_columns(records: &[Record]) -> Vec<ColumnSpec> {
    let mut keys: Vec<&String> = records
        .first()
        .map(|record| record.fields().keys().collect())
        .unwrap_or_default();
    keys.sort();
    keys.into_iter().map(ColumnSpec::property).collect()
}

fn apply(table: &mut ModelsTable, action: Action) {
    let description = format!("{:?}", action);
    if table.dispatch(action) == ActionResult::Ignored {
        log::warn!("{} had no effect", description);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut table = load_table(&cli)?;

    if cli.ignore_case {
        table.set_filtering_ignore_case(true);
    }
    if let Some(filter) = cli.filter {
        apply(&mut table, Action::Filter(filter));
    }
    for (column, text) in cli.column_filter {
        apply(&mut table, Action::FilterColumn { column, text });
    }
    for column in cli.sort {
        apply(&mut table, Action::Sort(column));
    }
    if let Some(index) = cli.page_size_index {
        apply(&mut table, Action::ChangePageSize(index));
    }
    if cli.last {
        apply(&mut table, Action::GotoLast);
    } else if let Some(page) = cli.page {
        apply(&mut table, Action::GotoCustomPage(page));
    }

    print!("{}", render(&table));
    Ok(())
}

fn render(table: &ModelsTable) -> String {
    let mut out = String::new();

    if table.all_columns_are_hidden() {
        out.push_str(&table.messages().all_columns_are_hidden);
        out.push('\n');
        return out;
    }

    let columns: Vec<_> = table.columns().visible().map(|(_, c)| c).collect();
    let rows: Vec<Vec<String>> = table
        .visible_content()
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|c| match &c.property_name {
                    Some(property) => stringify(record.property(property).as_ref()),
                    None => String::new(),
                })
                .collect()
        })
        .collect();

    let headers: Vec<String> = columns
        .iter()
        .map(|c| {
            let marker = if c.sort_asc {
                " ^"
            } else if c.sort_desc {
                " v"
            } else {
                ""
            };
            format!("{}{}", c.title, marker)
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    out.push_str(&line(&headers));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');

    if rows.is_empty() {
        out.push_str(&table.messages().no_data_to_show);
        out.push('\n');
    }
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }

    out.push('\n');
    let pages: Vec<String> = table
        .visible_page_numbers()
        .iter()
        .map(|p| {
            if p.is_active {
                format!("[{}]", p.label)
            } else {
                p.label.to_string()
            }
        })
        .collect();
    if !pages.is_empty() {
        out.push_str(&pages.join(" "));
        out.push('\n');
    }
    out.push_str(&table.summary());
    out.push('\n');

    out
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModelsTable {
        let records = vec![
            Record::new().set("name", "Ann").set("age", 40),
            Record::new().set("name", "Bea").set("age", 31),
        ];
        ModelsTable::new(records.clone(), TableConfig::default().with_columns(default_columns(&records)))
    }

    #[test]
    fn test_parse_column_filter() {
        assert_eq!(parse_column_filter("2=abc").unwrap(), (2, "abc".to_string()));
        assert_eq!(parse_column_filter("0=a=b").unwrap(), (0, "a=b".to_string()));
        assert!(parse_column_filter("abc").is_err());
        assert!(parse_column_filter("x=abc").is_err());
    }

    #[test]
    fn test_default_columns_sorted_keys() {
        let table = sample();
        let titles: Vec<&str> = table.columns().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Age", "Name"]);
    }

    #[test]
    fn test_render_sorted_page() {
        let mut table = sample();
        table.sort(0).unwrap();

        let out = render(&table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Age ^ | Name");
        assert_eq!(lines[2], "31    | Bea");
        assert_eq!(lines[3], "40    | Ann");
        assert_eq!(lines[5], "[1]");
        assert_eq!(lines[6], "Show 1 - 2 of 2");
    }

    #[test]
    fn test_render_all_hidden() {
        let mut table = sample();
        table.hide_all_columns();
        assert_eq!(render(&table).trim_end(), table.messages().all_columns_are_hidden);
    }
}
