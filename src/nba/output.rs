use std::io::Write;
use anyhow::Result;
use clap::ArgEnum;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::nba::error::StatsError;
use crate::nba::live_data::QuarterBreakdown;
use crate::nba::reshape::{CareerReport, CommonInfoReport, GameLogReport, LivePlayerLine, LookupReport, ScoreboardReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ArgEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

/// One team's line in the scoreboard table.
#[derive(Debug, Clone, Tabled)]
struct PeriodRow {
    team: String,
    q1: i64,
    q2: i64,
    q3: i64,
    q4: i64,
    ot: i64,
    total: i64,
}

impl PeriodRow {
    fn new(team: &str, b: &QuarterBreakdown) -> Self {
        PeriodRow { team: team.to_string(), q1: b.q1, q2: b.q2, q3: b.q3, q4: b.q4, ot: b.ot, total: b.total }
    }
}

/// Terminal rendering for `--format table`.
pub trait Render: Serialize {
    fn table(&self) -> String;
}

impl Render for LivePlayerLine {
    fn table(&self) -> String {
        Table::new(vec![self.clone()]).to_string()
    }
}

impl Render for GameLogReport {
    fn table(&self) -> String {
        format!("{} ({})\n{}", self.player, self.season, Table::new(self.games.clone()))
    }
}

impl Render for CareerReport {
    fn table(&self) -> String {
        format!("{}\n{}", self.player, Table::new(vec![self.career.clone()]))
    }
}

impl Render for CommonInfoReport {
    fn table(&self) -> String {
        Table::new(vec![self.clone()]).to_string()
    }
}

impl Render for ScoreboardReport {
    fn table(&self) -> String {
        let mut out = format!("games on {}\n", self.game_date);
        for g in &self.games {
            out.push_str(&format!("game_id: {} [{}]\n", g.game_id, g.status_text));
            let rows = vec![PeriodRow::new(&g.away, &g.away_periods), PeriodRow::new(&g.home, &g.home_periods)];
            out.push_str(&Table::new(rows).to_string());
            out.push('\n');
        }
        out
    }
}

impl Render for LookupReport {
    fn table(&self) -> String {
        Table::new(self.matches.clone()).to_string()
    }
}

/// JSON with four-space indentation, the layout the downstream client
/// was written against.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut *out, formatter);
    value.serialize(&mut ser)?;
    writeln!(out)?;
    Ok(())
}

/// Writes either the report or an `{"error": ...}` object. Failures to
/// reach the provider are reported the same way so the caller always gets
/// parseable output.
pub fn emit<W: Write, T: Render>(out: &mut W, result: &std::result::Result<T, StatsError>, format: OutputFormat) -> Result<()> {
    match (result, format) {
        (Ok(report), OutputFormat::Json) => write_json(out, report),
        (Ok(report), OutputFormat::Table) => {
            writeln!(out, "{}", report.table())?;
            Ok(())
        }
        (Err(e), OutputFormat::Json) => write_json(out, &ErrorReport { error: e.to_string() }),
        (Err(e), OutputFormat::Table) => {
            writeln!(out, "error: {}", e)?;
            Ok(())
        }
    }
}
