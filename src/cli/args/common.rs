//! Common CLI types shared across commands

use chrono::{NaiveDate, NaiveTime};
use clap::Args;

use crate::client::models::SaidaRequest;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - indented objects, tables for lists (global default)
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

/// Parse a departure time given as `HH:MM` or `HH:MM:SS`
pub fn parse_horario(input: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .map_err(|_| format!("invalid time '{}', expected HH:MM", input))
}

/// Inclusive date range used by reports
#[derive(Debug, Clone, Args)]
pub struct DateRangeArgs {
    /// First day (YYYY-MM-DD)
    #[arg(long = "inicio")]
    pub data_inicio: NaiveDate,

    /// Last day (YYYY-MM-DD)
    #[arg(long = "fim")]
    pub data_fim: NaiveDate,
}

/// A departure: date, time slot and driver
#[derive(Debug, Clone, Args)]
pub struct SaidaArgs {
    /// Travel date (YYYY-MM-DD)
    #[arg(long)]
    pub data: NaiveDate,

    /// Departure time (HH:MM)
    #[arg(long, value_parser = parse_horario)]
    pub horario: NaiveTime,

    /// Driver ID
    #[arg(long = "motorista")]
    pub motorista_id: i64,
}

impl From<&SaidaArgs> for SaidaRequest {
    fn from(args: &SaidaArgs) -> Self {
        SaidaRequest {
            data: args.data,
            horario: args.horario,
            motorista_id: args.motorista_id,
        }
    }
}
