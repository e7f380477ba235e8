//! Formatting of raw API responses

use colored::Colorize;
use reqwest::StatusCode;

use super::Formattable;
use super::json::format_json;
use super::table::{format_record, format_table};
use crate::cli::OutputFormat;
use crate::client::{ApiResponse, ResponseBody};
use crate::error::Result;
use crate::models::PetDisplay;

/// `200 OK`, `403 Forbidden`, ...
pub fn status_line(status: u16) -> String {
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("");
    format!("{} {}", status, reason).trim_end().to_string()
}

/// Table view of the body: a pet list, a single pet, or `None` for anything else
fn body_table(response: &ApiResponse) -> Option<String> {
    if let Ok(pets) = response.pets() {
        let rows: Vec<PetDisplay> = pets.iter().map(PetDisplay::from).collect();
        return Some(format_table(&rows));
    }
    if response.has_field("id") {
        if let Ok(pet) = response.pet() {
            return Some(format_record(&PetDisplay::from(&pet).fields()));
        }
    }
    None
}

fn raw_body(body: &ResponseBody) -> Result<String> {
    Ok(match body {
        ResponseBody::Json(value) => serde_json::to_string_pretty(value)?,
        ResponseBody::Text(text) => text.clone(),
    })
}

impl Formattable for ApiResponse {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Table => match body_table(self) {
                Some(table) => Ok(table),
                None => raw_body(&self.body),
            },
            OutputFormat::Pretty => {
                let status = status_line(self.status);
                let status = if self.is_success() {
                    status.green().bold()
                } else {
                    status.red().bold()
                };

                let body = match body_table(self) {
                    Some(table) => table,
                    None => raw_body(&self.body)?,
                };

                if body.is_empty() {
                    Ok(status.to_string())
                } else {
                    Ok(format!("{}\n{}", status, body))
                }
            }
        }
    }
}
