use chrono::NaiveDate;
use serde::Serialize;

use crate::attendees::AttendeeList;
use crate::errors::ReportError;
use crate::locale::LocaleFormat;
use crate::offerings::OfferingList;

pub const REPORT_FILENAME: &str = "lista-chamada-ofertas.pdf";

pub const PRESENT_FILL: Rgb = Rgb(198, 239, 206);
pub const ABSENT_FILL: Rgb = Rgb(255, 199, 206);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub cells: [String; 3],
    pub fill: Option<Rgb>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    pub heading: String,
    pub columns: [String; 3],
    pub rows: Vec<ReportRow>,
}

// Tables are stacked top to bottom; the page turns this into PDF bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub tables: Vec<ReportTable>,
    pub total_line: Option<String>,
}

pub fn export(
    attendees: &AttendeeList,
    offerings: &OfferingList,
    date: Option<NaiveDate>,
    locale: &dyn LocaleFormat,
) -> Result<Report, ReportError> {
    if attendees.is_empty() && offerings.is_empty() {
        return Err(ReportError::Empty);
    }

    let date_label = date.map_or_else(|| locale.no_date().to_string(), |d| locale.date(d));
    let mut tables = Vec::with_capacity(2);

    if !attendees.is_empty() {
        let rows = attendees
            .entries()
            .iter()
            .enumerate()
            .map(|(i, a)| ReportRow {
                cells: [
                    (i + 1).to_string(),
                    a.name.clone(),
                    locale.presence(a.present).to_string(),
                ],
                fill: Some(if a.present { PRESENT_FILL } else { ABSENT_FILL }),
            })
            .collect();
        tables.push(ReportTable {
            heading: locale.attendance_title().to_string(),
            columns: locale.attendance_columns().map(String::from),
            rows,
        });
    }

    let mut total_line = None;
    if !offerings.is_empty() {
        let rows = offerings
            .entries()
            .iter()
            .enumerate()
            .map(|(i, o)| ReportRow {
                cells: [
                    (i + 1).to_string(),
                    o.description.clone(),
                    locale.currency(o.amount),
                ],
                fill: None,
            })
            .collect();
        tables.push(ReportTable {
            heading: locale.offerings_title().to_string(),
            columns: locale.offering_columns().map(String::from),
            rows,
        });
        total_line = Some(format!(
            "{}: {}",
            locale.total_label(),
            locale.currency(offerings.total())
        ));
    }

    Ok(Report {
        title: format!("{} - {date_label}", locale.attendance_title()),
        tables,
        total_line,
    })
}
