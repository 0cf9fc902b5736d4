use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::history::HistoryStatus;
use crate::report::Report;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingView {
    pub description: String,
    pub amount: Decimal,
    pub amount_label: String,
}

#[derive(Debug, Deserialize)]
pub struct AddAttendeeRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddOfferingRequest {
    pub description: String,
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionDateRequest {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct CredentialRequest {
    pub token: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub present_count: usize,
    pub absent_count: usize,
    pub total: Decimal,
    pub total_label: String,
    pub date_label: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub date: Option<NaiveDate>,
    pub attendees: Vec<Attendee>,
    pub offerings: Vec<OfferingView>,
    pub summary: SummaryResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResponse {
    pub cleared: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub status: HistoryStatus,
    pub names: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub filename: &'static str,
    pub report: Report,
}
