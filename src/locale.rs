use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub trait LocaleFormat: Send + Sync {
    fn date(&self, date: NaiveDate) -> String;
    fn currency(&self, amount: Decimal) -> String;
    fn no_date(&self) -> &'static str;
    fn presence(&self, present: bool) -> &'static str;
    fn attendance_title(&self) -> &'static str;
    fn attendance_columns(&self) -> [&'static str; 3];
    fn offerings_title(&self) -> &'static str;
    fn offering_columns(&self) -> [&'static str; 3];
    fn total_label(&self) -> &'static str;
}

/// Brazilian Portuguese: `18/10/2026`, `R$ 1.234,56`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PtBr;

impl LocaleFormat for PtBr {
    fn date(&self, date: NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }

    fn currency(&self, amount: Decimal) -> String {
        let mut rounded =
            amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        let plain = rounded.abs().to_string();
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}R$ {},{frac_part}", group_thousands(int_part, '.'))
    }

    fn no_date(&self) -> &'static str {
        "Sem data"
    }

    fn presence(&self, present: bool) -> &'static str {
        if present { "Presente" } else { "Ausente" }
    }

    fn attendance_title(&self) -> &'static str {
        "Lista de Presença"
    }

    fn attendance_columns(&self) -> [&'static str; 3] {
        ["#", "Nome", "Presença"]
    }

    fn offerings_title(&self) -> &'static str {
        "Ofertas"
    }

    fn offering_columns(&self) -> [&'static str; 3] {
        ["#", "Descrição", "Valor"]
    }

    fn total_label(&self) -> &'static str {
        "Total"
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
