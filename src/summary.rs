use crate::locale::LocaleFormat;
use crate::models::SummaryResponse;
use crate::session::Session;

pub fn build_summary(session: &Session, locale: &dyn LocaleFormat) -> SummaryResponse {
    let (present_count, absent_count) = session.attendees.counts();
    let total = session.offerings.total();

    SummaryResponse {
        present_count,
        absent_count,
        total,
        total_label: locale.currency(total),
        date_label: session
            .date
            .map_or_else(|| locale.no_date().to_string(), |date| locale.date(date)),
    }
}
