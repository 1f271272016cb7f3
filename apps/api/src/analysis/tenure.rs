//! Tenure accumulation across experience entries.

use chrono::NaiveDate;

use crate::analysis::dates::parse_date;
use crate::extract::patterns::PART_TIME;
use crate::models::ExperienceEntry;

/// Weight applied to internships, contracts, and other part-time work.
const PART_TIME_WEIGHT: f64 = 0.5;

pub fn is_part_time(role: &str, company: &str) -> bool {
    PART_TIME.is_match(role) || PART_TIME.is_match(company)
}

fn is_present(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "present" | "current" | "now")
}

/// Sums tenure in years over all entries with a parseable start date. An open
/// end (`Present`, `Current`, `Now`) runs to `today`; part-time entries count
/// at half weight. The sum is rounded to one decimal. Entries whose end
/// precedes their start contribute negatively — the validator flags those,
/// this function just adds up what the dates say.
pub fn compute_experience_years(entries: &[ExperienceEntry], today: NaiveDate) -> f64 {
    let mut total = 0.0;
    for entry in entries {
        let Some(start) = parse_date(&entry.start_date) else {
            continue;
        };
        let end = if is_present(&entry.end_date) {
            today
        } else {
            match parse_date(&entry.end_date) {
                Some(d) => d,
                None => continue,
            }
        };

        let years = (end - start).num_days() as f64 / 365.0;
        let weight = if is_part_time(&entry.role, &entry.company) {
            PART_TIME_WEIGHT
        } else {
            1.0
        };
        total += years * weight;
    }

    (total * 10.0).round() / 10.0
}
