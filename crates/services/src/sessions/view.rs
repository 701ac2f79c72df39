use serde::Serialize;

use quiz_core::model::{ComparisonEntry, ComparisonReport};

/// Maximum chart label length, ellipsis included.
pub const CHART_LABEL_MAX_CHARS: usize = 20;

const LABEL_ELLIPSIS: &str = "...";

/// Presentation-agnostic bar-chart point for one question.
///
/// This is intentionally **not** a UI view-model:
/// - no colors or layout hints
/// - no localization assumptions
///
/// Serializes to the camelCase shape the charting collaborator consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,
    pub creator_score: u8,
    pub respondent_score: u8,
}

impl ChartPoint {
    #[must_use]
    pub fn from_entry(entry: &ComparisonEntry) -> Self {
        Self {
            label: chart_label(entry.question.as_str()),
            creator_score: entry.creator_score,
            respondent_score: entry.respondent_score,
        }
    }
}

/// Grouped-bar dataset for the results chart, one point per question in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChartDataset {
    points: Vec<ChartPoint>,
}

impl ChartDataset {
    #[must_use]
    pub fn from_report(report: &ComparisonReport) -> Self {
        Self {
            points: report.entries().iter().map(ChartPoint::from_entry).collect(),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Truncate question text into a chart label.
///
/// Labels are capped at `CHART_LABEL_MAX_CHARS` characters including the
/// unconditional `...` suffix. Lossy: two questions sharing a prefix become
/// indistinguishable on the chart.
fn chart_label(text: &str) -> String {
    let keep = CHART_LABEL_MAX_CHARS - LABEL_ELLIPSIS.len();
    let mut label: String = text.chars().take(keep).collect();
    label.push_str(LABEL_ELLIPSIS);
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionText;

    fn entry(text: &str, creator: u8, respondent: u8) -> ComparisonEntry {
        ComparisonEntry {
            question: QuestionText::new(text).unwrap(),
            creator_score: creator,
            respondent_score: respondent,
        }
    }

    #[test]
    fn short_text_still_gets_the_suffix() {
        let point = ChartPoint::from_entry(&entry("Hi?", 1, 2));
        assert_eq!(point.label, "Hi?...");
    }

    #[test]
    fn long_text_is_capped_at_twenty_chars() {
        let point = ChartPoint::from_entry(&entry("Do you enjoy hiking?", 5, 0));
        assert_eq!(point.label, "Do you enjoy hiki...");
        assert_eq!(point.label.chars().count(), CHART_LABEL_MAX_CHARS);
    }

    #[test]
    fn seventeen_char_text_keeps_all_its_text() {
        let point = ChartPoint::from_entry(&entry("Do you like jazz?", 4, 2));
        assert_eq!(point.label, "Do you like jazz?...");
    }

    #[test]
    fn truncation_is_char_safe() {
        let point = ChartPoint::from_entry(&entry("Magst du Jazzmusik überhaupt?", 3, 3));
        assert_eq!(point.label.chars().count(), CHART_LABEL_MAX_CHARS);
    }

    #[test]
    fn dataset_serializes_to_camel_case() {
        let report_entry = entry("Do you like jazz?", 4, 2);
        let point = ChartPoint::from_entry(&report_entry);

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": "Do you like jazz?...",
                "creatorScore": 4,
                "respondentScore": 2,
            })
        );
    }
}
