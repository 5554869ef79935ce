//! Maps extracted key phrases onto a filter over attendance records.
//!
//! Rules are checked in order and the first one whose keyword appears in any
//! phrase decides the result. Rules are never combined: "absent John" returns
//! every `Absent` record and ignores the name. When nothing matches, all
//! records come back unfiltered.

use crate::model::attendance::AttendanceRecord;

/// What a matched rule keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Exact match on `status`.
    Status(String),
    /// Exact match on the full `employee` name.
    Employee(String),
}

impl RecordFilter {
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        match self {
            RecordFilter::Status(status) => record.status == *status,
            RecordFilter::Employee(name) => record.employee == *name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Case-sensitive substring looked for in each whole phrase.
    pub keyword: String,
    pub filter: RecordFilter,
}

impl Rule {
    pub fn status(keyword: &str, status: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            filter: RecordFilter::Status(status.to_string()),
        }
    }

    /// Resolves a keyword (usually a first name) to one full employee name.
    pub fn employee(keyword: &str, name: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            filter: RecordFilter::Employee(name.to_string()),
        }
    }

    pub fn triggered_by<S: AsRef<str>>(&self, phrases: &[S]) -> bool {
        phrases
            .iter()
            .any(|phrase| phrase.as_ref().contains(self.keyword.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(vec![
            Rule::status("Absent", "Absent"),
            Rule::status("Late", "Late"),
            Rule::employee("John", "John Doe"),
            Rule::status("Present", "Present"),
        ])
    }
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The first rule triggered by `phrases`, if any.
    pub fn matching_rule<S: AsRef<str>>(&self, phrases: &[S]) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.triggered_by(phrases))
    }

    /// Filters `records` by the first triggered rule, keeping their order.
    pub fn classify<S: AsRef<str>>(
        &self,
        phrases: &[S],
        records: &[AttendanceRecord],
    ) -> Vec<AttendanceRecord> {
        match self.matching_rule(phrases) {
            Some(rule) => records
                .iter()
                .filter(|record| rule.filter.matches(record))
                .cloned()
                .collect(),
            None => records.to_vec(),
        }
    }
}

/// Classifies with the default rule chain.
pub fn classify<S: AsRef<str>>(
    phrases: &[S],
    records: &[AttendanceRecord],
) -> Vec<AttendanceRecord> {
    RuleSet::default().classify(phrases, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::SAMPLE_ATTENDANCE;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn with_status(status: &str) -> Vec<AttendanceRecord> {
        SAMPLE_ATTENDANCE
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect()
    }

    #[test]
    fn absent_phrase_returns_the_absent_record() {
        let result = classify(&["Absent employees"], &SAMPLE_ATTENDANCE);
        assert_eq!(
            result,
            vec![AttendanceRecord::new(date("2024-01-29"), "Jane Smith", "Absent", 0)]
        );
    }

    #[test]
    fn present_phrase_returns_both_present_days_in_order() {
        let result = classify(&["Present report"], &SAMPLE_ATTENDANCE);
        assert_eq!(
            result,
            vec![
                AttendanceRecord::new(date("2024-01-30"), "John Doe", "Present", 8),
                AttendanceRecord::new(date("2024-01-29"), "John Doe", "Present", 8),
            ]
        );
    }

    #[test]
    fn late_phrase_returns_the_late_record() {
        let result = classify(&["Late Students"], &SAMPLE_ATTENDANCE);
        assert_eq!(
            result,
            vec![AttendanceRecord::new(date("2024-01-30"), "Jane Smith", "Late", 7)]
        );
    }

    #[test]
    fn john_resolves_to_the_full_name() {
        let result = classify(&["John's working hours"], &SAMPLE_ATTENDANCE);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.employee == "John Doe"));
    }

    #[test]
    fn first_rule_wins_over_later_keywords() {
        let result = classify(&["Late arrivals", "Absent staff"], &SAMPLE_ATTENDANCE);
        assert_eq!(result, with_status("Absent"));

        // name is ignored once a status rule fires
        let result = classify(&["Absent John"], &SAMPLE_ATTENDANCE);
        assert_eq!(result, with_status("Absent"));
    }

    #[test]
    fn no_match_returns_everything_in_order() {
        let empty: [&str; 0] = [];
        assert_eq!(classify(&empty, &SAMPLE_ATTENDANCE), *SAMPLE_ATTENDANCE);
        assert_eq!(
            classify(&["attendance records"], &SAMPLE_ATTENDANCE),
            *SAMPLE_ATTENDANCE
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify(&["late arrivals"], &SAMPLE_ATTENDANCE), *SAMPLE_ATTENDANCE);
        assert_eq!(classify(&["ABSENT"], &SAMPLE_ATTENDANCE), *SAMPLE_ATTENDANCE);
    }

    #[test]
    fn empty_records_stay_empty_on_every_branch() {
        for phrase in ["Absent", "Late", "John", "Present", "nothing"] {
            assert!(classify(&[phrase], &[]).is_empty(), "branch {phrase}");
        }
    }

    #[test]
    fn classifying_a_result_again_changes_nothing() {
        let phrases = ["Absent employees"];
        let once = classify(&phrases, &SAMPLE_ATTENDANCE);
        let twice = classify(&phrases, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn absent_subset_holds_for_arbitrary_records() {
        let records = vec![
            AttendanceRecord::new(date("2024-02-01"), "A", "Absent", 0),
            AttendanceRecord::new(date("2024-02-01"), "B", "Present", 8),
            AttendanceRecord::new(date("2024-02-02"), "C", "Absent", 0),
            AttendanceRecord::new(date("2024-02-02"), "D", "Sick", 0),
        ];
        let result = classify(&["Absent"], &records);
        assert_eq!(result, vec![records[0].clone(), records[2].clone()]);
    }

    #[test]
    fn matching_rule_reports_which_rule_fired() {
        let rules = RuleSet::default();
        assert_eq!(
            rules.matching_rule(&["John and Late"]),
            Some(&Rule::status("Late", "Late"))
        );
        assert_eq!(rules.matching_rule(&["hello"]), None);
    }

    #[test]
    fn injected_rules_replace_the_name_table() {
        let rules = RuleSet::new(vec![Rule::employee("Jane", "Jane Smith")]);
        let result = rules.classify(&["Jane's week"], &SAMPLE_ATTENDANCE);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.employee == "Jane Smith"));

        // John is no longer known
        assert_eq!(rules.classify(&["John"], &SAMPLE_ATTENDANCE), *SAMPLE_ATTENDANCE);
    }
}
