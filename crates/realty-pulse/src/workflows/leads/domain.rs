use serde::{Deserialize, Serialize};

/// Identifier wrapper for captured leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    Buying,
    Selling,
    Both,
    Browsing,
}

impl Intent {
    /// Pre-approval only matters when the lead is shopping for a home.
    pub fn includes_buying(&self) -> bool {
        matches!(self, Intent::Buying | Intent::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "within-30-days")]
    Within30Days,
    #[serde(rename = "1-3-months")]
    OneToThreeMonths,
    #[serde(rename = "3-6-months")]
    ThreeToSixMonths,
    #[serde(rename = "6-plus-months")]
    SixPlusMonths,
    #[serde(rename = "just-exploring")]
    JustExploring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    SingleFamily,
    MultiFamily,
    Condo,
    Townhouse,
    Land,
    Other,
}

/// What the lead says matters most to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportantFactor {
    Speed,
    TopDollar,
    Guidance,
    Convenience,
    JustCurious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactPreference {
    Asap,
    ThisWeek,
    EmailOnly,
    NoRush,
}

/// Qualification questionnaire answers. Only intent and timeline are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationAnswers {
    pub intent: Intent,
    pub timeline: Timeline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    /// Budget when buying, estimated value when selling; free-form bracket label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important_factor: Option<ImportantFactor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_preference: Option<ContactPreference>,
}

impl QualificationAnswers {
    pub fn new(intent: Intent, timeline: Timeline) -> Self {
        Self {
            intent,
            timeline,
            property_type: None,
            value_range: None,
            important_factor: None,
            pre_approved: None,
            contact_preference: None,
        }
    }

    pub fn has_value_range(&self) -> bool {
        self.value_range
            .as_deref()
            .map(|range| !range.trim().is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_deserialize_from_form_payload() {
        let answers: QualificationAnswers = serde_json::from_str(
            r#"{
                "intent": "both",
                "timeline": "within-30-days",
                "propertyType": "multi-family",
                "importantFactor": "speed",
                "preApproved": true,
                "contactPreference": "asap"
            }"#,
        )
        .expect("answers parse");

        assert_eq!(answers.intent, Intent::Both);
        assert_eq!(answers.timeline, Timeline::Within30Days);
        assert_eq!(answers.property_type, Some(PropertyType::MultiFamily));
        assert_eq!(answers.important_factor, Some(ImportantFactor::Speed));
        assert_eq!(answers.pre_approved, Some(true));
        assert_eq!(answers.contact_preference, Some(ContactPreference::Asap));
        assert!(answers.value_range.is_none());
    }

    #[test]
    fn unknown_enumeration_values_are_rejected() {
        let result = serde_json::from_str::<QualificationAnswers>(
            r#"{"intent": "renting", "timeline": "6-plus-months"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn blank_value_range_does_not_count() {
        let mut answers = QualificationAnswers::new(Intent::Selling, Timeline::OneToThreeMonths);
        assert!(!answers.has_value_range());
        answers.value_range = Some("  ".to_string());
        assert!(!answers.has_value_range());
        answers.value_range = Some("400k-500k".to_string());
        assert!(answers.has_value_range());
    }
}
