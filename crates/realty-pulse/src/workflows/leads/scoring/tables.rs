use serde::{Deserialize, Serialize};

use super::super::domain::{ContactPreference, ImportantFactor, Intent, PropertyType, Timeline};

/// Point tables backing the lead rubric. Built once at start-up and shared by reference.
///
/// Every table has one field per answer, so a deserialized table that omits an
/// answer is rejected rather than scoring it as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringTables {
    pub timeline: TimelinePoints,
    pub intent: IntentPoints,
    pub property_type: PropertyTypePoints,
    pub important_factor: ImportantFactorPoints,
    pub contact_preference: ContactPreferencePoints,
    pub pre_approved_points: u8,
    pub not_pre_approved_points: u8,
    pub value_range_points: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelinePoints {
    pub within_30_days: u8,
    pub one_to_three_months: u8,
    pub three_to_six_months: u8,
    pub six_plus_months: u8,
    pub just_exploring: u8,
}

impl TimelinePoints {
    pub fn points(&self, timeline: Timeline) -> u8 {
        match timeline {
            Timeline::Within30Days => self.within_30_days,
            Timeline::OneToThreeMonths => self.one_to_three_months,
            Timeline::ThreeToSixMonths => self.three_to_six_months,
            Timeline::SixPlusMonths => self.six_plus_months,
            Timeline::JustExploring => self.just_exploring,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntentPoints {
    pub buying: u8,
    pub selling: u8,
    pub both: u8,
    pub browsing: u8,
}

impl IntentPoints {
    pub fn points(&self, intent: Intent) -> u8 {
        match intent {
            Intent::Buying => self.buying,
            Intent::Selling => self.selling,
            Intent::Both => self.both,
            Intent::Browsing => self.browsing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyTypePoints {
    pub single_family: u8,
    pub multi_family: u8,
    pub condo: u8,
    pub townhouse: u8,
    pub land: u8,
    pub other: u8,
}

impl PropertyTypePoints {
    pub fn points(&self, property_type: PropertyType) -> u8 {
        match property_type {
            PropertyType::SingleFamily => self.single_family,
            PropertyType::MultiFamily => self.multi_family,
            PropertyType::Condo => self.condo,
            PropertyType::Townhouse => self.townhouse,
            PropertyType::Land => self.land,
            PropertyType::Other => self.other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportantFactorPoints {
    pub speed: u8,
    pub top_dollar: u8,
    pub guidance: u8,
    pub convenience: u8,
    pub just_curious: u8,
}

impl ImportantFactorPoints {
    pub fn points(&self, factor: ImportantFactor) -> u8 {
        match factor {
            ImportantFactor::Speed => self.speed,
            ImportantFactor::TopDollar => self.top_dollar,
            ImportantFactor::Guidance => self.guidance,
            ImportantFactor::Convenience => self.convenience,
            ImportantFactor::JustCurious => self.just_curious,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactPreferencePoints {
    pub asap: u8,
    pub this_week: u8,
    pub email_only: u8,
    pub no_rush: u8,
}

impl ContactPreferencePoints {
    pub fn points(&self, preference: ContactPreference) -> u8 {
        match preference {
            ContactPreference::Asap => self.asap,
            ContactPreference::ThisWeek => self.this_week,
            ContactPreference::EmailOnly => self.email_only,
            ContactPreference::NoRush => self.no_rush,
        }
    }
}

impl ScoringTables {
    pub fn standard() -> Self {
        Self {
            timeline: TimelinePoints {
                within_30_days: 40,
                one_to_three_months: 30,
                three_to_six_months: 20,
                six_plus_months: 5,
                just_exploring: 0,
            },
            intent: IntentPoints {
                buying: 20,
                selling: 20,
                both: 25,
                browsing: 0,
            },
            property_type: PropertyTypePoints {
                single_family: 10,
                multi_family: 12,
                condo: 8,
                townhouse: 8,
                land: 5,
                other: 3,
            },
            important_factor: ImportantFactorPoints {
                speed: 8,
                top_dollar: 6,
                guidance: 5,
                convenience: 4,
                just_curious: 0,
            },
            contact_preference: ContactPreferencePoints {
                asap: 10,
                this_week: 7,
                email_only: 3,
                no_rush: 1,
            },
            pre_approved_points: 15,
            not_pre_approved_points: 5,
            value_range_points: 5,
        }
    }

    pub(crate) fn timeline_points(&self, timeline: Timeline) -> u8 {
        self.timeline.points(timeline)
    }

    pub(crate) fn intent_points(&self, intent: Intent) -> u8 {
        self.intent.points(intent)
    }

    /// Unanswered optional questions earn nothing.
    pub(crate) fn property_type_points(&self, property_type: Option<PropertyType>) -> u8 {
        property_type
            .map(|kind| self.property_type.points(kind))
            .unwrap_or(0)
    }

    pub(crate) fn important_factor_points(&self, factor: Option<ImportantFactor>) -> u8 {
        factor
            .map(|factor| self.important_factor.points(factor))
            .unwrap_or(0)
    }

    pub(crate) fn contact_points(&self, preference: Option<ContactPreference>) -> u8 {
        preference
            .map(|preference| self.contact_preference.points(preference))
            .unwrap_or(0)
    }
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self::standard()
    }
}
