use serde::{Deserialize, Serialize};

const HOT_MIN_SCORE: u8 = 80;
const WARM_MIN_SCORE: u8 = 50;
const NURTURE_MIN_SCORE: u8 = 25;

/// Readiness bucket derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadTemperature {
    Hot,
    Warm,
    Nurture,
    Cold,
}

impl LeadTemperature {
    pub fn from_score(score: u8) -> Self {
        if score >= HOT_MIN_SCORE {
            Self::Hot
        } else if score >= WARM_MIN_SCORE {
            Self::Warm
        } else if score >= NURTURE_MIN_SCORE {
            Self::Nurture
        } else {
            Self::Cold
        }
    }

    pub fn priority(&self) -> LeadPriority {
        match self {
            LeadTemperature::Hot => LeadPriority::Immediate,
            LeadTemperature::Warm => LeadPriority::SameDay,
            LeadTemperature::Nurture => LeadPriority::Nurture,
            LeadTemperature::Cold => LeadPriority::Drip,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadTemperature::Hot => "hot",
            LeadTemperature::Warm => "warm",
            LeadTemperature::Nurture => "nurture",
            LeadTemperature::Cold => "cold",
        }
    }
}

/// Follow-up urgency consumed by routing and notification logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadPriority {
    Immediate,
    SameDay,
    Nurture,
    Drip,
}

impl LeadPriority {
    pub fn label(&self) -> &'static str {
        match self {
            LeadPriority::Immediate => "immediate",
            LeadPriority::SameDay => "same-day",
            LeadPriority::Nurture => "nurture",
            LeadPriority::Drip => "drip",
        }
    }
}
