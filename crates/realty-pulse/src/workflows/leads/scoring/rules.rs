use super::super::domain::QualificationAnswers;
use super::tables::ScoringTables;
use super::ScoreBreakdown;

pub(crate) fn score_answers(
    answers: &QualificationAnswers,
    tables: &ScoringTables,
) -> ScoreBreakdown {
    ScoreBreakdown {
        timeline: tables.timeline_points(answers.timeline),
        intent: tables.intent_points(answers.intent),
        property_details: property_details(answers, tables),
        contact_readiness: tables.contact_points(answers.contact_preference),
    }
}

/// Property fit, motivation, financing readiness, and whether a price bracket was given.
fn property_details(answers: &QualificationAnswers, tables: &ScoringTables) -> u8 {
    let mut points = tables.property_type_points(answers.property_type);
    points = points.saturating_add(tables.important_factor_points(answers.important_factor));

    if answers.intent.includes_buying() {
        let financing = match answers.pre_approved {
            Some(true) => tables.pre_approved_points,
            Some(false) => tables.not_pre_approved_points,
            None => 0,
        };
        points = points.saturating_add(financing);
    }

    if answers.has_value_range() {
        points = points.saturating_add(tables.value_range_points);
    }

    points
}
