//! Test data factories for fit-intake types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use fit_intake::types::{Attachment, Field, IntakeRecord, Step};
use fit_intake::wizard::WizardState;

/// Record with only the required contact fields filled
pub fn make_contact_record() -> IntakeRecord {
    let mut record = IntakeRecord::new();
    record.set(Field::FullName, "Jane Doe");
    record.set(Field::Email, "jane@example.com");
    record.set(Field::Phone, "555-0100");
    record
}

/// Record with every free-text field answered and consent acknowledged
pub fn make_full_record() -> IntakeRecord {
    let mut record = make_contact_record();
    record.set(Field::PreferredContact, "Text message");
    record.set(Field::MedicalAilments, "Old knee injury");
    record.set(Field::UndiscussedConditions, "None");
    record.set(Field::HealthConcerns, "Occasional back pain");
    record.set(Field::FoodIntake, "Three meals, snacks between");
    record.set(Field::WaterIntake, "2 liters");
    record.set(Field::FoodPreferences, "Mostly vegetarian");
    record.set(Field::DietaryRestrictions, "No peanuts");
    record.set(Field::CalorieIntake, "Around 2200 kcal");
    record.set(Field::TypicalDay, "Oatmeal, salad, pasta");
    record.set(Field::AlcoholSmoke, "Wine occasionally, no smoking");
    record.set(Field::ExercisePreferences, "Love cycling, hate burpees");
    record.set(Field::AdditionalInfo, "Training for a charity ride");
    record.set_disclaimer(true);
    record
}

/// Small fake photo attachment
pub fn make_photo() -> Attachment {
    Attachment {
        file_name: "progress.jpg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff, 0xe0],
    }
}

/// A fully answered session moved to the Review stage
pub fn make_review_state() -> WizardState {
    let mut state = WizardState::with_record(make_full_record());
    state.step = Step::Review;
    state
}
