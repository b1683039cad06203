//! Core types for fit-intake

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wizard stage cursor
///
/// Stages form a closed ordered set; the cursor advances or retreats by
/// exactly one stage per action, and jumps to [`Step::Complete`] only via a
/// successful submission from [`Step::Review`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    /// Step 1: contact details
    #[default]
    Contact,
    /// Step 2: medical history and legal
    Medical,
    /// Step 3: nutrition habits and photo upload
    Nutrition,
    /// Step 4: lifestyle preferences and disclaimer consent
    Preferences,
    /// Step 5: review and submit
    Review,
    /// Terminal thank-you stage
    Complete,
}

impl Step {
    /// Number of interactive steps shown in the progress header
    /// (Complete is terminal and not counted).
    pub const INTERACTIVE_STEPS: u8 = 5;

    /// 1-based stage number
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Contact => 1,
            Self::Medical => 2,
            Self::Nutrition => 3,
            Self::Preferences => 4,
            Self::Review => 5,
            Self::Complete => 6,
        }
    }

    /// On-screen stage title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Contact => "Basic Information",
            Self::Medical => "Medical & Legal",
            Self::Nutrition => "Nutrition",
            Self::Preferences => "Preferences",
            Self::Review => "Review & Submit",
            Self::Complete => "Thank You!",
        }
    }

    /// On-screen stage description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Contact => {
                "Please provide your contact information so we can get in touch with you if needed."
            }
            Self::Medical => "Please answer the following questions about your health.",
            Self::Nutrition => "Let's talk about your nutrition habits and preferences.",
            Self::Preferences => "Let's understand your preferences and habits better.",
            Self::Review => "Please review your information before submitting.",
            Self::Complete => "Form Submitted Successfully",
        }
    }

    /// The next stage, if any
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Contact => Some(Self::Medical),
            Self::Medical => Some(Self::Nutrition),
            Self::Nutrition => Some(Self::Preferences),
            Self::Preferences => Some(Self::Review),
            Self::Review => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// The previous stage, if any
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Contact => None,
            Self::Medical => Some(Self::Contact),
            Self::Nutrition => Some(Self::Medical),
            Self::Preferences => Some(Self::Nutrition),
            Self::Review => Some(Self::Preferences),
            Self::Complete => Some(Self::Review),
        }
    }

    /// Whether this is the terminal stage
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A named free-text field on the intake record
///
/// The variant order is the on-screen order (contact → medical → nutrition →
/// preferences), which is also the rendering order in the submission body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Client's full name (required)
    FullName,
    /// Email address (required)
    Email,
    /// Phone number (required)
    Phone,
    /// Other preferred contact methods
    PreferredContact,
    /// Existing medical ailments or injuries
    MedicalAilments,
    /// Conditions not discussed with a doctor
    UndiscussedConditions,
    /// Injuries, medications, or other health concerns
    HealthConcerns,
    /// Daily food intake description
    FoodIntake,
    /// Daily water intake
    WaterIntake,
    /// Food preferences and favorite foods
    FoodPreferences,
    /// Dietary restrictions (allergies, vegetarian, etc.)
    DietaryRestrictions,
    /// Known calorie or macronutrient intake
    CalorieIntake,
    /// A typical day of eating and drinking
    TypicalDay,
    /// Alcohol and smoking habits
    AlcoholSmoke,
    /// Exercises especially loved or hated
    ExercisePreferences,
    /// Anything else about preferences or motivations
    AdditionalInfo,
}

impl Field {
    /// Every field, in on-screen order
    pub const ALL: [Self; 16] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::PreferredContact,
        Self::MedicalAilments,
        Self::UndiscussedConditions,
        Self::HealthConcerns,
        Self::FoodIntake,
        Self::WaterIntake,
        Self::FoodPreferences,
        Self::DietaryRestrictions,
        Self::CalorieIntake,
        Self::TypicalDay,
        Self::AlcoholSmoke,
        Self::ExercisePreferences,
        Self::AdditionalInfo,
    ];

    /// Short label used in the submission body and the printable view
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::PreferredContact => "Preferred contact",
            Self::MedicalAilments => "Medical ailments",
            Self::UndiscussedConditions => "Undiscussed conditions",
            Self::HealthConcerns => "Health concerns",
            Self::FoodIntake => "Food intake",
            Self::WaterIntake => "Water intake",
            Self::FoodPreferences => "Food preferences",
            Self::DietaryRestrictions => "Dietary restrictions",
            Self::CalorieIntake => "Calorie/macro intake",
            Self::TypicalDay => "Typical day",
            Self::AlcoholSmoke => "Alcohol/smoking",
            Self::ExercisePreferences => "Exercise preferences",
            Self::AdditionalInfo => "Additional info",
        }
    }

    /// The question shown when prompting for this field
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::FullName => "What is your full name?",
            Self::Email => "What is your email address?",
            Self::Phone => "What is the best phone number to reach you?",
            Self::PreferredContact => "Is there any other preferred method of contact?",
            Self::MedicalAilments => "Do you have any existing medical ailments or injuries?",
            Self::UndiscussedConditions => {
                "Are there any conditions you have not discussed with a doctor?"
            }
            Self::HealthConcerns => {
                "Please list any injuries, medications, or health concerns we should know about."
            }
            Self::FoodIntake => "How would you describe your daily food intake?",
            Self::WaterIntake => "How much water do you typically drink each day?",
            Self::FoodPreferences => "What are your food preferences and favorite foods?",
            Self::DietaryRestrictions => {
                "Do you have any dietary restrictions (allergies, vegetarian, etc.)?"
            }
            Self::CalorieIntake => "Are you aware of your current calorie or macronutrient intake?",
            Self::TypicalDay => {
                "Please describe what a typical day of eating and drinking looks like for you."
            }
            Self::AlcoholSmoke => "Do you drink alcohol or smoke?",
            Self::ExercisePreferences => "Are there any exercises you especially love or hate?",
            Self::AdditionalInfo => {
                "Is there anything else you'd like to share about your preferences or motivations?"
            }
        }
    }

    /// The wizard stage this field is collected on
    #[must_use]
    pub const fn step(self) -> Step {
        match self {
            Self::FullName | Self::Email | Self::Phone | Self::PreferredContact => Step::Contact,
            Self::MedicalAilments | Self::UndiscussedConditions | Self::HealthConcerns => {
                Step::Medical
            }
            Self::FoodIntake
            | Self::WaterIntake
            | Self::FoodPreferences
            | Self::DietaryRestrictions
            | Self::CalorieIntake
            | Self::TypicalDay => Step::Nutrition,
            Self::AlcoholSmoke | Self::ExercisePreferences | Self::AdditionalInfo => {
                Step::Preferences
            }
        }
    }

    /// Whether the Contact gate requires this field to be non-blank
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::FullName | Self::Email | Self::Phone)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user-selected photo attachment: name plus binary handle
///
/// No type or size validation is performed beyond the upload hint text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name
    pub file_name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

/// The in-memory intake record
///
/// A flat mapping of named free-text fields, one consent flag, and one
/// optional photo attachment. Created empty at wizard start; it has no
/// identity beyond the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntakeRecord {
    /// Client's full name (required)
    pub full_name: String,
    /// Email address (required)
    pub email: String,
    /// Phone number (required)
    pub phone: String,
    /// Other preferred contact methods
    pub preferred_contact: String,
    /// Existing medical ailments or injuries
    pub medical_ailments: String,
    /// Conditions not discussed with a doctor
    pub undiscussed_conditions: String,
    /// Injuries, medications, or other health concerns
    pub health_concerns: String,
    /// Daily food intake description
    pub food_intake: String,
    /// Daily water intake
    pub water_intake: String,
    /// Food preferences and favorite foods
    pub food_preferences: String,
    /// Dietary restrictions
    pub dietary_restrictions: String,
    /// Known calorie or macronutrient intake
    pub calorie_intake: String,
    /// A typical day of eating and drinking
    pub typical_day: String,
    /// Alcohol and smoking habits
    pub alcohol_smoke: String,
    /// Exercises especially loved or hated
    pub exercise_preferences: String,
    /// Anything else about preferences or motivations
    pub additional_info: String,
    /// Disclaimer acknowledgment; required before leaving Preferences and
    /// before final submission
    pub disclaimer: bool,
    /// Optional photo attachment (selected by path at the Nutrition step)
    #[serde(skip)]
    pub photo: Option<Attachment>,
}

impl IntakeRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field's current value
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::PreferredContact => &self.preferred_contact,
            Field::MedicalAilments => &self.medical_ailments,
            Field::UndiscussedConditions => &self.undiscussed_conditions,
            Field::HealthConcerns => &self.health_concerns,
            Field::FoodIntake => &self.food_intake,
            Field::WaterIntake => &self.water_intake,
            Field::FoodPreferences => &self.food_preferences,
            Field::DietaryRestrictions => &self.dietary_restrictions,
            Field::CalorieIntake => &self.calorie_intake,
            Field::TypicalDay => &self.typical_day,
            Field::AlcoholSmoke => &self.alcohol_smoke,
            Field::ExercisePreferences => &self.exercise_preferences,
            Field::AdditionalInfo => &self.additional_info,
        }
    }

    /// Overwrite a field's value. Never fails.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::PreferredContact => self.preferred_contact = value,
            Field::MedicalAilments => self.medical_ailments = value,
            Field::UndiscussedConditions => self.undiscussed_conditions = value,
            Field::HealthConcerns => self.health_concerns = value,
            Field::FoodIntake => self.food_intake = value,
            Field::WaterIntake => self.water_intake = value,
            Field::FoodPreferences => self.food_preferences = value,
            Field::DietaryRestrictions => self.dietary_restrictions = value,
            Field::CalorieIntake => self.calorie_intake = value,
            Field::TypicalDay => self.typical_day = value,
            Field::AlcoholSmoke => self.alcohol_smoke = value,
            Field::ExercisePreferences => self.exercise_preferences = value,
            Field::AdditionalInfo => self.additional_info = value,
        }
    }

    /// Overwrite the consent flag. Never fails.
    pub const fn set_disclaimer(&mut self, checked: bool) {
        self.disclaimer = checked;
    }

    /// Overwrite the photo attachment. Never fails.
    pub fn set_photo(&mut self, photo: Attachment) {
        self.photo = Some(photo);
    }

    /// Contact-gate fields that are currently blank, in screen order
    #[must_use]
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }
}

/// A photo attachment encoded for the submission payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAttachment {
    /// Original file name
    pub file_name: String,
    /// Base64-encoded file contents
    pub content_base64: String,
}

/// The message handed to the submission gateway
///
/// Mirrors the shape an email-sending backend would accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Carbon-copy address
    pub cc: Option<String>,
    /// Subject line
    pub subject: String,
    /// Rendered form body
    pub body: String,
    /// Optional encoded photo attachment
    pub attachment: Option<MessageAttachment>,
}

/// Recipient configuration for a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOptions {
    /// Override recipient; defaults to the client's own email
    pub to: Option<String>,
    /// Coach address carbon-copied on every submission
    pub coach_email: String,
}

/// Default coach address cc'd on submissions
pub const DEFAULT_COACH_EMAIL: &str = "coach@example.com";

impl Default for SubmissionOptions {
    fn default() -> Self {
        Self {
            to: None,
            coach_email: DEFAULT_COACH_EMAIL.to_string(),
        }
    }
}

/// Acknowledgment returned by a gateway on successful delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// When the gateway accepted the message
    pub accepted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_ordering_is_linear() {
        let mut step = Step::Contact;
        let mut seen = vec![step];
        while let Some(next) = step.next() {
            assert_eq!(next.number(), step.number() + 1);
            assert_eq!(next.previous(), Some(step));
            step = next;
            seen.push(step);
        }
        assert_eq!(seen.len(), 6);
        assert!(step.is_terminal());
    }

    #[test]
    fn test_field_roundtrip_every_field() {
        let mut record = IntakeRecord::new();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            let value = format!("value-{i}");
            record.set(field, value.clone());
            assert_eq!(record.get(field), value, "round-trip failed for {field}");
        }
    }

    #[test]
    fn test_fields_grouped_by_screen_order() {
        // On-screen order means step numbers are non-decreasing across ALL.
        let mut last = 0;
        for field in Field::ALL {
            let n = field.step().number();
            assert!(n >= last, "{field} out of screen order");
            last = n;
        }
    }

    #[test]
    fn test_missing_required_reports_blank_contact_fields() {
        let mut record = IntakeRecord::new();
        assert_eq!(
            record.missing_required(),
            vec![Field::FullName, Field::Email, Field::Phone]
        );

        record.set(Field::FullName, "Jane Doe");
        record.set(Field::Phone, "   ");
        assert_eq!(record.missing_required(), vec![Field::Email, Field::Phone]);

        record.set(Field::Email, "jane@example.com");
        record.set(Field::Phone, "555-0100");
        assert!(record.missing_required().is_empty());
    }

    #[test]
    fn test_answers_file_deserializes_with_defaults() {
        let json = r#"{"fullName": "Jane Doe", "email": "jane@example.com"}"#;
        let record: IntakeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.full_name, "Jane Doe");
        assert_eq!(record.email, "jane@example.com");
        assert!(record.phone.is_empty());
        assert!(!record.disclaimer);
        assert!(record.photo.is_none());
    }
}
