//! Customer profile entered by the salesperson.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Locale};

/// Date format accepted for `birthday`.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Customer gender as selected in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "MALE", alias = "male", alias = "Male", alias = "男")]
    Male,
    #[serde(rename = "FEMALE", alias = "female", alias = "Female", alias = "女")]
    Female,
    #[serde(rename = "OTHER", alias = "other", alias = "Other", alias = "其他")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Label used inside prompts and selection menus.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Gender::Male, Locale::ZhTw) => "男",
            (Gender::Female, Locale::ZhTw) => "女",
            (Gender::Other, Locale::ZhTw) => "其他",
            (Gender::Male, Locale::En) => "Male",
            (Gender::Female, Locale::En) => "Female",
            (Gender::Other, Locale::En) => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "男" => return Ok(Gender::Male),
            "女" => return Ok(Gender::Female),
            "其他" => return Ok(Gender::Other),
            _ => {}
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(AppError::InvalidProfile(format!(
                "Unknown gender '{}': must be one of MALE, FEMALE, OTHER",
                other
            ))),
        }
    }
}

/// The customer attributes that feed the analysis prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomerProfile {
    /// Calendar date, `YYYY-MM-DD`.
    pub birthday: String,
    pub gender: Gender,
    pub occupation: String,
    pub interests: String,
    pub income: String,
    /// Existing coverage and past purchases.
    pub history: String,
    /// Something the customer actually said, kept verbatim.
    pub quotes: String,
    /// Product the salesperson wants to lead with. May be empty.
    #[serde(alias = "targetProduct")]
    pub target_product: String,
}

impl CustomerProfile {
    /// Parsed birthday, if it is a valid `YYYY-MM-DD` date.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.birthday.trim(), BIRTHDAY_FORMAT).ok()
    }

    /// Completed years of age on `date`. `None` when the birthday is unparseable or later than `date`.
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        self.birth_date().and_then(|birth| date.years_since(birth))
    }

    pub fn has_target_product(&self) -> bool {
        !self.target_product.trim().is_empty()
    }

    /// Check the form constraints: required fields filled and birthday not after `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<(), AppError> {
        let missing: Vec<&str> = ProfileField::REQUIRED_TEXT
            .iter()
            .filter(|field| self.text(**field).is_some_and(|value| value.trim().is_empty()))
            .map(|field| field.as_str())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::InvalidProfile(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let birth = self.birth_date().ok_or_else(|| {
            AppError::InvalidProfile(format!(
                "birthday '{}' is not a valid YYYY-MM-DD date",
                self.birthday
            ))
        })?;

        if birth > today {
            return Err(AppError::InvalidProfile(format!(
                "birthday {} is in the future",
                birth.format(BIRTHDAY_FORMAT)
            )));
        }

        Ok(())
    }

    /// Apply a single field edit in place. No validation is performed.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Birthday(value) => self.birthday = value,
            FieldUpdate::Gender(value) => self.gender = value,
            FieldUpdate::Occupation(value) => self.occupation = value,
            FieldUpdate::Interests(value) => self.interests = value,
            FieldUpdate::Income(value) => self.income = value,
            FieldUpdate::History(value) => self.history = value,
            FieldUpdate::Quotes(value) => self.quotes = value,
            FieldUpdate::TargetProduct(value) => self.target_product = value,
        }
    }

    /// Current value of a free-text field; `None` for `gender`.
    pub fn text(&self, field: ProfileField) -> Option<&str> {
        match field {
            ProfileField::Birthday => Some(&self.birthday),
            ProfileField::Gender => None,
            ProfileField::Occupation => Some(&self.occupation),
            ProfileField::Interests => Some(&self.interests),
            ProfileField::Income => Some(&self.income),
            ProfileField::History => Some(&self.history),
            ProfileField::Quotes => Some(&self.quotes),
            ProfileField::TargetProduct => Some(&self.target_product),
        }
    }
}

/// Names of the editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Birthday,
    Gender,
    Occupation,
    Interests,
    Income,
    History,
    Quotes,
    TargetProduct,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::Birthday,
        ProfileField::Gender,
        ProfileField::Occupation,
        ProfileField::Interests,
        ProfileField::Income,
        ProfileField::History,
        ProfileField::Quotes,
        ProfileField::TargetProduct,
    ];

    /// Free-text fields that must be non-empty before submission.
    pub const REQUIRED_TEXT: [ProfileField; 6] = [
        ProfileField::Birthday,
        ProfileField::Occupation,
        ProfileField::Interests,
        ProfileField::Income,
        ProfileField::History,
        ProfileField::Quotes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Birthday => "birthday",
            ProfileField::Gender => "gender",
            ProfileField::Occupation => "occupation",
            ProfileField::Interests => "interests",
            ProfileField::Income => "income",
            ProfileField::History => "history",
            ProfileField::Quotes => "quotes",
            ProfileField::TargetProduct => "target_product",
        }
    }

    /// Form label for the field.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ProfileField::Birthday, Locale::ZhTw) => "客戶生日 (YYYY-MM-DD)",
            (ProfileField::Gender, Locale::ZhTw) => "性別",
            (ProfileField::Occupation, Locale::ZhTw) => "職業",
            (ProfileField::Interests, Locale::ZhTw) => "興趣",
            (ProfileField::Income, Locale::ZhTw) => "年收入",
            (ProfileField::History, Locale::ZhTw) => "投保史",
            (ProfileField::Quotes, Locale::ZhTw) => "客戶曾說過的話",
            (ProfileField::TargetProduct, Locale::ZhTw) => "想主推的商品/方向 (可留空)",
            (ProfileField::Birthday, Locale::En) => "Birthday (YYYY-MM-DD)",
            (ProfileField::Gender, Locale::En) => "Gender",
            (ProfileField::Occupation, Locale::En) => "Occupation",
            (ProfileField::Interests, Locale::En) => "Interests",
            (ProfileField::Income, Locale::En) => "Annual income",
            (ProfileField::History, Locale::En) => "Insurance history",
            (ProfileField::Quotes, Locale::En) => "What the customer said",
            (ProfileField::TargetProduct, Locale::En) => "Product to lead with (optional)",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "birthday" => Ok(ProfileField::Birthday),
            "gender" => Ok(ProfileField::Gender),
            "occupation" => Ok(ProfileField::Occupation),
            "interests" => Ok(ProfileField::Interests),
            "income" => Ok(ProfileField::Income),
            "history" => Ok(ProfileField::History),
            "quotes" => Ok(ProfileField::Quotes),
            "target_product" | "targetProduct" | "target-product" => {
                Ok(ProfileField::TargetProduct)
            }
            other => Err(AppError::InvalidProfile(format!("Unknown profile field '{}'", other))),
        }
    }
}

/// A typed edit to one profile field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Birthday(String),
    Gender(Gender),
    Occupation(String),
    Interests(String),
    Income(String),
    History(String),
    Quotes(String),
    TargetProduct(String),
}

impl FieldUpdate {
    /// Build an edit from a field name and raw value.
    pub fn parse(name: &str, value: &str) -> Result<Self, AppError> {
        let field: ProfileField = name.parse()?;
        Self::for_field(field, value)
    }

    pub fn for_field(field: ProfileField, value: &str) -> Result<Self, AppError> {
        let value = value.to_string();
        Ok(match field {
            ProfileField::Birthday => FieldUpdate::Birthday(value),
            ProfileField::Gender => FieldUpdate::Gender(value.parse()?),
            ProfileField::Occupation => FieldUpdate::Occupation(value),
            ProfileField::Interests => FieldUpdate::Interests(value),
            ProfileField::Income => FieldUpdate::Income(value),
            ProfileField::History => FieldUpdate::History(value),
            ProfileField::Quotes => FieldUpdate::Quotes(value),
            ProfileField::TargetProduct => FieldUpdate::TargetProduct(value),
        })
    }

    /// Parse a `name=value` assignment as given on the command line.
    pub fn parse_assignment(assignment: &str) -> Result<Self, AppError> {
        let (name, value) = assignment.split_once('=').ok_or_else(|| {
            AppError::InvalidProfile(format!("Expected name=value, got '{}'", assignment))
        })?;
        Self::parse(name, value)
    }
}
