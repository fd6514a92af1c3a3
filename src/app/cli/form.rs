//! Interactive profile form.

use std::io::ErrorKind;

use chrono::{Local, NaiveDate};
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::ProfileStore;
use crate::domain::{AppError, BIRTHDAY_FORMAT, FieldUpdate, Gender, Locale, ProfileField};
use crate::ports::TextGenerator;

/// Prompt for every profile field, writing each answer into `store`.
///
/// Returns `false` when the user cancels.
pub(crate) fn fill_profile<G: TextGenerator>(
    store: &ProfileStore<G>,
    locale: Locale,
) -> Result<bool, AppError> {
    let today = Local::now().date_naive();

    for field in ProfileField::ALL {
        let update = match field {
            ProfileField::Gender => select_gender(store.profile().gender, locale)?.map(FieldUpdate::Gender),
            _ => {
                let current = store.profile().text(field).unwrap_or_default().to_string();
                read_text(field, &current, locale, today)?
                    .map(|value| FieldUpdate::for_field(field, &value))
                    .transpose()?
            }
        };

        match update {
            Some(update) => store.update_field(update),
            None => return Ok(false),
        }
    }

    Ok(true)
}

fn select_gender(current: Gender, locale: Locale) -> Result<Option<Gender>, AppError> {
    let labels: Vec<&str> = Gender::ALL.iter().map(|gender| gender.label(locale)).collect();
    let default = Gender::ALL.iter().position(|gender| *gender == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(ProfileField::Gender.label(locale))
        .items(&labels)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::InvalidProfile(format!("Failed to select gender: {}", err)))?;

    Ok(selection.map(|index| Gender::ALL[index]))
}

fn read_text(
    field: ProfileField,
    current: &str,
    locale: Locale,
    today: NaiveDate,
) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new()
        .with_prompt(field.label(locale))
        .allow_empty(field == ProfileField::TargetProduct);
    if !current.is_empty() {
        input = input.with_initial_text(current);
    }
    if field == ProfileField::Birthday {
        input = input.validate_with(move |value: &String| check_birthday(value, today));
    }

    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::InvalidProfile(format!("Failed to read {}: {}", field, err))),
    }
}

fn check_birthday(value: &str, today: NaiveDate) -> Result<(), String> {
    let date = NaiveDate::parse_from_str(value.trim(), BIRTHDAY_FORMAT)
        .map_err(|_| "Use the YYYY-MM-DD format".to_string())?;
    if date > today {
        return Err("Birthday cannot be in the future".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_check_rejects_future_and_malformed_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        assert!(check_birthday("1990-01-01", today).is_ok());
        assert!(check_birthday("2024-06-01", today).is_ok());
        assert!(check_birthday("2024-06-02", today).is_err());
        assert!(check_birthday("June 1st", today).is_err());
    }
}
