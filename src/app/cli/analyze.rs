use std::io::IsTerminal;

use chrono::Local;

use super::ProfileArgs;
use super::form;
use crate::app::api;
use crate::app::config::load_config;
use crate::app::{ProfileStore, SubmitOutcome};
use crate::domain::{AppConfig, AppError, CustomerProfile, FieldUpdate};
use crate::ports::{ApiKey, TextGenerator};
use crate::services::{HttpGeminiClient, load_profile};

pub(crate) fn run_analyze(args: &ProfileArgs) -> Result<i32, AppError> {
    let config = resolve_config(args)?;
    let Some(store) = prepare_store(args, &config, ApiKey::from_env())? else {
        return Ok(1);
    };

    match store.submit() {
        SubmitOutcome::Settled(result) => match result.error {
            Some(message) => {
                eprintln!("❌ {}", message);
                Ok(1)
            }
            None => {
                println!("{}", result.text);
                Ok(0)
            }
        },
        SubmitOutcome::AlreadyPending => {
            eprintln!("❌ An analysis is already in progress");
            Ok(1)
        }
    }
}

pub(crate) fn run_prompt(args: &ProfileArgs) -> Result<(), AppError> {
    let config = resolve_config(args)?;
    let Some(store) = prepare_store(args, &config, None)? else {
        return Ok(());
    };

    println!("{}", store.requester().render(&store.profile()));
    Ok(())
}

fn resolve_config(args: &ProfileArgs) -> Result<AppConfig, AppError> {
    let work_dir = std::env::current_dir()?;
    let mut config = load_config(args.config.as_deref(), &work_dir)?;
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    Ok(config)
}

/// Build the store, collect the profile into it, and validate. `None` when the form was cancelled.
fn prepare_store(
    args: &ProfileArgs,
    config: &AppConfig,
    api_key: Option<ApiKey>,
) -> Result<Option<ProfileStore<HttpGeminiClient>>, AppError> {
    let base = match &args.profile {
        Some(path) => load_profile(path)?,
        None => CustomerProfile::default(),
    };
    let store = api::build_store(config, api_key, base)?;

    let interactive =
        args.profile.is_none() && args.set.is_empty() && std::io::stdin().is_terminal();
    if interactive && !form::fill_profile(&store, config.locale)? {
        println!("Cancelled");
        return Ok(None);
    }

    apply_assignments(&store, &args.set)?;
    store.profile().validate(Local::now().date_naive())?;
    Ok(Some(store))
}

fn apply_assignments<G: TextGenerator>(
    store: &ProfileStore<G>,
    assignments: &[String],
) -> Result<(), AppError> {
    for assignment in assignments {
        store.update_field(FieldUpdate::parse_assignment(assignment)?);
    }
    Ok(())
}
