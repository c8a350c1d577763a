use std::collections::HashSet;
use std::io::ErrorKind;

use clap::Args;
use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::app::{ResponseFormController, api};
use crate::domain::response::{
    BusStop, Choice, Field, FieldEdit, FormState, ResponseDraft, policy,
};
use crate::domain::{AppConfig, AppError};
use crate::ports::SubmissionGateway;

#[derive(Debug, Args)]
pub struct RespondArgs {
    /// Your given name
    #[arg(long)]
    given_name: Option<String>,
    /// Your family name
    #[arg(long)]
    family_name: Option<String>,
    /// Email address to reach you
    #[arg(long)]
    email: Option<String>,
    /// Whether you will attend (yes/no)
    #[arg(long, value_name = "YES|NO")]
    attending: Option<Choice>,
    /// Whether you have a food intolerance (yes/no)
    #[arg(long, value_name = "YES|NO")]
    dietary: Option<Choice>,
    /// Which food intolerance
    #[arg(long, value_name = "TEXT")]
    dietary_detail: Option<String>,
    /// Whether you need the bus (yes/no)
    #[arg(long, value_name = "YES|NO")]
    bus: Option<Choice>,
    /// Bus pickup stop (getxo/zumarraga)
    #[arg(long, value_name = "STOP")]
    stop: Option<BusStop>,
    /// Never prompt; fail if answers are missing
    #[arg(long)]
    no_input: bool,
}

impl RespondArgs {
    fn edits(&self) -> Vec<FieldEdit> {
        let mut edits = Vec::new();
        if let Some(value) = &self.given_name {
            edits.push(FieldEdit::GivenName(value.clone()));
        }
        if let Some(value) = &self.family_name {
            edits.push(FieldEdit::FamilyName(value.clone()));
        }
        if let Some(value) = &self.email {
            edits.push(FieldEdit::Email(value.clone()));
        }
        if let Some(choice) = self.attending {
            edits.push(FieldEdit::Attending(choice));
        }
        if let Some(choice) = self.dietary {
            edits.push(FieldEdit::HasDietaryRestriction(choice));
        }
        if let Some(value) = &self.dietary_detail {
            edits.push(FieldEdit::DietaryDetail(value.clone()));
        }
        if let Some(choice) = self.bus {
            edits.push(FieldEdit::NeedsBus(choice));
        }
        if let Some(stop) = self.stop {
            edits.push(FieldEdit::BusStop(stop));
        }
        edits
    }
}

pub fn run_respond(config: &AppConfig, args: RespondArgs) -> Result<(), AppError> {
    let mut controller = api::response_form(config)?;
    controller.subscribe(|state| {
        if let FormState::Submitting(_) = state {
            eprintln!("Sending response...");
        }
    });

    for edit in args.edits() {
        controller.edit(edit);
    }

    if !args.no_input {
        if !config.event.respond_by.is_empty() {
            println!("{} · please respond before {}", config.event.title, config.event.respond_by);
        }
        if !prompt_unanswered(&mut controller, args.dietary_detail.is_some())? {
            println!("Response not sent.");
            return Ok(());
        }
    }

    loop {
        let Some(payload) = controller.begin_submit() else {
            return Err(AppError::ResponseIncomplete(controller.view().missing));
        };
        let result = controller.gateway().submit(&payload);
        controller.complete_submit(result.clone());

        let Err(error) = result else {
            break;
        };
        eprintln!("⚠️  Could not send your response: {}", error);
        if args.no_input || !confirm_retry()? {
            return Err(error.into());
        }
    }

    if let Some(confirmation) = controller.confirmation() {
        println!("✅ {}", confirmation.heading);
        println!("{}", confirmation.body);
    }
    Ok(())
}

/// Prompt for every visible field still lacking an answer, in display order.
///
/// Returns `false` when the visitor cancels.
fn prompt_unanswered<G: SubmissionGateway>(
    controller: &mut ResponseFormController<G>,
    detail_given: bool,
) -> Result<bool, AppError> {
    let mut asked: HashSet<Field> = HashSet::new();
    if detail_given {
        asked.insert(Field::DietaryDetail);
    }

    loop {
        let draft = controller.state().draft().clone();
        let next = policy::visible_fields(&draft)
            .into_iter()
            .find(|field| needs_answer(*field, &draft, &asked));
        let Some(field) = next else {
            return Ok(true);
        };

        asked.insert(field);
        match prompt_field(field)? {
            Some(edit) => controller.edit(edit),
            None => return Ok(false),
        }
    }
}

fn needs_answer(field: Field, draft: &ResponseDraft, asked: &HashSet<Field>) -> bool {
    match field {
        Field::GivenName => draft.given_name.trim().is_empty(),
        Field::FamilyName => draft.family_name.trim().is_empty(),
        Field::Email => !policy::looks_like_email(&draft.email),
        Field::Attending => !draft.attending.is_set(),
        Field::HasDietaryRestriction => !draft.has_dietary_restriction.is_set(),
        Field::DietaryDetail => draft.dietary_detail.is_empty() && !asked.contains(&field),
        Field::NeedsBus => !draft.needs_bus.is_set(),
        Field::BusStop => draft.bus_stop.is_none(),
    }
}

fn prompt_field(field: Field) -> Result<Option<FieldEdit>, AppError> {
    let edit = match field {
        Field::GivenName => prompt_text(field, true)?.map(FieldEdit::GivenName),
        Field::FamilyName => prompt_text(field, true)?.map(FieldEdit::FamilyName),
        Field::Email => prompt_email()?.map(FieldEdit::Email),
        Field::DietaryDetail => prompt_text(field, false)?.map(FieldEdit::DietaryDetail),
        Field::Attending => prompt_choice(field)?.map(FieldEdit::Attending),
        Field::HasDietaryRestriction => {
            prompt_choice(field)?.map(FieldEdit::HasDietaryRestriction)
        }
        Field::NeedsBus => prompt_choice(field)?.map(FieldEdit::NeedsBus),
        Field::BusStop => prompt_stop()?.map(FieldEdit::BusStop),
    };
    Ok(edit)
}

fn prompt_text(field: Field, required: bool) -> Result<Option<String>, AppError> {
    let result = Input::<String>::new()
        .with_prompt(field.label())
        .allow_empty(!required)
        .validate_with(|value: &String| -> Result<(), &str> {
            if required && value.trim().is_empty() { Err("This field is required") } else { Ok(()) }
        })
        .interact_text();
    interpret(result)
}

fn prompt_email() -> Result<Option<String>, AppError> {
    let result = Input::<String>::new()
        .with_prompt(Field::Email.label())
        .validate_with(|value: &String| -> Result<(), &str> {
            if policy::looks_like_email(value) {
                Ok(())
            } else {
                Err("Please enter a valid email address")
            }
        })
        .interact_text();
    interpret(result)
}

fn prompt_choice(field: Field) -> Result<Option<Choice>, AppError> {
    let result = Select::new().with_prompt(field.label()).items(&["Yes", "No"]).default(0).interact();
    Ok(interpret(result)?.map(|index| Choice::from(index == 0)))
}

fn prompt_stop() -> Result<Option<BusStop>, AppError> {
    let names: Vec<&str> = BusStop::ALL.iter().map(|stop| stop.name()).collect();
    let result = Select::new().with_prompt(Field::BusStop.label()).items(&names).default(0).interact();
    Ok(interpret(result)?.map(|index| BusStop::ALL[index]))
}

fn confirm_retry() -> Result<bool, AppError> {
    let result = Confirm::new().with_prompt("Try sending again?").default(true).interact();
    Ok(interpret(result)?.unwrap_or(false))
}

fn interpret<T>(result: Result<T, DialoguerError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(err.to_string())),
    }
}
