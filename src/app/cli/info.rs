use crate::adapters::SystemTimeSource;
use crate::app::api;
use crate::domain::{Accordion, AppConfig, AppError};

pub fn run_info(config: &AppConfig) -> Result<(), AppError> {
    let event = &config.event;
    let target = config.target()?;
    let local_start = target.as_utc().with_timezone(&chrono::Local);

    println!("{}", event.title);
    println!("{}", local_start.format("%d · %m · %Y  %H:%M"));
    println!("{}", event.venue);
    if !event.ceremony.is_empty() {
        println!();
        println!("{}", event.ceremony);
    }
    if !event.transport.is_empty() {
        println!("{}", event.transport);
    }

    let reading = api::countdown(config, &SystemTimeSource)?;
    println!();
    println!("⏳ {}", reading);

    if !event.respond_by.is_empty() {
        println!("Please respond before {} with `rsvp respond`.", event.respond_by);
    }
    Ok(())
}

pub fn run_faq(config: &AppConfig, open: Option<usize>) -> Result<(), AppError> {
    let mut accordion = Accordion::new(config.faq.len());
    if let Some(number) = open {
        if number == 0 || number > config.faq.len() {
            return Err(AppError::InvalidInput(format!(
                "question {} does not exist (1-{})",
                number,
                config.faq.len()
            )));
        }
        accordion.toggle(number - 1);
    }

    for (index, entry) in config.faq.iter().enumerate() {
        if accordion.is_open(index) {
            println!("▾ {}. {}", index + 1, entry.question);
            println!("    {}", entry.answer);
        } else {
            println!("▸ {}. {}", index + 1, entry.question);
        }
    }
    Ok(())
}
