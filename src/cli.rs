use colored::Colorize;
use libflagquiz::flash::{Flash, FlashMessage, Tone};
use libflagquiz::{Question, Region, Session};
use log::{debug, warn};
use std::io::{self, Write};
use std::time::Instant;
use text_io::read;

#[derive(Debug, PartialEq)]
pub enum Command {
    Option(usize),
    Text(String),
    Region(Region),
    ToggleGeoguessr,
    ToggleFlagPrompt,
    Mistakes,
    Review(usize),
    Clear,
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    /// Numbers pick an option when the question has `options_count` options.
    /// Anything else that is not a `:command` is a typed answer.
    pub fn from_str(options_count: usize, input: &str) -> Command {
        let input = input.trim();
        if let Some(rest) = input.strip_prefix(':') {
            let (name, arg) = match rest.split_once(' ') {
                Some((name, arg)) => (name, arg.trim()),
                None => (rest, ""),
            };
            return match name {
                "region" | "r" => match arg.parse::<Region>() {
                    Ok(region) => Command::Region(region),
                    Err(err) => Command::Invalid(err),
                },
                "geo" | "g" => Command::ToggleGeoguessr,
                "flag" | "f" => Command::ToggleFlagPrompt,
                "mistakes" | "m" => Command::Mistakes,
                "review" => match arg.parse::<usize>() {
                    Ok(num) if num > 0 => Command::Review(num - 1),
                    _ => Command::Invalid(format!("{:?} is not a mistake number", arg)),
                },
                "clear" => Command::Clear,
                "help" | "h" => Command::Help,
                other => Command::Invalid(format!("unknown command :{}", other)),
            };
        }
        match input {
            "q" => Command::Quit,
            "" => Command::Invalid("type an answer".to_string()),
            input if options_count > 0 => match input.parse::<usize>() {
                Ok(num) if (1..=options_count).contains(&num) => Command::Option(num - 1),
                Ok(_) => Command::Invalid(format!(
                    "There are only {} options available!",
                    options_count
                )),
                Err(_) => Command::Text(input.to_string()),
            },
            input => Command::Text(input.to_string()),
        }
    }
}

fn print_help() {
    println!("{}", "Pick an option by number or type the answer.".cyan());
    println!(
        "{}",
        ":region <world|continent>  :geo  :flag  :mistakes  :review <n>  :clear  :help  q"
            .cyan()
    );
}

fn print_flash(message: &FlashMessage) {
    for line in &message.lines {
        match message.tone {
            Tone::Correct => println!("{}", line.bright_green()),
            Tone::Incorrect => println!("{}", line.bright_red()),
        }
    }
}

fn print_question(session: &Session, question: &Question) {
    let settings = session.settings();
    let header = format!(
        "[{}{}] ",
        settings.region,
        if settings.geoguessr_only { ", GeoGuessr" } else { "" }
    );
    println!(
        "{}{}",
        header.cyan(),
        format!(" {} ", question.prompt()).black().bold().on_white()
    );

    let indent = " ".repeat(4);
    match question {
        Question::MultipleChoice { options, .. } => {
            for (i, option) in options.iter().enumerate() {
                println!("{}{}. {}", indent, format!("{}", i + 1).bold(), option.value);
            }
            print!("{} ", format!("Answer (1-{}):", options.len()).cyan());
        }
        Question::FillInBlank { .. } => {
            print!("{} ", "Type the answer:".cyan());
        }
    }
}

fn print_mistakes(session: &Session) {
    let mistakes = session.history().incorrect();
    if mistakes.is_empty() {
        println!("{}", "No mistakes so far.".green());
        return;
    }
    println!("{}", "wrong:".dimmed());
    for (i, mistake) in mistakes.iter().enumerate() {
        println!("  {}. {}", format!("{}", i + 1).bold(), mistake);
    }
}

/// Hands out the pending feedback once, so later prompts do not repeat it.
fn take_flash(flash: &mut Flash, now: Instant) -> Option<FlashMessage> {
    let message = flash.visible(now).cloned();
    flash.dismiss();
    message
}

pub fn cli_loop(session: &mut Session, flash: &mut Flash) {
    print_help();
    loop {
        if let Some(message) = take_flash(flash, Instant::now()) {
            print_flash(&message);
        }

        let question = session.current().cloned();
        match &question {
            Some(question) => print_question(session, question),
            None => print!(
                "{} ",
                format!(
                    "No countries match {}. Change the settings:",
                    session.settings().region
                )
                .yellow()
            ),
        }

        io::stdout().flush().ok();
        let input: String = read!("{}\n");
        let options_count = question.as_ref().map_or(0, |q| q.options().len());
        let command = Command::from_str(options_count, &input);
        debug!("command: {:?}", command);

        match command {
            Command::Option(num) => {
                if let Some(option) = question.as_ref().and_then(|q| q.options().get(num)) {
                    let value = option.value.clone();
                    if let Some(feedback) = session.submit(&value, false) {
                        flash.show(feedback.flash_message(), Instant::now());
                    }
                }
            }
            Command::Text(text) => match session.submit(&text, true) {
                Some(feedback) => flash.show(feedback.flash_message(), Instant::now()),
                None => println!("{}", "There is no question to answer.".yellow()),
            },
            Command::Region(region) => session.set_region(region),
            Command::ToggleGeoguessr => {
                let geoguessr_only = !session.settings().geoguessr_only;
                session.set_geoguessr_only(geoguessr_only);
            }
            Command::ToggleFlagPrompt => {
                let prompt_is_flag = !session.settings().prompt_is_flag;
                session.set_prompt_is_flag(prompt_is_flag);
            }
            Command::Mistakes => print_mistakes(session),
            Command::Review(idx) => {
                match session.history().incorrect().get(idx).cloned() {
                    Some(entry) => {
                        if let Err(err) = session.review_mistake(&entry) {
                            warn!("[Review] {}", err);
                            println!("{}", format!("{}", err).bright_red());
                        }
                    }
                    None => println!("{}", format!("There is no mistake {}.", idx + 1).bright_red()),
                }
            }
            Command::Clear => session.clear_mistakes(),
            Command::Help => print_help(),
            Command::Quit => {
                println!("{}", "Quitting!".cyan());
                return;
            }
            Command::Invalid(msg) => println!("{}", msg.bright_red()),
        }
    }
}
