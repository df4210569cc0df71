use crate::catalog::{Catalog, Country, CountryId, Filter};
use crate::history::AnswerHistory;
use crate::queue::Queue;
use crate::random::{sample_size, shuffle};
use crate::session::Settings;
use log::{debug, warn};
use rand::Rng;

/// Number of options on a multiple-choice question when the pool is big enough.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub value: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    MultipleChoice {
        country: CountryId,
        prompt: String,
        answer: String,
        options: Vec<AnswerOption>,
    },
    FillInBlank {
        country: CountryId,
        prompt: String,
        answer: String,
    },
}

impl Question {
    pub fn country(&self) -> CountryId {
        match self {
            Question::MultipleChoice { country, .. } | Question::FillInBlank { country, .. } => {
                *country
            }
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice { prompt, .. } | Question::FillInBlank { prompt, .. } => {
                prompt
            }
        }
    }

    pub fn answer(&self) -> &str {
        match self {
            Question::MultipleChoice { answer, .. } | Question::FillInBlank { answer, .. } => {
                answer
            }
        }
    }

    pub fn options(&self) -> &[AnswerOption] {
        match self {
            Question::MultipleChoice { options, .. } => options,
            Question::FillInBlank { .. } => &[],
        }
    }

    pub fn is_fill_in_blank(&self) -> bool {
        matches!(self, Question::FillInBlank { .. })
    }
}

/// `(prompt, answer)` for a country in the given direction.
fn prompt_and_answer(country: &Country, prompt_is_flag: bool) -> (String, String) {
    if prompt_is_flag {
        (country.flag.clone(), country.name.clone())
    } else {
        (country.name.clone(), country.flag.clone())
    }
}

fn option_value(country: &Country, prompt_is_flag: bool) -> String {
    prompt_and_answer(country, prompt_is_flag).1
}

/// Draws the next country and turns it into a question.
///
/// Countries whose name was already answered correctly come back as
/// fill-in-the-blank. `None` means no country matches the settings.
pub fn pick_next<R: Rng + ?Sized>(
    catalog: &Catalog,
    queue: &mut Queue,
    settings: &Settings,
    history: &AnswerHistory,
    rng: &mut R,
) -> Option<Question> {
    let filter = settings.filter();
    let id = queue.next(catalog, &filter, rng)?;
    let country = catalog.get(id)?;

    if history.is_correct(&country.name) {
        debug!("[Question] {} is mastered, asking fill-in-the-blank.", country.name);
        fill_in_blank(catalog, id, settings.prompt_is_flag)
    } else {
        multiple_choice(catalog, id, &filter, settings.prompt_is_flag, rng)
    }
}

pub fn fill_in_blank(catalog: &Catalog, id: CountryId, prompt_is_flag: bool) -> Option<Question> {
    let (prompt, answer) = prompt_and_answer(catalog.get(id)?, prompt_is_flag);
    Some(Question::FillInBlank {
        country: id,
        prompt,
        answer,
    })
}

/// Builds a question with up to three distractors drawn from the filtered pool.
pub fn multiple_choice<R: Rng + ?Sized>(
    catalog: &Catalog,
    id: CountryId,
    filter: &Filter,
    prompt_is_flag: bool,
    rng: &mut R,
) -> Option<Question> {
    let country = catalog.get(id)?;
    let (prompt, answer) = prompt_and_answer(country, prompt_is_flag);

    let mut pool = catalog.filtered(filter);
    pool.retain(|other| *other != id);
    let mut picked = sample_size(&pool, OPTION_COUNT - 1, rng);
    if picked.len() < OPTION_COUNT - 1 {
        warn!(
            "[Question] Only {} distractors available for {}.",
            picked.len(),
            country.name
        );
    }
    picked.push(id);

    let options = shuffle(&picked, rng)
        .into_iter()
        .filter_map(|option| {
            catalog.get(option).map(|c| AnswerOption {
                value: option_value(c, prompt_is_flag),
                is_correct: option == id,
            })
        })
        .collect();

    Some(Question::MultipleChoice {
        country: id,
        prompt,
        answer,
        options,
    })
}
