use crate::catalog::{Catalog, Country, DrivingSide, Filter, Region};
use crate::flash::{FlashMessage, Tone};
use crate::grading::grade;
use crate::history::AnswerHistory;
use crate::question::{fill_in_blank, pick_next, Question};
use crate::queue::Queue;
use crate::Error;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub region: Region,
    pub geoguessr_only: bool,
    /// Show the flag and ask for the name, or the other way round.
    pub prompt_is_flag: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: Region::World,
            geoguessr_only: true,
            prompt_is_flag: true,
        }
    }
}

impl Settings {
    pub fn filter(&self) -> Filter {
        Filter {
            region: self.region,
            geoguessr_only: self.geoguessr_only,
        }
    }
}

/// The facts shown after every answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    pub flag: String,
    pub name: String,
    pub dialing_prefix: String,
    pub drives_on: DrivingSide,
}

impl CountrySummary {
    fn of(country: &Country) -> Self {
        Self {
            flag: country.flag.clone(),
            name: country.name.clone(),
            dialing_prefix: country.dialing_prefix.clone(),
            drives_on: country.drives_on,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{} {}", self.flag, self.name),
            format!("Dialing prefix: {}", self.dialing_prefix),
            format!("Drives on the {}", self.drives_on),
        ]
    }
}

/// The result of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub prompt: String,
    pub expected: String,
    pub submitted: String,
    pub summary: Option<CountrySummary>,
}

impl Feedback {
    pub fn flash_message(&self) -> FlashMessage {
        let mut lines = match &self.summary {
            Some(summary) => summary.lines(),
            None => vec![format!("{} {}", self.prompt, self.expected)],
        };
        if !self.correct && !self.submitted.is_empty() {
            lines.push(format!("You answered {}", self.submitted));
        }
        FlashMessage {
            lines,
            tone: if self.correct {
                Tone::Correct
            } else {
                Tone::Incorrect
            },
        }
    }
}

/// One running quiz: settings, queue, current question and answer history.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    catalog: Catalog,
    settings: Settings,
    queue: Queue,
    current: Option<Question>,
    history: AnswerHistory,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(catalog: Catalog, settings: Settings, mut rng: R) -> Self {
        let mut queue = Queue::new();
        queue.refill(&catalog, &settings.filter(), &mut rng);
        info!(
            "[Session] Starting with {} of {} countries ({:?}).",
            queue.len(),
            catalog.len(),
            settings
        );
        let mut session = Self {
            catalog,
            settings,
            queue,
            current: None,
            history: AnswerHistory::new(),
            rng,
        };
        session.advance();
        session
    }

    /// `None` means no country matches the current settings.
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &AnswerHistory {
        &self.history
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn advance(&mut self) {
        self.current = pick_next(
            &self.catalog,
            &mut self.queue,
            &self.settings,
            &self.history,
            &mut self.rng,
        );
        match &self.current {
            Some(question) => debug!("[Session] Next question: {:?}", question),
            None => warn!("[Session] No questions available for {:?}.", self.settings),
        }
    }

    /// Refills the queue for the new filter, keeping the current question if it still fits.
    fn refilter(&mut self) {
        let filter = self.settings.filter();
        self.queue.refill(&self.catalog, &filter, &mut self.rng);
        let still_fits = self
            .current
            .as_ref()
            .and_then(|q| self.catalog.get(q.country()))
            .is_some_and(|c| filter.matches(c));
        if still_fits {
            debug!("[Session] Current question still matches {:?}.", filter);
        } else {
            self.advance();
        }
    }

    pub fn set_region(&mut self, region: Region) {
        if self.settings.region != region {
            self.settings.region = region;
            self.refilter();
        }
    }

    pub fn set_geoguessr_only(&mut self, geoguessr_only: bool) {
        if self.settings.geoguessr_only != geoguessr_only {
            self.settings.geoguessr_only = geoguessr_only;
            self.refilter();
        }
    }

    pub fn set_prompt_is_flag(&mut self, prompt_is_flag: bool) {
        if self.settings.prompt_is_flag != prompt_is_flag {
            self.settings.prompt_is_flag = prompt_is_flag;
            self.advance();
        }
    }

    pub fn set_settings(&mut self, settings: Settings) {
        let filter_changed = self.settings.filter() != settings.filter();
        let direction_changed = self.settings.prompt_is_flag != settings.prompt_is_flag;
        self.settings = settings;
        match (filter_changed, direction_changed) {
            (true, true) => {
                self.queue
                    .refill(&self.catalog, &settings.filter(), &mut self.rng);
                self.advance();
            }
            (true, false) => self.refilter(),
            (false, true) => self.advance(),
            (false, false) => {}
        }
    }

    /// Grades `answer` against the current question, records it and moves on.
    ///
    /// Returns `None` when there is no question to answer.
    pub fn submit(&mut self, answer: &str, free_text: bool) -> Option<Feedback> {
        let question = self.current.as_ref()?;
        let correct = grade(answer, question, free_text);
        let prompt = question.prompt().to_string();
        let expected = question.answer().to_string();
        let summary = self.catalog.get(question.country()).map(CountrySummary::of);

        if correct {
            self.history.record_correct(&expected, &prompt);
        } else {
            self.history.record_incorrect(&prompt, &expected, answer.trim());
        }
        debug!(
            "[Session] {:?} for {:?}: {}",
            answer,
            prompt,
            if correct { "correct" } else { "incorrect" }
        );
        self.advance();

        Some(Feedback {
            correct,
            prompt,
            expected,
            submitted: answer.trim().to_string(),
            summary,
        })
    }

    /// Replaces the current question with a fill-in-the-blank for a missed prompt.
    ///
    /// The country that was on screen goes back to the front of the queue,
    /// unless it is the one under review or the current filter excludes it.
    pub fn review_mistake(&mut self, entry: &str) -> Result<(), Error> {
        let unknown = || Error::UnknownEntry(entry.to_string());
        let id = self.catalog.find(entry).ok_or_else(unknown)?;
        let question =
            fill_in_blank(&self.catalog, id, self.settings.prompt_is_flag).ok_or_else(unknown)?;

        if let Some(previous) = self.current.take().map(|q| q.country()) {
            let filter = self.settings.filter();
            let fits = self
                .catalog
                .get(previous)
                .is_some_and(|c| filter.matches(c));
            if previous != id && fits {
                self.queue.push_front(previous);
            } else {
                debug!("[Session] Not re-queueing {:?}.", previous);
            }
        }
        debug!("[Session] Reviewing {:?}.", entry);
        self.current = Some(question);
        self.history.remove_incorrect(entry);
        Ok(())
    }

    pub fn clear_mistakes(&mut self) {
        self.history.clear_incorrect();
    }
}
