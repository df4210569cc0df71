/// What the player got right and wrong during this session.
///
/// `correct` holds answers (a country name when the flag was the prompt),
/// `incorrect` holds the prompts that were missed, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerHistory {
    correct: Vec<String>,
    incorrect: Vec<String>,
}

fn move_to_end(list: &mut Vec<String>, value: &str) {
    list.retain(|x| x != value);
    list.push(value.to_string());
}

impl AnswerHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_correct(&mut self, answer: &str, prompt: &str) {
        move_to_end(&mut self.correct, answer);
        self.incorrect.retain(|x| x != prompt);
    }

    /// A miss revokes mastery of both the expected answer and the one given
    /// in its place.
    pub fn record_incorrect(&mut self, prompt: &str, expected: &str, submitted: &str) {
        move_to_end(&mut self.incorrect, prompt);
        self.correct.retain(|x| x != expected && x != submitted);
    }

    pub fn remove_incorrect(&mut self, prompt: &str) -> bool {
        let before = self.incorrect.len();
        self.incorrect.retain(|x| x != prompt);
        self.incorrect.len() != before
    }

    pub fn clear_incorrect(&mut self) {
        self.incorrect.clear();
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct.iter().any(|x| x == answer)
    }

    pub fn correct(&self) -> &[String] {
        &self.correct
    }

    pub fn incorrect(&self) -> &[String] {
        &self.incorrect
    }
}
