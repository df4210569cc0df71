use crate::normalize::normalize;
use crate::question::Question;

/// Typed answers shorter than this only count when they match exactly.
const MIN_PARTIAL_LEN: usize = 3;

/// Checks a submission against the question's stored answer.
///
/// A picked option must match exactly. Typed text is compared loosely: it is
/// correct when it equals the answer or, if at least three characters long,
/// appears inside it ("fra" for "France", "bosnia" for "Bosnia and Herzegovina").
pub fn grade(submitted: &str, question: &Question, free_text: bool) -> bool {
    match question {
        Question::MultipleChoice { answer, .. } if !free_text => submitted == answer.as_str(),
        Question::MultipleChoice { answer, .. } | Question::FillInBlank { answer, .. } => {
            free_text_matches(submitted, answer)
        }
    }
}

fn free_text_matches(submitted: &str, expected: &str) -> bool {
    let submitted = normalize(submitted);
    let expected = normalize(expected);
    if submitted.is_empty() {
        return false;
    }
    submitted == expected
        || (submitted.chars().count() >= MIN_PARTIAL_LEN && expected.contains(&submitted))
}
