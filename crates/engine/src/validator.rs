use model::question::Question;

/// Every question carries exactly this many options.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Validates whether a question set is usable by a session: non-empty, and
/// every question passes [`is_valid_question`].
pub fn is_valid_set(questions: &[Question]) -> bool {
    !questions.is_empty() && questions.iter().all(is_valid_question)
}

/// Validates a single question: a non-empty prompt and explanation, exactly
/// four non-empty options, and a correct-answer index within bounds.
pub fn is_valid_question(question: &Question) -> bool {
    if question.prompt.is_empty() || question.explanation.is_empty() {
        return false;
    }

    if question.options.len() != OPTIONS_PER_QUESTION {
        return false;
    }

    if question.options.iter().any(String::is_empty) {
        return false;
    }

    usize::from(question.answer) < question.options.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            prompt: "Which river is the longest in Asia?".into(),
            options: ["Nile", "Yangtze", "Amazon", "Mississippi"].map(String::from).to_vec(),
            answer: 1,
            explanation: "The Yangtze runs about 6300 kilometers.".into(),
        }
    }

    #[test]
    fn accepts_a_well_formed_question() {
        assert!(is_valid_question(&question()));
    }

    #[test]
    fn accepts_every_in_range_answer_index() {
        for answer in 0..4 {
            let mut question = question();
            question.answer = answer;
            assert!(is_valid_question(&question));
        }
    }

    #[test]
    fn rejects_an_empty_prompt() {
        let mut question = question();
        question.prompt = String::new();
        assert!(!is_valid_question(&question));
    }

    #[test]
    fn rejects_an_empty_explanation() {
        let mut question = question();
        question.explanation = String::new();
        assert!(!is_valid_question(&question));
    }

    #[test]
    fn rejects_too_few_options() {
        let mut question = question();
        question.options.pop();
        assert!(!is_valid_question(&question));
    }

    #[test]
    fn rejects_too_many_options() {
        let mut question = question();
        question.options.push("Danube".into());
        assert!(!is_valid_question(&question));
    }

    #[test]
    fn rejects_a_blank_option() {
        let mut question = question();
        question.options[2] = String::new();
        assert!(!is_valid_question(&question));
    }

    #[test]
    fn rejects_out_of_range_answers() {
        for answer in [4, 5, u8::MAX] {
            let mut question = question();
            question.answer = answer;
            assert!(!is_valid_question(&question));
        }
    }

    #[test]
    fn rejects_an_empty_set() {
        assert!(!is_valid_set(&[]));
    }

    #[test]
    fn rejects_a_set_with_one_bad_question() {
        let mut bad = question();
        bad.answer = 9;
        assert!(!is_valid_set(&[question(), bad, question()]));
    }

    #[test]
    fn accepts_a_set_of_good_questions() {
        assert!(is_valid_set(&[question(), question()]));
    }
}
