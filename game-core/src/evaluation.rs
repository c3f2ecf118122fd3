use std::collections::HashMap;
use std::fmt;

/// One character of an encoded guess result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCode {
    Exact,   // '1' - same letter, same position
    Present, // '0' - letter appears elsewhere in the target
    Absent,  // 'X' - letter not in target, or lengths differ
}

impl MatchCode {
    pub fn as_char(self) -> char {
        match self {
            MatchCode::Exact => '1',
            MatchCode::Present => '0',
            MatchCode::Absent => 'X',
        }
    }

    pub fn from_char(code: char) -> Option<Self> {
        match code {
            '1' => Some(MatchCode::Exact),
            '0' => Some(MatchCode::Present),
            'X' => Some(MatchCode::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for MatchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Letter-matching strategies a guess can be scored with.
///
/// `NaiveContains` is the service's contract: a letter that is not an exact
/// match is `Present` whenever the target contains it at all, so repeated
/// letters are never deduplicated against the target's letter counts.
/// `Standard` is the classic Wordle rule where each target letter can be
/// claimed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationAlgorithm {
    #[default]
    NaiveContains,
    Standard,
}

impl EvaluationAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            EvaluationAlgorithm::NaiveContains => "naive-contains",
            EvaluationAlgorithm::Standard => "standard",
        }
    }

    pub fn evaluate(self, guess: &str, target: &str) -> String {
        self.evaluate_codes(guess, target)
            .into_iter()
            .map(MatchCode::as_char)
            .collect()
    }

    /// Score `guess` against `target`. The output always has one code per
    /// character of the guess.
    pub fn evaluate_codes(self, guess: &str, target: &str) -> Vec<MatchCode> {
        let guess_chars: Vec<char> = guess.chars().collect();
        let target_chars: Vec<char> = target.chars().collect();

        if guess_chars.len() != target_chars.len() {
            return vec![MatchCode::Absent; guess_chars.len()];
        }

        match self {
            EvaluationAlgorithm::NaiveContains => naive_contains(&guess_chars, &target_chars),
            EvaluationAlgorithm::Standard => standard(&guess_chars, &target_chars),
        }
    }
}

impl fmt::Display for EvaluationAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluate a guess with the service's default `naive-contains` rule
pub fn evaluate(guess: &str, target: &str) -> String {
    EvaluationAlgorithm::NaiveContains.evaluate(guess, target)
}

fn naive_contains(guess: &[char], target: &[char]) -> Vec<MatchCode> {
    guess
        .iter()
        .zip(target)
        .map(|(ch, expected)| {
            if ch == expected {
                MatchCode::Exact
            } else if target.contains(ch) {
                MatchCode::Present
            } else {
                MatchCode::Absent
            }
        })
        .collect()
}

fn standard(guess: &[char], target: &[char]) -> Vec<MatchCode> {
    let mut codes = vec![MatchCode::Absent; guess.len()];

    // Letters left to claim once exact matches are taken out
    let mut remaining: HashMap<char, usize> = HashMap::new();
    for (i, &ch) in target.iter().enumerate() {
        if guess[i] == ch {
            codes[i] = MatchCode::Exact;
        } else {
            *remaining.entry(ch).or_insert(0) += 1;
        }
    }

    for (i, ch) in guess.iter().enumerate() {
        if codes[i] == MatchCode::Exact {
            continue;
        }
        if let Some(count) = remaining.get_mut(ch) {
            if *count > 0 {
                *count -= 1;
                codes[i] = MatchCode::Present;
            }
        }
    }

    codes
}
