//! Magic 8-Ball answer list and random draw.

use rand::Rng;

/// The ten classic answers. The 8-Ball never reads the question; the answer
/// is drawn uniformly from this list.
pub const ANSWERS: [&str; 10] = [
    "It is certain.",
    "Ask again later.",
    "Don't count on it.",
    "Yes, definitely.",
    "My sources say no.",
    "Outlook good.",
    "Very doubtful.",
    "Yes, in due time.",
    "Cannot predict now.",
    "Absolutely!",
];

/// Draw one answer at random.
pub fn draw() -> &'static str {
    let mut rng = rand::thread_rng();
    ANSWERS[rng.gen_range(0..ANSWERS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_returns_known_answer() {
        for _ in 0..100 {
            assert!(ANSWERS.contains(&draw()));
        }
    }

    #[test]
    fn test_answers_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for answer in ANSWERS {
            assert!(seen.insert(answer), "duplicate answer: {}", answer);
        }
    }
}
