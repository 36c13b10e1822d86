/// Average reading speed, words per minute
pub const WORDS_PER_MINUTE: f64 = 213.0;

/// Estimated minutes to read `body`, never less than one.
///
/// Words are whatever a split on single spaces yields, so runs of spaces and
/// newline-joined words skew the count slightly. Card output depends on this
/// exact rule.
pub fn reading_time_minutes(body: &str) -> u32 {
    let words = body.split(' ').count();
    let minutes = (words as f64 / WORDS_PER_MINUTE).round() as u32;
    minutes.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn empty_body_reads_in_a_minute() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes("short"), 1);
    }

    #[test]
    fn rounds_to_nearest_minute() {
        assert_eq!(reading_time_minutes(&words(213)), 1);
        assert_eq!(reading_time_minutes(&words(319)), 1);
        assert_eq!(reading_time_minutes(&words(320)), 2);
        assert_eq!(reading_time_minutes(&words(426)), 2);
        assert_eq!(reading_time_minutes(&words(2130)), 10);
    }

    #[test]
    fn only_single_spaces_separate_words() {
        // double space yields an empty token, newline joins two words into one
        assert_eq!("a  b\nc".split(' ').count(), 3);
        assert_eq!(reading_time_minutes(&"a  ".repeat(160)), 2);
    }
}
