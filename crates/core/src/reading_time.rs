use crate::models::ContentBlock;

const WORDS_PER_MINUTE: usize = 200;

/// Estimates reading time from the structured body. Words are counted by
/// splitting on single spaces, each heading counts one extra word, and the
/// total is rounded up to whole minutes at 200 words per minute. Empty
/// content reads in "0 min".
pub fn estimate(content: &[ContentBlock]) -> String {
    let total_words: usize = content
        .iter()
        .map(|block| {
            let heading_words = block.heading.split(' ').count() + 1;
            let body_words: usize = block
                .body
                .iter()
                .map(|text| text.split(' ').count())
                .sum();
            heading_words + body_words
        })
        .sum();

    let minutes = if total_words > 0 {
        total_words.div_ceil(WORDS_PER_MINUTE)
    } else {
        0
    };

    format!("{} min", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(count: usize) -> String {
        vec!["palavra"; count].join(" ")
    }

    fn block(heading: &str, paragraphs: &[String]) -> ContentBlock {
        ContentBlock {
            heading: heading.to_string(),
            body: paragraphs.to_vec(),
        }
    }

    #[test]
    fn test_empty_content_is_zero_minutes() {
        assert_eq!(estimate(&[]), "0 min");
    }

    #[test]
    fn test_heading_counts_one_extra_word() {
        // "Hello world" is 2 words plus the extra one, well under a minute
        let content = [block("Hello world", &[])];
        assert_eq!(estimate(&content), "1 min");
    }

    #[test]
    fn test_ceiling_boundary_at_exactly_200_words() {
        // 1 heading word + 1 extra + 198 paragraph words = 200
        let content = [block("Introducao", &[words(198)])];
        assert_eq!(estimate(&content), "1 min");
    }

    #[test]
    fn test_ceiling_boundary_at_201_words() {
        let content = [block("Introducao", &[words(199)])];
        assert_eq!(estimate(&content), "2 min");
    }

    #[test]
    fn test_words_sum_across_blocks_and_paragraphs() {
        // (1 + 1 + 150) + (2 + 1 + 100 + 50) = 305 -> 2 min
        let content = [
            block("Primeiro", &[words(150)]),
            block("Segundo capitulo", &[words(100), words(50)]),
        ];
        assert_eq!(estimate(&content), "2 min");
    }
}
