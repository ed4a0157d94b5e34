/// Split text into bounded chunks at sentence boundaries
///
/// Yields trimmed substrings of the input. Text within the threshold comes
/// back as a single chunk; longer text is split after sentence-ending
/// punctuation (`.`, `!`, `?`), greedily packing consecutive sentences into
/// each chunk. A single sentence longer than the threshold forms its own
/// oversized chunk rather than being dropped or cut mid-sentence.
pub fn sentence_chunks(text: &str, max_chars: usize) -> SentenceChunks<'_> {
    SentenceChunks {
        remaining: text.trim(),
        max_chars,
    }
}

/// Lazy iterator over sentence-packed chunks of a borrowed string
pub struct SentenceChunks<'a> {
    remaining: &'a str,
    max_chars: usize,
}

impl<'a> Iterator for SentenceChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.remaining.is_empty() {
            return None;
        }

        match split_point(self.remaining, self.max_chars) {
            None => {
                let chunk = self.remaining;
                self.remaining = "";
                Some(chunk)
            }
            Some(at) => {
                let (chunk, rest) = self.remaining.split_at(at);
                self.remaining = rest.trim_start();
                Some(chunk.trim_end())
            }
        }
    }
}

const fn is_sentence_end(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Find the byte offset to split `text` at, or `None` if it fits whole
///
/// A boundary sits after the last punctuation char of a run (so ellipses
/// stay intact). Prefers the last boundary within the character budget;
/// an oversized leading sentence splits at its own end instead.
fn split_point(text: &str, max_chars: usize) -> Option<usize> {
    let mut last_fit: Option<usize> = None;
    let mut overflowed = false;

    for (chars_seen, (idx, ch)) in text.char_indices().enumerate() {
        if chars_seen >= max_chars {
            overflowed = true;
            if last_fit.is_some() {
                return last_fit;
            }
        }

        if is_sentence_end(ch) {
            let end = idx + ch.len_utf8();
            let run_continues = text[end..].chars().next().is_some_and(is_sentence_end);

            if !run_continues && end < text.len() {
                if overflowed {
                    // a sentence longer than the budget ends here
                    return Some(end);
                }
                last_fit = Some(end);
            }
        }
    }

    // Text fits, or its tail is one trailing oversized sentence
    if overflowed { last_fit } else { None }
}
