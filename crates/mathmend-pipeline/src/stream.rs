//! Streaming wrapper over the pipeline.
//!
//! Generator output arrives as arbitrary-sized fragments, and a fragment
//! can end in the middle of a math span. Running the pipeline over such a
//! prefix would repair half a formula, so the stream withholds everything
//! from the first delimiter that does not begin a completed span and emits
//! it with a later chunk once the region closes.

use log::trace;

use crate::process_mixed_text;
use crate::span::safe_prefix_len;

/// Chunked-input coordinator. The pending buffer is the only mutable state
/// in the whole pipeline; one `MathStream` belongs to exactly one logical
/// stream and performs no synchronization of its own.
#[derive(Debug, Default)]
pub struct MathStream {
    pending: String,
}

impl MathStream {
    /// A stream with an empty pending buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text withheld so far, still waiting for its closing delimiter.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Appends a chunk and returns the processed text that is safe to emit.
    ///
    /// Complete spans and the prose around them are processed and emitted;
    /// anything from an unclosed delimiter onward carries over. A lone
    /// trailing `$` also carries over, since the next chunk may turn it
    /// into a `$$` opener.
    pub fn update(&mut self, chunk: &str) -> String {
        self.pending.push_str(chunk);

        let cut = safe_prefix_len(&self.pending);
        if cut == self.pending.len() {
            let ready = std::mem::take(&mut self.pending);
            process_mixed_text(&ready)
        } else {
            let ready = self.pending[..cut].to_string();
            self.pending.drain(..cut);
            trace!("withholding {} byte(s) of open math", self.pending.len());
            process_mixed_text(&ready)
        }
    }

    /// Flushes whatever is still pending. A region left unterminated at
    /// end of stream is processed as-is rather than dropped.
    pub fn finish(mut self) -> String {
        let rest = std::mem::take(&mut self.pending);
        process_mixed_text(&rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process;

    #[test]
    fn closed_chunks_pass_straight_through() {
        let mut stream = MathStream::new();
        let out = stream.update("plain prose, $x+1$ done. ");
        assert_eq!(out, "plain prose, $x+1$ done. ");
        assert!(stream.pending().is_empty());
    }

    #[test]
    fn open_region_is_withheld() {
        let mut stream = MathStream::new();
        let out = stream.update("before $x^2");
        assert_eq!(out, "before ");
        assert_eq!(stream.pending(), "$x^2");
    }

    #[test]
    fn split_formula_matches_one_shot_processing() {
        let mut stream = MathStream::new();
        let first = stream.update("$x^2");
        assert_eq!(first, "");
        assert!(!stream.pending().is_empty());

        let second = stream.update("+1$");
        assert!(stream.pending().is_empty());
        assert_eq!(format!("{first}{second}"), process("$x^2+1$").canonical);
    }

    #[test]
    fn formula_split_across_three_chunks() {
        let mut stream = MathStream::new();
        let mut out = String::new();
        for chunk in ["the root is $sq", "rt{", "2}$ here"] {
            out.push_str(&stream.update(chunk));
        }
        out.push_str(&stream.finish());
        assert_eq!(out, r"the root is $\sqrt{2}$ here");
    }

    #[test]
    fn closed_block_span_flushes() {
        let mut stream = MathStream::new();
        let out = stream.update("$$x$$ after");
        assert_eq!(out, "$$x$$ after");
        assert!(stream.pending().is_empty());
    }

    #[test]
    fn closing_block_delimiter_split_across_chunks() {
        let mut stream = MathStream::new();
        let mut out = String::new();
        for chunk in ["a $$x times y$", "$ b"] {
            out.push_str(&stream.update(chunk));
        }
        out.push_str(&stream.finish());
        assert_eq!(out, r"a $$x \times y$$ b");
    }

    #[test]
    fn finish_flushes_unterminated_region() {
        let mut stream = MathStream::new();
        let emitted = stream.update("tail $x+1");
        assert_eq!(emitted, "tail ");
        // The unterminated span is flushed verbatim; scan_spans reports no
        // complete span so the interior stays unrepaired.
        assert_eq!(stream.finish(), "$x+1");
    }

    #[test]
    fn many_small_chunks_equal_one_big_chunk() {
        let text = "sum: $a leq b$, then $$c times d$$ end";
        let mut stream = MathStream::new();
        let mut chunked = String::new();
        for piece in text.as_bytes().chunks(3) {
            chunked.push_str(&stream.update(std::str::from_utf8(piece).unwrap()));
        }
        chunked.push_str(&stream.finish());
        assert_eq!(chunked, process_mixed_text(text));
    }
}
