//! End-to-end runs over the kind of text the generator actually produces:
//! mixed prose, missing backslashes, stray invisible characters, truncated
//! braces, and fragment-by-fragment delivery.

use mathmend_pipeline::{MathStream, process, process_mixed_text, rewrite_prose};
use mathmend_render::{to_speech, to_unicode};

#[test]
fn full_repair_of_messy_generator_output() {
    let raw = "alan pi r^2 times\u{200B} 2";
    let out = process(raw);
    assert_eq!(out.canonical, r"alan \pi r^2 \times 2");
    assert!(out.is_valid);
    assert_eq!(out.fallback, "alan π r² × 2");
}

#[test]
fn truncated_fraction_is_repaired_and_rendered() {
    let out = process(r"\frac{1}{2");
    assert_eq!(out.canonical, r"\frac{1}{2}");
    assert!(out.is_valid);
    assert_eq!(out.fallback, "½");
}

#[test]
fn diagnostics_never_block_output() {
    let out = process(r"\usepackage{amsmath} x^{2}");
    assert!(!out.is_valid);
    assert!(out.fallback.contains('²'));
}

#[test]
fn mixed_prose_roundtrip() {
    let input = "Hipotenüs için $c^2 = a^2 + b^2$ kullanılır, $50$ TL tutar.";
    let out = process_mixed_text(input);
    // The formula span is already canonical; the numeric span is skipped.
    assert_eq!(out, input);

    let repaired = process_mixed_text("Sonuç $x leq 5$ olmalı");
    assert_eq!(repaired, r"Sonuç $x \leq 5$ olmalı");
}

#[test]
fn prose_and_math_passes_compose() {
    let prose = rewrite_prose("Adım 1 -> Adım 2, **önemli**");
    assert_eq!(prose, "Adım 1 → Adım 2, önemli");
}

#[test]
fn streaming_matches_one_shot() {
    let text = "first step: $$frac{1}{2} times 4$$ then $x^2$ done";
    let expected = process_mixed_text(text);

    for chunk_size in [1, 2, 5, 7, 100] {
        let mut stream = MathStream::new();
        let mut out = String::new();
        for piece in text.as_bytes().chunks(chunk_size) {
            out.push_str(&stream.update(std::str::from_utf8(piece).unwrap()));
        }
        out.push_str(&stream.finish());
        assert_eq!(out, expected, "chunk size {chunk_size}");
    }
}

#[test]
fn renderers_never_leak_raw_commands() {
    let inputs = [
        r"\alpha + \unknowncmd{x} - \beta",
        r"\frac{1}{2} \mystery y^{2}",
        r"\notacommand",
    ];
    for input in inputs {
        let u = to_unicode(input);
        let s = to_speech(input);
        assert!(!u.contains('\\'), "unicode leaked: {u:?}");
        assert!(!s.contains('\\'), "speech leaked: {s:?}");
    }
}

#[test]
fn speech_of_processed_canonical_text() {
    let canonical = process("x^2 + frac{1}{2} = y").canonical;
    let spoken = to_speech(&canonical);
    assert!(spoken.contains("kare"), "got {spoken:?}");
    assert!(spoken.contains("yarım"), "got {spoken:?}");
    assert!(spoken.contains("eşittir"), "got {spoken:?}");
}
