// Composition tests — verifying that the pipeline stages chain together.
//
// These tests exercise the data flow end to end:
//   tokenize -> vocabulary -> frames -> match matrix -> masks -> rendering
// without touching stdin or the terminal (except report generation which
// writes to the system temp directory).

use copycheck::config::{create_matcher, MatcherBackend};
use copycheck::matching::{detect_matches, detect_matches_with, Detection};
use copycheck::output::highlight::{matched_passages, Marker};
use copycheck::output::markdown::generate_report;
use copycheck::output::summary::CoverageSummary;
use copycheck::output::terminal::{render_reference, render_sample};
use copycheck::text::normalize::normalize_punctuation;
use copycheck::text::tokenizer::detokenize;
use copycheck::DetectError;

fn covered_words(tokens: &[copycheck::text::tokenizer::Token], mask: &[bool]) -> Vec<String> {
    tokens
        .iter()
        .zip(mask)
        .filter(|(_, m)| **m)
        .map(|(t, _)| t.word.clone())
        .collect()
}

// ============================================================
// Concrete scenarios
// ============================================================

#[test]
fn fog_scenario() {
    let d = detect_matches("The fog of San Francisco", "Hedgehog and the Fog", 2).unwrap();
    assert_eq!(d.reference_mask, vec![true, true, false, false, false]);
    assert_eq!(d.sample_mask, vec![false, false, true, true]);
    assert_eq!(covered_words(&d.reference_tokens, &d.reference_mask), vec!["the", "fog"]);
}

#[test]
fn identical_texts_frame_one_fully_true() {
    let text = "It was the best of times, it was the worst of times.";
    let d = detect_matches(text, text, 1).unwrap();
    assert!(d.reference_mask.iter().all(|&b| b));
    assert!(d.sample_mask.iter().all(|&b| b));
}

#[test]
fn disjoint_vocabularies_all_false() {
    let d = detect_matches("red green blue", "cat dog bird fish", 1).unwrap();
    assert_eq!(d.reference_mask, vec![false; 3]);
    assert_eq!(d.sample_mask, vec![false; 4]);
    assert!(!d.has_matches());
}

#[test]
fn three_word_run_detected_up_to_frame_three() {
    let reference = "alpha beta gamma delta epsilon";
    let sample = "zeta beta gamma delta eta";
    for f in [2, 3] {
        let d = detect_matches(reference, sample, f).unwrap();
        assert_eq!(
            covered_words(&d.sample_tokens, &d.sample_mask),
            vec!["beta", "gamma", "delta"],
            "F={f}"
        );
    }
    let d = detect_matches(reference, sample, 4).unwrap();
    assert!(!d.has_matches());
    assert_eq!(d.reference_mask.len(), 5);
    assert_eq!(d.sample_mask.len(), 5);
}

#[test]
fn coverage_shrinks_as_frame_size_grows() {
    let reference = "a b c d e f g h i j";
    let sample = "a b x c d e y f g h i";
    let mut previous: Option<Detection> = None;
    for f in 1..=5 {
        let d = detect_matches(reference, sample, f).unwrap();
        if let Some(prev) = &previous {
            for (now, before) in d.sample_mask.iter().zip(&prev.sample_mask) {
                assert!(!now || *before, "F={f} covered a position F-1 did not");
            }
        }
        previous = Some(d);
    }
}

// ============================================================
// Degenerate input and errors
// ============================================================

#[test]
fn zero_frame_size_is_error_not_empty_result() {
    assert_eq!(
        detect_matches("a", "a", 0).unwrap_err(),
        DetectError::InvalidFrameSize(0)
    );
}

#[test]
fn empty_reference_or_sample() {
    let d = detect_matches("", "some sample words", 1).unwrap();
    assert!(d.reference_mask.is_empty());
    assert_eq!(d.sample_mask, vec![false; 3]);

    let d = detect_matches("some reference words", "", 1).unwrap();
    assert_eq!(d.reference_mask, vec![false; 3]);
    assert!(d.sample_mask.is_empty());
}

#[test]
fn separator_only_documents_never_match() {
    let d = detect_matches(" -- \n ", " -- \n ", 1).unwrap();
    assert_eq!(d.reference_mask, vec![false]);
    assert_eq!(d.sample_mask, vec![false]);
}

#[test]
fn out_of_vocabulary_words_break_runs() {
    // "and" / "or" are unknown to the reference, so the sample never holds
    // the reference's full run.
    let d = detect_matches("bread butter jam", "bread and butter or jam", 2).unwrap();
    assert!(!d.has_matches());
}

#[test]
fn mask_lengths_always_match_tokens() {
    let texts = ["", " ", "one", "one two", "a-b-c d—e", "\n\nx\n"];
    for reference in texts {
        for sample in texts {
            for f in 1..=3 {
                let d = detect_matches(reference, sample, f).unwrap();
                assert_eq!(d.reference_mask.len(), d.reference_tokens.len());
                assert_eq!(d.sample_mask.len(), d.sample_tokens.len());
                assert_eq!(detokenize(&d.reference_tokens), reference);
                assert_eq!(detokenize(&d.sample_tokens), sample);
            }
        }
    }
}

// ============================================================
// Backends and determinism
// ============================================================

#[test]
fn backends_produce_identical_detections() {
    let reference = "We hold these truths to be self-evident, that all men are created equal.";
    let sample = "They said that all men are created equal, and these truths to be self-evident.";
    let rolling = create_matcher(MatcherBackend::Rolling).unwrap();
    let expected = detect_matches_with(reference, sample, 3, rolling.as_ref()).unwrap();

    #[cfg(feature = "parallel")]
    {
        let parallel = create_matcher(MatcherBackend::Parallel).unwrap();
        let got = detect_matches_with(reference, sample, 3, parallel.as_ref()).unwrap();
        assert_eq!(got, expected);
    }

    assert_eq!(
        matched_passages(&expected.sample_tokens, &expected.sample_mask),
        vec!["that all men are created equal,", "these truths to be self-evident."]
    );
}

#[test]
fn concurrent_detections_are_independent() {
    let pairs = [
        ("one two three four", "two three four five"),
        ("the cat sat on the mat", "a cat sat on a mat"),
        ("x y z", "x y z"),
    ];
    let expected: Vec<Detection> = pairs
        .iter()
        .map(|(r, s)| detect_matches(r, s, 2).unwrap())
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = pairs
            .iter()
            .map(|(r, s)| scope.spawn(move || detect_matches(r, s, 2).unwrap()))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}

#[test]
fn detection_serializes_to_json() {
    let d = detect_matches("The fog of San Francisco", "Hedgehog and the Fog", 2).unwrap();
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["frame_size"], 2);
    assert_eq!(json["sample_mask"], serde_json::json!([false, false, true, true]));
    assert_eq!(json["reference_tokens"][1]["text"], "fog ");
    let back: Detection = serde_json::from_value(json).unwrap();
    assert_eq!(back, d);
}

// ============================================================
// Rendering and reports
// ============================================================

#[test]
fn curly_quotes_are_normalized_before_matching() {
    let reference = normalize_punctuation("she didn’t say “goodbye” at all");
    let sample = normalize_punctuation("She didn't say \"goodbye\" at all.");
    let d = detect_matches(&reference, &sample, 6).unwrap();
    assert!(d.sample_mask.iter().all(|&b| b));
}

#[test]
fn rendered_texts_keep_surface_text() {
    let reference = "Line one.\n\nThe shared words appear here.\n";
    let sample = "Intro:   the shared words appear   there.";
    let d = detect_matches(reference, sample, 4).unwrap();
    let open = Marker::text("[", "]");
    let quote = Marker::text("{", "}");
    assert_eq!(
        render_reference(&d, &open),
        "Line one.\n\n[The shared words appear ]here.\n"
    );
    assert_eq!(
        render_sample(&d, &open, &quote, true),
        "Intro:   [the shared words appear   ]there."
    );
}

#[test]
fn report_written_to_disk() {
    let d = detect_matches("to be or not to be", "whether to be or not", 3).unwrap();
    let summary = CoverageSummary::from_detection(&d);
    let path = std::env::temp_dir()
        .join("copycheck-test")
        .join("report.md");
    let path = path.to_string_lossy().to_string();

    let written = generate_report(&d, &summary, true, &path).unwrap();
    let content = std::fs::read_to_string(&written).unwrap();
    assert!(content.contains("## Matched Passages"));
    assert!(content.contains("1. \"to be or not\""));
    assert!(content.contains("whether <mark>to be or not</mark>"));
}
