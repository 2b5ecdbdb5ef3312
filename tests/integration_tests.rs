use std::io::Write;

use alignstat::{
    align_all_pairs, align_pair, read_records_from_path, report, AlignError, PairIterator,
    PairStats, ScoringParams, Sequence, GAP,
};

fn params() -> ScoringParams {
    ScoringParams::new(1.0, -1.0, -1.0).unwrap()
}

fn strip_gaps(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|&b| b != GAP).collect()
}

/// True if `needle` appears in `hay` in order (not necessarily contiguous).
fn is_subsequence(needle: &[u8], hay: &[u8]) -> bool {
    let mut it = hay.iter();
    needle.iter().all(|b| it.any(|h| h == b))
}

#[test]
fn self_alignment_is_identity() {
    for seq in [&b"A"[..], b"ACGT", b"GATTACA", b"TTTTTTTT"] {
        let a = Sequence::new("S1", seq);
        let b = Sequence::new("S2", seq);
        let stats = align_pair(&a, &b, 1, 0, &params()).unwrap();
        assert_eq!(stats.aligned_a, seq);
        assert_eq!(stats.aligned_b, seq);
        assert_eq!(stats.common_run, seq);
    }
}

#[test]
fn aligned_lengths_always_equal() {
    let cases: [(&[u8], &[u8]); 4] = [
        (b"GATTACA", b"GCATGCT"),
        (b"A", b"TTTTTT"),
        (b"ACACAC", b"CACACA"),
        (b"AGGCT", b"AG"),
    ];
    for (sa, sb) in cases {
        let a = Sequence::new("A", sa);
        let b = Sequence::new("B", sb);
        let stats = align_pair(&a, &b, 1, 0, &params()).unwrap();
        assert_eq!(
            stats.aligned_a.len(),
            stats.aligned_b.len(),
            "{:?} vs {:?}",
            sa,
            sb
        );
    }
}

#[test]
fn gap_stripped_alignment_is_an_in_order_subsequence() {
    // Backtracing stops at the border, so the stripped alignment may cover
    // only a suffix of the original; it must still be in original order.
    let cases: [(&[u8], &[u8]); 3] = [
        (b"GATTACA", b"GCATGCT"),
        (b"AAGGTT", b"GGTT"),
        (b"ACGTACGT", b"TACG"),
    ];
    for (sa, sb) in cases {
        let a = Sequence::new("A", sa);
        let b = Sequence::new("B", sb);
        let stats = align_pair(&a, &b, 1, 0, &params()).unwrap();
        assert!(is_subsequence(&strip_gaps(&stats.aligned_a), sa));
        assert!(is_subsequence(&strip_gaps(&stats.aligned_b), sb));
    }
}

#[test]
fn tie_break_resolves_diagonal_first() {
    let a = Sequence::new("S1", *b"AC");
    let b = Sequence::new("S2", *b"AC");
    let stats = align_pair(&a, &b, 1, 0, &params()).unwrap();
    assert_eq!(stats.aligned_a, b"AC");
    assert_eq!(stats.aligned_b, b"AC");
    assert_eq!(stats.common_run, b"AC");
}

#[test]
fn single_symbol_pair_costs_five_comparisons() {
    let a = Sequence::new("S1", *b"A");
    let b = Sequence::new("S2", *b"A");
    // Holds under any scoring, not just the defaults.
    for p in [
        params(),
        ScoringParams::new(5.0, -3.0, -7.0).unwrap(),
        ScoringParams::new(0.5, 0.25, 0.125).unwrap(),
    ] {
        let stats = align_pair(&a, &b, 1, 0, &p).unwrap();
        assert_eq!(stats.comparisons, 5);
    }
}

#[test]
fn batch_enumerates_pairs_in_reference_order() {
    let seqs = vec![
        Sequence::new("S1", *b"ACGT"),
        Sequence::new("S2", *b"AGGT"),
        Sequence::new("S3", *b"ACGG"),
    ];
    let stats = align_all_pairs(&seqs, &params()).unwrap();
    let order: Vec<(&str, &str)> = stats
        .iter()
        .map(|s| (s.label_a.as_str(), s.label_b.as_str()))
        .collect();
    assert_eq!(order, vec![("S2", "S1"), ("S3", "S1"), ("S3", "S2")]);
}

#[test]
fn parallel_batch_matches_sequential_iterator() {
    let seqs = vec![
        Sequence::new("S1", *b"GATTACA"),
        Sequence::new("S2", *b"GCATGCT"),
        Sequence::new("S3", *b"ACGTACGT"),
        Sequence::new("S4", *b"TTAAGGCC"),
    ];
    let sequential: Vec<PairStats> = PairIterator::new(&seqs, params())
        .unwrap()
        .collect::<alignstat::Result<_>>()
        .unwrap();
    let batched = align_all_pairs(&seqs, &params()).unwrap();
    assert_eq!(sequential, batched);
}

#[test]
fn repeated_runs_produce_identical_output() {
    let seqs = vec![
        Sequence::new("S1", *b"GATTACA"),
        Sequence::new("S2", *b"GCATGCT"),
        Sequence::new("S3", *b"ACGTACGT"),
    ];

    let render = || {
        let stats = align_all_pairs(&seqs, &params()).unwrap();
        let mut text = Vec::new();
        report::write_report(&mut text, &stats).unwrap();
        let mut table = Vec::new();
        report::write_summary(&mut table, &stats).unwrap();
        (text, table)
    };

    assert_eq!(render(), render());
}

#[test]
fn empty_sequence_in_batch_is_rejected_up_front() {
    let seqs = vec![
        Sequence::new("S1", *b"ACGT"),
        Sequence::new("S2", *b""),
        Sequence::new("S3", *b"GGCC"),
    ];
    match align_all_pairs(&seqs, &params()) {
        Err(AlignError::EmptySequence { label }) => assert_eq!(label, "S2"),
        other => panic!("expected empty-sequence error, got {:?}", other),
    }
}

#[test]
fn reads_records_from_plain_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "S1 = ACGT").unwrap();
    writeln!(file, "S2 = TTGA").unwrap();
    file.flush().unwrap();

    let records = read_records_from_path(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], Sequence::new("S1", *b"ACGT"));
    assert_eq!(records[1], Sequence::new("S2", *b"TTGA"));
}

#[test]
fn reads_records_from_gzipped_file() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let file = tempfile::Builder::new().suffix(".gz").tempfile().unwrap();
    let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
    encoder.write_all(b"S1 = ACGT\nS2 = TTGA\n").unwrap();
    encoder.finish().unwrap();

    let records = read_records_from_path(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], Sequence::new("S2", *b"TTGA"));
}

#[test]
fn malformed_file_reports_offending_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "S1 = ACGT").unwrap();
    writeln!(file, "this line has no separator").unwrap();
    file.flush().unwrap();

    match read_records_from_path(file.path()) {
        Err(AlignError::MalformedRecord { line: 2, .. }) => {}
        other => panic!("expected malformed record at line 2, got {:?}", other),
    }
}

#[test]
fn end_to_end_report_and_summary() {
    let seqs = vec![
        Sequence::new("S1", *b"AC"),
        Sequence::new("S2", *b"AC"),
    ];
    let stats = align_all_pairs(&seqs, &params()).unwrap();
    assert_eq!(stats.len(), 1);

    let mut text = Vec::new();
    report::write_report(&mut text, &stats).unwrap();
    assert_eq!(
        String::from_utf8(text).unwrap(),
        "S2 = AC\n\
         S1 = AC\n\
         Aligned S2: AC\n\
         Aligned S1: AC\n\
         LCS: AC\n\
         Number of comparisons: 14\n\
         Average sequence length: 2\n\
         Number of comparisons / Average sequence length: 7\n\
         \n"
    );

    let mut table = Vec::new();
    report::write_summary(&mut table, &stats).unwrap();
    assert_eq!(
        String::from_utf8(table).unwrap(),
        "num_comparisons,num_bases,avg_seq_len,comp_per_seq_len,LCS\n\
         14,4,2,7,AC\n"
    );
}
