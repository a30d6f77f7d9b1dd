// crates/generate_banner_line/tests/banner_properties.rs

use extract_banner_content::extract_banner_content;
use generate_banner_line::{generate_content_line, generate_splitter_line};
use rand::Rng;

const COMMENT_STRS: [&str; 6] = ["//", "#", "--", ";;", "(*", "%"];

/// Random label with no splitter or whitespace on its edges.
fn random_label<R: Rng>(rng: &mut R) -> String {
    let edge: Vec<char> = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    let inner: Vec<char> = "abcxyz ABC-=*#_.:0123".chars().collect();
    let len = rng.gen_range(1..20);
    (0..len)
        .map(|i| {
            if i == 0 || i == len - 1 {
                edge[rng.gen_range(0..edge.len())]
            } else {
                inner[rng.gen_range(0..inner.len())]
            }
        })
        .collect()
}

#[test]
fn content_line_has_exact_width_when_it_fits() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let comment_str = COMMENT_STRS[rng.gen_range(0..COMMENT_STRS.len())];
        let label = random_label(&mut rng);
        let min_width = comment_str.chars().count() + 1 + label.chars().count() + 2;
        let n_col = rng.gen_range(min_width..min_width + 100);

        let line = generate_content_line(comment_str, &label, n_col, '-');
        assert_eq!(line.chars().count(), n_col, "line {:?}", line);
    }
}

#[test]
fn splitter_line_has_exact_width_when_prefix_fits() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let comment_str = COMMENT_STRS[rng.gen_range(0..COMMENT_STRS.len())];
        let n_col = rng.gen_range(comment_str.chars().count() + 1..200);
        let line = generate_splitter_line(comment_str, n_col, '-');
        assert_eq!(line.chars().count(), n_col, "line {:?}", line);
    }
}

#[test]
fn extract_recovers_generated_label() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let comment_str = COMMENT_STRS[rng.gen_range(0..COMMENT_STRS.len())];
        let label = random_label(&mut rng);
        // Narrow widths included: the label must survive even with no filler.
        let n_col: usize = rng.gen_range(0..120);
        let split_char = ['-', '=', '*', '#'][rng.gen_range(0..4)];
        let used = comment_str.chars().count() + 1 + label.chars().count() + 2;
        if n_col.saturating_sub(used) == 1 {
            // A lone filler char ends up only on the right and is kept as text.
            continue;
        }

        let line = generate_content_line(comment_str, &label, n_col, split_char);
        assert_eq!(extract_banner_content(&line, comment_str), label, "line {:?}", line);
    }
}

#[test]
fn empty_content_degenerates_to_splitter() {
    for n_col in 0..100 {
        for comment_str in COMMENT_STRS {
            assert_eq!(
                generate_content_line(comment_str, "", n_col, '-'),
                generate_splitter_line(comment_str, n_col, '-')
            );
        }
    }
}

#[test]
fn long_content_never_panics() {
    let line = generate_content_line("//", "VeryLongTextExceedingWidth", 10, '-');
    assert!(line.contains("VeryLongTextExceedingWidth"));
}
