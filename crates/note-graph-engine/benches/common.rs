// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note_body(size: usize) -> String {
    let base = "# Weekly review\n\nSome thoughts on #work/planning, see [[Roadmap]] and [the docs](https://example.com/#intro).\n- [ ] follow up with `cargo bench` #todo\n\n```rust\nfn example() {\n    // #not-a-tag\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_malformed_body(size: usize) -> String {
    let base = "half a [link and a lone ` tick, ## double hash and ```unterminated\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_notes(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| {
            let title = format!("Note {i}");
            let body = format!(
                "Linked to [[Note {}]] and [[Note {}]] #topic/{}\n{}",
                (i + 1) % count,
                (i * 7) % count,
                i % 10,
                generate_note_body(3)
            );
            (title, body)
        })
        .collect()
}
