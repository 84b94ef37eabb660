// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_tagged_content(size: usize) -> String {
    let base = "Worked on <strong>population ecology</strong> using <code>R</code> and \
                <em>hierarchical</em> models, cutting run time by <strong>90%</strong>. ";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_plain_content(size: usize) -> String {
    "Plain biography sentence without any markup at all. ".repeat(size)
}

#[allow(dead_code)]
pub fn generate_unclosed_content(size: usize) -> String {
    "<strong><em><code>never closed ".repeat(size)
}
