use polyrun_core::GeneratedJs;

const PROVENANCE_PREFIX: &str = "// polyrun source: ";

/// File contents for `js`: a provenance comment line, then the code verbatim.
///
/// A leading `#!` line stays first, with the provenance comment right after
/// it, since the runtime only accepts a hashbang at the very start of a file.
/// Line breaks in `provenance_id` become spaces so the comment cannot spill
/// into the program.
pub fn render_artifact(js: &GeneratedJs, provenance_id: &str) -> String {
    let provenance: String = provenance_id
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}') { ' ' } else { c })
        .collect();

    let code = js.as_str();
    let (hashbang, body) = split_hashbang(code);

    let mut out = String::with_capacity(PROVENANCE_PREFIX.len() + provenance.len() + code.len() + 2);
    if let Some(line) = hashbang {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(PROVENANCE_PREFIX);
    out.push_str(&provenance);
    out.push('\n');
    out.push_str(body);
    out
}

/// Split off a leading `#!` line, without its terminator
fn split_hashbang(code: &str) -> (Option<&str>, &str) {
    if !code.starts_with("#!") {
        return (None, code);
    }
    match code.find('\n') {
        Some(end) => (Some(code[..end].trim_end_matches('\r')), &code[end + 1..]),
        None => (Some(code), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provenance_is_first_line() {
        let js = GeneratedJs::new("console.log(1);\n").unwrap();
        let rendered = render_artifact(&js, "/src/a.py");
        assert_eq!(rendered, "// polyrun source: /src/a.py\nconsole.log(1);\n");
    }

    #[test]
    fn test_line_breaks_in_id_stay_on_one_line() {
        let js = GeneratedJs::new("f();").unwrap();
        let rendered = render_artifact(&js, "evil\nprocess.exit(9)\r\n");
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("// polyrun source: evil process.exit(9)  ")
        );
        assert_eq!(lines.next(), Some("f();"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_hashbang_stays_on_first_line() {
        let js = GeneratedJs::new("#!/usr/bin/env node\nconsole.log(1);\n").unwrap();
        let rendered = render_artifact(&js, "/bin/tool.js");
        assert_eq!(
            rendered,
            "#!/usr/bin/env node\n// polyrun source: /bin/tool.js\nconsole.log(1);\n"
        );
    }

    #[test]
    fn test_hashbang_only_source() {
        let js = GeneratedJs::new("#!/usr/bin/env node").unwrap();
        let rendered = render_artifact(&js, "a.js");
        assert_eq!(rendered, "#!/usr/bin/env node\n// polyrun source: a.js\n");
    }

    #[test]
    fn test_hash_later_in_file_is_untouched() {
        let js = GeneratedJs::new("f();\n#!not-a-hashbang\n").unwrap();
        let rendered = render_artifact(&js, "a.js");
        assert!(rendered.starts_with("// polyrun source: a.js\nf();"));
    }
}
