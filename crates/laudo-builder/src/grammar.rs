//! Portuguese list joining and shared clause fragments.

use laudo_core::Measurement;

/// `["a", "b", "c"]` becomes `"a, b e c"`; two items become `"a e b"`.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} e {}", head.join(", "), last.as_ref())
        }
    }
}

/// Replace only the last `", "` with `" e "`: `"a, b, c"` becomes `"a, b e c"`.
pub fn and_before_last(text: &str) -> String {
    match text.rsplit_once(", ") {
        Some((head, last)) => format!("{head} e {last}"),
        None => text.to_string(),
    }
}

/// `" medindo N mm"`, or nothing when the size was not measured.
pub fn size_suffix(size: Option<&Measurement>) -> String {
    size.map(|m| format!(" medindo {m} mm")).unwrap_or_default()
}

/// `", medindo N mm<tail>"` for single measurements appended to a status.
pub(crate) fn measured(value: Option<&Measurement>, tail: &str) -> String {
    value.map(|m| format!(", medindo {m} mm{tail}")).unwrap_or_default()
}
