//! Small builders for the LaTeX macros the templates define
//!
//! Arguments passed in here are already escaped.

use std::fmt::Write;

/// `\cvsection{<heading>}`
pub(super) fn section_heading(out: &mut String, heading: &str) {
    let _ = writeln!(out, "\\cvsection{{{}}}", heading);
}

/// `\begin{<env>}` ... `\end{<env>}` around `body`
pub(super) fn environment(out: &mut String, env: &str, body: &str) {
    let _ = writeln!(out, "\\begin{{{}}}", env);
    out.push_str(body);
    let _ = writeln!(out, "\\end{{{}}}", env);
}

/// A macro call with one argument per line
///
/// ```text
/// \cventry
///   {arg1}
///   {arg2}
/// ```
pub(super) fn macro_call(out: &mut String, name: &str, args: &[&str]) {
    let _ = writeln!(out, "\\{}", name);
    for arg in args {
        if arg.contains('\n') {
            let _ = writeln!(out, "  {{\n{}  }}", indent(arg, 4));
        } else {
            let _ = writeln!(out, "  {{{}}}", arg);
        }
    }
}

/// `\begin{cvitems}` with one `\item` per entry; empty when `items` is empty
pub(super) fn item_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut body = String::new();
    for item in items {
        let _ = writeln!(body, "  \\item {{{}}}", item);
    }
    let mut out = String::new();
    environment(&mut out, "cvitems", &body);
    out
}

/// `\href{<url>}{<text>}`
pub(super) fn href(url: &str, text: &str) -> String {
    format!("\\href{{{}}}{{{}}}", url, text)
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("{}{}\n", pad, line)
            }
        })
        .collect()
}
