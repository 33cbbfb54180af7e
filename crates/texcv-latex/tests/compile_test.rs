//! End-to-end tests for compile(): document writing, passes, logs and cleanup
//!
//! The compiler is a shell script from texcv-testkit, so these run on unix only.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use texcv_core::TexcvError;
use texcv_core::render::RenderedDocument;
use texcv_latex::{CompileOptions, compile};
use texcv_testkit::{FakeCompiler, recorded_passes, temp_dir_in_workspace, write_fake_compiler};

fn document(language: &str) -> RenderedDocument {
    RenderedDocument {
        language: language.to_string(),
        source: "\\documentclass{article}\n\\begin{document}\nHi\n\\end{document}\n".to_string(),
    }
}

fn options(program: &Path, support_files: Vec<PathBuf>) -> CompileOptions {
    CompileOptions {
        program: program.to_str().unwrap().to_string(),
        args: vec!["-interaction=nonstopmode".to_string()],
        passes: 2,
        support_files,
        keep_intermediates: false,
    }
}

#[test]
fn test_compile_success_runs_every_pass() {
    let temp = temp_dir_in_workspace();
    let compiler = write_fake_compiler(temp.path(), "fake-latex", FakeCompiler::Succeeds);
    let out = temp.path().join("output");

    let result = compile(&document("en"), &out, &options(&compiler, Vec::new())).unwrap();

    assert!(result.success());
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.passes, 2);
    assert_eq!(result.artifact, Some(out.join("cv-en.pdf")));
    assert_eq!(result.log_path, Some(out.join("cv-en.log")));
    assert!(result.log_text.contains("This is FakeTeX, processing cv-en.tex"));
    assert_eq!(
        recorded_passes(&out),
        vec![
            "-interaction=nonstopmode cv-en.tex",
            "-interaction=nonstopmode cv-en.tex"
        ]
    );

    let tex = fs::read_to_string(out.join("cv-en.tex")).unwrap();
    assert_eq!(tex, document("en").source);
}

#[test]
fn test_compile_success_removes_intermediates() {
    let temp = temp_dir_in_workspace();
    let compiler = write_fake_compiler(temp.path(), "fake-latex", FakeCompiler::Succeeds);
    let support = temp.path().join("awesome-cv.cls");
    fs::write(&support, "% class").unwrap();
    let out = temp.path().join("output");

    compile(&document("en"), &out, &options(&compiler, vec![support.clone()])).unwrap();

    assert!(!out.join("cv-en.aux").exists());
    assert!(!out.join("awesome-cv.cls").exists());
    assert!(out.join("cv-en.log").exists());
    assert!(out.join("cv-en.tex").exists());
    assert!(out.join("cv-en.pdf").exists());
    assert!(support.exists(), "source support file must survive cleanup");
}

#[test]
fn test_compile_keep_intermediates() {
    let temp = temp_dir_in_workspace();
    let compiler = write_fake_compiler(temp.path(), "fake-latex", FakeCompiler::Succeeds);
    let support = temp.path().join("awesome-cv.cls");
    fs::write(&support, "% class").unwrap();
    let out = temp.path().join("output");

    let mut opts = options(&compiler, vec![support]);
    opts.keep_intermediates = true;
    compile(&document("en"), &out, &opts).unwrap();

    assert!(out.join("cv-en.aux").exists());
    assert_eq!(fs::read_to_string(out.join("awesome-cv.cls")).unwrap(), "% class");
}

#[test]
fn test_compile_failure_stops_after_first_pass() {
    let temp = temp_dir_in_workspace();
    let compiler = write_fake_compiler(temp.path(), "fake-latex", FakeCompiler::FailsWithLog);
    let out = temp.path().join("output");

    let result = compile(&document("it"), &out, &options(&compiler, Vec::new())).unwrap();

    assert!(!result.success());
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.passes, 1);
    assert_eq!(result.artifact, None);
    assert_eq!(recorded_passes(&out).len(), 1);
    assert_eq!(
        result.log_text,
        "This is FakeTeX, processing cv-it.tex\n! Undefined control sequence.\nl.12 \\badmacro\n"
    );
}

#[test]
fn test_compile_failure_without_log_uses_captured_output() {
    let temp = temp_dir_in_workspace();
    let compiler = write_fake_compiler(temp.path(), "fake-latex", FakeCompiler::FailsWithoutLog);
    let out = temp.path().join("output");

    let result = compile(&document("en"), &out, &options(&compiler, Vec::new())).unwrap();

    assert_eq!(result.exit_code, 2);
    assert_eq!(result.log_path, None);
    assert_eq!(
        result.log_text,
        "fatal: cannot open format\nfatal: giving up\n"
    );
}

#[test]
fn test_compile_zero_exit_without_pdf_is_not_success() {
    let temp = temp_dir_in_workspace();
    let compiler = write_fake_compiler(temp.path(), "fake-latex", FakeCompiler::NoOutput);
    let out = temp.path().join("output");

    let result = compile(&document("en"), &out, &options(&compiler, Vec::new())).unwrap();

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.artifact, None);
    assert!(!result.success());
}

#[test]
fn test_compile_missing_compiler_writes_nothing() {
    let temp = temp_dir_in_workspace();
    let out = temp.path().join("output");
    let opts = CompileOptions {
        program: "texcv-no-such-compiler-xyz".to_string(),
        args: Vec::new(),
        passes: 2,
        support_files: Vec::new(),
        keep_intermediates: false,
    };

    let err = compile(&document("en"), &out, &opts).unwrap_err();

    assert!(matches!(err, TexcvError::CompilerNotFound { .. }));
    assert!(!out.exists());
}

#[test]
fn test_failure_after_success_does_not_report_previous_log() {
    let temp = temp_dir_in_workspace();
    let good = write_fake_compiler(temp.path(), "good-latex", FakeCompiler::Succeeds);
    let broken = write_fake_compiler(temp.path(), "broken-latex", FakeCompiler::FailsWithoutLog);
    let out = temp.path().join("output");

    let first = compile(&document("en"), &out, &options(&good, Vec::new())).unwrap();
    assert!(first.success());

    let second = compile(&document("en"), &out, &options(&broken, Vec::new())).unwrap();

    assert_eq!(second.exit_code, 2);
    assert_eq!(second.log_path, None);
    assert_eq!(second.log_text, "fatal: cannot open format\nfatal: giving up\n");
    assert_eq!(second.artifact, None);
    assert!(!out.join("cv-en.log").exists());
    assert!(!out.join("cv-en.pdf").exists());
}

#[test]
fn test_zero_exit_after_success_does_not_reuse_previous_pdf() {
    let temp = temp_dir_in_workspace();
    let good = write_fake_compiler(temp.path(), "good-latex", FakeCompiler::Succeeds);
    let silent = write_fake_compiler(temp.path(), "silent-latex", FakeCompiler::NoOutput);
    let out = temp.path().join("output");

    compile(&document("en"), &out, &options(&good, Vec::new())).unwrap();
    assert!(out.join("cv-en.pdf").exists());

    let result = compile(&document("en"), &out, &options(&silent, Vec::new())).unwrap();

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.artifact, None);
    assert!(!result.success());
    assert!(!out.join("cv-en.pdf").exists());
}
