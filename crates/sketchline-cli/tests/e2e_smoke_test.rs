use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use sketchline_cli::{Args, run, run_with_trace};

/// Collects all .skl files from a directory
fn collect_skl_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("skl")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        continue_on_error: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_demos = collect_skl_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output should exist");
                assert!(svg.starts_with("<svg "), "{}", demo_path.display());
                assert!(svg.ends_with("</svg>"), "{}", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_demos = collect_skl_files(demos_path().join("errors"));

    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_error_demos_pass_with_continue_on_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_path().join("errors").join("missing_attribute.skl");
    let output = temp_dir.path().join("partial.svg");

    let mut args = args_for(&input, &output);
    args.continue_on_error = true;
    run(&args).expect("Failing lines should be skipped");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains(r#"<circle cx="10" cy="10" r="5" fill="red" />"#));
    assert!(!svg.contains("<rect"));
}

#[test]
fn e2e_shapes_demo_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("shapes.svg");

    run(&args_for(&demos_path().join("shapes.skl"), &output)).expect("Demo should compile");

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"600\">\n\
         <circle cx=\"10\" cy=\"20\" r=\"5\" fill=\"green\" />\n\
         <rect x=\"0\" y=\"0\" width=\"100\" height=\"50\" fill=\"black\" />\n\
         </svg>"
    );
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.skl");
    let output = temp_dir.path().join("absent.svg");

    let err = run(&args_for(&input, &output)).unwrap_err();

    assert!(matches!(err, sketchline::SketchError::Io(_)));
    assert!(!output.exists(), "output is not created when input is missing");
}

#[test]
fn e2e_uncreatable_output_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_path().join("shapes.skl");
    let output = temp_dir.path().join("missing_dir").join("shapes.svg");
    let mut trace = Vec::new();

    let err = run_with_trace(&args_for(&input, &output), &mut trace).unwrap_err();

    assert!(matches!(err, sketchline::SketchError::Io(_)));
    assert!(trace.is_empty(), "no line is processed before both files are open");
    assert!(!output.exists());
}

#[test]
fn e2e_trace_is_written_to_sink() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("shapes.svg");
    let mut trace = Vec::new();

    run_with_trace(&args_for(&demos_path().join("shapes.skl"), &output), &mut trace)
        .expect("Demo should compile");

    let trace = String::from_utf8(trace).unwrap();
    assert_eq!(trace.matches("<command>").count(), 2);
    assert!(trace.contains("├── shape: CIRCLE\n"));
}
