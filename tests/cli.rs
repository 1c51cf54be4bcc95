/// Run the demo binary the way a user would and check what it prints and
/// how it exits.
mod cli {
    use std::ffi::OsStr;
    use std::process::{Command, Output};

    fn run<S: AsRef<OsStr>>(args: &[S]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_argument-parser"))
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("ARGUMENT_PARSER_DEBUG")
            .output()
            .expect("could not run argument-parser binary")
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }

    #[test]
    fn value_flag_with_equals() {
        let output = run(&["-o=hello"]);

        assert!(output.status.success());
        assert_eq!(stdout(&output), "output: hello\no=hello\n");
    }

    #[test]
    fn presence_flag_runs_callback_once() {
        let output = run(&["-v"]);

        assert!(output.status.success());
        assert_eq!(stdout(&output), "verbose\nv=true\n");
    }

    #[test]
    fn every_callback_shape() {
        let output = run(&[
            "-tags",
            "x",
            "-color=true",
            "--level",
            "warn",
            "-debug",
            "-dry-run",
            "input.txt",
        ]);

        assert!(output.status.success());
        assert_eq!(
            stdout(&output),
            "color: true\n\
             dry run: false\n\
             level: warn\n\
             tags: [\"x\"]\n\
             color=true\n\
             debug=true\n\
             dry-run=true\n\
             level=warn\n\
             tags=x\n\
             operands: input.txt\n"
        );
    }

    #[test]
    fn unknown_flag_exits_with_usage() {
        let output = run(&["-v", "-z"]);

        assert_eq!(output.status.code(), Some(2));
        assert_eq!(stdout(&output), "");

        let stderr = stderr(&output);
        assert!(stderr.contains("flag provided but not defined: -z"));
        assert!(stderr.contains("Usage of argument-parser:"));
        assert!(stderr.contains("  -v\tPrint more info"));
    }

    #[test]
    fn missing_value_exits_with_usage() {
        let output = run(&["-o"]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("flag needs an argument: -o"));
    }

    #[cfg(unix)]
    #[test]
    fn invalid_unicode_exits_with_usage() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let output = run(&[
            OsString::from("-v"),
            OsString::from_vec(vec![b'-', b'o', b'=', 0xff, 0xfe]),
        ]);

        assert_eq!(output.status.code(), Some(2));
        assert_eq!(stdout(&output), "");

        let stderr = stderr(&output);
        assert!(stderr.contains("invalid unicode in argument: -o="));
        assert!(stderr.contains("Usage of argument-parser:"));
        assert!(!stderr.contains("panicked"));
    }

    #[test]
    fn help_exits_cleanly() {
        let output = run(&["-h"]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "");

        let stderr = stderr(&output);
        assert!(stderr.starts_with("Usage of argument-parser:\n"));
        assert!(stderr.contains("(one of: debug, info, warn)"));
    }
}
