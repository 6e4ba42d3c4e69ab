/// FlagSet tests: registration, command line scanning, the no-argument
/// default protocol, typed retrieval, and the shared command line set.
mod flag_set {
    use std::error::Error;

    use pennant::set::FlagSet;
    use pennant::spec::flag::error::{FlagMissingArgError, FlagTypeError, UnknownFlagError};
    use pennant::value::count;
    use pennant::value::count::Counter;
    use pennant::value::Value;

    /// Minimal argument-requiring value used to exercise the paths a count
    /// flag never takes.
    #[derive(Default)]
    struct LabelValue {
        text: String,
    }

    impl Value for LabelValue {
        fn set(&mut self, token: &str) -> Result<(), Box<dyn Error>> {
            self.text = token.to_owned();
            Ok(())
        }

        fn render(&self) -> String {
            self.text.clone()
        }

        fn type_tag(&self) -> &'static str {
            "label"
        }
    }

    #[test]
    fn repeated_shorthand_accumulates() {
        let mut flags = FlagSet::new("test");
        flags.count_p("verbose", 'v', "increase output verbosity");

        flags.parse(["-v", "-v", "-v"]).expect("parse");
        assert_eq!(flags.get_count("verbose").expect("get"), 3);
    }

    #[test]
    fn inline_value_overwrites() {
        let mut flags = FlagSet::new("test");
        flags.count_p("verbose", 'v', "increase output verbosity");

        flags.parse(["-v=10"]).expect("parse");
        assert_eq!(flags.get_count("verbose").expect("get"), 10);
    }

    #[test]
    fn long_form_matches_the_same_registration() {
        let mut flags = FlagSet::new("test");
        flags.count_p("verbose", 'v', "increase output verbosity");

        flags
            .parse(["--verbose", "-v", "--verbose=0x10", "--verbose"])
            .expect("parse");
        assert_eq!(flags.get_count("verbose").expect("get"), 17);
    }

    #[test]
    fn absent_flag_retrieves_as_zero() {
        let mut flags = FlagSet::new("test");
        flags.count_p("verbose", 'v', "increase output verbosity");

        flags.parse(["positional"]).expect("parse");
        assert_eq!(flags.get_count("verbose").expect("get"), 0);
        assert!(!flags.lookup("verbose").expect("registered").changed());
    }

    #[test]
    fn caller_supplied_storage_is_shared() {
        let counter = Counter::new(0);
        let mut flags = FlagSet::new("test");
        flags.count_var_p(&counter, "verbose", 'v', "increase output verbosity");

        flags.parse(["-v", "-v"]).expect("parse");

        assert_eq!(counter.get(), 2);
        assert_eq!(flags.get_count("verbose").expect("get"), 2);
        assert!(flags.lookup("verbose").expect("registered").changed());
    }

    #[test]
    fn unknown_flag_fails_parsing() {
        let mut flags = FlagSet::new("test");
        flags.count_p("verbose", 'v', "increase output verbosity");

        let err = flags.parse(["--loud"]).expect_err("must fail");
        assert!(err.downcast_ref::<UnknownFlagError>().is_some(), "{}", err);
    }

    #[test]
    fn unknown_name_and_wrong_tag_are_distinct_errors() {
        let mut flags = FlagSet::new("test");
        flags.count_p("verbose", 'v', "increase output verbosity");

        let err = flags.get_count("loud").expect_err("unknown name");
        assert!(err.downcast_ref::<UnknownFlagError>().is_some(), "{}", err);

        let err = flags
            .get_typed("verbose", "label", |text| -> Result<String, Box<dyn Error>> {
                Ok(text.to_owned())
            })
            .expect_err("wrong tag");
        let mismatch = err.downcast_ref::<FlagTypeError>().expect("FlagTypeError");
        assert_eq!(mismatch.expected, "label");
        assert_eq!(mismatch.actual, "count");
    }

    #[test]
    fn argument_requiring_flag_consumes_the_next_token() {
        let mut flags = FlagSet::new("test");
        flags.var(Box::new(LabelValue::default()), "label", Some('l'), "attach a label");

        flags.parse(["--label", "hello"]).expect("parse");

        let label = flags
            .get_typed("label", "label", |text| -> Result<String, Box<dyn Error>> {
                Ok(text.to_owned())
            })
            .expect("get");
        assert_eq!(label, "hello");
    }

    #[test]
    fn argument_requiring_flag_without_argument_fails() {
        let mut flags = FlagSet::new("test");
        flags.var(Box::new(LabelValue::default()), "label", Some('l'), "attach a label");
        flags.count_p("verbose", 'v', "increase output verbosity");

        let err = flags.parse(["--label"]).expect_err("must fail");
        assert!(err.downcast_ref::<FlagMissingArgError>().is_some(), "{}", err);

        // a following flag token is never consumed as an argument
        let err = flags.parse(["-l", "-v"]).expect_err("must fail");
        assert!(err.downcast_ref::<FlagMissingArgError>().is_some(), "{}", err);
    }

    #[test]
    fn double_dash_ends_flag_scanning() {
        let mut flags = FlagSet::new("test");
        flags.count_p("verbose", 'v', "increase output verbosity");

        flags.parse(["-v", "--", "-v", "input.txt"]).expect("parse");

        assert_eq!(flags.get_count("verbose").expect("get"), 1);
        assert_eq!(flags.args(), ["-v", "input.txt"]);
    }

    #[test]
    fn flag_usages_lists_registrations_sorted() {
        let mut flags = FlagSet::new("test");
        flags.count_p("verbose", 'v', "increase output verbosity");
        flags.count("attempts", "number of retry attempts");

        let usages = flags.flag_usages();
        let lines: Vec<&str> = usages.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("--attempts"));
        assert!(lines[1].contains("-v, --verbose"));
        assert!(lines[1].ends_with("increase output verbosity"));
    }

    #[test]
    #[should_panic(expected = "redefined")]
    fn redefining_a_flag_panics() {
        let mut flags = FlagSet::new("test");
        flags.count("verbose", "increase output verbosity");
        flags.count("verbose", "defined twice");
    }

    #[test]
    fn command_line_set_forwards_free_functions() {
        let trace = count::count_p("ghost-trace", 'g', "increase trace level");
        count::count_var(&Counter::new(0), "ghost-depth", "recursion depth");

        pennant::set::command_line()
            .parse(["-g", "-g", "--ghost-depth=4"])
            .expect("parse");

        assert_eq!(trace.get(), 2);
        assert_eq!(count::get_count("ghost-trace").expect("get"), 2);
        assert_eq!(count::get_count("ghost-depth").expect("get"), 4);
    }
}
