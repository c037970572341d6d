//! Property-based tests for console_print using proptest

use console_print::prelude::*;
use console_print::{extract_config, is_config_shape, CONFIG_KEYS};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Log),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
    ]
}

fn any_environment() -> impl Strategy<Value = Environment> {
    prop_oneof![
        Just(Environment::Development),
        Just(Environment::Production),
        Just(Environment::Staging),
        Just(Environment::NoFilter),
    ]
}

fn any_color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Default),
        Just(Color::Blue),
        Just(Color::Green),
        Just(Color::Red),
        Just(Color::Yellow),
        Just(Color::Cyan),
        Just(Color::Magenta),
    ]
}

fn memory_print(ambient: Option<&str>) -> (Arc<MemoryConsole>, Print) {
    let console = Arc::new(MemoryConsole::new());
    let builder = Print::builder().console(console.clone());
    let print = match ambient {
        Some(ambient) => builder.ambient_environment(ambient),
        None => builder.without_ambient_environment(),
    }
    .build();
    (console, print)
}

// ============================================================================
// Enum Parsing Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let upper: LogLevel = level.to_str().parse().unwrap();
        let lower: LogLevel = level.as_str().parse().unwrap();
        prop_assert_eq!(upper, level);
        prop_assert_eq!(lower, level);
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Test that Environment parsing accepts its own display form in any case
    #[test]
    fn test_environment_roundtrip(env in any_environment(), upper in any::<bool>()) {
        let text = if upper {
            env.to_string().to_uppercase()
        } else {
            env.to_string()
        };
        let parsed: Environment = text.parse().unwrap();
        prop_assert_eq!(parsed, env);
    }

    /// Test that Color parsing tolerates surrounding whitespace
    #[test]
    fn test_color_roundtrip(color in any_color(), pad in " {0,3}") {
        let text = format!("{}{}{}", pad, color, pad);
        let parsed: Color = text.parse().unwrap();
        prop_assert_eq!(parsed, color);
    }

    /// Test that unknown level names are rejected
    #[test]
    fn test_unknown_level_rejected(name in "[a-z]{1,12}") {
        let known = ["log", "warn", "warning", "error", "info", "debug"];
        prop_assume!(!known.contains(&name.as_str()));
        prop_assert!(name.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Configuration Extraction Tests
// ============================================================================

proptest! {
    /// Test that a trailing non-config value is kept as a message
    #[test]
    fn test_extract_keeps_plain_messages(messages in prop::collection::vec("[a-zA-Z0-9 ]{0,16}", 0..8)) {
        let args: Vec<Argument> = messages.iter().map(|m| Argument::from(m.as_str())).collect();
        let (extracted, config) = extract_config(args);

        let expected: Vec<Value> = messages.iter().map(|m| json!(m)).collect();
        prop_assert_eq!(extracted, expected);
        prop_assert!(config.environment.is_none());
        prop_assert!(config.log_level.is_none());
    }

    /// Test that a trailing object with a recognized key is split off
    #[test]
    fn test_extract_splits_recognized_object(
        messages in prop::collection::vec("[a-z]{1,8}", 0..6),
        level in any_level(),
        with_options in any::<bool>(),
    ) {
        let mut trailing = json!({ "logLevel": level.as_str() });
        if with_options {
            trailing["options"] = json!({ "showType": true });
        }
        prop_assert!(is_config_shape(&trailing));

        let mut args: Vec<Argument> = messages.iter().map(|m| Argument::from(m.as_str())).collect();
        args.push(Argument::from(trailing));
        let (extracted, config) = extract_config(args);

        prop_assert_eq!(extracted.len(), messages.len());
        prop_assert_eq!(config.log_level, Some(level));
        prop_assert_eq!(config.options.show_type, with_options.then_some(true));
    }

    /// Test that objects without a recognized key are never config
    #[test]
    fn test_unrecognized_object_is_message(key in "[a-z]{1,10}", value in any::<i64>()) {
        prop_assume!(!CONFIG_KEYS.contains(&key.as_str()));
        let object = json!({ key.clone(): value });
        prop_assert!(!is_config_shape(&object));

        let (extracted, _) = extract_config(vec![Argument::from(object.clone())]);
        prop_assert_eq!(extracted, vec![object]);
    }
}

// ============================================================================
// Suppression Tests
// ============================================================================

proptest! {
    /// Test that a mismatched environment produces no output on any method
    #[test]
    fn test_environment_mismatch_is_silent(
        env in prop_oneof![
            Just(Environment::Development),
            Just(Environment::Production),
            Just(Environment::Staging),
        ],
        ambient in "[a-z]{1,12}",
        message in ".{0,20}",
    ) {
        prop_assume!(ambient != env.as_str());
        let (console, print) = memory_print(Some(&ambient));
        let config = PrintConfig::new().environment(env);

        print.log(args![message.as_str(), config.clone()]);
        print.warn(args![message.as_str(), config.clone()]);
        print.error(args![message.as_str(), config.clone()]);
        print.info(args![message.as_str(), config.clone()]);
        print.debug(args![message.as_str(), config]);

        prop_assert!(console.is_empty());
        prop_assert_eq!(print.metrics().suppressed_by_environment(), 5);
    }

    /// Test that a rejecting condition produces no output
    #[test]
    fn test_false_condition_is_silent(messages in prop::collection::vec(".{0,10}", 0..5)) {
        let (console, print) = memory_print(None);
        let mut args: Vec<Argument> = messages.iter().map(|m| Argument::from(m.as_str())).collect();
        args.push(Argument::from(FormatOptions::new().condition(|_| false)));

        print.info(args);
        prop_assert!(console.is_empty());
    }

    /// Test that every unsuppressed call reaches exactly one channel
    #[test]
    fn test_one_record_per_call(level in any_level(), count in 1usize..10) {
        let (console, print) = memory_print(None);
        for _ in 0..count {
            print.call(args!["x", PrintConfig::new().log_level(level)]);
        }

        let expected = level.channel().unwrap_or(Channel::Log);
        prop_assert_eq!(console.records_on(expected).len(), count);
        prop_assert_eq!(print.metrics().printed(), count as u64);
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

proptest! {
    /// Test that styles end with exactly one separator before the color
    #[test]
    fn test_style_string_single_separator(styles in "[a-z: -]{0,24}", color in any_color()) {
        let resolved = FormatOptions::new()
            .styles(styles.clone())
            .color(color)
            .resolve(Color::Default);
        let style = resolved.style_string();

        prop_assert!(!style.contains(";;"));
        if !styles.is_empty() {
            let expected_head = format!("{};", styles);
            prop_assert!(style.starts_with(&expected_head));
        }
        if color == Color::Default {
            prop_assert!(!style.contains("color:"));
        } else {
            let expected_tail = format!("color: {};", color);
            prop_assert!(style.ends_with(&expected_tail));
        }
    }

    /// Test that caller info is built from arbitrary paths without panicking
    #[test]
    fn test_caller_info_from_any_path(
        file in prop::option::of(".{0,40}"),
        line in prop::option::of(any::<u32>()),
        function in prop::option::of("[a-z_:]{0,20}"),
    ) {
        let info = CallerInfo::from_parts(file.as_deref(), line, None, function.as_deref());

        prop_assert!(!info.file_name.is_empty());
        prop_assert!(!info.file_name.contains('/'));
        prop_assert!(!info.file_name.contains('\\'));
        prop_assert_eq!(info.line_number, line.unwrap_or(0));
        prop_assert_eq!(info.prefix(), format!("[{}:{}]", info.file_name, info.line_number));
    }

    /// Test that messages of any JSON shape survive printing unchanged
    #[test]
    fn test_messages_pass_through(n in any::<i64>(), flag in any::<bool>(), text in ".{0,16}") {
        let (console, print) = memory_print(None);
        print.log(args![n, flag, text.as_str()]);

        let record = console.last().unwrap();
        prop_assert_eq!(record.messages, vec![json!(n), json!(flag), json!(text)]);
    }
}
