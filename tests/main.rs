use argbind::{parse, parse_tokens, CoerceError, Config, Destination, FieldType, ParseError, Record};
use assert_matches::assert_matches;
use rstest::rstest;

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Pair {
    x: i32,
    y: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Switches {
    a: bool,
    b: bool,
    c: bool,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Tiny {
    n: i8,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Unsigned {
    n: u32,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Text {
    n: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Renamed {
    #[argbind(rename = "v")]
    verbose: bool,
    r#type: String,
    #[argbind(rename = "max-depth")]
    max_depth: std::primitive::u16,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Clash {
    first: u8,
    #[argbind(rename = "first")]
    second: u8,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Wide {
    name: String,
    enabled: bool,
    a: i8,
    b: i16,
    c: i32,
    d: i64,
    e: isize,
    f: u8,
    g: u16,
    h: u32,
    i: u64,
    j: usize,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Unit;

#[test]
fn builder_compiles() {
    Destination::new().build().unwrap();
}

#[test]
fn long_flags() {
    let pair = Pair::from_tokens(&["--x=5", "--y=hello"], &Config::default()).unwrap();
    assert_eq!(
        pair,
        Pair {
            x: 5,
            y: "hello".to_string(),
        }
    );
}

#[rstest]
#[case(vec!["--x", "5", "--y", "hello"])]
#[case(vec!["--y", "hello", "--x", "5"])]
#[case(vec!["--y=hello", "--x", "5", "--z"])]
#[case(vec!["junk", "--x=5", "-q", "--y=hello"])]
fn long_flag_forms(#[case] tokens: Vec<&str>) {
    let pair = Pair::from_tokens(tokens.as_slice(), &Config::default()).unwrap();
    assert_eq!(pair.x, 5);
    assert_eq!(pair.y, "hello");
}

#[test]
fn trailing_valueless_flag() {
    // bool
    let switches = Switches::from_tokens(&["--a"], &Config::default()).unwrap();
    assert!(!switches.a);

    // String
    let text = Text::from_tokens(&["--n"], &Config::default()).unwrap();
    assert_eq!(text.n, "");

    // numeric
    let error = Tiny::from_tokens(&["--n"], &Config::default()).unwrap_err();
    assert_matches!(
        error,
        ParseError::Field {
            source: CoerceError::MalformedLiteral { .. },
            ..
        }
    );
}

#[test]
fn short_cluster() {
    let switches = Switches::from_tokens(&["-abc"], &Config::default()).unwrap();
    assert_eq!(
        switches,
        Switches {
            a: true,
            b: true,
            c: true,
        }
    );

    let switches = Switches::from_tokens(&["-c", "--a=TRUE"], &Config::default()).unwrap();
    assert_eq!(
        switches,
        Switches {
            a: true,
            b: false,
            c: true,
        }
    );
}

#[test]
fn overflow() {
    let error = Tiny::from_tokens(&["--n=300"], &Config::default()).unwrap_err();
    assert_eq!(
        error,
        ParseError::Field {
            name: "n".to_string(),
            source: CoerceError::Overflow {
                token: "300".to_string(),
                field_type: FieldType::I8,
            },
        }
    );
}

#[test]
fn underflow() {
    let error = Unsigned::from_tokens(&["--n=-5"], &Config::default()).unwrap_err();
    assert_eq!(
        error,
        ParseError::Field {
            name: "n".to_string(),
            source: CoerceError::Underflow {
                token: "-5".to_string(),
                field_type: FieldType::U32,
            },
        }
    );
}

#[test]
fn string_accepts_any_text() {
    let text = Text::from_tokens(&["--n=3.14"], &Config::default()).unwrap();
    assert_eq!(text.n, "3.14");
}

#[test]
fn later_occurrence_wins() {
    let pair = Pair::from_tokens(&["--x=1", "--y=a", "--x=2"], &Config::default()).unwrap();
    assert_eq!(pair.x, 2);
}

#[test]
fn renamed() {
    let renamed = Renamed::from_tokens(
        &["-v", "--type", "kind", "--max-depth=7"],
        &Config::default(),
    )
    .unwrap();
    assert_eq!(
        renamed,
        Renamed {
            verbose: true,
            r#type: "kind".to_string(),
            max_depth: 7,
        }
    );
    assert_eq!(
        renamed.canonical_tokens(),
        vec!["--v=true", "--type=kind", "--max-depth=7"]
    );
}

#[test]
fn invalid_destination() {
    // The binding table is checked before any token is considered.
    let mut clash = Clash::default();
    let error = parse_tokens(&mut clash, &["--first=1"], &Config::default()).unwrap_err();
    assert_eq!(
        error,
        ParseError::InvalidDestination("Cannot duplicate the field 'first'.".to_string())
    );
    assert_eq!(clash, Clash::default());

    let error = parse(&mut clash, &Config::default()).unwrap_err();
    assert_matches!(error, ParseError::InvalidDestination(_));
}

#[test]
fn unit_record() {
    Unit::from_tokens(&["--anything=1", "-xyz"], &Config::default()).unwrap();
    assert!(Unit.canonical_tokens().is_empty());
}

#[test]
fn fail_fast() {
    let mut wide = Wide::default();
    let error = parse_tokens(
        &mut wide,
        &[
            "--name=abc", "--enabled", "true", "--a=1", "--b=2", "--c=x", "--d=4",
        ],
        &Config::default(),
    )
    .unwrap_err();
    assert_matches!(error, ParseError::Field { name, .. } if name == "c");
    assert_eq!(wide.name, "abc");
    assert!(wide.enabled);
    assert_eq!(wide.a, 1);
    assert_eq!(wide.b, 2);
    assert_eq!(wide.c, 0);
    assert_eq!(wide.d, 0);
}

#[rstest]
#[case(vec!["--name=", "--a=-128", "--b=-32768", "--c=-2147483648", "--d=-9223372036854775808"])]
#[case(vec!["--name=x=y", "--enabled=True", "--a=127", "--b=32767", "--c=2147483647", "--d=9223372036854775807"])]
#[case(vec!["--name", "spaced out", "--a", "0", "--b", "0", "--c", "0", "--d", "0"])]
fn round_trip(#[case] tokens: Vec<&str>) {
    // Setup
    let mut tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    tokens.extend(
        ["--e=-5", "--f=255", "--g=65535", "--h=4294967295", "--i=18446744073709551615", "--j=0"]
            .iter()
            .map(|t| t.to_string()),
    );

    // Execute
    let wide = Wide::from_tokens(tokens.as_slice(), &Config::default()).unwrap();
    let canonical = wide.canonical_tokens();
    let again = Wide::from_tokens(canonical.as_slice(), &Config::default()).unwrap();

    // Verify
    assert_eq!(again, wide);
    assert_eq!(again.canonical_tokens(), canonical);
}

#[derive(Debug, Default, PartialEq, Record)]
struct Greeting {
    name: String,
    count: u8,
    #[argbind(rename = "v")]
    verbose: bool,
    ratio: f32,
}

#[test]
fn greeting_invocation() {
    let greeting = Greeting::from_tokens(
        &["--name", "world", "--count=2", "-v", "--ratio", "0"],
        &Config::default(),
    )
    .unwrap();
    assert_eq!(
        greeting,
        Greeting {
            name: "world".to_string(),
            count: 2,
            verbose: true,
            ratio: 0.0,
        }
    );

    // An absent numeric flag is malformed, even when every other flag binds.
    let error = Greeting::from_tokens(
        &["--name", "world", "--count=2", "-v"],
        &Config::default(),
    )
    .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Parse error for field 'ratio': cannot parse '' as f32."
    );
}
