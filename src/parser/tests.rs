#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Value;
#[cfg(test)]
use crate::lexer::tokenize;

fn parse_ok(input: &str) -> Document {
    parse(input).expect("Failed to parse document")
}

#[test]
fn test_simple_key_value() {
    let doc = parse_ok("\n# person:\nname = Matthew\nage = 54\n");
    assert_eq!(doc.get("person.name"), Some(Value::from("Matthew")));
    assert_eq!(doc.get("person.age"), Some(Value::Integer(54)));
}

#[test]
fn test_nested_header_path() {
    let doc = parse_ok("# person.address:\ncity = Fayetteville\nstate = NY\n");
    assert_eq!(doc.get("person.address.city"), Some(Value::from("Fayetteville")));
    assert_eq!(doc.get("person.address.state"), Some(Value::from("NY")));
}

#[test]
fn test_root_section_and_implicit_root() {
    let doc = parse_ok("top = 1\n\n#:\nname = ADF\nversion = 0.1\n");
    assert_eq!(doc.get("top"), Some(Value::Integer(1)));
    assert_eq!(doc.get("name"), Some(Value::from("ADF")));
    assert_eq!(doc.get("version"), Some(Value::Float(0.1)));
}

#[test]
fn test_repeated_headers_augment() {
    let doc = parse_ok("# c:\nname = MyApp\n\n# c:\nversion = 1.0\n");
    let mut expected = crate::ast::Object::new();
    expected.insert("name".into(), Value::from("MyApp"));
    expected.insert("version".into(), Value::Float(1.0));
    assert_eq!(doc.get("c"), Some(Value::Object(expected)));
}

#[test]
fn test_later_sections_override_field_by_field() {
    let input = r#"
# server:
host = localhost
port = 80
tls.enabled = false
tls.cert = a.pem

# server:
port = 8080
tls.enabled = true
"#;
    let doc = parse_ok(input);
    assert_eq!(doc.get("server.host"), Some(Value::from("localhost")));
    assert_eq!(doc.get("server.port"), Some(Value::Integer(8080)));
    assert_eq!(doc.get("server.tls.enabled"), Some(Value::Boolean(true)));
    assert_eq!(doc.get("server.tls.cert"), Some(Value::from("a.pem")));
}

#[test]
fn test_arrays_replace_rather_than_concatenate() {
    let doc = parse_ok("# tags:\na\nb\n\n# tags:\nc\n");
    assert_eq!(doc.get("tags"), Some(Value::Array(vec![Value::from("c")])));
}

#[test]
fn test_scalar_array() {
    let doc = parse_ok("# hobbies:\nreading\nphysics\n");
    assert_eq!(
        doc.get("hobbies"),
        Some(Value::Array(vec![Value::from("reading"), Value::from("physics")]))
    );
}

#[test]
fn test_scalar_array_infers_types() {
    let doc = parse_ok("# mixed:\n1\n2.5\nTRUE\nword\n\nlast\n");
    assert_eq!(
        doc.get("mixed"),
        Some(Value::Array(vec![
            Value::Integer(1),
            Value::Float(2.5),
            Value::Boolean(true),
            Value::from("word"),
            Value::from("last"),
        ]))
    );
}

#[test]
fn test_object_array() {
    let doc = parse_ok("# users:\n\nname = Alice\nage = 22\n\nname = Bob\nage = 30\n");
    let users = doc.get("users").expect("users present");
    let users = users.as_array().expect("users is an array");
    assert_eq!(users.len(), 2);

    let alice = users[0].as_object().expect("object");
    assert_eq!(alice.get("name"), Some(&Value::from("Alice")));
    assert_eq!(alice.get("age"), Some(&Value::Integer(22)));
    let bob = users[1].as_object().expect("object");
    assert_eq!(bob.get("name"), Some(&Value::from("Bob")));
    assert_eq!(bob.get("age"), Some(&Value::Integer(30)));
}

#[test]
fn test_object_array_with_multiline_member() {
    let input = "# posts:\ntitle = One\nbody = \"\"\"\nfirst\n\nsecond\n\"\"\"\n\ntitle = Two\n";
    let doc = parse_ok(input);
    let posts = doc.get("posts").expect("posts");
    let posts = posts.as_array().expect("array");
    assert_eq!(posts.len(), 2);
    assert_eq!(
        posts[0].as_object().and_then(|o| o.get("body")),
        Some(&Value::from("first\n\nsecond"))
    );
    assert_eq!(posts[1].as_object().and_then(|o| o.get("title")), Some(&Value::from("Two")));
}

#[test]
fn test_section_shape_classification() {
    let shape = |s: &str| SectionShape::classify(&tokenize(s));
    assert_eq!(shape("\n\n"), SectionShape::Empty);
    assert_eq!(shape("a\nb"), SectionShape::ScalarArray);
    assert_eq!(shape("a = 1\nb = 2\n\n"), SectionShape::Object);
    assert_eq!(shape("\na = 1\n\nb = 2"), SectionShape::ObjectArray);
    // A blank line before the first pair is not a separator.
    assert_eq!(shape("\n\na = 1\nb = 2"), SectionShape::Object);
}

#[test]
fn test_multiline_value() {
    let input = "# article:\nbody = \"\"\"\nThis is line one.\nThis is line two.\n\"\"\"\n";
    let doc = parse_ok(input);
    assert_eq!(
        doc.get("article.body"),
        Some(Value::from("This is line one.\nThis is line two."))
    );
}

#[test]
fn test_multiline_preserves_blank_lines_quotes_and_is_never_inferred() {
    let input = "#:\nquote = \"\"\"He said \"hi\"\n\n  indented\n\"\"\"\nnumber = \"\"\"\n42\n\"\"\"\n";
    let doc = parse_ok(input);
    assert_eq!(doc.get("quote"), Some(Value::from("He said \"hi\"\n\n  indented")));
    assert_eq!(doc.get("number"), Some(Value::from("42")));
}

#[test]
fn test_multiline_shared_closing_line() {
    let doc = parse_ok("#:\npoem = \"\"\"roses\nviolets\"\"\"\nafter = yes\n");
    assert_eq!(doc.get("poem"), Some(Value::from("roses\nviolets")));
    assert_eq!(doc.get("after"), Some(Value::from("yes")));
}

#[test]
fn test_unterminated_multiline_collects_to_end() {
    let doc = parse_ok("#:\nbody = \"\"\"\nline one\n# still: content\n");
    assert_eq!(doc.get("body"), Some(Value::from("line one\n# still: content")));
}

#[test]
fn test_type_inference() {
    let input = "#:\ncount = 42\nnegative = -10\npi = 3.14159\nenabled = true\ndisabled = False\nname = Matthew\n";
    let doc = parse_ok(input);
    assert_eq!(doc.get("count"), Some(Value::Integer(42)));
    assert_eq!(doc.get("negative"), Some(Value::Integer(-10)));
    assert_eq!(doc.get("pi"), Some(Value::Float(3.14159)));
    assert_eq!(doc.get("enabled"), Some(Value::Boolean(true)));
    assert_eq!(doc.get("disabled"), Some(Value::Boolean(false)));
    assert_eq!(doc.get("name"), Some(Value::from("Matthew")));
}

#[test]
fn test_quoted_values_are_inferred() {
    let doc = parse_ok("# a:\nv = \"42\"\nf = \"true\"\nlabel = \"a = b\"\nversion = \"1.0.0\"\n");
    assert_eq!(doc.get("a.v"), Some(Value::Integer(42)));
    assert_eq!(doc.get("a.f"), Some(Value::Boolean(true)));
    assert_eq!(doc.get("a.label"), Some(Value::from("a = b")));
    assert_eq!(doc.get("a.version"), Some(Value::from("1.0.0")));

    let raw = parse_with_options("#:\nv = \"42\"\n", ParseOptions::without_inference()).expect("parse");
    assert_eq!(raw.get("v"), Some(Value::from("42")));
}

#[test]
fn test_disabled_inference_keeps_trimmed_text() {
    let input = "#:\ncount = 42\nenabled = true\n\n# list:\n  3.5  \nTRUE\n";
    let doc = parse_with_options(input, ParseOptions::without_inference()).expect("parse");
    assert_eq!(doc.get("count"), Some(Value::from("42")));
    assert_eq!(doc.get("enabled"), Some(Value::from("true")));
    assert_eq!(
        doc.get("list"),
        Some(Value::Array(vec![Value::from("3.5"), Value::from("TRUE")]))
    );
}

#[test]
fn test_dotted_keys_nest() {
    let doc = parse_ok("# server:\nhost.primary = localhost\nhost.backup = backup.example.com\n");
    assert_eq!(doc.get("server.host.primary"), Some(Value::from("localhost")));
    assert_eq!(doc.get("server.host.backup"), Some(Value::from("backup.example.com")));
}

#[test]
fn test_quoted_keys_keep_their_dots() {
    let doc = parse_ok("# hosts:\n\"eu.west\" = 10.0.0.1\n");
    assert_eq!(doc.keys("hosts"), Some(vec!["eu.west".to_string()]));
    assert_eq!(doc.get("hosts.\"eu.west\""), Some(Value::from("10.0.0.1")));
}

#[test]
fn test_constraints_are_stripped_from_values() {
    let doc = parse_ok("# limits:\nmax = 10 (range 1..100)\n");
    assert_eq!(doc.get("limits.max"), Some(Value::Integer(10)));
}

#[test]
fn test_relative_sections_are_separate() {
    let doc = parse_ok("upgrade.stats:\nstrength = 12\n");
    let mut stats = crate::ast::Object::new();
    stats.insert("strength".into(), Value::Integer(12));
    let mut upgrade = crate::ast::Object::new();
    upgrade.insert("stats".into(), Value::Object(stats));
    let mut expected = crate::ast::Object::new();
    expected.insert("upgrade".into(), Value::Object(upgrade));

    assert_eq!(doc.relative_sections_copy(), Value::Object(expected));
    assert_eq!(doc.get_or("upgrade", Value::Null), Value::Null);
    assert_eq!(doc.len(), 0);
}

#[test]
fn test_relative_sections_accumulate() {
    let doc = parse_ok("weapon:\ndamage = 5\n\nweapon:\nweight = 2\n\nweapon.tags:\nsharp\n");
    assert_eq!(doc.get_relative("weapon.damage"), Some(Value::Integer(5)));
    assert_eq!(doc.get_relative("weapon.weight"), Some(Value::Integer(2)));
    assert_eq!(
        doc.get_relative("weapon.tags"),
        Some(Value::Array(vec![Value::from("sharp")]))
    );
}

#[test]
fn test_empty_and_blank_documents() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("\n\n   \n").is_empty());
    assert!(parse_ok("# empty:\n\n").is_empty());
}

#[test]
fn test_bare_lines_before_any_header_are_dropped() {
    let doc = parse_ok("just some text\n# a:\nx = 1\n");
    assert_eq!(doc.keys(""), Some(vec!["a".to_string()]));
}

#[test]
fn test_strict_mode_parses_like_lenient() {
    let input = "# a:\nx = 1\nstray line\n";
    let strict = parse_with_options(input, ParseOptions::strict()).expect("strict parse");
    let lenient = parse(input).expect("lenient parse");
    assert_eq!(strict, lenient);
}

#[test]
fn test_parse_mode_from_str() {
    assert_eq!("Strict".parse::<ParseMode>(), Ok(ParseMode::Strict));
    assert_eq!(" lenient ".parse::<ParseMode>(), Ok(ParseMode::Lenient));
    assert!("loose".parse::<ParseMode>().is_err());
    assert_eq!(ParseMode::Strict.to_string(), "strict");
}

#[test]
fn test_parse_tokens_directly() {
    let tokens = tokenize("# a:\nx = 1\n");
    let doc = Parser::default().parse_tokens(&tokens).expect("parse tokens");
    assert_eq!(doc.get("a.x"), Some(Value::Integer(1)));
}

#[test]
fn test_documents_from_separate_parses_are_independent() {
    let parser = Parser::default();
    let mut first = parser.parse("# a:\nx = 1").expect("parse");
    let second = parser.parse("# a:\nx = 1").expect("parse");
    first.set("a.x", Value::Integer(2));
    assert_eq!(second.get("a.x"), Some(Value::Integer(1)));
}

#[test]
fn test_parse_file_missing_is_file_error() {
    let err = parse_file("/definitely/not/here.adf").expect_err("missing file");
    assert!(matches!(err, crate::AdfError::FileError { .. }));
}
