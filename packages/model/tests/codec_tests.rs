//! Codec round trips over realistic template trees

use msgtpl_model::{
    decode_template, encode_template, BlockType, IfThenElse, Template,
};

fn nested_template() -> Template {
    let mut greeting = IfThenElse::new("n1", BlockType::Main, " Thanks!");
    greeting.condition = "{{company}}".to_string();
    greeting.then = "How is \"{{company}}\" doing?".to_string();
    greeting.otherwise = "How are you?\n".to_string();

    let mut nested_if = IfThenElse::new("n2", BlockType::If, "");
    nested_if.condition = "{{position}}".to_string();
    nested_if.then = "yes".to_string();

    let mut nested_then = IfThenElse::new("n3", BlockType::Then, " ok");
    nested_then.otherwise = "ünïcödé".to_string();
    nested_then.children.push(IfThenElse::new("n4", BlockType::Else, "deep"));

    greeting.children = vec![nested_if, nested_then];

    Template {
        main: "Hi {{firstname}},\n".to_string(),
        children: vec![greeting, IfThenElse::new("n5", BlockType::Main, "Bye")],
    }
}

#[test]
fn test_round_trip_nested_template() {
    let template = nested_template();
    let encoded = encode_template(&template);
    assert_eq!(decode_template(&encoded), template);
}

#[test]
fn test_round_trip_default_and_empty() {
    for template in [Template::default(), Template::empty()] {
        assert_eq!(decode_template(&encode_template(&template)), template);
    }
}

#[test]
fn test_decodes_template_written_by_browser_editor() {
    let raw = r#"{"main":"Hello ","children":[{"id":"lq2x9abcd","parent":"main","if":"x","then":"T","else":"E","optional":"!","children":[{"id":"lq2xaefgh","parent":"if","if":"","then":"","else":"","optional":"","children":[]}]}]}"#;

    let template = decode_template(raw);
    assert_eq!(template.main, "Hello ");
    assert_eq!(template.children[0].condition, "x");
    assert_eq!(template.children[0].children[0].parent, BlockType::If);
    assert_eq!(encode_template(&template), raw);
}
