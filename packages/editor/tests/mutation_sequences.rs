//! Tests for longer mutation sequences
//!
//! This tests:
//! - Insert followed by delete restores the original text
//! - Building a template the way a user would, then previewing it
//! - Text conservation across chains of deletes
//! - Replaying serialized mutations

use msgtpl_editor::{Branch, Caret, Document, FieldRef, Mutation, Template};
use msgtpl_model::IDGenerator;

fn new_doc(main: &str) -> Document {
    Document::from_template(Template::new(main))
        .with_id_generator(IDGenerator::from_seed("seq".to_string()))
}

/// Every text field in the tree, concatenated in pre-order
fn all_text(doc: &Document) -> String {
    let template = doc.template();
    let mut out = template.main.clone();
    for node in template.nodes() {
        for branch in Branch::ALL {
            out.push_str(node.text(branch));
        }
    }
    out
}

#[test]
fn test_insert_then_delete_restores_text_everywhere() {
    let mut doc = new_doc("Hello world");
    let root_block = doc.insert_conditional(&FieldRef::Main.at(6)).unwrap();
    assert_eq!(doc.template().main, "Hello ");

    doc.update_field(FieldRef::node(&root_block, Branch::Then), "before after").unwrap();
    let snapshot = doc.template().clone();

    let cases = [
        FieldRef::Main.at(3),
        FieldRef::node(&root_block, Branch::Then).at(6),
        FieldRef::node(&root_block, Branch::Optional).at(2),
    ];

    for caret in cases {
        let id = doc.insert_conditional(&caret).unwrap();
        assert_ne!(doc.template(), &snapshot, "insert at {} changed nothing", caret);

        doc.delete_conditional(&id).unwrap();
        assert_eq!(doc.template(), &snapshot, "insert+delete at {} was lossy", caret);
    }

    doc.delete_conditional(&root_block).unwrap();
    assert_eq!(doc.template().main, "Hello world");
}

#[test]
fn test_build_and_preview_greeting() {
    let mut doc = new_doc("Hi {{firstname}}, how are things?");

    // "Hi {{firstname}}," | " how are things?"
    let block = doc.insert_conditional(&FieldRef::Main.at(17)).unwrap();
    doc.update_field(FieldRef::node(&block, Branch::If), "{{company}}").unwrap();
    doc.update_field(FieldRef::node(&block, Branch::Then), " how is ").unwrap();
    let after = doc
        .insert_variable(&FieldRef::node(&block, Branch::Then).at(8), "company")
        .unwrap();
    doc.insert_text(after, "?").unwrap();
    doc.update_field(FieldRef::node(&block, Branch::Else), "").unwrap();
    doc.update_field(FieldRef::node(&block, Branch::Optional), "").unwrap();

    let names = vec!["firstname".to_string(), "company".to_string()];
    let mut preview = msgtpl_editor::MessagePreview::new(doc.template().clone(), names);
    preview.set_value("firstname", "Ada");

    preview.set_value("company", "Acme");
    assert_eq!(preview.message(), "Hi Ada, how is Acme?");

    preview.set_value("company", "");
    assert_eq!(preview.message(), "Hi Ada,");
}

#[test]
fn test_delete_chain_conserves_optional_text() {
    let mut doc = new_doc("abcdef");

    // Split main into a chain of sibling blocks: "a" + blocks carrying b..f
    let first = doc.insert_conditional(&FieldRef::Main.at(1)).unwrap();
    let mut current = first.clone();
    let mut ids = vec![first];
    for _ in 0..4 {
        current = doc
            .insert_conditional(&FieldRef::node(&current, Branch::Optional).at(1))
            .unwrap();
        ids.push(current.clone());
    }

    let optionals: Vec<&str> = doc
        .template()
        .children
        .iter()
        .map(|c| c.optional.as_str())
        .collect();
    assert_eq!(optionals, vec!["b", "c", "d", "e", "f"]);
    assert_eq!(all_text(&doc), "abcdef");

    // Delete from the middle outwards; text must never change
    for id in [&ids[2], &ids[0], &ids[4], &ids[1], &ids[3]] {
        doc.delete_conditional(id).unwrap();
        assert_eq!(all_text(&doc), "abcdef");
    }

    assert!(doc.template().children.is_empty());
    assert_eq!(doc.template().main, "abcdef");
}

#[test]
fn test_replay_serialized_mutations() {
    let mutations = vec![
        Mutation::InsertConditional {
            at: Caret::new(FieldRef::Main, 5),
            node_id: "m-1".to_string(),
        },
        Mutation::UpdateField {
            field: FieldRef::node("m-1", Branch::If),
            content: "{{position}}".to_string(),
        },
        Mutation::InsertConditional {
            at: FieldRef::node("m-1", Branch::If).at(0),
            node_id: "m-2".to_string(),
        },
        Mutation::InsertText {
            at: FieldRef::node("m-2", Branch::Then).at(0),
            text: "nested".to_string(),
        },
    ];

    let json = serde_json::to_string(&mutations).unwrap();
    let replayed: Vec<Mutation> = serde_json::from_str(&json).unwrap();

    let mut doc = new_doc("Dear friend");
    for mutation in replayed {
        doc.apply(mutation).unwrap();
    }

    assert_eq!(doc.version, 4);
    assert_eq!(doc.template().main, "Dear ");

    let outer = doc.find("m-1").unwrap();
    assert_eq!(outer.optional, "friend");
    assert_eq!(outer.condition, "");
    assert_eq!(outer.children[0].id, "m-2");
    assert_eq!(outer.children[0].optional, "{{position}}");
    assert_eq!(outer.children[0].then, "nested");
}
