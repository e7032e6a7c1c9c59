//! Parameterised classification tests for `wstag-detector`, driven by i3-shaped
//! `get_tree` JSON.

use std::collections::BTreeSet;

use rstest::rstest;
use serde_json::json;
use wstag_core::{TagName, WindowNode, WindowProperties};
use wstag_detector::{Classifier, DetectError, WorkspaceWindowIndex};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn props(class: Option<&str>, role: Option<&str>) -> WindowProperties {
    WindowProperties {
        class: class.map(str::to_string),
        window_role: role.map(str::to_string),
        ..Default::default()
    }
}

fn tags(items: &[&str]) -> BTreeSet<TagName> {
    items.iter().copied().map(TagName::from).collect()
}

fn leaf(id: u64, class: &str) -> serde_json::Value {
    json!({
        "name": class,
        "window": id,
        "window_properties": { "class": class, "instance": class.to_lowercase() },
        "nodes": [],
        "floating_nodes": []
    })
}

fn i3_tree() -> WindowNode {
    let tree = json!({
        "name": "root",
        "window": null,
        "nodes": [
            {
                "name": "__i3",
                "window": null,
                "nodes": [
                    { "name": "content", "window": null, "nodes": [
                        { "name": "__i3_scratch", "num": -1, "window": null, "nodes": [] }
                    ]}
                ]
            },
            {
                "name": "eDP-1",
                "window": null,
                "nodes": [
                    { "name": "topdock", "window": null, "nodes": [leaf(90, "i3bar")] },
                    { "name": "content", "window": null, "nodes": [
                        { "name": "1", "num": 1, "window": null, "nodes": [
                            leaf(11, "firefox"),
                            { "name": null, "layout": "tabbed", "window": null, "nodes": [
                                leaf(12, "Thunderbird"),
                                { "name": null, "layout": "splitv", "window": null,
                                  "nodes": [leaf(13, "mpv")] }
                            ]}
                        ]},
                        { "name": "2 \u{f269}", "num": 2, "window": null, "nodes": [
                            { "name": "vim", "window": 21, "window_properties": {
                                "class": "Alacritty", "window_role": "browser"
                            }, "nodes": [] }
                        ]},
                        { "name": "3", "num": 3, "window": null, "nodes": [leaf(31, "Alacritty")],
                          "floating_nodes": [
                            { "name": null, "window": null, "nodes": [leaf(32, "qutebrowser")] }
                          ]}
                    ]}
                ]
            }
        ]
    });
    serde_json::from_value(tree).expect("tree parses")
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

#[rstest]
#[case(None, Some("browser"), &["web"])]
#[case(None, Some("BROWSER"), &["web"])]
#[case(None, Some("browser-popup"), &[])]
#[case(Some("firefox"), None, &["web"])]
#[case(Some("Firefox"), None, &["web"])]
#[case(Some("qutebrowser"), None, &["web"])]
#[case(Some("firefox-esr"), None, &[])]
#[case(Some("Thunderbird"), None, &["mail"])]
#[case(Some("org.mozilla.thunderbird"), None, &["mail"])]
#[case(Some("mpv"), None, &["film"])]
#[case(Some("gnome-mpv"), None, &["film"])]
#[case(Some("Alacritty"), None, &[])]
#[case(Some("firefox"), Some("browser"), &["web"])]
fn builtin_rule_table(
    #[case] class: Option<&str>,
    #[case] role: Option<&str>,
    #[case] expected: &[&str],
) {
    let got = Classifier::default().classify(&props(class, role));
    assert_eq!(got, tags(expected));
}

// ---------------------------------------------------------------------------
// Workspace aggregation
// ---------------------------------------------------------------------------

#[test]
fn classify_workspace_unions_all_windows() {
    let windows = vec![
        props(Some("firefox"), None),
        props(Some("thunderbird"), None),
        props(Some("Alacritty"), None),
    ];
    let got = Classifier::default().classify_workspace(&windows).expect("tags");
    assert_eq!(got, tags(&["mail", "web"]));
}

#[test]
fn classify_workspace_is_order_independent() {
    let mut windows = vec![
        props(Some("mpv"), None),
        props(None, Some("browser")),
        props(Some("thunderbird"), None),
        props(Some("xterm"), None),
    ];
    let classifier = Classifier::default();
    let expected = classifier.classify_workspace(&windows).expect("tags");
    for _ in 0..windows.len() {
        windows.rotate_left(1);
        assert_eq!(classifier.classify_workspace(&windows).expect("tags"), expected);
    }
    windows.reverse();
    assert_eq!(classifier.classify_workspace(&windows).expect("tags"), expected);
}

#[test]
fn classify_workspace_without_matches_fails() {
    let err = Classifier::default()
        .classify_workspace(&[props(Some("xterm"), None)])
        .unwrap_err();
    assert!(matches!(err, DetectError::NoTagsInferred { windows: 1 }));
}

// ---------------------------------------------------------------------------
// Tree index over i3 JSON
// ---------------------------------------------------------------------------

#[test]
fn index_maps_numbers_to_leaves() {
    let index = WorkspaceWindowIndex::build(&i3_tree());
    let nums: Vec<i32> = index.workspaces().collect();
    assert_eq!(nums, vec![-1, 1, 2, 3]);
    assert_eq!(index.get(1).expect("ws1").len(), 3);
    assert_eq!(index.get(-1).expect("scratch").len(), 0);
}

#[test]
fn dock_windows_are_not_indexed() {
    let index = WorkspaceWindowIndex::build(&i3_tree());
    let all: Vec<_> = index
        .workspaces()
        .flat_map(|n| index.get(n).unwrap_or_default().to_vec())
        .collect();
    assert!(all.iter().all(|p| p.class.as_deref() != Some("i3bar")));
}

#[rstest]
#[case(1, &["film", "mail", "web"])]
#[case(2, &["web"])]
#[case(3, &["web"])]
fn tree_to_tags(#[case] num: i32, #[case] expected: &[&str]) {
    let index = WorkspaceWindowIndex::build(&i3_tree());
    let got = Classifier::default()
        .classify_workspace(index.get(num).expect("workspace"))
        .expect("tags");
    assert_eq!(got, tags(expected));
}
