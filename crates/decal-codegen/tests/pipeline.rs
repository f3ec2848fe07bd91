//! End-to-end pipeline tests: a serialized design export in, generated
//! code for both notations out.

use decal_codegen::{CodeGenerator, ComposeGenerator, SequentialIds, XmlGenerator};
use decal_core::DesignNode;

const LOGIN_SCREEN: &str = include_str!("fixtures/login_screen.json");

fn login_screen() -> DesignNode {
    serde_json::from_str(LOGIN_SCREEN).unwrap()
}

#[test]
fn fixture_deserializes_into_the_expected_tree() {
    let screen = login_screen();
    assert_eq!(screen.name, "Login Screen");
    assert_eq!(screen.count(), 7);
    assert_eq!(screen.depth(), 3);
    assert_eq!(screen.background_color(), Some("#f5f5f5"));
}

#[test]
fn xml_layout_for_the_login_screen() {
    let screen = login_screen();
    let mut generator = XmlGenerator::with_ids(SequentialIds::new());
    let xml = generator.generate_tree(&screen);

    assert!(xml.starts_with("<LinearLayout"));
    assert!(xml.contains("xmlns:android=\"http://schemas.android.com/apk/res/android\""));
    assert!(xml.contains("android:layout_width=\"match_parent\""));
    assert!(xml.contains("android:orientation=\"vertical\""));
    assert!(xml.contains("android:background=\"@color/gray_50\""));

    // the empty logo frame collapses into an advisory comment
    assert!(xml.contains(
        "<!-- No children were exported for \"Logo\". Convert the layer to a component to make its contents inspectable. -->"
    ));

    assert!(xml.contains("android:text=\"Welcome back\""));
    assert!(xml.contains("android:orientation=\"horizontal\""));
    assert!(xml.contains("android:background=\"@color/white\""));
    assert!(xml.contains("android:clipToOutline=\"true\""));

    // instances keep their structure in XML, flagged by a comment
    assert!(xml.contains("<!-- Component: Primary Button -->"));
    assert!(xml.contains("android:text=\"Sign in\""));

    assert!(xml.ends_with("</LinearLayout>"));
    let opened = xml.matches("<LinearLayout").count();
    let closed = xml.matches("</LinearLayout>").count();
    assert_eq!(opened, closed);
    assert_eq!(opened, 3);
}

#[test]
fn compose_code_for_the_login_screen() {
    let screen = login_screen();
    let mut generator = ComposeGenerator::new();
    let code = generator.generate_tree(&screen);

    assert!(code.starts_with("Column("));
    assert!(code.contains(".fillMaxSize()"));
    assert!(code.contains(".background(colorResource(id = R.color.gray_50))"));

    assert!(code.contains(
        "// No children were exported for \"Logo\". Convert the layer to a component to make its contents inspectable."
    ));

    assert!(code.contains("Text(text = \"Welcome back\")"));
    assert!(code.contains("Row("));
    assert!(code.contains(".clip(RoundedCornerShape(8.dp))"));
    assert!(code.contains(".background(colorResource(id = R.color.white))"));

    // instances become calls to their component, children included by the callee
    assert!(code.contains("PrimaryButton()"));
    assert!(!code.contains("Sign in"));

    assert!(code.ends_with("}"));
}

#[test]
fn component_wrapper_names_itself_after_the_root() {
    let screen = login_screen();
    let code = ComposeGenerator::new().compose_component(&screen);
    assert!(code.starts_with("@Composable\nfun LoginScreen() {"));
    assert!(code.ends_with("\n}"));
}

#[test]
fn snippets_carry_their_notation() {
    let screen = login_screen();

    let mut xml = XmlGenerator::with_ids(SequentialIds::new());
    let snippet = xml.snippet_for_tree(&screen);
    assert_eq!(snippet.notation.label(), "xml");
    assert!(snippet.text.starts_with("<LinearLayout"));

    let mut compose = ComposeGenerator::new();
    let snippet = compose.snippet_for_tree(&screen);
    assert_eq!(snippet.notation.label(), "kotlin");
    assert!(snippet.text.starts_with("Column("));
}

#[test]
fn single_style_generation_from_the_fixture_root() {
    let screen = login_screen();
    let mut generator = XmlGenerator::with_ids(SequentialIds::new());
    let xml = generator.generate_style(&screen.style);

    assert!(xml.starts_with("<LinearLayout"));
    assert!(xml.contains("android:orientation=\"vertical\""));
    assert!(xml.contains("android:gravity=\"center_horizontal\""));
    assert!(xml.contains("android:padding=\"24dp\""));
}
