use super::*;

#[test]
fn blank_or_missing_properties_are_unavailable() {
    let vars = StyleVars::new().with("--empty", "   ").with("--bg", " 10, 20, 30 ");
    assert_eq!(vars.get_property("--missing"), None);
    assert_eq!(vars.get_property("--empty"), None);
    assert_eq!(vars.get_property("--bg"), Some("10, 20, 30"));
    assert_eq!(vars.resolve_color("--empty", 1.0), None);
}

#[test]
fn rgb_triples_take_the_requested_alpha() {
    let vars = StyleVars::new().with("--ids__accent-RGB", "255, 105, 105");
    let c = vars.resolve_color("--ids__accent-RGB", 0.7).unwrap();
    assert_eq!((c.r, c.g, c.b), (255, 105, 105));
    assert_eq!(c.a, 0.7);
    assert_eq!(c.to_css(), "rgba(255, 105, 105, 0.7)");
}

#[test]
fn hex_values_are_accepted() {
    let vars = StyleVars::new().with("--bg", "#0a141E");
    assert_eq!(vars.resolve_color("--bg", 1.0), Some(Rgba::rgb(10, 20, 30)));
}

#[test]
fn garbage_does_not_resolve() {
    let vars = StyleVars::new()
        .with("--a", "red")
        .with("--b", "1, 2")
        .with("--c", "#12345");
    for name in ["--a", "--b", "--c"] {
        assert_eq!(vars.resolve_color(name, 1.0), None, "{name}");
    }
}

#[test]
fn text_color_accepts_css_functions() {
    let vars = StyleVars::new().with("color", "rgba(1, 2, 3, 0.5)");
    assert_eq!(vars.text_color(), Some(Rgba::rgb(1, 2, 3).with_alpha(0.5)));
    let vars = StyleVars::new().with("color", "rgb(40, 50, 60)");
    assert_eq!(vars.text_color(), Some(Rgba::rgb(40, 50, 60)));
    assert_eq!(StyleVars::new().text_color(), None);
}

#[test]
fn deserializes_from_a_json_map() {
    let vars: StyleVars = serde_json::from_str(r#"{"--bg": "1, 2, 3"}"#).unwrap();
    assert_eq!(vars.len(), 1);
    assert_eq!(vars.resolve_color("--bg", 1.0), Some(Rgba::rgb(1, 2, 3)));
}
