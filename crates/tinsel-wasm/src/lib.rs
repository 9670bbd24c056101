//! WASM bindings for the tinsel renderers.
//!
//! Exposes `renderTree()`, `renderFancyTree()`, `logTree()` and `version()`
//! to JavaScript via wasm-bindgen. Trees are built natively, serialized
//! without whitespace between elements, and written to the container's
//! `innerHTML`; the returned object references the live page nodes.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use tinsel_dom::{Dom, NodeId};
use tinsel_render::{AsciiOptions, FancyOptions, LogSink, RandomSource};
use tinsel_shapes::{TreeShape, TreeSize};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(line: &str);
}

/// Browser console sink.
struct Console;

impl LogSink for Console {
    fn write_line(&mut self, line: &str) {
        console_log(line);
    }
}

/// `Math.random()` as a sample source.
struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// `renderTree` options as passed from JavaScript.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TreeOptions {
    data: Option<Vec<String>>,
    class_name: Option<String>,
    wrapper_class: Option<String>,
}

impl From<TreeOptions> for AsciiOptions {
    fn from(opts: TreeOptions) -> Self {
        let defaults = AsciiOptions::default();
        AsciiOptions {
            data: opts.data.map(TreeShape::Custom).unwrap_or(defaults.data),
            class_name: opts
                .class_name
                .filter(|c| !c.is_empty())
                .unwrap_or(defaults.class_name),
            wrapper_class: opts
                .wrapper_class
                .filter(|c| !c.is_empty())
                .unwrap_or(defaults.wrapper_class),
        }
    }
}

/// `renderFancyTree` options as passed from JavaScript.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FancyTreeOptions {
    size: Option<String>,
}

impl From<FancyTreeOptions> for FancyOptions {
    fn from(opts: FancyTreeOptions) -> Self {
        FancyOptions {
            size: TreeSize::from_selector(opts.size.as_deref().unwrap_or_default()),
        }
    }
}

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn parse_options<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(js_err)
}

/// `null` means no container; `undefined` falls back to `document.body`.
fn resolve_container(container: JsValue) -> Result<Option<JsValue>, JsError> {
    if container.is_null() {
        return Ok(None);
    }
    if !container.is_undefined() {
        return Ok(Some(container));
    }
    let document = js_sys::Reflect::get(&js_sys::global(), &"document".into())
        .map_err(|_| JsError::new("Failed to read document"))?;
    if document.is_undefined() || document.is_null() {
        return Ok(None);
    }
    let body = js_sys::Reflect::get(&document, &"body".into())
        .map_err(|_| JsError::new("Failed to read document.body"))?;
    Ok((!body.is_null() && !body.is_undefined()).then_some(body))
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsError> {
    js_sys::Reflect::get(target, &key.into())
        .map_err(|_| JsError::new(&format!("Failed to read {key}")))
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), JsError> {
    js_sys::Reflect::set(target, &key.into(), value)
        .map_err(|_| JsError::new(&format!("Failed to set {key} property")))?;
    Ok(())
}

/// A scratch `body` the renderers mount into before serialization.
fn scratch() -> (Dom, NodeId) {
    let mut dom = Dom::new();
    let body = dom.create_element("body");
    (dom, body)
}

fn ascii_markup(options: &AsciiOptions) -> Result<String, JsError> {
    let (mut dom, body) = scratch();
    tinsel_render::render_tree(&mut dom, Some(body), options).map_err(js_err)?;
    dom.inner_html_compact(body).map_err(js_err)
}

fn fancy_markup(options: &FancyOptions, rng: &mut impl RandomSource) -> Result<String, JsError> {
    let (mut dom, body) = scratch();
    tinsel_render::render_fancy_tree(&mut dom, Some(body), options, rng).map_err(js_err)?;
    dom.inner_html_compact(body).map_err(js_err)
}

/// Render the ASCII tree into `container`.
///
/// Options: `{ data?: string[], className?: string, wrapperClass?: string }`.
/// Returns `{ wrapper, pre, starEl }`, or `null` when `container` is `null`.
#[wasm_bindgen(js_name = renderTree)]
pub fn render_tree(container: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let Some(container) = resolve_container(container)? else {
        return Ok(JsValue::NULL);
    };
    let options: AsciiOptions = parse_options::<TreeOptions>(options)?.into();

    set(&container, "innerHTML", &ascii_markup(&options)?.into())?;

    let wrapper = get(&container, "firstElementChild")?;
    let result = js_sys::Object::new();
    set(&result, "wrapper", &wrapper)?;
    set(&result, "pre", &get(&wrapper, "lastElementChild")?)?;
    set(&result, "starEl", &get(&wrapper, "firstElementChild")?)?;
    Ok(result.into())
}

/// Render the CSS tree into `container`.
///
/// Options: `{ size?: "small" | "large" }`. Returns `{ wrapper, star }`, or
/// `null` when `container` is `null`.
#[wasm_bindgen(js_name = renderFancyTree)]
pub fn render_fancy_tree(container: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let Some(container) = resolve_container(container)? else {
        return Ok(JsValue::NULL);
    };
    let options: FancyOptions = parse_options::<FancyTreeOptions>(options)?.into();

    set(
        &container,
        "innerHTML",
        &fancy_markup(&options, &mut MathRandom)?.into(),
    )?;

    let wrapper = get(&container, "firstElementChild")?;
    let result = js_sys::Object::new();
    set(&result, "wrapper", &wrapper)?;
    set(&result, "star", &get(&wrapper, "firstElementChild")?)?;
    Ok(result.into())
}

/// Print the rows of the selected shape to the browser console.
#[wasm_bindgen(js_name = logTree)]
pub fn log_tree(which: Option<String>) {
    tinsel_render::log_tree(which.as_deref().unwrap_or("small"), &mut Console);
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM): verify the markup the bindings mount
    // =========================================================================

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_default_tree_options() {
        let options: AsciiOptions = TreeOptions::default().into();
        assert_eq!(options, AsciiOptions::default());
    }

    #[test]
    fn test_tree_options_override() {
        let options: AsciiOptions = TreeOptions {
            data: Some(vec!["*".into(), "|".into()]),
            class_name: Some("mini".into()),
            wrapper_class: None,
        }
        .into();
        assert_eq!(options.data.rows(), vec!["*", "|"]);
        assert_eq!(options.class_name, "mini");
        assert_eq!(options.wrapper_class, "tree-wrapper");
    }

    #[test]
    fn test_empty_class_falls_back() {
        let options: AsciiOptions = TreeOptions {
            class_name: Some(String::new()),
            ..TreeOptions::default()
        }
        .into();
        assert_eq!(options.class_name, "ascii-tree");
    }

    #[test]
    fn test_fancy_size_selector() {
        let size = |s: Option<&str>| {
            FancyOptions::from(FancyTreeOptions {
                size: s.map(str::to_string),
            })
            .size
        };
        assert_eq!(size(Some("large")), TreeSize::Large);
        assert_eq!(size(Some("small")), TreeSize::Small);
        assert_eq!(size(Some("giant")), TreeSize::Small);
        assert_eq!(size(None), TreeSize::Small);
    }

    #[test]
    fn test_ascii_markup() {
        let html = ascii_markup(&AsciiOptions::default()).unwrap();
        assert!(html.starts_with(
            "<div class=\"tree-wrapper\"><div class=\"tree-star\">★</div><pre class=\"ascii-tree\">"
        ));
        assert!(html.contains("<pre class=\"ascii-tree\">"));
        assert_eq!(html.matches("class=\"light\"").count(), 17);
        assert_eq!(html.matches("class=\"trunk\"").count(), 4);
    }

    #[test]
    fn test_fancy_markup() {
        let options = FancyOptions {
            size: TreeSize::Large,
        };
        let html = fancy_markup(&options, &mut Fixed(0.5)).unwrap();
        assert!(html.starts_with(
            "<div class=\"fancy-wrapper\"><div class=\"fancy-star\">★</div><div class=\"fancy-layer\""
        ));
        assert_eq!(html.matches("class=\"fancy-layer\"").count(), 7);
        assert_eq!(html.matches("class=\"fancy-ornament\"").count(), 42);
        assert!(html.contains("left: 50%; top: 50%; background: hsl(90 90% 60%)"));
        assert!(html.contains("<div class=\"fancy-trunk\"></div>"));
    }

    /// Markup outside any `pre`, where whitespace would become text nodes.
    fn outside_pre(html: &str) -> String {
        match (html.find("<pre"), html.find("</pre>")) {
            (Some(start), Some(end)) => format!("{}{}", &html[..start], &html[end..]),
            _ => html.to_string(),
        }
    }

    fn assert_no_whitespace_nodes(html: &str) {
        let outside = outside_pre(html);
        assert!(!outside.contains('\n'), "newline in {outside:?}");
        assert!(!outside.contains("> "), "leading space text in {outside:?}");
        assert!(!outside.contains(" <"), "trailing space text in {outside:?}");
    }

    #[test]
    fn test_ascii_markup_has_no_whitespace_nodes() {
        let html = ascii_markup(&AsciiOptions::default()).unwrap();
        assert_no_whitespace_nodes(&html);
        assert!(html.ends_with("</pre></div>"));
    }

    #[test]
    fn test_fancy_markup_has_no_whitespace_nodes() {
        let options = FancyOptions {
            size: TreeSize::Small,
        };
        let html = fancy_markup(&options, &mut Fixed(0.25)).unwrap();
        assert_no_whitespace_nodes(&html);
        assert!(html.ends_with("<div class=\"fancy-trunk\"></div></div>"));
    }

    #[test]
    fn test_pre_keeps_row_spacing() {
        let options: AsciiOptions = TreeOptions {
            data: Some(vec![" * ".into()]),
            ..TreeOptions::default()
        }
        .into();
        let html = ascii_markup(&options).unwrap();
        assert!(html.contains(
            "<pre class=\"ascii-tree\"><div><span> </span><span class=\"star\">*</span><span> </span></div></pre>"
        ));
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }
}
